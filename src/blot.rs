use crate::canvas::{BoxStyle, Canvas};
use crate::layout::{OneLineTextBox, TextStyle};
use crate::{BolayError, FontKey, Point, Rect, Rgba};

/// Something drawable at a location. Composite drawables build themselves out of
/// the primitives on [Blot]; the default does nothing.
pub trait Drawable {
    fn draw<C: Canvas>(&self, _blot: &mut Blot<'_, C>, _position: Point) -> Result<(), BolayError> {
        Ok(())
    }
}

/// Drawing helpers over a borrowed canvas
pub struct Blot<'c, C: Canvas> {
    canvas: &'c mut C,
}

impl<'c, C: Canvas> Blot<'c, C> {
    pub fn new(canvas: &'c mut C) -> Blot<'c, C> {
        Blot { canvas }
    }

    pub fn canvas(&mut self) -> &mut C {
        &mut *self.canvas
    }

    /// Outline `rect` with a `line_width` line in `colour`, filling it first if
    /// `fill` is given
    pub fn draw_box(
        &mut self,
        rect: Rect,
        line_width: f32,
        colour: Rgba,
        fill: Option<Rgba>,
    ) -> Result<(), BolayError> {
        let style = match fill {
            Some(fill) => {
                self.canvas.set_fill_colour(fill);
                BoxStyle::FillStroke
            }
            None => BoxStyle::Stroke,
        };

        self.canvas.set_line_width(line_width);
        self.canvas.set_draw_colour(colour);
        self.canvas.rect(rect, style)
    }

    pub fn fill_box(&mut self, rect: Rect, colour: Rgba) -> Result<(), BolayError> {
        self.canvas.set_fill_colour(colour);
        self.canvas.rect(rect, BoxStyle::Fill)
    }

    /// Make a text box for `rect`; see [OneLineTextBox::new]
    pub fn text_box(
        &self,
        rect: Rect,
        key: FontKey,
        size: f32,
        margin: Option<f32>,
    ) -> Result<OneLineTextBox, BolayError> {
        OneLineTextBox::new(&*self.canvas, rect, key, size, margin)
    }

    /// Draw a line of text in `text_box` on this blot's canvas
    pub fn draw_text(
        &mut self,
        text_box: &mut OneLineTextBox,
        text: &str,
        style: &TextStyle,
    ) -> Result<Rect, BolayError> {
        text_box.draw_text(&mut *self.canvas, text, style)
    }

    /// Draw `drawable` with its origin at `position`
    pub fn place<D: Drawable>(&mut self, drawable: &D, position: Point) -> Result<(), BolayError> {
        drawable.draw(self, position)
    }
}
