//! The drawing backend seam.
//!
//! Everything in the crate that puts marks on a page does so through [Canvas]. The
//! canvas is stateful in the same way a PDF content stream is: the current font,
//! colours, line width and text rendering mode persist between calls until changed,
//! and [Canvas::save_state] / [Canvas::restore_state] bracket temporary changes.
//!
//! Coordinates are in the canvas' working [Unit], with the origin at the top-left
//! corner of the page and y growing downwards.

use crate::{BolayError, FontKey, Pt, Rect, Rgba, Unit};

/// How rectangles are painted
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoxStyle {
    /// Outline only, in the draw colour
    Stroke,
    /// Interior only, in the fill colour
    Fill,
    /// Interior in the fill colour, then the outline in the draw colour
    FillStroke,
}

/// How glyphs are painted by [Canvas::text]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TextMode {
    /// Glyphs are filled with the text colour
    #[default]
    Fill,
    /// Glyph outlines are stroked with the draw colour and line width
    Stroke,
}

pub trait Canvas {
    /// The working unit of all coordinates and lengths passed to the canvas
    fn unit(&self) -> Unit;

    /// Cap height of the font registered under `key`, in 1/1000 em
    fn cap_height(&self, key: &FontKey) -> Result<f32, BolayError>;

    /// Select the font used by [Canvas::string_width] and [Canvas::text]
    fn set_font(&mut self, key: &FontKey, size: Pt) -> Result<(), BolayError>;

    /// Width of `text` in the current font, in working units
    fn string_width(&self, text: &str) -> Result<f32, BolayError>;

    fn set_text_colour(&mut self, colour: Rgba);

    /// Colour used for strokes: box outlines and stroked text
    fn set_draw_colour(&mut self, colour: Rgba);

    fn set_fill_colour(&mut self, colour: Rgba);

    /// Line width in working units
    fn set_line_width(&mut self, width: f32);

    fn set_text_mode(&mut self, mode: TextMode);

    /// Paint a rectangle with the current colours and line width
    fn rect(&mut self, rect: Rect, style: BoxStyle) -> Result<(), BolayError>;

    /// Draw `text` in the current font with its baseline starting at `(x, y)`
    fn text(&mut self, x: f32, y: f32, text: &str) -> Result<(), BolayError>;

    /// Push the graphics state (font, colours, line width, text mode)
    fn save_state(&mut self);

    /// Pop the graphics state pushed by the matching [Canvas::save_state]
    fn restore_state(&mut self);

    /// Run `draw` with text stroking enabled at `line_width` in `colour`. The previous
    /// state is restored afterwards whether or not `draw` succeeds.
    fn with_text_stroke<F>(
        &mut self,
        line_width: f32,
        colour: Rgba,
        draw: F,
    ) -> Result<(), BolayError>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<(), BolayError>,
    {
        self.save_state();
        self.set_text_mode(TextMode::Stroke);
        self.set_line_width(line_width);
        self.set_draw_colour(colour);
        let result = draw(self);
        self.restore_state();
        result
    }
}
