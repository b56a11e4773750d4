use super::bidi::visual_order;
use crate::canvas::Canvas;
use crate::font::{FontInstance, FontKey};
use crate::{BolayError, Rect, Rgba};
use log::debug;

const SHRINK_BIAS: f32 = 1.0 - 8.0 * f32::EPSILON;

/// Horizontal justification within a text box
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical justification within a text box. Text is positioned by its cap height,
/// not its full line height, so descenders may hang below the box.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// A stroked outline drawn behind text to keep it legible on busy backgrounds
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Halo {
    pub colour: Rgba,
    /// Line width as a fraction of the font's point size
    pub line_fraction: f32,
}

/// How [OneLineTextBox::draw_text] paints and places its text
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub colour: Rgba,
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Scale the font down once so the text fits the box's width
    pub shrink_to_fit: bool,
    pub halo: Option<Halo>,
}

impl TextStyle {
    pub fn new(colour: Rgba) -> TextStyle {
        TextStyle {
            colour,
            ..Default::default()
        }
    }

    pub fn align(mut self, h_align: HAlign, v_align: VAlign) -> TextStyle {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    pub fn shrink_to_fit(mut self) -> TextStyle {
        self.shrink_to_fit = true;
        self
    }

    pub fn halo(mut self, colour: Rgba, line_fraction: f32) -> TextStyle {
        self.halo = Some(Halo {
            colour,
            line_fraction,
        });
        self
    }
}

/// A box holding a single line of text in a particular font.
///
/// The text is drawn inside the box's rectangle inset by a margin. Unless given
/// explicitly, the margin is whatever centres one line of the font's cap height
/// vertically in the rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct OneLineTextBox {
    rect: Rect,
    font: FontInstance,
    margin: f32,
    usable: Rect,
}

impl OneLineTextBox {
    /// `size` is the font size in the canvas' working unit. Fails if `key` was never
    /// registered with the canvas.
    ///
    /// Only a `margin` of `None` selects the centring default; `Some(0.0)` is honoured
    /// as a zero margin rather than treated as "unset".
    pub fn new<C: Canvas>(
        canvas: &C,
        rect: Rect,
        key: FontKey,
        size: f32,
        margin: Option<f32>,
    ) -> Result<OneLineTextBox, BolayError> {
        let font = FontInstance::new(canvas, key, size)?;
        let margin = margin.unwrap_or_else(|| ((rect.height() - font.cap_height()) / 2.0).max(0.0));
        let mut usable = rect;
        usable.inset(margin);

        Ok(OneLineTextBox {
            rect,
            font,
            margin,
            usable,
        })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The font the next line will be drawn in. Shrinking to fit replaces it.
    pub fn font_instance(&self) -> &FontInstance {
        &self.font
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// The area text is justified within: the box's rectangle inset by the margin
    pub fn usable_rect(&self) -> Rect {
        self.usable
    }

    /// Draw `text` and return the rectangle it occupies: from the left edge of the
    /// text at its cap height down to its baseline.
    ///
    /// Shrinking to fit is a single proportional step. Glyph widths don't always scale
    /// linearly with the font size, so the shrunk text may still overflow slightly.
    pub fn draw_text<C: Canvas>(
        &mut self,
        canvas: &mut C,
        text: &str,
        style: &TextStyle,
    ) -> Result<Rect, BolayError> {
        let text = visual_order(text);

        self.font.select(canvas)?;
        let mut width = canvas.string_width(&text)?;

        let available = self.usable.width();
        if style.shrink_to_fit && width > 0.0 && width > available {
            // biased down so rounding in the re-measurement can't land just past the edge
            let ratio = available / width * SHRINK_BIAS;
            let key = self.font.key().clone();
            self.font = FontInstance::new(canvas, key, ratio * self.font.size())?;
            self.font.select(canvas)?;
            width = canvas.string_width(&text)?;
            debug!(
                "shrunk {:?} by {ratio} to {} pt, {width} wide in {available}",
                text,
                self.font.size_pt()
            );
        }

        let cap_height = self.font.cap_height();
        let area = self.usable;

        let x = match style.h_align {
            HAlign::Left => area.x(),
            HAlign::Center => area.x() + (area.width() - width) / 2.0,
            HAlign::Right => area.x() + area.width() - width,
        };
        let baseline = match style.v_align {
            VAlign::Top => area.y() + cap_height,
            VAlign::Middle => area.y() + (area.height() + cap_height) / 2.0,
            VAlign::Bottom => area.y() + area.height(),
        };

        if let Some(halo) = style.halo {
            let line_width = halo.line_fraction * self.font.size_pt().0;
            canvas.with_text_stroke(line_width, halo.colour, |canvas| {
                canvas.text(x, baseline, &text)
            })?;
        }

        canvas.set_text_colour(style.colour);
        canvas.text(x, baseline, &text)?;

        Ok(Rect::new(x, baseline - cap_height, width, cap_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::TextMode;
    use crate::pagesize::Orientation;
    use crate::testing::{dejavu_sans, Op, RecordingCanvas};
    use crate::{PdfCanvas, Pt, Unit};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn key() -> FontKey {
        FontKey::new("Test Sans", "")
    }

    fn canvas() -> RecordingCanvas {
        RecordingCanvas::new(Unit::In).with_font(&key(), 700.0)
    }

    /// A 0.5in text box in the test font
    fn text_box(canvas: &RecordingCanvas, rect: Rect, margin: Option<f32>) -> OneLineTextBox {
        OneLineTextBox::new(canvas, rect, key(), 0.5, margin).unwrap()
    }

    fn four_by_one() -> Rect {
        Rect::new(0.0, 0.0, 4.0, 1.0)
    }

    #[test]
    fn default_margin_centres_the_cap_height() {
        let canvas = canvas();
        let tb = text_box(&canvas, four_by_one(), None);
        assert!(close(tb.font_instance().cap_height(), 0.35));
        assert_eq!(tb.font_instance().size_pt(), Pt(36.0));
        assert!(close(tb.margin(), 0.325));
        assert!(close(tb.usable_rect().width(), 3.35));
    }

    #[test]
    fn default_margin_is_never_negative() {
        let canvas = canvas();
        let tb = text_box(&canvas, Rect::new(0.0, 0.0, 4.0, 0.1), None);
        assert_eq!(tb.margin(), 0.0);
        assert_eq!(tb.usable_rect(), tb.rect());
    }

    #[test]
    fn zero_cap_height_uses_half_the_height() {
        let zero = FontKey::new("Blank", "I");
        let canvas = RecordingCanvas::new(Unit::In).with_font(&zero, 0.0);
        let tb = OneLineTextBox::new(&canvas, four_by_one(), zero, 0.5, None).unwrap();
        assert_eq!(tb.margin(), 0.5);
    }

    #[test]
    fn explicit_margin() {
        let canvas = canvas();
        let tb = text_box(&canvas, Rect::new(1.0, 1.0, 4.0, 1.0), Some(0.1));
        assert_eq!(tb.margin(), 0.1);
        assert!(close(tb.usable_rect().x(), 1.1));
        assert!(close(tb.usable_rect().height(), 0.8));
    }

    #[test]
    fn explicit_zero_margin_is_kept() {
        let canvas = canvas();
        let tb = text_box(&canvas, four_by_one(), Some(0.0));
        assert_eq!(tb.margin(), 0.0);
        assert_eq!(tb.usable_rect(), four_by_one());
    }

    #[test]
    fn unregistered_font_fails() {
        let canvas = canvas();
        let missing = FontKey::new("Nope", "B");
        let result = OneLineTextBox::new(&canvas, four_by_one(), missing, 0.5, None);
        assert!(matches!(result, Err(BolayError::UnknownFont(id)) if id == "nopeB"));
    }

    #[test]
    fn horizontal_justification() {
        let mut canvas = canvas();
        // 4 chars at 0.25in each
        let expected = [(HAlign::Left, 0.1), (HAlign::Center, 1.5), (HAlign::Right, 2.9)];
        for (h_align, expected_x) in expected {
            let mut tb = text_box(&canvas, four_by_one(), Some(0.1));
            let style = TextStyle::new(Rgba::default()).align(h_align, VAlign::Top);
            let occupied = tb.draw_text(&mut canvas, "abcd", &style).unwrap();
            assert!(close(occupied.x(), expected_x), "{h_align:?}: {occupied:?}");
            assert!(close(occupied.width(), 1.0));
        }
    }

    #[test]
    fn vertical_justification_is_anchored_on_cap_height() {
        let mut canvas = canvas();
        for (v_align, baseline) in [
            (VAlign::Top, 0.1 + 0.35),
            (VAlign::Middle, 0.1 + (0.8 + 0.35) / 2.0),
            (VAlign::Bottom, 0.9),
        ] {
            let mut tb = text_box(&canvas, four_by_one(), Some(0.1));
            let style = TextStyle::new(Rgba::default()).align(HAlign::Left, v_align);
            let occupied = tb.draw_text(&mut canvas, "x", &style).unwrap();

            let (_, y, _) = canvas.texts().pop().unwrap();
            assert!(close(y, baseline), "{v_align:?}: {y}");
            assert!(close(occupied.y_max(), baseline));
            assert!(close(occupied.height(), 0.35));
        }
    }

    #[test]
    fn shrink_to_fit_scales_the_font_once() {
        let mut canvas = canvas();
        let mut tb = text_box(&canvas, four_by_one(), None);
        let usable = tb.usable_rect().width();

        // 20 chars at 0.25in is 5in, wider than the 3.35in available
        let text = "abcdefghijklmnopqrst";
        let style = TextStyle::new(Rgba::default()).shrink_to_fit();
        let occupied = tb.draw_text(&mut canvas, text, &style).unwrap();

        assert!(occupied.width() <= usable, "{occupied:?}");
        assert!(close(tb.font_instance().size(), 0.5 * usable / 5.0));
        assert!(close(occupied.height(), tb.font_instance().cap_height()));
        // the margin is fixed when the box is made
        assert!(close(tb.margin(), 0.325));

        let fonts: Vec<&Op> = canvas.ops.iter().filter(|op| matches!(op, Op::Font(..))).collect();
        assert_eq!(fonts.len(), 2);
    }

    #[test]
    fn without_shrinking_text_overflows() {
        let mut canvas = canvas();
        let mut tb = text_box(&canvas, four_by_one(), None);
        let style = TextStyle::new(Rgba::default());
        let occupied = tb.draw_text(&mut canvas, "abcdefghijklmnopqrst", &style).unwrap();
        assert!(close(occupied.width(), 5.0));
        assert_eq!(tb.font_instance().size(), 0.5);
    }

    #[test]
    fn empty_text_occupies_no_width() {
        let mut canvas = canvas();
        let mut tb = text_box(&canvas, four_by_one(), Some(0.1));
        let style = TextStyle::new(Rgba::default())
            .align(HAlign::Center, VAlign::Middle)
            .shrink_to_fit();
        let occupied = tb.draw_text(&mut canvas, "", &style).unwrap();
        assert_eq!(occupied.width(), 0.0);
        assert!(close(occupied.x(), 2.0));
        assert_eq!(tb.font_instance().size(), 0.5);
    }

    #[test]
    fn halo_is_stroked_first_in_a_scoped_state() {
        let mut canvas = canvas();
        let mut tb = text_box(&canvas, four_by_one(), Some(0.1));
        let white = Rgba::rgb(255, 255, 255);
        let red = Rgba::rgb(255, 0, 0);
        let style = TextStyle::new(red).halo(white, 0.01);
        tb.draw_text(&mut canvas, "hi", &style).unwrap();

        let ops: Vec<Op> = canvas
            .ops
            .iter()
            .filter(|op| !matches!(op, Op::Font(..)))
            .cloned()
            .collect();
        let texts = canvas.texts();
        assert_eq!(
            ops,
            vec![
                Op::Save,
                Op::TextMode(TextMode::Stroke),
                Op::LineWidth(0.01 * 36.0),
                Op::DrawColour(white),
                Op::Text(texts[0].0, texts[0].1, "hi".into()),
                Op::Restore,
                Op::TextColour(red),
                Op::Text(texts[1].0, texts[1].1, "hi".into()),
            ]
        );
        assert_eq!(texts[0], texts[1]);
    }

    #[test]
    fn halo_state_is_restored_when_stroking_fails() {
        let mut canvas = canvas();
        canvas.fail_stroked_text = true;
        let mut tb = text_box(&canvas, four_by_one(), None);
        let style = TextStyle::new(Rgba::default()).halo(Rgba::default(), 0.05);
        assert!(tb.draw_text(&mut canvas, "hi", &style).is_err());
        assert_eq!(canvas.ops.last(), Some(&Op::Restore));
        assert!(canvas.texts().is_empty());
    }

    #[test]
    fn rtl_text_is_drawn_in_visual_order() {
        let mut canvas = canvas();
        let mut tb = text_box(&canvas, four_by_one(), None);
        tb.draw_text(&mut canvas, "\u{200F}שלום", &TextStyle::default()).unwrap();
        assert_eq!(canvas.texts()[0].2, "םולש");
    }

    fn dejavu_canvas(key: &FontKey) -> PdfCanvas {
        let mut canvas = PdfCanvas::new(Unit::In);
        canvas.add_font(key, dejavu_sans());
        canvas.add_page(Orientation::Portrait, None).unwrap();
        canvas
    }

    #[test]
    fn measured_cap_height_sets_the_default_margin() {
        let key = FontKey::new("DejaVu Sans", "");
        let canvas = dejavu_canvas(&key);
        let tb = OneLineTextBox::new(&canvas, four_by_one(), key, 0.5, None).unwrap();
        let cap_height = 0.5 * 1493.0 / 2048.0;
        assert!(close(tb.font_instance().cap_height(), cap_height));
        assert!(close(tb.margin(), (1.0 - cap_height) / 2.0));
    }

    #[test]
    fn shrunk_text_never_exceeds_the_usable_width() {
        let key = FontKey::new("DejaVu Sans", "");
        let mut canvas = dejavu_canvas(&key);
        let style = TextStyle::new(Rgba::default()).shrink_to_fit();

        let cases = [(2.0, 0.3, 27), (3.0, 0.25, 40), (1.0, 0.5, 7), (5.5, 0.2, 101)];
        for (width, size, count) in cases {
            let rect = Rect::new(0.0, 0.0, width, 0.5);
            let mut tb = OneLineTextBox::new(&canvas, rect, key.clone(), size, Some(0.1)).unwrap();
            let usable = tb.usable_rect().width();
            let text = "W".repeat(count);
            let occupied = tb.draw_text(&mut canvas, &text, &style).unwrap();

            assert!(occupied.width() <= usable, "{count} W in {usable}: {occupied:?}");
            assert!(usable - occupied.width() < 1e-4, "{count} W in {usable}: {occupied:?}");
            assert!(tb.font_instance().size() < size);
        }
    }
}
