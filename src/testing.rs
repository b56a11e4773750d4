//! A [Canvas] with fixed metrics that records every call, for tests that don't want
//! to depend on font files, and the bundled font for tests that do.

use crate::canvas::{BoxStyle, Canvas, TextMode};
use crate::{BolayError, Font, FontKey, Pt, Rect, Rgba, Unit};
use std::collections::HashMap;

/// DejaVu Sans 2.37, under the Bitstream Vera licence in `fonts/DejaVuSans-LICENSE`
pub const DEJAVU_SANS: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

pub fn dejavu_sans() -> Font {
    Font::load(DEJAVU_SANS.to_vec()).expect("bundled font parses")
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    position(haystack, needle).is_some()
}

pub fn position(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Font(FontKey, Pt),
    TextColour(Rgba),
    DrawColour(Rgba),
    FillColour(Rgba),
    LineWidth(f32),
    TextMode(TextMode),
    Rect(Rect, BoxStyle),
    Text(f32, f32, String),
    Save,
    Restore,
}

/// Every character is `advance` em wide
pub struct RecordingCanvas {
    pub unit: Unit,
    pub advance: f32,
    pub cap_heights: HashMap<String, f32>,
    pub font: Option<(FontKey, Pt)>,
    pub ops: Vec<Op>,
    /// make [Canvas::text] fail while in stroke mode
    pub fail_stroked_text: bool,
    mode: TextMode,
    saved_modes: Vec<TextMode>,
}

impl RecordingCanvas {
    pub fn new(unit: Unit) -> RecordingCanvas {
        let _ = env_logger::builder().is_test(true).try_init();
        RecordingCanvas {
            unit,
            advance: 0.5,
            cap_heights: HashMap::new(),
            font: None,
            ops: Vec::new(),
            fail_stroked_text: false,
            mode: TextMode::Fill,
            saved_modes: Vec::new(),
        }
    }

    pub fn with_font(mut self, key: &FontKey, cap_height: f32) -> RecordingCanvas {
        self.cap_heights.insert(key.id(), cap_height);
        self
    }

    pub fn texts(&self) -> Vec<(f32, f32, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(x, y, s) => Some((*x, *y, s.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn unit(&self) -> Unit {
        self.unit
    }

    fn cap_height(&self, key: &FontKey) -> Result<f32, BolayError> {
        self.cap_heights
            .get(&key.id())
            .copied()
            .ok_or_else(|| BolayError::UnknownFont(key.id()))
    }

    fn set_font(&mut self, key: &FontKey, size: Pt) -> Result<(), BolayError> {
        self.cap_height(key)?;
        self.font = Some((key.clone(), size));
        self.ops.push(Op::Font(key.clone(), size));
        Ok(())
    }

    fn string_width(&self, text: &str) -> Result<f32, BolayError> {
        let (_, size) = self.font.as_ref().ok_or(BolayError::NoFontSelected)?;
        Ok(self.unit.from_pt(*size * self.advance) * text.chars().count() as f32)
    }

    fn set_text_colour(&mut self, colour: Rgba) {
        self.ops.push(Op::TextColour(colour));
    }

    fn set_draw_colour(&mut self, colour: Rgba) {
        self.ops.push(Op::DrawColour(colour));
    }

    fn set_fill_colour(&mut self, colour: Rgba) {
        self.ops.push(Op::FillColour(colour));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::LineWidth(width));
    }

    fn set_text_mode(&mut self, mode: TextMode) {
        self.mode = mode;
        self.ops.push(Op::TextMode(mode));
    }

    fn rect(&mut self, rect: Rect, style: BoxStyle) -> Result<(), BolayError> {
        self.ops.push(Op::Rect(rect, style));
        Ok(())
    }

    fn text(&mut self, x: f32, y: f32, text: &str) -> Result<(), BolayError> {
        if self.fail_stroked_text && self.mode == TextMode::Stroke {
            return Err(BolayError::NoPage);
        }
        self.ops.push(Op::Text(x, y, text.to_string()));
        Ok(())
    }

    fn save_state(&mut self) {
        self.saved_modes.push(self.mode);
        self.ops.push(Op::Save);
    }

    fn restore_state(&mut self) {
        self.mode = self.saved_modes.pop().unwrap_or_default();
        self.ops.push(Op::Restore);
    }
}
