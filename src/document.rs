use crate::{
    canvas::{BoxStyle, Canvas, TextMode},
    font::{Font, FontKey},
    page::{Page, TextPaint},
    pagesize::{size_in_unit, Orientation, PageFormat},
    refs::{ObjectReferences, RefType},
    BolayError, Pt, Rect, Rgba, Unit,
};
use id_arena::{Arena, Id};
use log::debug;
use pdf_writer::{Pdf, Ref};
use std::{collections::HashMap, io::Write};

/// Format used by [PdfCanvas::add_page] when none is given
pub const DEFAULT_FORMAT: PageFormat<'static> = PageFormat::Named("a4");

/// Line width of a new canvas, in points (0.2 mm)
const DEFAULT_LINE_WIDTH: Pt = Pt(0.567);

#[derive(Debug, Clone, PartialEq)]
struct GraphicsState {
    font: Option<(Id<Font>, Pt)>,
    text_colour: Rgba,
    draw_colour: Rgba,
    fill_colour: Rgba,
    line_width: f32,
    text_mode: TextMode,
}

/// A [Canvas] that builds a PDF document with [pdf_writer].
///
/// Fonts are registered under a [FontKey] with [PdfCanvas::add_font]; drawing goes
/// to the page most recently added with [PdfCanvas::add_page]. Nothing is rendered
/// until [PdfCanvas::write] is called.
pub struct PdfCanvas {
    unit: Unit,
    fonts: Arena<Font>,
    font_ids: HashMap<String, Id<Font>>,
    pages: Vec<Page>,
    state: GraphicsState,
    saved: Vec<GraphicsState>,
}

impl Default for PdfCanvas {
    fn default() -> Self {
        PdfCanvas::new(Unit::default())
    }
}

impl PdfCanvas {
    /// Create an empty document whose drawing calls are measured in `unit`
    pub fn new(unit: Unit) -> PdfCanvas {
        PdfCanvas {
            unit,
            fonts: Arena::new(),
            font_ids: HashMap::new(),
            pages: Vec::new(),
            state: GraphicsState {
                font: None,
                text_colour: Rgba::default(),
                draw_colour: Rgba::default(),
                fill_colour: Rgba::default(),
                line_width: unit.from_pt(DEFAULT_LINE_WIDTH),
                text_mode: TextMode::Fill,
            },
            saved: Vec::new(),
        }
    }

    /// Register a font under `key`. Registering a second font under the same key
    /// replaces the first for subsequent lookups.
    pub fn add_font(&mut self, key: &FontKey, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        debug!("registered font {key} as F{}", id.index());
        self.font_ids.insert(key.id(), id);
        id
    }

    /// The font registered under `key`
    pub fn font(&self, key: &FontKey) -> Result<&Font, BolayError> {
        self.font_id(key).map(|id| &self.fonts[id])
    }

    fn font_id(&self, key: &FontKey) -> Result<Id<Font>, BolayError> {
        self.font_ids
            .get(&key.id())
            .copied()
            .ok_or_else(|| BolayError::UnknownFont(key.id()))
    }

    /// Start a new page; subsequent drawing goes to it. A `format` of `None` uses
    /// [DEFAULT_FORMAT]. Returns the page's index and its (width, height) in working units.
    pub fn add_page(
        &mut self,
        orientation: Orientation,
        format: Option<PageFormat<'_>>,
    ) -> Result<(usize, (f32, f32)), BolayError> {
        let format = format.unwrap_or(DEFAULT_FORMAT);
        let (width, height) =
            size_in_unit(orientation, Some(format), self.unit)?.unwrap_or_default();

        let page = Page::new(self.unit.to_pt(width), self.unit.to_pt(height));
        self.pages.push(page);
        let index = self.pages.len() - 1;
        debug!(
            "added page {index}: {format:?} {orientation:?}, {width} x {height} {:?}",
            self.unit
        );
        Ok((index, (width, height)))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&mut self) -> Result<&mut Page, BolayError> {
        self.pages.last_mut().ok_or(BolayError::NoPage)
    }

    fn to_pt(&self, v: f32) -> Pt {
        self.unit.to_pt(v)
    }

    /// Render the document and write it to `w`. The whole PDF is built in memory first.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), BolayError> {
        let PdfCanvas { fonts, pages, .. } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.alloc(RefType::Catalog);
        let page_tree_id = refs.alloc(RefType::PageTree);

        let mut pdf = Pdf::new();

        let page_refs: Vec<Ref> = (0..pages.len())
            .map(|i| refs.alloc(RefType::Page(i)))
            .collect();
        pdf.pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id.index(), &mut pdf);
        }

        for (index, page) in pages.into_iter().enumerate() {
            page.write(&mut refs, index, page_tree_id, &fonts, &mut pdf);
        }

        pdf.catalog(catalog_id).pages(page_tree_id);

        w.write_all(&pdf.finish())?;
        Ok(())
    }
}

impl Canvas for PdfCanvas {
    fn unit(&self) -> Unit {
        self.unit
    }

    fn cap_height(&self, key: &FontKey) -> Result<f32, BolayError> {
        self.font(key).map(Font::cap_height)
    }

    fn set_font(&mut self, key: &FontKey, size: Pt) -> Result<(), BolayError> {
        let id = self.font_id(key)?;
        self.state.font = Some((id, size));
        Ok(())
    }

    fn string_width(&self, text: &str) -> Result<f32, BolayError> {
        let (id, size) = self.state.font.ok_or(BolayError::NoFontSelected)?;
        Ok(self.unit.from_pt(self.fonts[id].width_of_text(text, size)))
    }

    fn set_text_colour(&mut self, colour: Rgba) {
        self.state.text_colour = colour;
    }

    fn set_draw_colour(&mut self, colour: Rgba) {
        self.state.draw_colour = colour;
    }

    fn set_fill_colour(&mut self, colour: Rgba) {
        self.state.fill_colour = colour;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn set_text_mode(&mut self, mode: TextMode) {
        self.state.text_mode = mode;
    }

    fn rect(&mut self, rect: Rect, style: BoxStyle) -> Result<(), BolayError> {
        let bounds = (
            self.to_pt(rect.x()),
            self.to_pt(rect.y()),
            self.to_pt(rect.width()),
            self.to_pt(rect.height()),
        );
        let line_width = self.to_pt(self.state.line_width);
        let (stroke, fill) = match style {
            BoxStyle::Stroke => (Some(self.state.draw_colour), None),
            BoxStyle::Fill => (None, Some(self.state.fill_colour)),
            BoxStyle::FillStroke => (Some(self.state.draw_colour), Some(self.state.fill_colour)),
        };

        self.page()?.rect(bounds, line_width, stroke, fill);
        Ok(())
    }

    fn text(&mut self, x: f32, y: f32, text: &str) -> Result<(), BolayError> {
        let (id, size) = self.state.font.ok_or(BolayError::NoFontSelected)?;
        let glyphs: Vec<u16> = text.chars().map(|ch| self.fonts[id].glyph_for(ch)).collect();
        let paint = match self.state.text_mode {
            TextMode::Fill => TextPaint::Fill(self.state.text_colour),
            TextMode::Stroke => {
                TextPaint::Stroke(self.state.draw_colour, self.to_pt(self.state.line_width))
            }
        };
        let origin = (self.to_pt(x), self.to_pt(y));

        self.page()?.glyphs(origin, id.index(), size, &glyphs, paint);
        Ok(())
    }

    fn save_state(&mut self) {
        self.saved.push(self.state.clone());
        if let Some(page) = self.pages.last_mut() {
            page.save_state();
        }
    }

    fn restore_state(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
        if let Some(page) = self.pages.last_mut() {
            page.restore_state();
        }
    }
}
