use crate::font::Font;
use crate::refs::{ObjectReferences, RefType};
use crate::{Pt, Rgba};
use id_arena::Arena;
use pdf_writer::{types::TextRenderingMode, Content, Finish, Name, Pdf, Ref, Str};

/// A single page and the content stream being built for it. Coordinates handed to
/// the drawing helpers are in points, measured from the top-left corner.
pub(crate) struct Page {
    pub width: Pt,
    pub height: Pt,
    content: Content,
    /// open `q` operators, so that a restore never pops past the page's own state
    depth: usize,
}

fn font_name(index: usize) -> String {
    format!("F{index}")
}

impl Page {
    pub fn new(width: Pt, height: Pt) -> Page {
        Page {
            width,
            height,
            content: Content::new(),
            depth: 0,
        }
    }

    /// Convert a top-down y coordinate to PDF user space
    fn flip(&self, y: Pt) -> f32 {
        self.height.0 - y.0
    }

    pub fn save_state(&mut self) {
        self.content.save_state();
        self.depth += 1;
    }

    pub fn restore_state(&mut self) {
        if self.depth > 0 {
            self.content.restore_state();
            self.depth -= 1;
        }
    }

    pub fn rect(
        &mut self,
        (x, y, width, height): (Pt, Pt, Pt, Pt),
        line_width: Pt,
        stroke: Option<Rgba>,
        fill: Option<Rgba>,
    ) {
        let bottom = self.flip(y + height);
        if let Some(colour) = stroke {
            let (r, g, b) = colour.rgb_f32();
            self.content.set_line_width(line_width.0);
            self.content.set_stroke_rgb(r, g, b);
        }
        if let Some(colour) = fill {
            let (r, g, b) = colour.rgb_f32();
            self.content.set_fill_rgb(r, g, b);
        }

        self.content.rect(x.0, bottom, width.0, height.0);
        match (stroke, fill) {
            (Some(_), Some(_)) => self.content.fill_nonzero_and_stroke(),
            (None, Some(_)) => self.content.fill_nonzero(),
            _ => self.content.stroke(),
        };
    }

    /// Show a run of glyph ids with the baseline starting at `(x, y)`
    pub fn glyphs(
        &mut self,
        (x, y): (Pt, Pt),
        font_index: usize,
        size: Pt,
        glyphs: &[u16],
        paint: TextPaint,
    ) {
        let encoded: Vec<u8> = glyphs.iter().flat_map(|gid| gid.to_be_bytes()).collect();
        let baseline = self.flip(y);

        self.content.begin_text();
        self.content
            .set_font(Name(font_name(font_index).as_bytes()), size.0);
        match paint {
            TextPaint::Fill(colour) => {
                let (r, g, b) = colour.rgb_f32();
                self.content.set_text_rendering_mode(TextRenderingMode::Fill);
                self.content.set_fill_rgb(r, g, b);
            }
            TextPaint::Stroke(colour, line_width) => {
                let (r, g, b) = colour.rgb_f32();
                self.content.set_text_rendering_mode(TextRenderingMode::Stroke);
                self.content.set_stroke_rgb(r, g, b);
                self.content.set_line_width(line_width.0);
            }
        }
        self.content.next_line(x.0, baseline);
        self.content.show(Str(&encoded));
        self.content.end_text();
    }

    pub fn write(
        self,
        refs: &mut ObjectReferences,
        page_index: usize,
        page_tree: Ref,
        fonts: &Arena<Font>,
        pdf: &mut Pdf,
    ) {
        let id = refs.alloc(RefType::Page(page_index));
        let content_id = refs.alloc(RefType::ContentForPage(page_index));

        let mut page = pdf.page(id);
        page.media_box(pdf_writer::Rect::new(0.0, 0.0, self.width.0, self.height.0));
        page.parent(page_tree);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(font_name(font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();
        page.finish();

        let mut content = self.content;
        for _ in 0..self.depth {
            content.restore_state();
        }
        let rendered = content.finish();
        pdf.stream(content_id, &rendered);
    }
}

/// How [Page::glyphs] paints text
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum TextPaint {
    Fill(Rgba),
    /// Stroke colour and line width
    Stroke(Rgba, Pt),
}
