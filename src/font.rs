use crate::{
    canvas::Canvas,
    refs::{ObjectReferences, RefType},
    BolayError, Pt,
};
use log::warn;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;
use std::fmt;

/// A parsed font object. Fonts can be TTF or OTF fonts, and will be embedded in their
/// entirety in the generated PDF, so large fonts may dramatically increase the size of
/// the generated PDF.
///
/// Fonts are registered with a [PdfCanvas](crate::PdfCanvas) under a [FontKey] and referred
/// to by that key afterwards.
pub struct Font {
    pub face: OwnedFace,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family())
            .field("units_per_em", &self.face().units_per_em())
            .finish()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, BolayError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Scale factor from font design units to 1/1000 em, the unit of PDF glyph metrics
    fn per_mille(&self) -> f32 {
        1000.0 / self.face().units_per_em() as f32
    }

    /// The height of capital letters in 1/1000 em. Faces with an OS/2 table older than
    /// version 2 don't record one, so the top of their 'H' is measured instead, or the
    /// ascender used if there is no 'H'. This is the value written into the embedded
    /// font descriptor.
    pub fn cap_height(&self) -> f32 {
        let face = self.face();
        let units = face
            .capital_height()
            .filter(|&h| h > 0)
            .or_else(|| {
                face.glyph_index('H')
                    .and_then(|gid| face.glyph_bounding_box(gid))
                    .map(|bbox| bbox.y_max)
            })
            .unwrap_or_else(|| face.ascender());
        units as f32 * self.per_mille()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}')
    }

    /// The glyph that will be drawn for `ch`: its own glyph, or U+FFFD, or '?', or
    /// `.notdef` as a last resort
    pub fn glyph_for(&self, ch: char) -> u16 {
        self.glyph_id(ch).unwrap_or_else(|| {
            warn!("font has no glyph for {ch:?}, substituting");
            self.replacement_glyph_id()
                .or_else(|| self.glyph_id('?'))
                .unwrap_or(0)
        })
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = size / self.face().units_per_em() as f32;
        // advances are summed in font units so the only rounding is in the scaling
        let advance: u64 = text
            .chars()
            .map(|ch| self.glyph_for(ch))
            .map(|gid| {
                self.face()
                    .glyph_hor_advance(GlyphId(gid))
                    .unwrap_or_default() as u64
            })
            .sum();
        scaling * advance as f32
    }

    /// Every glyph reachable from a unicode cmap subtable, with the first character
    /// that maps to it
    fn glyph_chars(&self) -> BTreeMap<u16, char> {
        let mut map: BTreeMap<u16, char> = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                    map.entry(gid.0).or_insert(ch);
                }
            });
        }

        map
    }

    fn advance_per_mille(&self, gid: u16) -> f32 {
        self.face().glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32 * self.per_mille()
    }

    /// Embed the font as a Type0 font with an Identity-H encoding, named `/F{index}`
    pub(crate) fn write(&self, refs: &mut ObjectReferences, index: usize, pdf: &mut Pdf) {
        let font_ref = refs.alloc(RefType::Font(index));
        let glyphs = self.glyph_chars();
        let cid_ref = self.write_cid_font(refs, index, &glyphs, pdf);
        let to_unicode_ref = self.write_to_unicode(refs, index, &glyphs, pdf);

        let base_font = format!("F{index}");
        pdf.type0_font(font_ref)
            .base_font(Name(base_font.as_bytes()))
            .encoding_predefined(Name(b"Identity-H"))
            .descendant_font(cid_ref)
            .to_unicode(to_unicode_ref);
    }

    fn write_cid_font(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        glyphs: &BTreeMap<u16, char>,
        pdf: &mut Pdf,
    ) -> Ref {
        let descriptor_ref = self.write_descriptor(refs, index, pdf);
        let id = refs.alloc(RefType::CidFont(index));
        let base_font = format!("F{index}");

        let mut cid_font = pdf.cid_font(id);
        cid_font
            .subtype(CidFontType::Type2)
            .base_font(Name(base_font.as_bytes()))
            .system_info(SystemInfo {
                registry: Str(b"Adobe"),
                ordering: Str(b"Identity"),
                supplement: 0,
            })
            .font_descriptor(descriptor_ref)
            .default_width(self.advance_per_mille(0));

        // runs of consecutive glyph ids share one width array
        let mut widths = cid_font.widths();
        let mut run_start: u16 = 0;
        let mut run: Vec<f32> = Vec::new();
        for &gid in glyphs.keys() {
            if !run.is_empty() && gid as usize != run_start as usize + run.len() {
                widths.consecutive(run_start, run.drain(..));
            }
            if run.is_empty() {
                run_start = gid;
            }
            run.push(self.advance_per_mille(gid));
        }
        if !run.is_empty() {
            widths.consecutive(run_start, run);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_descriptor(&self, refs: &mut ObjectReferences, index: usize, pdf: &mut Pdf) -> Ref {
        let data_ref = refs.alloc(RefType::FontData(index));
        let data = self.face.as_slice();
        pdf.stream(data_ref, data)
            .pair(Name(b"Length1"), data.len() as i32);

        let face = self.face();
        let scale = self.per_mille();
        let bbox = face.global_bounding_box();

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }

        let id = refs.alloc(RefType::FontDescriptor(index));
        let name = format!("F{index}");
        let family = self.family().unwrap_or_else(|| name.clone());

        pdf.font_descriptor(id)
            .name(Name(name.as_bytes()))
            .family(Str(family.as_bytes()))
            .flags(flags)
            .bbox(pdf_writer::Rect::new(
                bbox.x_min as f32 * scale,
                bbox.y_min as f32 * scale,
                bbox.x_max as f32 * scale,
                bbox.y_max as f32 * scale,
            ))
            // nominal; the outlines are embedded
            .italic_angle(0.0)
            .ascent(face.ascender() as f32 * scale)
            .descent(face.descender() as f32 * scale)
            .cap_height(self.cap_height())
            .stem_v(80.0)
            .font_file2(data_ref);

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        glyphs: &BTreeMap<u16, char>,
        pdf: &mut Pdf,
    ) -> Ref {
        let id = refs.alloc(RefType::ToUnicode(index));

        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries
        let entries: Vec<(u16, char)> = glyphs.iter().map(|(&gid, &ch)| (gid, ch)).collect();
        for block in entries.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(gid, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                cmap.push_str(&format!("<{gid:04x}> <{units}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }
        cmap.push_str("endcmap\nCMapName currentdict /CMap defineresource pop\nend\nend\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        pdf.stream(id, &compressed).filter(Filter::FlateDecode);

        id
    }
}

/// Identifies a registered font by family and style, e.g. `("Noto Sans", "B")`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub family: String,
    pub style: String,
}

impl FontKey {
    pub fn new<F: ToString, S: ToString>(family: F, style: S) -> FontKey {
        FontKey {
            family: family.to_string(),
            style: style.to_string(),
        }
    }

    /// The string a font is registered under: the lowercased family followed by the style
    pub fn id(&self) -> String {
        format!("{}{}", self.family.to_lowercase(), self.style)
    }
}

impl fmt::Display for FontKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// A registered font at a particular size, with its cap height resolved
#[derive(Debug, Clone, PartialEq)]
pub struct FontInstance {
    key: FontKey,
    size: f32,
    size_pt: Pt,
    cap_height: f32,
}

impl FontInstance {
    /// Size the font registered under `key` to `size` working units. Fails if the key
    /// was never registered with the canvas.
    pub fn new<C: Canvas>(canvas: &C, key: FontKey, size: f32) -> Result<FontInstance, BolayError> {
        let size_pt = canvas.unit().to_pt(size);
        let cap_height = canvas.cap_height(&key)? * size / 1000.0;
        Ok(FontInstance {
            key,
            size,
            size_pt,
            cap_height,
        })
    }

    pub fn key(&self) -> &FontKey {
        &self.key
    }

    /// Font size in working units
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Font size in points
    pub fn size_pt(&self) -> Pt {
        self.size_pt
    }

    /// Cap height in working units
    pub fn cap_height(&self) -> f32 {
        self.cap_height
    }

    /// Make this font current on the canvas
    pub fn select<C: Canvas>(&self, canvas: &mut C) -> Result<(), BolayError> {
        canvas.set_font(&self.key, self.size_pt)
    }
}
