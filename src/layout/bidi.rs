use ar_reshaper::ArabicReshaper;
use log::debug;
use std::borrow::Cow;
use unicode_bidi::{bidi_class, BidiClass, BidiInfo, Level};
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Whether any character in `text` is strongly right-to-left (bidi class R or AL)
pub fn has_rtl(text: &str) -> bool {
    text.chars()
        .any(|ch| matches!(bidi_class(ch), BidiClass::R | BidiClass::AL))
}

/// Prepare a single line of text for drawing glyph by glyph, left to right.
///
/// Text with right-to-left characters is reshaped into contextual Arabic letter
/// forms, reordered for display with a right-to-left base direction, and stripped
/// of invisible format characters (general category Cf). Anything else is returned
/// untouched.
pub fn visual_order(text: &str) -> Cow<'_, str> {
    if !has_rtl(text) {
        return Cow::Borrowed(text);
    }

    let reshaped = ArabicReshaper::default().reshape(text);
    let bidi = BidiInfo::new(&reshaped, Some(Level::rtl()));

    let mut display = String::with_capacity(reshaped.len());
    for paragraph in &bidi.paragraphs {
        let line = paragraph.range.clone();
        display.extend(
            bidi.reorder_line(paragraph, line)
                .chars()
                .filter(|ch| ch.general_category() != GeneralCategory::Format),
        );
    }

    debug!("reordered {text:?} for display as {display:?}");
    Cow::Owned(display)
}
