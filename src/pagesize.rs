//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width ≤ height), in points.
//! Most sizes come from <https://en.wikipedia.org/wiki/Paper_size>; metric sizes
//! were converted from millimetres and rounded to 1/100 pt.
//!
//! # Available Sizes
//!
//! ## North American
//! `letter`, `legal`, `ledger`, `tabloid`, `executive`
//!
//! ## ANSI
//! `ansi-a` through `ansi-e`
//!
//! ## Architectural
//! `arch-a` through `arch-e`, `arch-e1` through `arch-e3`
//!
//! ## ISO 216 / ISO 217
//! `a0`-`a10`, `b0`-`b10`, `c0`-`c10`, `ra0`-`ra4`, `sra0`-`sra4`
//!
//! ## Photo and print shop sizes
//! `8R`, `11R`, `16R`, `8x10`, `11x14`, `12x18`, `16x20`, `18x24`, `22x28`,
//! `24x36`, `36x48`, `40x60`
//!
//! # Example
//!
//! ```
//! use bolay::pagesize::{size_in_unit, Orientation, PageFormat};
//! use bolay::Unit;
//!
//! let (w, h) = size_in_unit(Orientation::Landscape, Some(PageFormat::Named("letter")), Unit::In)
//!     .expect("letter is a known format")
//!     .expect("a format was given");
//! assert_eq!((w, h), (11.0, 8.5));
//! ```

use crate::units::*;
use crate::BolayError;
use std::str::FromStr;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// Every named format, as (name, (width, height)) in points. Names are case-sensitive.
pub const PAGE_FORMATS: &[(&str, (f32, f32))] = &[
    // north american
    ("letter", (612.00, 792.00)),    // 8.5in x 11in
    ("legal", (612.00, 1008.00)),    // 8.5in x 14in
    ("ledger", (792.00, 1224.00)),   // 11in x 17in
    ("tabloid", (792.00, 1224.00)),  // 11in x 17in
    ("executive", (522.00, 756.00)), // 7.25in x 10.5in
    // ansi
    ("ansi-a", (612.00, 792.00)),   // 8.5in x 11in
    ("ansi-b", (792.00, 1224.00)),  // 11in x 17in
    ("ansi-c", (1224.00, 1584.00)), // 17in x 22in
    ("ansi-d", (1584.00, 2448.00)), // 22in x 34in
    ("ansi-e", (2448.00, 3168.00)), // 34in x 44in
    // architectural
    ("arch-a", (648.00, 864.00)),    // 9in x 12in
    ("arch-b", (864.00, 1296.00)),   // 12in x 18in
    ("arch-c", (1296.00, 1728.00)),  // 18in x 24in
    ("arch-d", (1728.00, 2592.00)),  // 24in x 36in
    ("arch-e", (2592.00, 3456.00)),  // 36in x 48in
    ("arch-e1", (2160.00, 3024.00)), // 30in x 42in
    ("arch-e2", (1872.00, 2736.00)), // 26in x 38in
    ("arch-e3", (1944.00, 2808.00)), // 27in x 39in
    // iso 216
    ("a0", (2383.94, 3370.39)), // 841mm x 1189mm
    ("a1", (1683.78, 2383.94)), // 594mm x 841mm
    ("a2", (1190.55, 1683.78)), // 420mm x 594mm
    ("a3", (841.89, 1190.55)),  // 297mm x 420mm
    ("a4", (595.28, 841.89)),   // 210mm x 297mm
    ("a5", (419.53, 595.28)),   // 148mm x 210mm
    ("a6", (297.64, 419.53)),   // 105mm x 148mm
    ("a7", (209.76, 297.64)),   // 74mm x 105mm
    ("a8", (147.40, 209.76)),   // 52mm x 74mm
    ("a9", (104.88, 147.40)),   // 37mm x 52mm
    ("a10", (73.70, 104.88)),   // 26mm x 37mm
    ("b0", (2834.65, 4008.19)), // 1000mm x 1414mm
    ("b1", (2004.09, 2834.65)), // 707mm x 1000mm
    ("b2", (1417.32, 2004.09)), // 500mm x 707mm
    ("b3", (1000.63, 1417.32)), // 353mm x 500mm
    ("b4", (708.66, 1000.63)),  // 250mm x 353mm
    ("b5", (498.90, 708.66)),   // 176mm x 250mm
    ("b6", (354.33, 498.90)),   // 125mm x 176mm
    ("b7", (249.45, 354.33)),   // 88mm x 125mm
    ("b8", (175.75, 249.45)),   // 62mm x 88mm
    ("b9", (124.72, 175.75)),   // 44mm x 62mm
    ("b10", (87.87, 124.72)),   // 31mm x 44mm
    ("c0", (2599.37, 3676.54)), // 917mm x 1297mm
    ("c1", (1836.85, 2599.37)), // 648mm x 917mm
    ("c2", (1298.27, 1836.85)), // 458mm x 648mm
    ("c3", (918.43, 1298.27)),  // 324mm x 458mm
    ("c4", (649.13, 918.43)),   // 229mm x 324mm
    ("c5", (459.21, 649.13)),   // 162mm x 229mm
    ("c6", (323.15, 459.21)),   // 114mm x 162mm
    ("c7", (229.61, 323.15)),   // 81mm x 114mm
    ("c8", (161.57, 229.61)),   // 57mm x 81mm
    ("c9", (113.39, 161.57)),   // 40mm x 57mm
    ("c10", (79.37, 113.39)),   // 28mm x 40mm
    // iso 217 raw and special raw
    ("ra0", (2437.80, 3458.27)),  // 860mm x 1220mm
    ("ra1", (1729.13, 2437.80)),  // 610mm x 860mm
    ("ra2", (1218.90, 1729.13)),  // 430mm x 610mm
    ("ra3", (864.57, 1218.90)),   // 305mm x 430mm
    ("ra4", (609.45, 864.57)),    // 215mm x 305mm
    ("sra0", (2551.18, 3628.35)), // 900mm x 1280mm
    ("sra1", (1814.17, 2551.18)), // 640mm x 900mm
    ("sra2", (1275.59, 1814.17)), // 450mm x 640mm
    ("sra3", (907.09, 1275.59)),  // 320mm x 450mm
    ("sra4", (637.80, 907.09)),   // 225mm x 320mm
    // photo sizes, see https://en.wikipedia.org/wiki/Photo_print_sizes
    ("8R", (576.00, 720.00)),    // 8in x 10in
    ("11R", (792.00, 1224.00)),  // 11in x 14in
    ("16R", (1152.00, 1440.00)), // 16in x 20in
    // print shop aliases
    ("8x10", (576.00, 720.00)),    // 8R
    ("11x14", (792.00, 1224.00)),  // 11R
    ("12x18", (864.00, 1296.00)),  // arch-b
    ("16x20", (1152.00, 1440.00)), // 16R
    ("18x24", (1296.00, 1728.00)), // arch-c
    ("22x28", (1584.00, 2016.00)), // not 22R
    ("24x36", (1728.00, 2592.00)), // arch-d
    ("36x48", (2592.00, 3456.00)), // arch-e
    ("40x60", (2880.00, 4320.00)),
];

/// Look up a named format, returning its portrait size in points
pub fn page_format(name: &str) -> Option<PageSize> {
    PAGE_FORMATS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, (w, h))| (Pt(w), Pt(h)))
}

/// Page orientation. Parses from `"p"`, `"portrait"`, `"l"`, or `"landscape"`
/// in any letter case.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = BolayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "p" | "portrait" => Ok(Orientation::Portrait),
            "l" | "landscape" => Ok(Orientation::Landscape),
            _ => Err(BolayError::InvalidOrientation(s.to_string())),
        }
    }
}

/// A page format: either one of the [PAGE_FORMATS] or an explicit (width, height)
/// given in the document's working unit
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PageFormat<'a> {
    Named(&'a str),
    Custom(f32, f32),
}

impl PageFormat<'_> {
    /// The portrait size of the format, in points
    pub fn size_pt(&self, unit: Unit) -> Result<PageSize, BolayError> {
        match *self {
            PageFormat::Named(name) => {
                page_format(name).ok_or_else(|| BolayError::UnknownPageFormat(name.to_string()))
            }
            PageFormat::Custom(w, h) => Ok((unit.to_pt(w), unit.to_pt(h))),
        }
    }
}

/// Resolve a format to (width, height) in `unit`, swapping the sides for
/// landscape. `None` means no format was requested, and gives no size.
pub fn size_in_unit(
    orientation: Orientation,
    format: Option<PageFormat<'_>>,
    unit: Unit,
) -> Result<Option<(f32, f32)>, BolayError> {
    let Some(format) = format else {
        return Ok(None);
    };

    let (w, h) = format.size_pt(unit)?;
    let (w, h) = (unit.from_pt(w), unit.from_pt(h));
    Ok(Some(match orientation {
        Orientation::Portrait => (w, h),
        Orientation::Landscape => (h, w),
    }))
}
