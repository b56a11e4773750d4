mod blot;
pub use blot::*;

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

/// Single-line text boxes: measuring, shrinking, justifying and drawing one line of text
pub mod layout;

mod page;

/// Named paper formats and orientation-aware page sizing
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

#[cfg(test)]
pub(crate) mod testing;

/// Re-export PDF-writer functionality
pub use pdf_writer;
