//! Single-line text layout.
//!
//! A [`OneLineTextBox`] measures a line of text in a registered font, optionally
//! shrinks the font so the line fits, justifies it inside a rectangle, and draws it,
//! optionally over a stroked halo. Right-to-left text is reshaped and put in visual
//! order first (see [`visual_order`]).
//!
//! # Example
//!
//! ```no_run
//! use bolay::layout::{HAlign, OneLineTextBox, TextStyle, VAlign};
//! use bolay::pagesize::Orientation;
//! use bolay::{colours, Font, FontKey, PdfCanvas, Rect, Unit};
//!
//! let font = Font::load(std::fs::read("NotoSans-Regular.ttf").unwrap()).unwrap();
//! let key = FontKey::new("Noto Sans", "");
//!
//! let mut canvas = PdfCanvas::new(Unit::In);
//! canvas.add_font(&key, font);
//! canvas.add_page(Orientation::Portrait, None).unwrap();
//!
//! let mut text_box =
//!     OneLineTextBox::new(&canvas, Rect::new(1.0, 1.0, 3.0, 0.5), key, 0.3, None).unwrap();
//! let style = TextStyle::new(colours::BLACK)
//!     .align(HAlign::Center, VAlign::Middle)
//!     .shrink_to_fit()
//!     .halo(colours::WHITE, 0.002);
//! let occupied = text_box.draw_text(&mut canvas, "Hello, world!", &style).unwrap();
//! ```

mod bidi;
mod text_box;

pub use bidi::*;
pub use text_box::*;
