//! Units of length used throughout the crate.
//!
//! PDF user space is measured in points (1/72 of an inch). Drawing calls on a
//! [`Canvas`](crate::Canvas) are made in the document's *working unit*, chosen
//! with [`Unit`] when the canvas is created; `k` is the number of points per
//! working unit.

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length in points
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum,
    Deref, Display, From, Into,
)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, Display, From)]
pub struct In(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, Display, From)]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(v: In) -> Self {
        Pt(v.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(v: Mm) -> Self {
        Pt(v.0 * 72.0 / 25.4)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

/// The working unit of a document. All geometry handed to a canvas is expressed
/// in this unit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Unit {
    Pt,
    Mm,
    Cm,
    #[default]
    In,
}

impl Unit {
    /// Scale factor: points per working unit
    pub fn k(self) -> f32 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => 72.0 / 25.4,
            Unit::Cm => 72.0 / 2.54,
            Unit::In => 72.0,
        }
    }

    /// Convert a length in this unit to points
    pub fn to_pt(self, value: f32) -> Pt {
        Pt(value * self.k())
    }

    /// Convert a length in points to this unit
    pub fn from_pt(self, value: Pt) -> f32 {
        value.0 / self.k()
    }
}
