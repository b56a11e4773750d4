use std::fmt;

/// A position in the document's working unit. Coordinates grow to the right and
/// downwards from the top-left corner of the page.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    /// Translate the point in place
    pub fn shift(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }
}

/// A set of optional changes to apply to a [Rect] with [Rect::set] or [Rect::copy_with].
///
/// `x` and `y` move the rectangle (its size is kept), while `width` and `height`
/// resize it (its origin is kept).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RectPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// An axis-aligned rectangle, specified by two opposite corners.
///
/// Nothing forces `max` to lie beyond `min`: insetting a rectangle by more than
/// half its size yields a negative width or height, and that is a meaningful value.
#[derive(Default, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The top-left corner
    pub min: Point,
    /// The bottom-right corner
    pub max: Point,
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rect")
            .field("x", &self.min.x)
            .field("y", &self.min.y)
            .field("width", &self.width())
            .field("height", &self.height())
            .field("x_max", &self.max.x)
            .field("y_max", &self.max.y)
            .finish()
    }
}

impl Rect {
    /// Create a rectangle from its origin and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            min: Point::new(x, y),
            max: Point::new(x + width, y + height),
        }
    }

    pub fn x_min(&self) -> f32 {
        self.min.x
    }

    pub fn y_min(&self) -> f32 {
        self.min.y
    }

    pub fn x_max(&self) -> f32 {
        self.max.x
    }

    pub fn y_max(&self) -> f32 {
        self.max.y
    }

    /// Move only the left edge
    pub fn set_x_min(&mut self, x: f32) -> &mut Self {
        self.min.x = x;
        self
    }

    /// Move only the top edge
    pub fn set_y_min(&mut self, y: f32) -> &mut Self {
        self.min.y = y;
        self
    }

    /// Move only the right edge
    pub fn set_x_max(&mut self, x: f32) -> &mut Self {
        self.max.x = x;
        self
    }

    /// Move only the bottom edge
    pub fn set_y_max(&mut self, y: f32) -> &mut Self {
        self.max.y = y;
        self
    }

    pub fn x(&self) -> f32 {
        self.min.x
    }

    pub fn y(&self) -> f32 {
        self.min.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// The origin (top-left corner) of the rectangle
    pub fn origin(&self) -> Point {
        self.min
    }

    /// Move the rectangle horizontally so that its left edge sits at `x`. The size is kept.
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        let dx = x - self.min.x;
        self.shift(dx, 0.0)
    }

    /// Move the rectangle vertically so that its top edge sits at `y`. The size is kept.
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        let dy = y - self.min.y;
        self.shift(0.0, dy)
    }

    /// Change the width by moving the right edge. The origin is kept.
    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.max.x = self.min.x + width;
        self
    }

    /// Change the height by moving the bottom edge. The origin is kept.
    pub fn set_height(&mut self, height: f32) -> &mut Self {
        self.max.y = self.min.y + height;
        self
    }

    /// Move the whole rectangle so that its origin is at `(x, y)`
    pub fn translate_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.set_x(x).set_y(y)
    }

    /// Change the size of the rectangle, keeping its origin
    pub fn resize(&mut self, width: f32, height: f32) -> &mut Self {
        self.set_width(width).set_height(height)
    }

    /// Apply every change present in `patch`. Position changes are applied before
    /// size changes.
    pub fn set(&mut self, patch: RectPatch) -> &mut Self {
        if let Some(x) = patch.x {
            self.set_x(x);
        }
        if let Some(y) = patch.y {
            self.set_y(y);
        }
        if let Some(width) = patch.width {
            self.set_width(width);
        }
        if let Some(height) = patch.height {
            self.set_height(height);
        }
        self
    }

    /// Like [Rect::set], but leaves `self` alone and returns the changed copy
    pub fn copy_with(&self, patch: RectPatch) -> Rect {
        let mut rect = *self;
        rect.set(patch);
        rect
    }

    /// Translate both corners
    pub fn shift(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.min.shift(dx, dy);
        self.max.shift(dx, dy);
        self
    }

    /// Shrink the rectangle by `d` on every side (grow it if `d` is negative)
    pub fn inset(&mut self, d: f32) -> &mut Self {
        self.min.shift(d, d);
        self.max.shift(-d, -d);
        self
    }

    /// Grow the rectangle by `d` on every side
    pub fn outset(&mut self, d: f32) -> &mut Self {
        self.inset(-d)
    }

    /// Move each edge independently. Positive values move an edge right / down.
    pub fn stretch(&mut self, left: f32, top: f32, right: f32, bottom: f32) -> &mut Self {
        self.min.shift(left, top);
        self.max.shift(right, bottom);
        self
    }
}

/// The smallest rectangle covering every rectangle in `rects`.
///
/// An empty input gives [Rect::default], a zero-sized rectangle at the origin.
pub fn bounding_box<'a, I>(rects: I) -> Rect
where
    I: IntoIterator<Item = &'a Rect>,
{
    let mut rects = rects.into_iter();
    let Some(first) = rects.next() else {
        return Rect::default();
    };

    rects.fold(*first, |mut bbox, rect| {
        bbox.min.x = bbox.min.x.min(rect.min.x);
        bbox.min.y = bbox.min.y.min(rect.min.y);
        bbox.max.x = bbox.max.x.max(rect.max.x);
        bbox.max.y = bbox.max.y.max(rect.max.y);
        bbox
    })
}
