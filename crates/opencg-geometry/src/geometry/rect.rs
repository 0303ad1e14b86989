use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Point, Size};

/// Location and dimensions of a rectangle.
///
/// In the default space `origin` is the lower-left corner and the rectangle
/// extends toward the upper-right. In a flipped space it is the upper-left
/// corner and the rectangle extends toward the lower-right.
///
/// Extents are never normalized: with a negative width, `min_x()` is greater
/// than `max_x()`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// The rectangle whose origin and size are both zero.
    pub const ZERO: Rect = Rect::new(Point::ZERO, Size::ZERO);

    /// A rectangle with infinite extent.
    ///
    /// Currently identical to [`Rect::ZERO`]; no unbounded representation exists yet.
    pub const INFINITE: Rect = Rect::ZERO;

    /// The null rectangle, representing an invalid value.
    ///
    /// Currently identical to [`Rect::ZERO`] and therefore not distinguishable from it.
    pub const NULL: Rect = Rect::ZERO;

    #[inline]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub const fn from_int(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            origin: Point::from_int(x, y),
            size: Size::from_int(width, height),
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.height
    }

    #[inline]
    pub fn min_x(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn mid_x(self) -> f32 {
        (self.min_x() + self.max_x()) / 2.0
    }

    #[inline]
    pub fn max_x(self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn min_y(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn mid_y(self) -> f32 {
        (self.min_y() + self.max_y()) / 2.0
    }

    #[inline]
    pub fn max_y(self) -> f32 {
        self.origin.y + self.size.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect(origin: {}, size: {})", self.origin, self.size)
    }
}
