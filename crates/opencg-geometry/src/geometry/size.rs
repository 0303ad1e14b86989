use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::hash_f32;

/// Width and height of a rectangle.
///
/// Negative extents are allowed and kept as-is. Serialized as
/// `{ "width": <f32>, "height": <f32> }`.
///
/// Like [`Point`](super::Point), equality is IEEE per field: a size holding
/// NaN is not equal to itself, which breaks `Eq` reflexivity for that value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    #[serde(with = "crate::geometry::finite_f32")]
    pub width: f32,
    #[serde(with = "crate::geometry::finite_f32")]
    pub height: f32,
}

impl Size {
    /// Zero width and zero height.
    pub const ZERO: Size = Size::new(0.0, 0.0);

    /// Stores the extents as given; negative values are not rejected.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Integer extents, converted with `as f32`.
    #[inline]
    pub const fn from_int(width: i64, height: i64) -> Self {
        Self::new(width as f32, height as f32)
    }
}

impl Eq for Size {}

impl Hash for Size {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.width, state);
        hash_f32(self.height, state);
    }
}

impl From<(f32, f32)> for Size {
    #[inline]
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

impl From<(i32, i32)> for Size {
    #[inline]
    fn from((width, height): (i32, i32)) -> Self {
        Self::from_int(width.into(), height.into())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size(width: {:?}, height: {:?})", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int_matches_float() {
        assert_eq!(Size::from_int(3, -4), Size::new(3.0, -4.0));
        assert_eq!(Size::from((7_i32, 8_i32)), Size::new(7.0, 8.0));
    }

    #[test]
    fn negative_extent_is_kept() {
        let s = Size::new(-2.0, -3.0);
        assert_eq!(s.width, -2.0);
        assert_eq!(s.height, -3.0);
    }

    #[test]
    fn display_format() {
        assert_eq!(Size::new(3.0, 4.5).to_string(), "Size(width: 3.0, height: 4.5)");
    }
}
