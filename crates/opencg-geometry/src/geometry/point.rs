use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{hash_f32, AffineTransform};

/// A point in a two-dimensional coordinate system.
///
/// Serialized as `{ "x": <f32>, "y": <f32> }`. Non-finite coordinates fail
/// to encode.
///
/// `Eq` and `Hash` let points key hash maps. Equality is IEEE per field, so a
/// point with a NaN coordinate is not equal to itself and cannot be looked up
/// again once inserted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(with = "crate::geometry::finite_f32")]
    pub x: f32,
    #[serde(with = "crate::geometry::finite_f32")]
    pub y: f32,
}

impl Point {
    /// The point with location (0, 0).
    pub const ZERO: Point = Point::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a point from integer coordinates.
    ///
    /// Values beyond 2^24 in magnitude round to the nearest representable `f32`.
    #[inline]
    pub const fn from_int(x: i64, y: i64) -> Self {
        Self::new(x as f32, y as f32)
    }

    /// Returns the point produced by applying `t` to this point.
    #[inline]
    pub fn applying(self, t: AffineTransform) -> Point {
        Point::new(
            t.a * self.x + t.c * self.y + t.tx,
            t.b * self.x + t.d * self.y + t.ty,
        )
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.x, state);
        hash_f32(self.y, state);
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::from_int(x.into(), y.into())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x: {:?}, y: {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(p: Point) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn fields_round_trip() {
        for (x, y) in [(0.0, 0.0), (1.5, -2.25), (f32::MAX, f32::MIN), (1e-30, -7.0)] {
            let p = Point::new(x, y);
            assert_eq!(p.x, x);
            assert_eq!(p.y, y);
        }
    }

    #[test]
    fn from_int_matches_float() {
        for (x, y) in [(0, 0), (3, -4), (-100_000, 250), (i32::MAX as i64, i32::MIN as i64)] {
            assert_eq!(Point::from_int(x, y), Point::new(x as f32, y as f32));
        }
    }

    #[test]
    fn zero_and_default() {
        assert_eq!(Point::ZERO, Point::new(0.0, 0.0));
        assert_eq!(Point::default(), Point::ZERO);
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(Point::from((1.0_f32, 2.0_f32)), Point::new(1.0, 2.0));
        assert_eq!(Point::from((3_i32, 4_i32)), Point::from_int(3, 4));
    }

    // ── equality / hash ───────────────────────────────────────────────────

    #[test]
    fn equality_is_structural() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
    }

    #[test]
    fn equal_points_hash_equal() {
        assert_eq!(hash_of(Point::new(1.0, 2.0)), hash_of(Point::new(1.0, 2.0)));
        assert_eq!(hash_of(Point::new(0.0, 0.0)), hash_of(Point::new(-0.0, -0.0)));
    }

    #[test]
    fn nan_is_not_reflexive() {
        let p = Point::new(f32::NAN, 0.0);
        let copy = p;
        assert_ne!(p, copy);

        let mut set = std::collections::HashSet::new();
        set.insert(p);
        assert!(!set.contains(&p));
    }

    #[test]
    fn usable_as_set_key() {
        let mut set = std::collections::HashSet::new();
        set.insert(Point::new(1.0, 1.0));
        set.insert(Point::new(1.0, 1.0));
        set.insert(Point::new(2.0, 1.0));
        assert_eq!(set.len(), 2);
    }

    // ── applying ──────────────────────────────────────────────────────────

    #[test]
    fn zero_through_identity_is_zero() {
        assert_eq!(Point::ZERO.applying(AffineTransform::IDENTITY), Point::ZERO);
    }

    #[test]
    fn translation_offsets() {
        let t = AffineTransform::translation(10.0, -5.0);
        assert_eq!(Point::new(1.0, 2.0).applying(t), Point::new(11.0, -3.0));
    }

    #[test]
    fn full_matrix() {
        // x' = 2*3 + 4*5 + 6 = 32, y' = 1*3 + 3*5 + 7 = 25
        let t = AffineTransform::new(2.0, 1.0, 4.0, 3.0, 6.0, 7.0);
        assert_eq!(Point::new(3.0, 5.0).applying(t), Point::new(32.0, 25.0));
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn display_format() {
        assert_eq!(Point::new(1.0, 2.0).to_string(), "Point(x: 1.0, y: 2.0)");
        assert_eq!(Point::new(-0.5, 3.25).to_string(), "Point(x: -0.5, y: 3.25)");
    }
}
