//! Geometry value types.
//!
//! Default coordinate space:
//! - Origin lower-left
//! - +X right, +Y up
//!
//! In a flipped space (common for UI toolkits) the origin is upper-left and
//! +Y points down. These types store raw coordinates and never convert
//! between the two.

use core::hash::Hasher;

mod point;
mod rect;
mod size;
mod transform;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use transform::AffineTransform;

/// Feeds one coordinate into `state` so that values comparing equal hash equal.
///
/// `-0.0 + 0.0` is `+0.0`, which folds the two signed zeros together.
#[inline]
pub(crate) fn hash_f32<H: Hasher>(v: f32, state: &mut H) {
    state.write_u32((v + 0.0).to_bits());
}

/// Serde adapter for coordinate fields.
///
/// Encoding rejects NaN and infinities, which JSON cannot carry. Decoding
/// reads an `f64` and rejects numbers that overflow `f32` instead of
/// letting them saturate to infinity.
pub(crate) mod finite_f32 {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &f32, s: S) -> Result<S::Ok, S::Error> {
        if !v.is_finite() {
            return Err(ser::Error::custom(format!("non-finite coordinate {v}")));
        }
        s.serialize_f32(*v)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
        let v = f64::deserialize(d)?;
        let narrowed = v as f32;
        if v.is_finite() && narrowed.is_infinite() {
            return Err(de::Error::custom(format!("number {v:e} does not fit in f32")));
        }
        Ok(narrowed)
    }
}
