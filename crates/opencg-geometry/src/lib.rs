//! OpenCG geometry crate.
//!
//! Plain 2D value types modelled on the Core Graphics coordinate API:
//! [`Point`], [`Size`] and [`Rect`], plus the [`AffineTransform`] consumed by
//! [`Point::applying`].
//!
//! ```rust
//! use opencg_geometry::{Point, Rect};
//!
//! let r = Rect::from_xywh(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(r.mid_x(), 2.5);
//! assert_eq!(r.origin, Point::new(1.0, 2.0));
//! ```

pub mod codec;
pub mod geometry;
pub mod logging;

pub use codec::{DecodeError, DecodeErrorKind, EncodeError};
pub use geometry::{AffineTransform, Point, Rect, Size};
