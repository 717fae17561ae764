//! bezeval - Bézier curve evaluation
//!
//! Evaluates a point on a Bézier curve of any order from its control polygon.
//! Lines, quadratics and cubics use their closed-form Bernstein coefficients;
//! higher orders fall back to de Casteljau's algorithm.
//!
//! ```
//! use bezeval::{eval_bezier, Point2};
//!
//! let points = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 10.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(10.0, 0.0),
//! ];
//! let mid = eval_bezier(&points, 0.5).unwrap();
//! assert_eq!(mid, Point2::new(5.0, 7.5));
//! ```
//!
//! With the `ffi` feature (on by default) the [`ffi`] module exports the same
//! evaluation through a flat C ABI.

pub mod curves;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod primitives;

pub use curves::{de_casteljau, eval_bezier, BezierCurve2};
pub use error::CurveError;
pub use primitives::{Point2, Vec2};
