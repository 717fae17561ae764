//! Curve evaluation.

mod bezier;

pub use bezier::{de_casteljau, eval_bezier, BezierCurve2};
