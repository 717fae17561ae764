//! Error types for curve evaluation.

use thiserror::Error;

/// Errors that can occur when evaluating a Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The control polygon has no points, so no curve is defined.
    #[error("empty control polygon: at least one control point is required")]
    EmptyControlPolygon,
}
