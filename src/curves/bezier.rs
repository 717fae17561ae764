//! Bézier curve evaluation of arbitrary order.
//!
//! Linear, quadratic and cubic curves are evaluated with their closed-form
//! Bernstein coefficients. Higher orders use de Casteljau's algorithm, which
//! reduces the control polygon by repeated linear interpolation and never
//! computes binomial coefficients.

use crate::error::CurveError;
use crate::primitives::Point2;
use num_traits::Float;

/// Evaluates the Bézier curve defined by `points` at parameter `t`.
///
/// The order of the curve is `points.len() - 1`. `t = 0` and `t = 1` return
/// the first and last control points exactly. Values of `t` outside `[0, 1]`
/// extrapolate the curve.
///
/// A single control point is treated as a constant curve and returned for
/// every `t`.
///
/// # Errors
///
/// Returns [`CurveError::EmptyControlPolygon`] if `points` is empty.
///
/// # Example
///
/// ```
/// use bezeval::{eval_bezier, Point2};
///
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(5.0, 10.0),
///     Point2::new(10.0, 0.0),
/// ];
/// assert_eq!(eval_bezier(&points, 0.5).unwrap(), Point2::new(5.0, 5.0));
/// ```
pub fn eval_bezier<F: Float>(points: &[Point2<F>], t: F) -> Result<Point2<F>, CurveError> {
    let (first, last) = match points {
        [] => return Err(CurveError::EmptyControlPolygon),
        [only] => return Ok(*only),
        [first, .., last] => (*first, *last),
    };

    if t == F::zero() {
        return Ok(first);
    }
    if t == F::one() {
        return Ok(last);
    }

    match *points {
        [p0, p1] => Ok(eval_linear(p0, p1, t)),
        [p0, p1, p2] => Ok(eval_quadratic(p0, p1, p2, t)),
        [p0, p1, p2, p3] => Ok(eval_cubic(p0, p1, p2, p3, t)),
        _ => de_casteljau(points, t),
    }
}

/// Evaluates the Bézier curve defined by `points` at `t` with de Casteljau's
/// algorithm, regardless of order.
///
/// Each round replaces every adjacent pair of the working polygon by its
/// interpolation at `t`, leaving one point fewer, until a single point
/// remains. Runs in O(n²) for n control points. The work happens in a
/// private copy; `points` is never modified.
///
/// Unlike [`eval_bezier`] there is no shortcut at `t = 0` or `t = 1`.
///
/// # Errors
///
/// Returns [`CurveError::EmptyControlPolygon`] if `points` is empty.
pub fn de_casteljau<F: Float>(points: &[Point2<F>], t: F) -> Result<Point2<F>, CurveError> {
    let mut scratch = points.to_vec();

    for len in (1..scratch.len()).rev() {
        for i in 0..len {
            scratch[i] = scratch[i].lerp(scratch[i + 1], t);
        }
    }

    scratch
        .first()
        .copied()
        .ok_or(CurveError::EmptyControlPolygon)
}

/// A Bézier curve of arbitrary order with an owned control polygon.
///
/// The polygon always holds at least one point, so evaluation cannot fail
/// once the curve is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve2<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> BezierCurve2<F> {
    /// Creates a curve from its control polygon.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptyControlPolygon`] if `points` is empty.
    pub fn new(points: Vec<Point2<F>>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::EmptyControlPolygon);
        }
        Ok(Self { points })
    }

    /// Returns the order (degree) of the curve.
    #[inline]
    pub fn order(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the control polygon.
    #[inline]
    pub fn control_points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Evaluates the curve at parameter `t`.
    pub fn eval(&self, t: F) -> Point2<F> {
        match eval_bezier(&self.points, t) {
            Ok(point) => point,
            // Unreachable: `new` rejects empty polygons.
            Err(CurveError::EmptyControlPolygon) => Point2::new(F::nan(), F::nan()),
        }
    }

    /// Evaluates the curve at `segments + 1` evenly spaced parameters
    /// `t = i / segments`, from the start point to the end point.
    ///
    /// With `segments == 0` only the start point is returned.
    pub fn sample(&self, segments: usize) -> Vec<Point2<F>> {
        if segments == 0 {
            return vec![self.eval(F::zero())];
        }
        let Some(n) = F::from(segments) else {
            return Vec::new();
        };

        (0..=segments)
            .filter_map(|i| F::from(i))
            .map(|i| self.eval(i / n))
            .collect()
    }
}

#[inline]
fn eval_linear<F: Float>(p0: Point2<F>, p1: Point2<F>, t: F) -> Point2<F> {
    let mt = F::one() - t;

    Point2::new(mt * p0.x + t * p1.x, mt * p0.y + t * p1.y)
}

#[inline]
fn eval_quadratic<F: Float>(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, t: F) -> Point2<F> {
    let one = F::one();
    let two = one + one;
    let mt = one - t;

    let a = mt * mt;
    let b = two * mt * t;
    let c = t * t;

    Point2::new(
        a * p0.x + b * p1.x + c * p2.x,
        a * p0.y + b * p1.y + c * p2.y,
    )
}

#[inline]
fn eval_cubic<F: Float>(
    p0: Point2<F>,
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    t: F,
) -> Point2<F> {
    let one = F::one();
    let three = one + one + one;
    let mt = one - t;
    let mt2 = mt * mt;
    let t2 = t * t;

    let a = mt2 * mt;
    let b = three * mt2 * t;
    let c = three * mt * t2;
    let d = t2 * t;

    Point2::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}
