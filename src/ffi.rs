//! Flat C ABI for evaluating Bézier curves from foreign code.
//!
//! Functions:
//! - `bezier_eval` - evaluates into a caller-provided point, returns a status code
//! - `bezier_interpolate` - interleaved `[x0, y0, x1, y1, ...]` in, heap-allocated `[x, y]` out
//! - `bezier_free_point` - releases a result of `bezier_interpolate`
//!
//! All entry points evaluate in `f64`.
//!
//! # Error Codes
//! - `0`: Success
//! - `-1`: Null pointer
//! - `-2`: Empty control polygon

use crate::curves::eval_bezier;
use crate::error::CurveError;
use crate::primitives::Point2;
use std::os::raw::c_int;

/// The point was written to the output pointer.
pub const BEZIER_OK: c_int = 0;
/// A required pointer argument was null.
pub const BEZIER_ERR_NULL: c_int = -1;
/// The control polygon had no points.
pub const BEZIER_ERR_EMPTY: c_int = -2;

fn status_code(err: CurveError) -> c_int {
    match err {
        CurveError::EmptyControlPolygon => BEZIER_ERR_EMPTY,
    }
}

/// Evaluate the curve with `count` control points at `t`, writing the result to `out`.
///
/// `out` is left untouched on error, including when `count <= 0`.
///
/// # Safety
///
/// - `points` must be a valid pointer to `count` initialized `Point2<f64>` values
/// - `out` must be a valid, writable pointer to one `Point2<f64>`
#[no_mangle]
pub unsafe extern "C" fn bezier_eval(
    t: f64,
    points: *const Point2<f64>,
    count: c_int,
    out: *mut Point2<f64>,
) -> c_int {
    if points.is_null() || out.is_null() {
        return BEZIER_ERR_NULL;
    }
    let Ok(count) = usize::try_from(count) else {
        return BEZIER_ERR_EMPTY;
    };

    let points = std::slice::from_raw_parts(points, count);
    match eval_bezier(points, t) {
        Ok(point) => {
            out.write(point);
            BEZIER_OK
        }
        Err(err) => status_code(err),
    }
}

/// Evaluate the curve at `t` from `count` interleaved coordinate pairs.
///
/// Returns:
/// - Pointer to a heap-allocated `[x, y]` pair; release it with `bezier_free_point`
/// - Null if `coords` is null or `count <= 0`
///
/// # Safety
/// - `coords` must point to `2 * count` initialized `f64` values
#[no_mangle]
pub unsafe extern "C" fn bezier_interpolate(t: f64, coords: *const f64, count: c_int) -> *mut f64 {
    if coords.is_null() {
        return std::ptr::null_mut();
    }
    let Ok(count) = usize::try_from(count) else {
        return std::ptr::null_mut();
    };

    // `Point2<f64>` is `#[repr(C)]` with two `f64` fields.
    let points = std::slice::from_raw_parts(coords.cast::<Point2<f64>>(), count);
    match eval_bezier(points, t) {
        Ok(point) => Box::into_raw(Box::new(<[f64; 2]>::from(point))).cast::<f64>(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a point returned by `bezier_interpolate`.
///
/// # Safety
/// - `ptr` must be a pointer returned by `bezier_interpolate`, or null
#[no_mangle]
pub unsafe extern "C" fn bezier_free_point(ptr: *mut f64) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr.cast::<[f64; 2]>()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        ]
    }

    #[test]
    fn test_eval_writes_point() {
        let points = cubic();
        let mut out = Point2::new(-1.0, -1.0);

        let code = unsafe { bezier_eval(0.5, points.as_ptr(), 4, &mut out) };

        assert_eq!(code, BEZIER_OK);
        assert_eq!(out, eval_bezier(&points, 0.5).unwrap());
    }

    #[test]
    fn test_eval_null_pointers() {
        let points = cubic();
        let mut out = Point2::origin();

        let code = unsafe { bezier_eval(0.5, std::ptr::null(), 4, &mut out) };
        assert_eq!(code, BEZIER_ERR_NULL);

        let code = unsafe { bezier_eval(0.5, points.as_ptr(), 4, std::ptr::null_mut()) };
        assert_eq!(code, BEZIER_ERR_NULL);
    }

    #[test]
    fn test_eval_empty_leaves_output() {
        let points = cubic();
        let mut out = Point2::new(7.0, 7.0);

        let code = unsafe { bezier_eval(0.5, points.as_ptr(), 0, &mut out) };

        assert_eq!(code, BEZIER_ERR_EMPTY);
        assert_eq!(out, Point2::new(7.0, 7.0));
    }

    #[test]
    fn test_interpolate_interleaved() {
        let coords = [0.0, 0.0, 1.0, 5.0, 2.0, -5.0, 3.0, 5.0, 4.0, -5.0, 5.0, 0.0];
        let points: Vec<Point2<f64>> = coords
            .chunks_exact(2)
            .map(|c| Point2::new(c[0], c[1]))
            .collect();

        for &t in &[0.0, 0.3, 0.5, 1.0] {
            let expected = eval_bezier(&points, t).unwrap();
            unsafe {
                let result = bezier_interpolate(t, coords.as_ptr(), 6);
                assert!(!result.is_null());
                assert_eq!(*result, expected.x);
                assert_eq!(*result.add(1), expected.y);
                bezier_free_point(result);
            }
        }
    }

    #[test]
    fn test_interpolate_invalid_input() {
        let coords = [0.0, 0.0, 10.0, 0.0];
        unsafe {
            assert!(bezier_interpolate(0.5, std::ptr::null(), 2).is_null());
            assert!(bezier_interpolate(0.5, coords.as_ptr(), 0).is_null());
            assert!(bezier_interpolate(0.5, coords.as_ptr(), -3).is_null());
        }
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { bezier_free_point(std::ptr::null_mut()) };
    }

    #[test]
    fn test_eval_negative_count() {
        let points = cubic();
        let mut out = Point2::new(7.0, 7.0);

        let code = unsafe { bezier_eval(0.5, points.as_ptr(), -1, &mut out) };

        assert_eq!(code, BEZIER_ERR_EMPTY);
        assert_eq!(out, Point2::new(7.0, 7.0));
    }

    #[test]
    fn test_status_codes_are_distinct() {
        assert_eq!(status_code(CurveError::EmptyControlPolygon), BEZIER_ERR_EMPTY);
        assert_ne!(BEZIER_OK, BEZIER_ERR_NULL);
        assert_ne!(BEZIER_OK, BEZIER_ERR_EMPTY);
        assert_ne!(BEZIER_ERR_NULL, BEZIER_ERR_EMPTY);
    }
}
