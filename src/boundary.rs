// Copyright 2026 the waypoint-smoother Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthesized control points beyond the ends of a waypoint list.

use crate::{Path, SmoothError};

/// Extend `waypoints` by one control point at each end.
///
/// The new first point is the reflection of the second waypoint through
/// the first, and the new last point is the reflection of the
/// second-to-last waypoint through the last. Both are collinear with
/// their two nearest waypoints, so the end segments leave and arrive
/// along the direction of the first and last waypoint pairs.
///
/// The input is left untouched; the result has `waypoints.len() + 2`
/// points with the originals at indices `1..=waypoints.len()`.
///
/// # Errors
///
/// Returns [`SmoothError::InsufficientPoints`] if `waypoints` has fewer
/// than two points.
///
/// # Examples
///
/// ```
/// use waypoint_smoother::{extrapolate_boundary, Path, Point};
///
/// let control = extrapolate_boundary(&Path::from([(10.0, 7.0), (15.0, 10.0)])).unwrap();
/// assert_eq!(control.first(), Some(Point::new(5.0, 4.0)));
/// assert_eq!(control.last(), Some(Point::new(20.0, 13.0)));
/// ```
pub fn extrapolate_boundary(waypoints: &Path) -> Result<Path, SmoothError> {
    let n = waypoints.len();
    if n < SmoothError::MIN_WAYPOINTS {
        return Err(SmoothError::InsufficientPoints { found: n });
    }
    let pts = waypoints.points();
    let (first, second) = (pts[0], pts[1]);
    let (penultimate, last) = (pts[n - 2], pts[n - 1]);

    let mut control = Path::with_capacity(n + 2);
    control.push(first + (first - second));
    control.extend(waypoints.iter());
    control.push(last + (last - penultimate));
    Ok(control)
}
