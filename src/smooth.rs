// Copyright 2026 the waypoint-smoother Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning sparse waypoints into a densely sampled path.

use alloc::vec::Vec;

use log::debug;

use crate::{sample_curves, CatmullRom, CatmullRomSegment, CatmullRomSpline, Path, SmoothError};

/// Smooth `waypoints` into a densely sampled centripetal Catmull-Rom path.
///
/// The result passes through every waypoint, in order. It starts at the
/// first waypoint and continues with [`SAMPLES_PER_SEGMENT`] points per
/// pair of consecutive waypoints, the last of which is that pair's second
/// waypoint; `n` waypoints give `10 * n - 9` points.
///
/// The computation is deterministic: the same input always gives
/// bit-identical output.
///
/// # Errors
///
/// - [`SmoothError::InsufficientPoints`] if there are fewer than two waypoints.
/// - [`SmoothError::DegenerateSegment`] if two consecutive waypoints coincide
///   or any coordinate is not finite. No partial output is returned.
///
/// # Examples
///
/// ```
/// use waypoint_smoother::{generate_smooth_path, Path, Point};
///
/// let waypoints = Path::from([(10.0, 7.0), (15.0, 10.0), (20.0, 13.0), (25.0, 12.0)]);
/// let smooth = generate_smooth_path(&waypoints).unwrap();
/// assert_eq!(smooth.len(), 31);
/// assert_eq!(smooth.first(), Some(Point::new(10.0, 7.0)));
/// assert!(smooth[30].distance(Point::new(25.0, 12.0)) < 1e-9);
/// ```
///
/// [`SAMPLES_PER_SEGMENT`]: crate::SAMPLES_PER_SEGMENT
pub fn generate_smooth_path(waypoints: &Path) -> Result<Path, SmoothError> {
    generate_smooth_path_with(waypoints, CatmullRom::CENTRIPETAL)
}

/// Like [`generate_smooth_path`], with an explicit spline parameterization.
///
/// # Errors
///
/// Same as [`generate_smooth_path`]. Parameters that produce non-finite
/// coefficients, such as a NaN `alpha`, fail with
/// [`SmoothError::DegenerateSegment`].
pub fn generate_smooth_path_with(waypoints: &Path, params: CatmullRom) -> Result<Path, SmoothError> {
    let spline = CatmullRomSpline::from_waypoints_with(waypoints, params)?;
    let segments = spline
        .segments()
        .collect::<Result<Vec<CatmullRomSegment>, _>>()?;
    let path = sample_curves(&segments);
    debug!(
        "smoothed {} waypoints through {} segments into {} points (alpha {}, tension {})",
        waypoints.len(),
        segments.len(),
        path.len(),
        params.alpha,
        params.tension
    );
    Ok(path)
}
