// Copyright 2026 the waypoint-smoother Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-step sampling of parametrized curves.

use arrayvec::ArrayVec;

use crate::{ParamCurve, Path, Point};

/// Number of points emitted for each segment of a smoothed path.
pub const SAMPLES_PER_SEGMENT: usize = 10;

/// Evaluate `curve` at `t = 0.1, 0.2, ..., 1.0`.
///
/// The start point is not included. Each `t` is derived from an integer
/// counter, so there are always exactly [`SAMPLES_PER_SEGMENT`] samples
/// and the last one is evaluated at exactly `t = 1.0`.
pub fn sample_curve<C: ParamCurve>(curve: &C) -> ArrayVec<Point, SAMPLES_PER_SEGMENT> {
    (1..=SAMPLES_PER_SEGMENT)
        .map(|i| curve.eval(i as f64 / SAMPLES_PER_SEGMENT as f64))
        .collect()
}

/// Sample consecutive curves into a single path.
///
/// The first curve contributes its start point, then every curve
/// contributes [`SAMPLES_PER_SEGMENT`] points, so the result has
/// `1 + SAMPLES_PER_SEGMENT * curves.len()` points. An empty slice gives
/// an empty path.
pub fn sample_curves<C: ParamCurve>(curves: &[C]) -> Path {
    let Some(first) = curves.first() else {
        return Path::new();
    };
    let mut path = Path::with_capacity(1 + SAMPLES_PER_SEGMENT * curves.len());
    path.push(first.start());
    for curve in curves {
        path.extend(sample_curve(curve));
    }
    path
}
