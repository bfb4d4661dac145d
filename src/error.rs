// Copyright 2026 the waypoint-smoother Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced while smoothing a path.

use core::fmt;

/// An error which can be returned when smoothing a path.
///
/// Smoothing either succeeds for the whole input or fails with one of
/// these; no partial output is ever produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmoothError {
    /// Fewer than two waypoints were supplied.
    ///
    /// Boundary extrapolation reads the two outermost points at each end.
    InsufficientPoints {
        /// Number of waypoints that were supplied.
        found: usize,
    },
    /// Two adjacent control points of a segment coincide, or a control
    /// point or derived coefficient is not finite.
    ///
    /// Zero distance between neighbors makes a knot interval vanish, which
    /// would put infinities or NaNs into the tangents.
    DegenerateSegment {
        /// Index of the offending segment.
        ///
        /// Segment `i` spans the control points `i..=i + 3` of the
        /// extrapolated path and interpolates between waypoints `i` and `i + 1`.
        segment: usize,
    },
}

impl SmoothError {
    /// The minimum number of waypoints a path must have to be smoothed.
    pub const MIN_WAYPOINTS: usize = 2;
}

impl fmt::Display for SmoothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmoothError::InsufficientPoints { found } => write!(
                f,
                "At least {} waypoints are required, found {found}",
                SmoothError::MIN_WAYPOINTS
            ),
            SmoothError::DegenerateSegment { segment } => write!(
                f,
                "Segment {segment} has coincident or non-finite control points"
            ),
        }
    }
}

impl core::error::Error for SmoothError {}

#[cfg(test)]
mod tests {
    use super::SmoothError;

    #[test]
    fn display() {
        assert_eq!(
            SmoothError::InsufficientPoints { found: 1 }.to_string(),
            "At least 2 waypoints are required, found 1"
        );
        assert_eq!(
            SmoothError::DegenerateSegment { segment: 3 }.to_string(),
            "Segment 3 has coincident or non-finite control points"
        );
    }

    #[test]
    fn is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&SmoothError::InsufficientPoints { found: 0 });
    }
}
