// Copyright 2026 the waypoint-smoother Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catmull-Rom spline segments with variable knot parameterization.

use log::{trace, warn};

use crate::common::knot_interval;
use crate::{extrapolate_boundary, ParamCurve, Path, Point, SmoothError, Vec2};

/// Adjacent control points closer than this are treated as coincident.
pub const MIN_KNOT_DISTANCE: f64 = 1e-9;

/// Parameters of a Catmull-Rom spline.
///
/// Knot intervals between neighboring control points are their Euclidean
/// distance raised to `alpha`: `0.0` gives the uniform spline, `0.5` the
/// classic centripetal one and `1.0` the chordal one. `tension` scales
/// every tangent by `1.0 - tension`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatmullRom {
    /// Exponent applied to control point distances to get knot intervals.
    pub alpha: f64,
    /// Tangent damping; `0.0` leaves the tangents unchanged.
    pub tension: f64,
}

impl CatmullRom {
    /// The parameterization used by [`generate_smooth_path`](crate::generate_smooth_path).
    pub const CENTRIPETAL: CatmullRom = CatmullRom {
        alpha: 0.75,
        tension: 0.0,
    };

    /// Builder method for setting the knot parameterization exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Builder method for setting the tangent tension.
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Build the segment interpolating between `p1` and `p2`.
    ///
    /// `p0` and `p3` only shape the tangents at the two ends.
    ///
    /// Returns `None` when two adjacent points are closer than
    /// [`MIN_KNOT_DISTANCE`], or when any input point or resulting
    /// coefficient is not finite.
    pub fn segment(&self, [p0, p1, p2, p3]: [Point; 4]) -> Option<CatmullRomSegment> {
        let d01 = p0.distance(p1);
        let d12 = p1.distance(p2);
        let d23 = p2.distance(p3);
        // Negated so that NaN distances are rejected too.
        if !(d01 >= MIN_KNOT_DISTANCE && d12 >= MIN_KNOT_DISTANCE && d23 >= MIN_KNOT_DISTANCE) {
            return None;
        }
        let t01 = knot_interval(d01, self.alpha);
        let t12 = knot_interval(d12, self.alpha);
        let t23 = knot_interval(d23, self.alpha);

        let chord = p2 - p1;
        let scale = 1.0 - self.tension;
        let m1 = scale * (chord + t12 * ((p1 - p0) / t01 - (p2 - p0) / (t01 + t12)));
        let m2 = scale * (chord + t12 * ((p3 - p2) / t23 - (p3 - p1) / (t12 + t23)));

        let seg = CatmullRomSegment {
            a: -2.0 * chord + m1 + m2,
            b: 3.0 * chord - 2.0 * m1 - m2,
            c: m1,
            d: p1,
        };
        seg.is_finite().then_some(seg)
    }
}

impl Default for CatmullRom {
    fn default() -> Self {
        CatmullRom::CENTRIPETAL
    }
}

/// One cubic piece of a Catmull-Rom spline, in power basis.
///
/// The curve is `a·t³ + b·t² + c·t + d` for `t` in `[0, 1]`; it starts at
/// the segment's second control point and ends at its third.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatmullRomSegment {
    /// Cubic coefficient.
    pub a: Vec2,
    /// Quadratic coefficient.
    pub b: Vec2,
    /// Linear coefficient; the tangent at the start point.
    pub c: Vec2,
    /// Constant term; the start point.
    pub d: Point,
}

impl CatmullRomSegment {
    /// The first derivative of the curve at `t`.
    #[inline]
    pub fn tangent(&self, t: f64) -> Vec2 {
        (3.0 * t * self.a + 2.0 * self.b) * t + self.c
    }

    /// Is this segment [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }
}

impl ParamCurve for CatmullRomSegment {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.d + ((self.a * t + self.b) * t + self.c) * t
    }

    #[inline]
    fn start(&self) -> Point {
        self.d
    }
}

/// A Catmull-Rom spline through a sequence of control points.
///
/// Every window of four consecutive control points yields one
/// [`CatmullRomSegment`], so the outermost control point at each end is
/// only used for tangents. Use [`CatmullRomSpline::from_waypoints`] to get
/// a spline that passes through every waypoint.
#[derive(Clone, Debug, PartialEq)]
pub struct CatmullRomSpline {
    control_points: Path,
    params: CatmullRom,
}

impl CatmullRomSpline {
    /// Construct a spline from control points as they are.
    #[inline]
    pub fn new(control_points: Path, params: CatmullRom) -> Self {
        Self {
            control_points,
            params,
        }
    }

    /// Construct a centripetal spline passing through every waypoint.
    ///
    /// One extra control point is synthesized beyond each end, see
    /// [`extrapolate_boundary`].
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError::InsufficientPoints`] if `waypoints` has fewer
    /// than two points.
    pub fn from_waypoints(waypoints: &Path) -> Result<Self, SmoothError> {
        Self::from_waypoints_with(waypoints, CatmullRom::default())
    }

    /// Like [`CatmullRomSpline::from_waypoints`], with explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError::InsufficientPoints`] if `waypoints` has fewer
    /// than two points.
    pub fn from_waypoints_with(waypoints: &Path, params: CatmullRom) -> Result<Self, SmoothError> {
        Ok(Self::new(extrapolate_boundary(waypoints)?, params))
    }

    /// Return the spline's control points.
    #[inline]
    pub fn control_points(&self) -> &Path {
        &self.control_points
    }

    /// Return the spline's parameters.
    #[inline]
    pub fn params(&self) -> CatmullRom {
        self.params
    }

    /// Number of segments, three fewer than the control points.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.control_points.len().saturating_sub(3)
    }

    /// Return an iterator over the spline's segments, in order.
    ///
    /// A window of control points that cannot form a segment yields
    /// [`SmoothError::DegenerateSegment`] carrying the window's index.
    #[inline]
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            idx: 0,
            points: self.control_points.points(),
            params: self.params,
        }
    }
}

/// Iterator over the segments of a [`CatmullRomSpline`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    idx: usize,
    points: &'a [Point],
    params: CatmullRom,
}

impl Iterator for Segments<'_> {
    type Item = Result<CatmullRomSegment, SmoothError>;

    fn next(&mut self) -> Option<Self::Item> {
        let window: [Point; 4] = self.points.get(self.idx..self.idx + 4)?.try_into().ok()?;
        let segment = self.idx;
        self.idx += 1;

        Some(match self.params.segment(window) {
            Some(seg) => {
                trace!("segment {segment}: {seg:?}");
                Ok(seg)
            }
            None => {
                warn!("segment {segment} is degenerate, control points {window:?}");
                Err(SmoothError::DegenerateSegment { segment })
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.points.len().saturating_sub(self.idx + 3);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use crate::{
        CatmullRom, CatmullRomSegment, CatmullRomSpline, ParamCurve, Path, Point, SmoothError,
        Vec2,
    };

    const EPSILON: f64 = 1e-9;

    fn assert_near(p: Point, q: Point) {
        assert!(p.distance(q) < EPSILON, "{p:?} != {q:?}");
    }

    fn reference_waypoints() -> Path {
        Path::from([
            (10.0, 7.0),
            (15.0, 10.0),
            (20.0, 13.0),
            (25.0, 12.0),
            (30.0, 7.0),
            (35.0, 8.0),
            (40.0, 10.0),
        ])
    }

    #[test]
    fn default_is_centripetal() {
        let params = CatmullRom::default();
        assert_eq!(params.alpha, 0.75);
        assert_eq!(params.tension, 0.0);
        let params = params.with_alpha(0.5).with_tension(0.25);
        assert_eq!(params, CatmullRom { alpha: 0.5, tension: 0.25 });
    }

    #[test]
    fn interpolates_inner_points() {
        let params = CatmullRom::CENTRIPETAL;
        let window = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(4.0, 3.0),
            Point::new(5.0, -1.0),
        ];
        let seg = params.segment(window).unwrap();
        assert_eq!(seg.start(), window[1]);
        assert_eq!(seg.eval(0.0), window[1]);
        assert_near(seg.end(), window[2]);
    }

    #[test]
    fn evenly_spaced_collinear_is_linear() {
        let window = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ];
        let seg = CatmullRom::CENTRIPETAL.segment(window).unwrap();
        assert!(seg.a.hypot() < EPSILON);
        assert!(seg.b.hypot() < EPSILON);
        assert!((seg.c - Vec2::new(1.0, 0.0)).hypot() < EPSILON);
        assert_near(seg.eval(0.3), Point::new(1.3, 0.0));
    }

    #[test]
    fn reference_coefficients() {
        let spline = CatmullRomSpline::from_waypoints(&reference_waypoints()).unwrap();
        let segs: Vec<CatmullRomSegment> = spline.segments().map(Result::unwrap).collect();
        assert_eq!(segs.len(), 6);

        // (20, 13) sits between a rise and a dip.
        let seg = segs[2];
        let expected_a = Vec2::new(-0.7045818423361325, 0.48449018220393913);
        let expected_b = Vec2::new(0.931818303674901, -2.247634064464834);
        let expected_c = Vec2::new(4.7727635386612315, 0.7631438822608947);
        assert!((seg.a - expected_a).hypot() < EPSILON);
        assert!((seg.b - expected_b).hypot() < EPSILON);
        assert!((seg.c - expected_c).hypot() < EPSILON);
        assert_eq!(seg.d, Point::new(20.0, 13.0));
    }

    #[test]
    fn every_waypoint_starts_one_segment() {
        let waypoints = reference_waypoints();
        let spline = CatmullRomSpline::from_waypoints(&waypoints).unwrap();
        let starts: Vec<Point> = spline.segments().map(|s| s.unwrap().d).collect();
        assert_eq!(starts, &waypoints.points()[..waypoints.len() - 1]);
        for (seg, end) in spline.segments().zip(waypoints.iter().skip(1)) {
            assert_near(seg.unwrap().end(), end);
        }
    }

    #[test]
    fn tension_scales_tangents() {
        let window = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(4.0, 3.0),
            Point::new(5.0, -1.0),
        ];
        let loose = CatmullRom::CENTRIPETAL.segment(window).unwrap();
        let tight = CatmullRom::CENTRIPETAL
            .with_tension(0.5)
            .segment(window)
            .unwrap();
        assert!((tight.tangent(0.0) - 0.5 * loose.tangent(0.0)).hypot() < EPSILON);
        assert!((tight.tangent(1.0) - 0.5 * loose.tangent(1.0)).hypot() < EPSILON);
        assert_near(tight.end(), window[2]);
    }

    #[test]
    fn tangent_directions_agree_at_joins() {
        let spline = CatmullRomSpline::from_waypoints(&reference_waypoints()).unwrap();
        let segs: Vec<CatmullRomSegment> = spline.segments().map(Result::unwrap).collect();
        for pair in segs.windows(2) {
            // Magnitudes differ with the knot intervals, directions do not.
            let incoming = pair[0].tangent(1.0);
            let outgoing = pair[1].tangent(0.0);
            let cos = incoming.dot(outgoing) / (incoming.hypot() * outgoing.hypot());
            assert!((cos - 1.0).abs() < EPSILON, "kink between segments: {cos}");
        }
    }

    #[test]
    fn coincident_points_are_rejected() {
        let params = CatmullRom::CENTRIPETAL;
        let p = Point::new(1.0, 1.0);
        let q = Point::new(2.0, 3.0);
        assert!(params.segment([p, p, q, Point::new(3.0, 3.0)]).is_none());
        assert!(params.segment([Point::ZERO, p, p, q]).is_none());
        assert!(params.segment([Point::ZERO, p, q, q]).is_none());
        // Only adjacent points matter.
        assert!(params.segment([p, q, p, q]).is_some());
    }

    #[test]
    fn vertical_steps_are_not_coincident() {
        let window = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 3.0),
        ];
        let seg = CatmullRom::CENTRIPETAL.segment(window).unwrap();
        assert_near(seg.eval(0.5), Point::new(0.0, 1.5));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let params = CatmullRom::CENTRIPETAL;
        let p = Point::new(1.0, 1.0);
        let q = Point::new(2.0, 3.0);
        let r = Point::new(3.0, 3.0);
        assert!(params.segment([Point::new(f64::NAN, 0.0), p, q, r]).is_none());
        assert!(params.segment([Point::new(f64::INFINITY, 0.0), p, q, r]).is_none());
        assert!(params.with_alpha(f64::NAN).segment([Point::ZERO, p, q, r]).is_none());
    }

    #[test]
    fn degenerate_window_reports_its_index() {
        let waypoints = Path::from([(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (2.0, 1.0)]);
        let spline = CatmullRomSpline::from_waypoints(&waypoints).unwrap();
        let results: Vec<_> = spline.segments().collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Err(SmoothError::DegenerateSegment { segment: 0 }));
        assert_eq!(results[1], Err(SmoothError::DegenerateSegment { segment: 1 }));
        assert_eq!(results[2], Err(SmoothError::DegenerateSegment { segment: 2 }));
    }

    #[test]
    fn short_splines() {
        let params = CatmullRom::CENTRIPETAL;
        let three = CatmullRomSpline::new(Path::from([(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]), params);
        assert_eq!(three.segment_count(), 0);
        assert!(three.segments().next().is_none());
        assert_eq!(CatmullRomSpline::new(Path::new(), params).segment_count(), 0);

        let two = CatmullRomSpline::from_waypoints(&Path::from([(0.0, 0.0), (3.0, 4.0)])).unwrap();
        assert_eq!(two.control_points().len(), 4);
        assert_eq!(two.segments().len(), 1);
        let seg = two.segments().next().unwrap().unwrap();
        assert_near(seg.eval(0.5), Point::new(1.5, 2.0));
    }

    #[test]
    fn size_hint_tracks_progress() {
        let spline = CatmullRomSpline::from_waypoints(&reference_waypoints()).unwrap();
        let mut segments = spline.segments();
        assert_eq!(segments.len(), 6);
        segments.next();
        assert_eq!(segments.len(), 5);
    }
}
