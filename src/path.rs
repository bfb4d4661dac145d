// Copyright 2026 the waypoint-smoother Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered point sequences.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::Point;

/// An ordered sequence of [`Point`]s.
///
/// Order is significant: it is the traversal order of the waypoints
/// going in and of the sampled points coming out of
/// [`generate_smooth_path`](crate::generate_smooth_path).
///
/// # Examples
///
/// ```
/// use waypoint_smoother::{Path, Point};
///
/// let mut path = Path::new();
/// path.push((1.0, 1.0));
/// path.push((2.0, 0.0));
/// path.push_front((0.0, 0.0));
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.get(0), Some(Point::ZERO));
/// assert_eq!(path.to_string(), "0, 0\n1, 1\n2, 0");
/// ```
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Point>);

impl Path {
    /// Create a new, empty path.
    #[inline]
    pub fn new() -> Path {
        Path(Vec::new())
    }

    /// Create an empty path with room for `capacity` points.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Path {
        Path(Vec::with_capacity(capacity))
    }

    /// Append a point to the end of the path.
    #[inline]
    pub fn push(&mut self, p: impl Into<Point>) {
        self.0.push(p.into());
    }

    /// Insert a point before the first point of the path.
    ///
    /// This shifts every existing point and is linear in the length of
    /// the path. [`extrapolate_boundary`](crate::extrapolate_boundary)
    /// builds a fresh path instead of prepending.
    #[inline]
    pub fn push_front(&mut self, p: impl Into<Point>) {
        self.0.insert(0, p.into());
    }

    /// The point at `index`, if there is one.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.0.get(index).copied()
    }

    /// The first point of the path.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.0.first().copied()
    }

    /// The last point of the path.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.0.last().copied()
    }

    /// Number of points in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The points of the path, in order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Iterate over the points of the path, in order.
    #[inline]
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, Point>> {
        self.0.iter().copied()
    }

    /// Consume the path, returning its points.
    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Returns `true` if every point of the path is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|p| p.is_finite())
    }
}

impl Index<usize> for Path {
    type Output = Point;

    #[inline]
    fn index(&self, index: usize) -> &Point {
        &self.0[index]
    }
}

impl From<Vec<Point>> for Path {
    #[inline]
    fn from(points: Vec<Point>) -> Path {
        Path(points)
    }
}

impl From<&[Point]> for Path {
    #[inline]
    fn from(points: &[Point]) -> Path {
        Path(points.to_vec())
    }
}

impl<const N: usize> From<[(f64, f64); N]> for Path {
    fn from(points: [(f64, f64); N]) -> Path {
        points.into_iter().map(Point::from).collect()
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Path {
        Path(iter.into_iter().collect())
    }
}

impl Extend<Point> for Path {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = alloc::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Point;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One `x, y` pair per line, without a trailing newline.
///
/// Precision flags apply to every coordinate.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            fmt::Display::fmt(&p.x, f)?;
            write!(f, ", ")?;
            fmt::Display::fmt(&p.y, f)?;
        }
        Ok(())
    }
}
