// Copyright 2026 the waypoint-smoother Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth paths through sparse 2D waypoints.
//!
//! This crate turns an ordered list of waypoints into a densely sampled
//! path that passes through every one of them, by fitting a
//! [Catmull-Rom spline](https://en.wikipedia.org/wiki/Centripetal_Catmull%E2%80%93Rom_spline)
//! between consecutive waypoints. It is meant for trajectory and path
//! smoothing in robotics, motion planning and animation.
//!
//! Smoothing runs in three steps:
//!
//! 1. [`extrapolate_boundary`] adds one control point before the first
//!    and one after the last waypoint, so the end segments get tangents.
//! 2. [`CatmullRomSpline::segments`] builds one [`CatmullRomSegment`] per
//!    window of four control points, with knot intervals from
//!    [`CatmullRom`]'s parameterization.
//! 3. [`sample_curves`] evaluates every segment at ten evenly spaced
//!    parameter values.
//!
//! [`generate_smooth_path`] runs all three.
//!
//! # Examples
//!
//! ```
//! use waypoint_smoother::{generate_smooth_path, Path, SmoothError};
//!
//! let waypoints = Path::from([
//!     (10.0, 7.0),
//!     (15.0, 10.0),
//!     (20.0, 13.0),
//!     (25.0, 12.0),
//!     (30.0, 7.0),
//!     (35.0, 8.0),
//!     (40.0, 10.0),
//! ]);
//! let smooth = generate_smooth_path(&waypoints)?;
//! assert_eq!(smooth.len(), 61);
//!
//! let repeated = Path::from([(0.0, 0.0), (1.0, 1.0), (1.0, 1.0)]);
//! assert!(matches!(
//!     generate_smooth_path(&repeated),
//!     Err(SmoothError::DegenerateSegment { .. })
//! ));
//! # Ok::<(), SmoothError>(())
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [`Vec2`] with [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the value types.
//! - `schemars`: Add best-effort support for using the value types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! The crate requires that an allocator is available (i.e. it uses [alloc]).
//!
//! Diagnostics go through the [log] facade; install any logger to see them.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars
//! [log]: https://docs.rs/log

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
// Feel free to send a PR that solves one or more of these.
#![allow(
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::missing_assert_message,
    clippy::exhaustive_enums,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("waypoint-smoother requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod boundary;
mod catmull_rom;
mod common;
mod error;
mod param_curve;
mod path;
mod point;
mod sample;
mod smooth;
mod vec2;

pub use crate::boundary::extrapolate_boundary;
pub use crate::catmull_rom::{
    CatmullRom, CatmullRomSegment, CatmullRomSpline, Segments, MIN_KNOT_DISTANCE,
};
pub use crate::error::SmoothError;
pub use crate::param_curve::ParamCurve;
pub use crate::path::Path;
pub use crate::point::Point;
pub use crate::sample::{sample_curve, sample_curves, SAMPLES_PER_SEGMENT};
pub use crate::smooth::{generate_smooth_path, generate_smooth_path_with};
pub use crate::vec2::Vec2;
