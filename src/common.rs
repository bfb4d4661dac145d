// Copyright 2026 the waypoint-smoother Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("waypoint-smoother requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn hypot(self, other: Self) -> Self => hypot;
    fn powf(self, n: Self) -> Self => pow;
}

/// Raise a knot distance to the parameterization exponent.
///
/// `alpha == 0.0` gives uniform intervals of `1.0`.
#[inline]
pub(crate) fn knot_interval(distance: f64, alpha: f64) -> f64 {
    distance.powf(alpha)
}
