//! Floating-point abstraction shared by all distributions.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// Real number type a distribution can be evaluated in.
///
/// Implemented for `f32` and `f64`. Everything beyond [`Float`] is what the
/// distributions need to build small constants and to report offending
/// values through an [`ErrorPolicy`](crate::stats::ErrorPolicy).
pub trait Real: Float + Debug + Display + Send + Sync + 'static {
    /// Exact conversion of a small integer constant.
    fn from_i32(v: i32) -> Self;

    /// Widen to `f64` for error reporting.
    fn to_f64_lossy(self) -> f64;
}

impl Real for f32 {
    #[inline]
    fn from_i32(v: i32) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    #[inline]
    fn from_i32(v: i32) -> Self {
        v as f64
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}
