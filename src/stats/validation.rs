//! Parameter and argument checks shared by the distributions.
//!
//! Each check returns `Ok(None)` when the value is acceptable. Otherwise the
//! policy is consulted: it either fails (`Err`) or yields the sentinel the
//! caller must return unchanged (`Ok(Some(sentinel))`).

use crate::stats::error::StatsResult;
use crate::stats::policy::ErrorPolicy;
use crate::stats::real::Real;

/// Outcome of a validation step.
pub(crate) type Check<F> = StatsResult<Option<F>>;

/// Shared shape of the location/shape/x checks: finite first, then `> 0`.
fn check_finite_positive<F: Real, P: ErrorPolicy>(
    function: &'static str,
    value: F,
    not_finite: &'static str,
    not_positive: &'static str,
) -> Check<F> {
    if !value.is_finite() {
        return P::domain_error(function, not_finite, value).map(Some);
    }
    if value > F::zero() {
        Ok(None)
    } else {
        P::domain_error(function, not_positive, value).map(Some)
    }
}

/// Location (minimum value) must be finite and > 0.
pub(crate) fn check_location<F: Real, P: ErrorPolicy>(
    function: &'static str,
    location: F,
) -> Check<F> {
    check_finite_positive::<F, P>(
        function,
        location,
        "Location parameter is {}, but must be finite!",
        "Location parameter is {}, but must be > 0!",
    )
}

/// Shape must be finite and > 0.
pub(crate) fn check_shape<F: Real, P: ErrorPolicy>(function: &'static str, shape: F) -> Check<F> {
    check_finite_positive::<F, P>(
        function,
        shape,
        "Shape parameter is {}, but must be finite!",
        "Shape parameter is {}, but must be > 0!",
    )
}

/// Evaluation point must be finite and > 0.
pub(crate) fn check_x<F: Real, P: ErrorPolicy>(function: &'static str, x: F) -> Check<F> {
    check_finite_positive::<F, P>(
        function,
        x,
        "x parameter is {}, but must be finite!",
        "x parameter is {}, but must be > 0 !",
    )
}

/// Probability must lie in `[0, 1]`. NaN is rejected.
pub(crate) fn check_probability<F: Real, P: ErrorPolicy>(
    function: &'static str,
    p: F,
) -> Check<F> {
    if p >= F::zero() && p <= F::one() {
        Ok(None)
    } else {
        P::domain_error(
            function,
            "Probability argument is {}, but must be >= 0 and <= 1 !",
            p,
        )
        .map(Some)
    }
}

/// Location then shape. The first failure wins and the policy is invoked once.
pub(crate) fn check_params<F: Real, P: ErrorPolicy>(
    function: &'static str,
    location: F,
    shape: F,
) -> Check<F> {
    if let Some(r) = check_location::<F, P>(function, location)? {
        return Ok(Some(r));
    }
    check_shape::<F, P>(function, shape)
}
