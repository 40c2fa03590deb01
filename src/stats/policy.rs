//! Error policies.
//!
//! A distribution never decides on its own how a domain error surfaces. Every
//! validation failure and every undefined statistic is handed to the
//! distribution's [`ErrorPolicy`], which either fails with a [`StatsError`]
//! or produces the value the caller gets back (usually NaN).
//!
//! Policies are zero-sized types selected through a type parameter:
//!
//! ```
//! use pareto_dist::stats::{Distribution, IgnoreDomainError, Pareto};
//!
//! let strict = Pareto::<f64>::new(0.0, 1.0);
//! assert!(strict.is_err());
//!
//! let lenient = Pareto::<f64, IgnoreDomainError>::with_policy(0.0, 1.0).unwrap();
//! assert!(lenient.mode().unwrap().is_nan());
//! ```

use std::fmt::Debug;

use crate::stats::error::{StatsError, StatsResult};
use crate::stats::real::Real;

/// Strategy for reporting domain errors.
pub trait ErrorPolicy: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Report that `value` is invalid inside `function`.
    ///
    /// `template` contains a single `{}` placeholder for the value. The
    /// returned `Ok` value becomes the result of the failing call.
    fn domain_error<F: Real>(
        function: &'static str,
        template: &'static str,
        value: F,
    ) -> StatsResult<F>;

    /// Value standing in for +∞ in quantiles, support bounds and the mean.
    fn max_value<F: Real>() -> F {
        F::max_value()
    }
}

/// Substitute `value` into the `{}` placeholder of `template`.
pub fn format_message<F: Real>(template: &str, value: F) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

/// Fail with [`StatsError::Domain`]. This is the default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaiseDomainError;

impl ErrorPolicy for RaiseDomainError {
    fn domain_error<F: Real>(
        function: &'static str,
        template: &'static str,
        value: F,
    ) -> StatsResult<F> {
        let message = format_message(template, value);
        log::debug!("{}: {}", function, message);
        Err(StatsError::Domain {
            function,
            message,
            value: value.to_f64_lossy(),
        })
    }
}

/// Return NaN and say nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreDomainError;

impl ErrorPolicy for IgnoreDomainError {
    fn domain_error<F: Real>(
        _function: &'static str,
        _template: &'static str,
        _value: F,
    ) -> StatsResult<F> {
        Ok(F::nan())
    }
}

/// Log the message at `warn` level and return NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarnDomainError;

impl ErrorPolicy for WarnDomainError {
    fn domain_error<F: Real>(
        function: &'static str,
        template: &'static str,
        value: F,
    ) -> StatsResult<F> {
        log::warn!("{}: {}", function, format_message(template, value));
        Ok(F::nan())
    }
}
