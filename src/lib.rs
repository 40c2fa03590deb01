//! pareto-dist - the Pareto (Type I) distribution
//!
//! Density, cumulative probability, quantiles and their upper-tail
//! complements, moments and shape statistics for the Pareto distribution
//! with location (minimum value) `xₘ` and shape (tail index) `α`.
//!
//! # Design
//!
//! - **Generic precision**: every distribution is generic over [`stats::Real`],
//!   implemented for `f32` and `f64`.
//! - **Pluggable error policy**: invalid parameters, invalid arguments and
//!   diverging moments are all reported through one [`stats::ErrorPolicy`]. The
//!   default [`stats::RaiseDomainError`] returns `Err`; [`stats::IgnoreDomainError`]
//!   and [`stats::WarnDomainError`] return NaN instead.
//! - **Complements**: `complement(&dist, x)` selects dedicated upper-tail
//!   formulas rather than computing `1 - cdf`.
//!
//! # Example
//!
//! ```
//! use pareto_dist::stats::{complement, ContinuousDistribution, Distribution, Pareto};
//!
//! let d: Pareto = Pareto::new(2.0, 3.0).unwrap();  // location=2, shape=3
//! assert_eq!(d.mode().unwrap(), 2.0);
//! assert!((d.variance().unwrap() - 3.0).abs() < 1e-12);
//! assert!(d.skewness().is_err());
//!
//! let x = d.quantile(0.9).unwrap();
//! let x_upper = complement(&d, 0.1).quantile().unwrap();
//! assert!((x - x_upper).abs() < 1e-12 * x);
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! [`stats::RaiseDomainError`] emits each error at `debug` level,
//! [`stats::WarnDomainError`] at `warn` level.

pub mod stats;

// Re-export main types for convenience
pub use stats::{
    complement,
    Complement,
    // Distribution traits
    ContinuousDistribution,
    Distribution,
    // Error policies
    ErrorPolicy,
    IgnoreDomainError,
    // Distributions
    Pareto,
    ParetoF32,
    ParetoF64,
    RaiseDomainError,
    Real,
    // Errors
    StatsError,
    StatsResult,
    WarnDomainError,
};
