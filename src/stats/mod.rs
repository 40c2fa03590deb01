//! Probability distributions.
//!
//! Distributions are generic over the floating-point type (`f32` or `f64`)
//! and over an [`ErrorPolicy`] that decides how domain errors surface:
//!
//! ```
//! use pareto_dist::stats::{complement, ContinuousDistribution, Distribution, Pareto};
//!
//! let d: Pareto = Pareto::new(1.0, 3.0).unwrap();
//!
//! // Lower and upper tail
//! let lower = d.cdf(2.0).unwrap();
//! let upper = complement(&d, 2.0).cdf().unwrap();
//! assert!((lower + upper - 1.0).abs() < 1e-15);
//!
//! // Moments that do not exist are domain errors...
//! assert!(Pareto::new(1.0, 2.0).unwrap().variance().is_err());
//! // ...except the mean, which saturates to the largest finite value.
//! assert_eq!(Pareto::new(1.0, 0.5).unwrap().mean().unwrap(), f64::MAX);
//! ```

// Traits and types
mod distribution;
mod error;
mod policy;
mod real;
mod validation;

// Distributions
mod continuous;

// Public API: Distribution traits and types
pub use distribution::{complement, Complement, ContinuousDistribution, Distribution};
pub use error::{StatsError, StatsResult};
pub use policy::{format_message, ErrorPolicy, IgnoreDomainError, RaiseDomainError, WarnDomainError};
pub use real::Real;

// Public API: Continuous distributions
pub use continuous::{Pareto, ParetoF32, ParetoF64};
