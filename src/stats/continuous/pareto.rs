//! Pareto distribution.

use std::marker::PhantomData;

use crate::stats::error::StatsResult;
use crate::stats::policy::{ErrorPolicy, RaiseDomainError};
use crate::stats::real::Real;
use crate::stats::validation::{check_params, check_probability, check_x, Check};
use crate::stats::{ContinuousDistribution, Distribution};

use super::special::{pow, powm1};

const NEW: &str = "Pareto::new";
const PDF: &str = "Pareto::pdf";
const LOG_PDF: &str = "Pareto::log_pdf";
const CDF: &str = "Pareto::cdf";
const SF: &str = "Pareto::sf";
const PPF: &str = "Pareto::ppf";
const ISF: &str = "Pareto::isf";
const HAZARD: &str = "Pareto::hazard";
const CHF: &str = "Pareto::chf";
const MEAN: &str = "Pareto::mean";
const MODE: &str = "Pareto::mode";
const MEDIAN: &str = "Pareto::median";
const VARIANCE: &str = "Pareto::variance";
const SKEWNESS: &str = "Pareto::skewness";
const KURTOSIS: &str = "Pareto::kurtosis";
const KURTOSIS_EXCESS: &str = "Pareto::kurtosis_excess";
const ENTROPY: &str = "Pareto::entropy";

/// Pareto distribution (Type I).
///
/// The Pareto distribution is a power-law probability distribution with PDF:
///
/// f(x; xₘ, α) = α * xₘ^α / x^(α+1)  for x ≥ xₘ
///
/// where:
/// - xₘ > 0 is the location (minimum value)
/// - α > 0 is the shape parameter (tail index)
///
/// `F` is the floating-point type the distribution is evaluated in and `P`
/// the [`ErrorPolicy`] deciding how invalid input is reported. With the
/// default [`RaiseDomainError`] every problem comes back as `Err`; with a
/// sentinel policy such as [`IgnoreDomainError`](crate::stats::IgnoreDomainError)
/// it comes back as `Ok(NaN)`.
///
/// # Example
///
/// ```
/// use pareto_dist::stats::{complement, ContinuousDistribution, Distribution, Pareto};
///
/// let p: Pareto = Pareto::new(1.0, 2.0).unwrap();  // location=1, shape=2
/// assert_eq!(p.pdf(1.0).unwrap(), 2.0);
/// assert_eq!(p.mean().unwrap(), 2.0);
///
/// let upper = complement(&p, 2.0).cdf().unwrap();
/// assert_eq!(upper, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto<F = f64, P = RaiseDomainError> {
    /// Location parameter (minimum value, xₘ > 0)
    location: F,
    /// Shape parameter (tail index, α > 0)
    shape: F,
    policy: PhantomData<P>,
}

/// Single precision Pareto with the default policy.
pub type ParetoF32 = Pareto<f32>;

/// Double precision Pareto with the default policy.
pub type ParetoF64 = Pareto<f64>;

impl<F: Real> Pareto<F> {
    /// Create a new Pareto distribution using the default policy.
    ///
    /// # Arguments
    ///
    /// * `location` - Location xₘ (must be finite and > 0)
    /// * `shape` - Shape parameter α (must be finite and > 0)
    pub fn new(location: F, shape: F) -> StatsResult<Self> {
        Self::with_policy(location, shape)
    }

    /// Create a standard Pareto distribution (location=1).
    pub fn standard(shape: F) -> StatsResult<Self> {
        Self::new(F::one(), shape)
    }
}

impl<F: Real, P: ErrorPolicy> Pareto<F, P> {
    /// Create a new Pareto distribution reporting through policy `P`.
    ///
    /// A sentinel policy lets an invalid distribution be built; every
    /// statistic evaluated on it then yields the policy's sentinel.
    pub fn with_policy(location: F, shape: F) -> StatsResult<Self> {
        check_params::<F, P>(NEW, location, shape)?;
        Ok(Self {
            location,
            shape,
            policy: PhantomData,
        })
    }

    /// Get the location (minimum value).
    pub fn location(&self) -> F {
        self.location
    }

    /// Get the shape parameter.
    pub fn shape(&self) -> F {
        self.shape
    }

    fn check(&self, function: &'static str) -> Check<F> {
        check_params::<F, P>(function, self.location, self.shape)
    }

    fn check_with_x(&self, function: &'static str, x: F) -> Check<F> {
        if let Some(r) = check_x::<F, P>(function, x)? {
            return Ok(Some(r));
        }
        self.check(function)
    }

    fn check_with_probability(&self, function: &'static str, p: F) -> Check<F> {
        if let Some(r) = check_probability::<F, P>(function, p)? {
            return Ok(Some(r));
        }
        self.check(function)
    }
}

impl<F: Real, P: ErrorPolicy> Default for Pareto<F, P> {
    /// location=1, shape=1
    fn default() -> Self {
        Self {
            location: F::one(),
            shape: F::one(),
            policy: PhantomData,
        }
    }
}

impl<F: Real, P: ErrorPolicy> Distribution<F> for Pareto<F, P> {
    fn range(&self) -> (F, F) {
        (F::zero(), P::max_value())
    }

    fn support(&self) -> (F, F) {
        (self.location, P::max_value())
    }

    fn mean(&self) -> StatsResult<F> {
        if let Some(r) = self.check(MEAN)? {
            return Ok(r);
        }
        let alpha = self.shape;
        if alpha > F::one() {
            Ok(alpha * self.location / (alpha - F::one()))
        } else {
            // Heavy tail: diverges, reported as the +∞ stand-in rather than an error.
            Ok(P::max_value())
        }
    }

    fn variance(&self) -> StatsResult<F> {
        if let Some(r) = self.check(VARIANCE)? {
            return Ok(r);
        }
        let alpha = self.shape;
        let xm = self.location;
        let two = F::from_i32(2);
        if alpha > two {
            let am1 = alpha - F::one();
            Ok((xm * xm * alpha) / (am1 * am1 * (alpha - two)))
        } else {
            P::domain_error(
                VARIANCE,
                "variance is undefined for shape <= 2, but got {}.",
                alpha,
            )
        }
    }

    fn median(&self) -> StatsResult<F> {
        if let Some(r) = self.check(MEDIAN)? {
            return Ok(r);
        }
        Ok(self.location * pow(F::from_i32(2), F::one() / self.shape))
    }

    fn mode(&self) -> StatsResult<F> {
        if let Some(r) = self.check(MODE)? {
            return Ok(r);
        }
        Ok(self.location)
    }

    fn skewness(&self) -> StatsResult<F> {
        if let Some(r) = self.check(SKEWNESS)? {
            return Ok(r);
        }
        let alpha = self.shape;
        let two = F::from_i32(2);
        let three = F::from_i32(3);
        if alpha > three {
            Ok(((alpha - two) / alpha).sqrt() * two * (alpha + F::one()) / (alpha - three))
        } else {
            P::domain_error(
                SKEWNESS,
                "skewness is undefined for shape <= 3, but got {}.",
                alpha,
            )
        }
    }

    fn kurtosis(&self) -> StatsResult<F> {
        if let Some(r) = self.check(KURTOSIS)? {
            return Ok(r);
        }
        let alpha = self.shape;
        let two = F::from_i32(2);
        let three = F::from_i32(3);
        let four = F::from_i32(4);
        if alpha > four {
            let num = three * ((alpha - two) * (three * alpha * alpha + alpha + two));
            Ok(num / (alpha * (alpha - three) * (alpha - four)))
        } else {
            P::domain_error(
                KURTOSIS,
                "kurtosis is undefined for shape <= 4, but got {}.",
                alpha,
            )
        }
    }

    fn kurtosis_excess(&self) -> StatsResult<F> {
        if let Some(r) = self.check(KURTOSIS_EXCESS)? {
            return Ok(r);
        }
        let alpha = self.shape;
        let three = F::from_i32(3);
        let four = F::from_i32(4);
        if alpha > four {
            let a2 = alpha * alpha;
            let num = F::from_i32(6) * (a2 * alpha + a2 - F::from_i32(6) * alpha - F::from_i32(2));
            Ok(num / (alpha * (alpha - three) * (alpha - four)))
        } else {
            P::domain_error(
                KURTOSIS_EXCESS,
                "kurtosis_excess is undefined for shape <= 4, but got {}.",
                alpha,
            )
        }
    }

    fn entropy(&self) -> StatsResult<F> {
        if let Some(r) = self.check(ENTROPY)? {
            return Ok(r);
        }
        // ln(xₘ/α) + 1/α + 1
        Ok((self.location / self.shape).ln() + F::one() / self.shape + F::one())
    }
}

impl<F: Real, P: ErrorPolicy> ContinuousDistribution<F> for Pareto<F, P> {
    fn pdf(&self, x: F) -> StatsResult<F> {
        if let Some(r) = self.check_with_x(PDF, x)? {
            return Ok(r);
        }
        if x < self.location {
            return Ok(F::zero());
        }
        // α/x * (xₘ/x)^α: xₘ/x ≤ 1, so neither factor overflows for large α.
        let alpha = self.shape;
        Ok(alpha / x * pow(self.location / x, alpha))
    }

    fn log_pdf(&self, x: F) -> StatsResult<F> {
        if let Some(r) = self.check_with_x(LOG_PDF, x)? {
            return Ok(r);
        }
        if x < self.location {
            return Ok(F::neg_infinity());
        }
        let alpha = self.shape;
        Ok(alpha.ln() + alpha * self.location.ln() - (alpha + F::one()) * x.ln())
    }

    fn cdf(&self, x: F) -> StatsResult<F> {
        if let Some(r) = self.check_with_x(CDF, x)? {
            return Ok(r);
        }
        if x <= self.location {
            return Ok(F::zero());
        }
        // 1 - (xₘ/x)^α, accurate when x is just above xₘ.
        Ok(-powm1(self.location / x, self.shape))
    }

    fn sf(&self, x: F) -> StatsResult<F> {
        if let Some(r) = self.check_with_x(SF, x)? {
            return Ok(r);
        }
        if x <= self.location {
            return Ok(F::one());
        }
        Ok(pow(self.location / x, self.shape))
    }

    fn ppf(&self, p: F) -> StatsResult<F> {
        if let Some(r) = self.check_with_probability(PPF, p)? {
            return Ok(r);
        }
        if p == F::zero() {
            return Ok(self.location);
        }
        if p == F::one() {
            return Ok(P::max_value());
        }
        Ok(self.location / pow(F::one() - p, F::one() / self.shape))
    }

    fn isf(&self, q: F) -> StatsResult<F> {
        if let Some(r) = self.check_with_probability(ISF, q)? {
            return Ok(r);
        }
        if q == F::one() {
            return Ok(self.location);
        }
        if q == F::zero() {
            return Ok(P::max_value());
        }
        Ok(self.location / pow(q, F::one() / self.shape))
    }

    fn hazard(&self, x: F) -> StatsResult<F> {
        if let Some(r) = self.check_with_x(HAZARD, x)? {
            return Ok(r);
        }
        if x < self.location {
            return Ok(F::zero());
        }
        Ok(self.shape / x)
    }

    fn chf(&self, x: F) -> StatsResult<F> {
        if let Some(r) = self.check_with_x(CHF, x)? {
            return Ok(r);
        }
        if x <= self.location {
            return Ok(F::zero());
        }
        Ok(self.shape * (x / self.location).ln())
    }
}
