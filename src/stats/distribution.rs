//! Distribution traits and the complement wrapper.

use num_traits::Float;

use crate::stats::error::StatsResult;
use crate::stats::real::Real;

/// Properties shared by every univariate distribution.
///
/// Every statistic returns a [`StatsResult`]: what happens on invalid
/// parameters, or where a moment does not exist, is decided by the
/// distribution's [`ErrorPolicy`](crate::stats::ErrorPolicy).
pub trait Distribution<F: Real> {
    /// Values the random variable type can take, regardless of parameters.
    fn range(&self) -> (F, F);

    /// Values where the density is strictly positive.
    fn support(&self) -> (F, F);

    /// Mean (expected value).
    fn mean(&self) -> StatsResult<F>;

    /// Variance.
    fn variance(&self) -> StatsResult<F>;

    /// Standard deviation.
    fn std_dev(&self) -> StatsResult<F> {
        self.variance().map(Float::sqrt)
    }

    /// Median.
    fn median(&self) -> StatsResult<F>;

    /// Mode.
    fn mode(&self) -> StatsResult<F>;

    /// Skewness.
    fn skewness(&self) -> StatsResult<F>;

    /// Kurtosis (not excess).
    fn kurtosis(&self) -> StatsResult<F>;

    /// Excess kurtosis (kurtosis − 3).
    fn kurtosis_excess(&self) -> StatsResult<F>;

    /// Differential entropy in nats.
    fn entropy(&self) -> StatsResult<F>;

    /// Coefficient of variation: `std_dev / mean`.
    fn coefficient_of_variation(&self) -> StatsResult<F> {
        let sd = self.std_dev()?;
        let mu = self.mean()?;
        Ok(sd / mu)
    }
}

/// Continuous distributions.
///
/// `sf` and `isf` are the upper-tail counterparts of `cdf` and `ppf`. They
/// are separate formulas, not `1 - cdf`, so that small upper-tail
/// probabilities keep their precision. The same entry points are reachable
/// through [`complement`].
pub trait ContinuousDistribution<F: Real>: Distribution<F> {
    /// Probability density function.
    fn pdf(&self, x: F) -> StatsResult<F>;

    /// Natural log of the density.
    fn log_pdf(&self, x: F) -> StatsResult<F> {
        self.pdf(x).map(Float::ln)
    }

    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: F) -> StatsResult<F>;

    /// Survival function P(X > x).
    fn sf(&self, x: F) -> StatsResult<F>;

    /// Percent point function (inverse CDF).
    fn ppf(&self, p: F) -> StatsResult<F>;

    /// Inverse survival function.
    fn isf(&self, q: F) -> StatsResult<F>;

    /// Quantile: the `x` with `cdf(x) == p`.
    fn quantile(&self, p: F) -> StatsResult<F> {
        self.ppf(p)
    }

    /// Hazard function `pdf(x) / sf(x)`.
    fn hazard(&self, x: F) -> StatsResult<F> {
        let d = self.pdf(x)?;
        if x < self.support().0 && d == F::zero() {
            return Ok(F::zero());
        }
        let s = self.sf(x)?;
        Ok(d / s)
    }

    /// Cumulative hazard `-ln(sf(x))`.
    fn chf(&self, x: F) -> StatsResult<F> {
        self.sf(x).map(|s| -s.ln())
    }
}

/// A distribution paired with a value, selecting the upper-tail formulas.
///
/// ```
/// use pareto_dist::stats::{complement, ContinuousDistribution, Pareto};
///
/// let d: Pareto = Pareto::new(1.0, 2.0).unwrap();
/// let upper = complement(&d, 4.0).cdf().unwrap();
/// assert_eq!(upper, d.sf(4.0).unwrap());
/// ```
#[derive(Debug)]
pub struct Complement<'a, D, F> {
    dist: &'a D,
    value: F,
}

impl<D, F: Copy> Clone for Complement<'_, D, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, F: Copy> Copy for Complement<'_, D, F> {}

/// Wrap `dist` and `value` so that `cdf` and `quantile` use the complement.
pub fn complement<D, F>(dist: &D, value: F) -> Complement<'_, D, F> {
    Complement { dist, value }
}

impl<'a, D, F: Copy> Complement<'a, D, F> {
    /// The wrapped distribution.
    pub fn distribution(&self) -> &'a D {
        self.dist
    }

    /// The wrapped point or probability.
    pub fn value(&self) -> F {
        self.value
    }
}

impl<D, F> Complement<'_, D, F>
where
    F: Real,
    D: ContinuousDistribution<F>,
{
    /// Upper-tail probability P(X > x).
    pub fn cdf(&self) -> StatsResult<F> {
        self.dist.sf(self.value)
    }

    /// The `x` whose upper-tail probability is `q`.
    pub fn quantile(&self) -> StatsResult<F> {
        self.dist.isf(self.value)
    }
}
