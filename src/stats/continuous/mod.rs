//! Continuous probability distributions.

mod pareto;

pub use pareto::{Pareto, ParetoF32, ParetoF64};

/// Power primitives used by the closed-form distributions.
pub(crate) mod special {
    use crate::stats::real::Real;

    /// `x^y`.
    #[inline]
    pub fn pow<F: Real>(x: F, y: F) -> F {
        x.powf(y)
    }

    /// `x^y - 1` without cancellation when the result is close to zero.
    ///
    /// For `x` near 1, or small `y`, the result is `expm1(y * ln(x))`, which
    /// keeps full relative precision where `pow(x, y) - 1` would lose most
    /// of its digits.
    pub fn powm1<F: Real>(x: F, y: F) -> F {
        let half = F::from_i32(1) / F::from_i32(2);
        let fifth = F::from_i32(1) / F::from_i32(5);

        if x > F::zero() {
            if (y * (x - F::one())).abs() < half || y.abs() < fifth {
                let l = y * x.ln();
                if l < half {
                    return l.exp_m1();
                }
            }
        } else if x < F::zero() && y.trunc() == y {
            // Even integer powers of a negative base are the powers of |x|.
            let half_y = y / F::from_i32(2);
            if half_y.trunc() == half_y {
                return powm1(-x, y);
            }
        }
        pow(x, y) - F::one()
    }

}
