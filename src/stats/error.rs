//! Error types for statistical operations.

use std::fmt;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors raised by a distribution when an [`ErrorPolicy`](crate::stats::ErrorPolicy)
/// chooses to fail instead of returning a sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A parameter or argument is outside the mathematically valid range,
    /// or a statistic was requested where it diverges.
    Domain {
        /// Entry point that detected the problem, e.g. `"Pareto::pdf"`.
        function: &'static str,
        /// Human readable message with the offending value substituted.
        message: String,
        /// The offending value, widened to `f64`.
        value: f64,
    },
}

impl StatsError {
    /// Name of the function that reported the error.
    pub fn function(&self) -> &'static str {
        match self {
            Self::Domain { function, .. } => function,
        }
    }

    /// The offending value.
    pub fn value(&self) -> f64 {
        match self {
            Self::Domain { value, .. } => *value,
        }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain {
                function, message, ..
            } => {
                write!(f, "Domain error in {}: {}", function, message)
            }
        }
    }
}

impl std::error::Error for StatsError {}
