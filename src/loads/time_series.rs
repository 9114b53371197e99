//! Time series - load factor as a function of pseudo-time

use serde::{Deserialize, Serialize};

/// Maps domain pseudo-time to a load factor applied to a pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimeSeries {
    /// Factor is `factor` at all times
    Constant { factor: f64 },
    /// Factor grows linearly, `factor * time`
    Linear { factor: f64 },
}

impl TimeSeries {
    /// Linear series with unit slope
    pub fn linear() -> Self {
        TimeSeries::Linear { factor: 1.0 }
    }

    /// Constant series with unit factor
    pub fn constant() -> Self {
        TimeSeries::Constant { factor: 1.0 }
    }

    /// Load factor at a pseudo-time
    pub fn factor_at(&self, time: f64) -> f64 {
        match *self {
            TimeSeries::Constant { factor } => factor,
            TimeSeries::Linear { factor } => factor * time,
        }
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::linear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_factors() {
        assert_eq!(TimeSeries::linear().factor_at(0.0), 0.0);
        assert_eq!(TimeSeries::linear().factor_at(1.0), 1.0);
        assert_eq!(TimeSeries::Linear { factor: 2.0 }.factor_at(0.5), 1.0);
        assert_eq!(TimeSeries::Constant { factor: 3.0 }.factor_at(7.0), 3.0);
    }
}
