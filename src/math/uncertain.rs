//! A measured quantity with a 1-sigma standard error.
//!
//! The Marshall grid stores every radius and extinction as a (value, error)
//! pair, and the estimator only ever needs two operations on them:
//!
//! - division by a constant (band conversion)
//! - subtraction (adjacent-cut differences)
//!
//! So this is a deliberately tiny value type, not a general error-propagation
//! library.

use std::fmt;
use std::ops::{Div, Sub};

use serde::{Deserialize, Serialize};

/// `nominal ± stderr`. Invariant: `stderr >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UncertainValue {
    nominal: f64,
    stderr: f64,
}

impl UncertainValue {
    pub fn new(nominal: f64, stderr: f64) -> Self {
        debug_assert!(stderr >= 0.0, "stderr must be non-negative");
        Self { nominal, stderr }
    }

    /// An exactly known value (zero standard error).
    pub fn exact(nominal: f64) -> Self {
        Self::new(nominal, 0.0)
    }

    pub fn nominal(&self) -> f64 {
        self.nominal
    }

    pub fn stderr(&self) -> f64 {
        self.stderr
    }
}

impl Div<f64> for UncertainValue {
    type Output = UncertainValue;

    /// Scale by `1/k`. Uses `|k|` for the error so the non-negativity
    /// invariant holds for any constant.
    fn div(self, k: f64) -> UncertainValue {
        UncertainValue {
            nominal: self.nominal / k,
            stderr: self.stderr / k.abs(),
        }
    }
}

impl Sub for UncertainValue {
    type Output = UncertainValue;

    /// Difference of two independent measurements; errors add in quadrature.
    fn sub(self, other: UncertainValue) -> UncertainValue {
        UncertainValue {
            nominal: self.nominal - other.nominal,
            stderr: (self.stderr * self.stderr + other.stderr * other.stderr).sqrt(),
        }
    }
}

impl fmt::Display for UncertainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.p$} ± {:.p$}", self.nominal, self.stderr),
            None => write!(f, "{} ± {}", self.nominal, self.stderr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_scales_both_parts() {
        let a = UncertainValue::new(0.228, 0.057);
        let v = a / 0.114;
        assert!((v.nominal() - 2.0).abs() < 1e-12);
        assert!((v.stderr() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn subtraction_combines_errors_in_quadrature() {
        let a = UncertainValue::new(5.0, 3.0);
        let b = UncertainValue::new(1.0, 4.0);
        let d = a - b;
        assert!((d.nominal() - 4.0).abs() < 1e-12);
        assert!((d.stderr() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn display_honors_precision() {
        let a = UncertainValue::new(1.2345, 0.0456);
        assert_eq!(format!("{a:.2}"), "1.23 ± 0.05");
    }
}
