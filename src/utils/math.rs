//! Logarithms of arbitrary base.
//!
//! No domain checks are made: `x <= 0.0` yields whatever `f64::ln` yields
//! (`-inf` for zero, `NaN` for negatives).

/// Returns the base-2 logarithm of `x`.
pub fn log2(x: f64) -> f64 {
    log_base(x, 2.0)
}

/// Returns the logarithm of `x` in the given `base`, computed as `ln(x) / ln(base)`.
pub fn log_base(x: f64, base: f64) -> f64 {
    x.ln() / base.ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log2() {
        assert_relative_eq!(log2(2.5), 1.3219280948873624, epsilon = 1e-8);
        assert_relative_eq!(log2(8.0), 3.0, epsilon = 1e-12);
        assert_eq!(log2(1.0), 0.0);
    }

    #[test]
    fn test_log_base() {
        assert_relative_eq!(log_base(1000.0, 10.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(log_base(81.0, 3.0), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_log2_outside_domain() {
        assert_eq!(log2(0.0), f64::NEG_INFINITY);
        assert!(log2(-1.0).is_nan());
    }
}
