// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Normal probability density function with mean `mu` and standard deviation `sigma`
pub fn norm_pdf(mu: f64, sigma: f64, x: f64) -> f64 {
    let z = (x - mu) / sigma;
    (-0.5 * z * z).exp() / (sigma * (2.0 * PI).sqrt())
}

/// Normal cumulative distribution function with mean `mu` and standard deviation `sigma`
pub fn norm_cdf(mu: f64, sigma: f64, x: f64) -> f64 {
    0.5 * (1.0 + erf::erf((x - mu) / (sigma * SQRT_2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_normal_pdf_at_zero() {
        // φ(0) = 1/√(2π)
        let expected = 0.3989422804014327;
        assert!((norm_pdf(0.0, 1.0, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_standard_normal_cdf_symmetry() {
        assert!((norm_cdf(0.0, 1.0, 0.0) - 0.5).abs() < 1e-12);
        let x = 1.2345;
        let sum = norm_cdf(0.0, 1.0, x) + norm_cdf(0.0, 1.0, -x);
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cdf_known_value() {
        // Φ(1.96) ≈ 0.975
        assert!((norm_cdf(0.0, 1.0, 1.96) - 0.9750021048517795).abs() < 1e-9);
    }

    #[test]
    fn test_cdf_saturates_in_the_tails() {
        assert!(norm_cdf(0.0, 1.0, -40.0) < 1e-300);
        assert!((norm_cdf(0.0, 1.0, 40.0) - 1.0).abs() < 1e-15);
    }
}
