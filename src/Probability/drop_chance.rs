//! # Binomial Drop Chance
//!
//! ## Purpose
//! Probability of seeing a rare event k times in n independent trials with
//! per-trial probability p. Exact binomial sums where they are numerically
//! safe, log-space coefficients where direct products would overflow, and a
//! continuity-corrected normal approximation for very large n.
//!
//! ## Main Structures
//! - `DropChanceTask` - (n, k, p) with `exactly`, `at_least`, `at_most` and
//!   `between`
//!
//! ## Non-Obvious Features & Tips
//! - coefficients switch to log space when n > 1000 or k > 100
//! - cumulative queries switch to the normal approximation when n > 1000
//! - the normal CDF is a power series around 0 with |z| > 6 clamped to 0 or 1

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// above this trial count cumulative sums use the normal approximation
const NORMAL_APPROXIMATION_N: u64 = 1000;
/// coefficient evaluation moves to log space past these sizes
const LOG_SPACE_N: u64 = 1000;
const LOG_SPACE_K: u64 = 100;
/// |z| beyond this saturates the normal CDF
const CDF_CLAMP_Z: f64 = 6.0;
const CDF_SERIES_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum ProbabilityError {
    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("success count {k} exceeds trial count {n}")]
    SuccessesExceedTrials { k: u64, n: u64 },
    #[error("inverted range: k_low = {k_low} > k_high = {k_high}")]
    InvertedRange { k_low: u64, k_high: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropChanceTask {
    pub n_trials: u64,
    pub k_successes: u64,
    pub p_success: f64,
}

impl DropChanceTask {
    pub fn new(n_trials: u64, k_successes: u64, p_success: f64) -> Self {
        Self {
            n_trials,
            k_successes,
            p_success,
        }
    }

    pub fn check_task(&self) -> Result<(), ProbabilityError> {
        if !(0.0..=1.0).contains(&self.p_success) || self.p_success.is_nan() {
            return Err(ProbabilityError::InvalidProbability(self.p_success));
        }
        if self.k_successes > self.n_trials {
            return Err(ProbabilityError::SuccessesExceedTrials {
                k: self.k_successes,
                n: self.n_trials,
            });
        }
        Ok(())
    }

    /// P(X = k)
    pub fn exactly(&self) -> Result<f64, ProbabilityError> {
        self.check_task()?;
        Ok(binomial_probability(
            self.n_trials,
            self.k_successes,
            self.p_success,
        ))
    }

    /// P(X >= k)
    pub fn at_least(&self) -> Result<f64, ProbabilityError> {
        self.check_task()?;
        let (n, k, p) = (self.n_trials, self.k_successes, self.p_success);
        if n > NORMAL_APPROXIMATION_N {
            return Ok(1.0 - normal_tail(n, k as f64 - 0.5, p));
        }
        Ok((k..=n).map(|i| binomial_probability(n, i, p)).sum())
    }

    /// P(X <= k)
    pub fn at_most(&self) -> Result<f64, ProbabilityError> {
        self.check_task()?;
        let (n, k, p) = (self.n_trials, self.k_successes, self.p_success);
        if n > NORMAL_APPROXIMATION_N {
            return Ok(normal_tail(n, k as f64 + 0.5, p));
        }
        Ok((0..=k).map(|i| binomial_probability(n, i, p)).sum())
    }

    /// P(k_low <= X <= k_high)
    pub fn between(&self, k_low: u64, k_high: u64) -> Result<f64, ProbabilityError> {
        self.check_task()?;
        if k_low > k_high {
            return Err(ProbabilityError::InvertedRange { k_low, k_high });
        }
        if k_high > self.n_trials {
            return Err(ProbabilityError::SuccessesExceedTrials {
                k: k_high,
                n: self.n_trials,
            });
        }
        let (n, p) = (self.n_trials, self.p_success);
        if n > NORMAL_APPROXIMATION_N {
            return Ok(normal_tail(n, k_high as f64 + 0.5, p)
                - normal_tail(n, k_low as f64 - 0.5, p));
        }
        Ok((k_low..=k_high)
            .map(|i| binomial_probability(n, i, p))
            .sum())
    }
}

/// P(X = k) for X ~ Binomial(n, p). Log space for large arguments.
pub fn binomial_probability(n: u64, k: u64, p: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    if p == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    if n > LOG_SPACE_N || k > LOG_SPACE_K {
        let log_p = log_binomial_coefficient(n, k)
            + k as f64 * p.ln()
            + (n - k) as f64 * (1.0 - p).ln();
        return log_p.exp();
    }
    binomial_coefficient(n, k) * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32)
}

/// C(n, k) by the multiplicative formula. Overflows past ~1e308, use the log
/// form for large arguments.
pub fn binomial_coefficient(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

/// ln C(n, k) as a sum of logs.
pub fn log_binomial_coefficient(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    let mut result = 0.0;
    for i in 1..=k {
        result += (((n - k + i) as f64) / i as f64).ln();
    }
    result
}

/// Standard normal CDF by the power series
/// Phi(z) = 1/2 + phi(z) * sum z^(2i+1) / (1*3*...*(2i+1)).
pub fn normal_cdf(z: f64) -> f64 {
    if z < -CDF_CLAMP_Z {
        return 0.0;
    }
    if z > CDF_CLAMP_Z {
        return 1.0;
    }
    let mut sum = 0.0;
    let mut term = z;
    let mut i = 0u32;
    while term.abs() > CDF_SERIES_TOLERANCE {
        sum += term;
        i += 1;
        term *= z * z / (2 * i + 1) as f64;
    }
    0.5 + sum * (-z * z / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// P(X <= threshold) under the normal approximation with the continuity
/// correction already applied by the caller.
fn normal_tail(n: u64, threshold: f64, p: f64) -> f64 {
    let mean = n as f64 * p;
    let sd = (n as f64 * p * (1.0 - p)).sqrt();
    if sd == 0.0 {
        return if threshold >= mean { 1.0 } else { 0.0 };
    }
    normal_cdf((threshold - mean) / sd)
}

/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_cdf_reference_points() {
        assert_relative_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(normal_cdf(1.96), 0.9750021048517292, epsilon = 1e-9);
        assert_eq!(normal_cdf(7.0), 1.0);
        assert_eq!(normal_cdf(-7.0), 0.0);
        // symmetry
        assert_relative_eq!(normal_cdf(1.3) + normal_cdf(-1.3), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_small_coefficients_are_exact() {
        assert_eq!(binomial_coefficient(10, 3), 120.0);
        assert_eq!(binomial_coefficient(5, 0), 1.0);
        assert_eq!(binomial_coefficient(5, 5), 1.0);
        assert_eq!(binomial_coefficient(3, 5), 0.0);
    }

    #[test]
    fn test_log_coefficient_agrees_with_direct_product() {
        assert_relative_eq!(
            log_binomial_coefficient(2000, 2).exp(),
            1_999_000.0,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            log_binomial_coefficient(50, 7),
            binomial_coefficient(50, 7).ln(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_exact_binomial_probabilities() {
        // fair coin, 10 flips
        let task = DropChanceTask::new(10, 3, 0.5);
        assert_relative_eq!(task.exactly().unwrap(), 0.1171875, epsilon = 1e-12);
        assert_relative_eq!(task.between(3, 5).unwrap(), 0.568359375, epsilon = 1e-12);
    }

    #[test]
    fn test_at_least_matches_complement_sums() {
        // 10% drop, 100 runs, at least 10 drops
        let task = DropChanceTask::new(100, 10, 0.1);
        assert_relative_eq!(task.at_least().unwrap(), 0.5487098345579977, epsilon = 1e-9);
        // 20% drop, 10 runs, at least one
        let task = DropChanceTask::new(10, 1, 0.2);
        assert_relative_eq!(task.at_least().unwrap(), 0.8926258176, epsilon = 1e-9);
    }

    #[test]
    fn test_large_n_uses_normal_approximation() {
        let task = DropChanceTask::new(10_000, 4_900, 0.5);
        assert_relative_eq!(task.at_least().unwrap(), 0.9777844055705565, epsilon = 1e-6);
    }

    #[test]
    fn test_large_n_exact_point_probability_stays_in_log_space() {
        // C(2000, 2) * 0.001^2 * 0.999^1998
        let task = DropChanceTask::new(2_000, 2, 0.001);
        assert_relative_eq!(task.exactly().unwrap(), 0.27080599204747047, epsilon = 1e-9);
    }

    #[test]
    fn test_pmf_sums_to_one_and_single_trial_reduces_to_p() {
        let total: f64 = (0..=20).map(|k| binomial_probability(20, k, 0.3)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        let single = DropChanceTask::new(1, 1, 0.37);
        assert_relative_eq!(single.at_least().unwrap(), 0.37, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_probabilities() {
        assert_eq!(DropChanceTask::new(10, 0, 0.0).exactly().unwrap(), 1.0);
        assert_eq!(DropChanceTask::new(10, 3, 0.0).exactly().unwrap(), 0.0);
        assert_eq!(DropChanceTask::new(10, 10, 1.0).exactly().unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(matches!(
            DropChanceTask::new(10, 3, 1.5).exactly().unwrap_err(),
            ProbabilityError::InvalidProbability(_)
        ));
        assert!(matches!(
            DropChanceTask::new(5, 6, 0.5).at_least().unwrap_err(),
            ProbabilityError::SuccessesExceedTrials { k: 6, n: 5 }
        ));
        assert!(matches!(
            DropChanceTask::new(10, 0, 0.5).between(5, 2).unwrap_err(),
            ProbabilityError::InvertedRange { .. }
        ));
    }
}
