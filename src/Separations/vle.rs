//! # Vapor-Liquid Equilibrium Curve
//!
//! ## Purpose
//! Sampled binary equilibrium data y(x) for the light component. The curve may
//! be generated from a constant relative volatility or supplied as measured
//! points; interpolation in both directions drives the McCabe-Thiele staircase.
//!
//! ## Main Structures
//! - `VleCurve` - monotone (x, y) samples on [0, 1]
//!
//! ## Key Methods
//! - `from_relative_volatility` - y = a*x / (1 + (a - 1)*x) on a uniform grid
//! - `y_at_x`, `x_at_y` - piecewise-linear interpolation
//! - `average_volatility` - mean of y(1-x) / (x(1-y)) over interior points,
//!   the volatility estimate fed to the Fenske equation

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VleCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl VleCurve {
    /// Equilibrium curve of an ideal binary pair with constant relative
    /// volatility `alpha`, sampled at `n_points` uniform liquid compositions.
    pub fn from_relative_volatility(alpha: f64, n_points: usize) -> Self {
        let n = n_points.max(2);
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        for i in 0..n {
            let xi = i as f64 / (n - 1) as f64;
            x.push(xi);
            y.push(alpha * xi / (1.0 + (alpha - 1.0) * xi));
        }
        Self { x, y }
    }

    /// Curve from measured data. Samples are expected sorted by `x` with `y`
    /// non-decreasing, as equilibrium data for the light component always is.
    pub fn from_data(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    pub fn n_points(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    /// Vapor composition at liquid composition `x_target` by linear
    /// interpolation. None outside the sampled range.
    pub fn y_at_x(&self, x_target: f64) -> Option<f64> {
        interpolate(&self.x, &self.y, x_target)
    }

    /// Liquid composition in equilibrium with vapor `y_target` by linear
    /// interpolation. None outside the sampled range.
    pub fn x_at_y(&self, y_target: f64) -> Option<f64> {
        interpolate(&self.y, &self.x, y_target)
    }

    /// Mean relative volatility y(1-x) / (x(1-y)) over the interior sample
    /// points. None when no interior point exists.
    pub fn average_volatility(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for i in 0..self.n_points() {
            let (xi, yi) = (self.x[i], self.y[i]);
            if xi > 0.0 && xi < 1.0 && yi > 0.0 && yi < 1.0 {
                sum += yi * (1.0 - xi) / (xi * (1.0 - yi));
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

fn interpolate(abscissa: &[f64], ordinate: &[f64], target: f64) -> Option<f64> {
    let n = abscissa.len().min(ordinate.len());
    for i in 0..n.saturating_sub(1) {
        let (a0, a1) = (abscissa[i], abscissa[i + 1]);
        if (a0..=a1).contains(&target) {
            if a1 == a0 {
                return Some(ordinate[i]);
            }
            let w = (target - a0) / (a1 - a0);
            return Some(ordinate[i] + w * (ordinate[i + 1] - ordinate[i]));
        }
    }
    None
}

/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_volatility_curve_endpoints_and_midpoint() {
        let vle = VleCurve::from_relative_volatility(2.5, 101);
        assert_eq!(vle.n_points(), 101);
        assert_relative_eq!(vle.y[0], 0.0);
        assert_relative_eq!(vle.y[100], 1.0);
        // y(0.5) = 2.5 * 0.5 / (1 + 1.5 * 0.5)
        assert_relative_eq!(vle.y_at_x(0.5).unwrap(), 2.5 * 0.5 / 1.75, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolation_inverts() {
        let vle = VleCurve::from_relative_volatility(2.5, 101);
        let y = vle.y_at_x(0.37).unwrap();
        let x = vle.x_at_y(y).unwrap();
        assert_relative_eq!(x, 0.37, epsilon = 1e-6);
    }

    #[test]
    fn test_interpolation_outside_range_is_none() {
        let vle = VleCurve::from_relative_volatility(2.5, 11);
        assert!(vle.y_at_x(1.5).is_none());
        assert!(vle.x_at_y(-0.1).is_none());
    }

    #[test]
    fn test_average_volatility_recovers_constant_alpha() {
        let vle = VleCurve::from_relative_volatility(2.5, 101);
        assert_relative_eq!(vle.average_volatility().unwrap(), 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_average_volatility_none_without_interior_points() {
        let vle = VleCurve::from_data(vec![0.0, 1.0], vec![0.0, 1.0]);
        assert!(vle.average_volatility().is_none());
    }
}
