//! # FOPTD Process Model
//!
//! ## Purpose
//! First-order-plus-time-delay model K * e^(-theta*s) / (tau*s + 1), the
//! workhorse approximation behind every tuning correlation in
//! [`pid_tuning`](crate::ProcessControl::pid_tuning). Also computes the
//! open-loop step response for display.

use crate::Utils::plotting::{PlotSeries, PlotWindow};
use serde::{Deserialize, Serialize};

/// time constants below this floor are clamped to keep the correlations finite
const PARAMETER_FLOOR: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoptdModel {
    /// process gain
    pub gain: f64,
    /// time constant, floored at 1e-9
    pub tau: f64,
    /// dead time, floored at 1e-9
    pub theta: f64,
}

impl FoptdModel {
    pub fn new(gain: f64, tau: f64, theta: f64) -> Self {
        Self {
            gain,
            tau: tau.max(PARAMETER_FLOOR),
            theta: theta.max(PARAMETER_FLOOR),
        }
    }

    /// Open-loop response to a step of magnitude `magnitude` at t = 0:
    /// zero until the dead time elapses, then the first-order rise.
    pub fn step_response(&self, magnitude: f64, t_end: f64, n_points: usize) -> PlotSeries {
        let n = n_points.max(2);
        let mut t = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        for i in 0..n {
            let ti = t_end * i as f64 / (n - 1) as f64;
            t.push(ti);
            if ti < self.theta {
                y.push(0.0);
            } else {
                y.push(self.gain * magnitude * (1.0 - (-(ti - self.theta) / self.tau).exp()));
            }
        }
        PlotSeries::lines(t, y, "Step response")
    }

    pub fn step_response_payload(&self, magnitude: f64, t_end: f64, n_points: usize) -> PlotWindow {
        PlotWindow {
            title: "Open-Loop Step Response".to_string(),
            x_label: "Time".to_string(),
            y_label: "Process output".to_string(),
            x_range: Some((0.0, t_end)),
            y_range: None,
            series: vec![self.step_response(magnitude, t_end, n_points)],
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_response_is_delayed_then_rises_to_km() {
        let model = FoptdModel::new(1.0, 10.0, 2.0);
        let series = model.step_response(1.0, 80.0, 801);
        // flat during the dead time
        for (ti, yi) in series.x.iter().zip(series.y.iter()) {
            if *ti < 2.0 {
                assert_eq!(*yi, 0.0);
            }
        }
        // one time constant past the dead time: K*M*(1 - 1/e)
        let j = series.x.iter().position(|&ti| ti == 12.0).unwrap();
        assert_relative_eq!(series.y[j], 0.6321205588285577, epsilon = 1e-12);
        // settles near K*M
        assert_relative_eq!(*series.y.last().unwrap(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_time_constants_are_floored() {
        let model = FoptdModel::new(2.0, 0.0, -1.0);
        assert!(model.tau > 0.0);
        assert!(model.theta > 0.0);
        let series = model.step_response(1.0, 1.0, 11);
        // effectively instantaneous: output jumps to K*M
        assert_relative_eq!(series.y[1], 2.0, epsilon = 1e-6);
    }
}
