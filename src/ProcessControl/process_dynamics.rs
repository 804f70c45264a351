//! # Process Dynamics Simulator
//!
//! ## Purpose
//! Closed-form responses of first and second order linear processes to step
//! and ramp inputs, sampled on a uniform time grid together with the input
//! signal, plus the analytic response metrics of the underdamped step case.
//!
//! ## Main Structures
//! - `ProcessDynamicsTask` - order, input kind and parameters with `solve()`
//!   and `plot_payload()`
//! - `DynamicResponse` - sampled response, sampled input, metrics
//! - `ResponseMetrics` - peak time, overshoot, oscillation period, decay ratio
//!
//! ## Non-Obvious Features & Tips
//! - metrics are defined only for the underdamped (zeta < 1) second order
//!   step response; every other case reports an empty `ResponseMetrics`
//! - a second order ramp response is not modeled and solving one is an error
//! - `tau` is floored at 1e-9 like the FOPTD parameters

use crate::ProcessControl::pid_tuning::ProcessControlError;
use crate::Utils::plotting::{PlotSeries, PlotWindow};
use log::info;
use serde::{Deserialize, Serialize};

const PARAMETER_FLOOR: f64 = 1e-9;
const DEFAULT_T_END: f64 = 50.0;
const DEFAULT_N_POINTS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProcessOrder {
    First,
    /// second order with damping coefficient zeta
    Second { zeta: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    Step,
    Ramp,
}

/// analytic characteristics of an underdamped step response; all None otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetrics {
    /// time of the first response maximum, pi*tau/sqrt(1 - zeta^2)
    pub peak_time: Option<f64>,
    /// fractional overshoot above the final value, exp(-pi*zeta/sqrt(1 - zeta^2))
    pub overshoot: Option<f64>,
    /// period of the damped oscillation, 2*pi*tau/sqrt(1 - zeta^2)
    pub oscillation_period: Option<f64>,
    /// ratio of successive peak heights, overshoot^2
    pub decay_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicResponse {
    pub t: Vec<f64>,
    pub y: Vec<f64>,
    /// the input signal on the same grid, for plotting against the response
    pub y_input: Vec<f64>,
    pub metrics: ResponseMetrics,
}

/// Linear process response task. Fill the fields, call `solve()`, then read
/// `response` or render `plot_payload()`.
#[derive(Debug, Clone)]
pub struct ProcessDynamicsTask {
    pub order: ProcessOrder,
    pub input: InputKind,
    /// process gain
    pub gain: f64,
    /// input magnitude (step height or ramp slope)
    pub magnitude: f64,
    /// time constant, floored at 1e-9
    pub tau: f64,
    pub t_end: f64,
    pub n_points: usize,
    pub response: Option<DynamicResponse>,
}

impl ProcessDynamicsTask {
    pub fn new(order: ProcessOrder, input: InputKind, gain: f64, magnitude: f64, tau: f64) -> Self {
        Self {
            order,
            input,
            gain,
            magnitude,
            tau: tau.max(PARAMETER_FLOOR),
            t_end: DEFAULT_T_END,
            n_points: DEFAULT_N_POINTS,
            response: None,
        }
    }

    /////////////SETTERS/////////////
    pub fn set_process(&mut self, order: ProcessOrder, input: InputKind) {
        self.order = order;
        self.input = input;
    }

    pub fn set_parameters(&mut self, gain: f64, magnitude: f64, tau: f64) {
        self.gain = gain;
        self.magnitude = magnitude;
        self.tau = tau.max(PARAMETER_FLOOR);
    }

    pub fn set_grid(&mut self, t_end: f64, n_points: usize) {
        self.t_end = t_end;
        self.n_points = n_points;
    }

    ///////////////////////////////////
    pub fn check_task(&self) -> Result<(), ProcessControlError> {
        if let ProcessOrder::Second { zeta } = self.order {
            if zeta < 0.0 {
                return Err(ProcessControlError::NegativeDamping(zeta));
            }
            if self.input == InputKind::Ramp {
                return Err(ProcessControlError::UnsupportedRampResponse);
            }
        }
        Ok(())
    }

    /// Sample the closed-form response and store it together with the input
    /// signal and the metrics.
    pub fn solve(&mut self) -> Result<(), ProcessControlError> {
        self.check_task()?;
        let n = self.n_points.max(2);
        let t: Vec<f64> = (0..n)
            .map(|i| self.t_end * i as f64 / (n - 1) as f64)
            .collect();
        let km = self.gain * self.magnitude;
        let tau = self.tau;
        let mut metrics = ResponseMetrics::default();

        let (y, y_input): (Vec<f64>, Vec<f64>) = match (self.order, self.input) {
            (ProcessOrder::First, InputKind::Step) => (
                t.iter().map(|&ti| km * (1.0 - (-ti / tau).exp())).collect(),
                t.iter().map(|_| self.magnitude).collect(),
            ),
            (ProcessOrder::First, InputKind::Ramp) => (
                t.iter()
                    .map(|&ti| km * (tau * ((-ti / tau).exp() - 1.0) + ti))
                    .collect(),
                t.iter().map(|&ti| self.magnitude * ti).collect(),
            ),
            (ProcessOrder::Second { zeta }, InputKind::Step) => {
                let y = if zeta < 1.0 {
                    let s = (1.0 - zeta * zeta).sqrt();
                    let wd = s / tau;
                    metrics = ResponseMetrics {
                        peak_time: Some(std::f64::consts::PI * tau / s),
                        overshoot: Some((-std::f64::consts::PI * zeta / s).exp()),
                        oscillation_period: Some(2.0 * std::f64::consts::PI * tau / s),
                        decay_ratio: Some((-2.0 * std::f64::consts::PI * zeta / s).exp()),
                    };
                    t.iter()
                        .map(|&ti| {
                            km * (1.0
                                - (-zeta * ti / tau).exp()
                                    * ((wd * ti).cos() + (zeta / s) * (wd * ti).sin()))
                        })
                        .collect()
                } else if zeta == 1.0 {
                    t.iter()
                        .map(|&ti| km * (1.0 - (1.0 + ti / tau) * (-ti / tau).exp()))
                        .collect()
                } else {
                    let root = (zeta * zeta - 1.0).sqrt();
                    let r1 = (-zeta + root) / tau;
                    let r2 = (-zeta - root) / tau;
                    t.iter()
                        .map(|&ti| {
                            km * (1.0 - (r1 * (r2 * ti).exp() - r2 * (r1 * ti).exp()) / (r1 - r2))
                        })
                        .collect()
                };
                (y, t.iter().map(|_| self.magnitude).collect())
            }
            (ProcessOrder::Second { .. }, InputKind::Ramp) => unreachable!("rejected by check_task"),
        };

        info!(
            "{} response sampled on {} points up to t = {}",
            self.response_title(),
            n,
            self.t_end
        );
        self.response = Some(DynamicResponse {
            t,
            y,
            y_input,
            metrics,
        });
        Ok(())
    }

    fn response_title(&self) -> String {
        let order = match self.order {
            ProcessOrder::First => "First",
            ProcessOrder::Second { .. } => "Second",
        };
        let input = match self.input {
            InputKind::Step => "Step",
            InputKind::Ramp => "Ramp",
        };
        format!("{} Order {} Response", order, input)
    }

    /// Response and input traces with a padded y-range. None before `solve()`.
    pub fn plot_payload(&self) -> Option<PlotWindow> {
        let response = self.response.as_ref()?;
        let min_y = response
            .y
            .iter()
            .chain(response.y_input.iter())
            .fold(0.0_f64, |acc, v| acc.min(*v));
        let max_y = response
            .y
            .iter()
            .chain(response.y_input.iter())
            .fold(1.0_f64, |acc, v| acc.max(*v));
        let buffer = ((max_y - min_y) * 0.1).max(0.1);

        Some(PlotWindow {
            title: self.response_title(),
            x_label: "Time".to_string(),
            y_label: "Process output".to_string(),
            x_range: Some((0.0, self.t_end)),
            y_range: Some((min_y - buffer, max_y + buffer)),
            series: vec![
                PlotSeries::lines(response.t.clone(), response.y.clone(), "System Response"),
                PlotSeries::lines(response.t.clone(), response.y_input.clone(), "Input"),
            ],
        })
    }
}
