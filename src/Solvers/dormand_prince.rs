//! # Adaptive Dormand-Prince RK45 Solver
//!
//! ## Purpose
//! Explicit embedded Runge-Kutta pair of order 5(4) with adaptive step-size control,
//! intended for non-stiff low-dimensional systems such as isothermal reaction networks
//! (2-10 species, rate constants of order 0..10, tolerances 1e-5..1e-6).
//!
//! ## Main Structures
//! - [`AdaptiveRK45`]: solver settings (tolerance, initial step, step budget, step-size controller constants)
//! - [`Trajectory`]: accepted time points plus the solution matrix (rows = variables)
//! - [`SolverStatus`]: whether the span was covered or the step budget ran out
//!
//! ## Step-size control
//! At every attempt both the 5th and the embedded 4th order estimates are computed;
//! the local error is the maximum absolute component-wise difference between them.
//! A step is accepted when `error <= tolerance`, otherwise it is discarded and retried.
//! After every attempt (accepted or not) the step is rescaled by
//! `safety * (tolerance / error)^(1/5)` clamped to `[min_factor, max_factor]`.
//!
//! ## Non-Obvious Features & Tips
//! - Rejected steps are never recorded: the loop recomputes with a smaller step
//!   before any state mutation, so the trajectory holds accepted states only.
//! - Exhausting `max_steps` is NOT an error: the partial trajectory is returned
//!   together with [`SolverStatus::StepLimitReached`] and a warning is logged,
//!   so a caller may still plot an incomplete solution.
//! - The solver is fully deterministic: identical inputs give identical output.

use log::warn;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

// Dormand-Prince 5(4) tableau, the standard constants.
const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;
const C6: f64 = 1.0;
const C7: f64 = 1.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;
const A71: f64 = 35.0 / 384.0;
const A73: f64 = 500.0 / 1113.0;
const A74: f64 = 125.0 / 192.0;
const A75: f64 = -2187.0 / 6784.0;
const A76: f64 = 11.0 / 84.0;

// b: 5th order solution (b2 = b7 = 0)
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;
// b*: embedded 4th order solution (b2* = 0)
const B1S: f64 = 5179.0 / 57600.0;
const B3S: f64 = 7571.0 / 16695.0;
const B4S: f64 = 393.0 / 640.0;
const B5S: f64 = -92097.0 / 339200.0;
const B6S: f64 = 187.0 / 2100.0;
const B7S: f64 = 1.0 / 40.0;

/// floor substituted for a zero error estimate to avoid division by zero
const ERROR_FLOOR: f64 = 1e-10;

/// Outcome of one integration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// the whole time span was covered
    Completed,
    /// the step budget ran out before `tf`; the trajectory is partial but usable
    StepLimitReached,
}

/// Time series produced by one integration run. Owned by the invocation that
/// created it; a new run always builds a fresh trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    /// accepted time points, strictly increasing, bounded by the requested span
    pub t: Vec<f64>,
    /// solution matrix: rows = variables, columns = time points
    pub y: DMatrix<f64>,
    pub status: SolverStatus,
}

impl Trajectory {
    pub fn n_variables(&self) -> usize {
        self.y.nrows()
    }

    pub fn n_samples(&self) -> usize {
        self.t.len()
    }

    /// copy of one variable's time series (a row of the solution matrix)
    pub fn variable_series(&self, i: usize) -> Vec<f64> {
        self.y.row(i).iter().copied().collect()
    }

    /// largest value recorded anywhere in the trajectory
    pub fn max_value(&self) -> f64 {
        self.y.iter().fold(f64::NEG_INFINITY, |acc, v| acc.max(*v))
    }

    /// smallest value recorded anywhere in the trajectory
    pub fn min_value(&self) -> f64 {
        self.y.iter().fold(f64::INFINITY, |acc, v| acc.min(*v))
    }

    pub fn final_time(&self) -> f64 {
        self.t.last().copied().unwrap_or(0.0)
    }
}

/// Settings of the adaptive Dormand-Prince solver.
#[derive(Debug, Clone)]
pub struct AdaptiveRK45 {
    /// tolerance for the local error estimate
    pub tolerance: f64,
    /// initial step size
    pub h_initial: f64,
    /// step budget, counts both accepted and rejected attempts
    pub max_steps: usize,
    /// safety factor of the step-size controller
    pub safety: f64,
    /// lower clamp of the step rescaling factor
    pub min_factor: f64,
    /// upper clamp of the step rescaling factor
    pub max_factor: f64,
}

impl Default for AdaptiveRK45 {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            h_initial: 0.1,
            max_steps: 10_000,
            safety: 0.84,
            min_factor: 0.2,
            max_factor: 5.0,
        }
    }
}

impl AdaptiveRK45 {
    pub fn new(tolerance: f64, h_initial: f64, max_steps: usize) -> Self {
        Self {
            tolerance,
            h_initial,
            max_steps,
            ..Self::default()
        }
    }

    /// Integrate dy/dt = f(t, y) from `t_span.0` to `t_span.1` starting at `y0`.
    ///
    /// The input vector is never mutated; each accepted step produces a fresh state.
    /// Returns the trajectory of accepted states; see [`SolverStatus`] for the
    /// meaning of a partial result.
    pub fn integrate<F>(&self, f: F, y0: &DVector<f64>, t_span: (f64, f64)) -> Trajectory
    where
        F: Fn(f64, &DVector<f64>) -> DVector<f64>,
    {
        let (t0, tf) = t_span;
        let mut t = t0;
        let mut y = y0.clone();
        let mut t_arr = vec![t];
        let mut y_arr = vec![y.clone()];

        let mut h = self.h_initial;
        let mut step_count: usize = 0;

        while t < tf && step_count < self.max_steps {
            // clamp the final step so the last accepted point lands on tf
            if t + h > tf {
                h = tf - t;
            }
            if h <= 0.0 {
                break;
            }

            let k1 = f(t, &y);
            let k2 = f(t + C2 * h, &(&y + &k1 * (h * A21)));
            let k3 = f(t + C3 * h, &(&y + &k1 * (h * A31) + &k2 * (h * A32)));
            let k4 = f(
                t + C4 * h,
                &(&y + &k1 * (h * A41) + &k2 * (h * A42) + &k3 * (h * A43)),
            );
            let k5 = f(
                t + C5 * h,
                &(&y + &k1 * (h * A51) + &k2 * (h * A52) + &k3 * (h * A53) + &k4 * (h * A54)),
            );
            let k6 = f(
                t + C6 * h,
                &(&y
                    + &k1 * (h * A61)
                    + &k2 * (h * A62)
                    + &k3 * (h * A63)
                    + &k4 * (h * A64)
                    + &k5 * (h * A65)),
            );
            let k7 = f(
                t + C7 * h,
                &(&y
                    + &k1 * (h * A71)
                    + &k3 * (h * A73)
                    + &k4 * (h * A74)
                    + &k5 * (h * A75)
                    + &k6 * (h * A76)),
            );

            let y5th =
                &y + &k1 * (h * B1) + &k3 * (h * B3) + &k4 * (h * B4) + &k5 * (h * B5) + &k6 * (h * B6);
            let y4th = &y
                + &k1 * (h * B1S)
                + &k3 * (h * B3S)
                + &k4 * (h * B4S)
                + &k5 * (h * B5S)
                + &k6 * (h * B6S)
                + &k7 * (h * B7S);

            // local error: max absolute component-wise difference of the two estimates
            let mut error: f64 = 0.0;
            for i in 0..y.len() {
                error = error.max((y5th[i] - y4th[i]).abs());
            }
            if error == 0.0 {
                error = ERROR_FLOOR;
            }

            if error <= self.tolerance {
                t += h;
                y = y5th;
                t_arr.push(t);
                y_arr.push(y.clone());
            }

            // rescale the step after every attempt, accepted or not
            let factor = (self.safety * (self.tolerance / error).powf(0.2))
                .clamp(self.min_factor, self.max_factor);
            h *= factor;
            step_count += 1;
        }

        let status = if step_count >= self.max_steps && t < tf {
            warn!(
                "RK45 solver reached maximum steps ({}) at t = {:.6}, returning partial trajectory",
                self.max_steps, t
            );
            SolverStatus::StepLimitReached
        } else {
            SolverStatus::Completed
        };

        // transpose the time-major accumulation into rows = variables
        let n_vars = y0.len();
        let n_samples = t_arr.len();
        let y_matrix = DMatrix::from_fn(n_vars, n_samples, |i, j| y_arr[j][i]);

        Trajectory {
            t: t_arr,
            y: y_matrix,
            status,
        }
    }
}
