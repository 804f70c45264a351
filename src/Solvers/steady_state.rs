//! # Steady-State Detector
//!
//! ## Purpose
//! Scans a computed trajectory for the earliest time at which every variable has
//! stopped changing within a relative tolerance. The result is purely advisory:
//! it is used to pick the upper bound of the plot x-axis so that a reaction that
//! settles quickly is not drawn against a mostly-flat tail. It never feeds back
//! into the integration itself.
//!
//! The tolerance scale is fixed: `max recorded value * 1e-4`. When no sample
//! qualifies, the final time of the trajectory is reported, which a caller
//! should read as "has not reached steady state, display the full span".

use super::dormand_prince::Trajectory;

/// fixed fraction of the global maximum used as the settling threshold
const RELATIVE_SCALE: f64 = 1e-4;

/// Earliest time at which every variable's change from the previous sample is
/// below `max_value * 1e-4`; falls back to the final time of the trajectory.
pub fn find_steady_state_time(trajectory: &Trajectory) -> f64 {
    let n_vars = trajectory.n_variables();
    let n_samples = trajectory.n_samples();
    if n_samples == 0 {
        return 0.0;
    }

    let threshold = trajectory.max_value() * RELATIVE_SCALE;
    for i in 1..n_samples {
        let settled = (0..n_vars)
            .all(|j| (trajectory.y[(j, i)] - trajectory.y[(j, i - 1)]).abs() < threshold);
        if settled {
            return trajectory.t[i];
        }
    }
    trajectory.final_time()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solvers::dormand_prince::AdaptiveRK45;
    use nalgebra::DVector;

    #[test]
    fn test_first_order_decay_settles_before_full_span() {
        // A -> B with k = 1, [A](0) = 1: settles well before tf = 20
        let solver = AdaptiveRK45::new(1e-6, 0.01, 10_000);
        let y0 = DVector::from_vec(vec![1.0, 0.0]);
        let f = |_t: f64, y: &DVector<f64>| DVector::from_vec(vec![-y[0], y[0]]);
        let trajectory = solver.integrate(f, &y0, (0.0, 20.0));

        let t_ss = find_steady_state_time(&trajectory);
        assert!(t_ss > 2.0, "settled implausibly early: {}", t_ss);
        assert!(t_ss < 20.0, "steady state not detected before the full span");
    }

    #[test]
    fn test_never_settling_system_reports_final_time() {
        // constant growth never satisfies the settling criterion
        let solver = AdaptiveRK45::new(1e-6, 0.1, 10_000);
        let y0 = DVector::from_vec(vec![0.0]);
        let f = |_t: f64, _y: &DVector<f64>| DVector::from_vec(vec![1.0]);
        let trajectory = solver.integrate(f, &y0, (0.0, 5.0));

        let t_ss = find_steady_state_time(&trajectory);
        assert_eq!(t_ss, trajectory.final_time());
    }
}
