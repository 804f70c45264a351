/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Kinetics::reaction_network::KineticsError;
    use crate::Kinetics::simulator::KineticSimulator;
    use crate::Solvers::dormand_prince::SolverStatus;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn concentrations(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(s, c)| (s.to_string(), *c)).collect()
    }

    #[test]
    fn test_first_order_decay_matches_analytic_solution() {
        // A -> B with k = 1, [A](0) = 1: [A](t) = exp(-t)
        let mut sim = KineticSimulator::new();
        sim.set_reactions(vec!["A -> B".to_string()], vec![1.0]);
        sim.set_initial_concentrations(concentrations(&[("A", 1.0), ("B", 0.0)]));
        sim.set_time_span(0.0, 5.0);
        sim.set_solver_params(1e-6, 0.01, 10_000);
        sim.run().unwrap();

        let trajectory = sim.trajectory.as_ref().unwrap();
        assert_eq!(trajectory.status, SolverStatus::Completed);
        for (j, &tj) in trajectory.t.iter().enumerate() {
            let analytic = (-tj).exp();
            assert!(
                (trajectory.y[(0, j)] - analytic).abs() < 1e-4,
                "[A] diverged from exp(-t) at t = {}",
                tj
            );
        }
    }

    #[test]
    fn test_mass_conservation_for_simple_decay() {
        // A -> B with no side reactions: [A] + [B] stays at a0 at every accepted step
        let a0 = 2.5;
        let mut sim = KineticSimulator::new();
        sim.set_reactions(vec!["A -> B".to_string()], vec![0.7]);
        sim.set_initial_concentrations(concentrations(&[("A", a0), ("B", 0.0)]));
        sim.run().unwrap();

        let trajectory = sim.trajectory.as_ref().unwrap();
        for j in 0..trajectory.n_samples() {
            assert_relative_eq!(
                trajectory.y[(0, j)] + trajectory.y[(1, j)],
                a0,
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn test_hydrogen_oxidation_runs_and_orders_species() {
        let mut sim = KineticSimulator::new();
        sim.set_reactions(vec!["2H2 + O2 -> 2H2O".to_string()], vec![1.0]);
        sim.set_initial_concentrations(concentrations(&[("H2", 1.0), ("O2", 1.0), ("H2O", 0.0)]));
        sim.run().unwrap();

        assert_eq!(sim.network.species, vec!["H2", "O2", "H2O"]);
        let trajectory = sim.trajectory.as_ref().unwrap();
        let last = trajectory.n_samples() - 1;
        assert!(trajectory.y[(2, last)] > 0.5, "no product formed");
        assert!(trajectory.y[(0, last)] < 1.0, "reactant not consumed");
    }

    #[test]
    fn test_wrong_rate_constant_count_raises_configuration_error() {
        let mut sim = KineticSimulator::new();
        sim.set_reactions(
            vec!["A -> B".to_string(), "B -> C".to_string()],
            vec![1.0, 2.0, 3.0],
        );
        sim.set_initial_concentrations(concentrations(&[("A", 1.0), ("B", 0.0), ("C", 0.0)]));
        let err = sim.run().unwrap_err();
        assert!(matches!(
            err,
            KineticsError::RateConstantMismatch {
                n_reactions: 2,
                n_constants: 3
            }
        ));
    }

    #[test]
    fn test_missing_concentration_error_names_the_species() {
        let mut sim = KineticSimulator::new();
        sim.set_reactions(vec!["A + B -> C".to_string()], vec![1.0]);
        sim.set_initial_concentrations(concentrations(&[("A", 1.0), ("C", 0.0)]));
        let err = sim.run().unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("B"), "error does not name the species: {}", msg);
    }

    #[test]
    fn test_plot_payload_shape_and_ranges() {
        let mut sim = KineticSimulator::new();
        sim.set_reactions(vec!["2H2 + O2 -> 2H2O".to_string()], vec![1.0]);
        sim.set_initial_concentrations(concentrations(&[("H2", 1.0), ("O2", 1.0), ("H2O", 0.0)]));
        sim.run().unwrap();

        let payload = sim.plot_payload().unwrap();
        assert_eq!(payload.series.len(), 3);
        assert_eq!(payload.series[2].name, "H<sub>2</sub>O");
        let (x_lo, x_hi) = payload.x_range.unwrap();
        assert_eq!(x_lo, 0.0);
        assert_relative_eq!(x_hi, sim.steady_state_time.unwrap());
        let (y_lo, y_hi) = payload.y_range.unwrap();
        assert!(y_lo <= 0.0);
        assert!(y_hi > 1.0, "y range must cover the largest concentration");
    }

    #[test]
    fn test_reruns_are_independent_and_deterministic() {
        let mut sim = KineticSimulator::new();
        sim.set_reactions(vec!["A -> B".to_string()], vec![1.0]);
        sim.set_initial_concentrations(concentrations(&[("A", 1.0), ("B", 0.0)]));

        sim.run().unwrap();
        let first = sim.trajectory.clone().unwrap();
        sim.run().unwrap();
        let second = sim.trajectory.clone().unwrap();

        assert_eq!(first.t, second.t);
        assert_eq!(first.y, second.y);
    }

    #[test]
    fn test_payload_is_none_before_first_run() {
        let sim = KineticSimulator::new();
        assert!(sim.plot_payload().is_none());
    }
}
