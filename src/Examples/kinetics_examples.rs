

pub fn kin_examples(kintask: usize) {
    //

    match kintask {
        0 => {
            // REACTION PARSING AND SPECIES DISCOVERY
            use crate::Kinetics::reaction_network::ReactionNetwork;
            let mut network = ReactionNetwork::new();
            let reactions_: Vec<&str> = vec!["2H2 + O2 -> 2H2O", "H2O -> H2 + O"];
            let reactions = reactions_.iter().map(|s| s.to_string()).collect();
            network.set_reactions(reactions);
            network.search_species();
            network.analyze_reactions();

            assert_eq!(network.species, vec!["H2", "O2", "H2O", "O"]);
            println!("species: {:?}", network.species);
            for clause in &network.clauses {
                println!("{}: reactants {:?}, products {:?}", clause.equation, clause.reactants, clause.products);
            }
        }
        1 => {
            // FIRST ORDER DECAY CHAIN A -> B -> C
            use crate::Kinetics::simulator::KineticSimulator;
            use std::collections::HashMap;
            let mut sim = KineticSimulator::new();
            sim.set_reactions(
                vec!["A -> B".to_string(), "B -> C".to_string()],
                vec![1.0, 0.5],
            );
            let c0: HashMap<String, f64> = [("A", 1.0), ("B", 0.0), ("C", 0.0)]
                .iter()
                .map(|(s, c)| (s.to_string(), *c))
                .collect();
            sim.set_initial_concentrations(c0);
            sim.set_time_span(0.0, 20.0);
            sim.run().unwrap();

            println!("steady state near t = {:?}", sim.steady_state_time);
            sim.pretty_print_results();
        }
        2 => {
            // HYDROGEN OXIDATION WITH PLOT PAYLOAD EXPORT
            use crate::Kinetics::simulator::KineticSimulator;
            use crate::Utils::save_load::save_json;
            use std::collections::HashMap;
            let mut sim = KineticSimulator::new();
            sim.set_reactions(vec!["2H2 + O2 -> 2H2O".to_string()], vec![1.0]);
            let c0: HashMap<String, f64> = [("H2", 1.0), ("O2", 0.5), ("H2O", 0.0)]
                .iter()
                .map(|(s, c)| (s.to_string(), *c))
                .collect();
            sim.set_initial_concentrations(c0);
            sim.run().unwrap();

            let payload = sim.plot_payload().unwrap();
            println!("payload title: {}, series: {}", payload.title, payload.series.len());
            save_json(&payload, std::path::Path::new("kinetics_payload.json")).unwrap();
        }
        3 => {
            // SOLVER ON A STIFF-ISH PROBLEM WITH A TIGHT TOLERANCE
            use crate::Solvers::dormand_prince::AdaptiveRK45;
            use nalgebra::DVector;
            let solver = AdaptiveRK45::new(1e-8, 0.01, 100_000);
            let y0 = DVector::from_vec(vec![1.0]);
            let trajectory = solver.integrate(|_t, y| -50.0 * y, &y0, (0.0, 1.0));
            println!(
                "{} accepted steps, final value {:.3e}, status {:?}",
                trajectory.n_samples(),
                trajectory.y[(0, trajectory.n_samples() - 1)],
                trajectory.status
            );
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
