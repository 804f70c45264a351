

pub fn separations_examples(task: usize) {
    //

    match task {
        0 => {
            // BENZENE-TOLUENE STYLE COLUMN, CONSTANT RELATIVE VOLATILITY
            use crate::Separations::mccabe_thiele::McCabeThieleTask;
            use crate::Separations::vle::VleCurve;
            let vle = VleCurve::from_relative_volatility(2.5, 101);
            let mut task = McCabeThieleTask::new(vle, 0.9, 0.1, 0.5, 1.0, 1.5);
            task.solve().unwrap();
            task.pretty_print_results();

            let results = task.results.as_ref().unwrap();
            assert_eq!(results.stages, 9);
            println!("feed on stage {}", results.feed_stage);
        }
        1 => {
            // MEASURED EQUILIBRIUM DATA AND A PARTIALLY VAPORIZED FEED
            use crate::Separations::mccabe_thiele::McCabeThieleTask;
            use crate::Separations::vle::VleCurve;
            use crate::Utils::save_load::save_json;
            let x = vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
            let y = vec![0.0, 0.21, 0.37, 0.51, 0.62, 0.71, 0.78, 0.85, 0.91, 0.96, 1.0];
            let vle = VleCurve::from_data(x, y);
            println!("average volatility: {:?}", vle.average_volatility());

            let mut task = McCabeThieleTask::new(vle, 0.95, 0.05, 0.4, 0.5, 2.0);
            task.solve().unwrap();
            let payload = task.plot_payload().unwrap();
            save_json(&payload, std::path::Path::new("mccabe_thiele_diagram.json")).unwrap();
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
