

pub fn process_control_examples(task: usize) {
    //

    match task {
        0 => {
            // TUNING RULE COMPARISON FOR A SLOW PROCESS WITH MODERATE DEAD TIME
            use crate::ProcessControl::foptd::FoptdModel;
            use crate::ProcessControl::pid_tuning::{pretty_print_settings, tune_all};
            let model = FoptdModel::new(1.0, 10.0, 2.0);
            let rows = tune_all(&model, 3.0).unwrap();
            pretty_print_settings(&rows);
        }
        1 => {
            // OPEN LOOP STEP RESPONSE EXPORT
            use crate::ProcessControl::foptd::FoptdModel;
            use crate::Utils::save_load::save_json;
            let model = FoptdModel::new(2.0, 5.0, 1.0);
            let payload = model.step_response_payload(1.0, 40.0, 401);
            println!("{} samples", payload.series[0].x.len());
            save_json(&payload, std::path::Path::new("step_response.json")).unwrap();
        }
        2 => {
            // SECOND ORDER STEP RESPONSES ACROSS DAMPING REGIMES
            use crate::ProcessControl::process_dynamics::{
                InputKind, ProcessDynamicsTask, ProcessOrder,
            };
            for zeta in [0.3, 1.0, 2.0] {
                let mut task = ProcessDynamicsTask::new(
                    ProcessOrder::Second { zeta },
                    InputKind::Step,
                    1.0,
                    1.0,
                    2.0,
                );
                task.solve().unwrap();
                let metrics = task.response.as_ref().unwrap().metrics;
                println!(
                    "zeta = {}: peak time {:?}, overshoot {:?}",
                    zeta, metrics.peak_time, metrics.overshoot
                );
            }
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
