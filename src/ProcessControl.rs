/// First-order-plus-time-delay (FOPTD) process model and its open-loop step
/// response.
pub mod foptd;
/// Closed-form first and second order process responses to step and ramp
/// inputs, with the analytic peak/overshoot/period/decay metrics of the
/// underdamped step case.
pub mod process_dynamics;
/// PI and PID controller settings from published FOPTD tuning correlations:
/// IMC, AMIGO and ITAE.
///
///  # Examples
/// ```
/// use KiSim::ProcessControl::foptd::FoptdModel;
/// use KiSim::ProcessControl::pid_tuning::TuningMethod;
/// let model = FoptdModel::new(1.0, 10.0, 2.0);
/// let settings = TuningMethod::ImcPi { tau_c: 3.0 }.tune(&model).unwrap();
/// println!("Kc = {}, tau_I = {}", settings.kc, settings.tau_i);
/// ```
pub mod pid_tuning;
