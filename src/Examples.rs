/// worked kinetics simulations: decay chains, hydrogen oxidation, payload export
pub mod kinetics_examples;
/// worked distillation designs
pub mod separations_examples;
/// worked FOPTD tuning comparisons and process response simulations
pub mod process_control_examples;
/// worked drop-chance calculations
pub mod probability_examples;
