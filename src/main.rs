#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Kinetics;
#[allow(non_snake_case)]
pub mod Probability;
#[allow(non_snake_case)]
pub mod ProcessControl;
#[allow(non_snake_case)]
pub mod Separations;
#[allow(non_snake_case)]
pub mod Solvers;
#[allow(non_snake_case)]
pub mod Utils;

use Examples::kinetics_examples::kin_examples;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    //
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let task: usize = 1;
    kin_examples(task);
}
