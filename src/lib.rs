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
