//! # Kinetic Simulator
//!
//! ## Purpose
//! THE STRUCT KineticSimulator COLLECTS ALL THE INFORMATION ABOUT ONE SIMULATION
//! RUN: the reaction equations, rate constants, initial concentrations and solver
//! settings, and orchestrates the complete workflow from text input to a plottable
//! concentration-profile payload.
//!
//! ## Key Methods
//! - **Setup**: `new()` -> `set_reactions()` -> `set_initial_concentrations()`
//! - **Solving**: `check_task()` -> `run()` -> `plot_payload()` or `pretty_print_results()`
//!
//! ## Execution model
//! Single-threaded and synchronous: every call to `run()` performs a full
//! recomputation and replaces the previous trajectory entirely. Nothing is cached
//! or memoized between runs and no shared mutable state crosses invocations, so a
//! caller driving this from an interactive control may simply invoke `run()` on
//! every confirmed change.
//!
//! ## Error Handling Pattern
//! Configuration problems (rate constant count mismatch, missing initial
//! concentrations) are fatal to the current run and surfaced as [`KineticsError`];
//! exhausting the solver's step budget is NOT an error - the partial trajectory is
//! kept and the condition is visible on `Trajectory::status`.

use super::rate_law::RateLawSystem;
use super::reaction_network::{KineticsError, ReactionNetwork};
use crate::Solvers::dormand_prince::{AdaptiveRK45, Trajectory};
use crate::Solvers::steady_state::find_steady_state_time;
use crate::Utils::plotting::{PlotSeries, PlotWindow, format_species_subscripts};
use log::info;
use prettytable::{Cell, Row, Table};
use std::collections::HashMap;

/// defaults mirroring the interactive front end
const DEFAULT_T_SPAN: (f64, f64) = (0.0, 10.0);
const DEFAULT_TOLERANCE: f64 = 1e-5;
const DEFAULT_H_INITIAL: f64 = 0.01;
const DEFAULT_MAX_STEPS: usize = 10_000;

/// structure to store one simulation task and its results
#[derive(Debug, Clone)]
pub struct KineticSimulator {
    /// vector of reaction equations, e.g. "2H2 + O2 -> 2H2O"
    pub reactions: Vec<String>,
    /// rate constants matched to reactions positionally
    pub rate_constants: Vec<f64>,
    /// initial concentration for every species appearing in the reactions
    pub initial_concentrations: HashMap<String, f64>,
    /// integration span (t0, tf)
    pub t_span: (f64, f64),
    pub solver: AdaptiveRK45,
    /// parsed network, filled by `check_task`
    pub network: ReactionNetwork,
    /// result of the last run, replaced entirely on every run
    pub trajectory: Option<Trajectory>,
    /// advisory settling time of the last run, used for the plot x-range
    pub steady_state_time: Option<f64>,
}

impl KineticSimulator {
    pub fn new() -> Self {
        Self {
            reactions: Vec::new(),
            rate_constants: Vec::new(),
            initial_concentrations: HashMap::new(),
            t_span: DEFAULT_T_SPAN,
            solver: AdaptiveRK45::new(DEFAULT_TOLERANCE, DEFAULT_H_INITIAL, DEFAULT_MAX_STEPS),
            network: ReactionNetwork::new(),
            trajectory: None,
            steady_state_time: None,
        }
    }

    /////////////////////////////////SETTERS///////////////////////////////////////////

    pub fn set_reactions(&mut self, reactions: Vec<String>, rate_constants: Vec<f64>) {
        self.reactions = reactions;
        self.rate_constants = rate_constants;
    }

    pub fn set_initial_concentrations(&mut self, initial: HashMap<String, f64>) {
        self.initial_concentrations = initial;
    }

    pub fn set_time_span(&mut self, t0: f64, tf: f64) {
        self.t_span = (t0, tf);
    }

    pub fn set_solver_params(&mut self, tolerance: f64, h_initial: f64, max_steps: usize) {
        self.solver = AdaptiveRK45::new(tolerance, h_initial, max_steps);
    }

    /////////////////////////////////VALIDATION////////////////////////////////////////

    /// Parse the reactions and validate the configuration against them.
    pub fn check_task(&mut self) -> Result<(), KineticsError> {
        let mut network = ReactionNetwork::new();
        network.set_reactions(self.reactions.clone());
        network.search_species();
        network.analyze_reactions();
        network.check_rate_constants(&self.rate_constants)?;
        network.check_initial_concentrations(&self.initial_concentrations)?;
        self.network = network;
        Ok(())
    }

    /////////////////////////////////WORKFLOW//////////////////////////////////////////

    /// Complete simulation workflow: parse, validate, integrate, post-process.
    /// Builds fresh vectors and a fresh trajectory on every call.
    pub fn run(&mut self) -> Result<(), KineticsError> {
        self.check_task()?;
        info!("kinetics task checked: {} species in {} reactions",
            self.network.species.len(), self.reactions.len());

        let system = RateLawSystem::new(self.network.clone(), self.rate_constants.clone())?;
        let y0 = system.initial_state(&self.initial_concentrations)?;
        info!("rate law system assembled");

        let trajectory = self
            .solver
            .integrate(|t, y| system.evaluate(t, y), &y0, self.t_span);
        info!("integration finished: {} accepted points, status {:?}",
            trajectory.n_samples(), trajectory.status);

        let t_ss = find_steady_state_time(&trajectory);
        info!("steady state reached near t = {:.4}", t_ss);

        self.steady_state_time = Some(t_ss);
        self.trajectory = Some(trajectory);
        Ok(())
    }

    /////////////////////////////////OUTPUT////////////////////////////////////////////

    /// Chart payload for a generic plotting widget: one series per species, the
    /// x-range capped at the detected steady state. Returns None before `run()`.
    pub fn plot_payload(&self) -> Option<PlotWindow> {
        let trajectory = self.trajectory.as_ref()?;
        let t_ss = self
            .steady_state_time
            .unwrap_or_else(|| trajectory.final_time());
        let max_y = trajectory.max_value();
        let min_y = trajectory.min_value().min(0.0);

        let series = self
            .network
            .species
            .iter()
            .enumerate()
            .map(|(i, sp)| PlotSeries {
                x: trajectory.t.clone(),
                y: trajectory.variable_series(i),
                name: format_species_subscripts(sp),
                mode: "lines".to_string(),
            })
            .collect();

        Some(PlotWindow {
            title: "Concentration Profiles".to_string(),
            x_label: "Time".to_string(),
            y_label: "Concentration".to_string(),
            x_range: Some((0.0, t_ss)),
            y_range: Some((min_y, max_y * 1.1 + 1e-9)),
            series,
        })
    }

    /// Print a table of initial and final concentrations for every species.
    pub fn pretty_print_results(&self) {
        let Some(trajectory) = self.trajectory.as_ref() else {
            println!("KineticSimulator::pretty_print_results: no trajectory, run() first");
            return;
        };
        let last = trajectory.n_samples() - 1;
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Species"),
            Cell::new("C(t0)"),
            Cell::new("C(tf)"),
        ]));
        for (i, sp) in self.network.species.iter().enumerate() {
            table.add_row(Row::new(vec![
                Cell::new(sp),
                Cell::new(&format!("{:.6}", trajectory.y[(i, 0)])),
                Cell::new(&format!("{:.6}", trajectory.y[(i, last)])),
            ]));
        }
        table.printstd();
    }
}

impl Default for KineticSimulator {
    fn default() -> Self {
        Self::new()
    }
}
