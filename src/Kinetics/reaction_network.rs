//! # Reaction Network Parser
//!
//! ## Purpose
//! Turns free-text reaction equations into an ordered species list and parsed
//! stoichiometric clauses. The grammar per clause is
//! `coeff? species (+ coeff? species)* -> coeff? species (+ coeff? species)*`
//! where `coeff` is an optional positive integer (default 1) and `species` is an
//! alphanumeric token starting with a letter.
//!
//! ## Main Structures
//! - [`ReactionNetwork`]: holds the raw equations, the discovered species and the parsed clauses
//! - [`ReactionClause`]: one reaction's reactant and product terms
//! - [`SpeciesTerm`]: (species name, stoichiometric coefficient)
//! - [`KineticsError`]: configuration errors surfaced to the caller
//!
//! ## Key Methods
//! - **Setup**: `new()` -> `set_reactions()` -> `search_species()` -> `analyze_reactions()`
//! - **Validation**: `check_rate_constants()`, `check_initial_concentrations()`
//!
//! ## Non-Obvious Features & Tips
//! - Species discovery order is first-appearance across all reactions, reactants
//!   before products, left to right; the same input always yields the same order.
//! - The parser is permissive: a malformed clause parses to an empty stoichiometry
//!   instead of raising. Clause slots stay positionally aligned with the reaction
//!   list so that rate constants keep matching by index.

use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// optional integer coefficient followed by an alphanumeric species token
const CLAUSE_PATTERN: &str = r"^(\d*)([A-Za-z][A-Za-z0-9]*)$";

/// error types for kinetics configuration
#[derive(Debug, Error)]
pub enum KineticsError {
    #[error("the number of rate constants ({n_constants}) does not match the number of reactions ({n_reactions})")]
    RateConstantMismatch {
        n_reactions: usize,
        n_constants: usize,
    },
    #[error("the following species are missing initial concentrations: {}", .0.join(", "))]
    MissingConcentrations(Vec<String>),
}

/// one (species, coefficient) pair of a reaction side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesTerm {
    pub species: String,
    pub coefficient: f64,
}

/// parsed form of one reaction equation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionClause {
    /// the raw equation this clause was parsed from
    pub equation: String,
    pub reactants: Vec<SpeciesTerm>,
    pub products: Vec<SpeciesTerm>,
}

impl ReactionClause {
    pub fn is_empty(&self) -> bool {
        self.reactants.is_empty() && self.products.is_empty()
    }
}

/// structure to store user reactions and the stoichiometric data parsed from them
#[derive(Debug, Clone, Default)]
pub struct ReactionNetwork {
    /// vector of reaction equations as entered by the user
    pub reactions: Vec<String>,
    /// vector of species names in first-appearance order
    pub species: Vec<String>,
    /// parsed clauses, one per reaction equation (may be empty for malformed input)
    pub clauses: Vec<ReactionClause>,
}

impl ReactionNetwork {
    pub fn new() -> Self {
        Self {
            reactions: Vec::new(),
            species: Vec::new(),
            clauses: Vec::new(),
        }
    }

    pub fn set_reactions(&mut self, reactions: Vec<String>) {
        self.reactions = reactions;
    }

    /// parse one side term like "2H2" into (coefficient, species)
    fn parse_term(re: &Regex, term: &str) -> Option<SpeciesTerm> {
        let caps = re.captures(term.trim())?;
        let coefficient = caps
            .get(1)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(1);
        Some(SpeciesTerm {
            species: caps[2].to_string(),
            coefficient: coefficient as f64,
        })
    }

    /// split a reaction side on '+' and parse every term; unparseable terms are dropped
    fn parse_side(re: &Regex, side: &str) -> Vec<SpeciesTerm> {
        side.split('+')
            .filter_map(|term| Self::parse_term(re, term))
            .collect()
    }

    /// find species names in the order of their first appearance across all
    /// reactions, reactants before products, left to right
    pub fn search_species(&mut self) {
        let re = Regex::new(CLAUSE_PATTERN).expect("clause pattern is a valid regex");
        let mut seen: HashSet<String> = HashSet::new();
        let mut ordered: Vec<String> = Vec::new();

        for reaction in &self.reactions {
            if reaction.trim().is_empty() {
                continue;
            }
            let Some((reactants, products)) = reaction.split_once("->") else {
                continue;
            };
            for term in Self::parse_side(&re, reactants)
                .into_iter()
                .chain(Self::parse_side(&re, products))
            {
                if seen.insert(term.species.clone()) {
                    ordered.push(term.species);
                }
            }
        }
        self.species = ordered;
    }

    /// parse every reaction into a clause; clause slots stay aligned with the
    /// reaction list so rate constants keep matching positionally
    pub fn analyze_reactions(&mut self) {
        let re = Regex::new(CLAUSE_PATTERN).expect("clause pattern is a valid regex");
        let mut clauses = Vec::with_capacity(self.reactions.len());

        for reaction in &self.reactions {
            let mut clause = ReactionClause {
                equation: reaction.clone(),
                ..Default::default()
            };
            if !reaction.trim().is_empty() {
                if let Some((reactants, products)) = reaction.split_once("->") {
                    clause.reactants = Self::parse_side(&re, reactants);
                    clause.products = Self::parse_side(&re, products);
                    if clause.is_empty() {
                        warn!("reaction '{}' parsed to an empty stoichiometry", reaction);
                    }
                } else {
                    warn!("reaction '{}' has no '->' separator, skipped", reaction);
                }
            }
            clauses.push(clause);
        }
        self.clauses = clauses;
    }

    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s == name)
    }

    /// rate constants are matched to reactions positionally; a length mismatch
    /// is a fatal configuration error
    pub fn check_rate_constants(&self, rate_constants: &[f64]) -> Result<(), KineticsError> {
        if rate_constants.len() != self.reactions.len() {
            return Err(KineticsError::RateConstantMismatch {
                n_reactions: self.reactions.len(),
                n_constants: rate_constants.len(),
            });
        }
        Ok(())
    }

    /// every species referenced by any reaction must carry an initial concentration
    pub fn check_initial_concentrations(
        &self,
        initial: &HashMap<String, f64>,
    ) -> Result<(), KineticsError> {
        let missing: Vec<String> = self
            .species
            .iter()
            .filter(|sp| !initial.contains_key(*sp))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(KineticsError::MissingConcentrations(missing));
        }
        Ok(())
    }
}
