//! # Rate Law System
//!
//! ## Purpose
//! Builds the right-hand side of the kinetic ODE system from a parsed
//! [`ReactionNetwork`] and a vector of rate constants (one per reaction,
//! matched positionally). Elementary power-law kinetics only:
//!
//! ```text
//! rate_i = k_i * prod over reactants ( C[species]^coeff )
//! dC[reactant]/dt -= rate_i * coeff
//! dC[product]/dt  += rate_i * coeff
//! ```
//!
//! ## Non-Obvious Features & Tips
//! - Species indices are resolved once at construction; evaluation on the hot
//!   path of the solver does no string lookups.
//! - Concentrations are assumed non-negative. The model does not clamp negative
//!   values produced by numerical overshoot, which is a known source of
//!   divergence for stiff or aggressive rate constants.

use super::reaction_network::{KineticsError, ReactionNetwork};
use nalgebra::DVector;
use std::collections::HashMap;

/// one reaction with species resolved to state-vector indices
#[derive(Debug, Clone)]
struct IndexedClause {
    reactants: Vec<(usize, f64)>,
    products: Vec<(usize, f64)>,
}

/// Pure function mapping (t, concentrations) -> derivative vector, derived
/// deterministically from a reaction network and its rate constants.
#[derive(Debug, Clone)]
pub struct RateLawSystem {
    pub network: ReactionNetwork,
    pub rate_constants: Vec<f64>,
    indexed: Vec<IndexedClause>,
}

impl RateLawSystem {
    /// Fails with [`KineticsError::RateConstantMismatch`] when the rate constant
    /// vector does not match the reaction list positionally.
    pub fn new(network: ReactionNetwork, rate_constants: Vec<f64>) -> Result<Self, KineticsError> {
        network.check_rate_constants(&rate_constants)?;

        let indexed = network
            .clauses
            .iter()
            .map(|clause| IndexedClause {
                reactants: clause
                    .reactants
                    .iter()
                    .filter_map(|term| {
                        network
                            .species_index(&term.species)
                            .map(|i| (i, term.coefficient))
                    })
                    .collect(),
                products: clause
                    .products
                    .iter()
                    .filter_map(|term| {
                        network
                            .species_index(&term.species)
                            .map(|i| (i, term.coefficient))
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            network,
            rate_constants,
            indexed,
        })
    }

    /// Ordered initial state vector; fails with
    /// [`KineticsError::MissingConcentrations`] enumerating every species that
    /// lacks an entry.
    pub fn initial_state(
        &self,
        initial: &HashMap<String, f64>,
    ) -> Result<DVector<f64>, KineticsError> {
        self.network.check_initial_concentrations(initial)?;
        Ok(DVector::from_iterator(
            self.network.species.len(),
            self.network.species.iter().map(|sp| initial[sp]),
        ))
    }

    /// Evaluate the derivative vector at state `y`. Time-independent kinetics,
    /// `t` is carried only for the solver signature.
    pub fn evaluate(&self, _t: f64, y: &DVector<f64>) -> DVector<f64> {
        let mut dydt = DVector::zeros(self.network.species.len());
        for (clause, &k) in self.indexed.iter().zip(&self.rate_constants) {
            if clause.reactants.is_empty() && clause.products.is_empty() {
                continue;
            }
            let mut rate = k;
            for &(i, coeff) in &clause.reactants {
                rate *= y[i].powf(coeff);
            }
            for &(i, coeff) in &clause.reactants {
                dydt[i] -= rate * coeff;
            }
            for &(i, coeff) in &clause.products {
                dydt[i] += rate * coeff;
            }
        }
        dydt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn network_of(reactions: Vec<&str>) -> ReactionNetwork {
        let mut network = ReactionNetwork::new();
        network.set_reactions(reactions.iter().map(|s| s.to_string()).collect());
        network.search_species();
        network.analyze_reactions();
        network
    }

    #[test]
    fn test_first_order_decay_derivatives() {
        let system = RateLawSystem::new(network_of(vec!["A -> B"]), vec![2.0]).unwrap();
        let y = DVector::from_vec(vec![0.5, 0.0]);
        let dydt = system.evaluate(0.0, &y);
        assert_relative_eq!(dydt[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(dydt[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stoichiometric_coefficients_enter_rate_and_accumulation() {
        // 2H2 + O2 -> 2H2O: rate = k*[H2]^2*[O2]
        let system = RateLawSystem::new(network_of(vec!["2H2 + O2 -> 2H2O"]), vec![3.0]).unwrap();
        let y = DVector::from_vec(vec![2.0, 0.5, 0.0]);
        let rate = 3.0 * 2.0_f64.powi(2) * 0.5;
        let dydt = system.evaluate(0.0, &y);
        assert_relative_eq!(dydt[0], -2.0 * rate, epsilon = 1e-12);
        assert_relative_eq!(dydt[1], -rate, epsilon = 1e-12);
        assert_relative_eq!(dydt[2], 2.0 * rate, epsilon = 1e-12);
    }

    #[test]
    fn test_mismatched_rate_constants_rejected() {
        let err = RateLawSystem::new(network_of(vec!["A -> B"]), vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, KineticsError::RateConstantMismatch { .. }));
    }

    #[test]
    fn test_initial_state_follows_species_order() {
        let system = RateLawSystem::new(network_of(vec!["A + B -> C"]), vec![1.0]).unwrap();
        let mut initial = HashMap::new();
        initial.insert("C".to_string(), 3.0);
        initial.insert("A".to_string(), 1.0);
        initial.insert("B".to_string(), 2.0);
        let y0 = system.initial_state(&initial).unwrap();
        assert_eq!(y0.as_slice(), &[1.0, 2.0, 3.0]);
    }
}
