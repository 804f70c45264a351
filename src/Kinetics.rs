/// The module takes as input a vector of reaction equations specified as a vector of String
/// ("2H2 + O2 -> 2H2O") and produces the following data:
/// 1) a vector of species names in the order of their first appearance
/// 2) a vector of parsed reaction clauses (reactant and product terms with stoichiometric coefficients)
///
/// Note:
/// 1) the parser is permissive by design: empty reaction strings are silently skipped and a side
/// that fails to match the clause grammar yields an empty reactant/product list for that reaction
/// without aborting the processing of other reactions
/// 2) coefficients default to 1 when omitted
///
///  # Examples
/// ```
/// use KiSim::Kinetics::reaction_network::ReactionNetwork;
/// let mut network = ReactionNetwork::new();
/// network.set_reactions(vec!["2H2 + O2 -> 2H2O".to_string()]);
/// network.search_species();
/// network.analyze_reactions();
/// assert_eq!(network.species, vec!["H2", "O2", "H2O"]);
/// ```
pub mod reaction_network;
/// Elementary power-law kinetics: for each reaction i the rate is
/// `rate_i = k_i * prod(C[reactant]^coeff)` over that reaction's reactants only.
/// The rate of each reaction is accumulated into the derivative slots of its
/// reactants (negative) and products (positive). Concentrations are assumed
/// non-negative; the model does not clamp negative values produced by numerical
/// overshoot.
pub mod rate_law;
/// High-level simulation workflow: reactions + rate constants + initial concentrations
/// in, trajectory + steady-state time + chart payload out. One full recomputation per
/// call, nothing is cached or shared between runs.
pub mod simulator;
mod simulator_tests;
