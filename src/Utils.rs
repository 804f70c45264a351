/// Chart payload structures consumed by a generic plotting widget: plain
/// time-series arrays plus display metadata (title, axis labels, ranges).
/// The title travels inside the payload so that no display component has to be
/// mutated from the outside to show it.
pub mod plotting;
/// Saving and loading of serializable results (trajectories, payloads, design
/// results) as JSON files.
pub mod save_load;
