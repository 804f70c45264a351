/// Binomial trial calculations: exact probabilities with overflow-safe
/// log-space coefficients and a normal approximation for very large trial
/// counts.
///
///  # Examples
/// ```
/// use KiSim::Probability::drop_chance::DropChanceTask;
/// let task = DropChanceTask::new(100, 10, 0.1);
/// let p = task.at_least().unwrap();
/// println!("P(X >= 10) = {:.4}", p);
/// ```
pub mod drop_chance;
