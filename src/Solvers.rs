/// Adaptive explicit Runge-Kutta solver of the Dormand-Prince 5(4) family.
/// The module takes as input a right-hand side function dy/dt = f(t, y), a vector of
/// initial values and a time span and produces the following data:
/// 1) a vector of accepted time points
/// 2) a solution matrix (rows = variables, columns = time points) convenient for per-variable plotting
/// 3) a status flag telling whether the step budget was exhausted before the end of the span
///
///  # Examples
/// ```
/// use KiSim::Solvers::dormand_prince::AdaptiveRK45;
/// use nalgebra::DVector;
/// let solver = AdaptiveRK45::default();
/// let y0 = DVector::from_vec(vec![1.0]);
/// // dy/dt = -y, y(0) = 1  =>  y(t) = exp(-t)
/// let trajectory = solver.integrate(|_t, y| -y.clone(), &y0, (0.0, 5.0));
/// let last = trajectory.t.last().copied().unwrap();
/// assert!((trajectory.y[(0, trajectory.n_samples() - 1)] - (-last).exp()).abs() < 1e-4);
/// ```
pub mod dormand_prince;
/// Post-processing of a computed trajectory: finds the earliest time at which all
/// variables stop changing within a relative tolerance. Advisory only - the result is
/// used to choose a plot range, never to terminate the integration itself.
pub mod steady_state;
