/// Vapor-liquid equilibrium curves: sampled (x, y) data, construction from a
/// constant relative volatility, interpolation helpers and the average relative
/// volatility estimate used by the Fenske equation.
pub mod vle;
/// McCabe-Thiele graphical design of a binary distillation column: operating
/// lines, feed line, staircase stage construction, Fenske minimum stages and
/// pinch-based minimum reflux.
///
///  # Examples
/// ```
/// use KiSim::Separations::mccabe_thiele::McCabeThieleTask;
/// use KiSim::Separations::vle::VleCurve;
/// let vle = VleCurve::from_relative_volatility(2.5, 101);
/// let mut task = McCabeThieleTask::new(vle, 0.9, 0.1, 0.5, 1.0, 1.5);
/// task.solve().unwrap();
/// let results = task.results.as_ref().unwrap();
/// println!("stages: {}, feed stage: {}", results.stages, results.feed_stage);
/// ```
pub mod mccabe_thiele;
