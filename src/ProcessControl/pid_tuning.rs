//! # PID Tuning Correlations
//!
//! ## Purpose
//! Controller settings for a FOPTD process from published correlations:
//! IMC (Internal Model Control), AMIGO (Astrom-Hagglund) and the ITAE
//! setpoint-tracking rules, each in PI and (where defined) PID form.
//!
//! ## Main Structures
//! - `TuningMethod` - which correlation to apply, with its parameters
//! - `PidSettings` - gain, integral time and optional derivative time
//!
//! ## Non-Obvious Features & Tips
//! - AMIGO denominators carry a 1e-9 guard so a vanishing dead time or time
//!   constant degrades gracefully instead of dividing by zero
//! - ITAE rules are fitted for 0.1 <= theta/tau <= 1; outside that window the
//!   numbers are extrapolations and a warning is logged

use crate::ProcessControl::foptd::FoptdModel;
use log::warn;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessControlError {
    #[error("process gain must be nonzero")]
    ZeroGain,
    #[error("IMC closed-loop time constant must be positive, got {0}")]
    NonPositiveTauC(f64),
    #[error("damping coefficient must be non-negative, got {0}")]
    NegativeDamping(f64),
    #[error("ramp responses are modeled for first order processes only")]
    UnsupportedRampResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TuningMethod {
    /// IMC PI rule with closed-loop time constant `tau_c`
    ImcPi { tau_c: f64 },
    AmigoPi,
    AmigoPid,
    ItaePi,
    ItaePid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidSettings {
    /// controller gain Kc
    pub kc: f64,
    /// integral time tau_I
    pub tau_i: f64,
    /// derivative time tau_D, None for PI controllers
    pub tau_d: Option<f64>,
}

impl TuningMethod {
    pub fn name(&self) -> &'static str {
        match self {
            TuningMethod::ImcPi { .. } => "IMC PI",
            TuningMethod::AmigoPi => "AMIGO PI",
            TuningMethod::AmigoPid => "AMIGO PID",
            TuningMethod::ItaePi => "ITAE PI",
            TuningMethod::ItaePid => "ITAE PID",
        }
    }

    pub fn tune(&self, model: &FoptdModel) -> Result<PidSettings, ProcessControlError> {
        if model.gain == 0.0 {
            return Err(ProcessControlError::ZeroGain);
        }
        let (k, tau, theta) = (model.gain, model.tau, model.theta);
        let settings = match self {
            TuningMethod::ImcPi { tau_c } => {
                if *tau_c <= 0.0 {
                    return Err(ProcessControlError::NonPositiveTauC(*tau_c));
                }
                PidSettings {
                    kc: tau / (k * (tau_c + theta)),
                    tau_i: tau,
                    tau_d: None,
                }
            }
            TuningMethod::AmigoPi => PidSettings {
                kc: 0.15 / k + (0.35 - theta * tau / (theta + tau).powi(2)) * (tau / (k * theta)),
                tau_i: 0.35 * theta
                    + 13.0 * theta * tau.powi(2)
                        / (tau.powi(2) + 12.0 * theta * tau + 7.0 * theta.powi(2) + 1e-9),
                tau_d: None,
            },
            TuningMethod::AmigoPid => PidSettings {
                kc: (0.2 + 0.45 * tau / theta) / k,
                tau_i: (0.4 * theta + 0.8 * tau) * theta / (theta + 0.1 * tau + 1e-9),
                tau_d: Some(0.5 * theta * tau / (0.3 * theta + tau + 1e-9)),
            },
            TuningMethod::ItaePi => {
                let ratio = Self::checked_itae_ratio(theta, tau);
                PidSettings {
                    kc: 0.859 * ratio.powf(-0.977) / k,
                    tau_i: tau / (0.674 * ratio.powf(-0.680)),
                    tau_d: None,
                }
            }
            TuningMethod::ItaePid => {
                let ratio = Self::checked_itae_ratio(theta, tau);
                PidSettings {
                    kc: 1.357 * ratio.powf(-0.947) / k,
                    tau_i: tau / (0.842 * ratio.powf(-0.738)),
                    tau_d: Some(0.381 * tau * ratio.powf(0.995)),
                }
            }
        };
        Ok(settings)
    }

    fn checked_itae_ratio(theta: f64, tau: f64) -> f64 {
        let ratio = theta / tau;
        if !(0.1..=1.0).contains(&ratio) {
            warn!(
                "theta/tau = {:.3} lies outside the ITAE fitting range [0.1, 1]",
                ratio
            );
        }
        ratio
    }
}

/// Settings from every applicable correlation, for side-by-side comparison.
pub fn tune_all(
    model: &FoptdModel,
    tau_c: f64,
) -> Result<Vec<(TuningMethod, PidSettings)>, ProcessControlError> {
    let methods = [
        TuningMethod::ImcPi { tau_c },
        TuningMethod::AmigoPi,
        TuningMethod::AmigoPid,
        TuningMethod::ItaePi,
        TuningMethod::ItaePid,
    ];
    let mut rows = Vec::with_capacity(methods.len());
    for method in methods {
        rows.push((method, method.tune(model)?));
    }
    Ok(rows)
}

pub fn pretty_print_settings(rows: &[(TuningMethod, PidSettings)]) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("method"),
        Cell::new("Kc"),
        Cell::new("tau_I"),
        Cell::new("tau_D"),
    ]));
    for (method, settings) in rows {
        let tau_d = settings
            .tau_d
            .map_or_else(|| "-".to_string(), |td| format!("{:.3}", td));
        table.add_row(Row::new(vec![
            Cell::new(method.name()),
            Cell::new(&format!("{:.3}", settings.kc)),
            Cell::new(&format!("{:.3}", settings.tau_i)),
            Cell::new(&tau_d),
        ]));
    }
    table.printstd();
}

/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> FoptdModel {
        FoptdModel::new(1.0, 10.0, 2.0)
    }

    #[test]
    fn test_imc_pi_textbook_case() {
        // K = 1, tau = 10, theta = 2, tau_c = 3: Kc = 10/5 = 2, tau_I = tau
        let settings = TuningMethod::ImcPi { tau_c: 3.0 }.tune(&model()).unwrap();
        assert_relative_eq!(settings.kc, 2.0, epsilon = 1e-12);
        assert_relative_eq!(settings.tau_i, 10.0, epsilon = 1e-12);
        assert!(settings.tau_d.is_none());
    }

    #[test]
    fn test_amigo_pi_correlation() {
        let settings = TuningMethod::AmigoPi.tune(&model()).unwrap();
        assert_relative_eq!(settings.kc, 1.2055555555555553, epsilon = 1e-9);
        assert_relative_eq!(settings.tau_i, 7.765217391285149, epsilon = 1e-6);
        assert!(settings.tau_d.is_none());
    }

    #[test]
    fn test_amigo_pid_correlation() {
        let settings = TuningMethod::AmigoPid.tune(&model()).unwrap();
        assert_relative_eq!(settings.kc, 2.45, epsilon = 1e-9);
        assert_relative_eq!(settings.tau_i, 5.866666664711111, epsilon = 1e-6);
        assert_relative_eq!(settings.tau_d.unwrap(), 0.9433962263260948, epsilon = 1e-6);
    }

    #[test]
    fn test_itae_correlations() {
        let pi = TuningMethod::ItaePi.tune(&model()).unwrap();
        assert_relative_eq!(pi.kc, 4.1389183411651205, epsilon = 1e-9);
        assert_relative_eq!(pi.tau_i, 4.96638633766088, epsilon = 1e-9);

        let pid = TuningMethod::ItaePid.tune(&model()).unwrap();
        assert_relative_eq!(pid.kc, 6.230235193969716, epsilon = 1e-9);
        assert_relative_eq!(pid.tau_i, 3.621162758823182, epsilon = 1e-9);
        assert_relative_eq!(pid.tau_d.unwrap(), 0.768156697277206, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_gain_is_rejected() {
        let bad = FoptdModel::new(0.0, 10.0, 2.0);
        let err = TuningMethod::AmigoPi.tune(&bad).unwrap_err();
        assert!(matches!(err, ProcessControlError::ZeroGain));
    }

    #[test]
    fn test_non_positive_tau_c_is_rejected() {
        let err = TuningMethod::ImcPi { tau_c: 0.0 }.tune(&model()).unwrap_err();
        assert!(matches!(err, ProcessControlError::NonPositiveTauC(_)));
    }

    #[test]
    fn test_tune_all_returns_one_row_per_method() {
        let rows = tune_all(&model(), 3.0).unwrap();
        assert_eq!(rows.len(), 5);
        let n_pid = rows.iter().filter(|(_, s)| s.tau_d.is_some()).count();
        assert_eq!(n_pid, 2);
    }
}
