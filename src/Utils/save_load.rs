//! Saving and loading of serializable results as pretty-printed JSON files.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), SaveLoadError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, SaveLoadError> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solvers::dormand_prince::{AdaptiveRK45, Trajectory};
    use nalgebra::DVector;
    use tempfile::NamedTempFile;

    #[test]
    fn test_trajectory_round_trip() {
        let solver = AdaptiveRK45::default();
        let y0 = DVector::from_vec(vec![1.0, 0.0]);
        let f = |_t: f64, y: &DVector<f64>| DVector::from_vec(vec![-y[0], y[0]]);
        let trajectory = solver.integrate(f, &y0, (0.0, 2.0));

        let file = NamedTempFile::new().unwrap();
        save_json(&trajectory, file.path()).unwrap();
        let back: Trajectory = load_json(file.path()).unwrap();

        assert_eq!(back.t, trajectory.t);
        assert_eq!(back.y, trajectory.y);
        assert_eq!(back.status, trajectory.status);
    }
}
