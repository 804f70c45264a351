//! # Plotting Payload
//!
//! ## Purpose
//! Serializable chart payloads for a generic plotting widget. A computation
//! produces a [`PlotWindow`] with all display metadata inside it - title, axis
//! labels, ranges - so presentation code only has to hand the payload over,
//! never to reach into other components.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// one curve of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// legend entry; may carry `<sub>` markup for chemical formulae
    pub name: String,
    /// drawing mode understood by the widget, e.g. "lines" or "markers"
    pub mode: String,
}

impl PlotSeries {
    pub fn lines(x: Vec<f64>, y: Vec<f64>, name: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            mode: "lines".to_string(),
        }
    }

    /// straight segment between two points, used for staircase constructions
    pub fn segment(p0: (f64, f64), p1: (f64, f64), name: &str) -> Self {
        Self {
            x: vec![p0.0, p1.0],
            y: vec![p0.1, p1.1],
            name: name.to_string(),
            mode: "lines".to_string(),
        }
    }
}

/// complete chart description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotWindow {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// (low, high) or None for auto-scaling
    pub x_range: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
    pub series: Vec<PlotSeries>,
}

/// Wrap digit runs of a chemical formula in `<sub>` markup: "H2O" -> "H<sub>2</sub>O".
pub fn format_species_subscripts(species: &str) -> String {
    let re = Regex::new(r"(\d+)").expect("digit pattern is a valid regex");
    re.replace_all(species, "<sub>$1</sub>").into_owned()
}
