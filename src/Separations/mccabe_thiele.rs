//! # McCabe-Thiele Column Design
//!
//! ## Purpose
//! Graphical design of a binary distillation column: operating lines from the
//! reflux ratio and feed condition, staircase construction of equilibrium
//! stages, Fenske minimum stages and pinch-based minimum reflux.
//!
//! ## Main Structures
//! - `McCabeThieleTask` - column specification with setters, `solve()` and
//!   `plot_payload()`
//! - `DesignResults` - stage count, feed stage location, operating lines,
//!   minimum stages and minimum reflux
//!
//! ## Key Methods
//! - `solve` - validates the task, builds the lines, steps off stages from the
//!   distillate down to the bottoms
//! - `plot_payload` - equilibrium curve, diagonal, operating lines and the
//!   staircase as a [`PlotWindow`](crate::Utils::plotting::PlotWindow)
//!
//! ## Non-Obvious Features & Tips
//! - the staircase stops within `BOTTOMS_APPROACH` of `xb` or after
//!   `MAX_STAGES` stages, whichever comes first; a capped run is still a valid
//!   result and signals an infeasible or pinched specification
//! - a saturated-liquid feed (q = 1) makes the feed line vertical, so its
//!   slope is `None` and the intersection sits at x = xf

use crate::Separations::vle::VleCurve;
use crate::Utils::plotting::{PlotSeries, PlotWindow};
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// staircase never steps past this many stages
pub const MAX_STAGES: usize = 20;
/// stepping stops once the liquid composition is this close to the bottoms
pub const BOTTOMS_APPROACH: f64 = 0.01;
/// feed qualities within this band of 1 are treated as saturated liquid
const Q_SATURATION_BAND: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum SeparationsError {
    #[error(
        "compositions must satisfy 0 < xb < xf < xd < 1, got xd = {xd}, xf = {xf}, xb = {xb}"
    )]
    InvalidCompositions { xd: f64, xf: f64, xb: f64 },
    #[error("reflux ratio must be positive, got {0}")]
    NonPositiveReflux(f64),
    #[error("equilibrium curve does not cover the composition y = {0}")]
    EquilibriumLookup(f64),
}

/// rectifying, stripping and feed lines of the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingLines {
    pub rectifying_slope: f64,
    pub rectifying_intercept: f64,
    pub stripping_slope: f64,
    /// None for a saturated-liquid feed (vertical q-line)
    pub feed_slope: Option<f64>,
    /// point where all three lines meet
    pub intersection: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResults {
    pub stages: usize,
    /// first stage whose equilibrium composition falls on the stripping side
    pub feed_stage: usize,
    pub operating: OperatingLines,
    /// Fenske estimate; None when the average volatility cannot be formed
    pub minimum_stages: Option<f64>,
    /// pinch-point estimate; None when the feed line misses the curve
    pub minimum_reflux: Option<f64>,
    /// staircase segments as ((x0, y0), (x1, y1)) pairs, two per stage
    pub stage_segments: Vec<((f64, f64), (f64, f64))>,
}

/// Binary distillation design task. Fill the fields (directly or with the
/// setters), call `solve()`, then read `results` or render `plot_payload()`.
#[derive(Debug, Clone)]
pub struct McCabeThieleTask {
    pub vle: VleCurve,
    /// distillate light-component mole fraction
    pub xd: f64,
    /// bottoms light-component mole fraction
    pub xb: f64,
    /// feed light-component mole fraction
    pub xf: f64,
    /// feed quality (1 = saturated liquid, 0 = saturated vapor)
    pub q: f64,
    pub reflux_ratio: f64,
    pub results: Option<DesignResults>,
}

impl McCabeThieleTask {
    pub fn new(vle: VleCurve, xd: f64, xb: f64, xf: f64, q: f64, reflux_ratio: f64) -> Self {
        Self {
            vle,
            xd,
            xb,
            xf,
            q,
            reflux_ratio,
            results: None,
        }
    }

    /////////////SETTERS/////////////
    pub fn set_compositions(&mut self, xd: f64, xb: f64, xf: f64) {
        self.xd = xd;
        self.xb = xb;
        self.xf = xf;
    }

    pub fn set_feed_quality(&mut self, q: f64) {
        self.q = q;
    }

    pub fn set_reflux_ratio(&mut self, reflux_ratio: f64) {
        self.reflux_ratio = reflux_ratio;
    }

    pub fn set_equilibrium(&mut self, vle: VleCurve) {
        self.vle = vle;
    }

    ///////////////////////////////////
    pub fn check_task(&self) -> Result<(), SeparationsError> {
        let ordered = 0.0 < self.xb && self.xb < self.xf && self.xf < self.xd && self.xd < 1.0;
        if !ordered {
            return Err(SeparationsError::InvalidCompositions {
                xd: self.xd,
                xf: self.xf,
                xb: self.xb,
            });
        }
        if self.reflux_ratio <= 0.0 {
            return Err(SeparationsError::NonPositiveReflux(self.reflux_ratio));
        }
        Ok(())
    }

    /// Build the operating lines, step off the stages and store the results.
    pub fn solve(&mut self) -> Result<(), SeparationsError> {
        self.check_task()?;
        let operating = self.operating_lines();
        info!(
            "operating lines built: rectifying slope {:.4}, intersection at ({:.4}, {:.4})",
            operating.rectifying_slope, operating.intersection.0, operating.intersection.1
        );

        let (stages, feed_stage, stage_segments) = self.step_off_stages(&operating)?;
        info!("stepped off {} stages, feed on stage {}", stages, feed_stage);

        let minimum_stages = self.fenske_minimum_stages();
        let minimum_reflux = self.minimum_reflux(&operating);

        self.results = Some(DesignResults {
            stages,
            feed_stage,
            operating,
            minimum_stages,
            minimum_reflux,
            stage_segments,
        });
        Ok(())
    }

    fn operating_lines(&self) -> OperatingLines {
        let r = self.reflux_ratio;
        let rectifying_slope = r / (r + 1.0);
        let rectifying_intercept = self.xd / (r + 1.0);

        let (feed_slope, intersection) = if (self.q - 1.0).abs() < Q_SATURATION_BAND {
            // vertical q-line
            let ix = self.xf;
            (None, (ix, rectifying_slope * ix + rectifying_intercept))
        } else {
            let fs = self.q / (self.q - 1.0);
            let fi = -self.xf / (self.q - 1.0);
            let ix = (fi - rectifying_intercept) / (rectifying_slope - fs);
            (Some(fs), (ix, rectifying_slope * ix + rectifying_intercept))
        };
        // through (xb, xb) and the intersection point
        let stripping_slope = (intersection.1 - self.xb) / (intersection.0 - self.xb);

        OperatingLines {
            rectifying_slope,
            rectifying_intercept,
            stripping_slope,
            feed_slope,
            intersection,
        }
    }

    /// Staircase from (xd, xd) down toward (xb, xb): horizontal to the
    /// equilibrium curve, vertical back to the active operating line.
    fn step_off_stages(
        &self,
        operating: &OperatingLines,
    ) -> Result<(usize, usize, Vec<((f64, f64), (f64, f64))>), SeparationsError> {
        let (ix, _) = operating.intersection;
        let mut segments = Vec::new();
        let mut cx = self.xd;
        let mut cy = self.xd;
        let mut stages = 0usize;
        let mut feed_stage = 0usize;

        while cx > self.xb + BOTTOMS_APPROACH && stages < MAX_STAGES {
            let ex = self
                .vle
                .x_at_y(cy)
                .ok_or(SeparationsError::EquilibriumLookup(cy))?;
            segments.push(((cx, cy), (ex, cy)));
            stages += 1;
            if feed_stage == 0 && ex <= ix {
                feed_stage = stages;
            }

            let ny = if ex > ix {
                operating.rectifying_slope * ex + operating.rectifying_intercept
            } else {
                operating.stripping_slope * (ex - self.xb) + self.xb
            };
            segments.push(((ex, cy), (ex, ny)));
            cx = ex;
            cy = ny;
        }
        if stages == MAX_STAGES && cx > self.xb + BOTTOMS_APPROACH {
            warn!(
                "stage construction capped at {} stages before reaching xb = {}; \
                 the specification may be pinched",
                MAX_STAGES, self.xb
            );
        }
        if feed_stage == 0 {
            feed_stage = stages;
        }
        Ok((stages, feed_stage, segments))
    }

    /// Fenske equation with the average relative volatility of the curve.
    fn fenske_minimum_stages(&self) -> Option<f64> {
        let alpha = self.vle.average_volatility()?;
        if alpha <= 1.0 {
            return None;
        }
        let separation = (self.xd / (1.0 - self.xd)) * ((1.0 - self.xb) / self.xb);
        Some(separation.ln() / alpha.ln())
    }

    /// Minimum reflux from the pinch point where the feed line meets the
    /// equilibrium curve.
    fn minimum_reflux(&self, operating: &OperatingLines) -> Option<f64> {
        let (xp, yp) = match operating.feed_slope {
            None => (self.xf, self.vle.y_at_x(self.xf)?),
            Some(fs) => {
                let fi = -self.xf / (self.q - 1.0);
                self.feed_line_pinch(fs, fi)?
            }
        };
        if yp <= xp {
            return None;
        }
        Some((self.xd - yp) / (yp - xp))
    }

    /// Sign change of y_eq(x) - (fs*x + fi) over the sampled curve, refined by
    /// linear interpolation.
    fn feed_line_pinch(&self, fs: f64, fi: f64) -> Option<(f64, f64)> {
        let n = self.vle.n_points();
        for i in 0..n.saturating_sub(1) {
            let d0 = self.vle.y[i] - (fs * self.vle.x[i] + fi);
            let d1 = self.vle.y[i + 1] - (fs * self.vle.x[i + 1] + fi);
            if d0 == 0.0 {
                return Some((self.vle.x[i], self.vle.y[i]));
            }
            if d0 * d1 < 0.0 {
                let w = d0 / (d0 - d1);
                let xp = self.vle.x[i] + w * (self.vle.x[i + 1] - self.vle.x[i]);
                let yp = self.vle.y[i] + w * (self.vle.y[i + 1] - self.vle.y[i]);
                return Some((xp, yp));
            }
        }
        None
    }

    /// Full diagram: equilibrium curve, diagonal, the three lines and the
    /// staircase. None before `solve()`.
    pub fn plot_payload(&self) -> Option<PlotWindow> {
        let results = self.results.as_ref()?;
        let op = &results.operating;
        let (ix, iy) = op.intersection;

        let mut series = vec![
            PlotSeries::lines(self.vle.x.clone(), self.vle.y.clone(), "Equilibrium"),
            PlotSeries::segment((0.0, 0.0), (1.0, 1.0), "y = x"),
            PlotSeries::segment((ix, iy), (self.xd, self.xd), "Rectifying"),
            PlotSeries::segment((self.xb, self.xb), (ix, iy), "Stripping"),
            PlotSeries::segment((self.xf, self.xf), (ix, iy), "Feed"),
        ];
        for (p0, p1) in &results.stage_segments {
            series.push(PlotSeries::segment(*p0, *p1, "Stages"));
        }

        Some(PlotWindow {
            title: "McCabe-Thiele Diagram".to_string(),
            x_label: "Liquid mole fraction x".to_string(),
            y_label: "Vapor mole fraction y".to_string(),
            x_range: Some((0.0, 1.0)),
            y_range: Some((0.0, 1.0)),
            series,
        })
    }

    pub fn pretty_print_results(&self) {
        let Some(results) = self.results.as_ref() else {
            info!("no design results yet, call solve() first");
            return;
        };
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("quantity"), Cell::new("value")]));
        table.add_row(Row::new(vec![
            Cell::new("theoretical stages"),
            Cell::new(&results.stages.to_string()),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("feed stage"),
            Cell::new(&results.feed_stage.to_string()),
        ]));
        if let Some(nmin) = results.minimum_stages {
            table.add_row(Row::new(vec![
                Cell::new("minimum stages (Fenske)"),
                Cell::new(&format!("{:.2}", nmin)),
            ]));
        }
        if let Some(rmin) = results.minimum_reflux {
            table.add_row(Row::new(vec![
                Cell::new("minimum reflux"),
                Cell::new(&format!("{:.3}", rmin)),
            ]));
        }
        table.printstd();
    }
}
