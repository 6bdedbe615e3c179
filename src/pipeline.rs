use rand::Rng;
use series::{generate, GenerationParams, Sample, SeriesError};
use stats::{fit, trend_line, LinearModel};
use tracing::debug;

use crate::chart::{ChartFrame, ScenePoints};

/// A generated series together with the line fitted through it.
///
/// Built fresh for every parameter change; nothing is carried over from a
/// previous run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendAnalysis {
    pub samples: Vec<Sample>,
    pub model: LinearModel,
}

impl TrendAnalysis {
    /// Generate a series from `params` and fit its trend.
    pub fn run<R: Rng + ?Sized>(params: &GenerationParams, rng: &mut R) -> Result<Self, SeriesError> {
        let samples = generate(params, rng)?;
        let model = fit(&samples);
        debug!(slope = model.slope, intercept = model.intercept, "fitted trend");
        Ok(Self { samples, model })
    }

    /// Fitted value at every sample year.
    pub fn trend_line(&self) -> Vec<(i64, f64)> {
        trend_line(&self.samples, &self.model)
    }

    /// Fitted change over ten years.
    pub fn trend_per_decade(&self) -> f64 {
        self.model.slope * 10.0
    }

    /// Plot frame with values padded by `value_pad`; `None` when empty.
    pub fn frame(&self, value_pad: f64) -> Option<ChartFrame> {
        ChartFrame::from_series(&self.samples, value_pad)
    }

    /// Samples and trend line placed in 3D scene coordinates.
    pub fn scene(&self) -> Option<ScenePoints> {
        ScenePoints::project(&self.samples, &self.model)
    }
}
