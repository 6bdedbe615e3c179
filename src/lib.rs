//! Synthetic climate series with a least-squares trend.
//!
//! - `series` - yearly sample generation with injected randomness
//! - `stats` - ordinary least squares fit
//! - `pipeline` - generate then fit, returning both results by value
//! - `chart` - extents, scales and projected points for renderers

pub mod chart;
pub mod pipeline;

pub use chart::{ChartFrame, Extent, LinearScale, ScenePoints, CHART_VALUE_PAD, SCENE_VALUE_PAD};
pub use pipeline::TrendAnalysis;
pub use series::{
    generate, generate_with_seed, GenerationParams, Mwc256, Sample, SeriesError, BASE_YEAR,
};
pub use stats::{fit, fit_pairs, trend_line, LinearModel};
