//! Plot geometry shared by the renderers.
//!
//! The 2D chart and the 3D scene both frame the series the same way: the
//! year extent is used as is, the value extent is padded so the line never
//! touches the border, and a linear scale maps data onto the canvas.
//!
//! [`ScenePoints`] is the 3D layout for point-cloud renderers living outside
//! this workspace; the bundled driver only logs its bounds.

use series::Sample;
use stats::LinearModel;

/// Value padding of the 2D chart.
pub const CHART_VALUE_PAD: f64 = 0.5;

/// Value padding of the 3D scene.
pub const SCENE_VALUE_PAD: f64 = 1.0;

/// Scene x coordinates span `-SCENE_HALF_WIDTH..=SCENE_HALF_WIDTH`.
pub const SCENE_HALF_WIDTH: f64 = 40.0;

/// Scene y coordinates span `-SCENE_HALF_HEIGHT..=SCENE_HALF_HEIGHT`.
pub const SCENE_HALF_HEIGHT: f64 = 30.0;

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Smallest extent holding every value; `None` for an empty iterator.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Extent { min: v, max: v }),
            Some(e) => Some(Extent {
                min: e.min.min(v),
                max: e.max.max(v),
            }),
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn padded(&self, pad: f64) -> Self {
        Extent {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Widen a zero-width extent by `half_width` on each side.
    pub fn non_degenerate(&self, half_width: f64) -> Self {
        if self.span() == 0.0 {
            self.padded(half_width)
        } else {
            *self
        }
    }
}

/// Affine map from a domain interval onto a range interval.
///
/// The range may be inverted (screen y grows downwards). A zero-width domain
/// maps everything to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let width = d1 - d0;
        if width == 0.0 {
            return 0.5 * (r0 + r1);
        }
        r0 + (x - d0) / width * (r1 - r0)
    }
}

/// Year and value extents of a series as a renderer frames it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub years: Extent,
    pub values: Extent,
}

impl ChartFrame {
    pub fn from_series(samples: &[Sample], value_pad: f64) -> Option<Self> {
        let years = Extent::of(samples.iter().map(|s| s.year as f64))?;
        let values = Extent::of(samples.iter().map(|s| s.value))?;
        Some(Self {
            years,
            values: values.padded(value_pad),
        })
    }
}

/// Series and trend line in 3D scene coordinates, `z = 0` throughout.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePoints {
    pub points: Vec<[f64; 3]>,
    pub trend: Vec<[f64; 3]>,
}

impl ScenePoints {
    pub fn project(samples: &[Sample], model: &LinearModel) -> Option<Self> {
        let frame = ChartFrame::from_series(samples, SCENE_VALUE_PAD)?;
        let x = LinearScale::new(
            (frame.years.min, frame.years.max),
            (-SCENE_HALF_WIDTH, SCENE_HALF_WIDTH),
        );
        let y = LinearScale::new(
            (frame.values.min, frame.values.max),
            (-SCENE_HALF_HEIGHT, SCENE_HALF_HEIGHT),
        );

        let points = samples
            .iter()
            .map(|s| [x.map(s.year as f64), y.map(s.value), 0.0])
            .collect();
        let trend = samples
            .iter()
            .map(|s| {
                let year = s.year as f64;
                [x.map(year), y.map(model.predict(year)), 0.0]
            })
            .collect();

        Some(Self { points, trend })
    }
}
