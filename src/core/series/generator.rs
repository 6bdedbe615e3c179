//! Synthetic climate series.
//!
//! A series is a run of yearly samples starting at [`BASE_YEAR`]. Each value
//! is a linear warming trend plus uniform noise:
//!
//! ```text
//! value(i) = base_value + (i / 10) * trend_per_decade + (u - 0.5) * noise_amplitude
//! ```
//!
//! with `u` drawn uniformly from `[0, 1)` for every sample.

use rand::distributions::Standard;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Mwc256, SeriesError};

/// First calendar year of every generated series.
pub const BASE_YEAR: i64 = 1900;

/// One yearly observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub year: i64,
    pub value: f64,
}

/// Inputs of the series generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Number of yearly samples; negative values are rejected
    pub count: i64,

    /// Anomaly at the base year before noise
    pub base_value: f64,

    /// Change of the anomaly per ten samples
    pub trend_per_decade: f64,

    /// Full width of the uniform noise band (must be >= 0)
    pub noise_amplitude: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            count: 100,
            base_value: 0.0,
            trend_per_decade: 0.2,
            noise_amplitude: 0.5,
        }
    }
}

impl GenerationParams {
    /// Check that the parameters describe a series that can be generated.
    pub fn validate(&self) -> Result<(), SeriesError> {
        if self.count < 0 {
            return Err(SeriesError::InvalidArgument(format!(
                "count must be non-negative, got {}",
                self.count
            )));
        }

        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(SeriesError::InvalidArgument(format!(
                "noise amplitude must be a finite value >= 0, got {}",
                self.noise_amplitude
            )));
        }

        Ok(())
    }

    /// Noise-free value of the sample at `index`.
    pub fn expected_value(&self, index: i64) -> f64 {
        self.base_value + (index as f64 / 10.0) * self.trend_per_decade
    }
}

/// Generate a fresh series from `params`, drawing noise from `rng`.
///
/// Returns `SeriesError::InvalidArgument` for a negative count or a negative
/// noise amplitude. A count of zero yields an empty series.
pub fn generate<R: Rng + ?Sized>(
    params: &GenerationParams,
    rng: &mut R,
) -> Result<Vec<Sample>, SeriesError> {
    params.validate()?;

    let samples: Vec<Sample> = (0..params.count)
        .map(|i| Sample {
            year: BASE_YEAR + i,
            value: params.expected_value(i) + noise_term(rng, params.noise_amplitude),
        })
        .collect();

    debug!(
        count = samples.len(),
        trend_per_decade = params.trend_per_decade,
        noise_amplitude = params.noise_amplitude,
        "generated series"
    );

    Ok(samples)
}

/// Generate a series with a seeded [`Mwc256`], so the same seed replays the
/// same noise.
pub fn generate_with_seed(params: &GenerationParams, seed: u64) -> Result<Vec<Sample>, SeriesError> {
    let mut rng = Mwc256::seed_from_u64(seed);
    generate(params, &mut rng)
}

fn noise_term<R: Rng + ?Sized>(rng: &mut R, amplitude: f64) -> f64 {
    let u: f64 = rng.sample(Standard);
    (u - 0.5) * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(count: i64, trend: f64, noise: f64) -> GenerationParams {
        GenerationParams {
            count,
            base_value: 0.0,
            trend_per_decade: trend,
            noise_amplitude: noise,
        }
    }

    #[test]
    fn test_count_and_contiguous_years() {
        let mut rng = Mwc256::with_seed(1);
        for count in [0, 1, 2, 10, 137] {
            let samples = generate(&params(count, 0.5, 1.0), &mut rng).unwrap();
            assert_eq!(samples.len(), count as usize);
            for (i, s) in samples.iter().enumerate() {
                assert_eq!(s.year, BASE_YEAR + i as i64);
            }
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        let samples = generate_with_seed(&params(0, 1.0, 1.0), 3).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_zero_noise_is_exact() {
        let p = GenerationParams {
            count: 50,
            base_value: -0.3,
            trend_per_decade: 1.7,
            noise_amplitude: 0.0,
        };
        let samples = generate(&p, &mut rand::thread_rng()).unwrap();
        for (i, s) in samples.iter().enumerate() {
            assert_eq!(s.value, p.base_value + (i as f64 / 10.0) * p.trend_per_decade);
        }
    }

    #[test]
    fn test_noise_within_band() {
        let p = params(200, -1.2, 2.0);
        let mut rng = Mwc256::with_seed(2024);
        let samples = generate(&p, &mut rng).unwrap();

        for (i, s) in samples.iter().enumerate() {
            let deviation = s.value - p.expected_value(i as i64);
            assert!(deviation.abs() <= p.noise_amplitude / 2.0, "sample {} off by {}", i, deviation);
        }
    }

    #[test]
    fn test_noise_is_centred() {
        let p = params(20_000, 0.0, 1.0);
        let samples = generate_with_seed(&p, 11).unwrap();
        let mean = samples.iter().map(|s| s.value).sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 0.02, "mean noise {}", mean);
    }

    #[test]
    fn test_concrete_scenario() {
        let samples = generate_with_seed(&params(3, 1.0, 0.0), 0).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], Sample { year: 1900, value: 0.0 });
        assert_eq!(samples[1].year, 1901);
        assert!((samples[1].value - 0.1).abs() < 1e-12);
        assert_eq!(samples[2].year, 1902);
        assert!((samples[2].value - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = generate_with_seed(&params(-1, 1.0, 0.0), 0).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidArgument(_)));
    }

    #[test]
    fn test_negative_noise_rejected() {
        let err = generate_with_seed(&params(10, 1.0, -0.5), 0).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidArgument(_)));
    }

    #[test]
    fn test_same_seed_same_series() {
        let p = params(64, 0.4, 0.8);
        let a = generate_with_seed(&p, 5).unwrap();
        let b = generate_with_seed(&p, 5).unwrap();
        let c = generate_with_seed(&p, 6).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_calls_return_independent_series() {
        let p = params(10, 0.2, 0.5);
        let mut rng = Mwc256::with_seed(8);
        let first = generate(&p, &mut rng).unwrap();
        let second = generate(&p, &mut rng).unwrap();
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }
}
