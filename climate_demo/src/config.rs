use anyhow::{Context, Result};
use clap::Parser;
use climate_trend::GenerationParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one demo run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Series generation parameters
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Output files
    #[serde(default)]
    pub output: OutputConfig,
}

/// Series generation parameters, named after the demo's controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of simulated years
    #[serde(default = "default_years")]
    pub years: i64,

    /// Warming trend per decade
    #[serde(default = "default_trend_per_decade")]
    pub trend_per_decade: f64,

    /// Width of the uniform noise band
    #[serde(default = "default_noise_level")]
    pub noise_level: f64,

    /// Anomaly in the first year
    #[serde(default)]
    pub base_value: f64,

    /// Seed for reproducible noise (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Chart image (`.svg` for SVG, anything else for PNG)
    #[serde(default)]
    pub chart: Option<PathBuf>,

    /// CSV export of the series
    #[serde(default)]
    pub csv: Option<PathBuf>,
}

/// Largest number of simulated years accepted from the user.
pub const MAX_YEARS: i64 = 10_000;

fn default_years() -> i64 {
    100
}

fn default_trend_per_decade() -> f64 {
    0.2
}

fn default_noise_level() -> f64 {
    0.5
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            years: default_years(),
            trend_per_decade: default_trend_per_decade(),
            noise_level: default_noise_level(),
            base_value: 0.0,
            seed: None,
        }
    }
}

impl GenerationConfig {
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            count: self.years,
            base_value: self.base_value,
            trend_per_decade: self.trend_per_decade,
            noise_amplitude: self.noise_level,
        }
    }
}

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "climate_demo")]
#[command(about = "Synthesize a climate anomaly series and fit its linear trend")]
pub struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of simulated years
    #[arg(short, long, allow_negative_numbers = true)]
    pub years: Option<i64>,

    /// Warming trend per decade
    #[arg(short, long, allow_negative_numbers = true)]
    pub trend: Option<f64>,

    /// Width of the uniform noise band
    #[arg(short, long)]
    pub noise: Option<f64>,

    /// Anomaly in the first year
    #[arg(long, allow_negative_numbers = true)]
    pub base_value: Option<f64>,

    /// Seed for reproducible noise
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write a chart image to this path
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Write the series as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the resolved configuration as TOML to this path
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Start from the config file (or defaults) and apply command-line overrides
    pub fn load(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    fn apply_args(&mut self, args: &Args) {
        let generation = &mut self.generation;
        if let Some(years) = args.years {
            generation.years = years;
        }
        if let Some(trend) = args.trend {
            generation.trend_per_decade = trend;
        }
        if let Some(noise) = args.noise {
            generation.noise_level = noise;
        }
        if let Some(base_value) = args.base_value {
            generation.base_value = base_value;
        }
        if args.seed.is_some() {
            generation.seed = args.seed;
        }
        if args.chart.is_some() {
            self.output.chart = args.chart.clone();
        }
        if args.csv.is_some() {
            self.output.csv = args.csv.clone();
        }
    }

    /// Validate configuration parameters
    ///
    /// Only the upper bound of the year count is checked here; a negative
    /// count surfaces as the generator's invalid-argument error.
    pub fn validate(&self) -> Result<()> {
        let g = &self.generation;

        if g.years > MAX_YEARS {
            anyhow::bail!("years must be at most {}, got {}", MAX_YEARS, g.years);
        }

        if !g.trend_per_decade.is_finite() {
            anyhow::bail!("trend_per_decade must be finite, got {}", g.trend_per_decade);
        }

        if !g.noise_level.is_finite() {
            anyhow::bail!("noise_level must be finite, got {}", g.noise_level);
        }

        if !g.base_value.is_finite() {
            anyhow::bail!("base_value must be finite, got {}", g.base_value);
        }

        for path in [&self.output.chart, &self.output.csv].into_iter().flatten() {
            if path.as_os_str().is_empty() {
                anyhow::bail!("output paths must not be empty");
            }
        }

        Ok(())
    }
}
