//! Command-line front end for the synthetic climate trend demo.
//!
//! # Modules
//!
//! - `config` - TOML configuration and command-line overrides
//! - `export` - CSV export of a series and its fitted trend
//! - `report` - Plain-text run summary
//! - `visualization` - PNG/SVG chart of the series and the trend line

pub mod config;
pub mod export;
pub mod report;
pub mod visualization;

pub use config::{Args, Config, GenerationConfig, OutputConfig, MAX_YEARS};
pub use export::write_csv;
pub use report::format_summary;
pub use visualization::{render_chart, ChartFormat};
