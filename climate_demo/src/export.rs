use anyhow::{Context, Result};
use climate_trend::TrendAnalysis;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `year,value,trend` rows, creating parent directories if needed.
pub fn write_csv<P: AsRef<Path>>(path: P, analysis: &TrendAnalysis) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "year,value,trend")?;
    for (sample, (_, predicted)) in analysis.samples.iter().zip(analysis.trend_line()) {
        writeln!(out, "{},{},{}", sample.year, sample.value, predicted)?;
    }
    out.flush()?;

    Ok(())
}
