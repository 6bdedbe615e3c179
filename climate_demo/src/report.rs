use climate_trend::{GenerationParams, TrendAnalysis};
use std::fmt::{self, Write};

/// Plain-text summary of one run.
pub fn format_summary(params: &GenerationParams, analysis: &TrendAnalysis) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Synthetic Climate Trend")?;
    writeln!(out, "=======================")?;
    writeln!(out)?;
    writeln!(out, "Years simulated:     {}", params.count)?;
    writeln!(out, "Trend per decade:    {:.3}", params.trend_per_decade)?;
    writeln!(out, "Noise level:         {:.3}", params.noise_amplitude)?;
    writeln!(out, "Base value:          {:.3}", params.base_value)?;
    writeln!(out)?;

    let (first, last) = match (analysis.samples.first(), analysis.samples.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            writeln!(out, "No samples generated.")?;
            return Ok(out);
        }
    };

    let model = &analysis.model;
    writeln!(out, "Period:              {}-{}", first.year, last.year)?;
    writeln!(out, "Fitted slope:        {:.6} per year", model.slope)?;
    writeln!(out, "Fitted trend:        {:.4} per decade", analysis.trend_per_decade())?;
    writeln!(out, "Intercept:           {:.4}", model.intercept)?;
    writeln!(
        out,
        "Trend at endpoints:  {:.4} -> {:.4}",
        model.predict(first.year as f64),
        model.predict(last.year as f64)
    )?;

    Ok(out)
}
