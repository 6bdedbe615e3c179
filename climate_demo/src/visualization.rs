//! Chart of a series and its fitted trend.

use climate_trend::{TrendAnalysis, CHART_VALUE_PAD};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1280, 720);

/// Image format picked from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ChartFormat::Svg,
            _ => ChartFormat::Png,
        }
    }
}

/// Draw the series together with its regression line.
///
/// The series is drawn in blue, the fitted trend in red. Years run along the
/// x axis with integer tick labels, values are padded by
/// [`CHART_VALUE_PAD`] above and below.
///
/// # Arguments
/// * `analysis` - Generated series and fitted model
/// * `output_path` - Where to write the image; `.svg` selects SVG output
pub fn render_chart<P: AsRef<Path>>(
    analysis: &TrendAnalysis,
    output_path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = output_path.as_ref();
    match ChartFormat::from_path(path) {
        ChartFormat::Svg => draw(&SVGBackend::new(path, CHART_SIZE).into_drawing_area(), analysis),
        ChartFormat::Png => draw(&BitMapBackend::new(path, CHART_SIZE).into_drawing_area(), analysis),
    }
}

fn draw<DB>(root: &DrawingArea<DB, Shift>, analysis: &TrendAnalysis) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let frame = analysis
        .frame(CHART_VALUE_PAD)
        .ok_or("empty series, nothing to draw")?;
    let years = frame.years.non_degenerate(1.0);

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Synthetic anomaly, fitted trend {:+.3} per decade", analysis.trend_per_decade()),
            ("sans-serif", 28).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(years.min..years.max, frame.values.min..frame.values.max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Year")
        .y_desc("Temperature anomaly")
        .x_label_formatter(&|x| format!("{:.0}", x))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            analysis.samples.iter().map(|s| (s.year as f64, s.value)),
            &BLUE,
        ))?
        .label("Series")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            analysis.trend_line().into_iter().map(|(year, v)| (year as f64, v)),
            RED.stroke_width(2),
        ))?
        .label("Trend")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart.configure_series_labels().border_style(BLACK).draw()?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_trend::{GenerationParams, Mwc256};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ChartFormat::from_path(Path::new("out/chart.svg")), ChartFormat::Svg);
        assert_eq!(ChartFormat::from_path(Path::new("chart.SVG")), ChartFormat::Svg);
        assert_eq!(ChartFormat::from_path(Path::new("chart.png")), ChartFormat::Png);
        assert_eq!(ChartFormat::from_path(Path::new("chart")), ChartFormat::Png);
    }

    fn analysis(count: i64) -> TrendAnalysis {
        let params = GenerationParams {
            count,
            base_value: 0.0,
            trend_per_decade: 0.4,
            noise_amplitude: 0.8,
        };
        TrendAnalysis::run(&params, &mut Mwc256::with_seed(12)).unwrap()
    }

    #[test]
    fn test_render_svg() {
        let dir = tempfile::tempdir().unwrap();

        for count in [1, 100] {
            let path = dir.path().join(format!("chart_{}.svg", count));
            render_chart(&analysis(count), &path).unwrap();

            let content = std::fs::read_to_string(&path).unwrap();
            assert!(content.contains("<svg"), "count {}: no svg root", count);
        }
    }

    #[test]
    fn test_empty_series_is_refused() {
        let analysis = analysis(0);
        let dir = tempfile::tempdir().unwrap();

        let err = render_chart(&analysis, dir.path().join("chart.svg")).unwrap_err();
        assert!(err.to_string().contains("empty series"));
    }
}
