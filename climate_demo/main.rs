use anyhow::{Context, Result};
use clap::Parser;
use climate_demo::*;
use climate_trend::{Mwc256, TrendAnalysis};
use rand::SeedableRng;
use tracing::{debug, info, warn, Level};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .compact()
        .init();

    let config = Config::load(&args)?;
    if let Some(path) = &args.config {
        info!("loaded configuration from {}", path.display());
    }
    if let Some(path) = &args.save_config {
        config.to_file(path)?;
        info!("configuration saved to {}", path.display());
    }

    let params = config.generation.params();
    let analysis = match config.generation.seed {
        Some(seed) => TrendAnalysis::run(&params, &mut Mwc256::seed_from_u64(seed)),
        None => TrendAnalysis::run(&params, &mut rand::thread_rng()),
    }
    .context("Refusing to render")?;
    info!(samples = analysis.samples.len(), "series generated");

    if let Some(scene) = analysis.scene() {
        if let (Some(start), Some(end)) = (scene.trend.first(), scene.trend.last()) {
            debug!(
                points = scene.points.len(),
                "scene trend from ({:.2}, {:.2}) to ({:.2}, {:.2})",
                start[0],
                start[1],
                end[0],
                end[1]
            );
        }
    }

    println!("{}", format_summary(&params, &analysis)?);

    if let Some(path) = &config.output.csv {
        write_csv(path, &analysis)?;
        info!("series written to {}", path.display());
    }

    if let Some(path) = &config.output.chart {
        if analysis.samples.is_empty() {
            warn!("no samples, skipping chart {}", path.display());
        } else {
            render_chart(&analysis, path).map_err(|e| anyhow::anyhow!("{}", e))?;
            info!("chart written to {}", path.display());
        }
    }

    Ok(())
}
