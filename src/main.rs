//! Minimum gas reserve chart.
//!
//! Sweeps the configured depth range for a handful of cylinder volumes
//! and renders one line per cylinder into a PNG.
//!
//! Run with: `cargo run -- 25` to override the default AMV of 30 l/min.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueHint};
use plotters::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mingas::series::{CylinderSeries, build_series};
use mingas::{DEFAULT_CYLINDERS, MingasParameters};

const X_SIZE: u32 = 900;
const Y_SIZE: u32 = 650;

#[derive(Parser, Debug)]
#[command(author, version, about = "Minimum gas reserve chart for scuba cylinders", long_about = None)]
struct Cli {
    /// Breathing rate (AMV) in litres per minute
    amv: Option<f32>,

    /// Output PNG path
    #[arg(short, long, default_value = "mingas.png", value_hint = ValueHint::FilePath)]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let params = match cli.amv {
        Some(amv) => MingasParameters::new(amv),
        None => MingasParameters::default(),
    };

    let series = build_series(params.depth_range(), params.amv, &DEFAULT_CYLINDERS)
        .map_err(|e| anyhow!("invalid depth range configuration: {:?}", e))?;

    for s in &series {
        for p in &s.points {
            debug!(volume = s.volume, depth = p.depth, min_gas = p.min_gas);
        }
    }

    render_chart(&cli.output, params.amv, &series)?;
    info!(amv = params.amv, "wrote {}", cli.output.display());

    Ok(())
}

fn render_chart(path: &Path, amv: f32, series: &[CylinderSeries]) -> Result<()> {
    let root = BitMapBackend::new(path, (X_SIZE, Y_SIZE)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_depth = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|p| p.depth)
        .fold(0.0f32, f32::max);
    let max_gas = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|p| p.min_gas)
        .fold(0.0f32, f32::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("mingas for AMV = {:.0} l/min", amv), ("sans-serif", 24))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..max_depth * 1.05, 0.0..max_gas * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("depth [m]")
        .y_desc("mingas [bar]")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    for (i, s) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                s.points.iter().map(|p| (p.depth, p.min_gas)),
                &color,
            ))?
            .label(format!("{}l", s.volume))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()
        .with_context(|| format!("saving chart to {}", path.display()))?;

    Ok(())
}
