mod render;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use datastory_charts::ChartOptions;
use std::path::PathBuf;
use tracing::{error, info};

use render::RenderContext;

#[derive(Parser)]
#[command(
    name = "datastory",
    about = "Renders the styled chart collection from the bundled CSV datasets"
)]
struct Args {
    /// Directory holding the CSV datasets
    #[arg(long, default_value = "datasets")]
    data_dir: PathBuf,
    /// Directory the rendered PNGs are written to
    #[arg(long, default_value = "graphs")]
    out_dir: PathBuf,
    /// Larger annotation sizing for slides
    #[arg(long)]
    presentation: bool,
    /// Render the default-styled comparison variant instead
    #[arg(long)]
    ugly: bool,
    #[command(subcommand)]
    chart: Chart,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Chart {
    /// People escaping extreme poverty, as a big number
    Poverty,
    /// CO2 per capita horizontal bars
    Co2,
    /// World temperature anomaly line
    Temperature,
    /// Renewable electricity slope chart
    Renewables,
    /// GDP vs life satisfaction scatter
    Happiness,
    /// Life expectancy factor correlation heatmap
    LifeFactors,
    /// Russian life expectancy by sex
    GenderGap,
    /// Electricity mix stacked bars
    EnergyMix,
    /// GDP per capita histogram
    GdpDistribution,
    /// Child mortality dumbbell chart
    ChildMortality,
    /// Every chart in sequence
    All,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    std::fs::create_dir_all(&args.out_dir)?;

    let ctx = RenderContext {
        data_dir: args.data_dir,
        out_dir: args.out_dir,
        options: ChartOptions {
            presentation: args.presentation,
        },
        ugly: args.ugly,
    };

    let charts: Vec<Chart> = match args.chart {
        Chart::All => vec![
            Chart::Poverty,
            Chart::Co2,
            Chart::Temperature,
            Chart::Renewables,
            Chart::Happiness,
            Chart::LifeFactors,
            Chart::GenderGap,
            Chart::EnergyMix,
            Chart::GdpDistribution,
            Chart::ChildMortality,
        ],
        single => vec![single],
    };

    let mut failures = 0;
    for &chart in &charts {
        let result = match chart {
            Chart::Poverty => render::poverty(&ctx),
            Chart::Co2 => render::co2(&ctx),
            Chart::Temperature => render::temperature(&ctx),
            Chart::Renewables => render::renewables(&ctx),
            Chart::Happiness => render::happiness(&ctx),
            Chart::LifeFactors => render::life_factors(&ctx),
            Chart::GenderGap => render::gender_gap(&ctx),
            Chart::EnergyMix => render::energy_mix(&ctx),
            Chart::GdpDistribution => render::gdp_distribution(&ctx),
            Chart::ChildMortality => render::child_mortality(&ctx),
            Chart::All => unreachable!("expanded above"),
        };
        match result {
            Ok(path) => info!("saved {}", path.display()),
            Err(e) => {
                error!("{chart:?} failed: {e:#}");
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{failures} chart(s) failed to render");
    }
    Ok(())
}
