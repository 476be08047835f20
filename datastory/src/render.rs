use anyhow::{anyhow, Result};
use datastory_charts::{ugly, ChartOptions};
use datastory_datasets as datasets;
use plotters::prelude::BitMapBackend;
use std::path::PathBuf;

pub struct RenderContext {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    pub options: ChartOptions,
    pub ugly: bool,
}

impl RenderContext {
    fn data(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    fn out(&self, stem: &str) -> PathBuf {
        let suffix = if self.ugly { "_ugly" } else { "" };
        self.out_dir.join(format!("{stem}{suffix}.png"))
    }
}

pub fn poverty(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_poverty(ctx.data("extreme_poverty.csv"))?;
    let out = ctx.out("01_big_number_poverty");
    {
        let backend = BitMapBackend::new(&out, (1000, 600));
        let drawn = if ctx.ugly {
            ugly::draw_poverty_bars_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_poverty_big_number(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the poverty chart: {e}"))?
        }
    }
    Ok(out)
}

pub fn co2(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_co2(ctx.data("co2_per_capita.csv"))?;
    let out = ctx.out("02_horizontal_bar_co2");
    {
        let backend = BitMapBackend::new(&out, (1000, 800));
        let drawn = if ctx.ugly {
            ugly::draw_co2_bar_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_co2_bar(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the CO2 bars: {e}"))?
        }
    }
    Ok(out)
}

pub fn temperature(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_temperature(ctx.data("temperature_anomaly.csv"))?;
    let out = ctx.out("03_line_chart_temperature");
    {
        let backend = BitMapBackend::new(&out, (1200, 600));
        let drawn = if ctx.ugly {
            ugly::draw_temperature_line_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_temperature_line(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the anomaly line: {e}"))?
        }
    }
    Ok(out)
}

pub fn renewables(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_renewables(ctx.data("renewables_share.csv"))?;
    let out = ctx.out("04_slope_chart_renewables");
    {
        let backend = BitMapBackend::new(&out, (1000, 800));
        let drawn = if ctx.ugly {
            ugly::draw_renewables_slope_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_renewables_slope(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the slope chart: {e}"))?
        }
    }
    Ok(out)
}

pub fn happiness(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_happiness(ctx.data("gdp_vs_happiness.csv"))?;
    let out = ctx.out("05_scatter_gdp_happiness");
    {
        let backend = BitMapBackend::new(&out, (1100, 700));
        let drawn = if ctx.ugly {
            ugly::draw_happiness_scatter_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_happiness_scatter(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the scatter plot: {e}"))?
        }
    }
    Ok(out)
}

pub fn life_factors(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_life_factors(ctx.data("life_expectancy_who.csv"))?;
    let out = ctx.out("06_heatmap_life_expectancy");
    {
        let backend = BitMapBackend::new(&out, (1000, 820));
        let drawn = if ctx.ugly {
            ugly::draw_life_factors_heatmap_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_life_factors_heatmap(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the heatmap: {e}"))?
        }
    }
    Ok(out)
}

pub fn gender_gap(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_life_expectancy_gender(ctx.data("life_expectancy_gender.csv"))?;
    let out = ctx.out("07_dual_line_life_expectancy");
    {
        let backend = BitMapBackend::new(&out, (1200, 600));
        let drawn = if ctx.ugly {
            ugly::draw_gender_gap_lines_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_gender_gap_lines(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the gap lines: {e}"))?
        }
    }
    Ok(out)
}

pub fn energy_mix(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_energy_mix(ctx.data("energy_mix.csv"))?;
    let out = ctx.out("08_stacked_bar_electricity_mix");
    {
        let backend = BitMapBackend::new(&out, (1100, 700));
        let drawn = if ctx.ugly {
            ugly::draw_energy_mix_bars_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_energy_mix_bars(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the stacked bars: {e}"))?
        }
    }
    Ok(out)
}

pub fn gdp_distribution(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_gdp(ctx.data("gdp_per_capita.csv"))?;
    let out = ctx.out("09_histogram_gdp_distribution");
    {
        let backend = BitMapBackend::new(&out, (1100, 600));
        let drawn = if ctx.ugly {
            ugly::draw_gdp_histogram_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_gdp_histogram(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the histogram: {e}"))?
        }
    }
    Ok(out)
}

pub fn child_mortality(ctx: &RenderContext) -> Result<PathBuf> {
    let rows = datasets::load_child_mortality(ctx.data("child_mortality.csv"))?;
    let out = ctx.out("10_dumbbell_child_mortality");
    {
        let backend = BitMapBackend::new(&out, (1100, 700));
        let drawn = if ctx.ugly {
            ugly::draw_child_mortality_dumbbell_ugly(backend, &rows, &ctx.options)
        } else {
            datastory_charts::draw_child_mortality_dumbbell(backend, &rows, &ctx.options)
        };
        if let Err(e) = drawn {
            Err(anyhow!("can't draw the dumbbell chart: {e}"))?
        }
    }
    Ok(out)
}
