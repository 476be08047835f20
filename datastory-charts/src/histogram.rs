use anyhow::anyhow;
use datastory_datasets::stats::histogram;
use datastory_datasets::{is_aggregate_code, GdpRow};
use datastory_style::palette;
use datastory_style::presets::{ArrowOverrides, StyleOverrides};
use datastory_style::render_style;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{
    anchor, annotate, bold, corner_text, regular, short_dollars, source_note, title_block,
    ChartOptions, Corner,
};

const BIN_WIDTH: f64 = 5_000.0;
const BINS: usize = 25;
const POVERTY_LINE: f64 = 15_000.0;

const MARKERS: [(&str, RGBColor); 3] = [
    ("India", palette::PRIMARY),
    ("United States", palette::NEUTRAL),
    ("China", palette::PRIMARY),
];

/// Distribution of GDP per capita across countries; bins under $15K are
/// highlighted because that is where most of the world lives.
pub fn draw_gdp_histogram<'a, T>(
    backend: T,
    rows: &[GdpRow],
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let data: Vec<(&str, f64)> = rows
        .iter()
        .filter(|row| row.year == 2023)
        .filter(|row| {
            row.code
                .as_deref()
                .is_some_and(|code| !is_aggregate_code(code))
        })
        .filter_map(|row| Some((row.entity.as_str(), row.gdp_per_capita?)))
        .collect();
    if data.is_empty() {
        Err(anyhow!("no usable 2023 GDP rows"))?;
    }
    let values: Vec<f64> = data.iter().map(|(_, gdp)| *gdp).collect();
    let hist = histogram(&values, 0.0, BIN_WIDTH, BINS);
    let max_count = *hist.counts.iter().max().unwrap_or(&0) as f64;

    let below = values.iter().filter(|&&v| v < POVERTY_LINE).count();
    let pct_below = below as f64 / values.len() as f64 * 100.0;

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_top(60)
        .margin_bottom(45)
        .y_label_area_size(40)
        .x_label_area_size(25)
        .build_cartesian_2d(0f64..(BINS as f64 * BIN_WIDTH), 0f64..max_count * 1.25)?;

    for (bin, &count) in hist.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let left = hist.edges[bin];
        let style = if left < POVERTY_LINE {
            palette::PRIMARY.filled()
        } else {
            palette::NEUTRAL.mix(0.7).filled()
        };
        // a sliver of white between bars, like an edge color
        chart.plotting_area().draw(&Rectangle::new(
            [(left + 150.0, 0.0), (left + BIN_WIDTH - 150.0, count as f64)],
            style,
        ))?;
    }

    // reference countries marked above their bars
    for (country, color) in MARKERS {
        let Some((_, gdp)) = data.iter().find(|(entity, _)| *entity == country) else {
            continue;
        };
        let bin = ((gdp / BIN_WIDTH) as usize).min(BINS - 1);
        let bar_top = hist.counts[bin] as f64;
        let (x, y) = chart.backend_coord(&(*gdp, bar_top));
        root.draw(&Polygon::new(
            vec![(x - 5, y - 14), (x + 5, y - 14), (x, y - 5)],
            color.filled(),
        ))?;
        root.draw(&Text::new(
            country.to_string(),
            (x, y - 17),
            bold(8.0)
                .color(&color)
                .pos(anchor(HPos::Center, VPos::Bottom)),
        ))?;
    }

    for tick in (0..=6).map(|i| i as f64 * 20_000.0) {
        let (x, y) = chart.backend_coord(&(tick, 0.0));
        root.draw(&Text::new(
            short_dollars(tick),
            (x, y + 8),
            regular(10.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Center, VPos::Top)),
        ))?;
    }
    let y_step = if max_count > 25.0 { 10 } else { 5 };
    for tick in (0..).map(|i| i * y_step).take_while(|&t| (t as f64) <= max_count) {
        let (x, y) = chart.backend_coord(&(0.0, tick as f64));
        root.draw(&Text::new(
            tick.to_string(),
            (x - 8, y),
            regular(10.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Right, VPos::Center)),
        ))?;
    }

    corner_text(
        &root,
        Corner::UpperRight,
        &format!("{} countries", values.len()),
    )?;

    let style = render_style(
        "callout",
        options.tier(),
        &StyleOverrides {
            arrow: Some(ArrowOverrides {
                curvature: Some(0.15),
                shrink_start: Some(5.0),
                shrink_end: Some(2.0),
                ..Default::default()
            }),
            ..Default::default()
        },
    )?;
    annotate(
        &root,
        &format!("{pct_below:.0}% of the world's population earns\nless than $15,000 per year"),
        chart.backend_coord(&(POVERTY_LINE, hist.counts[2] as f64 + 1.0)),
        chart.backend_coord(&(40_000.0, max_count * 0.9)),
        &style,
    )?;

    title_block(
        &root,
        20,
        "Global wealth is massively skewed: most countries are poor",
        "Distribution of GDP per capita (PPP) across countries, 2023",
    )?;
    source_note(&root, "Source: Our World in Data / World Bank 2024")?;
    root.present()?;
    Ok(())
}
