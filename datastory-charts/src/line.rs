use anyhow::anyhow;
use datastory_datasets::TemperatureRow;
use datastory_style::palette;
use datastory_style::presets::{ArrowOverrides, StyleOverrides};
use datastory_style::render_style;
use itertools::Itertools;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{anchor, annotate, bold, regular, source_note, title_block, ChartOptions};

const SPLIT_YEAR: i32 = 1980;

/// World temperature anomaly: a confidence band, a grey flat era and the
/// primary-colored climb after 1980.
pub fn draw_temperature_line<'a, T>(
    backend: T,
    rows: &[TemperatureRow],
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let world: Vec<&TemperatureRow> = rows
        .iter()
        .filter(|row| row.entity == "World")
        .sorted_by_key(|row| row.year)
        .collect();
    let (first, last) = match (world.first(), world.last()) {
        (Some(first), Some(last)) if first.year < last.year => (*first, *last),
        _ => Err(anyhow!("not enough World rows in the anomaly dataset"))?,
    };
    let y_min = world
        .iter()
        .map(|row| row.lower)
        .fold(f64::INFINITY, f64::min);
    let y_max = world
        .iter()
        .map(|row| row.upper)
        .fold(f64::NEG_INFINITY, f64::max);

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_top(60)
        .margin_bottom(50)
        .y_label_area_size(50)
        .x_label_area_size(30)
        .build_cartesian_2d(
            first.year as f64..last.year as f64 + 12.0,
            (y_min - 0.1)..(y_max + 0.4),
        )?;
    // confidence band
    let band: Vec<(f64, f64)> = world
        .iter()
        .map(|row| (row.year as f64, row.upper))
        .chain(world.iter().rev().map(|row| (row.year as f64, row.lower)))
        .collect();
    chart.plotting_area().draw(&Polygon::new(
        band,
        RGBColor(0xE8, 0xE0, 0xF0).mix(0.5).filled(),
    ))?;

    // zero baseline under everything else
    chart.plotting_area().draw(&PathElement::new(
        vec![(first.year as f64, 0.0), (last.year as f64 + 12.0, 0.0)],
        palette::GRID_GREY.stroke_width(1),
    ))?;

    let before = world.iter().filter(|row| row.year <= SPLIT_YEAR);
    let after = world.iter().filter(|row| row.year >= SPLIT_YEAR);
    chart.draw_series(LineSeries::new(
        before.map(|row| (row.year as f64, row.average)),
        palette::NEUTRAL.stroke_width(2),
    ))?;
    chart.draw_series(LineSeries::new(
        after.map(|row| (row.year as f64, row.average)),
        palette::PRIMARY.stroke_width(3),
    ))?;

    // direct labels at the ends of the story
    let (x, y) = chart.backend_coord(&(first.year as f64 + 5.0, -0.2));
    for (i, piece) in ["1850", "baseline"].iter().enumerate() {
        root.draw(&Text::new(
            piece.to_string(),
            (x, y + i as i32 * 12),
            regular(9.0)
                .color(&palette::NEUTRAL)
                .pos(anchor(HPos::Center, VPos::Top)),
        ))?;
    }
    let (x, y) = chart.backend_coord(&(last.year as f64 + 1.0, last.average));
    root.draw(&Text::new(
        format!("+{:.2}°C", last.average),
        (x, y),
        bold(13.0)
            .color(&palette::PRIMARY)
            .pos(anchor(HPos::Left, VPos::Center)),
    ))?;

    // sparse year and anomaly ticks, no spines
    for year in [1860, 1900, 1940, 1980, 2020] {
        let (x, y) = chart.backend_coord(&(year as f64, y_min - 0.1));
        root.draw(&Text::new(
            year.to_string(),
            (x, y + 8),
            regular(10.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Center, VPos::Top)),
        ))?;
    }
    for tick in [0.0, 0.5, 1.0, 1.5] {
        if tick > y_max + 0.4 {
            continue;
        }
        let (x, y) = chart.backend_coord(&(first.year as f64, tick));
        root.draw(&Text::new(
            format!("{tick:.1}"),
            (x - 8, y),
            regular(10.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Right, VPos::Center)),
        ))?;
    }

    let inflection = world
        .iter()
        .find(|row| row.year == SPLIT_YEAR)
        .ok_or(anyhow!("anomaly dataset is missing {SPLIT_YEAR}"))?;
    let style = render_style(
        "callout",
        options.tier(),
        &StyleOverrides {
            arrow: Some(ArrowOverrides {
                curvature: Some(-0.2),
                shrink_start: Some(5.0),
                shrink_end: Some(5.0),
                ..Default::default()
            }),
            ..Default::default()
        },
    )?;
    annotate(
        &root,
        "Acceleration begins around 1980",
        chart.backend_coord(&(SPLIT_YEAR as f64, inflection.average - 0.06)),
        chart.backend_coord(&(1890.0, y_max * 0.85)),
        &style,
    )?;

    title_block(
        &root,
        20,
        "130 years of stability, then a relentless climb",
        "Temperature anomaly (°C vs. 1850-1900 baseline)",
    )?;
    source_note(&root, "Source: Our World in Data / HadCRUT5")?;
    root.present()?;
    Ok(())
}
