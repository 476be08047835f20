use anyhow::anyhow;
use datastory_datasets::Co2Row;
use datastory_style::palette;
use datastory_style::presets::{ArrowOverrides, StyleOverrides};
use datastory_style::render_style;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{anchor, annotate, regular, source_note, title_block, ChartOptions};

/// Story-driven selection: the top per-capita emitters, relatable large
/// economies, and the bottom of the range.
const COUNTRIES: [&str; 15] = [
    "Qatar",
    "Kuwait",
    "Bahrain",
    "United Arab Emirates",
    "Saudi Arabia",
    "Australia",
    "United States",
    "Canada",
    "Russia",
    "China",
    "United Kingdom",
    "World",
    "India",
    "Ethiopia",
    "Democratic Republic of Congo",
];

/// Horizontal bar chart of CO2 emissions per capita, 2023.
pub fn draw_co2_bar<'a, T>(
    backend: T,
    rows: &[Co2Row],
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let mut subset: Vec<&Co2Row> = rows
        .iter()
        .filter(|row| row.year == 2023 && COUNTRIES.contains(&row.entity.as_str()))
        .collect();
    subset.sort_by(|a, b| a.tonnes_per_capita.total_cmp(&b.tonnes_per_capita));
    if subset.is_empty() {
        Err(anyhow!("no 2023 rows for the selected countries"))?;
    }
    let count = subset.len();
    let max = subset[count - 1].tonnes_per_capita;

    let bar_color = |entity: &str| match entity {
        "Qatar" => palette::NEGATIVE,
        "United States" => palette::PRIMARY,
        _ => palette::NEUTRAL,
    };

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_top(60)
        .margin_bottom(40)
        .y_label_area_size(180)
        .build_cartesian_2d(0f64..max * 1.18, -0.6f64..count as f64 - 0.4)?;
    let plot = chart.plotting_area();

    for (i, row) in subset.iter().enumerate() {
        let y = i as f64;
        plot.draw(&Rectangle::new(
            [(0.0, y - 0.35), (row.tonnes_per_capita, y + 0.35)],
            bar_color(&row.entity).filled(),
        ))?;
    }

    // direct value labels just past each bar end
    for (i, row) in subset.iter().enumerate() {
        let value = row.tonnes_per_capita;
        let label = if value > 2.0 {
            format!("{value:.1}t")
        } else {
            format!("{value:.2}t")
        };
        let color = if value > 2.0 {
            bar_color(&row.entity)
        } else {
            palette::NEUTRAL
        };
        let (x, y) = chart.backend_coord(&(value, i as f64));
        root.draw(&Text::new(
            label,
            (x + 6, y),
            regular(10.0)
                .color(&color)
                .pos(anchor(HPos::Left, VPos::Center)),
        ))?;
    }

    // country names where the y axis would be
    for (i, row) in subset.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(0.0, i as f64));
        root.draw(&Text::new(
            row.entity.clone(),
            (x - 8, y),
            regular(11.0)
                .color(&palette::INK)
                .pos(anchor(HPos::Right, VPos::Center)),
        ))?;
    }

    // the one annotation: the ratio between the ends of the scale
    let qatar = subset
        .iter()
        .position(|row| row.entity == "Qatar")
        .ok_or(anyhow!("Qatar missing from the subset"))?;
    let drc = subset
        .iter()
        .find(|row| row.entity == "Democratic Republic of Congo")
        .ok_or(anyhow!("DRC missing from the subset"))?;
    let ratio = (subset[qatar].tonnes_per_capita / drc.tonnes_per_capita) as i64;
    let style = render_style(
        "negative",
        options.tier(),
        &StyleOverrides {
            arrow: Some(ArrowOverrides {
                curvature: Some(0.25),
                shrink_start: Some(5.0),
                shrink_end: Some(0.0),
                ..Default::default()
            }),
            ..Default::default()
        },
    )?;
    annotate(
        &root,
        &format!("A person in Qatar emits {ratio}x more than in the DRC"),
        chart.backend_coord(&(subset[qatar].tonnes_per_capita, qatar as f64 - 0.35)),
        chart.backend_coord(&(max * 0.45, qatar as f64 - 6.0)),
        &style,
    )?;

    title_block(
        &root,
        20,
        "Carbon inequality: top emitters dwarf the rest of the world",
        "CO₂ emissions per capita (tonnes), 2023",
    )?;
    source_note(&root, "Source: Our World in Data / Global Carbon Budget 2024")?;
    root.present()?;
    Ok(())
}
