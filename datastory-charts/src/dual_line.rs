use anyhow::anyhow;
use datastory_datasets::LifeExpectancyGenderRow;
use datastory_style::palette;
use datastory_style::presets::{ArrowOverrides, StyleOverrides};
use datastory_style::render_style;
use itertools::Itertools;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{anchor, annotate, bold, regular, source_note, title_block, ChartOptions};

const COLLAPSE_YEAR: i32 = 1991;

/// Russian life expectancy by sex: the stable women's line, the volatile
/// men's line and the shaded gap between them.
pub fn draw_gender_gap_lines<'a, T>(
    backend: T,
    rows: &[LifeExpectancyGenderRow],
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let russia: Vec<&LifeExpectancyGenderRow> = rows
        .iter()
        .filter(|row| row.entity == "Russia")
        .sorted_by_key(|row| row.year)
        .collect();
    let last = *russia.last().ok_or(anyhow!("no rows for Russia"))?;

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_top(60)
        .margin_bottom(45)
        .y_label_area_size(40)
        .x_label_area_size(25)
        .build_cartesian_2d(1950f64..2030f64, 48f64..85f64)?;

    // the collapse marker sits underneath everything
    chart.draw_series(DashedLineSeries::new(
        vec![(COLLAPSE_YEAR as f64, 48.0), (COLLAPSE_YEAR as f64, 85.0)],
        4,
        4,
        RGBColor(0xDD, 0xDD, 0xDD).stroke_width(1),
    ))?;
    let (x, y) = chart.backend_coord(&(COLLAPSE_YEAR as f64, 84.0));
    for (i, piece) in ["Soviet Union", "collapses"].iter().enumerate() {
        root.draw(&Text::new(
            piece.to_string(),
            (x, y + i as i32 * 11),
            regular(8.0)
                .color(&RGBColor(0xAA, 0xAA, 0xAA))
                .pos(anchor(HPos::Center, VPos::Top)),
        ))?;
    }

    // shade the gap between the two lines
    let gap: Vec<(f64, f64)> = russia
        .iter()
        .map(|row| (row.year as f64, row.women))
        .chain(russia.iter().rev().map(|row| (row.year as f64, row.men)))
        .collect();
    chart
        .plotting_area()
        .draw(&Polygon::new(gap, palette::PRIMARY.mix(0.08).filled()))?;

    chart.draw_series(LineSeries::new(
        russia.iter().map(|row| (row.year as f64, row.women)),
        palette::NEUTRAL.stroke_width(2),
    ))?;
    chart.draw_series(LineSeries::new(
        russia.iter().map(|row| (row.year as f64, row.men)),
        palette::PRIMARY.stroke_width(3),
    ))?;

    // direct labels instead of a legend
    let (x, y) = chart.backend_coord(&(last.year as f64 + 0.8, last.women));
    root.draw(&Text::new(
        format!("Women: {:.0}", last.women),
        (x, y),
        bold(11.0)
            .color(&palette::NEUTRAL)
            .pos(anchor(HPos::Left, VPos::Center)),
    ))?;
    let (x, y) = chart.backend_coord(&(last.year as f64 + 0.8, last.men));
    root.draw(&Text::new(
        format!("Men: {:.0}", last.men),
        (x, y),
        bold(11.0)
            .color(&palette::PRIMARY)
            .pos(anchor(HPos::Left, VPos::Center)),
    ))?;

    for year in [1960, 1980, 2000, 2020] {
        let (x, y) = chart.backend_coord(&(year as f64, 48.0));
        root.draw(&Text::new(
            year.to_string(),
            (x, y + 8),
            regular(10.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Center, VPos::Top)),
        ))?;
    }
    for tick in [50, 60, 70, 80] {
        let (x, y) = chart.backend_coord(&(1950.0, tick as f64));
        root.draw(&Text::new(
            tick.to_string(),
            (x - 8, y),
            regular(10.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Right, VPos::Center)),
        ))?;
    }

    // the worst year of the gap carries the single annotation
    let worst = russia
        .iter()
        .max_by(|a, b| (a.women - a.men).total_cmp(&(b.women - b.men)))
        .ok_or(anyhow!("no rows for Russia"))?;
    let gap_years = worst.women - worst.men;
    let style = render_style(
        "callout",
        options.tier(),
        &StyleOverrides {
            arrow: Some(ArrowOverrides {
                curvature: Some(0.2),
                shrink_start: Some(5.0),
                shrink_end: Some(2.0),
                ..Default::default()
            }),
            ..Default::default()
        },
    )?;
    annotate(
        &root,
        &format!(
            "Russian men lived only {:.0} years, {:.0} fewer than women",
            worst.men, gap_years
        ),
        chart.backend_coord(&(worst.year as f64, worst.men - 0.5)),
        chart.backend_coord(&(1958.0, 51.0)),
        &style,
    )?;

    title_block(
        &root,
        20,
        "The collapse that shortened Russian men's lives",
        "Life expectancy at birth, Russia, 1950-2023",
    )?;
    source_note(
        &root,
        "Source: Our World in Data / UN World Population Prospects 2024",
    )?;
    root.present()?;
    Ok(())
}
