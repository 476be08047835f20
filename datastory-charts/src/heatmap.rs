use anyhow::anyhow;
use datastory_datasets::stats::correlation_matrix;
use datastory_datasets::{LifeFactorsRow, LIFE_FACTOR_LABELS};
use datastory_style::colormaps::story_diverging;
use datastory_style::palette;
use datastory_style::presets::FontWeight;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{anchor, bold, regular, sans, source_note, ChartOptions};

const FACTORS: usize = LIFE_FACTOR_LABELS.len();

/// Correlation heatmap of the WHO life expectancy factors, colored with
/// the diverging colormap over [-1, 1].
pub fn draw_life_factors_heatmap<'a, T>(
    backend: T,
    rows: &[LifeFactorsRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let complete: Vec<[f64; FACTORS]> = rows.iter().filter_map(LifeFactorsRow::complete).collect();
    if complete.len() < 3 {
        Err(anyhow!("too few complete rows to correlate"))?;
    }
    let columns: Vec<Vec<f64>> = (0..FACTORS)
        .map(|factor| complete.iter().map(|row| row[factor]).collect())
        .collect();
    let corr = correlation_matrix(&columns);
    let cmap = story_diverging();

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_top(80)
        .margin_bottom(110)
        .margin_right(90)
        .y_label_area_size(120)
        .build_cartesian_2d(0f64..FACTORS as f64, 0f64..FACTORS as f64)?;

    for (i, row) in corr.iter().enumerate() {
        // row 0 of the matrix sits at the top of the chart
        let y_low = (FACTORS - 1 - i) as f64;
        for (j, &r) in row.iter().enumerate() {
            chart.plotting_area().draw(&Rectangle::new(
                [(j as f64, y_low), (j as f64 + 1.0, y_low + 1.0)],
                cmap.color_at(r, -1.0, 1.0).filled(),
            ))?;
        }
    }

    // in-cell values, only where the correlation is strong enough to matter
    for (i, row) in corr.iter().enumerate() {
        for (j, &r) in row.iter().enumerate() {
            if r.abs() < 0.4 && i != j {
                continue;
            }
            let color = if r.abs() > 0.6 { WHITE } else { palette::INK };
            let weight = if r.abs() >= 0.7 && i != j {
                FontWeight::Bold
            } else {
                FontWeight::Normal
            };
            let center = (j as f64 + 0.5, (FACTORS - 1 - i) as f64 + 0.5);
            let (x, y) = chart.backend_coord(&center);
            root.draw(&Text::new(
                format!("{r:.2}"),
                (x, y),
                sans(8.0, weight, false)
                    .color(&color)
                    .pos(anchor(HPos::Center, VPos::Center)),
            ))?;
        }
    }

    // factor names along both axes
    for (i, label) in LIFE_FACTOR_LABELS.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(0.0, (FACTORS - 1 - i) as f64 + 0.5));
        root.draw(&Text::new(
            label.to_string(),
            (x - 8, y),
            regular(9.0)
                .color(&palette::INK)
                .pos(anchor(HPos::Right, VPos::Center)),
        ))?;
        let (x, y) = chart.backend_coord(&(i as f64 + 0.5, 0.0));
        root.draw(&Text::new(
            label.to_string(),
            (x - 4, y + 6),
            regular(9.0)
                .transform(FontTransform::Rotate90)
                .color(&palette::INK),
        ))?;
    }

    // colorbar strip to the right of the grid
    let (top_x, top_y) = chart.backend_coord(&(FACTORS as f64, FACTORS as f64));
    let (_, bottom_y) = chart.backend_coord(&(FACTORS as f64, 0.0));
    let strip_x = top_x + 24;
    let steps = 100;
    let span = bottom_y - top_y;
    for step in 0..steps {
        let y0 = top_y + span * step / steps;
        let y1 = top_y + span * (step + 1) / steps;
        let value = 1.0 - 2.0 * step as f64 / (steps - 1) as f64;
        root.draw(&Rectangle::new(
            [(strip_x, y0), (strip_x + 16, y1)],
            cmap.color_at(value, -1.0, 1.0).filled(),
        ))?;
    }
    for (value, y) in [(1.0, top_y), (0.0, (top_y + bottom_y) / 2), (-1.0, bottom_y)] {
        root.draw(&Text::new(
            format!("{value:.0}"),
            (strip_x + 22, y),
            regular(9.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Left, VPos::Center)),
        ))?;
    }
    root.draw(&Text::new(
        "Correlation",
        (strip_x, bottom_y + 10),
        regular(9.0)
            .color(&palette::TICK_GREY)
            .pos(anchor(HPos::Left, VPos::Top)),
    ))?;

    // title, metadata and the schooling insight directly above the grid
    let r_schooling = corr[0][1];
    let r_gdp = corr[0][4];
    root.draw(&Text::new(
        "Education predicts life expectancy more than wealth",
        (20, 12),
        bold(15.0).color(&palette::INK),
    ))?;
    root.draw(&Text::new(
        "Pearson correlations across countries (WHO data)",
        (20, 36),
        regular(12.0).color(&palette::SUBTITLE_GREY),
    ))?;
    root.draw(&Text::new(
        format!(
            "Years of schooling (r={r_schooling:.2}) predicts how long people live better than GDP (r={r_gdp:.2})"
        ),
        (20, 58),
        bold(10.0).color(&palette::PRIMARY),
    ))?;

    source_note(
        &root,
        "Source: WHO Life Expectancy Dataset / Our World in Data",
    )?;
    root.present()?;
    Ok(())
}
