use anyhow::anyhow;
use datastory_datasets::{is_aggregate_code, ChildMortalityRow};
use datastory_style::palette;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{anchor, bold, regular, source_note, title_block_with_insight, ChartOptions};

/// Worst-hit, biggest improvers and low-mortality reference points.
const COUNTRIES: [&str; 12] = [
    "Niger",
    "Nigeria",
    "Somalia",
    "Chad",
    "Ethiopia",
    "Bangladesh",
    "India",
    "Brazil",
    "China",
    "United States",
    "Japan",
    "France",
];

struct Dumbbell<'a> {
    country: &'a str,
    y1990: f64,
    y2023: f64,
}

/// Child mortality 1990 against 2023 per country: a grey past dot, a
/// primary present dot and the connector showing the journey.
pub fn draw_child_mortality_dumbbell<'a, T>(
    backend: T,
    rows: &[ChildMortalityRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let rate_of = |country: &str, year: i32| {
        rows.iter()
            .filter(|row| {
                row.code
                    .as_deref()
                    .is_some_and(|code| !is_aggregate_code(code))
            })
            .find(|row| row.entity == country && row.year == year)
            .and_then(|row| row.child_mortality_rate)
    };
    let mut dumbbells: Vec<Dumbbell> = COUNTRIES
        .iter()
        .filter_map(|country| {
            Some(Dumbbell {
                country,
                y1990: rate_of(country, 1990)?,
                y2023: rate_of(country, 2023)?,
            })
        })
        .collect();
    if dumbbells.is_empty() {
        Err(anyhow!("no countries with both 1990 and 2023 rates"))?;
    }
    if dumbbells.len() < COUNTRIES.len() {
        log::warn!(
            "{} of {} selected countries lack rates for both years",
            COUNTRIES.len() - dumbbells.len(),
            COUNTRIES.len()
        );
    }
    dumbbells.sort_by(|a, b| a.y2023.total_cmp(&b.y2023));
    let count = dumbbells.len();
    let max_1990 = dumbbells.iter().map(|d| d.y1990).fold(0.0, f64::max);

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_top(85)
        .margin_bottom(45)
        .y_label_area_size(110)
        .x_label_area_size(25)
        .build_cartesian_2d(-1f64..max_1990 + 2.0, -0.6f64..count as f64 - 0.4)?;

    for (i, dumbbell) in dumbbells.iter().enumerate() {
        let y = i as f64;
        chart.plotting_area().draw(&PathElement::new(
            vec![(dumbbell.y1990, y), (dumbbell.y2023, y)],
            palette::NEUTRAL.mix(0.4).stroke_width(2),
        ))?;
        chart.plotting_area().draw(&Circle::new(
            (dumbbell.y1990, y),
            5,
            palette::NEUTRAL.mix(0.6).filled(),
        ))?;
        chart.plotting_area().draw(&Circle::new(
            (dumbbell.y2023, y),
            5,
            palette::PRIMARY.filled(),
        ))?;
    }

    for (i, dumbbell) in dumbbells.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(-1.0, i as f64));
        root.draw(&Text::new(
            dumbbell.country.to_string(),
            (x - 8, y),
            regular(10.0)
                .color(&palette::INK)
                .pos(anchor(HPos::Right, VPos::Center)),
        ))?;
    }

    // the two years labeled once, next to the top row
    let top = &dumbbells[count - 1];
    let (x, y) = chart.backend_coord(&(max_1990 + 0.5, count as f64 - 0.5));
    root.draw(&Text::new(
        "1990",
        (x, y),
        bold(10.0)
            .color(&palette::NEUTRAL)
            .pos(anchor(HPos::Left, VPos::Bottom)),
    ))?;
    let (x, y) = chart.backend_coord(&(top.y2023 - 0.5, count as f64 - 0.5));
    root.draw(&Text::new(
        "2023",
        (x, y),
        bold(10.0)
            .color(&palette::PRIMARY)
            .pos(anchor(HPos::Right, VPos::Bottom)),
    ))?;

    for tick in (0..=7).map(|i| (i * 5) as f64) {
        if tick > max_1990 + 2.0 {
            break;
        }
        let (x, y) = chart.backend_coord(&(tick, -0.6));
        root.draw(&Text::new(
            format!("{tick:.0}%"),
            (x, y + 8),
            regular(10.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Center, VPos::Top)),
        ))?;
    }

    // the cluster of Sub-Saharan countries at the top makes the story
    // obvious without an arrow, so the insight rides in the title
    title_block_with_insight(
        &root,
        20,
        "Child mortality has plummeted, but not everywhere",
        "1 in 10 children in Sub-Saharan Africa still don't survive to age 5",
        "Deaths per 100 live births before age 5, 1990 vs 2023",
    )?;
    source_note(
        &root,
        "Source: Our World in Data / UN Inter-agency Group for Child Mortality 2024",
    )?;
    root.present()?;
    Ok(())
}
