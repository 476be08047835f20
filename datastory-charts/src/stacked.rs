use anyhow::anyhow;
use datastory_datasets::EnergyMixRow;
use datastory_style::palette;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{anchor, bold, regular, source_note, title_block, ChartOptions};

const COUNTRIES: [&str; 12] = [
    "Norway",
    "Brazil",
    "France",
    "Canada",
    "Germany",
    "United States",
    "Japan",
    "China",
    "Australia",
    "Poland",
    "India",
    "South Africa",
];

const OTHER_GREY: RGBColor = RGBColor(0xE0, 0xE0, 0xE0);

/// Stacked horizontal bars of the 2023 electricity mix, grouped into
/// nuclear, renewables, fossil and other, sorted by nuclear share.
pub fn draw_energy_mix_bars<'a, T>(
    backend: T,
    rows: &[EnergyMixRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let mut subset: Vec<&EnergyMixRow> = rows
        .iter()
        .filter(|row| row.year == 2023 && COUNTRIES.contains(&row.country.as_str()))
        .collect();
    if subset.is_empty() {
        Err(anyhow!("no 2023 rows for the selected countries"))?;
    }
    subset.sort_by(|a, b| a.nuclear().total_cmp(&b.nuclear()));
    let count = subset.len();

    // the three heaviest nuclear users get in-bar labels
    let mut by_nuclear: Vec<usize> = (0..count).collect();
    by_nuclear.sort_by(|&a, &b| subset[b].nuclear().total_cmp(&subset[a].nuclear()));
    let top_nuclear = &by_nuclear[..count.min(3)];

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_top(80)
        .margin_bottom(40)
        .y_label_area_size(120)
        .build_cartesian_2d(0f64..100f64, -0.5f64..count as f64 - 0.3)?;

    for (i, row) in subset.iter().enumerate() {
        let y = i as f64;
        let mut left = 0.0;
        let segments = [
            (row.nuclear(), palette::PRIMARY),
            (row.renewables(), palette::POSITIVE),
            (row.fossil(), palette::NEUTRAL),
            (row.other(), OTHER_GREY),
        ];
        for (share, color) in segments {
            chart.plotting_area().draw(&Rectangle::new(
                [(left, y - 0.3), ((left + share).min(100.0), y + 0.3)],
                color.filled(),
            ))?;
            left += share;
        }
        if top_nuclear.contains(&i) && row.nuclear() > 5.0 {
            let (x, y) = chart.backend_coord(&(row.nuclear() / 2.0, y));
            root.draw(&Text::new(
                format!("{:.0}%", row.nuclear()),
                (x, y),
                bold(9.0)
                    .color(&WHITE)
                    .pos(anchor(HPos::Center, VPos::Center)),
            ))?;
        }
    }

    for (i, row) in subset.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(0.0, i as f64));
        root.draw(&Text::new(
            row.country.clone(),
            (x - 8, y),
            regular(10.0)
                .color(&palette::INK)
                .pos(anchor(HPos::Right, VPos::Center)),
        ))?;
    }

    // direct color-keyed labels above the bars replace a legend
    let legend = [
        (2.0, "Nuclear", palette::PRIMARY),
        (14.0, "Renewables", palette::POSITIVE),
        (30.0, "Fossil", palette::NEUTRAL),
        (40.0, "Other", OTHER_GREY),
    ];
    for (x_data, label, color) in legend {
        let (x, y) = chart.backend_coord(&(x_data, count as f64 - 0.3));
        root.draw(&Text::new(
            label.to_string(),
            (x, y - 6),
            bold(10.0)
                .color(&color)
                .pos(anchor(HPos::Left, VPos::Bottom)),
        ))?;
    }

    title_block(
        &root,
        20,
        "Most countries barely use nuclear, France is the exception",
        "Share of electricity generation by source, 2023",
    )?;
    source_note(
        &root,
        "Source: Our World in Data / Energy Institute Statistical Review 2024",
    )?;
    root.present()?;
    Ok(())
}
