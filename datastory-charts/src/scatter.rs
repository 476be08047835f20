use anyhow::anyhow;
use datastory_datasets::stats::log_linear_fit;
use datastory_datasets::{HappinessRow, AGGREGATE_ENTITIES};
use datastory_style::palette;
use datastory_style::presets::{ArrowOverrides, StyleOverrides};
use datastory_style::render_style;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{anchor, annotate, bold, regular, short_dollars, source_note, title_block, ChartOptions};

const HIGHLIGHTS: [(&str, RGBColor); 5] = [
    ("Finland", palette::PRIMARY),
    ("Costa Rica", palette::POSITIVE),
    ("United States", palette::PRIMARY),
    ("Afghanistan", palette::NEUTRAL),
    ("Luxembourg", palette::NEUTRAL),
];

const X_MIN: f64 = 800.0;
const X_MAX: f64 = 200_000.0;

/// GDP per capita against life satisfaction on a log x axis, with a
/// dashed diminishing-returns fit.
pub fn draw_happiness_scatter<'a, T>(
    backend: T,
    rows: &[HappinessRow],
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let data: Vec<(&str, f64, f64)> = rows
        .iter()
        .filter(|row| {
            row.year == 2023
                && row.code.is_some()
                && !AGGREGATE_ENTITIES.contains(&row.entity.as_str())
        })
        .filter_map(|row| Some((row.entity.as_str(), row.gdp_per_capita?, row.satisfaction?)))
        .collect();
    if data.len() < 4 {
        Err(anyhow!("not enough countries with both measures in 2023"))?;
    }

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_top(60)
        .margin_bottom(40)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d((X_MIN..X_MAX).log_scale(), 1f64..8.5f64)?;

    // the cloud
    chart.draw_series(
        data.iter()
            .map(|(_, gdp, sat)| Circle::new((*gdp, *sat), 4, palette::NEUTRAL.mix(0.35).filled())),
    )?;

    // dashed log fit under the highlights
    let gdps: Vec<f64> = data.iter().map(|(_, gdp, _)| *gdp).collect();
    let sats: Vec<f64> = data.iter().map(|(_, _, sat)| *sat).collect();
    let (slope, intercept) =
        log_linear_fit(&gdps, &sats).ok_or(anyhow!("degenerate GDP distribution"))?;
    let lo = gdps.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = gdps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let fit = (0..200).map(move |i| {
        let x = lo * (hi / lo).powf(i as f64 / 199.0);
        (x, slope * x.ln() + intercept)
    });
    chart.draw_series(DashedLineSeries::new(
        fit,
        6,
        4,
        palette::PRIMARY.mix(0.4).stroke_width(2),
    ))?;

    // storytelling outliers with white-edged markers and direct labels
    for (country, color) in HIGHLIGHTS {
        let Some((_, gdp, sat)) = data.iter().find(|(entity, _, _)| *entity == country) else {
            continue;
        };
        chart
            .plotting_area()
            .draw(&Circle::new((*gdp, *sat), 7, WHITE.filled()))?;
        chart
            .plotting_area()
            .draw(&Circle::new((*gdp, *sat), 5, color.filled()))?;
        let v_pos = if country == "Luxembourg" {
            VPos::Bottom
        } else {
            VPos::Center
        };
        let (x, y) = chart.backend_coord(&(gdp * 1.05, *sat));
        root.draw(&Text::new(
            country.to_string(),
            (x, y),
            bold(9.0).color(&color).pos(anchor(HPos::Left, v_pos)),
        ))?;
    }

    // dollar ticks along the bottom, satisfaction scores up the side
    for tick in [1_000.0, 2_000.0, 5_000.0, 10_000.0, 20_000.0, 50_000.0, 100_000.0] {
        let (x, y) = chart.backend_coord(&(tick, 1.0));
        root.draw(&Text::new(
            short_dollars(tick),
            (x, y + 8),
            regular(10.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Center, VPos::Top)),
        ))?;
    }
    for tick in 2..=8 {
        let (x, y) = chart.backend_coord(&(X_MIN, tick as f64));
        root.draw(&Text::new(
            tick.to_string(),
            (x - 8, y),
            regular(10.0)
                .color(&palette::TICK_GREY)
                .pos(anchor(HPos::Right, VPos::Center)),
        ))?;
    }

    // axis context in the corners instead of rotated axis titles
    let (x, y) = chart.backend_coord(&(X_MIN * 1.1, 1.2));
    root.draw(&Text::new(
        "GDP per capita (PPP, log scale) →",
        (x, y),
        regular(10.0)
            .color(&palette::FAINT_GREY)
            .pos(anchor(HPos::Left, VPos::Bottom)),
    ))?;
    let (x, y) = chart.backend_coord(&(X_MIN * 1.1, 8.4));
    root.draw(&Text::new(
        "↑ Life satisfaction (0-10)",
        (x, y),
        regular(10.0)
            .color(&palette::FAINT_GREY)
            .pos(anchor(HPos::Left, VPos::Top)),
    ))?;

    let trend_at_20k = slope * 20_000f64.ln() + intercept;
    let style = render_style(
        "callout",
        options.tier(),
        &StyleOverrides {
            arrow: Some(ArrowOverrides {
                curvature: Some(-0.15),
                shrink_start: Some(5.0),
                shrink_end: Some(2.0),
                ..Default::default()
            }),
            ..Default::default()
        },
    )?;
    annotate(
        &root,
        "People only report +2 life satisfaction beyond $20,000 GDP",
        chart.backend_coord(&(20_000.0, trend_at_20k + 0.1)),
        chart.backend_coord(&(1_500.0, 7.8)),
        &style,
    )?;

    title_block(
        &root,
        20,
        "Money buys happiness, but only up to a point",
        "GDP per capita vs. self-reported life satisfaction, 2023",
    )?;
    source_note(
        &root,
        "Source: Our World in Data / World Happiness Report 2024",
    )?;
    root.present()?;
    Ok(())
}
