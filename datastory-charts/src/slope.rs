use anyhow::anyhow;
use datastory_datasets::stats::nudge_apart;
use datastory_datasets::RenewablesRow;
use datastory_style::palette;
use datastory_style::presets::{ArrowOverrides, FontWeight, StyleOverrides};
use datastory_style::render_style;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{anchor, annotate, bold, sans, source_note, ChartOptions};

const COUNTRIES: [&str; 10] = [
    "Denmark",
    "United Kingdom",
    "Germany",
    "Australia",
    "Spain",
    "United States",
    "China",
    "Japan",
    "South Korea",
    "Russia",
];

const FROM_YEAR: i32 = 2010;
const TO_YEAR: i32 = 2023;

struct Slope<'a> {
    country: &'a str,
    from: f64,
    to: f64,
}

impl Slope<'_> {
    fn emphasis(&self) -> (RGBColor, u32, f64) {
        match self.country {
            "Denmark" => (palette::PRIMARY, 3, 1.0),
            "Russia" => (palette::NEGATIVE, 2, 0.8),
            _ => (palette::NEUTRAL, 2, 0.4),
        }
    }
}

/// Slope chart of the renewable electricity share, 2010 against 2023.
pub fn draw_renewables_slope<'a, T>(
    backend: T,
    rows: &[RenewablesRow],
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let share_of = |country: &str, year: i32| {
        rows.iter()
            .find(|row| row.entity == country && row.year == year)
            .map(|row| row.share)
    };
    let mut slopes: Vec<Slope> = COUNTRIES
        .iter()
        .filter_map(|country| {
            Some(Slope {
                country,
                from: share_of(country, FROM_YEAR)?,
                to: share_of(country, TO_YEAR)?,
            })
        })
        .collect();
    if slopes.is_empty() {
        Err(anyhow!("no countries with both {FROM_YEAR} and {TO_YEAR}"))?;
    }
    if slopes.len() < COUNTRIES.len() {
        log::warn!(
            "{} of {} selected countries lack values for both years",
            COUNTRIES.len() - slopes.len(),
            COUNTRIES.len()
        );
    }
    slopes.sort_by(|a, b| (b.to - b.from).total_cmp(&(a.to - a.from)));

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_top(60)
        .margin_bottom(40)
        .build_cartesian_2d(-0.35f64..1.35f64, -5f64..110f64)?;

    for slope in &slopes {
        let (color, width, alpha) = slope.emphasis();
        chart.plotting_area().draw(&PathElement::new(
            vec![(0.0, slope.from), (1.0, slope.to)],
            color.mix(alpha).stroke_width(width),
        ))?;
    }

    // collision-nudged country labels on both ends
    let y_span = slopes.iter().map(|s| s.to.max(s.from)).fold(0.0, f64::max)
        - slopes.iter().map(|s| s.from.min(s.to)).fold(f64::MAX, f64::min);
    let min_gap = y_span * 0.03;
    let mut left_ys: Vec<f64> = slopes.iter().map(|s| s.from).collect();
    let mut right_ys: Vec<f64> = slopes.iter().map(|s| s.to).collect();
    nudge_apart(&mut left_ys, min_gap);
    nudge_apart(&mut right_ys, min_gap);

    for (slope, (left_y, right_y)) in slopes.iter().zip(left_ys.iter().zip(&right_ys)) {
        let (color, _, alpha) = slope.emphasis();
        let weight = if alpha >= 0.8 {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        };
        let label_color = color.mix(alpha.max(0.7));
        let (x, y) = chart.backend_coord(&(-0.03, *left_y));
        root.draw(&Text::new(
            format!("{}  {:.0}%", slope.country, slope.from),
            (x, y),
            sans(9.0, weight, false)
                .color(&label_color)
                .pos(anchor(HPos::Right, VPos::Center)),
        ))?;
        let (x, y) = chart.backend_coord(&(1.03, *right_y));
        root.draw(&Text::new(
            format!("{:.0}%  {}", slope.to, slope.country),
            (x, y),
            sans(9.0, weight, false)
                .color(&label_color)
                .pos(anchor(HPos::Left, VPos::Center)),
        ))?;
    }

    // column headers
    for (x_pos, year) in [(0.0, FROM_YEAR), (1.0, TO_YEAR)] {
        let (x, y) = chart.backend_coord(&(x_pos, 105.0));
        root.draw(&Text::new(
            year.to_string(),
            (x, y),
            bold(12.0)
                .color(&RGBColor(0x55, 0x55, 0x55))
                .pos(anchor(HPos::Center, VPos::Center)),
        ))?;
    }

    // Denmark's story carries the chart
    if let Some(denmark) = slopes.iter().find(|s| s.country == "Denmark") {
        let gain = denmark.to - denmark.from;
        let on_line = denmark.from + 0.35 * (denmark.to - denmark.from);
        let style = render_style(
            "callout",
            options.tier(),
            &StyleOverrides {
                arrow: Some(ArrowOverrides {
                    curvature: Some(0.2),
                    shrink_start: Some(5.0),
                    shrink_end: Some(3.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )?;
        annotate(
            &root,
            &format!("{gain:.0}% increase in only 13 years"),
            chart.backend_coord(&(0.35, on_line)),
            chart.backend_coord(&(0.12, 78.0)),
            &style,
        )?;
    }

    let (width, _) = root.dim_in_pixel();
    root.draw(&Text::new(
        "Denmark tripled its clean energy while Russia barely moved",
        (width as i32 / 2, 16),
        bold(15.0)
            .color(&palette::INK)
            .pos(anchor(HPos::Center, VPos::Top)),
    ))?;
    root.draw(&Text::new(
        "Share of electricity from renewable sources (%)",
        (width as i32 / 2, 40),
        sans(12.0, FontWeight::Normal, false)
            .color(&palette::SUBTITLE_GREY)
            .pos(anchor(HPos::Center, VPos::Top)),
    ))?;
    source_note(
        &root,
        "Source: Our World in Data / Ember Global Electricity Review 2024",
    )?;
    root.present()?;
    Ok(())
}
