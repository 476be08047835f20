use anyhow::anyhow;
use datastory_datasets::PovertyRow;
use datastory_style::palette;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::{anchor, bold, group_thousands, regular, sans, source_note, ChartOptions};
use datastory_style::presets::FontWeight;

/// The headline statistic rendered as oversized text: how many people
/// escaped extreme poverty per day between 1990 and 2015.
pub fn draw_poverty_big_number<'a, T>(
    backend: T,
    rows: &[PovertyRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let value_in = |year: i32| {
        rows.iter()
            .find(|row| row.year == year)
            .map(|row| row.in_extreme_poverty)
            .ok_or(anyhow!("poverty dataset is missing year {year}"))
    };
    let poverty_1990 = value_in(1990)?;
    let poverty_2015 = value_in(2015)?;
    let escaped = poverty_1990 - poverty_2015;
    let days = (2015 - 1990) as f64 * 365.25;
    let per_day = (escaped / days) as i64;

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let (width, height) = root.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);
    let centered = |h: f64| (width / 2, (height as f64 * h) as i32);

    root.draw(&Text::new(
        group_thousands(per_day),
        centered(0.42),
        bold(96.0)
            .color(&palette::POSITIVE)
            .pos(anchor(HPos::Center, VPos::Center)),
    ))?;
    root.draw(&Text::new(
        "people escaped extreme poverty every day",
        centered(0.62),
        regular(20.0)
            .color(&palette::NEUTRAL)
            .pos(anchor(HPos::Center, VPos::Center)),
    ))?;
    root.draw(&Text::new(
        "from 1990 to 2015",
        centered(0.72),
        regular(16.0)
            .color(&palette::FAINT_GREY)
            .pos(anchor(HPos::Center, VPos::Center)),
    ))?;
    root.draw(&Text::new(
        format!(
            "Total: {} million fewer people in extreme poverty",
            group_thousands((escaped / 1e6) as i64)
        ),
        centered(0.88),
        sans(13.0, FontWeight::Normal, true)
            .color(&palette::NEUTRAL)
            .pos(anchor(HPos::Center, VPos::Center)),
    ))?;

    source_note(&root, "Source: Our World in Data / World Bank PIP")?;
    root.present()?;
    Ok(())
}
