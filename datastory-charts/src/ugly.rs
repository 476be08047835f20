//! Default-styled counterparts of every chart: full mesh, stock colors,
//! captions and legend boxes. Kept for side-by-side comparison with the
//! styled output.

use anyhow::anyhow;
use datastory_datasets::stats::{correlation_matrix, histogram};
use datastory_datasets::{
    is_aggregate_code, ChildMortalityRow, Co2Row, EnergyMixRow, GdpRow, HappinessRow,
    LifeExpectancyGenderRow, LifeFactorsRow, PovertyRow, RenewablesRow, TemperatureRow,
    AGGREGATE_ENTITIES, LIFE_FACTOR_LABELS,
};
use datastory_style::colormaps::Colormap;
use itertools::Itertools;
use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::ChartOptions;

fn caption_font() -> FontDesc<'static> {
    ("sans-serif", 20).into_font()
}

/// A plain yearly bar chart instead of the big number display.
pub fn draw_poverty_bars_ugly<'a, T>(
    backend: T,
    rows: &[PovertyRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let (first, last) = rows
        .iter()
        .map(|row| row.year)
        .minmax()
        .into_option()
        .ok_or(anyhow!("empty poverty dataset"))?;
    let max = rows
        .iter()
        .map(|row| row.in_extreme_poverty / 1e9)
        .fold(0.0, f64::max);

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Number of People in Extreme Poverty", caption_font())
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(first as f64 - 1.0..last as f64 + 1.0, 0f64..max * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("People (billions)")
        .draw()?;
    chart
        .draw_series(rows.iter().map(|row| {
            Rectangle::new(
                [
                    (row.year as f64 - 0.4, 0.0),
                    (row.year as f64 + 0.4, row.in_extreme_poverty / 1e9),
                ],
                BLUE.filled(),
            )
        }))?
        .label("Extreme poverty")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

const CO2_COUNTRIES: [&str; 15] = [
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

/// Vertical bars with rotated labels instead of the sorted barh story.
pub fn draw_co2_bar_ugly<'a, T>(
    backend: T,
    rows: &[Co2Row],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let mut subset: Vec<&Co2Row> = rows
        .iter()
        .filter(|row| row.year == 2023 && CO2_COUNTRIES.contains(&row.entity.as_str()))
        .collect();
    subset.sort_by(|a, b| b.tonnes_per_capita.total_cmp(&a.tonnes_per_capita));
    if subset.is_empty() {
        Err(anyhow!("no 2023 rows for the selected countries"))?;
    }
    let max = subset[0].tonnes_per_capita;

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("CO2 Emissions Per Capita by Country", caption_font())
        .x_label_area_size(140)
        .y_label_area_size(45)
        .build_cartesian_2d(-0.5f64..subset.len() as f64 - 0.5, 0f64..max * 1.1)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Tonnes CO2 per capita")
        .draw()?;
    chart
        .draw_series(subset.iter().enumerate().map(|(i, row)| {
            Rectangle::new(
                [
                    (i as f64 - 0.4, 0.0),
                    (i as f64 + 0.4, row.tonnes_per_capita),
                ],
                BLUE.filled(),
            )
        }))?
        .label("CO2 per capita")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));
    for (i, row) in subset.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(i as f64, 0.0));
        root.draw(&Text::new(
            row.entity.clone(),
            (x, y + 6),
            ("sans-serif", 10)
                .into_font()
                .transform(FontTransform::Rotate90),
        ))?;
    }
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

/// One default line with markers and a flat confidence fill.
pub fn draw_temperature_line_ugly<'a, T>(
    backend: T,
    rows: &[TemperatureRow],
    _options: &ChartOptions,
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
        (Some(first), Some(last)) => (first.year, last.year),
        _ => Err(anyhow!("no World rows"))?,
    };
    let y_min = world.iter().map(|r| r.lower).fold(f64::INFINITY, f64::min);
    let y_max = world
        .iter()
        .map(|r| r.upper)
        .fold(f64::NEG_INFINITY, f64::max);

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Global Temperature Anomaly Over Time", caption_font())
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(first as f64..last as f64, y_min - 0.1..y_max + 0.1)?;
    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Temperature Anomaly (C)")
        .draw()?;
    let band: Vec<(f64, f64)> = world
        .iter()
        .map(|row| (row.year as f64, row.upper))
        .chain(world.iter().rev().map(|row| (row.year as f64, row.lower)))
        .collect();
    chart
        .plotting_area()
        .draw(&Polygon::new(band, BLUE.mix(0.3).filled()))?;
    chart
        .draw_series(
            LineSeries::new(
                world.iter().map(|row| (row.year as f64, row.average)),
                BLUE,
            )
            .point_size(2),
        )?
        .label("Average")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

const RENEWABLES_COUNTRIES: [&str; 10] = [
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

/// Grouped 2010/2023 bars instead of the slope chart.
pub fn draw_renewables_slope_ugly<'a, T>(
    backend: T,
    rows: &[RenewablesRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let share_of = |country: &str, year: i32| {
        rows.iter()
            .find(|row| row.entity == country && row.year == year)
            .map(|row| row.share)
    };
    let data: Vec<(&str, f64, f64)> = RENEWABLES_COUNTRIES
        .iter()
        .filter_map(|country| Some((*country, share_of(country, 2010)?, share_of(country, 2023)?)))
        .collect();
    if data.is_empty() {
        Err(anyhow!("no countries with both years"))?;
    }

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Renewable Energy Share by Country", caption_font())
        .x_label_area_size(110)
        .y_label_area_size(45)
        .build_cartesian_2d(-0.5f64..data.len() as f64 - 0.5, 0f64..100f64)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("% Share")
        .draw()?;
    chart
        .draw_series(data.iter().enumerate().map(|(i, (_, y2010, _))| {
            Rectangle::new(
                [(i as f64 - 0.35, 0.0), (i as f64, *y2010)],
                BLUE.filled(),
            )
        }))?
        .label("2010")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));
    chart
        .draw_series(data.iter().enumerate().map(|(i, (_, _, y2023))| {
            Rectangle::new(
                [(i as f64, 0.0), (i as f64 + 0.35, *y2023)],
                RED.filled(),
            )
        }))?
        .label("2023")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], RED.filled()));
    for (i, (country, _, _)) in data.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(i as f64, 0.0));
        root.draw(&Text::new(
            country.to_string(),
            (x, y + 6),
            ("sans-serif", 10)
                .into_font()
                .transform(FontTransform::Rotate90),
        ))?;
    }
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

/// Default scatter with a grid and a legend box.
pub fn draw_happiness_scatter_ugly<'a, T>(
    backend: T,
    rows: &[HappinessRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let data: Vec<(f64, f64)> = rows
        .iter()
        .filter(|row| {
            row.year == 2023
                && row.code.is_some()
                && !AGGREGATE_ENTITIES.contains(&row.entity.as_str())
        })
        .filter_map(|row| Some((row.gdp_per_capita?, row.satisfaction?)))
        .collect();
    if data.is_empty() {
        Err(anyhow!("no usable rows"))?;
    }
    let x_max = data.iter().map(|(gdp, _)| *gdp).fold(0.0, f64::max);

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("GDP Per Capita vs Life Satisfaction", caption_font())
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(0f64..x_max * 1.05, 0f64..10f64)?;
    chart
        .configure_mesh()
        .x_desc("GDP Per Capita (PPP)")
        .y_desc("Life Satisfaction Score")
        .draw()?;
    chart
        .draw_series(
            data.iter()
                .map(|(gdp, sat)| Circle::new((*gdp, *sat), 4, BLUE.filled())),
        )?
        .label("Countries")
        .legend(|(x, y)| Circle::new((x + 5, y), 4, BLUE.filled()));
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

/// The default colormap most libraries would reach for.
fn viridis() -> Colormap {
    Colormap::new(
        "viridis",
        vec![
            RGBColor(0x44, 0x01, 0x54),
            RGBColor(0x3B, 0x52, 0x8B),
            RGBColor(0x21, 0x91, 0x8C),
            RGBColor(0x5E, 0xC9, 0x62),
            RGBColor(0xFD, 0xE7, 0x25),
        ],
    )
}

/// Correlation heatmap with the stock colormap and cramped labels.
pub fn draw_life_factors_heatmap_ugly<'a, T>(
    backend: T,
    rows: &[LifeFactorsRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let complete: Vec<[f64; 11]> = rows.iter().filter_map(LifeFactorsRow::complete).collect();
    if complete.len() < 3 {
        Err(anyhow!("too few complete rows to correlate"))?;
    }
    let columns: Vec<Vec<f64>> = (0..11)
        .map(|factor| complete.iter().map(|row| row[factor]).collect())
        .collect();
    let corr = correlation_matrix(&columns);
    let cmap = viridis();
    let n = corr.len();

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .margin_right(80)
        .caption("Correlation Matrix - Life Expectancy Factors", caption_font())
        .x_label_area_size(110)
        .y_label_area_size(110)
        .build_cartesian_2d(0f64..n as f64, 0f64..n as f64)?;

    for (i, row) in corr.iter().enumerate() {
        let y_low = (n - 1 - i) as f64;
        for (j, &r) in row.iter().enumerate() {
            chart.plotting_area().draw(&Rectangle::new(
                [(j as f64, y_low), (j as f64 + 1.0, y_low + 1.0)],
                cmap.color_at(r, -1.0, 1.0).filled(),
            ))?;
        }
    }
    for (i, label) in LIFE_FACTOR_LABELS.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(0.0, (n - 1 - i) as f64 + 0.5));
        root.draw(&Text::new(
            label.to_string(),
            (x - 6, y - 4),
            ("sans-serif", 9)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        ))?;
        let (x, y) = chart.backend_coord(&(i as f64 + 0.5, 0.0));
        root.draw(&Text::new(
            label.to_string(),
            (x - 4, y + 6),
            ("sans-serif", 9)
                .into_font()
                .transform(FontTransform::Rotate90),
        ))?;
    }
    // stock colorbar
    let (right_x, top_y) = chart.backend_coord(&(n as f64, n as f64));
    let (_, bottom_y) = chart.backend_coord(&(n as f64, 0.0));
    let span = bottom_y - top_y;
    for step in 0..100 {
        let y0 = top_y + span * step / 100;
        let y1 = top_y + span * (step + 1) / 100;
        let value = 1.0 - 2.0 * step as f64 / 99.0;
        root.draw(&Rectangle::new(
            [(right_x + 20, y0), (right_x + 36, y1)],
            cmap.color_at(value, -1.0, 1.0).filled(),
        ))?;
    }
    root.present()?;
    Ok(())
}

/// Two default lines with markers and a legend box.
pub fn draw_gender_gap_lines_ugly<'a, T>(
    backend: T,
    rows: &[LifeExpectancyGenderRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let russia: Vec<&LifeExpectancyGenderRow> = rows
        .iter()
        .filter(|row| row.entity == "Russia")
        .sorted_by_key(|row| row.year)
        .collect();
    let (first, last) = match (russia.first(), russia.last()) {
        (Some(first), Some(last)) => (first.year, last.year),
        _ => Err(anyhow!("no rows for Russia"))?,
    };

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Life Expectancy in Russia by Gender", caption_font())
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(first as f64..last as f64, 40f64..90f64)?;
    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Life Expectancy (years)")
        .draw()?;
    chart
        .draw_series(
            LineSeries::new(
                russia.iter().map(|row| (row.year as f64, row.women)),
                BLUE,
            )
            .point_size(3),
        )?
        .label("Women")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));
    chart
        .draw_series(
            LineSeries::new(russia.iter().map(|row| (row.year as f64, row.men)), RED)
                .point_size(3),
        )?
        .label("Men")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED));
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

const ENERGY_COUNTRIES: [&str; 12] = [
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

/// Seven-source stacked bars in stock rainbow colors, legend and all.
pub fn draw_energy_mix_bars_ugly<'a, T>(
    backend: T,
    rows: &[EnergyMixRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let subset: Vec<&EnergyMixRow> = rows
        .iter()
        .filter(|row| row.year == 2023 && ENERGY_COUNTRIES.contains(&row.country.as_str()))
        .collect();
    if subset.is_empty() {
        Err(anyhow!("no 2023 rows for the selected countries"))?;
    }
    let count = subset.len();

    let sources: [(&str, fn(&EnergyMixRow) -> f64, RGBColor); 7] = [
        ("Coal", |r| r.coal_share_elec.unwrap_or(0.0), BLUE),
        ("Gas", |r| r.gas_share_elec.unwrap_or(0.0), ORANGE),
        ("Oil", |r| r.oil_share_elec.unwrap_or(0.0), GREEN),
        ("Nuclear", |r| r.nuclear_share_elec.unwrap_or(0.0), RED),
        ("Hydro", |r| r.hydro_share_elec.unwrap_or(0.0), MAGENTA),
        ("Solar", |r| r.solar_share_elec.unwrap_or(0.0), CYAN),
        ("Wind", |r| r.wind_share_elec.unwrap_or(0.0), BLACK),
    ];

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Electricity Mix by Country (2023)", caption_font())
        .x_label_area_size(35)
        .y_label_area_size(110)
        .build_cartesian_2d(0f64..100f64, -0.5f64..count as f64 - 0.5)?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc("Share (%)")
        .draw()?;

    let mut lefts = vec![0.0f64; count];
    for (name, share, color) in sources {
        let starts = lefts.clone();
        chart
            .draw_series(subset.iter().enumerate().map(|(i, row)| {
                Rectangle::new(
                    [
                        (starts[i], i as f64 - 0.3),
                        ((starts[i] + share(row)).min(100.0), i as f64 + 0.3),
                    ],
                    color.filled(),
                )
            }))?
            .label(name)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
        for (i, row) in subset.iter().enumerate() {
            lefts[i] += share(row);
        }
    }
    for (i, row) in subset.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(0.0, i as f64));
        root.draw(&Text::new(
            row.country.clone(),
            (x - 6, y - 5),
            ("sans-serif", 10)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        ))?;
    }
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

/// Default blue histogram with a grid.
pub fn draw_gdp_histogram_ugly<'a, T>(
    backend: T,
    rows: &[GdpRow],
    _options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let values: Vec<f64> = rows
        .iter()
        .filter(|row| row.year == 2023)
        .filter(|row| {
            row.code
                .as_deref()
                .is_some_and(|code| !is_aggregate_code(code))
        })
        .filter_map(|row| row.gdp_per_capita)
        .collect();
    if values.is_empty() {
        Err(anyhow!("no usable 2023 GDP rows"))?;
    }
    let hist = histogram(&values, 0.0, 5_000.0, 25);
    let max_count = *hist.counts.iter().max().unwrap_or(&0) as f64;

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Distribution of GDP Per Capita (2023)", caption_font())
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(0f64..125_000f64, 0f64..max_count * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("GDP Per Capita (PPP)")
        .y_desc("Number of Countries")
        .draw()?;
    chart
        .draw_series(hist.counts.iter().enumerate().filter_map(|(bin, &count)| {
            (count > 0).then(|| {
                Rectangle::new(
                    [
                        (hist.edges[bin], 0.0),
                        (hist.edges[bin + 1], count as f64),
                    ],
                    BLUE.filled(),
                )
            })
        }))?
        .label("Countries")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

const MORTALITY_COUNTRIES: [&str; 12] = [
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

/// Grouped 1990/2023 bars instead of the dumbbell chart.
pub fn draw_child_mortality_dumbbell_ugly<'a, T>(
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
    let data: Vec<(&str, f64, f64)> = MORTALITY_COUNTRIES
        .iter()
        .filter_map(|country| Some((*country, rate_of(country, 1990)?, rate_of(country, 2023)?)))
        .collect();
    if data.is_empty() {
        Err(anyhow!("no countries with both years"))?;
    }
    let max = data.iter().map(|(_, y1990, _)| *y1990).fold(0.0, f64::max);

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Child Mortality Rate by Country", caption_font())
        .x_label_area_size(100)
        .y_label_area_size(45)
        .build_cartesian_2d(-0.5f64..data.len() as f64 - 0.5, 0f64..max * 1.1)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Deaths per 100 live births")
        .draw()?;
    chart
        .draw_series(data.iter().enumerate().map(|(i, (_, y1990, _))| {
            Rectangle::new(
                [(i as f64 - 0.35, 0.0), (i as f64, *y1990)],
                BLUE.filled(),
            )
        }))?
        .label("1990")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));
    chart
        .draw_series(data.iter().enumerate().map(|(i, (_, _, y2023))| {
            Rectangle::new(
                [(i as f64, 0.0), (i as f64 + 0.35, *y2023)],
                RED.filled(),
            )
        }))?
        .label("2023")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], RED.filled()));
    for (i, (country, _, _)) in data.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(i as f64, 0.0));
        root.draw(&Text::new(
            country.to_string(),
            (x, y + 6),
            ("sans-serif", 10)
                .into_font()
                .transform(FontTransform::Rotate90),
        ))?;
    }
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}
