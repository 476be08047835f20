pub mod annotate;
pub mod bar;
pub mod big_number;
pub mod dual_line;
pub mod dumbbell;
pub mod heatmap;
pub mod histogram;
pub mod line;
pub mod scatter;
pub mod slope;
pub mod stacked;
pub mod ugly;

pub use annotate::annotate;
pub use bar::draw_co2_bar;
pub use big_number::draw_poverty_big_number;
pub use dual_line::draw_gender_gap_lines;
pub use dumbbell::draw_child_mortality_dumbbell;
pub use heatmap::draw_life_factors_heatmap;
pub use histogram::draw_gdp_histogram;
pub use line::draw_temperature_line;
pub use scatter::draw_happiness_scatter;
pub use slope::draw_renewables_slope;
pub use stacked::draw_energy_mix_bars;

use datastory_style::palette;
use datastory_style::presets::{FontWeight, SizeTier};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartOptions {
    /// Larger annotation presets for slides.
    pub presentation: bool,
}

impl ChartOptions {
    pub fn tier(&self) -> SizeTier {
        if self.presentation {
            SizeTier::Presentation
        } else {
            SizeTier::Notebook
        }
    }
}

pub(crate) fn sans(size: f64, weight: FontWeight, italic: bool) -> FontDesc<'static> {
    let style = match (weight, italic) {
        (FontWeight::Bold, _) => FontStyle::Bold,
        (FontWeight::Normal, true) => FontStyle::Italic,
        (FontWeight::Normal, false) => FontStyle::Normal,
    };
    FontDesc::new(FontFamily::SansSerif, size, style)
}

pub(crate) fn bold(size: f64) -> FontDesc<'static> {
    sans(size, FontWeight::Bold, false)
}

pub(crate) fn regular(size: f64) -> FontDesc<'static> {
    sans(size, FontWeight::Normal, false)
}

pub(crate) fn anchor(h: HPos, v: VPos) -> Pos {
    Pos::new(h, v)
}

/// Insight title and grey subtitle, drawn above the plot.
pub fn title_block<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    x: i32,
    title: &str,
    subtitle: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.draw(&Text::new(
        title.to_string(),
        (x, 16),
        bold(15.0).color(&palette::INK),
    ))?;
    root.draw(&Text::new(
        subtitle.to_string(),
        (x, 40),
        regular(12.0).color(&palette::SUBTITLE_GREY),
    ))?;
    Ok(())
}

/// Three-tier title: bold insight, colored stat line, grey metadata.
pub fn title_block_with_insight<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    x: i32,
    title: &str,
    insight: &str,
    subtitle: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.draw(&Text::new(
        title.to_string(),
        (x, 12),
        bold(15.0).color(&palette::INK),
    ))?;
    root.draw(&Text::new(
        insight.to_string(),
        (x, 36),
        bold(12.0).color(&palette::PRIMARY),
    ))?;
    root.draw(&Text::new(
        subtitle.to_string(),
        (x, 56),
        regular(12.0).color(&palette::SUBTITLE_GREY),
    ))?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Short bold context text tucked into a corner of the drawing area.
pub fn corner_text<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    corner: Corner,
    text: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (width, height) = area.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);
    let inset_x = (width as f64 * 0.02) as i32;
    let inset_y = (height as f64 * 0.02) as i32;
    let (x, y, h, v) = match corner {
        Corner::UpperLeft => (inset_x, inset_y, HPos::Left, VPos::Top),
        Corner::UpperRight => (width - inset_x, inset_y, HPos::Right, VPos::Top),
        Corner::LowerLeft => (inset_x, height - inset_y, HPos::Left, VPos::Bottom),
        Corner::LowerRight => (width - inset_x, height - inset_y, HPos::Right, VPos::Bottom),
    };
    area.draw(&Text::new(
        text.to_string(),
        (x, y),
        bold(10.0).color(&palette::INK).pos(anchor(h, v)),
    ))?;
    Ok(())
}

/// Small italic source footnote at the bottom left edge of the image.
pub fn source_note<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    text: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (_, height) = root.dim_in_pixel();
    root.draw(&Text::new(
        text.to_string(),
        (20, height as i32 - 20),
        sans(9.0, FontWeight::Normal, true).color(&palette::SUBTITLE_GREY),
    ))?;
    Ok(())
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Compact dollar ticks for wide money axes.
pub fn short_dollars(value: f64) -> String {
    match value {
        v if v >= 1_000_000.0 => format!("${:.0}M", v / 1_000_000.0),
        v if v >= 1_000.0 => format!("${:.0}K", v / 1_000.0),
        v => format!("${v:.0}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(47_000), "47,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-1000), "-1,000");
    }

    #[test]
    fn dollar_ticks() {
        assert_eq!(short_dollars(800.0), "$800");
        assert_eq!(short_dollars(20_000.0), "$20K");
        assert_eq!(short_dollars(1_500_000.0), "$2M");
    }
}
