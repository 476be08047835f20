use plotters::style::RGBColor;

use crate::error::StyleError;
use crate::palette;

/// A continuous gradient built from a list of anchor colors, sampled with
/// piecewise linear interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: String,
    anchors: Vec<RGBColor>,
}

pub const COLORMAP_NAMES: [&str; 7] = [
    "story",
    "story_r",
    "story_extended",
    "story_diverging",
    "story_diverging_r",
    "story_diverging_teal",
    "story_diverging_green",
];

impl Colormap {
    pub fn new(name: impl Into<String>, anchors: Vec<RGBColor>) -> Colormap {
        assert!(anchors.len() >= 2, "a colormap needs at least two anchors");
        Colormap {
            name: name.into(),
            anchors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Samples the gradient at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> RGBColor {
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (self.anchors.len() - 1) as f64;
        let index = (scaled.floor() as usize).min(self.anchors.len() - 2);
        let frac = scaled - index as f64;
        lerp(self.anchors[index], self.anchors[index + 1], frac)
    }

    /// Normalizes `value` against `[vmin, vmax]` and samples. A degenerate
    /// range samples the midpoint.
    pub fn color_at(&self, value: f64, vmin: f64, vmax: f64) -> RGBColor {
        if vmax <= vmin {
            return self.sample(0.5);
        }
        self.sample((value - vmin) / (vmax - vmin))
    }

    /// `n` evenly spaced samples across the gradient.
    pub fn colors(&self, n: usize) -> Vec<RGBColor> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(0.5)],
            _ => (0..n)
                .map(|i| self.sample(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    pub fn reversed(&self) -> Colormap {
        Colormap {
            name: format!("{}_r", self.name),
            anchors: self.anchors.iter().rev().copied().collect(),
        }
    }
}

fn lerp(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    RGBColor(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// Lowercase `#rrggbb` form of a color.
pub fn hex(color: &RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

/// Sequential grey to purple, the default for zero-to-max data.
pub fn story() -> Colormap {
    Colormap::new(
        "story",
        vec![
            RGBColor(0xF0, 0xF0, 0xF0),
            RGBColor(0xD8, 0xCD, 0xE3),
            palette::PURPLE_LIGHT,
            RGBColor(0x8B, 0x5C, 0xAB),
            palette::PRIMARY,
        ],
    )
}

/// Sequential with extra range past the primary purple at the high end.
pub fn story_extended() -> Colormap {
    Colormap::new(
        "story_extended",
        vec![
            RGBColor(0xF5, 0xF5, 0xF5),
            RGBColor(0xE0, 0xD4, 0xEB),
            RGBColor(0xC4, 0xA8, 0xD8),
            RGBColor(0xA7, 0x7C, 0xC4),
            palette::PRIMARY,
            RGBColor(0x47, 0x1D, 0x75),
            RGBColor(0x2E, 0x11, 0x50),
        ],
    )
}

/// Diverging orange to near-white to purple for data with a meaningful
/// center, correlations and change-from-baseline.
pub fn story_diverging() -> Colormap {
    Colormap::new(
        "story_diverging",
        vec![
            palette::NEGATIVE,
            RGBColor(0xE5, 0xA9, 0x7A),
            RGBColor(0xFA, 0xFA, 0xFA),
            palette::PURPLE_LIGHT,
            palette::PRIMARY,
        ],
    )
}

/// Diverging teal to purple when orange does not fit semantically.
pub fn story_diverging_teal() -> Colormap {
    Colormap::new(
        "story_diverging_teal",
        vec![
            palette::SECONDARY,
            RGBColor(0x6A, 0x9B, 0xA8),
            RGBColor(0xFA, 0xFA, 0xFA),
            palette::PURPLE_LIGHT,
            palette::PRIMARY,
        ],
    )
}

/// Diverging green to purple.
pub fn story_diverging_green() -> Colormap {
    Colormap::new(
        "story_diverging_green",
        vec![
            palette::POSITIVE,
            RGBColor(0x7D, 0xC4, 0xA8),
            RGBColor(0xFA, 0xFA, 0xFA),
            palette::PURPLE_LIGHT,
            palette::PRIMARY,
        ],
    )
}

/// Looks up a built-in colormap by name.
pub fn colormap(name: &str) -> Result<Colormap, StyleError> {
    match name {
        "story" => Ok(story()),
        "story_r" => Ok(story().reversed()),
        "story_extended" => Ok(story_extended()),
        "story_diverging" => Ok(story_diverging()),
        "story_diverging_r" => Ok(story_diverging().reversed()),
        "story_diverging_teal" => Ok(story_diverging_teal()),
        "story_diverging_green" => Ok(story_diverging_green()),
        _ => Err(StyleError::UnknownColormap {
            name: name.to_string(),
            valid: COLORMAP_NAMES.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_the_anchor_colors() {
        let map = story();
        assert_eq!(map.sample(0.0), RGBColor(0xF0, 0xF0, 0xF0));
        assert_eq!(map.sample(1.0), palette::PRIMARY);
        // out of range clamps
        assert_eq!(map.sample(-3.0), map.sample(0.0));
        assert_eq!(map.sample(7.0), map.sample(1.0));
    }

    #[test]
    fn midpoint_of_diverging_is_near_white() {
        let mid = story_diverging().sample(0.5);
        assert_eq!(mid, RGBColor(0xFA, 0xFA, 0xFA));
    }

    #[test]
    fn interpolation_is_channelwise_linear() {
        let map = Colormap::new("two", vec![RGBColor(0, 0, 0), RGBColor(200, 100, 50)]);
        assert_eq!(map.sample(0.5), RGBColor(100, 50, 25));
    }

    #[test]
    fn color_at_normalizes_and_survives_degenerate_ranges() {
        let map = story();
        assert_eq!(map.color_at(-1.0, -1.0, 1.0), map.sample(0.0));
        assert_eq!(map.color_at(0.0, -1.0, 1.0), map.sample(0.5));
        assert_eq!(map.color_at(5.0, 5.0, 5.0), map.sample(0.5));
    }

    #[test]
    fn colors_edge_counts() {
        let map = story();
        assert!(map.colors(0).is_empty());
        assert_eq!(map.colors(1), vec![map.sample(0.5)]);
        let five = map.colors(5);
        assert_eq!(five.len(), 5);
        assert_eq!(five[0], map.sample(0.0));
        assert_eq!(five[4], map.sample(1.0));
    }

    #[test]
    fn reversed_flips_the_ends() {
        let map = story();
        let rev = map.reversed();
        assert_eq!(rev.name(), "story_r");
        assert_eq!(rev.sample(0.0), map.sample(1.0));
        assert_eq!(rev.sample(1.0), map.sample(0.0));
    }

    #[test]
    fn registry_covers_every_advertised_name() {
        for name in COLORMAP_NAMES {
            assert_eq!(colormap(name).unwrap().name(), name);
        }
        let err = colormap("viridis").unwrap_err();
        assert!(err.to_string().contains("story_diverging"));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(hex(&palette::PRIMARY), "#5c2593");
        assert_eq!(hex(&RGBColor(0, 15, 255)), "#000fff");
    }
}
