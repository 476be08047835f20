use plotters::style::RGBColor;

use crate::error::StyleError;
use crate::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Arrow head shapes, after matplotlib's `-`, `->`, `-|>` and `<->`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHead {
    Plain,
    Open,
    Filled,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    pub head: ArrowHead,
    pub color: RGBColor,
    pub width: f64,
    /// Signed fraction of the chord length used as the control point
    /// offset, matching `connectionstyle='arc3,rad=…'`.
    pub curvature: f64,
    /// Gap in pixels between the text anchor and the tail.
    pub shrink_start: f64,
    /// Gap in pixels between the head and the annotated point.
    pub shrink_end: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle {
            head: ArrowHead::Open,
            color: palette::NEUTRAL,
            width: 1.0,
            curvature: 0.0,
            shrink_start: 2.0,
            shrink_end: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub fill: RGBColor,
    pub edge: Option<RGBColor>,
    pub edge_width: f64,
    /// Padding around the text as a fraction of the font size.
    pub padding: f64,
}

impl Default for BoxStyle {
    fn default() -> Self {
        BoxStyle {
            fill: plotters::style::colors::WHITE,
            edge: None,
            edge_width: 1.0,
            padding: 0.3,
        }
    }
}

/// A fully resolved annotation style, ready to draw with.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationStyle {
    pub font_size: f64,
    pub weight: FontWeight,
    pub italic: bool,
    pub color: RGBColor,
    pub arrow: Option<ArrowStyle>,
    pub text_box: Option<BoxStyle>,
}

/// Notebook sizing is the default; presentation bumps fonts and arrows up
/// so the same annotations read from the back of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeTier {
    #[default]
    Notebook,
    Presentation,
}

/// Caller-supplied partial style. Any field left `None` keeps the preset
/// value; the nested arrow and box groups merge key by key.
#[derive(Debug, Clone, Default)]
pub struct StyleOverrides {
    pub font_size: Option<f64>,
    pub weight: Option<FontWeight>,
    pub italic: Option<bool>,
    pub color: Option<RGBColor>,
    pub arrow: Option<ArrowOverrides>,
    pub text_box: Option<BoxOverrides>,
}

#[derive(Debug, Clone, Default)]
pub struct ArrowOverrides {
    pub head: Option<ArrowHead>,
    pub color: Option<RGBColor>,
    pub width: Option<f64>,
    pub curvature: Option<f64>,
    pub shrink_start: Option<f64>,
    pub shrink_end: Option<f64>,
}

impl ArrowOverrides {
    fn apply_to(&self, base: ArrowStyle) -> ArrowStyle {
        ArrowStyle {
            head: self.head.unwrap_or(base.head),
            color: self.color.unwrap_or(base.color),
            width: self.width.unwrap_or(base.width),
            curvature: self.curvature.unwrap_or(base.curvature),
            shrink_start: self.shrink_start.unwrap_or(base.shrink_start),
            shrink_end: self.shrink_end.unwrap_or(base.shrink_end),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoxOverrides {
    pub fill: Option<RGBColor>,
    pub edge: Option<Option<RGBColor>>,
    pub edge_width: Option<f64>,
    pub padding: Option<f64>,
}

impl BoxOverrides {
    fn apply_to(&self, base: BoxStyle) -> BoxStyle {
        BoxStyle {
            fill: self.fill.unwrap_or(base.fill),
            edge: self.edge.unwrap_or(base.edge),
            edge_width: self.edge_width.unwrap_or(base.edge_width),
            padding: self.padding.unwrap_or(base.padding),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Callout,
    CalloutBox,
    Subtle,
    Label,
    Highlight,
    Trend,
    Positive,
    Negative,
    Neutral,
    Accent,
}

impl Preset {
    pub const ALL: [Preset; 10] = [
        Preset::Callout,
        Preset::CalloutBox,
        Preset::Subtle,
        Preset::Label,
        Preset::Highlight,
        Preset::Trend,
        Preset::Positive,
        Preset::Negative,
        Preset::Neutral,
        Preset::Accent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Callout => "callout",
            Preset::CalloutBox => "callout_box",
            Preset::Subtle => "subtle",
            Preset::Label => "label",
            Preset::Highlight => "highlight",
            Preset::Trend => "trend",
            Preset::Positive => "positive",
            Preset::Negative => "negative",
            Preset::Neutral => "neutral",
            Preset::Accent => "accent",
        }
    }

    pub fn from_name(name: &str) -> Result<Preset, StyleError> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| StyleError::UnknownPreset {
                name: name.to_string(),
                valid: Preset::ALL.iter().map(|preset| preset.name()).collect(),
            })
    }

    /// The base style of this preset at the given sizing tier.
    pub fn style(&self, tier: SizeTier) -> AnnotationStyle {
        let presentation = tier == SizeTier::Presentation;
        // (notebook, presentation) value pairs
        let pick = |notebook: f64, larger: f64| if presentation { larger } else { notebook };
        match self {
            Preset::Callout => AnnotationStyle {
                font_size: pick(11.0, 14.0),
                weight: FontWeight::Bold,
                italic: false,
                color: palette::PRIMARY,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Open,
                    color: palette::PRIMARY,
                    width: pick(2.0, 3.0),
                    curvature: 0.2,
                    shrink_start: 2.0,
                    shrink_end: pick(5.0, 8.0),
                }),
                text_box: None,
            },
            Preset::CalloutBox => AnnotationStyle {
                font_size: pick(11.0, 14.0),
                weight: FontWeight::Bold,
                italic: false,
                color: plotters::style::colors::WHITE,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Filled,
                    color: palette::PRIMARY,
                    width: pick(2.0, 3.0),
                    curvature: 0.0,
                    shrink_start: 2.0,
                    shrink_end: pick(5.0, 8.0),
                }),
                text_box: Some(BoxStyle {
                    fill: palette::PRIMARY,
                    edge: None,
                    edge_width: 1.0,
                    padding: pick(0.4, 0.5),
                }),
            },
            Preset::Subtle => AnnotationStyle {
                font_size: pick(9.0, 12.0),
                weight: FontWeight::Normal,
                italic: true,
                color: palette::NEUTRAL,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Open,
                    color: RGBColor(0x88, 0x88, 0x88),
                    width: pick(1.0, 1.5),
                    curvature: 0.15,
                    shrink_start: 2.0,
                    shrink_end: pick(3.0, 5.0),
                }),
                text_box: None,
            },
            Preset::Label => AnnotationStyle {
                font_size: pick(10.0, 13.0),
                weight: FontWeight::Bold,
                italic: false,
                color: palette::INK,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Plain,
                    color: palette::INK,
                    width: pick(1.0, 1.5),
                    curvature: 0.0,
                    shrink_start: 2.0,
                    shrink_end: pick(3.0, 5.0),
                }),
                text_box: None,
            },
            Preset::Highlight => AnnotationStyle {
                font_size: pick(12.0, 16.0),
                weight: FontWeight::Bold,
                italic: false,
                color: palette::PRIMARY,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Open,
                    color: palette::PRIMARY,
                    width: pick(2.0, 3.0),
                    curvature: 0.0,
                    shrink_start: 2.0,
                    shrink_end: pick(5.0, 8.0),
                }),
                text_box: Some(BoxStyle {
                    fill: palette::PURPLE_VERY_LIGHT,
                    edge: Some(palette::PRIMARY),
                    edge_width: pick(1.5, 2.0),
                    padding: pick(0.3, 0.4),
                }),
            },
            Preset::Trend => AnnotationStyle {
                font_size: pick(10.0, 13.0),
                weight: FontWeight::Bold,
                italic: false,
                color: palette::SECONDARY,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Double,
                    color: palette::SECONDARY,
                    width: pick(2.0, 3.0),
                    curvature: 0.0,
                    shrink_start: 2.0,
                    shrink_end: 2.0,
                }),
                text_box: None,
            },
            Preset::Positive => AnnotationStyle {
                font_size: pick(11.0, 14.0),
                weight: FontWeight::Bold,
                italic: false,
                color: palette::POSITIVE,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Open,
                    color: palette::POSITIVE,
                    width: pick(2.0, 3.0),
                    curvature: 0.0,
                    shrink_start: 2.0,
                    shrink_end: pick(5.0, 8.0),
                }),
                text_box: None,
            },
            Preset::Negative => AnnotationStyle {
                font_size: pick(11.0, 14.0),
                weight: FontWeight::Bold,
                italic: false,
                color: palette::NEGATIVE,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Open,
                    color: palette::NEGATIVE,
                    width: pick(2.0, 3.0),
                    curvature: 0.0,
                    shrink_start: 2.0,
                    shrink_end: pick(5.0, 8.0),
                }),
                text_box: None,
            },
            Preset::Neutral => AnnotationStyle {
                font_size: pick(10.0, 13.0),
                weight: FontWeight::Normal,
                italic: false,
                color: palette::NEUTRAL,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Open,
                    color: RGBColor(0x77, 0x77, 0x77),
                    width: pick(1.5, 2.0),
                    curvature: 0.0,
                    shrink_start: 2.0,
                    shrink_end: pick(4.0, 6.0),
                }),
                text_box: None,
            },
            Preset::Accent => AnnotationStyle {
                font_size: pick(11.0, 14.0),
                weight: FontWeight::Bold,
                italic: false,
                color: palette::ACCENT,
                arrow: Some(ArrowStyle {
                    head: ArrowHead::Open,
                    color: palette::ACCENT,
                    width: pick(2.0, 3.0),
                    curvature: 0.0,
                    shrink_start: 2.0,
                    shrink_end: pick(5.0, 8.0),
                }),
                text_box: None,
            },
        }
    }
}

impl AnnotationStyle {
    /// Returns a copy with the overrides merged on top. Top level fields
    /// replace; the arrow and box groups merge key by key, and an override
    /// group on a preset without one starts from the group defaults.
    pub fn merged(&self, overrides: &StyleOverrides) -> AnnotationStyle {
        let mut style = self.clone();
        if let Some(font_size) = overrides.font_size {
            style.font_size = font_size;
        }
        if let Some(weight) = overrides.weight {
            style.weight = weight;
        }
        if let Some(italic) = overrides.italic {
            style.italic = italic;
        }
        if let Some(color) = overrides.color {
            style.color = color;
        }
        if let Some(arrow) = &overrides.arrow {
            style.arrow = Some(arrow.apply_to(style.arrow.unwrap_or_default()));
        }
        if let Some(text_box) = &overrides.text_box {
            style.text_box = Some(text_box.apply_to(style.text_box.unwrap_or_default()));
        }
        style
    }
}

/// Resolves a named preset and merges the caller's overrides on top.
pub fn render_style(
    name: &str,
    tier: SizeTier,
    overrides: &StyleOverrides,
) -> Result<AnnotationStyle, StyleError> {
    Ok(Preset::from_name(name)?.style(tier).merged(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_preset_resolves() {
        let err = render_style("bogus", SizeTier::Notebook, &StyleOverrides::default())
            .expect_err("bogus preset should fail");
        let StyleError::UnknownPreset { valid, .. } = err else {
            panic!("wrong error variant");
        };
        for name in valid {
            render_style(name, SizeTier::Notebook, &StyleOverrides::default())
                .expect("advertised preset must resolve");
            render_style(name, SizeTier::Presentation, &StyleOverrides::default())
                .expect("advertised preset must resolve");
        }
    }

    #[test]
    fn top_level_override_replaces() {
        let style = render_style(
            "callout",
            SizeTier::Notebook,
            &StyleOverrides {
                font_size: Some(20.0),
                color: Some(palette::ACCENT),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(style.font_size, 20.0);
        assert_eq!(style.color, palette::ACCENT);
        // untouched fields keep the preset values
        assert_eq!(style.weight, FontWeight::Bold);
        assert_eq!(style.arrow.unwrap().color, palette::PRIMARY);
    }

    #[test]
    fn arrow_override_merges_key_by_key() {
        let style = render_style(
            "callout",
            SizeTier::Notebook,
            &StyleOverrides {
                arrow: Some(ArrowOverrides {
                    curvature: Some(-0.2),
                    shrink_end: Some(0.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .unwrap();
        let arrow = style.arrow.unwrap();
        assert_eq!(arrow.curvature, -0.2);
        assert_eq!(arrow.shrink_end, 0.0);
        // keys not named by the override keep the preset arrow values
        assert_eq!(arrow.color, palette::PRIMARY);
        assert_eq!(arrow.width, 2.0);
        assert_eq!(arrow.head, ArrowHead::Open);
    }

    #[test]
    fn box_override_on_boxless_preset_starts_from_defaults() {
        let style = render_style(
            "callout",
            SizeTier::Notebook,
            &StyleOverrides {
                text_box: Some(BoxOverrides {
                    fill: Some(palette::PURPLE_VERY_LIGHT),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .unwrap();
        let text_box = style.text_box.expect("override should attach a box");
        assert_eq!(text_box.fill, palette::PURPLE_VERY_LIGHT);
        assert_eq!(text_box.padding, BoxStyle::default().padding);
    }

    #[test]
    fn merging_does_not_mutate_the_preset() {
        let before = Preset::Callout.style(SizeTier::Notebook);
        let _ = render_style(
            "callout",
            SizeTier::Notebook,
            &StyleOverrides {
                font_size: Some(99.0),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(before, Preset::Callout.style(SizeTier::Notebook));
    }

    #[test]
    fn presentation_tier_is_larger() {
        for preset in Preset::ALL {
            let notebook = preset.style(SizeTier::Notebook);
            let presentation = preset.style(SizeTier::Presentation);
            assert!(presentation.font_size > notebook.font_size, "{:?}", preset);
        }
    }
}
