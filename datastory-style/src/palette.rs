use plotters::style::RGBColor;

use crate::error::StyleError;

/// Deep purple, main data series and key callouts.
pub const PRIMARY: RGBColor = RGBColor(0x5C, 0x25, 0x93);
/// Dark teal, secondary data series.
pub const SECONDARY: RGBColor = RGBColor(0x0A, 0x5E, 0x73);
/// Deep orange rather than red so the palette stays colorblind safe.
pub const NEGATIVE: RGBColor = RGBColor(0xBF, 0x5B, 0x04);
/// Sea green, wins and increases.
pub const POSITIVE: RGBColor = RGBColor(0x1A, 0x93, 0x6F);
/// Dark grey, context and de-emphasized marks.
pub const NEUTRAL: RGBColor = RGBColor(0x4A, 0x4A, 0x4A);
/// Bright gold, special emphasis.
pub const ACCENT: RGBColor = RGBColor(0xE8, 0xB7, 0x2C);

// Tints shared by presets and colormaps.
pub const PURPLE_DARK: RGBColor = RGBColor(0x3D, 0x18, 0x66);
pub const PURPLE_LIGHT: RGBColor = RGBColor(0xB7, 0x94, 0xD4);
pub const PURPLE_VERY_LIGHT: RGBColor = RGBColor(0xED, 0xE7, 0xF3);

// Text greys used across every chart.
pub const INK: RGBColor = RGBColor(0x33, 0x33, 0x33);
pub const SUBTITLE_GREY: RGBColor = RGBColor(0x88, 0x88, 0x88);
pub const FAINT_GREY: RGBColor = RGBColor(0x99, 0x99, 0x99);
pub const TICK_GREY: RGBColor = RGBColor(0x66, 0x66, 0x66);
pub const GRID_GREY: RGBColor = RGBColor(0xCC, 0xCC, 0xCC);

/// Semantic color roles of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Secondary,
    Negative,
    Positive,
    Neutral,
    Accent,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Primary,
        Role::Secondary,
        Role::Negative,
        Role::Positive,
        Role::Neutral,
        Role::Accent,
    ];

    pub fn color(&self) -> RGBColor {
        match self {
            Role::Primary => PRIMARY,
            Role::Secondary => SECONDARY,
            Role::Negative => NEGATIVE,
            Role::Positive => POSITIVE,
            Role::Neutral => NEUTRAL,
            Role::Accent => ACCENT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Negative => "negative",
            Role::Positive => "positive",
            Role::Neutral => "neutral",
            Role::Accent => "accent",
        }
    }

    pub fn from_name(name: &str) -> Result<Role, StyleError> {
        Role::ALL
            .into_iter()
            .find(|role| role.name() == name)
            .ok_or_else(|| StyleError::UnknownColor {
                name: name.to_string(),
                valid: Role::ALL.iter().map(|role| role.name()).collect(),
            })
    }
}

/// Automatic series color assignment, primary first.
pub const COLOR_CYCLE: [RGBColor; 6] = [PRIMARY, SECONDARY, POSITIVE, ACCENT, NEGATIVE, NEUTRAL];

/// Looks up a palette color by role name.
pub fn palette_color(name: &str) -> Result<RGBColor, StyleError> {
    Role::from_name(name).map(|role| role.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(palette_color("primary").unwrap(), PRIMARY);
        assert_eq!(palette_color("negative").unwrap(), NEGATIVE);
    }

    #[test]
    fn unknown_name_lists_valid_roles() {
        let err = palette_color("danger").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("danger"));
        for role in Role::ALL {
            assert!(message.contains(role.name()), "missing {}", role.name());
        }
    }

    #[test]
    fn cycle_starts_with_primary() {
        assert_eq!(COLOR_CYCLE[0], PRIMARY);
        assert_eq!(COLOR_CYCLE.len(), Role::ALL.len());
    }
}
