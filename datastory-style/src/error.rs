use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("unknown preset '{name}', choose from: {}", .valid.join(", "))]
    UnknownPreset {
        name: String,
        valid: Vec<&'static str>,
    },
    #[error("unknown palette color '{name}', choose from: {}", .valid.join(", "))]
    UnknownColor {
        name: String,
        valid: Vec<&'static str>,
    },
    #[error("unknown colormap '{name}', choose from: {}", .valid.join(", "))]
    UnknownColormap {
        name: String,
        valid: Vec<&'static str>,
    },
}
