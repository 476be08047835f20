pub mod colormaps;
pub mod error;
pub mod palette;
pub mod presets;

pub use colormaps::{colormap, Colormap};
pub use error::StyleError;
pub use palette::{palette_color, Role, COLOR_CYCLE};
pub use presets::{
    render_style, AnnotationStyle, ArrowHead, ArrowStyle, BoxStyle, FontWeight, SizeTier,
    StyleOverrides,
};
