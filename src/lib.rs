// Library exports for emission-colors

pub mod color;
pub mod color_system;
pub mod csv_reader;
pub mod palette;

pub use color::Color;
pub use color_system::{
    get_color_cache, get_color_for_group, reset_color_system, set_color_for_group, ColorSystem,
};
