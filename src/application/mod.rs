pub mod addon_display;

pub use addon_display::*;
