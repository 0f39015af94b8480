//! Display logic for add-on pages: preview image and icon selection, the
//! star-rating breakdown and the add-on meta card. Pure Rust with a thin
//! `wasm-bindgen` layer for the browser.

mod macros;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
#[cfg(not(feature = "logic-only"))]
pub mod presentation;

pub use application::AddonDisplayService;
pub use config::FrontendConfig;
pub use domain::addon::{Addon, GroupedRatings, ImageSize, Preview, StarRating};
pub use domain::errors::AppError;
pub use domain::images::{AllowedOrigins, OriginPolicy, PreviewOptions, STANDARD_PREVIEW_WIDTH, get_preview_image};

#[cfg(not(feature = "logic-only"))]
use wasm_bindgen::prelude::*;

/// Install the console logger, clock and panic hook.
#[cfg(not(feature = "logic-only"))]
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(logger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    crate::log_info!(domain::logging::LogComponent::Presentation("Initialize"), "addon display initialized");
}
