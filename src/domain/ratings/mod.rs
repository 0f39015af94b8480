//! Rating display logic: star breakdown rows and the add-on meta card.

pub mod by_star;
pub mod review_url;
pub mod summary;

pub use by_star::*;
pub use review_url::*;
pub use summary::*;
