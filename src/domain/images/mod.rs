//! Image URL selection for add-on previews and icons.

pub mod icon;
pub mod origin;
pub mod selector;

pub use icon::*;
pub use origin::*;
pub use selector::*;
