//! Add-on aggregate: the data the display logic reads.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
