pub mod addon;
pub mod errors;
pub mod images;
pub mod logging;
pub mod messages;
pub mod ratings;
