use derive_more::Display;

/// Flat error type shared by every layer.
///
/// "No image" or "no ratings yet" are not errors; they are `None` results.
/// An `AppError` always means the caller passed something it should not have.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display(fmt = "Invalid options: {}", _0)]
    InvalidOptions(String),
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;
pub type ImageResult<T> = AppResult<T>;
pub type ConfigResult<T> = AppResult<T>;
