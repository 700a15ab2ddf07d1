use thiserror::Error;

/// AppError
///
/// Failures that can stop the service from starting or serving. Request handling
/// itself has no error path: the guard always produces a decision.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid value {value:?} for {var}")]
    InvalidConfig { var: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
