use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("assignment name must not be empty")]
    EmptyAssignment,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PredictError>;
