use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("route stop link references unknown stop {0:?}")]
    UnknownStop(String),

    #[error("route stop link references unknown route {0:?}")]
    UnknownRoute(String),
}

pub type DataResult<T> = Result<T, DataError>;
