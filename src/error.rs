use thiserror::Error;

pub type TickResult<T> = Result<T, TickError>;

#[derive(Debug, Error)]
pub enum TickError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid tick count: {0} (at least 2 ticks are required)")]
    InvalidTickCount(f64),
}
