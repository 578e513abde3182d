use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("direction has near-zero length and cannot be normalized")]
    DegenerateDirection,
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("traversal exhausted after {steps} steps without a hit; the grid border is not solid")]
    IterationExhausted { steps: usize },
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}
