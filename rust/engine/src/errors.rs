use thiserror::Error;

/// Errors raised by container mutations.
///
/// Empty-collection conditions (drawing or peeking an empty deck, extremum
/// queries on an empty hand) are not errors; those return `None`. The
/// variants here signal caller bugs or rejected mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("container is at capacity ({capacity})")]
    AtCapacity { capacity: usize },
    #[error("index {index} out of range for container of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A card code could not be parsed (expected forms like "AS", "6H", "JR").
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot parse card from {input:?}")]
pub struct ParseCardError {
    pub input: String,
}
