use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// Two vectors with different dimensions were compared.
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn check_lengths(expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            return Err(Error::LengthMismatch { expected, actual });
        }
        Ok(())
    }
}
