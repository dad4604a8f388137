use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("stored value is malformed: {0}")]
    Corrupt(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Please upload a file or enter some text!")]
    MissingInput,
}
