use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Type list needs at least 2 elements, got {0}: use a single type instead")]
    TypeListTooShort(usize),
}

pub type Result<T> = std::result::Result<T, ModelError>;
