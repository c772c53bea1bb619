use jfrag_ir::BalanceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("try-with-resources statement has an empty resource list")]
    EmptyResourceList,
    #[error("fragment sequence is unbalanced: {0}")]
    Unbalanced(#[from] BalanceError),
}

pub type Result<T> = std::result::Result<T, FragmentError>;
