//! Fragment IR: the structured output of the statement fragmenter, consumed
//! by the text layout stage.

pub mod dump;
pub mod error;
pub mod factory;
pub mod fragment;
pub mod token;

pub use error::BalanceError;
pub use fragment::{BlockKind, Fragment, Fragments, GroupId, GroupIds, SpacerKind};
pub use token::{BlockToken, Marker, ReferenceToken, Token};
