use thiserror::Error;

use crate::fragment::{BlockKind, GroupId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("End of block {group} at fragment {index} has no open block")]
    UnexpectedEnd { index: usize, group: GroupId },

    #[error("End of block {found} at fragment {index} while block {expected} is open")]
    MismatchedEnd {
        index: usize,
        expected: GroupId,
        found: GroupId,
    },

    #[error("{found:?} end of block {group} at fragment {index} closes a {expected:?} start")]
    MismatchedKind {
        index: usize,
        group: GroupId,
        expected: BlockKind,
        found: BlockKind,
    },

    #[error("Block {group} is never closed")]
    Unclosed { group: GroupId },
}
