use std::fmt;

use crate::error::BalanceError;
use crate::token::Token;

/// Identity shared by the start and end markers of a block group. Several
/// start/end pairs may belong to one group (an if/else-if/else chain, a try
/// and its catch clauses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u32);

impl GroupId {
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-pass allocator of [`GroupId`]s. Each fragmentation pass owns one, so
/// concurrent passes never share identities.
#[derive(Debug, Default)]
pub struct GroupIds {
    next: u32,
}

impl GroupIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> GroupId {
        let id = GroupId(self.next);
        self.next += 1;
        id
    }

    /// Number of identities handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `{ ... }`
    Statements,
    /// An unbraced body holding one statement.
    SingleStatement,
    /// `try { ... }`
    Try,
    /// `do { ... }`
    DoWhile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacerKind {
    BetweenStatements,
    BetweenSwitchLabels,
    AfterSwitchLabel,
    AfterSwitchBlock,
    BetweenSwitchLabelBlocks,
    AfterEndStatementsBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Tokens(Vec<Token>),
    StartBlock { kind: BlockKind, group: GroupId },
    EndBlock { kind: BlockKind, group: GroupId },
    Spacer(SpacerKind),
}

impl Fragment {
    pub fn is_block_marker(&self) -> bool {
        matches!(self, Fragment::StartBlock { .. } | Fragment::EndBlock { .. })
    }

    pub fn tokens(&self) -> Option<&[Token]> {
        match self {
            Fragment::Tokens(tokens) => Some(tokens),
            _ => None,
        }
    }
}

/// Append-only fragment sequence. The only removal is [`Fragments::truncate`],
/// used to retract an optimistically opened block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments(Vec<Fragment>);

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.0.push(fragment);
    }

    pub fn add_tokens(&mut self, tokens: Vec<Token>) {
        self.0.push(Fragment::Tokens(tokens));
    }

    /// Move every fragment of `other` to the end of this sequence.
    pub fn append(&mut self, other: Fragments) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Fragment] {
        &self.0
    }

    /// Check that start and end markers nest properly, that each end has the
    /// kind of its start, and that every start is closed.
    pub fn check_balance(&self) -> Result<(), BalanceError> {
        let mut open: Vec<(GroupId, BlockKind)> = Vec::new();
        for (index, fragment) in self.0.iter().enumerate() {
            match *fragment {
                Fragment::StartBlock { kind, group } => open.push((group, kind)),
                Fragment::EndBlock { kind, group } => match open.pop() {
                    None => return Err(BalanceError::UnexpectedEnd { index, group }),
                    Some((expected, _)) if expected != group => {
                        return Err(BalanceError::MismatchedEnd {
                            index,
                            expected,
                            found: group,
                        });
                    }
                    Some((_, expected)) if expected != kind => {
                        return Err(BalanceError::MismatchedKind {
                            index,
                            group,
                            expected,
                            found: kind,
                        });
                    }
                    Some(_) => {}
                },
                Fragment::Tokens(_) | Fragment::Spacer(_) => {}
            }
        }
        match open.pop() {
            Some((group, _)) => Err(BalanceError::Unclosed { group }),
            None => Ok(()),
        }
    }

    /// Count start markers of the given kind.
    pub fn count_starts(&self, kind: BlockKind) -> usize {
        self.0
            .iter()
            .filter(|f| matches!(f, Fragment::StartBlock { kind: k, .. } if *k == kind))
            .count()
    }
}

impl From<Vec<Fragment>> for Fragments {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self(fragments)
    }
}

impl<'a> IntoIterator for &'a Fragments {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
