//! Helpers that append well-formed block markers and spacers.
//!
//! Every `start_*` function opening a new group returns its [`GroupId`]; the
//! matching `end_*` call must be given the same id. Nothing here merges,
//! reorders or deletes fragments.

use crate::fragment::{BlockKind, Fragment, Fragments, GroupId, GroupIds, SpacerKind};
use crate::token::{BlockToken, Token};

fn start(out: &mut Fragments, kind: BlockKind, group: GroupId) {
    out.push(Fragment::StartBlock { kind, group });
}

fn end(out: &mut Fragments, kind: BlockKind, group: GroupId) {
    out.push(Fragment::EndBlock { kind, group });
}

pub fn start_statements_block(out: &mut Fragments, ids: &mut GroupIds) -> GroupId {
    let group = ids.next_id();
    start(out, BlockKind::Statements, group);
    group
}

/// Open another statements block in an existing group, as for `else` and
/// `catch` bodies.
pub fn reopen_statements_block(out: &mut Fragments, group: GroupId) {
    start(out, BlockKind::Statements, group);
}

pub fn end_statements_block(out: &mut Fragments, group: GroupId) {
    end(out, BlockKind::Statements, group);
}

pub fn start_single_statement_block(out: &mut Fragments, ids: &mut GroupIds) -> GroupId {
    let group = ids.next_id();
    start(out, BlockKind::SingleStatement, group);
    group
}

pub fn end_single_statement_block(out: &mut Fragments, group: GroupId) {
    end(out, BlockKind::SingleStatement, group);
}

/// Open the body of a `try` without resources. Catch and finally bodies
/// reopen the same group as statements blocks.
pub fn start_statements_try_block(out: &mut Fragments, ids: &mut GroupIds) -> GroupId {
    let group = ids.next_id();
    start(out, BlockKind::Try, group);
    group
}

pub fn end_statements_try_block(out: &mut Fragments, group: GroupId) {
    end(out, BlockKind::Try, group);
}

pub fn start_statements_do_while_block(out: &mut Fragments, ids: &mut GroupIds) -> GroupId {
    let group = ids.next_id();
    start(out, BlockKind::DoWhile, group);
    group
}

pub fn end_statements_do_while_block(out: &mut Fragments, group: GroupId) {
    end(out, BlockKind::DoWhile, group);
}

/// Resource lists sit inside the `try` header tokens rather than in their own
/// fragments.
pub fn start_resources_block(tokens: &mut Vec<Token>) {
    tokens.push(Token::StartBlock(BlockToken::Resources));
}

pub fn end_resources_block(tokens: &mut Vec<Token>) {
    tokens.push(Token::EndBlock(BlockToken::Resources));
}

pub fn spacer_between_statements(out: &mut Fragments) {
    out.push(Fragment::Spacer(SpacerKind::BetweenStatements));
}

pub fn spacer_between_switch_labels(out: &mut Fragments) {
    out.push(Fragment::Spacer(SpacerKind::BetweenSwitchLabels));
}

pub fn spacer_after_switch_label(out: &mut Fragments) {
    out.push(Fragment::Spacer(SpacerKind::AfterSwitchLabel));
}

pub fn spacer_after_switch_block(out: &mut Fragments) {
    out.push(Fragment::Spacer(SpacerKind::AfterSwitchBlock));
}

pub fn spacer_between_switch_label_blocks(out: &mut Fragments) {
    out.push(Fragment::Spacer(SpacerKind::BetweenSwitchLabelBlocks));
}

pub fn spacer_after_end_statements_block(out: &mut Fragments) {
    out.push(Fragment::Spacer(SpacerKind::AfterEndStatementsBlock));
}
