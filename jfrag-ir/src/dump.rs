//! Plain-text renderings of a fragment sequence for logs and tests.
//!
//! These are not the layout stage: no line breaking, no indentation.

use std::fmt::Write;

use crate::fragment::{BlockKind, Fragment, Fragments, SpacerKind};

impl Fragments {
    /// Single-line source preview, see [`preview`].
    pub fn dump(&self) -> String {
        preview(self)
    }
}

/// Render fragments as one line of approximate source text. Fragments are
/// separated by a single space unless the previous one already ends with
/// one; spacers and single-statement markers print nothing.
pub fn preview(fragments: &Fragments) -> String {
    let mut out = String::new();
    for fragment in fragments {
        let text = fragment_text(fragment);
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
        out.push_str(&text);
    }
    out
}

fn fragment_text(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Tokens(tokens) => tokens.iter().map(|t| t.as_text()).collect(),
        Fragment::StartBlock { kind, .. } => match kind {
            BlockKind::Statements => "{".into(),
            BlockKind::SingleStatement => String::new(),
            BlockKind::Try => "try {".into(),
            BlockKind::DoWhile => "do {".into(),
        },
        Fragment::EndBlock { kind, .. } => match kind {
            BlockKind::SingleStatement => String::new(),
            _ => "}".into(),
        },
        Fragment::Spacer(_) => String::new(),
    }
}

/// One line per fragment naming its kind and group, for trace logs.
pub fn outline(fragments: &Fragments) -> String {
    let mut out = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        let _ = match fragment {
            Fragment::Tokens(_) => writeln!(out, "{i:4} tokens `{}`", fragment_text(fragment)),
            Fragment::StartBlock { kind, group } => {
                writeln!(out, "{i:4} start {} {group}", block_name(*kind))
            }
            Fragment::EndBlock { kind, group } => {
                writeln!(out, "{i:4} end {} {group}", block_name(*kind))
            }
            Fragment::Spacer(kind) => writeln!(out, "{i:4} spacer {}", spacer_name(*kind)),
        };
    }
    out
}

fn block_name(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Statements => "statements",
        BlockKind::SingleStatement => "single-statement",
        BlockKind::Try => "try",
        BlockKind::DoWhile => "do-while",
    }
}

fn spacer_name(kind: SpacerKind) -> &'static str {
    match kind {
        SpacerKind::BetweenStatements => "between-statements",
        SpacerKind::BetweenSwitchLabels => "between-switch-labels",
        SpacerKind::AfterSwitchLabel => "after-switch-label",
        SpacerKind::AfterSwitchBlock => "after-switch-block",
        SpacerKind::BetweenSwitchLabelBlocks => "between-switch-label-blocks",
        SpacerKind::AfterEndStatementsBlock => "after-end-statements-block",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use crate::fragment::GroupIds;
    use crate::token::Token;

    fn sample() -> Fragments {
        let mut ids = GroupIds::new();
        let mut out = Fragments::new();
        out.add_tokens(vec![
            Token::IF,
            Token::SPACE,
            Token::START_PARAMETERS_BLOCK,
            Token::text("a"),
            Token::END_PARAMETERS_BLOCK,
        ]);
        let group = factory::start_single_statement_block(&mut out, &mut ids);
        out.add_tokens(vec![Token::RETURN, Token::SEMICOLON]);
        factory::end_single_statement_block(&mut out, group);
        factory::spacer_between_statements(&mut out);
        let body = factory::start_statements_do_while_block(&mut out, &mut ids);
        factory::end_statements_do_while_block(&mut out, body);
        out
    }

    #[test]
    fn preview_joins_fragments() {
        assert_eq!(sample().dump(), "if (a) return; do { }");
    }

    #[test]
    fn outline_lists_every_fragment() {
        let text = outline(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "   0 tokens `if (a)`");
        assert_eq!(lines[1], "   1 start single-statement #0");
        assert_eq!(lines[4], "   4 spacer between-statements");
        assert_eq!(lines[6], "   6 end do-while #1");
    }
}
