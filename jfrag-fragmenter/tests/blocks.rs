mod common;

use common::*;
use jfrag_ir::{BlockKind, SpacerKind};
use jfrag_syntax::{BinOp, Expr, Stmt, SwitchBlock, SwitchLabel};

// --- loops ---

#[test]
fn loop_without_body_ends_with_semicolon() {
    let stmt = Stmt::While {
        condition: name("x"),
        statements: None,
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "while (x);");
    assert_eq!(result.fragments.len(), 1);
}

#[test]
fn loop_with_empty_list_ends_with_semicolon() {
    let stmt = Stmt::While {
        condition: name("x"),
        statements: list(vec![]),
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "while (x);");
    assert!(result.fragments.iter().all(|f| !f.is_block_marker()));
}

#[test]
fn loop_with_one_fragment_is_unbraced() {
    let stmt = Stmt::While {
        condition: name("x"),
        statements: list(vec![call("a")]),
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "while (x) a();");
    assert_eq!(result.fragments.count_starts(BlockKind::SingleStatement), 1);
    assert_eq!(result.fragments.count_starts(BlockKind::Statements), 0);
}

#[test]
fn loop_with_several_fragments_is_braced() {
    let stmt = Stmt::While {
        condition: name("x"),
        statements: list(vec![call("a"), call("b")]),
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "while (x) { a(); b(); }");
    assert_eq!(result.fragments.count_starts(BlockKind::Statements), 1);
    assert_eq!(spacers(&result, SpacerKind::BetweenStatements), 1);
}

#[test]
fn loop_around_nested_if_is_braced() {
    // One statement, but it renders to several fragments.
    let stmt = Stmt::While {
        condition: name("x"),
        statements: list(vec![Stmt::If {
            condition: name("y"),
            statements: list(vec![call("a")]),
        }]),
    };
    assert_eq!(dump(&stmt), "while (x) { if (y) a(); }");
}

#[test]
fn empty_for_header() {
    let stmt = Stmt::For {
        declaration: None,
        init: None,
        condition: None,
        update: None,
        statements: None,
    };
    assert_eq!(dump(&stmt), "for (;;);");
}

#[test]
fn do_while_keeps_braces_when_empty() {
    let stmt = Stmt::DoWhile {
        condition: name("x"),
        statements: None,
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "do { } while (x);");
    assert_eq!(result.fragments.count_starts(BlockKind::DoWhile), 1);

    let stmt = Stmt::DoWhile {
        condition: name("x"),
        statements: list(vec![call("a")]),
    };
    assert_eq!(dump(&stmt), "do { a(); } while (x);");
}

// --- if ---

#[test]
fn if_without_body_gets_semicolon_fragment() {
    let stmt = Stmt::If {
        condition: name("x"),
        statements: None,
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "if (x) ;");
    assert_eq!(result.fragments.len(), 2);
    assert!(result.fragments.iter().all(|f| !f.is_block_marker()));
}

#[test]
fn if_with_empty_list_gets_semicolon_fragment() {
    let stmt = Stmt::If {
        condition: name("x"),
        statements: list(vec![]),
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "if (x) ;");
    assert!(result.fragments.iter().all(|f| !f.is_block_marker()));
}

#[test]
fn if_with_single_statement_is_unbraced() {
    let stmt = Stmt::If {
        condition: name("x"),
        statements: list(vec![Stmt::Return]),
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "if (x) return;");
    assert_eq!(result.fragments.count_starts(BlockKind::SingleStatement), 1);
    assert_eq!(result.fragments.count_starts(BlockKind::Statements), 0);
}

#[test]
fn if_with_bare_statement_body_is_unbraced() {
    let stmt = Stmt::If {
        condition: name("x"),
        statements: Some(Box::new(call("a"))),
    };
    assert_eq!(dump(&stmt), "if (x) a();");
}

#[test]
fn if_with_two_statements_is_braced() {
    let stmt = Stmt::If {
        condition: Expr::binary(BinOp::Gt, name("n"), Expr::int(0)),
        statements: list(vec![call("a"), Stmt::Return]),
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "if (n > 0) { a(); return; }");
    assert_eq!(result.fragments.count_starts(BlockKind::Statements), 1);
}

#[test]
fn if_else() {
    let stmt = Stmt::IfElse {
        condition: name("x"),
        statements: Box::new(Stmt::list(vec![call("a")])),
        else_statements: Box::new(Stmt::list(vec![call("b"), call("c")])),
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "if (x) { a(); } else { b(); c(); }");
    assert_eq!(groups(&result).len(), 1);
}

#[test]
fn else_if_chain_shares_one_group() {
    let stmt = Stmt::IfElse {
        condition: name("a"),
        statements: Box::new(call("x")),
        else_statements: Box::new(Stmt::list(vec![Stmt::IfElse {
            condition: name("b"),
            statements: Box::new(call("y")),
            else_statements: Box::new(Stmt::If {
                condition: name("c"),
                statements: Some(Box::new(call("z"))),
            }),
        }])),
    };
    let result = run(&stmt);
    assert_eq!(
        result.fragments.dump(),
        "if (a) { x(); } else if (b) { y(); } else if (c) { z(); }"
    );
    assert_eq!(groups(&result).len(), 1, "else-if must not nest new groups");
    assert_eq!(result.fragments.count_starts(BlockKind::Statements), 3);
    assert_eq!(result.fragments.count_starts(BlockKind::SingleStatement), 0);
}

#[test]
fn else_if_followed_by_plain_else() {
    let stmt = Stmt::IfElse {
        condition: name("a"),
        statements: Box::new(call("x")),
        else_statements: Box::new(Stmt::IfElse {
            condition: name("b"),
            statements: Box::new(call("y")),
            else_statements: Box::new(call("z")),
        }),
    };
    assert_eq!(
        dump(&stmt),
        "if (a) { x(); } else if (b) { y(); } else { z(); }"
    );
}

#[test]
fn else_list_with_two_statements_is_not_else_if() {
    let stmt = Stmt::IfElse {
        condition: name("a"),
        statements: Box::new(call("x")),
        else_statements: Box::new(Stmt::list(vec![
            Stmt::If {
                condition: name("b"),
                statements: None,
            },
            call("y"),
        ])),
    };
    assert_eq!(dump(&stmt), "if (a) { x(); } else { if (b) ; y(); }");
}

// --- switch ---

#[test]
fn switch_with_single_default() {
    let stmt = Stmt::Switch {
        condition: name("c"),
        blocks: vec![SwitchBlock::Label {
            label: SwitchLabel::Default,
            statements: Box::new(call("a")),
        }],
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "switch (c) { default: a(); }");
    assert_eq!(spacers(&result, SpacerKind::AfterEndStatementsBlock), 1);
    assert_eq!(spacers(&result, SpacerKind::BetweenSwitchLabelBlocks), 0);
    assert_eq!(spacers(&result, SpacerKind::AfterSwitchLabel), 1);
    assert_eq!(spacers(&result, SpacerKind::AfterSwitchBlock), 1);
}

#[test]
fn switch_with_multi_labels() {
    let stmt = Stmt::Switch {
        condition: name("n"),
        blocks: vec![
            SwitchBlock::MultiLabels {
                labels: vec![
                    SwitchLabel::Expression {
                        expression: Expr::int(1),
                    },
                    SwitchLabel::Expression {
                        expression: Expr::int(2),
                    },
                ],
                statements: Box::new(Stmt::list(vec![call("a"), Stmt::Break { label: None }])),
            },
            SwitchBlock::Label {
                label: SwitchLabel::Default,
                statements: Box::new(call("b")),
            },
        ],
    };
    let result = run(&stmt);
    assert_eq!(
        result.fragments.dump(),
        "switch (n) { case 1: case 2: a(); break; default: b(); }"
    );
    assert_eq!(spacers(&result, SpacerKind::BetweenSwitchLabels), 1);
    assert_eq!(spacers(&result, SpacerKind::BetweenSwitchLabelBlocks), 1);
    assert_eq!(spacers(&result, SpacerKind::AfterSwitchBlock), 2);
}

#[test]
fn empty_switch() {
    let stmt = Stmt::Switch {
        condition: name("n"),
        blocks: vec![],
    };
    assert_eq!(dump(&stmt), "switch (n) { }");
}

// --- synchronized ---

#[test]
fn synchronized_without_body() {
    let stmt = Stmt::Synchronized {
        monitor: name("lock"),
        statements: None,
    };
    let result = run(&stmt);
    assert_eq!(result.fragments.dump(), "synchronized (lock) {}");
    assert_eq!(result.fragments.len(), 1);
    assert!(result.fragments.iter().all(|f| !f.is_block_marker()));
}

#[test]
fn synchronized_with_body() {
    let stmt = Stmt::Synchronized {
        monitor: Expr::This,
        statements: list(vec![call("a")]),
    };
    assert_eq!(dump(&stmt), "synchronized (this) { a(); }");
}

// --- labels ---

#[test]
fn labeled_loop() {
    let stmt = Stmt::Label {
        label: "outer".into(),
        statement: Some(Box::new(Stmt::While {
            condition: name("x"),
            statements: list(vec![Stmt::Continue {
                label: Some("outer".into()),
            }]),
        })),
    };
    let result = run(&stmt);
    assert_eq!(
        result.fragments.dump(),
        "outer: while (x) continue outer;"
    );
    assert_eq!(
        result.fragments.as_slice()[0].tokens().map(|t| t.len()),
        Some(3)
    );
}

#[test]
fn label_without_statement() {
    let stmt = Stmt::Label {
        label: "done".into(),
        statement: None,
    };
    assert_eq!(dump(&stmt), "done:");
}
