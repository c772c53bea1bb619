#![allow(dead_code)]

use std::path::PathBuf;

use jfrag_fragmenter::{Environment, Fragmented, fragment_method};
use jfrag_ir::{Fragment, GroupId, SpacerKind, Token};
use jfrag_syntax::{Expr, Stmt};
use serde::Deserialize;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn env() -> Environment {
    Environment::new("com/acme/Main")
}

pub fn run(body: &Stmt) -> Fragmented {
    init_logger();
    fragment_method(body, &env()).unwrap()
}

pub fn dump(body: &Stmt) -> String {
    run(body).fragments.dump()
}

/// `name();`
pub fn call(name: &str) -> Stmt {
    Stmt::expression(Expr::call(name, vec![]))
}

pub fn name(name: &str) -> Expr {
    Expr::name(name)
}

pub fn list(statements: Vec<Stmt>) -> Option<Box<Stmt>> {
    Some(Box::new(Stmt::list(statements)))
}

pub fn spacers(result: &Fragmented, kind: SpacerKind) -> usize {
    result
        .fragments
        .iter()
        .filter(|f| matches!(f, Fragment::Spacer(k) if *k == kind))
        .count()
}

/// Distinct groups among the start markers, in first-seen order.
pub fn groups(result: &Fragmented) -> Vec<GroupId> {
    let mut seen = Vec::new();
    for fragment in &result.fragments {
        if let Fragment::StartBlock { group, .. } = fragment {
            if !seen.contains(group) {
                seen.push(*group);
            }
        }
    }
    seen
}

/// Names of the reference tokens in `tokens`.
pub fn references(tokens: &[Token]) -> Vec<&str> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Reference(r) => Some(r.name.as_str()),
            _ => None,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub environment: Environment,
    pub body: Stmt,
    pub preview: String,
    #[serde(default)]
    pub imports: Vec<String>,
}

pub fn load_fixture(file: &str) -> Fixture {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(file);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_yaml::from_str(&text).unwrap_or_else(|e| panic!("bad fixture {file}: {e}"))
}
