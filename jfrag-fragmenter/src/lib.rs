//! Statement fragmenter: turns a decompiled Java method body into the
//! block-structured fragment sequence consumed by the text layout stage.

pub mod declaration;
pub mod environment;
pub mod error;
pub mod expression;
pub mod statement;
pub mod type_ref;

pub use declaration::{HeaderOnly, TypeDeclarationFragmenter};
pub use environment::Environment;
pub use error::{FragmentError, Result};
pub use statement::{Fragmented, StatementFragmenter};
pub use type_ref::Imports;

use jfrag_syntax::Stmt;

/// Fragment a whole method body.
pub fn fragment_method(body: &Stmt, env: &Environment) -> Result<Fragmented> {
    log::trace!(
        "fragmenting method body of {} ({} top-level statements)",
        env.current_internal_type_name,
        match body {
            Stmt::Statements { statements } => statements.len(),
            _ => 1,
        }
    );
    let mut fragmenter = StatementFragmenter::new(env);
    fragmenter.fragment(body)?;
    fragmenter.finish()
}
