//! Java syntax model recovered from class files: types, expressions,
//! statements and local-variable descriptors.

pub mod decl;
pub mod error;
pub mod expr;
pub mod local_variable;
pub mod modifiers;
pub mod stmt;
pub mod types;

pub use decl::{TypeDeclaration, TypeKind};
pub use error::{ModelError, Result};
pub use expr::{BinOp, Expr, UnOp};
pub use local_variable::{Declared, LocalVariable};
pub use modifiers::Modifiers;
pub use stmt::{
    CatchClause, LocalVariableDeclaration, LocalVariableDeclarator, Resource, Stmt, SwitchBlock,
    SwitchLabel,
};
pub use types::{
    GenericType, InnerObjectType, ObjectType, PrimitiveKind, PrimitiveType, Type, TypeArgument,
    TypeArgumentVisitor, Types,
};
