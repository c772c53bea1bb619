use serde::{Deserialize, Serialize};

use crate::decl::TypeDeclaration;
use crate::expr::Expr;
use crate::modifiers::Modifiers;
use crate::types::{ObjectType, Type};

/// Statement nodes of a method body.
///
/// Bodies are `Option<Box<Stmt>>` where the source may omit them entirely
/// (`while (x);`) and `Box<Stmt>` where the grammar requires a block. A body
/// holding several statements uses [`Stmt::Statements`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    /// `assert condition : message;`
    Assert {
        condition: Expr,
        #[serde(default)]
        message: Option<Expr>,
    },
    Break {
        #[serde(default)]
        label: Option<String>,
    },
    Continue {
        #[serde(default)]
        label: Option<String>,
    },
    /// Free-form comment, possibly spanning several lines.
    Comment { text: String },
    /// Listing of bytecode that could not be decompiled.
    ByteCode { text: String },
    DoWhile {
        condition: Expr,
        #[serde(default)]
        statements: Option<Box<Stmt>>,
    },
    /// Expression statement: `expr;`
    Expression { expression: Expr },
    For {
        #[serde(default)]
        declaration: Option<LocalVariableDeclaration>,
        #[serde(default)]
        init: Option<Expr>,
        #[serde(default)]
        condition: Option<Expr>,
        #[serde(default)]
        update: Option<Expr>,
        #[serde(default)]
        statements: Option<Box<Stmt>>,
    },
    /// `for (Type name : expression)`
    ForEach {
        ty: Type,
        name: String,
        expression: Expr,
        #[serde(default)]
        statements: Option<Box<Stmt>>,
    },
    If {
        condition: Expr,
        #[serde(default)]
        statements: Option<Box<Stmt>>,
    },
    IfElse {
        condition: Expr,
        statements: Box<Stmt>,
        else_statements: Box<Stmt>,
    },
    /// `label: statement`
    Label {
        label: String,
        #[serde(default)]
        statement: Option<Box<Stmt>>,
    },
    /// Body of an expression lambda.
    LambdaExpression { expression: Expr },
    LocalVariableDeclaration(LocalVariableDeclaration),
    /// `return;`
    Return,
    /// `return expression;`
    ReturnExpression {
        expression: Expr,
        #[serde(default)]
        line_number: Option<u32>,
    },
    Statements {
        #[serde(default)]
        statements: Vec<Stmt>,
    },
    Switch {
        condition: Expr,
        #[serde(default)]
        blocks: Vec<SwitchBlock>,
    },
    Synchronized {
        monitor: Expr,
        #[serde(default)]
        statements: Option<Box<Stmt>>,
    },
    Throw { expression: Expr },
    /// `try`, `try-catch`, `try-finally` and try-with-resources.
    ///
    /// `resources` is either absent or non-empty.
    Try {
        #[serde(default)]
        resources: Option<Vec<Resource>>,
        try_statements: Box<Stmt>,
        #[serde(default)]
        catch_clauses: Vec<CatchClause>,
        #[serde(default)]
        finally_statements: Option<Box<Stmt>>,
    },
    /// A local class, interface or enum.
    TypeDeclaration(TypeDeclaration),
    While {
        condition: Expr,
        #[serde(default)]
        statements: Option<Box<Stmt>>,
    },
}

impl Stmt {
    pub fn list(statements: Vec<Stmt>) -> Self {
        Stmt::Statements { statements }
    }

    pub fn expression(expression: Expr) -> Self {
        Stmt::Expression { expression }
    }

    pub fn return_value(expression: Expr) -> Self {
        Stmt::ReturnExpression {
            expression,
            line_number: None,
        }
    }

    /// The single statement of a one-element list, or `self` otherwise.
    pub fn unwrap_singleton(&self) -> &Stmt {
        match self {
            Stmt::Statements { statements } if statements.len() == 1 => &statements[0],
            other => other,
        }
    }
}

/// `final Type a = 1, b[] = c;`, also used as a `for` initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalVariableDeclaration {
    #[serde(default)]
    pub modifiers: Modifiers,
    pub ty: Type,
    pub declarators: Vec<LocalVariableDeclarator>,
}

impl LocalVariableDeclaration {
    pub fn is_final(&self) -> bool {
        self.modifiers.contains(Modifiers::FINAL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalVariableDeclarator {
    pub name: String,
    /// Extra `[]` written after the name.
    #[serde(default)]
    pub dimension: u32,
    #[serde(default)]
    pub initializer: Option<Expr>,
}

impl LocalVariableDeclarator {
    pub fn new(name: &str, initializer: Option<Expr>) -> Self {
        Self {
            name: name.to_string(),
            dimension: 0,
            initializer,
        }
    }
}

/// A `case`/`default` group of a switch statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SwitchBlock {
    /// One label followed by its statements.
    Label {
        label: SwitchLabel,
        statements: Box<Stmt>,
    },
    /// Several labels sharing the same statements.
    MultiLabels {
        labels: Vec<SwitchLabel>,
        statements: Box<Stmt>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SwitchLabel {
    /// `default:`
    Default,
    /// `case expression:`
    Expression { expression: Expr },
}

/// A try-with-resources declaration, `Type name = expression`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub ty: ObjectType,
    pub name: String,
    pub expression: Expr,
    #[serde(default)]
    pub line_number: Option<u32>,
}

/// `catch (Type | OtherType name) { statements }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub ty: ObjectType,
    #[serde(default)]
    pub other_types: Vec<ObjectType>,
    pub name: String,
    #[serde(default)]
    pub line_number: Option<u32>,
    pub statements: Box<Stmt>,
}
