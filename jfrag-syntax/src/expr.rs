use serde::{Deserialize, Serialize};

use crate::types::{ObjectType, Type};

/// Expression tree nodes recovered from bytecode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// `true` / `false`
    Boolean { value: bool },
    /// `int` literal.
    Integer { value: i64 },
    /// `long` literal, rendered with an `L` suffix.
    Long { value: i64 },
    /// `double` literal.
    Double { value: f64 },
    /// `char` literal.
    Char { value: char },
    /// String literal.
    String { value: String },
    /// `null`
    Null,
    /// `this`
    This,
    /// A local variable or parameter.
    Name { name: String },
    /// Field access: `object.name`, or a bare `name` when `object` is absent.
    Field {
        #[serde(default)]
        object: Option<Box<Expr>>,
        name: String,
    },
    /// Method call: `object.name(args...)`.
    MethodInvocation {
        #[serde(default)]
        object: Option<Box<Expr>>,
        name: String,
        #[serde(default)]
        arguments: Vec<Expr>,
    },
    /// `new Type(args...)`
    New {
        ty: ObjectType,
        #[serde(default)]
        arguments: Vec<Expr>,
    },
    /// Binary operation: `left op right`
    Binary {
        operator: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Prefix or postfix unary operation.
    Unary { operator: UnOp, expr: Box<Expr> },
    /// `target = value`, or a compound assignment such as `target += value`.
    Assignment {
        #[serde(default)]
        operator: Option<BinOp>,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `(Type) expr`
    Cast { ty: Type, expr: Box<Expr> },
    /// `expr instanceof Type`
    InstanceOf { expr: Box<Expr>, ty: Type },
    /// `condition ? then_expr : else_expr`
    Conditional {
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    /// `array[index]`
    ArrayAccess { array: Box<Expr>, index: Box<Expr> },
    /// A type used as an expression, e.g. the qualifier of a static call.
    TypeReference { ty: Type },
    /// Expression lambda: `(a, b) -> body`
    Lambda {
        #[serde(default)]
        parameters: Vec<String>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn name(name: &str) -> Self {
        Expr::Name {
            name: name.to_string(),
        }
    }

    pub fn int(value: i64) -> Self {
        Expr::Integer { value }
    }

    pub fn string(value: &str) -> Self {
        Expr::String {
            value: value.to_string(),
        }
    }

    pub fn binary(operator: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Unqualified call `name(args...)`.
    pub fn call(name: &str, arguments: Vec<Expr>) -> Self {
        Expr::MethodInvocation {
            object: None,
            name: name.to_string(),
            arguments,
        }
    }

    pub fn method(object: Expr, name: &str, arguments: Vec<Expr>) -> Self {
        Expr::MethodInvocation {
            object: Some(Box::new(object)),
            name: name.to_string(),
            arguments,
        }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assignment {
            operator: None,
            target: Box::new(target),
            value: Box::new(value),
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnOp {
    Neg,
    Not,
    BitNot,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

impl UnOp {
    pub fn is_postfix(self) -> bool {
        matches!(self, UnOp::PostInc | UnOp::PostDec)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Not => "!",
            UnOp::BitNot => "~",
            UnOp::PreInc | UnOp::PostInc => "++",
            UnOp::PreDec | UnOp::PostDec => "--",
        }
    }
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::UShr => ">>>",
        }
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for UnOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
