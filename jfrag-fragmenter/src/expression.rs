//! Expression to token rendering.

use std::fmt::Write;

use jfrag_ir::Token;
use jfrag_syntax::{Expr, LocalVariableDeclaration};

use crate::environment::Environment;
use crate::type_ref::Imports;

/// Renders expressions and types into token runs. Object types seen along
/// the way are recorded in the import set.
pub struct TokenRenderer<'a> {
    pub(crate) env: &'a Environment,
    pub(crate) imports: &'a mut Imports,
}

impl<'a> TokenRenderer<'a> {
    pub fn new(env: &'a Environment, imports: &'a mut Imports) -> Self {
        Self { env, imports }
    }

    pub fn expression(&mut self, out: &mut Vec<Token>, expr: &Expr) {
        match expr {
            Expr::Boolean { value } => out.push(if *value { Token::TRUE } else { Token::FALSE }),
            Expr::Integer { value } => out.push(Token::text(value.to_string())),
            Expr::Long { value } => out.push(Token::text(format!("{value}L"))),
            Expr::Double { value } => out.push(Token::text(double_literal(*value))),
            Expr::Char { value } => {
                let escaped = escape(&value.to_string(), '\'');
                out.push(Token::text(format!("'{escaped}'")));
            }
            Expr::String { value } => {
                out.push(Token::text(format!("\"{}\"", escape(value, '"'))));
            }
            Expr::Null => out.push(Token::NULL),
            Expr::This => out.push(Token::THIS),
            Expr::Name { name } => out.push(Token::text(name.as_str())),
            Expr::Field { object, name } => {
                if let Some(object) = object {
                    self.receiver(out, object);
                    out.push(Token::DOT);
                }
                out.push(Token::text(name.as_str()));
            }
            Expr::MethodInvocation {
                object,
                name,
                arguments,
            } => {
                if let Some(object) = object {
                    self.receiver(out, object);
                    out.push(Token::DOT);
                }
                out.push(Token::text(name.as_str()));
                self.arguments(out, arguments);
            }
            Expr::New { ty, arguments } => {
                out.push(Token::NEW);
                out.push(Token::SPACE);
                self.object_type(out, ty);
                self.arguments(out, arguments);
            }
            Expr::Binary {
                operator,
                left,
                right,
            } => {
                self.operand(out, left);
                out.push(Token::SPACE);
                out.push(Token::Text(operator.as_str().into()));
                out.push(Token::SPACE);
                self.operand(out, right);
            }
            Expr::Unary { operator, expr } => {
                if operator.is_postfix() {
                    self.operand(out, expr);
                    out.push(Token::Text(operator.as_str().into()));
                } else {
                    let sign = operator.as_str();
                    out.push(Token::Text(sign.into()));
                    let mut operand = Vec::new();
                    self.operand(&mut operand, expr);
                    if fuses_with(sign, &operand) {
                        out.push(Token::LEFT_ROUND_BRACKET);
                        out.extend(operand);
                        out.push(Token::RIGHT_ROUND_BRACKET);
                    } else {
                        out.extend(operand);
                    }
                }
            }
            Expr::Assignment {
                operator,
                target,
                value,
            } => {
                self.expression(out, target);
                match operator {
                    None => out.push(Token::SPACE_EQUAL_SPACE),
                    Some(op) => out.push(Token::text(format!(" {op}= "))),
                }
                self.expression(out, value);
            }
            Expr::Cast { ty, expr } => {
                out.push(Token::LEFT_ROUND_BRACKET);
                self.type_tokens(out, ty);
                out.push(Token::RIGHT_ROUND_BRACKET);
                self.operand(out, expr);
            }
            Expr::InstanceOf { expr, ty } => {
                self.operand(out, expr);
                out.push(Token::SPACE);
                out.push(Token::INSTANCEOF);
                out.push(Token::SPACE);
                self.type_tokens(out, ty);
            }
            Expr::Conditional {
                condition,
                then_expr,
                else_expr,
            } => {
                self.operand(out, condition);
                out.push(Token::SPACE_QUESTION_SPACE);
                self.operand(out, then_expr);
                out.push(Token::SPACE_COLON_SPACE);
                self.operand(out, else_expr);
            }
            Expr::ArrayAccess { array, index } => {
                if matches!(**array, Expr::New { .. }) {
                    out.push(Token::LEFT_ROUND_BRACKET);
                    self.expression(out, array);
                    out.push(Token::RIGHT_ROUND_BRACKET);
                } else {
                    self.receiver(out, array);
                }
                out.push(Token::LEFT_SQUARE_BRACKET);
                self.expression(out, index);
                out.push(Token::RIGHT_SQUARE_BRACKET);
            }
            Expr::TypeReference { ty } => self.type_tokens(out, ty),
            Expr::Lambda { parameters, body } => {
                if let [single] = parameters.as_slice() {
                    out.push(Token::text(single.as_str()));
                } else {
                    out.push(Token::LEFT_ROUND_BRACKET);
                    out.push(Token::text(parameters.join(", ")));
                    out.push(Token::RIGHT_ROUND_BRACKET);
                }
                out.push(Token::SPACE_ARROW_SPACE);
                self.expression(out, body);
            }
        }
    }

    /// Nested operand; compound expressions are parenthesized.
    fn operand(&mut self, out: &mut Vec<Token>, expr: &Expr) {
        match expr {
            Expr::Binary { .. }
            | Expr::Conditional { .. }
            | Expr::Assignment { .. }
            | Expr::Cast { .. }
            | Expr::InstanceOf { .. }
            | Expr::Lambda { .. } => {
                out.push(Token::LEFT_ROUND_BRACKET);
                self.expression(out, expr);
                out.push(Token::RIGHT_ROUND_BRACKET);
            }
            _ => self.expression(out, expr),
        }
    }

    /// Qualifier of a member access or array access; prefix and postfix
    /// operators bind looser than `.` and `[]`.
    fn receiver(&mut self, out: &mut Vec<Token>, expr: &Expr) {
        if matches!(expr, Expr::Unary { .. }) {
            out.push(Token::LEFT_ROUND_BRACKET);
            self.expression(out, expr);
            out.push(Token::RIGHT_ROUND_BRACKET);
        } else {
            self.operand(out, expr);
        }
    }

    fn arguments(&mut self, out: &mut Vec<Token>, arguments: &[Expr]) {
        out.push(Token::START_PARAMETERS_BLOCK);
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                out.push(Token::COMMA_SPACE);
            }
            self.expression(out, argument);
        }
        out.push(Token::END_PARAMETERS_BLOCK);
    }

    /// `[final ]Type a = x, b[]`, without the trailing `;`.
    pub fn local_variable_declaration(
        &mut self,
        out: &mut Vec<Token>,
        decl: &LocalVariableDeclaration,
    ) {
        if decl.is_final() {
            out.push(Token::FINAL);
            out.push(Token::SPACE);
        }
        self.type_tokens(out, &decl.ty);
        out.push(Token::SPACE);
        for (i, declarator) in decl.declarators.iter().enumerate() {
            if i > 0 {
                out.push(Token::COMMA_SPACE);
            }
            out.push(Token::text(declarator.name.as_str()));
            for _ in 0..declarator.dimension {
                out.push(Token::DIMENSION);
            }
            if let Some(initializer) = &declarator.initializer {
                out.push(Token::SPACE_EQUAL_SPACE);
                self.expression(out, initializer);
            }
        }
    }
}

/// True when `operand` would merge with a preceding `-`/`+` operator into
/// another token, as in `-` `-x` read back as `--x`.
fn fuses_with(sign: &str, operand: &[Token]) -> bool {
    let Some(last) = sign.chars().last() else {
        return false;
    };
    if last != '-' && last != '+' {
        return false;
    }
    operand
        .first()
        .and_then(|token| token.as_text().chars().next())
        == Some(last)
}

fn double_literal(value: f64) -> String {
    if value.is_nan() {
        "Double.NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Double.POSITIVE_INFINITY".to_string()
        } else {
            "Double.NEGATIVE_INFINITY".to_string()
        }
    } else {
        format!("{value:?}")
    }
}

/// Java escapes for a string or char literal delimited by `quote`.
fn escape(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
