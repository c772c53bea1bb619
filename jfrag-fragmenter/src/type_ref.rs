//! Type references: tokens for types and type arguments, plus the set of
//! imports they require.

use std::collections::BTreeMap;

use jfrag_ir::{ReferenceToken, Token};
use jfrag_syntax::{InnerObjectType, ObjectType, Type, TypeArgument, TypeArgumentVisitor, Types};

use crate::environment::Environment;
use crate::expression::TokenRenderer;

const JAVA_LANG: &str = "java/lang";

/// Types a method body refers to that need an `import` in the enclosing
/// compilation unit, keyed by internal name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    qualified_names: BTreeMap<String, String>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ty` unless it is implicitly visible: `java.lang`, the current
    /// package, or the default package.
    pub fn add(&mut self, ty: &ObjectType, env: &Environment) {
        let package = ty.package();
        if package.is_empty() || package == JAVA_LANG || package == env.package() {
            return;
        }
        self.qualified_names
            .insert(ty.internal_name.clone(), ty.qualified_name.clone());
    }

    pub fn contains(&self, internal_name: &str) -> bool {
        self.qualified_names.contains_key(internal_name)
    }

    pub fn len(&self) -> usize {
        self.qualified_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qualified_names.is_empty()
    }

    /// Internal names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.qualified_names.keys().map(String::as_str)
    }

    /// Dotted names as they appear in `import` declarations, ordered by
    /// internal name.
    pub fn qualified_names(&self) -> impl Iterator<Item = &str> {
        self.qualified_names.values().map(String::as_str)
    }
}

impl TokenRenderer<'_> {
    pub fn type_tokens(&mut self, out: &mut Vec<Token>, ty: &Type) {
        match ty {
            Type::Primitive(p) => {
                out.push(Token::Keyword(p.kind.keyword()));
                dimension(out, p.dimension);
            }
            Type::Object(o) => self.object_type(out, o),
            Type::InnerObject(i) => self.inner_object_type(out, i),
            Type::Generic(g) => {
                out.push(Token::text(g.name.as_str()));
                dimension(out, g.dimension);
            }
        }
    }

    /// `Name<Args>[]...`, recording the import.
    pub fn object_type(&mut self, out: &mut Vec<Token>, ty: &ObjectType) {
        self.imports.add(ty, self.env);
        out.push(self.reference(ty));
        self.type_arguments(out, ty.type_arguments.as_deref());
        dimension(out, ty.dimension);
    }

    fn inner_object_type(&mut self, out: &mut Vec<Token>, ty: &InnerObjectType) {
        self.type_tokens(out, &ty.outer);
        out.push(Token::DOT);
        out.push(self.reference(&ty.inner));
        self.type_arguments(out, ty.inner.type_arguments.as_deref());
        dimension(out, ty.inner.dimension);
    }

    fn reference(&self, ty: &ObjectType) -> Token {
        Token::Reference(ReferenceToken {
            internal_name: ty.internal_name.clone(),
            name: ty.name.clone(),
            owner_internal_name: Some(self.env.current_internal_type_name.clone()),
        })
    }

    fn type_arguments(&mut self, out: &mut Vec<Token>, arguments: Option<&TypeArgument>) {
        let Some(arguments) = arguments else {
            return;
        };
        out.push(Token::LEFT_ANGLE_BRACKET);
        arguments.accept(&mut ArgumentTokens {
            renderer: self,
            out: &mut *out,
        });
        out.push(Token::RIGHT_ANGLE_BRACKET);
    }
}

fn dimension(out: &mut Vec<Token>, dimension: u32) {
    for _ in 0..dimension {
        out.push(Token::DIMENSION);
    }
}

struct ArgumentTokens<'r, 'a> {
    renderer: &'r mut TokenRenderer<'a>,
    out: &'r mut Vec<Token>,
}

impl ArgumentTokens<'_, '_> {
    fn wildcard_bound(&mut self, keyword: Token, bound: &Type) {
        self.out.push(Token::QUESTION_MARK);
        self.out.push(Token::SPACE);
        self.out.push(keyword);
        self.out.push(Token::SPACE);
        self.renderer.type_tokens(self.out, bound);
    }
}

impl TypeArgumentVisitor for ArgumentTokens<'_, '_> {
    fn visit_type(&mut self, ty: &Type) {
        self.renderer.type_tokens(self.out, ty);
    }

    fn visit_wildcard(&mut self) {
        self.out.push(Token::QUESTION_MARK);
    }

    fn visit_wildcard_extends(&mut self, bound: &Type) {
        self.wildcard_bound(Token::EXTENDS, bound);
    }

    fn visit_wildcard_super(&mut self, bound: &Type) {
        self.wildcard_bound(Token::SUPER, bound);
    }

    fn visit_types(&mut self, types: &Types) {
        for (i, argument) in types.iter().enumerate() {
            if i > 0 {
                self.out.push(Token::COMMA_SPACE);
            }
            argument.accept(self);
        }
    }
}
