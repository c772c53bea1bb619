use jfrag_ir::{Fragments, ReferenceToken, Token};
use jfrag_syntax::TypeDeclaration;

use crate::environment::Environment;

/// Renders a local class, interface or enum declared inside a method body.
/// The statement engine appends the trailing `;` fragment itself.
pub trait TypeDeclarationFragmenter {
    fn fragment_type_declaration(
        &self,
        declaration: &TypeDeclaration,
        env: &Environment,
        out: &mut Fragments,
    );
}

/// Header-only rendering: `modifiers kind Name {}`. Member bodies belong to
/// the class-level fragmenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderOnly;

impl TypeDeclarationFragmenter for HeaderOnly {
    fn fragment_type_declaration(
        &self,
        declaration: &TypeDeclaration,
        env: &Environment,
        out: &mut Fragments,
    ) {
        let mut tokens = Vec::new();
        for keyword in declaration.modifiers.keywords() {
            tokens.push(Token::Keyword(keyword));
            tokens.push(Token::SPACE);
        }
        tokens.push(Token::Keyword(declaration.type_kind.keyword()));
        tokens.push(Token::SPACE);
        tokens.push(Token::Reference(ReferenceToken {
            internal_name: declaration.internal_name.clone(),
            name: declaration.name.clone(),
            owner_internal_name: Some(env.current_internal_type_name.clone()),
        }));
        tokens.push(Token::SPACE);
        tokens.push(Token::LEFT_RIGHT_CURLY_BRACKETS);
        out.add_tokens(tokens);
    }
}
