use std::borrow::Cow;

/// Atomic printable unit shared with the text layout stage.
///
/// Fixed keywords and punctuation are `const` values borrowing static
/// strings, so emitting them never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Keyword(&'static str),
    Text(Cow<'static, str>),
    /// A named type; the layout stage decides how to qualify it.
    Reference(ReferenceToken),
    StartBlock(BlockToken),
    EndBlock(BlockToken),
    StartMarker(Marker),
    EndMarker(Marker),
    /// Forced line breaks.
    NewLine(u32),
    /// Source line the following tokens came from.
    LineNumber(u32),
}

/// Inline groupings inside a single tokens fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockToken {
    /// `( ... )` around a condition or argument list.
    Parameters,
    /// One declaration or simple statement; lets the layout keep it together.
    DeclarationOrStatement,
    /// `( ... )` around try-with-resources declarations.
    Resources,
}

impl BlockToken {
    pub fn open_text(self) -> &'static str {
        match self {
            BlockToken::Parameters | BlockToken::Resources => "(",
            BlockToken::DeclarationOrStatement => "",
        }
    }

    pub fn close_text(self) -> &'static str {
        match self {
            BlockToken::Parameters | BlockToken::Resources => ")",
            BlockToken::DeclarationOrStatement => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceToken {
    pub internal_name: String,
    /// Text to print.
    pub name: String,
    /// Internal name of the type being decompiled.
    pub owner_internal_name: Option<String>,
}

impl Token {
    pub const SPACE: Token = Token::Text(Cow::Borrowed(" "));
    pub const SEMICOLON: Token = Token::Text(Cow::Borrowed(";"));
    pub const SEMICOLON_SPACE: Token = Token::Text(Cow::Borrowed("; "));
    pub const COLON: Token = Token::Text(Cow::Borrowed(":"));
    pub const SPACE_COLON_SPACE: Token = Token::Text(Cow::Borrowed(" : "));
    pub const SPACE_EQUAL_SPACE: Token = Token::Text(Cow::Borrowed(" = "));
    pub const SPACE_ARROW_SPACE: Token = Token::Text(Cow::Borrowed(" -> "));
    pub const SPACE_QUESTION_SPACE: Token = Token::Text(Cow::Borrowed(" ? "));
    pub const COMMA_SPACE: Token = Token::Text(Cow::Borrowed(", "));
    pub const DOT: Token = Token::Text(Cow::Borrowed("."));
    pub const VERTICAL_LINE: Token = Token::Text(Cow::Borrowed("|"));
    pub const LEFT_ROUND_BRACKET: Token = Token::Text(Cow::Borrowed("("));
    pub const SPACE_LEFT_ROUND_BRACKET: Token = Token::Text(Cow::Borrowed(" ("));
    pub const RIGHT_ROUND_BRACKET: Token = Token::Text(Cow::Borrowed(")"));
    pub const LEFT_SQUARE_BRACKET: Token = Token::Text(Cow::Borrowed("["));
    pub const RIGHT_SQUARE_BRACKET: Token = Token::Text(Cow::Borrowed("]"));
    pub const DIMENSION: Token = Token::Text(Cow::Borrowed("[]"));
    pub const LEFT_ANGLE_BRACKET: Token = Token::Text(Cow::Borrowed("<"));
    pub const RIGHT_ANGLE_BRACKET: Token = Token::Text(Cow::Borrowed(">"));
    pub const QUESTION_MARK: Token = Token::Text(Cow::Borrowed("?"));
    pub const LEFT_RIGHT_CURLY_BRACKETS: Token = Token::Text(Cow::Borrowed("{}"));

    pub const ASSERT: Token = Token::Keyword("assert");
    pub const BREAK: Token = Token::Keyword("break");
    pub const CASE: Token = Token::Keyword("case");
    pub const CATCH: Token = Token::Keyword("catch");
    pub const CONTINUE: Token = Token::Keyword("continue");
    pub const DEFAULT: Token = Token::Keyword("default");
    pub const ELSE: Token = Token::Keyword("else");
    pub const EXTENDS: Token = Token::Keyword("extends");
    pub const FINAL: Token = Token::Keyword("final");
    pub const FINALLY: Token = Token::Keyword("finally");
    pub const FOR: Token = Token::Keyword("for");
    pub const IF: Token = Token::Keyword("if");
    pub const INSTANCEOF: Token = Token::Keyword("instanceof");
    pub const NEW: Token = Token::Keyword("new");
    pub const NULL: Token = Token::Keyword("null");
    pub const RETURN: Token = Token::Keyword("return");
    pub const SUPER: Token = Token::Keyword("super");
    pub const SWITCH: Token = Token::Keyword("switch");
    pub const SYNCHRONIZED: Token = Token::Keyword("synchronized");
    pub const THIS: Token = Token::Keyword("this");
    pub const THROW: Token = Token::Keyword("throw");
    pub const TRUE: Token = Token::Keyword("true");
    pub const FALSE: Token = Token::Keyword("false");
    pub const TRY: Token = Token::Keyword("try");
    pub const WHILE: Token = Token::Keyword("while");

    pub const START_PARAMETERS_BLOCK: Token = Token::StartBlock(BlockToken::Parameters);
    pub const END_PARAMETERS_BLOCK: Token = Token::EndBlock(BlockToken::Parameters);
    pub const START_DECLARATION_OR_STATEMENT_BLOCK: Token =
        Token::StartBlock(BlockToken::DeclarationOrStatement);
    pub const END_DECLARATION_OR_STATEMENT_BLOCK: Token =
        Token::EndBlock(BlockToken::DeclarationOrStatement);
    pub const NEWLINE_1: Token = Token::NewLine(1);

    /// Owned text, for identifiers and literals.
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text(Cow::Owned(text.into()))
    }

    /// Printable text of this token as the layout stage would write it.
    /// Line-number tokens have none.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Token::Keyword(kw) => Cow::Borrowed(*kw),
            Token::Text(text) => Cow::Borrowed(text.as_ref()),
            Token::Reference(r) => Cow::Borrowed(r.name.as_str()),
            Token::StartBlock(b) => Cow::Borrowed(b.open_text()),
            Token::EndBlock(b) => Cow::Borrowed(b.close_text()),
            Token::StartMarker(Marker::Comment) => Cow::Borrowed("/* "),
            Token::EndMarker(Marker::Comment) => Cow::Borrowed(" */"),
            Token::NewLine(count) => Cow::Owned("\n".repeat(*count as usize)),
            Token::LineNumber(_) => Cow::Borrowed(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_borrow() {
        assert!(matches!(Token::SEMICOLON, Token::Text(Cow::Borrowed(";"))));
        assert_eq!(Token::text(";"), Token::SEMICOLON);
    }

    #[test]
    fn block_tokens_print_brackets() {
        assert_eq!(Token::START_PARAMETERS_BLOCK.as_text(), "(");
        assert_eq!(Token::EndBlock(BlockToken::Resources).as_text(), ")");
        assert_eq!(Token::START_DECLARATION_OR_STATEMENT_BLOCK.as_text(), "");
        assert_eq!(Token::LineNumber(12).as_text(), "");
        assert_eq!(Token::NewLine(2).as_text(), "\n\n");
    }
}
