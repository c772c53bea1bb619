//! Statement fragmentation: walks a method body and appends block-structured
//! fragments.
//!
//! Fragments are never edited once pushed. Where the shape of a construct
//! depends on what its body produces (`while (x);` vs. a braced loop), the
//! body is rendered into a detached sequence first. The one exception is an
//! empty catch or finally body: the block is opened optimistically and
//! retracted with [`Fragments::truncate`] if nothing was written into it.

use jfrag_ir::{factory, Fragments, GroupId, GroupIds, Marker, Token};
use jfrag_syntax::{
    CatchClause, Expr, LocalVariableDeclaration, Resource, Stmt, SwitchBlock, SwitchLabel,
    TypeDeclaration,
};

use crate::declaration::{HeaderOnly, TypeDeclarationFragmenter};
use crate::environment::Environment;
use crate::error::{FragmentError, Result};
use crate::expression::TokenRenderer;
use crate::type_ref::Imports;

/// Result of one fragmentation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragmented {
    pub fragments: Fragments,
    pub imports: Imports,
}

/// Position of a clause header whose body block was opened before knowing
/// whether the body is empty.
struct Checkpoint {
    /// Index of the header tokens fragment.
    header_at: usize,
    header: Vec<Token>,
    /// Sequence length right after the start marker.
    after: usize,
}

pub struct StatementFragmenter<'a> {
    env: &'a Environment,
    declarations: &'a dyn TypeDeclarationFragmenter,
    ids: GroupIds,
    imports: Imports,
    fragments: Fragments,
}

impl<'a> StatementFragmenter<'a> {
    pub fn new(env: &'a Environment) -> Self {
        Self::with_declarations(env, &HeaderOnly)
    }

    pub fn with_declarations(
        env: &'a Environment,
        declarations: &'a dyn TypeDeclarationFragmenter,
    ) -> Self {
        Self {
            env,
            declarations,
            ids: GroupIds::new(),
            imports: Imports::new(),
            fragments: Fragments::new(),
        }
    }

    /// Append the fragments of `stmt` to the sequence built so far.
    pub fn fragment(&mut self, stmt: &Stmt) -> Result<()> {
        self.visit(stmt)
    }

    /// Finish the pass, checking that every block opened was closed.
    pub fn finish(self) -> Result<Fragmented> {
        self.fragments.check_balance()?;
        log::trace!("{}", jfrag_ir::dump::outline(&self.fragments));
        log::debug!(
            "{}: {} fragments, {} groups",
            self.env.current_internal_type_name,
            self.fragments.len(),
            self.ids.allocated()
        );
        Ok(Fragmented {
            fragments: self.fragments,
            imports: self.imports,
        })
    }

    fn renderer(&mut self) -> TokenRenderer<'_> {
        TokenRenderer::new(self.env, &mut self.imports)
    }

    fn expression(&mut self, tokens: &mut Vec<Token>, expr: &Expr) {
        self.renderer().expression(tokens, expr);
    }

    /// Run `f` against an empty sequence and return what it produced. The
    /// outer sequence is restored on every path.
    fn probe(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<Fragments> {
        let saved = std::mem::take(&mut self.fragments);
        let result = f(self);
        let produced = std::mem::replace(&mut self.fragments, saved);
        result.map(|()| produced)
    }

    fn visit(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Assert { condition, message } => {
                self.visit_assert(condition, message.as_ref())
            }
            Stmt::Break { label } => {
                self.jump(Token::BREAK, label.as_deref());
                Ok(())
            }
            Stmt::Continue { label } => {
                self.jump(Token::CONTINUE, label.as_deref());
                Ok(())
            }
            Stmt::Comment { text } | Stmt::ByteCode { text } => {
                self.comment(text);
                Ok(())
            }
            Stmt::DoWhile {
                condition,
                statements,
            } => self.visit_do_while(condition, statements.as_deref()),
            Stmt::Expression { expression } => {
                let mut tokens = vec![Token::START_DECLARATION_OR_STATEMENT_BLOCK];
                self.expression(&mut tokens, expression);
                tokens.push(Token::SEMICOLON);
                tokens.push(Token::END_DECLARATION_OR_STATEMENT_BLOCK);
                self.fragments.add_tokens(tokens);
                Ok(())
            }
            Stmt::For {
                declaration,
                init,
                condition,
                update,
                statements,
            } => self.visit_for(
                declaration.as_ref(),
                init.as_ref(),
                condition.as_ref(),
                update.as_ref(),
                statements.as_deref(),
            ),
            Stmt::ForEach {
                ty,
                name,
                expression,
                statements,
            } => {
                let mut header = vec![Token::FOR, Token::SPACE, Token::START_PARAMETERS_BLOCK];
                self.renderer().type_tokens(&mut header, ty);
                header.push(Token::SPACE);
                header.push(Token::text(name.as_str()));
                header.push(Token::SPACE_COLON_SPACE);
                self.expression(&mut header, expression);
                self.loop_statements(header, statements.as_deref())
            }
            Stmt::If {
                condition,
                statements,
            } => self.visit_if(condition, statements.as_deref()),
            Stmt::IfElse {
                condition,
                statements,
                else_statements,
            } => {
                let header = self.condition_header(&[Token::IF], condition);
                self.fragments.add_tokens(header);
                let group = factory::start_statements_block(&mut self.fragments, &mut self.ids);
                self.visit(statements)?;
                factory::end_statements_block(&mut self.fragments, group);
                self.visit_else(else_statements, group)
            }
            Stmt::Label { label, statement } => {
                let mut tokens = vec![Token::text(label.as_str()), Token::COLON];
                match statement {
                    Some(statement) => {
                        tokens.push(Token::SPACE);
                        self.fragments.add_tokens(tokens);
                        self.visit(statement)
                    }
                    None => {
                        self.fragments.add_tokens(tokens);
                        Ok(())
                    }
                }
            }
            Stmt::LambdaExpression { expression } => {
                let mut tokens = Vec::new();
                self.expression(&mut tokens, expression);
                self.fragments.add_tokens(tokens);
                Ok(())
            }
            Stmt::LocalVariableDeclaration(decl) => {
                self.visit_local_variable_declaration(decl);
                Ok(())
            }
            Stmt::Return => {
                self.fragments.add_tokens(vec![Token::RETURN, Token::SEMICOLON]);
                Ok(())
            }
            Stmt::ReturnExpression {
                expression,
                line_number,
            } => {
                let mut tokens = vec![Token::START_DECLARATION_OR_STATEMENT_BLOCK];
                if let Some(line) = line_number {
                    tokens.push(Token::LineNumber(*line));
                }
                tokens.push(Token::RETURN);
                tokens.push(Token::SPACE);
                self.expression(&mut tokens, expression);
                tokens.push(Token::SEMICOLON);
                tokens.push(Token::END_DECLARATION_OR_STATEMENT_BLOCK);
                self.fragments.add_tokens(tokens);
                Ok(())
            }
            Stmt::Statements { statements } => {
                for (i, statement) in statements.iter().enumerate() {
                    if i > 0 {
                        factory::spacer_between_statements(&mut self.fragments);
                    }
                    self.visit(statement)?;
                }
                Ok(())
            }
            Stmt::Switch { condition, blocks } => self.visit_switch(condition, blocks),
            Stmt::Synchronized {
                monitor,
                statements,
            } => {
                let mut header = self.condition_header(&[Token::SYNCHRONIZED], monitor);
                match statements {
                    None => {
                        header.push(Token::SPACE);
                        header.push(Token::LEFT_RIGHT_CURLY_BRACKETS);
                        self.fragments.add_tokens(header);
                        Ok(())
                    }
                    Some(body) => {
                        self.fragments.add_tokens(header);
                        let group =
                            factory::start_statements_block(&mut self.fragments, &mut self.ids);
                        self.visit(body)?;
                        factory::end_statements_block(&mut self.fragments, group);
                        Ok(())
                    }
                }
            }
            Stmt::Throw { expression } => {
                let mut tokens = vec![
                    Token::START_DECLARATION_OR_STATEMENT_BLOCK,
                    Token::THROW,
                    Token::SPACE,
                ];
                self.expression(&mut tokens, expression);
                tokens.push(Token::SEMICOLON);
                tokens.push(Token::END_DECLARATION_OR_STATEMENT_BLOCK);
                self.fragments.add_tokens(tokens);
                Ok(())
            }
            Stmt::Try {
                resources,
                try_statements,
                catch_clauses,
                finally_statements,
            } => self.visit_try(
                resources.as_deref(),
                try_statements,
                catch_clauses,
                finally_statements.as_deref(),
            ),
            Stmt::TypeDeclaration(decl) => {
                self.visit_type_declaration(decl);
                Ok(())
            }
            Stmt::While {
                condition,
                statements,
            } => {
                let mut header = vec![Token::WHILE, Token::SPACE, Token::START_PARAMETERS_BLOCK];
                self.expression(&mut header, condition);
                self.loop_statements(header, statements.as_deref())
            }
        }
    }

    /// `keywords (condition)`.
    fn condition_header(&mut self, keywords: &[Token], condition: &Expr) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(keywords.len() + 8);
        for keyword in keywords {
            tokens.push(keyword.clone());
            tokens.push(Token::SPACE);
        }
        tokens.push(Token::START_PARAMETERS_BLOCK);
        self.expression(&mut tokens, condition);
        tokens.push(Token::END_PARAMETERS_BLOCK);
        tokens
    }

    fn visit_assert(&mut self, condition: &Expr, message: Option<&Expr>) -> Result<()> {
        let mut tokens = vec![
            Token::START_DECLARATION_OR_STATEMENT_BLOCK,
            Token::ASSERT,
            Token::SPACE,
        ];
        self.expression(&mut tokens, condition);
        if let Some(message) = message {
            tokens.push(Token::SPACE_COLON_SPACE);
            self.expression(&mut tokens, message);
        }
        tokens.push(Token::SEMICOLON);
        tokens.push(Token::END_DECLARATION_OR_STATEMENT_BLOCK);
        self.fragments.add_tokens(tokens);
        Ok(())
    }

    fn jump(&mut self, keyword: Token, label: Option<&str>) {
        let mut tokens = vec![keyword];
        if let Some(label) = label {
            tokens.push(Token::SPACE);
            tokens.push(Token::text(label));
        }
        tokens.push(Token::SEMICOLON);
        self.fragments.add_tokens(tokens);
    }

    fn comment(&mut self, text: &str) {
        let mut tokens = vec![Token::StartMarker(Marker::Comment)];
        for (i, line) in text.split('\n').filter(|l| !l.is_empty()).enumerate() {
            if i > 0 {
                tokens.push(Token::NEWLINE_1);
            }
            tokens.push(Token::text(line));
        }
        tokens.push(Token::EndMarker(Marker::Comment));
        self.fragments.add_tokens(tokens);
    }

    fn visit_do_while(&mut self, condition: &Expr, body: Option<&Stmt>) -> Result<()> {
        let group = factory::start_statements_do_while_block(&mut self.fragments, &mut self.ids);
        if let Some(body) = body {
            self.visit(body)?;
        }
        factory::end_statements_do_while_block(&mut self.fragments, group);

        let mut tokens = self.condition_header(&[Token::WHILE], condition);
        tokens.push(Token::SEMICOLON);
        self.fragments.add_tokens(tokens);
        Ok(())
    }

    fn visit_for(
        &mut self,
        declaration: Option<&LocalVariableDeclaration>,
        init: Option<&Expr>,
        condition: Option<&Expr>,
        update: Option<&Expr>,
        body: Option<&Stmt>,
    ) -> Result<()> {
        let mut header = vec![Token::FOR, Token::SPACE, Token::START_PARAMETERS_BLOCK];
        if let Some(declaration) = declaration {
            self.renderer().local_variable_declaration(&mut header, declaration);
        }
        if let Some(init) = init {
            self.expression(&mut header, init);
        }
        for part in [condition, update] {
            match part {
                None => header.push(Token::SEMICOLON),
                Some(expr) => {
                    header.push(Token::SEMICOLON_SPACE);
                    self.expression(&mut header, expr);
                }
            }
        }
        self.loop_statements(header, body)
    }

    /// Close a loop header (its parameters block is still open) and emit the
    /// body: `;` on the header when the body renders nothing, an unbraced
    /// body for a single fragment, a braced one otherwise.
    fn loop_statements(&mut self, mut header: Vec<Token>, body: Option<&Stmt>) -> Result<()> {
        header.push(Token::END_PARAMETERS_BLOCK);
        let produced = match body {
            Some(body) => self.probe(|this| this.visit(body))?,
            None => Fragments::new(),
        };
        match produced.len() {
            0 => {
                log::debug!("empty loop body collapsed to `;`");
                header.push(Token::SEMICOLON);
                self.fragments.add_tokens(header);
            }
            1 => {
                self.fragments.add_tokens(header);
                let group =
                    factory::start_single_statement_block(&mut self.fragments, &mut self.ids);
                self.fragments.append(produced);
                factory::end_single_statement_block(&mut self.fragments, group);
            }
            _ => {
                self.fragments.add_tokens(header);
                let group = factory::start_statements_block(&mut self.fragments, &mut self.ids);
                self.fragments.append(produced);
                factory::end_statements_block(&mut self.fragments, group);
            }
        }
        Ok(())
    }

    /// The body shape follows the statement count of a list body, not the
    /// number of fragments it renders to.
    fn visit_if(&mut self, condition: &Expr, body: Option<&Stmt>) -> Result<()> {
        let header = self.condition_header(&[Token::IF], condition);
        self.fragments.add_tokens(header);

        let Some(body) = body else {
            log::debug!("if without body collapsed to `;`");
            self.fragments.add_tokens(vec![Token::SEMICOLON]);
            return Ok(());
        };
        let count = match body {
            Stmt::Statements { statements } => statements.len(),
            _ => 1,
        };
        match count {
            0 => {
                log::debug!("empty if body collapsed to `;`");
                self.fragments.add_tokens(vec![Token::SEMICOLON]);
            }
            1 => {
                let group =
                    factory::start_single_statement_block(&mut self.fragments, &mut self.ids);
                self.visit(body)?;
                factory::end_single_statement_block(&mut self.fragments, group);
            }
            _ => {
                let group = factory::start_statements_block(&mut self.fragments, &mut self.ids);
                self.visit(body)?;
                factory::end_statements_block(&mut self.fragments, group);
            }
        }
        Ok(())
    }

    /// Else branches reuse the group of the `if` that opened the chain. An
    /// `if` or `if`-`else` alone in the else branch becomes `else if`.
    fn visit_else(&mut self, else_statements: &Stmt, group: GroupId) -> Result<()> {
        match else_statements.unwrap_singleton() {
            Stmt::IfElse {
                condition,
                statements,
                else_statements: next,
            } => {
                let header = self.condition_header(&[Token::ELSE, Token::IF], condition);
                self.fragments.add_tokens(header);
                factory::reopen_statements_block(&mut self.fragments, group);
                self.visit(statements)?;
                factory::end_statements_block(&mut self.fragments, group);
                self.visit_else(next, group)
            }
            Stmt::If {
                condition,
                statements,
            } => {
                let header = self.condition_header(&[Token::ELSE, Token::IF], condition);
                self.fragments.add_tokens(header);
                factory::reopen_statements_block(&mut self.fragments, group);
                if let Some(statements) = statements {
                    self.visit(statements)?;
                }
                factory::end_statements_block(&mut self.fragments, group);
                Ok(())
            }
            _ => {
                self.fragments.add_tokens(vec![Token::ELSE]);
                factory::reopen_statements_block(&mut self.fragments, group);
                self.visit(else_statements)?;
                factory::end_statements_block(&mut self.fragments, group);
                Ok(())
            }
        }
    }

    fn visit_local_variable_declaration(&mut self, decl: &LocalVariableDeclaration) {
        let mut tokens = vec![Token::START_DECLARATION_OR_STATEMENT_BLOCK];
        self.renderer().local_variable_declaration(&mut tokens, decl);
        tokens.push(Token::SEMICOLON);
        tokens.push(Token::END_DECLARATION_OR_STATEMENT_BLOCK);
        self.fragments.add_tokens(tokens);
    }

    fn visit_switch(&mut self, condition: &Expr, blocks: &[SwitchBlock]) -> Result<()> {
        let header = self.condition_header(&[Token::SWITCH], condition);
        self.fragments.add_tokens(header);
        let group = factory::start_statements_block(&mut self.fragments, &mut self.ids);
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                factory::spacer_between_switch_label_blocks(&mut self.fragments);
            }
            let statements = match block {
                SwitchBlock::Label { label, statements } => {
                    self.switch_label(label);
                    statements
                }
                SwitchBlock::MultiLabels { labels, statements } => {
                    for (j, label) in labels.iter().enumerate() {
                        if j > 0 {
                            factory::spacer_between_switch_labels(&mut self.fragments);
                        }
                        self.switch_label(label);
                    }
                    statements
                }
            };
            factory::spacer_after_switch_label(&mut self.fragments);
            self.visit(statements)?;
            factory::spacer_after_switch_block(&mut self.fragments);
        }
        factory::end_statements_block(&mut self.fragments, group);
        factory::spacer_after_end_statements_block(&mut self.fragments);
        Ok(())
    }

    fn switch_label(&mut self, label: &SwitchLabel) {
        let tokens = match label {
            SwitchLabel::Default => vec![Token::DEFAULT, Token::COLON],
            SwitchLabel::Expression { expression } => {
                let mut tokens = vec![Token::CASE, Token::SPACE];
                self.expression(&mut tokens, expression);
                tokens.push(Token::COLON);
                tokens
            }
        };
        self.fragments.add_tokens(tokens);
    }

    fn visit_try(
        &mut self,
        resources: Option<&[Resource]>,
        try_statements: &Stmt,
        catch_clauses: &[CatchClause],
        finally_statements: Option<&Stmt>,
    ) -> Result<()> {
        // A plain `try` body opens as a try block; every later body, and a
        // resource body, is a statements block of the same group.
        let mut end_body: fn(&mut Fragments, GroupId) = factory::end_statements_block;
        let (group, mut checkpoint) = match resources {
            None => {
                end_body = factory::end_statements_try_block;
                (
                    factory::start_statements_try_block(&mut self.fragments, &mut self.ids),
                    None,
                )
            }
            Some([]) => return Err(FragmentError::EmptyResourceList),
            Some(resources) => {
                let mut header = vec![Token::TRY];
                if resources.len() == 1 {
                    header.push(Token::SPACE);
                }
                factory::start_resources_block(&mut header);
                for (i, resource) in resources.iter().enumerate() {
                    if i > 0 {
                        header.push(Token::SEMICOLON_SPACE);
                    }
                    self.resource(&mut header, resource);
                }
                factory::end_resources_block(&mut header);
                let (group, checkpoint) = self.open_clause(header, None);
                (group, Some(checkpoint))
            }
        };

        self.visit(try_statements)?;
        for clause in catch_clauses {
            end_body(&mut self.fragments, group);
            end_body = factory::end_statements_block;
            let header = self.catch_header(clause);
            checkpoint = Some(self.open_clause(header, Some(group)).1);
            self.visit(&clause.statements)?;
        }
        if let Some(finally_statements) = finally_statements {
            end_body(&mut self.fragments, group);
            end_body = factory::end_statements_block;
            checkpoint = Some(self.open_clause(vec![Token::FINALLY], Some(group)).1);
            self.visit(finally_statements)?;
        }

        match checkpoint {
            Some(checkpoint) if checkpoint.after == self.fragments.len() => {
                log::debug!("empty clause body collapsed to `{{}}`");
                self.fragments.truncate(checkpoint.header_at);
                let mut header = checkpoint.header;
                header.push(Token::SPACE);
                header.push(Token::LEFT_RIGHT_CURLY_BRACKETS);
                self.fragments.add_tokens(header);
            }
            _ => end_body(&mut self.fragments, group),
        }
        Ok(())
    }

    /// Push a clause header and open its body, in a fresh group or by
    /// reopening `group`.
    fn open_clause(
        &mut self,
        header: Vec<Token>,
        group: Option<GroupId>,
    ) -> (GroupId, Checkpoint) {
        let header_at = self.fragments.len();
        self.fragments.add_tokens(header.clone());
        let group = match group {
            Some(group) => {
                factory::reopen_statements_block(&mut self.fragments, group);
                group
            }
            None => factory::start_statements_block(&mut self.fragments, &mut self.ids),
        };
        let checkpoint = Checkpoint {
            header_at,
            header,
            after: self.fragments.len(),
        };
        (group, checkpoint)
    }

    /// `catch (A | B name)`, with the source line appended when known.
    fn catch_header(&mut self, clause: &CatchClause) -> Vec<Token> {
        let mut tokens = vec![Token::CATCH, Token::SPACE_LEFT_ROUND_BRACKET];
        let mut renderer = self.renderer();
        renderer.object_type(&mut tokens, &clause.ty);
        for other in &clause.other_types {
            tokens.push(Token::VERTICAL_LINE);
            renderer.object_type(&mut tokens, other);
        }
        tokens.push(Token::SPACE);
        tokens.push(Token::text(clause.name.as_str()));
        tokens.push(Token::RIGHT_ROUND_BRACKET);
        if let Some(line) = clause.line_number {
            tokens.push(Token::LineNumber(line));
        }
        tokens
    }

    fn resource(&mut self, tokens: &mut Vec<Token>, resource: &Resource) {
        if let Some(line) = resource.line_number {
            tokens.push(Token::LineNumber(line));
        }
        self.renderer().object_type(tokens, &resource.ty);
        tokens.push(Token::SPACE);
        tokens.push(Token::text(resource.name.as_str()));
        tokens.push(Token::SPACE_EQUAL_SPACE);
        self.expression(tokens, &resource.expression);
    }

    fn visit_type_declaration(&mut self, decl: &TypeDeclaration) {
        self.declarations
            .fragment_type_declaration(decl, self.env, &mut self.fragments);
        self.fragments.add_tokens(vec![Token::SEMICOLON]);
    }
}
