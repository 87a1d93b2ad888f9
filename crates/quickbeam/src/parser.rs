//! Pratt parser turning a token stream into a [`Program`]
//!
//! The parser never fails outright. Each malformed construct records a
//! [`ParseError`] and yields nothing; the statement loop then skips to the
//! next statement boundary and keeps going, so one call reports every
//! diagnostic in the input together with a best-effort program.

mod precedence;

pub use precedence::Precedence;

use std::mem;
use std::rc::Rc;

use crate::ast::{BlockStatement, Expression, InfixOperator, PrefixOperator, Program, Statement};
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::stack::ensure_sufficient_stack;
use crate::token::{Token, TokenKind};

type PrefixParseFn<I> = fn(&mut Parser<I>) -> Option<Expression>;
type InfixParseFn<I> = fn(&mut Parser<I>, Expression) -> Option<Expression>;

/// Parse source text in one step.
///
/// # Example
///
/// ```
/// let (program, errors) = quickbeam::parse("let x = 5; x * 2;");
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Precedence-climbing parser with two tokens of lookahead.
pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    cur_token: Token,
    peek_token: Token,
    /// Number of `{` still open at the current token.
    depth: usize,
    errors: Vec<ParseError>,
}

impl<'a> Parser<Lexer<'a>> {
    /// Create a parser reading directly from source text.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(Lexer::new(source))
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Create a parser over any token stream.
    ///
    /// A stream that ends without an `Eof` token is treated as if it had one.
    pub fn new(tokens: I) -> Self {
        let mut parser = Self {
            tokens,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            depth: 0,
            errors: Vec::new(),
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Diagnostics recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consume the parser, returning its diagnostics.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parse statements until end of input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(stmt) => program.statements.push(stmt),
                None => self.synchronize(0),
            }
            self.next_token();
        }

        program
    }

    // ═══════════════════════════════════════════════════════════════════
    // Token Cursor
    // ═══════════════════════════════════════════════════════════════════

    fn next_token(&mut self) {
        let next = self.tokens.next().unwrap_or_else(Token::eof);
        self.cur_token = mem::replace(&mut self.peek_token, next);

        match self.cur_token.kind {
            TokenKind::LBrace => self.depth += 1,
            TokenKind::RBrace => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advance if the peek token is `kind`; otherwise record a diagnostic.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.record(ParseError::UnexpectedToken {
                expected: kind,
                got: self.peek_token.kind,
            });
            false
        }
    }

    fn record(&mut self, error: ParseError) {
        tracing::debug!(%error, "parse error");
        self.errors.push(error);
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    /// Skip the rest of a failed statement in the statement list at brace
    /// depth `level`.
    ///
    /// Braces opened inside the skipped text are skipped with it. Stops on a
    /// `;` at `level`, just before the `}` that closes `level`, on that `}`
    /// itself if it is already current, or at end of input.
    fn synchronize(&mut self, level: usize) {
        loop {
            if self.cur_token_is(TokenKind::Eof) || self.depth < level {
                return;
            }
            if self.depth == level
                && (self.cur_token_is(TokenKind::Semicolon) || self.peek_token_is(TokenKind::RBrace))
            {
                return;
            }
            self.next_token();
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Statements
    // ═══════════════════════════════════════════════════════════════════

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::LBrace => Some(Statement::Block(self.parse_block_statement())),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.cur_token.literal.clone();

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Return(value))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Some(Statement::Expression(expr))
    }

    fn skip_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Parse `{ ... }` with the current token on `{`.
    ///
    /// Ends with the current token on `}` (or `Eof` if the block is unterminated).
    fn parse_block_statement(&mut self) -> BlockStatement {
        ensure_sufficient_stack(|| {
            let level = self.depth;
            let mut block = BlockStatement::default();
            self.next_token();

            while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
                match self.parse_statement() {
                    Some(stmt) => block.statements.push(stmt),
                    None => {
                        self.synchronize(level);
                        if self.depth < level {
                            break;
                        }
                    }
                }
                self.next_token();
            }

            block
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Expressions
    // ═══════════════════════════════════════════════════════════════════

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| {
            let Some(prefix) = Self::prefix_parse_fn(self.cur_token.kind) else {
                self.record(ParseError::NoPrefixParser(self.cur_token.kind));
                return None;
            };
            let mut left = prefix(self)?;

            while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
                let Some(infix) = Self::infix_parse_fn(self.peek_token.kind) else {
                    return Some(left);
                };
                self.next_token();
                left = infix(self, left)?;
            }

            Some(left)
        })
    }

    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<I>> {
        let handler: PrefixParseFn<I> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            _ => return None,
        };
        Some(handler)
    }

    fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<I>> {
        let handler: InfixParseFn<I> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            TokenKind::LBracket => Self::parse_index_expression,
            _ => return None,
        };
        Some(handler)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(self.cur_token.literal.clone()))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.cur_token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                self.record(ParseError::InvalidInteger(self.cur_token.literal.clone()));
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::StringLiteral(self.cur_token.literal.clone()))
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::BooleanLiteral(self.cur_token_is(TokenKind::True)))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = prefix_operator(self.cur_token.kind)?;
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix {
            operator,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = infix_operator(self.cur_token.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expression::ArrayLiteral(elements))
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral {
            parameters,
            body: Rc::new(body),
        })
    }

    /// Parse `a, b, c)` with the current token on `(`.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        parameters.push(self.cur_token.literal.clone());

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            parameters.push(self.cur_token.literal.clone());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expression::Call {
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.next_token();

        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }
        Some(Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    /// Parse comma-separated expressions up to `end`, with the current
    /// token on the opening delimiter.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }
}

fn prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Bang => Some(PrefixOperator::Bang),
        TokenKind::Minus => Some(PrefixOperator::Minus),
        _ => None,
    }
}

fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        _ => None,
    }
}
