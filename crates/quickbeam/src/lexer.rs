//! Character-level scanner turning source text into a token stream

use std::iter::Peekable;
use std::str::Chars;

use crate::token::{lookup_ident, Token, TokenKind};

/// Lexer over a source string.
///
/// Implements `Iterator<Item = Token>`; the stream always ends with exactly
/// one `Eof` token.
///
/// # Example
///
/// ```
/// use quickbeam::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("let x = 5;").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Let,
///         TokenKind::Ident,
///         TokenKind::Assign,
///         TokenKind::Int,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            finished: false,
        }
    }

    /// Read the next token. Returns `Eof` forever once input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.chars.next() else {
            return Token::eof();
        };

        match ch {
            '=' => {
                if self.chars.next_if_eq(&'=').is_some() {
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            '!' => {
                if self.chars.next_if_eq(&'=').is_some() {
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            ';' => Token::new(TokenKind::Semicolon, ";"),
            ',' => Token::new(TokenKind::Comma, ","),
            '(' => Token::new(TokenKind::LParen, "("),
            ')' => Token::new(TokenKind::RParen, ")"),
            '{' => Token::new(TokenKind::LBrace, "{"),
            '}' => Token::new(TokenKind::RBrace, "}"),
            '[' => Token::new(TokenKind::LBracket, "["),
            ']' => Token::new(TokenKind::RBracket, "]"),
            '+' => Token::new(TokenKind::Plus, "+"),
            '-' => Token::new(TokenKind::Minus, "-"),
            '*' => Token::new(TokenKind::Asterisk, "*"),
            '/' => Token::new(TokenKind::Slash, "/"),
            '<' => Token::new(TokenKind::Lt, "<"),
            '>' => Token::new(TokenKind::Gt, ">"),
            '"' => Token::new(TokenKind::String, self.read_string()),
            c if is_letter(c) => {
                let ident = self.read_while(c, is_letter);
                Token::new(lookup_ident(&ident), ident)
            }
            c if c.is_ascii_digit() => Token::new(TokenKind::Int, self.read_while(c, is_digit)),
            other => Token::new(TokenKind::Illegal, other.to_string()),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_ascii_whitespace()).is_some() {}
    }

    fn read_while(&mut self, first: char, pred: fn(char) -> bool) -> String {
        let mut out = String::from(first);
        while let Some(c) = self.chars.next_if(|&c| pred(c)) {
            out.push(c);
        }
        out
    }

    /// Read up to the closing quote (consumed) or end of input.
    fn read_string(&mut self) -> String {
        let mut out = String::new();
        for c in self.chars.by_ref() {
            if c == '"' {
                break;
            }
            out.push(c);
        }
        out
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let tok = self.next_token();
        if tok.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(tok)
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
