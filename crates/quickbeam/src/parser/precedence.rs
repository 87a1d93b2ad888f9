//! Operator binding powers

use crate::token::TokenKind;

/// Binding power of an operator, lowest first.
///
/// The derived `Ord` follows declaration order, so `Lowest < Equals < ... < Index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting power for a fresh expression
    Lowest = 1,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// unary `!x` `-x`
    Prefix,
    /// `f(x)`
    Call,
    /// `xs[i]`
    Index,
}

impl Precedence {
    /// Binding power of a token in infix position.
    ///
    /// Tokens that cannot continue an expression bind at `Lowest`,
    /// which ends the precedence-climbing loop.
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(Precedence::Equals < Precedence::LessGreater);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Prefix < Precedence::Call);
        assert!(Precedence::Call < Precedence::Index);
    }

    #[test]
    fn test_non_operators_are_lowest() {
        assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
        assert_eq!(Precedence::of(TokenKind::Ident), Precedence::Lowest);
        assert_eq!(Precedence::of(TokenKind::Asterisk), Precedence::Product);
    }
}
