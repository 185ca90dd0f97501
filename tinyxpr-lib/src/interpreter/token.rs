use std::fmt;
use std::fmt::Formatter;

/// The category of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    LiteralInteger,
    Plus,
    Asterisk,
    LeftParentheses,
    RightParentheses,
    Ceil,
    /// Any text the lexer could not make sense of. Diagnosed by the parser.
    Illegal,
}

/// A discrete part of an expression, along with the text it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Token {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn end_of_input() -> Token {
        Token::new(TokenKind::EndOfInput, "")
    }

    pub fn literal_integer(text: impl Into<String>) -> Token {
        Token::new(TokenKind::LiteralInteger, text)
    }

    pub fn plus() -> Token {
        Token::new(TokenKind::Plus, "+")
    }

    pub fn asterisk() -> Token {
        Token::new(TokenKind::Asterisk, "*")
    }

    pub fn left_parentheses() -> Token {
        Token::new(TokenKind::LeftParentheses, "(")
    }

    pub fn right_parentheses() -> Token {
        Token::new(TokenKind::RightParentheses, ")")
    }

    pub fn ceil() -> Token {
        Token::new(TokenKind::Ceil, "CEIL")
    }

    pub fn illegal(text: impl Into<String>) -> Token {
        Token::new(TokenKind::Illegal, text)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::LiteralInteger => "INTEGER",
            TokenKind::Plus => "PLUS",
            TokenKind::Asterisk => "MULTIPLY",
            TokenKind::LeftParentheses => "LPAREN",
            TokenKind::RightParentheses => "RPAREN",
            TokenKind::Ceil => "CEIL",
            TokenKind::Illegal => "ILLEGAL",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, '{}')", self.kind, self.text)
    }
}
