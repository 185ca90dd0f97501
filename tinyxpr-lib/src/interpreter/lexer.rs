use crate::interpreter::token::Token;
use log::trace;
use std::iter::Peekable;
use std::str::Chars;

/// Reads tokens one at a time from an expression.
///
/// Lexing never fails: text that is not part of the grammar becomes an illegal token,
/// which the parser reports once it reaches it.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(expression: &'a str) -> Lexer<'a> {
        Lexer {
            chars: expression.chars().peekable(),
            finished: false,
        }
    }

    /// Reads the next token, skipping any whitespace before it.
    ///
    /// Once the input is exhausted every further call returns an end-of-input token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let current = match self.chars.peek() {
            None => return Token::end_of_input(),
            Some(&current) => current,
        };

        match current {
            '+' => self.single(Token::plus()),
            '*' => self.single(Token::asterisk()),
            '(' => self.single(Token::left_parentheses()),
            ')' => self.single(Token::right_parentheses()),
            digit if digit.is_ascii_digit() => self.read_number(),
            letter if letter.is_alphabetic() => self.read_identifier(),
            other => self.single(Token::illegal(other)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn single(&mut self, token: Token) -> Token {
        self.chars.next();
        token
    }

    /// Dots are taken as they come, so `1.2.3` is read as a single literal.
    fn read_number(&mut self) -> Token {
        let mut text = String::new();
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
            text.push(c);
        }
        Token::literal_integer(text)
    }

    fn read_identifier(&mut self) -> Token {
        let mut text = String::new();
        while let Some(c) = self.chars.next_if(|c| c.is_alphabetic()) {
            text.push(c);
        }
        let identifier = text.to_uppercase();
        match identifier.as_str() {
            "CEIL" => Token::ceil(),
            _ => Token::illegal(identifier),
        }
    }
}

/// Yields every token up to, but not including, the end of input.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_end_of_input() {
            self.finished = true;
            return None;
        }
        Some(token)
    }
}

/// Splits the given expression into tokens.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: Every token of the expression, terminated by a single end-of-input token.
///
/// # Examples
///
/// ```
/// use tinyxpr::interpreter::lexer::tokenize;
/// use tinyxpr::interpreter::token::Token;
///
/// let tokens = tokenize("2 * ceil(1.5)");
/// assert_eq!(tokens[2], Token::ceil());
/// assert!(tokens.last().unwrap().is_end_of_input());
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Lexer::new(expression).collect();
    tokens.push(Token::end_of_input());
    trace!("Tokenized {:?} into {} tokens", expression, tokens.len());
    tokens
}
