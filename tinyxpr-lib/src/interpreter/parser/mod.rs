mod parse_error;

pub use crate::interpreter::parser::parse_error::ParseError;

use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{Token, TokenKind};
use log::debug;

/// How deeply parentheses and `CEIL` operands may nest before parsing is aborted.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The longest path from the root of a parsed tree to one of its leaves.
///
/// Operator chains such as `1 + 1 + ... + 1` deepen the tree by one level per operator,
/// and every walk over the tree recurses along that path.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Which binary operators each level of the grammar folds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OperatorPrecedence {
    /// `+` and `*` are folded together from left to right, so `1 + 3 * 4` is `(1 + 3) * 4`.
    #[default]
    Flat,
    /// `*` binds tighter than `+`, so `1 + 3 * 4` is `1 + (3 * 4)`.
    Standard,
}

/// A recursive descent parser over a sequence of tokens.
///
/// The grammar is
///
/// ```text
/// expression := term     (operator term)*
/// term       := factor   (operator factor)*
/// factor     := INTEGER | CEIL expression | "(" expression ")"
/// ```
///
/// where [`OperatorPrecedence`] decides which operators each level accepts.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
    precedence: OperatorPrecedence,
}

/// A parsed subtree along with its depth, so folding never has to walk the tree.
struct Subtree {
    node: Node,
    depth: usize,
}

impl Subtree {
    fn leaf(node: Node) -> Subtree {
        Subtree { node, depth: 1 }
    }
}

impl Parser {
    pub fn with_precedence(tokens: Vec<Token>, precedence: OperatorPrecedence) -> Parser {
        Parser {
            tokens,
            current: 0,
            depth: 0,
            precedence,
        }
    }

    /// Parses a single expression. Tokens following a complete expression are left unread.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let tree = self.parse_expression()?;
        if self.current < self.tokens.len() && !self.tokens[self.current].is_end_of_input() {
            debug!(
                "Ignoring {} trailing tokens starting at position {}",
                self.tokens.len() - self.current,
                self.current
            );
        }
        Ok(tree.node)
    }

    fn parse_expression(&mut self) -> Result<Subtree, ParseError> {
        let term = self.parse_term()?;
        self.parse_binary_operation(term, 0)
    }

    fn parse_term(&mut self) -> Result<Subtree, ParseError> {
        let factor = self.parse_factor()?;
        self.parse_binary_operation(factor, 1)
    }

    /// Folds operators of the given precedence into a left-associative chain.
    fn parse_binary_operation(
        &mut self,
        mut left: Subtree,
        precedence: u8,
    ) -> Result<Subtree, ParseError> {
        while let Some(operator) = self.peek_binary_operator(precedence) {
            let position = self.current;
            self.consume();
            let right = self.parse_operand(precedence)?;
            let depth = 1 + left.depth.max(right.depth);
            check_tree_depth(depth, position)?;
            left = Subtree {
                node: Node::new_binary_operation(operator, left.node, right.node),
                depth,
            };
        }
        Ok(left)
    }

    fn parse_operand(&mut self, precedence: u8) -> Result<Subtree, ParseError> {
        match (self.precedence, precedence) {
            (OperatorPrecedence::Standard, 0) => self.parse_term(),
            _ => self.parse_factor(),
        }
    }

    fn parse_factor(&mut self) -> Result<Subtree, ParseError> {
        let position = self.current;
        let token = self.consume();

        match token.kind {
            TokenKind::LiteralInteger => {
                Ok(Subtree::leaf(Node::new_literal_integer(token.text)))
            }
            TokenKind::Ceil => {
                self.enter_nesting(position)?;
                let operand = self.parse_expression()?;
                self.depth -= 1;
                let depth = 1 + operand.depth;
                check_tree_depth(depth, position)?;
                Ok(Subtree {
                    node: Node::new_ceil(operand.node),
                    depth,
                })
            }
            TokenKind::LeftParentheses => {
                self.enter_nesting(position)?;
                let expression = self.parse_expression()?;
                self.consume_expect(TokenKind::RightParentheses)?;
                self.depth -= 1;
                Ok(expression)
            }
            _ => Err(ParseError::UnexpectedToken { token, position }),
        }
    }

    fn enter_nesting(&mut self, position: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                position,
            });
        }
        Ok(())
    }

    /// Returns the current token and moves past it. Reading beyond the end yields end of input.
    fn consume(&mut self) -> Token {
        match self.tokens.get(self.current) {
            Some(token) => {
                self.current += 1;
                token.clone()
            }
            None => Token::end_of_input(),
        }
    }

    fn consume_expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let position = self.current;
        let token = self.consume();
        if token.kind != expected {
            return Err(ParseError::ExpectedToken {
                expected,
                found: token,
                position,
            });
        }
        Ok(token)
    }

    /// The operator at the cursor, if it may be folded at the given precedence.
    fn peek_binary_operator(&self, precedence: u8) -> Option<BinaryOperator> {
        let operator = BinaryOperator::from_token(self.tokens.get(self.current)?)?;
        match self.precedence {
            OperatorPrecedence::Flat => Some(operator),
            OperatorPrecedence::Standard => {
                (operator.precedence() == precedence).then_some(operator)
            }
        }
    }
}

fn check_tree_depth(depth: usize, position: usize) -> Result<(), ParseError> {
    if depth > MAX_TREE_DEPTH {
        return Err(ParseError::ExpressionTooDeep {
            limit: MAX_TREE_DEPTH,
            position,
        });
    }
    Ok(())
}

/// Parses the given tokens into an equivalent expression tree,
/// folding operators from left to right.
///
/// # Arguments
///
/// * `tokens`: The tokens to parse, in infix format.
///
/// returns: The root of the expression tree.
///
/// # Examples
///
/// ```
/// # use tinyxpr::interpreter::parser::ParseError;
/// # fn main() -> Result<(), ParseError> {
/// use tinyxpr::interpreter::lexer::tokenize;
/// use tinyxpr::interpreter::parser::parse;
///
/// let tree = parse(tokenize("1 + 3 * 4"))?;
/// assert_eq!(tree.text(), "*");
/// # Ok(()) }
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    parse_with(tokens, OperatorPrecedence::Flat)
}

/// Parses the given tokens into an equivalent expression tree using the given precedence rules.
pub fn parse_with(
    tokens: Vec<Token>,
    precedence: OperatorPrecedence,
) -> Result<Node, ParseError> {
    Parser::with_precedence(tokens, precedence).parse()
}
