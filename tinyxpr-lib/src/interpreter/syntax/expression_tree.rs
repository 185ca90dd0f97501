use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use crate::interpreter::token::{Token, TokenKind};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A node of the abstract syntax tree, exclusively owning its children.
///
/// Each variant carries exactly the operands its kind needs: literals are leaves,
/// binary operations have two operands and `CEIL` has one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    /// Keeps the literal text from the source; it is only interpreted as a number
    /// during evaluation.
    LiteralInteger(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal_integer(text: impl Into<String>) -> Node {
        Node::LiteralInteger(text.into())
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_binary_addition(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Add, left_operand, right_operand)
    }

    pub fn new_binary_multiplication(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Multiply, left_operand, right_operand)
    }

    pub fn new_ceil(operand: Node) -> Node {
        Node::UnaryOperation {
            operator: UnaryOperator::Ceil,
            operand: Box::new(operand),
        }
    }

    /// The kind of token this node was built from.
    pub fn kind(&self) -> TokenKind {
        match self {
            Node::LiteralInteger(_) => TokenKind::LiteralInteger,
            Node::BinaryOperation { operator, .. } => operator.token().kind,
            Node::UnaryOperation { operator, .. } => operator.token().kind,
        }
    }

    /// The source fragment this node was built from.
    pub fn text(&self) -> &str {
        match self {
            Node::LiteralInteger(text) => text,
            Node::BinaryOperation { operator, .. } => operator.symbol(),
            Node::UnaryOperation { operator, .. } => operator.symbol(),
        }
    }

    /// Number of nodes on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::LiteralInteger(_) => 1,
            Node::BinaryOperation {
                left_operand,
                right_operand,
                ..
            } => 1 + left_operand.depth().max(right_operand.depth()),
            Node::UnaryOperation { operand, .. } => 1 + operand.depth(),
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::LiteralInteger(text) => visitor.visit_literal_integer(text),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
        }
    }

    /// Regenerates infix tokens from the tree. Every binary operation nested inside
    /// another one is parenthesized, which makes the grouping chosen by the parser
    /// visible.
    pub fn to_infix(&self) -> Vec<Token> {
        let mut visitor = InfixVisitor { tokens: Vec::new() };
        self.accept(&mut visitor);
        visitor.tokens
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        write_tree(&visitor.builder.build(), &mut buffer).map_err(|_| fmt::Error)?;
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal_integer(&mut self, text: &str) {
        self.builder.add_empty_child(text.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
}

struct InfixVisitor {
    tokens: Vec<Token>,
}

impl InfixVisitor {
    fn visit_operand(&mut self, operand: &Node) {
        if matches!(operand, Node::BinaryOperation { .. }) {
            self.tokens.push(Token::left_parentheses());
            operand.accept(self);
            self.tokens.push(Token::right_parentheses());
        } else {
            operand.accept(self);
        }
    }
}

impl SyntaxVisitor for InfixVisitor {
    fn visit_literal_integer(&mut self, text: &str) {
        self.tokens.push(Token::literal_integer(text));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.visit_operand(left_operand);
        self.tokens.push(operator.token());
        self.visit_operand(right_operand);
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.tokens.push(operator.token());
        self.tokens.push(Token::left_parentheses());
        operand.accept(self);
        self.tokens.push(Token::right_parentheses());
    }
}
