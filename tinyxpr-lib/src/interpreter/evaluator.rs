use crate::interpreter::syntax::expression_tree::Node;
use log::warn;

/// Evaluates the given expression tree.
///
/// A literal whose text is not a valid number is reported on the log and counts as `0`;
/// the rest of the tree is evaluated as usual.
///
/// # Arguments
///
/// * `node`: The root of the tree to evaluate.
///
/// returns: The numerical value of the expression.
///
/// # Examples
///
/// ```
/// use tinyxpr::interpreter::evaluator::evaluate;
/// use tinyxpr::interpreter::syntax::expression_tree::Node;
///
/// let tree = Node::new_ceil(Node::new_literal_integer("2.1"));
/// assert_eq!(evaluate(&tree), 3.0);
/// ```
pub fn evaluate(node: &Node) -> f64 {
    match node {
        Node::LiteralInteger(text) => evaluate_literal(text),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => operator.evaluate(evaluate(left_operand), evaluate(right_operand)),
        Node::UnaryOperation { operator, operand } => operator.evaluate(evaluate(operand)),
    }
}

/// Evaluates an optional tree, where the absent tree is worth `0`.
pub fn evaluate_tree(tree: Option<&Node>) -> f64 {
    tree.map_or(0.0, evaluate)
}

/// Literals too large for an `f64` are treated as malformed instead of becoming infinite.
fn evaluate_literal(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(_) => {
            warn!("Error converting value {:?} to f64: value out of range", text);
            0.0
        }
        Err(error) => {
            warn!("Error converting value {:?} to f64: {}", text, error);
            0.0
        }
    }
}
