use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::Node;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_literal_integer(&mut self, _text: &str) {}
    fn visit_binary_operation(
        &mut self,
        _operation: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand)
    }
    fn visit_unary_operation(&mut self, _operation: &UnaryOperator, operand: &Node) {
        walk_unary_operation(self, operand)
    }
}

pub(crate) fn walk_binary_operation(
    visitor: &mut impl SyntaxVisitor,
    left_operand: &Node,
    right_operand: &Node,
) {
    left_operand.accept(visitor);
    right_operand.accept(visitor);
}

pub(crate) fn walk_unary_operation(visitor: &mut impl SyntaxVisitor, operand: &Node) {
    operand.accept(visitor);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_complex_tree() -> Node {
        let one = Node::new_literal_integer("1");
        let two = Node::new_literal_integer("2");
        let three = Node::new_literal_integer("3");
        let four = Node::new_literal_integer("4");
        let ceil = Node::new_ceil(three);
        let star = Node::new_binary_multiplication(two, ceil);
        let first_plus = Node::new_binary_addition(one, star);
        Node::new_binary_addition(first_plus, four)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_literal_integer(&mut self, text: &str) {
            self.prints.push(text.to_string())
        }
        fn visit_binary_operation(
            &mut self,
            operation: &BinaryOperator,
            left_operand: &Node,
            right_operand: &Node,
        ) {
            self.prints.push(format!("{:?}", operation));
            walk_binary_operation(self, left_operand, right_operand);
            self.prints.push(format!("exit {:?}", operation));
        }
        fn visit_unary_operation(&mut self, operation: &UnaryOperator, operand: &Node) {
            self.prints.push(format!("{:?}", operation));
            walk_unary_operation(self, operand);
            self.prints.push(format!("exit {:?}", operation));
        }
    }

    struct LiteralCollector {
        literals: Vec<String>,
    }

    impl SyntaxVisitor for LiteralCollector {
        fn visit_literal_integer(&mut self, text: &str) {
            self.literals.push(text.to_string())
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        println!("{}", root);
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            [
                "Add",
                "Add",
                "1",
                "Multiply",
                "2",
                "Ceil",
                "3",
                "exit Ceil",
                "exit Multiply",
                "exit Add",
                "4",
                "exit Add",
            ]
        )
    }

    #[test]
    fn default_methods_reach_every_leaf_from_left_to_right() {
        let root = create_complex_tree();
        let mut visitor = LiteralCollector { literals: vec![] };
        root.accept(&mut visitor);
        assert_eq!(visitor.literals, ["1", "2", "3", "4"])
    }
}
