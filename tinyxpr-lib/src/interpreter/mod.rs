pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::evaluator::evaluate;
use crate::interpreter::parser::OperatorPrecedence;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;
use string_builder::Builder;
use syntax::expression_tree::Node;

/// Calculates the value of the given expression, folding operators from left to right.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The numerical value of the expression.
///
/// # Examples
///
/// ```
/// use tinyxpr::interpreter::calculate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let value = calculate("2 * 3 + 4")?;
/// assert_eq!(value, 10.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64> {
    calculate_with(expression, OperatorPrecedence::Flat)
}

/// Calculates the value of the given expression using the given precedence rules.
pub fn calculate_with(expression: &str, precedence: OperatorPrecedence) -> Result<f64> {
    let expression_tree = convert_with(expression, precedence)?;
    let value = evaluate(&expression_tree);
    debug!("{:?} evaluated to {}", expression, value);
    Ok(value)
}

/// Converts the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use tinyxpr::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert("CEIL(9.5)")?;
/// print!("{}", tree);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node> {
    convert_with(expression, OperatorPrecedence::Flat)
}

/// Converts the given input string into an equivalent expression tree using the given
/// precedence rules.
pub fn convert_with(expression: &str, precedence: OperatorPrecedence) -> Result<Node> {
    let tokens = lexer::tokenize(expression);
    let expression_tree = parser::parse_with(tokens, precedence)
        .with_context(|| format!("Could not parse expression {:?}", expression))?;
    debug!(
        "Parsed {:?} into a tree of depth {}\n{}",
        expression,
        expression_tree.depth(),
        expression_tree
    );
    Ok(expression_tree)
}

/// Pretty-prints the given tokens with added whitespace around binary operators.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use tinyxpr::interpreter::lexer::tokenize;
/// use tinyxpr::interpreter::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let pretty_printed_tokens = tokens_to_string(&tokenize("1+ceil( 2 )"))?;
/// assert_eq!(pretty_printed_tokens, "1 + CEIL(2)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::EndOfInput => {}
            TokenKind::Plus | TokenKind::Asterisk => {
                builder.append(" ");
                builder.append(token.text.as_str());
                builder.append(" ");
            }
            _ => builder.append(token.text.as_str()),
        }
    }

    builder.string().context("Failed to build token string")
}

/// Lists the given tokens with their kinds, e.g. `[Token(INTEGER, '1'), Token(EOF, '')]`.
pub fn format_tokens(tokens: &[Token]) -> String {
    format!("[{}]", tokens.iter().join(", "))
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::parser::ParseError;
    use parameterized_macro::parameterized;

    #[parameterized(
        expression = {
            "1 + 3 * (4 + CEIL(9.5))",
            "2 * 3 + 4",
            "CEIL(2.1)",
            "CEIL(2)",
            "1 + 2 * 3",
            "ceil(1.5) + 1",
            "(1 + 2) * (3 + 4)",
            "  12  ",
            "1 2",
        },
        expected_value = {
            56.0,
            10.0,
            3.0,
            2.0,
            9.0,
            3.0,
            21.0,
            12.0,
            1.0,
        }
    )]
    fn flat_expression_returns_correct_value(expression: &str, expected_value: f64) {
        let actual_value = calculate(expression).unwrap();
        assert_eq!(actual_value, expected_value);
    }

    #[parameterized(
        expression = {
            "1 + 3 * (4 + CEIL(9.5))",
            "2 * 3 + 4",
            "1 + 2 * 3",
            "1 * 2 + 3 * 4",
            "(1 + 2) * 3",
        },
        expected_value = {
            43.0,
            10.0,
            7.0,
            14.0,
            9.0,
        }
    )]
    fn standard_expression_returns_correct_value(expression: &str, expected_value: f64) {
        let actual_value = calculate_with(expression, OperatorPrecedence::Standard).unwrap();
        assert_eq!(actual_value, expected_value);
    }

    #[test]
    fn digit_only_literal_evaluates_to_its_value() {
        for n in ["0", "1", "10", "65535", "4294967296"] {
            assert_eq!(calculate(n).unwrap(), n.parse::<f64>().unwrap());
        }
    }

    #[test]
    fn malformed_literal_counts_as_zero() {
        assert_eq!(calculate("1.2.3 + 4").unwrap(), 4.0);
    }

    #[parameterized(
        expression = {
            "(1 + 2",
            "",
            "1 +",
            "- 2",
            "floor(2.5)",
        }
    )]
    fn malformed_expression_returns_parse_error(expression: &str) {
        let error = calculate(expression).unwrap_err();
        assert!(error.downcast_ref::<ParseError>().is_some(), "{:?}", error);
    }

    #[test]
    fn parse_error_is_given_context() {
        let error = convert("(1 + 2").unwrap_err();
        assert_eq!(error.to_string(), "Could not parse expression \"(1 + 2\"");
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let expression = "CEIL(1.25 * 3) + (2 * 7)";
        assert_eq!(convert(expression).unwrap(), convert(expression).unwrap());
        assert_eq!(calculate(expression).unwrap(), calculate(expression).unwrap());
    }

    #[test]
    fn regenerated_expression_shows_grouping() {
        let tree = convert("1 + 3 * (4 + CEIL(9.5))").unwrap();
        let regenerated_expression = tokens_to_string(&tree.to_infix()).unwrap();
        assert_eq!(regenerated_expression, "(1 + 3) * (4 + CEIL(9.5))");
    }

    #[test]
    fn simple_expression_regenerates_to_itself() {
        let expression = "1 + 2";

        let tree = convert(expression).unwrap();
        let regenerated_expression = tokens_to_string(&tree.to_infix()).unwrap();

        assert_eq!(regenerated_expression, expression)
    }

    #[test]
    fn tokens_are_listed_with_their_kinds() {
        let tokens = lexer::tokenize("CEIL(2)");
        assert_eq!(
            format_tokens(&tokens),
            "[Token(CEIL, 'CEIL'), Token(LPAREN, '('), Token(INTEGER, '2'), \
             Token(RPAREN, ')'), Token(EOF, '')]"
        );
    }

    #[test]
    fn long_operator_chain_returns_parse_error() {
        let expression = vec!["1"; 200_000].join(" + ");

        let error = calculate(&expression).unwrap_err();

        assert!(
            matches!(
                error.downcast_ref::<ParseError>(),
                Some(ParseError::ExpressionTooDeep { .. })
            ),
            "{:?}",
            error
        );
    }

    #[test]
    fn long_operator_chain_within_the_limit_is_evaluated() {
        let expression = vec!["1"; 1000].join(" + ");

        assert_eq!(calculate(&expression).unwrap(), 1000.0);
    }

    #[test]
    fn out_of_range_literal_counts_as_zero() {
        let expression = format!("{} + 2", "9".repeat(400));

        assert_eq!(calculate(&expression).unwrap(), 2.0);
    }
}
