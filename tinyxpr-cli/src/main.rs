use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::info;
use tinyxpr::interpreter::evaluator::evaluate;
use tinyxpr::interpreter::lexer::tokenize;
use tinyxpr::interpreter::parser::{parse_with, OperatorPrecedence};
use tinyxpr::interpreter::{format_tokens, tokens_to_string};

/// Evaluates an arithmetic expression made of numbers, `+`, `*`, parentheses and `CEIL`
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate
    #[clap(default_value = "1 + 3 * (4 + CEIL(9.5))")]
    expression: String,

    /// Print the tokens of the expression
    #[clap(long)]
    tokens: bool,

    /// Print the expression tree
    #[clap(long)]
    tree: bool,

    /// Let `*` bind tighter than `+` instead of folding operators from left to right
    #[clap(long)]
    standard_precedence: bool,

    #[clap(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let precedence = if args.standard_precedence {
        OperatorPrecedence::Standard
    } else {
        OperatorPrecedence::Flat
    };
    info!("Evaluating {:?} with {:?} precedence", args.expression, precedence);

    let tokens = tokenize(&args.expression);
    if args.tokens {
        println!("{}", format_tokens(&tokens));
    }

    let tree = parse_with(tokens, precedence)?;
    if args.tree {
        print!("{}", tree);
        println!("Grouping: {}", tokens_to_string(&tree.to_infix())?);
    }

    let result = evaluate(&tree);
    println!("Result: {:.6}", result);
    Ok(())
}
