//! Parser and evaluator for Gettext plural-forms expressions.
//!
//! ```
//! use plural_forms::{evaluate_plural_forms, parse, evaluate};
//!
//! assert_eq!(evaluate_plural_forms("n != 1", 1), Ok(0));
//!
//! let tree = parse("(n == 0) ? 0 : ((n == 1) ? 1 : 2)")?;
//! assert_eq!(evaluate(&tree, 7), 2);
//! # Ok::<(), plural_forms::ParseError>(())
//! ```
mod ast;
mod engine;
mod error;
mod eval;
mod header;
mod lexer;
mod optimizer;
mod parser;

pub use ast::{Operand, Operator, Tier};
pub use engine::PluralForms;
pub use error::{EvalError, HeaderError, ParseError, PluralError};
pub use header::PluralRule;
pub use parser::{DEFAULT_MAX_DEPTH, LogicalPrecedence, ParseOptions, Parser};

use eval::Evaluator;
use log::trace;

/// Parses `text` with default options.
pub fn parse(text: &str) -> Result<Operand, ParseError> {
    Parser::new(text).parse()
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Operand, ParseError> {
    Parser::with_options(text, options.clone()).parse()
}

/// Evaluates `tree` with the count bound to `n`.
///
/// # Panics
///
/// Panics if evaluation faults: an [`Operand::Empty`] node or a zero
/// modulus. Neither is a user error for a tree from [`parse`] unless the
/// expression itself divides by zero; see [`try_evaluate`].
pub fn evaluate(tree: &Operand, n: u32) -> u32 {
    match try_evaluate(tree, n) {
        Ok(v) => v,
        Err(e) => panic!("plural-forms evaluation fault: {}", e),
    }
}

pub fn try_evaluate(tree: &Operand, n: u32) -> Result<u32, EvalError> {
    Evaluator::new(n).eval(tree)
}

/// Parses and evaluates in one step.
///
/// # Panics
///
/// As [`evaluate`].
pub fn evaluate_plural_forms(text: &str, n: u32) -> Result<u32, ParseError> {
    let tree = parse(text)?;
    let out = evaluate(&tree, n);
    trace!("{:?} with n = {} -> {}", text, n, out);
    Ok(out)
}

/// Parses and evaluates in one step without panicking.
pub fn try_evaluate_plural_forms(text: &str, n: u32) -> Result<u32, PluralError> {
    let tree = parse(text)?;
    let out = try_evaluate(&tree, n)?;
    trace!("{:?} with n = {} -> {}", text, n, out);
    Ok(out)
}
