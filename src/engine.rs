use crate::ast::Operand;
use crate::error::{EvalError, ParseError};
use crate::eval::Evaluator;
use crate::parser::{ParseOptions, Parser};
use log::trace;
use std::fmt;
use std::str::FromStr;

/// A parsed plural-forms expression, ready to be evaluated for many counts.
///
/// ```
/// use plural_forms::PluralForms;
///
/// let forms: PluralForms = "n % 10 == 1 && n % 100 != 11 ? 0 : 1".parse()?;
/// assert_eq!(forms.evaluate(21), 0);
/// assert_eq!(forms.evaluate(11), 1);
/// # Ok::<(), plural_forms::ParseError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluralForms {
    source: String,
    ast: Operand,
}

impl PluralForms {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Self::parse_with(source, &ParseOptions::default())
    }

    pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let ast = Parser::with_options(source, options.clone()).parse()?;
        Ok(Self {
            source: source.to_string(),
            ast,
        })
    }

    pub(crate) fn from_parts(source: impl Into<String>, ast: Operand) -> Self {
        Self {
            source: source.into(),
            ast,
        }
    }

    /// Evaluates for `n`.
    ///
    /// # Panics
    ///
    /// Panics on an evaluation fault, which a parsed tree only reaches
    /// through a zero modulus. Use [`PluralForms::try_evaluate`] for
    /// untrusted expressions.
    pub fn evaluate(&self, n: u32) -> u32 {
        crate::evaluate(&self.ast, n)
    }

    pub fn try_evaluate(&self, n: u32) -> Result<u32, EvalError> {
        let out = Evaluator::new(n).eval(&self.ast);
        trace!("{} with n = {} -> {:?}", self.ast, n, out);
        out
    }

    pub fn ast(&self) -> &Operand {
        &self.ast
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_ast(self) -> Operand {
        self.ast
    }
}

impl FromStr for PluralForms {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Prints the parsed tree, fully parenthesized.
impl fmt::Display for PluralForms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ast, f)
    }
}
