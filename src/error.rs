use thiserror::Error;

/// A positioned grammar failure.
///
/// `offset` is a byte offset into the source. `expected_rule` names the rule
/// (or quoted literal such as `"')'"`) that failed to match there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected_rule} at offset {offset}")]
pub struct ParseError {
    pub offset: usize,
    pub expected_rule: &'static str,
}

impl ParseError {
    pub(crate) fn new(offset: usize, expected_rule: &'static str) -> Self {
        Self {
            offset,
            expected_rule,
        }
    }

    /// Renders the source with a caret under the failing offset.
    ///
    /// ```
    /// let err = plural_forms::parse("(n == 1").unwrap_err();
    /// assert_eq!(err.render("(n == 1"), "(n == 1\n       ^-- expected: ')'");
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut offset = self.offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |i| offset + i);
        let column = source[line_start..offset].chars().count();
        format!(
            "{}\n{}^-- expected: {}",
            &source[line_start..line_end],
            " ".repeat(column),
            self.expected_rule
        )
    }
}

/// Internal evaluation faults. A tree produced by a successful parse only
/// reaches these through a computed zero modulus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("empty operand reached the evaluator")]
    EmptyOperand,
    #[error("modulo by zero ({dividend} % 0)")]
    ModuloByZero { dividend: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("missing `{0}` in plural-forms header")]
    MissingKey(&'static str),
    #[error("unknown key `{0}` in plural-forms header")]
    UnknownKey(String),
    #[error("invalid nplurals value: {0}")]
    InvalidNplurals(String),
    #[error("nplurals must be at least 1")]
    ZeroNplurals,
    #[error("plural expression: {0}")]
    Expression(#[from] ParseError),
}
