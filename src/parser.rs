use crate::ast::{Operand, Operator, Tier};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};
use log::debug;

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How `&&` and `||` relate to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogicalPrecedence {
    /// One tier, folded left to right: `a || b && c` is `(a || b) && c`.
    #[default]
    Uniform,
    /// C precedence: `a || b && c` is `a || (b && c)`.
    Standard,
}

/// Parser configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub logical_precedence: LogicalPrecedence,
    /// Maximum nesting of parenthesized and ternary sub-expressions.
    pub max_depth: usize,
    /// Run [`Operand::simplify`] on the parsed tree.
    pub optimize: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            logical_precedence: LogicalPrecedence::Uniform,
            max_depth: DEFAULT_MAX_DEPTH,
            optimize: false,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logical_precedence(mut self, precedence: LogicalPrecedence) -> Self {
        self.logical_precedence = precedence;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }
}

type Rule<'a> = fn(&mut Parser<'a>) -> Result<Option<Operand>, ParseError>;

/// Recursive-descent parser for plural-forms expressions.
///
/// Every rule returns `Ok(None)` when it cannot start at the current token,
/// which lets the caller report the rule it required at that position.
pub struct Parser<'a> {
    src: &'a str,
    lex: Lexer<'a>,
    look: Token,
    prev_end: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self::with_options(s, ParseOptions::default())
    }

    pub fn with_options(s: &'a str, options: ParseOptions) -> Self {
        let mut lex = Lexer::new(s);
        let look = lex.next_token();
        Self {
            src: s,
            lex,
            look,
            prev_end: 0,
            depth: 0,
            options,
        }
    }

    /// Parses the whole input into a tree.
    pub fn parse(mut self) -> Result<Operand, ParseError> {
        let result = self.parse_all();
        match &result {
            Ok(expr) => debug!("parsed plural-forms expression: {}", expr),
            Err(e) => debug!("plural-forms parse failed\n{}", e.render(self.src)),
        }
        result
    }

    fn parse_all(&mut self) -> Result<Operand, ParseError> {
        let expr = self.required("expression", Self::expression)?;
        if !matches!(self.look.kind, TokenKind::Eof) {
            return Err(ParseError::new(self.look.start, "end of input"));
        }
        if self.options.optimize {
            return Ok(expr.simplify());
        }
        Ok(expr)
    }

    fn bump(&mut self) {
        self.prev_end = self.look.end;
        self.look = self.lex.next_token();
    }

    fn required(&mut self, rule: &'static str, f: Rule<'a>) -> Result<Operand, ParseError> {
        match f(self)? {
            Some(node) => Ok(node),
            None => Err(ParseError::new(self.prev_end, rule)),
        }
    }

    fn expect(&mut self, kind: TokenKind, rule: &'static str) -> Result<(), ParseError> {
        if self.look.kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(ParseError::new(self.prev_end, rule))
        }
    }

    fn expression(&mut self) -> Result<Option<Operand>, ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::new(self.look.start, "shallower nesting"));
        }
        self.depth += 1;
        let node = self.conditional();
        self.depth -= 1;
        node
    }

    fn conditional(&mut self) -> Result<Option<Operand>, ParseError> {
        let Some(cond) = self.logical()? else {
            return Ok(None);
        };
        if self.look.kind != TokenKind::Question {
            return Ok(Some(cond));
        }
        self.bump();
        let if_true = self.required("expression", Self::expression)?;
        self.expect(TokenKind::Colon, "':'")?;
        let if_false = self.required("expression", Self::expression)?;
        Ok(Some(Operand::conditional(cond, if_true, if_false)))
    }

    fn logical(&mut self) -> Result<Option<Operand>, ParseError> {
        match self.options.logical_precedence {
            LogicalPrecedence::Uniform => {
                self.fold(|op| op.tier() == Tier::Logical, "equality", Self::equality)
            }
            LogicalPrecedence::Standard => {
                self.fold(|op| op == Operator::Or, "equality", Self::logical_and)
            }
        }
    }

    fn logical_and(&mut self) -> Result<Option<Operand>, ParseError> {
        self.fold(|op| op == Operator::And, "equality", Self::equality)
    }

    fn equality(&mut self) -> Result<Option<Operand>, ParseError> {
        self.fold(|op| op.tier() == Tier::Equality, "relational", Self::relational)
    }

    fn relational(&mut self) -> Result<Option<Operand>, ParseError> {
        self.fold(
            |op| op.tier() == Tier::Relational,
            "multiplicative",
            Self::multiplicative,
        )
    }

    fn multiplicative(&mut self) -> Result<Option<Operand>, ParseError> {
        self.fold(
            |op| op.tier() == Tier::Multiplicative,
            "primary",
            Self::primary,
        )
    }

    /// `operand (op operand)*` collected into a left-associative chain.
    fn fold(
        &mut self,
        accepts: fn(Operator) -> bool,
        operand_rule: &'static str,
        operand: Rule<'a>,
    ) -> Result<Option<Operand>, ParseError> {
        let Some(head) = operand(self)? else {
            return Ok(None);
        };
        let mut tail = Vec::new();
        loop {
            let op = match self.look.kind {
                TokenKind::Op(op) if accepts(op) => op,
                _ => break,
            };
            self.bump();
            let rhs = self.required(operand_rule, operand)?;
            tail.push((op, rhs));
        }
        Ok(Some(Operand::chain(head, tail)))
    }

    fn primary(&mut self) -> Result<Option<Operand>, ParseError> {
        match &self.look.kind {
            TokenKind::Num(Some(v)) => {
                let v = *v;
                self.bump();
                Ok(Some(Operand::Literal(v)))
            }
            TokenKind::LParen => {
                self.bump();
                let e = self.required("expression", Self::expression)?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(Some(e))
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.bump();
                Ok(Some(Operand::Variable(name)))
            }
            _ => Ok(None),
        }
    }
}
