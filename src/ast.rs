use crate::error::EvalError;
use std::fmt;

/// Precedence tiers, lowest-binding first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Logical,
    Equality,
    Relational,
    Multiplicative,
}

/// Binary operators of the plural-forms grammar. Every operator maps two
/// unsigned integers to one; comparisons and logic return 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `%`
    Mod,
    /// `&&`; both sides are always evaluated.
    And,
    /// `||`; both sides are always evaluated.
    Or,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
}

impl Operator {
    /// The fixed operator table.
    pub const ALL: [Operator; 9] = [
        Operator::Mod,
        Operator::And,
        Operator::Or,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::Eq,
        Operator::Ne,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Mod => "%",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Eq => "==",
            Operator::Ne => "!=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub const fn tier(self) -> Tier {
        match self {
            Operator::And | Operator::Or => Tier::Logical,
            Operator::Eq | Operator::Ne => Tier::Equality,
            Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge => Tier::Relational,
            Operator::Mod => Tier::Multiplicative,
        }
    }

    /// Applies the operator. The only failure is a zero modulus.
    pub fn apply(self, lhs: u32, rhs: u32) -> Result<u32, EvalError> {
        let out = match self {
            Operator::Mod => {
                return lhs
                    .checked_rem(rhs)
                    .ok_or(EvalError::ModuloByZero { dividend: lhs });
            }
            Operator::And => lhs != 0 && rhs != 0,
            Operator::Or => lhs != 0 || rhs != 0,
            Operator::Lt => lhs < rhs,
            Operator::Le => lhs <= rhs,
            Operator::Gt => lhs > rhs,
            Operator::Ge => lhs >= rhs,
            Operator::Eq => lhs == rhs,
            Operator::Ne => lhs != rhs,
        };
        Ok(out as u32)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// AST node of a plural-forms expression.
///
/// All values are `u32`. A parsed tree never contains [`Operand::Empty`] and
/// never contains a [`Operand::Chain`] with an empty tail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Operand {
    /// Uninitialized placeholder.
    #[default]
    Empty,
    /// Unsigned literal (e.g. `100`)
    Literal(u32),
    /// The count. Any identifier spelling (`n`, `count`, `x1`) refers to it.
    Variable(String),
    /// `lhs op rhs`
    BinaryOp {
        op: Operator,
        lhs: Box<Operand>,
        rhs: Box<Operand>,
    },
    /// `cond ? if_true : if_false`; only the selected branch is evaluated.
    Conditional {
        cond: Box<Operand>,
        if_true: Box<Operand>,
        if_false: Box<Operand>,
    },
    /// `head op1 a op2 b ...`, folded left to right.
    Chain {
        head: Box<Operand>,
        tail: Vec<(Operator, Operand)>,
    },
}

impl Operand {
    pub fn literal(value: u32) -> Operand {
        Operand::Literal(value)
    }

    pub fn variable(name: impl Into<String>) -> Operand {
        Operand::Variable(name.into())
    }

    pub fn binary(op: Operator, lhs: Operand, rhs: Operand) -> Operand {
        Operand::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn conditional(cond: Operand, if_true: Operand, if_false: Operand) -> Operand {
        Operand::Conditional {
            cond: Box::new(cond),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    /// Builds a chain, returning `head` itself when `tail` is empty.
    pub fn chain(head: Operand, tail: Vec<(Operator, Operand)>) -> Operand {
        if tail.is_empty() {
            head
        } else {
            Operand::Chain {
                head: Box::new(head),
                tail,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Operand::Empty)
    }

    /// Number of nodes in the tree, counting chain links as their operands.
    pub fn node_count(&self) -> usize {
        match self {
            Operand::Empty | Operand::Literal(_) | Operand::Variable(_) => 1,
            Operand::BinaryOp { lhs, rhs, .. } => 1 + lhs.node_count() + rhs.node_count(),
            Operand::Conditional {
                cond,
                if_true,
                if_false,
            } => 1 + cond.node_count() + if_true.node_count() + if_false.node_count(),
            Operand::Chain { head, tail } => {
                1 + head.node_count() + tail.iter().map(|(_, o)| o.node_count()).sum::<usize>()
            }
        }
    }

    /// True when the tree contains no `Empty` node.
    pub fn is_complete(&self) -> bool {
        match self {
            Operand::Empty => false,
            Operand::Literal(_) | Operand::Variable(_) => true,
            Operand::BinaryOp { lhs, rhs, .. } => lhs.is_complete() && rhs.is_complete(),
            Operand::Conditional {
                cond,
                if_true,
                if_false,
            } => cond.is_complete() && if_true.is_complete() && if_false.is_complete(),
            Operand::Chain { head, tail } => {
                head.is_complete() && tail.iter().all(|(_, o)| o.is_complete())
            }
        }
    }
}

/// Fully parenthesized, source-like rendering used for tracing.
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Empty => Ok(()),
            Operand::Literal(v) => write!(f, "{}", v),
            Operand::Variable(name) => f.write_str(name),
            Operand::BinaryOp { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
            Operand::Conditional {
                cond,
                if_true,
                if_false,
            } => write!(f, "({} ? {} : {})", cond, if_true, if_false),
            Operand::Chain { head, tail } => {
                if tail.is_empty() {
                    return write!(f, "{}", head);
                }
                write!(f, "({}", head)?;
                for (op, rhs) in tail {
                    write!(f, " {} {}", op, rhs)?;
                }
                f.write_str(")")
            }
        }
    }
}
