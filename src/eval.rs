use crate::ast::Operand;
use crate::error::EvalError;

/// Tree-walking evaluator bound to one value of the count.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Evaluator {
    n: u32,
}

impl Evaluator {
    pub(crate) fn new(n: u32) -> Self {
        Self { n }
    }

    pub(crate) fn eval(&self, node: &Operand) -> Result<u32, EvalError> {
        match node {
            Operand::Empty => Err(EvalError::EmptyOperand),
            Operand::Literal(v) => Ok(*v),
            Operand::Variable(_) => Ok(self.n),
            Operand::BinaryOp { op, lhs, rhs } => {
                let l = self.eval(lhs)?;
                let r = self.eval(rhs)?;
                op.apply(l, r)
            }
            Operand::Chain { head, tail } => {
                let mut state = self.eval(head)?;
                for (op, rhs) in tail {
                    let r = self.eval(rhs)?;
                    state = op.apply(state, r)?;
                }
                Ok(state)
            }
            Operand::Conditional {
                cond,
                if_true,
                if_false,
            } => {
                if self.eval(cond)? != 0 {
                    self.eval(if_true)
                } else {
                    self.eval(if_false)
                }
            }
        }
    }
}
