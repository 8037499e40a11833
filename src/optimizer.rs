use crate::ast::Operand;

// Semantics-preserving rewrites. A fold that would fault (zero modulus) is
// left in place so the fault still surfaces at evaluation time.

impl Operand {
    /// Folds constant subtrees and resolves conditionals with constant
    /// conditions. Evaluates identically to the input tree for every `n`
    /// on which the input does not fault.
    pub fn simplify(self) -> Operand {
        fold(self)
    }

    /// Lowers every `Chain` into nested left-leaning `BinaryOp`s.
    pub fn unchain(self) -> Operand {
        match self {
            Operand::Chain { head, tail } => tail
                .into_iter()
                .fold(head.unchain(), |acc, (op, rhs)| {
                    Operand::binary(op, acc, rhs.unchain())
                }),
            Operand::BinaryOp { op, lhs, rhs } => Operand::binary(op, lhs.unchain(), rhs.unchain()),
            Operand::Conditional {
                cond,
                if_true,
                if_false,
            } => Operand::conditional(cond.unchain(), if_true.unchain(), if_false.unchain()),
            leaf => leaf,
        }
    }
}

fn fold(ast: Operand) -> Operand {
    match ast {
        Operand::Empty | Operand::Literal(_) | Operand::Variable(_) => ast,
        Operand::BinaryOp { op, lhs, rhs } => {
            let lhs = fold(*lhs);
            let rhs = fold(*rhs);
            if let (Operand::Literal(x), Operand::Literal(y)) = (&lhs, &rhs) {
                if let Ok(v) = op.apply(*x, *y) {
                    return Operand::Literal(v);
                }
            }
            Operand::binary(op, lhs, rhs)
        }
        Operand::Chain { head, tail } => {
            // only a constant prefix can be folded without reordering
            let mut acc = fold(*head);
            let mut rest = Vec::with_capacity(tail.len());
            for (op, rhs) in tail {
                let rhs = fold(rhs);
                if rest.is_empty() {
                    if let (Operand::Literal(x), Operand::Literal(y)) = (&acc, &rhs) {
                        if let Ok(v) = op.apply(*x, *y) {
                            acc = Operand::Literal(v);
                            continue;
                        }
                    }
                }
                rest.push((op, rhs));
            }
            Operand::chain(acc, rest)
        }
        Operand::Conditional {
            cond,
            if_true,
            if_false,
        } => match fold(*cond) {
            Operand::Literal(0) => fold(*if_false),
            Operand::Literal(_) => fold(*if_true),
            cond => Operand::conditional(cond, fold(*if_true), fold(*if_false)),
        },
    }
}
