use super::operation::Operation;

/// `Binary` only ever holds a low-precedence operation. Multiplicative work
/// is folded into literals before it can become part of the tree.
#[derive(Debug, PartialEq, Clone)]
pub(crate) enum Expression {
    Literal(f64),
    Binary {
        lhs: Box<Expression>,
        op: Operation,
        rhs: Box<Expression>,
    },
}

impl Expression {
    // Additive chains grow down `lhs`, one level per operator, so that side
    // is walked in a loop. `rhs` is always a literal.
    pub fn evaluate(&self) -> f64 {
        let mut pending = vec![];
        let mut node = self;
        let mut value = loop {
            match node {
                Self::Literal(v) => break *v,
                Self::Binary { lhs, op, rhs } => {
                    pending.push((*op, rhs));
                    node = &**lhs;
                }
            }
        };

        for (op, rhs) in pending.into_iter().rev() {
            value = op.apply(value, rhs.evaluate());
        }
        value
    }

    /// Applies `op` between the end of the rightmost spine and `rhs`, splicing
    /// the result back in as a literal.
    pub fn fold_rightmost(&mut self, op: Operation, rhs: f64) {
        match self {
            Self::Literal(v) => *v = op.apply(*v, rhs),
            Self::Binary { rhs: right, .. } => right.fold_rightmost(op, rhs),
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut next = match self {
            Self::Binary { lhs, .. } => std::mem::replace(lhs.as_mut(), Self::Literal(0.0)),
            Self::Literal(_) => return,
        };

        loop {
            let child = match &mut next {
                Self::Binary { lhs, .. } => std::mem::replace(lhs.as_mut(), Self::Literal(0.0)),
                Self::Literal(_) => break,
            };
            next = child;
        }
    }
}
