#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn matches_symbol(self, symbol: &str) -> bool {
        let mut chars = symbol.chars();
        chars.next() == Some(self.symbol()) && chars.next().is_none()
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.matches_symbol(symbol))
    }

    /// IEEE-754 semantics throughout, so `x / 0.0` is an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }

    pub fn is_high_precedence(self) -> bool {
        match self {
            Self::Mul | Self::Div => true,
            Self::Add | Self::Sub => false,
        }
    }
}
