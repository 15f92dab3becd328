#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    Number(&'src str),
    Op(&'src str),

    LParen,
    RParen,
}

impl<'src> Token<'src> {
    /// The exact source text this token was lexed from.
    pub fn lexeme(&self) -> &'src str {
        match self {
            Self::Number(s) | Self::Op(s) => s,
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}
