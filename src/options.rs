/// Knobs for a single evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Skip characters that start no token instead of failing with
    /// [`ErrorKind::Lex`](crate::ErrorKind::Lex).
    pub skip_unrecognized: bool,
}

impl Options {
    pub fn lenient() -> Self {
        Self {
            skip_unrecognized: true,
        }
    }
}
