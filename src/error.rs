#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum ErrorKind {
    #[error("Unrecognized character `{ch}` at offset {offset}")]
    Lex { ch: char, offset: usize },
    #[error("{0}")]
    Syntax(String),
}

pub type PResult<T> = Result<T, ErrorKind>;
