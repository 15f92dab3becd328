mod expr;
mod lexer;
mod operation;
mod parser;
mod token;

pub use lexer::Lexer;
pub use operation::Operation;
pub use token::Token;

pub(crate) use parser::Parser;
