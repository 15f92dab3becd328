//! Evaluator for infix arithmetic formulas over `f64`.
//!
//! Supports number literals (with optional fraction and exponent), the binary
//! operators `+ - * /`, unary minus and parentheses:
//!
//! ```
//! assert_eq!(matheval::evaluate("10 + 4 * 5"), Ok(30.0));
//! ```

mod error;
mod options;
mod syntax;

pub use error::{ErrorKind, PResult};
pub use options::Options;
pub use syntax::{Lexer, Operation, Token};

use syntax::Parser;

/// Evaluates `src`, rejecting any character that starts no token.
pub fn evaluate(src: &str) -> PResult<f64> {
    evaluate_with(src, &Options::default())
}

/// Evaluates `src` using the lexing behaviour chosen in `options`.
pub fn evaluate_with(src: &str, options: &Options) -> PResult<f64> {
    log::debug!("Evaluating {src:?}");
    Parser::new(src, options)?.parse()
}

/// Splits `src` into tokens, failing on the first lexing error.
pub fn tokenize<'src>(src: &'src str, options: &Options) -> PResult<Vec<Token<'src>>> {
    Lexer::new(src)
        .skip_unrecognized(options.skip_unrecognized)
        .collect()
}
