use std::{iter::Peekable, str::CharIndices};

use crate::error::{ErrorKind, PResult};

use super::{operation::Operation, token::Token};

/// Streams tokens out of a source string, borrowing each lexeme from it.
///
/// Stops at the end of input. In strict mode, yields `Err` for a character
/// that starts no token.
pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    skip_unrecognized: bool,
    last: Option<Token<'src>>,
    current: Option<Token<'src>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = match self.chars.next()? {
                (_, '(') => Token::LParen,
                (_, ')') => Token::RParen,
                (off, c) if c.is_ascii_digit() => self.read_number(off, c),
                (off, c) if Self::is_operator(c) => Token::Op(&self.src[off..off + c.len_utf8()]),
                (_, c) if c.is_whitespace() => continue,
                (offset, ch) => {
                    if self.skip_unrecognized {
                        log::warn!("Skipping unrecognized character `{ch}` at offset {offset}");
                        continue;
                    }
                    return Some(Err(ErrorKind::Lex { ch, offset }));
                }
            };

            log::trace!("Lexed {token:?}");
            self.last = self.current.replace(token);
            return Some(Ok(token));
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            skip_unrecognized: false,
            last: None,
            current: None,
        }
    }

    /// Skip characters that start no token instead of yielding an error.
    pub fn skip_unrecognized(mut self, skip: bool) -> Self {
        self.skip_unrecognized = skip;
        self
    }

    /// The token most recently returned by `next`.
    pub fn current(&self) -> Option<Token<'src>> {
        self.current
    }

    /// The token returned before `current`.
    pub fn last(&self) -> Option<Token<'src>> {
        self.last
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    // Digits, then at most one `.` (never after the exponent), at most one
    // `e`/`E`, and a sign only directly after the exponent marker.
    fn read_number(&mut self, from_off: usize, first: char) -> Token<'src> {
        let mut seen_dot = false;
        let mut seen_exp = false;
        let mut prev = first;

        while let Some(&(off, c)) = self.chars.peek() {
            let extends = match c {
                '0'..='9' => true,
                '.' if !seen_dot && !seen_exp => {
                    seen_dot = true;
                    true
                }
                'e' | 'E' if !seen_exp => {
                    seen_exp = true;
                    true
                }
                '+' | '-' => matches!(prev, 'e' | 'E'),
                _ => false,
            };

            if !extends {
                return Token::Number(&self.src[from_off..off]);
            }
            prev = c;
            self.bump();
        }
        Token::Number(&self.src[from_off..])
    }

    fn is_operator(c: char) -> bool {
        Operation::ALL.iter().any(|op| op.symbol() == c)
    }
}
