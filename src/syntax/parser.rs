use std::{iter::Peekable, vec};

use crate::{
    error::{ErrorKind, PResult},
    options::Options,
};

use super::{expr::Expression, lexer::Lexer, operation::Operation, token::Token};

/// Deepest parenthesis nesting accepted before giving up.
pub(crate) const MAX_DEPTH: usize = 256;

/// Outcome of consuming one operator and its right operand.
#[derive(Debug, PartialEq)]
pub(crate) enum Step {
    Continue(Expression),
    /// Input exhausted.
    End(Expression),
    /// A `)` was consumed.
    Close(Expression),
}

pub(crate) struct Parser<'src> {
    tokens: Peekable<vec::IntoIter<Token<'src>>>,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str, options: &Options) -> PResult<Self> {
        let tokens = Lexer::new(src)
            .skip_unrecognized(options.skip_unrecognized)
            .collect::<PResult<Vec<_>>>()?;
        Ok(Self::from_tokens(tokens))
    }

    pub fn from_tokens(tokens: Vec<Token<'src>>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            depth: 0,
        }
    }

    pub fn parse(mut self) -> PResult<f64> {
        let value = self.parse_expr()?.evaluate();
        log::debug!("Evaluated to {value}");
        Ok(value)
    }

    // Entry point and target for parenthesized groups. Always hands back a
    // literal, so a group looks like a plain number to whoever asked for it.
    fn parse_expr(&mut self) -> PResult<Expression> {
        if self.tokens.peek().is_none() {
            return Err(ErrorKind::Syntax("Expected expression, found EOF".into()));
        }

        let mut lhs = self.parse_operand()?;
        let lhs = loop {
            match self.continuation(lhs)? {
                Step::Continue(next) => lhs = next,
                Step::End(expr) => {
                    if self.depth > 0 {
                        return Err(ErrorKind::Syntax("Expected `)`, found EOF".into()));
                    }
                    break expr;
                }
                Step::Close(expr) => {
                    if self.depth == 0 {
                        return Err(ErrorKind::Syntax("Unmatched `)`".into()));
                    }
                    break expr;
                }
            }
        };

        Ok(Expression::Literal(lhs.evaluate()))
    }

    fn parse_operand(&mut self) -> PResult<Expression> {
        let negate = match self.tokens.peek().copied() {
            None => {
                return Err(ErrorKind::Syntax("Expected operand, found EOF".into()));
            }
            Some(Token::Op(sym)) if Operation::from_symbol(sym) == Some(Operation::Sub) => {
                self.bump();
                true
            }
            Some(Token::Op(sym)) => {
                return Err(ErrorKind::Syntax(format!(
                    "Expected operand, found operator `{sym}`"
                )));
            }
            Some(_) => false,
        };

        let value = match self.tokens.next() {
            None => {
                return Err(ErrorKind::Syntax(
                    "Expected operand after `-`, found EOF".into(),
                ))
            }
            Some(Token::LParen) => self.parse_grouping_expr()?.evaluate(),
            Some(Token::Number(lexeme)) => Self::parse_number(lexeme)?,
            Some(other) => {
                return Err(ErrorKind::Syntax(format!(
                    "Expected operand, found `{}`",
                    other.lexeme()
                )))
            }
        };

        Ok(Expression::Literal(if negate { -value } else { value }))
    }

    fn parse_grouping_expr(&mut self) -> PResult<Expression> {
        if self.depth >= MAX_DEPTH {
            return Err(ErrorKind::Syntax("Nesting too deep".into()));
        }
        self.depth += 1;
        let expr = self.parse_expr()?;
        self.depth -= 1;
        Ok(expr)
    }

    pub(super) fn continuation(&mut self, mut lhs: Expression) -> PResult<Step> {
        let op = match self.tokens.next() {
            None => return Ok(Step::End(lhs)),
            Some(Token::RParen) => return Ok(Step::Close(lhs)),
            Some(Token::Op(sym)) => Operation::from_symbol(sym).ok_or_else(|| {
                ErrorKind::Syntax(format!("Unknown operator `{sym}`"))
            })?,
            Some(other) => {
                return Err(ErrorKind::Syntax(format!(
                    "Expected operator, found `{}`",
                    other.lexeme()
                )))
            }
        };

        let rhs = self.parse_operand()?;

        if op.is_high_precedence() {
            let rhs = rhs.evaluate();
            log::trace!("Folding `{}` {rhs} into the rightmost operand", op.symbol());
            lhs.fold_rightmost(op, rhs);
            return Ok(Step::Continue(lhs));
        }

        Ok(Step::Continue(Expression::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }))
    }

    #[inline(always)]
    fn bump(&mut self) {
        let _ = self.tokens.next();
    }

    fn parse_number(lexeme: &str) -> PResult<f64> {
        lexeme
            .parse::<f64>()
            .map_err(|_| ErrorKind::Syntax(format!("Invalid number literal `{lexeme}`")))
    }
}

#[cfg(test)]
mod test {
    use super::{Parser, Step, MAX_DEPTH};
    use crate::{
        error::ErrorKind,
        options::Options,
        syntax::{expr::Expression, operation::Operation},
    };

    fn parse(src: &str) -> Result<f64, ErrorKind> {
        Parser::new(src, &Options::default())?.parse()
    }

    #[test]
    fn continuation_folds_into_spine() {
        use Expression::*;
        use Operation::*;

        let mut parser = Parser::new("1 + 2 * 3 - 4", &Options::default()).unwrap();
        let lhs = parser.parse_operand().unwrap();
        assert_eq!(lhs, Literal(1.0));

        let Step::Continue(lhs) = parser.continuation(lhs).unwrap() else {
            panic!("expected continuation");
        };
        let Step::Continue(lhs) = parser.continuation(lhs).unwrap() else {
            panic!("expected continuation");
        };
        assert_eq!(
            lhs,
            Binary {
                lhs: Box::new(Literal(1.0)),
                op: Add,
                rhs: Box::new(Literal(6.0)),
            }
        );

        let Step::Continue(lhs) = parser.continuation(lhs).unwrap() else {
            panic!("expected continuation");
        };
        let expected = Binary {
            lhs: Box::new(Binary {
                lhs: Box::new(Literal(1.0)),
                op: Add,
                rhs: Box::new(Literal(6.0)),
            }),
            op: Sub,
            rhs: Box::new(Literal(4.0)),
        };
        assert_eq!(lhs, expected);

        assert_eq!(parser.continuation(lhs.clone()).unwrap(), Step::End(lhs));
    }

    #[test]
    fn multiplicative_chain_stays_literal() {
        let mut parser = Parser::new("8 / 2 * 3", &Options::default()).unwrap();
        let lhs = parser.parse_operand().unwrap();
        let Step::Continue(lhs) = parser.continuation(lhs).unwrap() else {
            panic!("expected continuation");
        };
        assert_eq!(lhs, Expression::Literal(4.0));
        let Step::Continue(lhs) = parser.continuation(lhs).unwrap() else {
            panic!("expected continuation");
        };
        assert_eq!(lhs, Expression::Literal(12.0));
    }

    #[test]
    fn parse_grouping() {
        assert_eq!(parse("(4 + 10) * -1"), Ok(-14.0));
        assert_eq!(parse("-8 + 5 * (13 - 1) * -1"), Ok(-68.0));
        assert_eq!(parse("(-8 + 5) * (13 - 1) * -1"), Ok(36.0));
        assert_eq!(parse("-(2 + 3)"), Ok(-5.0));
        assert_eq!(parse("((2))"), Ok(2.0));
    }

    #[test]
    fn unbalanced_parens() {
        assert_eq!(
            parse("(1+2"),
            Err(ErrorKind::Syntax("Expected `)`, found EOF".into()))
        );
        assert_eq!(
            parse("1+2)"),
            Err(ErrorKind::Syntax("Unmatched `)`".into()))
        );
        assert!(parse("()").is_err());
    }

    #[test]
    fn nesting_limit() {
        let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

        assert_eq!(parse(&nested(MAX_DEPTH)), Ok(1.0));
        assert_eq!(
            parse(&nested(MAX_DEPTH + 1)),
            Err(ErrorKind::Syntax("Nesting too deep".into()))
        );
        assert_eq!(
            parse(&nested(10_000)),
            Err(ErrorKind::Syntax("Nesting too deep".into()))
        );
    }

    #[test]
    fn operand_errors() {
        assert_eq!(
            parse("*5"),
            Err(ErrorKind::Syntax("Expected operand, found operator `*`".into()))
        );
        assert_eq!(
            parse("+5"),
            Err(ErrorKind::Syntax("Expected operand, found operator `+`".into()))
        );
        assert_eq!(
            parse("1+"),
            Err(ErrorKind::Syntax("Expected operand, found EOF".into()))
        );
        assert_eq!(
            parse("-"),
            Err(ErrorKind::Syntax("Expected operand after `-`, found EOF".into()))
        );
        assert_eq!(
            parse("--1"),
            Err(ErrorKind::Syntax("Expected operand, found `-`".into()))
        );
        assert_eq!(
            parse(""),
            Err(ErrorKind::Syntax("Expected expression, found EOF".into()))
        );
    }

    #[test]
    fn operator_expected() {
        assert_eq!(
            parse("(1)2"),
            Err(ErrorKind::Syntax("Expected operator, found `2`".into()))
        );
        assert_eq!(
            parse("2(1)"),
            Err(ErrorKind::Syntax("Expected operator, found `(`".into()))
        );
    }

    #[test]
    fn invalid_number_literal() {
        assert_eq!(
            parse("1e+"),
            Err(ErrorKind::Syntax("Invalid number literal `1e+`".into()))
        );
    }
}
