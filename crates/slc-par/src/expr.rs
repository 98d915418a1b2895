//! Pratt (operator-precedence) expression parsing.

use slc_lex::TokenKind;

use crate::ast::{BinaryOp, Call, Expr, Identifier, Number, StringLit, UnaryOp};
use crate::error::{ParseDiagnostic, ParseError};
use crate::Parser;

/// Precedence a unary operator's operand is parsed at. Operators that also
/// have a binary meaning (`-`) bind one tighter than that meaning; the
/// purely-unary ones (`! ~ ++ --`) bind tighter than anything, since no
/// binary operator can ever follow them directly.
fn unary_bind_prec(op: TokenKind) -> u8 {
    op.precedence().map(|p| p + 1).unwrap_or(8)
}

impl Parser {
    /// Parses an expression, folding in binary operators whose precedence is
    /// at least `min_prec`. Terminates naturally at any token that isn't a
    /// binary operator — `,`, `)`, `NEWLINE` included — since none of those
    /// have a precedence.
    pub(crate) fn parse_expr(&mut self, min_prec: u8) -> Result<Expr, ParseDiagnostic> {
        let mut left = self.parse_unary()?;

        loop {
            let op = self.current().kind;
            let Some(prec) = op.precedence() else { break };
            if prec < min_prec {
                break;
            }
            let op_span = self.current().span;
            self.bump();
            let right = self.parse_expr(prec + 1)?;

            if (left.is_string() || right.is_string()) && !string_op_allowed(op) {
                // The string-operand rule is a recoverable parse error: fold
                // nothing in and hand back what was already built so the
                // caller doesn't cascade into a second, spurious failure on
                // the same expression.
                return Err(ParseDiagnostic::new(ParseError::StringOperandMisuse {
                    span: op_span,
                }));
            }

            left = Expr::BinaryOp(BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span: op_span,
            });
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseDiagnostic> {
        let tok = self.current();
        if tok.kind.is_unary_operator() {
            self.bump();
            let operand = self.parse_expr(unary_bind_prec(tok.kind))?;
            return Ok(Expr::UnaryOp(UnaryOp {
                op: tok.kind,
                operand: Box::new(operand),
                span: tok.span,
            }));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseDiagnostic> {
        let tok = self.current();
        match tok.kind {
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_expr(0)?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Identifier => {
                self.bump();
                let name = tok.text.expect("identifier token always carries text");
                if self.check(TokenKind::LParen) {
                    let args = self.parse_call_args()?;
                    Ok(Expr::Call(Call {
                        name,
                        args,
                        span: tok.span,
                    }))
                } else {
                    Ok(Expr::Identifier(Identifier {
                        name,
                        span: tok.span,
                    }))
                }
            }
            TokenKind::Integer | TokenKind::Float => {
                self.bump();
                let text = self.resolve(tok.text.expect("numeric token always carries text"));
                let value: f64 = text
                    .parse()
                    .expect("the lexer only ever emits numeric text that parses as f64");
                Ok(Expr::Number(Number {
                    value,
                    is_float: tok.kind == TokenKind::Float,
                    span: tok.span,
                }))
            }
            TokenKind::String | TokenKind::MultilineString => {
                self.bump();
                Ok(Expr::String(StringLit {
                    text: tok.text.expect("string token always carries text"),
                    span: tok.span,
                }))
            }
            _ => Err(ParseDiagnostic::new(ParseError::UnexpectedToken {
                found: tok.kind,
                span: tok.span,
            })),
        }
    }

    /// Parses `(expr, expr, ...)`, already positioned at the opening paren.
    pub(crate) fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseDiagnostic> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr(0)?);
                if self.check(TokenKind::Comma) {
                    self.bump();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }
}

fn string_op_allowed(op: TokenKind) -> bool {
    matches!(op, TokenKind::Add | TokenKind::Eq | TokenKind::NotEq)
}
