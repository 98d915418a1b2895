//! Statement dispatch: `if`/`elif`/`else`, `while`, `for`, assignment,
//! `print`, `return`, and calls used as statements.

use slc_lex::TokenKind;
use slc_util::Span;

use crate::ast::{Assignment, Call, Expr, For, If, Number, Print, Return, Stmt, While};
use crate::error::{ParseDiagnostic, ParseError};
use crate::Parser;

impl Parser {
    /// Dispatches on the current token. Returns `Ok(None)` for `match`,
    /// which is reserved but produces no AST node: a
    /// `ParseError::NotYetImplemented` is recorded in its place.
    pub(crate) fn parse_statement(&mut self) -> Result<Option<Stmt>, ParseDiagnostic> {
        match self.current().kind {
            TokenKind::Fn => {
                // A nested `fn` can only be reached from inside a function
                // body, since top-level functions are parsed directly by
                // `Parser::parse_program` and never go through here.
                let tok = self.bump();
                Err(ParseDiagnostic::new(ParseError::NestedFunction { span: tok.span }))
            }
            TokenKind::If => self.parse_if().map(Some),
            TokenKind::For => self.parse_for().map(Some),
            TokenKind::While => self.parse_while().map(Some),
            TokenKind::Print => self.parse_print().map(Some),
            TokenKind::Return => self.parse_return().map(Some),
            TokenKind::Match => {
                let span = self.current().span;
                self.skip_to_line_end();
                if self.record(ParseDiagnostic::new(ParseError::NotYetImplemented {
                    keyword: "match",
                    span,
                })) {
                    return Err(ParseDiagnostic::new(ParseError::TooManyErrors {
                        count: self.diagnostics.len(),
                    }));
                }
                Ok(None)
            }
            TokenKind::Identifier => match self.peek_kind(1) {
                TokenKind::LParen => self.parse_call_stmt().map(Some),
                TokenKind::Assign => self.parse_assignment().map(Some),
                _ => self.parse_expr_stmt().map(Some),
            },
            _ => {
                let tok = self.current();
                Err(ParseDiagnostic::new(ParseError::UnexpectedToken {
                    found: tok.kind,
                    span: tok.span,
                }))
            }
        }
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseDiagnostic> {
        let if_tok = self.expect(TokenKind::If)?;
        let condition = self.parse_expr(0)?;
        let body = self.parse_block()?;
        let mut head = If {
            condition: Some(condition),
            body,
            else_body: None,
            span: if_tok.span,
        };

        let mut tail = &mut head;
        loop {
            if self.check(TokenKind::Elif) {
                let elif_tok = self.bump();
                let condition = self.parse_expr(0)?;
                let body = self.parse_block()?;
                tail.else_body = Some(Box::new(If {
                    condition: Some(condition),
                    body,
                    else_body: None,
                    span: elif_tok.span,
                }));
                tail = tail.else_body.as_mut().unwrap();
            } else if self.check(TokenKind::Else) {
                let else_tok = self.bump();
                let body = self.parse_block()?;
                tail.else_body = Some(Box::new(If {
                    condition: None,
                    body,
                    else_body: None,
                    span: else_tok.span,
                }));
                break;
            } else {
                break;
            }
        }

        Ok(Stmt::If(head))
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseDiagnostic> {
        let tok = self.expect(TokenKind::While)?;
        let condition = self.parse_expr(0)?;
        let body = self.parse_block()?;
        Ok(Stmt::While(While {
            condition,
            body,
            span: tok.span,
        }))
    }

    /// `for IDENT from START to END [by STEP] block`. A missing `by` is only
    /// valid when both bounds are numeric literals, since otherwise the
    /// counting direction can't be decided without running the program.
    fn parse_for(&mut self) -> Result<Stmt, ParseDiagnostic> {
        let for_tok = self.expect(TokenKind::For)?;
        let ident_tok = self.expect(TokenKind::Identifier)?;
        let var_name = ident_tok.text.expect("identifier token always carries text");
        self.expect(TokenKind::From)?;
        let start = self.parse_expr(0)?;
        self.expect(TokenKind::To)?;
        let end = self.parse_expr(0)?;

        let step = if self.check(TokenKind::By) {
            self.bump();
            self.parse_expr(0)?
        } else {
            default_for_step(&start, &end, for_tok.span)?
        };

        let body = self.parse_block()?;
        let initializer = Assignment {
            var_name,
            value: start,
            span: ident_tok.span,
        };

        Ok(Stmt::For(For {
            initializer,
            condition: end,
            step,
            body,
            span: for_tok.span,
        }))
    }

    fn parse_assignment(&mut self) -> Result<Stmt, ParseDiagnostic> {
        let name_tok = self.expect(TokenKind::Identifier)?;
        let var_name = name_tok.text.expect("identifier token always carries text");
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expr(0)?;
        Ok(Stmt::Assignment(Assignment {
            var_name,
            value,
            span: name_tok.span,
        }))
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseDiagnostic> {
        let tok = self.expect(TokenKind::Print)?;
        let expression = self.parse_expr(0)?;
        Ok(Stmt::Print(Print {
            expression,
            span: tok.span,
        }))
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseDiagnostic> {
        let tok = self.expect(TokenKind::Return)?;
        let expression = if matches!(
            self.current().kind,
            TokenKind::Newline | TokenKind::Dedent | TokenKind::End
        ) {
            None
        } else {
            Some(self.parse_expr(0)?)
        };
        Ok(Stmt::Return(Return {
            expression,
            span: tok.span,
        }))
    }

    fn parse_call_stmt(&mut self) -> Result<Stmt, ParseDiagnostic> {
        let name_tok = self.expect(TokenKind::Identifier)?;
        let name = name_tok.text.expect("identifier token always carries text");
        let args = self.parse_call_args()?;
        Ok(Stmt::Call(Call {
            name,
            args,
            span: name_tok.span,
        }))
    }

    /// The grammar's catch-all: an identifier that is neither a call nor an
    /// assignment target, e.g. a bare `i++` on its own line.
    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseDiagnostic> {
        let expr = self.parse_expr(0)?;
        Ok(Stmt::Expr(expr))
    }

    /// Advances past whatever is left on the current logical line, used to
    /// discard a reserved `match` statement without producing a node.
    fn skip_to_line_end(&mut self) {
        while !matches!(
            self.current().kind,
            TokenKind::Newline | TokenKind::Dedent | TokenKind::End
        ) {
            self.bump();
        }
    }
}

fn default_for_step(start: &Expr, end: &Expr, span: Span) -> Result<Expr, ParseDiagnostic> {
    match (start, end) {
        (Expr::Number(s), Expr::Number(e)) => {
            let value = if e.value >= s.value { 1.0 } else { -1.0 };
            Ok(Expr::Number(Number {
                value,
                is_float: false,
                span,
            }))
        }
        _ => Err(ParseDiagnostic::new(ParseError::UndecidableForStep { span })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slc_lex::lex_str;

    fn parse_stmt_str(src: &str) -> Stmt {
        let result = lex_str(src).unwrap();
        let mut parser = Parser::new(result.tokens, result.interner);
        parser.parse_statement().unwrap().unwrap()
    }

    #[test]
    fn if_elif_else_chains_right() {
        let src = "if a\n    print 1\nelif b\n    print 2\nelse\n    print 3\n";
        let stmt = parse_stmt_str(src);
        let Stmt::If(top) = stmt else { panic!("expected if") };
        assert!(top.condition.is_some());
        let elif = top.else_body.expect("elif branch");
        assert!(elif.condition.is_some());
        let else_branch = elif.else_body.expect("else branch");
        assert!(else_branch.condition.is_none());
        assert!(else_branch.else_body.is_none());
    }

    #[test]
    fn for_loop_default_step_counts_up() {
        let src = "for i from 1 to 5\n    print i\n";
        let stmt = parse_stmt_str(src);
        let Stmt::For(f) = stmt else { panic!("expected for") };
        match f.step {
            Expr::Number(n) => assert_eq!(n.value, 1.0),
            _ => panic!("expected a number step"),
        }
    }

    #[test]
    fn for_loop_default_step_counts_down() {
        let src = "for i from 5 to 1\n    print i\n";
        let stmt = parse_stmt_str(src);
        let Stmt::For(f) = stmt else { panic!("expected for") };
        match f.step {
            Expr::Number(n) => assert_eq!(n.value, -1.0),
            _ => panic!("expected a number step"),
        }
    }

    #[test]
    fn for_loop_non_numeric_bounds_require_by() {
        let result = lex_str("for i from x to y\n    print i\n").unwrap();
        let mut parser = Parser::new(result.tokens, result.interner);
        let err = parser.parse_statement().unwrap_err();
        assert!(matches!(err.error, ParseError::UndecidableForStep { .. }));
    }

    #[test]
    fn assignment_statement() {
        let stmt = parse_stmt_str("x = 1 + 2\n");
        assert!(matches!(stmt, Stmt::Assignment(_)));
    }

    #[test]
    fn call_used_as_a_statement() {
        let stmt = parse_stmt_str("log(x)\n");
        assert!(matches!(stmt, Stmt::Call(_)));
    }

    #[test]
    fn return_with_no_expression() {
        let stmt = parse_stmt_str("return\n");
        let Stmt::Return(r) = stmt else { panic!("expected return") };
        assert!(r.expression.is_none());
    }

    #[test]
    fn match_statement_records_not_yet_implemented() {
        let result = lex_str("match x\n    print 1\n").unwrap();
        let mut parser = Parser::new(result.tokens, result.interner);
        assert!(parser.parse_statement().unwrap().is_none());
        assert!(parser
            .diagnostics
            .iter()
            .any(|d| matches!(d.error, ParseError::NotYetImplemented { keyword: "match", .. })));
    }
}
