//! Recursive-descent / Pratt parser that turns a token stream into a
//! [`Program`].
//!
//! The parser never aborts on the first error: each failure is recorded as a
//! [`ParseDiagnostic`] and parsing resynchronizes at the next statement or
//! function boundary, so a single source file can report more than one
//! mistake per run. Parsing still gives up entirely once ten diagnostics have
//! been recorded — continuing past that point produces mostly noise.

mod ast;
mod error;
mod expr;
mod print;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::*;
pub use error::{ParseDiagnostic, ParseError};
pub use print::format_program;

use slc_lex::{Token, TokenKind};
use slc_util::{Interner, Symbol};

/// Diagnostics recorded past this count abort parsing outright.
const MAX_ERRORS: usize = 10;

pub struct Parser {
    tokens: Vec<Token>,
    interner: Interner<TokenKind>,
    pos: usize,
    /// Set while parsing a function body; used to reject a nested `fn`.
    in_func: bool,
    has_main: bool,
    diagnostics: Vec<ParseDiagnostic>,
}

/// Parses a complete token stream (as produced by `slc-lex::Lexer::lex`)
/// into a [`Program`]. On success, a function named `main` is guaranteed to
/// exist. On failure, returns every diagnostic collected before parsing gave
/// up. The interner is handed back in both cases — AST symbols are only
/// indices into it, so a caller that wants to print names (or re-resolve a
/// diagnostic's context) needs it regardless of outcome.
pub fn parse(
    tokens: Vec<Token>,
    interner: Interner<TokenKind>,
) -> (Result<Program, Vec<ParseDiagnostic>>, Interner<TokenKind>) {
    let mut parser = Parser::new(tokens, interner);
    let result = parser.parse_program();
    (result, parser.interner)
}

impl Parser {
    pub fn new(tokens: Vec<Token>, interner: Interner<TokenKind>) -> Self {
        Self {
            tokens,
            interner,
            pos: 0,
            in_func: false,
            has_main: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, Vec<ParseDiagnostic>> {
        let mut program = Program::default();

        self.skip_newlines();
        while !self.at(TokenKind::End) {
            match self.parse_function() {
                Ok(function) => {
                    if self.interner.resolve(function.name) == "main" {
                        self.has_main = true;
                    }
                    program.functions.push(function);
                }
                Err(diag) => {
                    if self.record(diag) {
                        return Err(std::mem::take(&mut self.diagnostics));
                    }
                    self.synchronize_to_top_level();
                }
            }
            self.skip_newlines();
        }

        if !self.has_main {
            self.record(ParseDiagnostic::new(ParseError::MissingMain));
        }

        if self.diagnostics.is_empty() {
            Ok(program)
        } else {
            Err(std::mem::take(&mut self.diagnostics))
        }
    }

    fn parse_function(&mut self) -> Result<Function, ParseDiagnostic> {
        let start = self.expect(TokenKind::Fn)?;
        let name_tok = self.expect(TokenKind::Identifier)?;
        let name = name_tok.text.expect("identifier token always carries text");

        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                let param = self.expect(TokenKind::Identifier)?;
                params.push(param.text.expect("identifier token always carries text"));
                if self.check(TokenKind::Comma) {
                    self.bump();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;

        let was_in_func = std::mem::replace(&mut self.in_func, true);
        let body = self.parse_block()?;
        self.in_func = was_in_func;

        Ok(Function {
            name,
            params,
            body,
            return_type: None,
            span: start.span,
        })
    }

    /// `NEWLINE INDENT statement* DEDENT`, with blank-line `NEWLINE`s inside
    /// the block simply skipped rather than treated as empty statements.
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseDiagnostic> {
        self.skip_newlines();
        self.expect(TokenKind::Indent)?;
        let mut stmts = Vec::new();
        self.skip_newlines();
        while !self.check(TokenKind::Dedent) && !self.at(TokenKind::End) {
            match self.parse_statement() {
                Ok(Some(stmt)) => stmts.push(stmt),
                Ok(None) => {}
                Err(diag) => {
                    if self.record(diag) {
                        return Err(ParseDiagnostic::new(ParseError::TooManyErrors {
                            count: self.diagnostics.len(),
                        }));
                    }
                    self.synchronize_to_statement();
                }
            }
            self.skip_newlines();
        }
        self.expect(TokenKind::Dedent)?;
        Ok(stmts)
    }

    /// Records a diagnostic, returning `true` if the error budget has just
    /// been exhausted and the caller should unwind all the way out. Per the
    /// "more than 10 errors aborts" rule, the 10th diagnostic is still
    /// recorded normally; only the 11th trips the abort.
    fn record(&mut self, diag: ParseDiagnostic) -> bool {
        self.diagnostics.push(diag);
        if self.diagnostics.len() > MAX_ERRORS {
            self.diagnostics.push(ParseDiagnostic::new(ParseError::TooManyErrors {
                count: self.diagnostics.len(),
            }));
            true
        } else {
            false
        }
    }

    /// Skips forward to the next `fn` keyword (or end of input) after a
    /// broken top-level item, so one malformed function doesn't hide errors
    /// in every function after it.
    fn synchronize_to_top_level(&mut self) {
        while !self.at(TokenKind::End) && !self.check(TokenKind::Fn) {
            self.bump();
        }
    }

    /// Skips forward to the next statement-starting keyword, a `NEWLINE`, or
    /// a `DEDENT` closing the current block.
    fn synchronize_to_statement(&mut self) {
        while !self.at(TokenKind::End) {
            if matches!(
                self.current().kind,
                TokenKind::Newline | TokenKind::Dedent
            ) {
                return;
            }
            if matches!(
                self.current().kind,
                TokenKind::If
                    | TokenKind::While
                    | TokenKind::For
                    | TokenKind::Print
                    | TokenKind::Return
                    | TokenKind::Fn
            ) {
                return;
            }
            self.bump();
        }
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.bump();
        }
    }

    pub(crate) fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    pub(crate) fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::End)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.check(kind)
    }

    pub(crate) fn bump(&mut self) -> Token {
        let tok = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseDiagnostic> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            let found = self.current();
            Err(ParseDiagnostic::new(ParseError::ExpectedToken {
                expected: kind,
                found: found.kind,
                span: found.span,
            }))
        }
    }

    pub(crate) fn resolve(&self, symbol: Symbol) -> &str {
        self.interner.resolve(symbol)
    }
}
