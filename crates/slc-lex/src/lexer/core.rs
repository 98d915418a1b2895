//! Lexer struct, the outer line-driven loop, and the indentation algorithm.

use slc_util::{Interner, Span};

use crate::cursor::LineCursor;
use crate::error::LexError;
use crate::line_source::LineSource;
use crate::token::{Token, TokenKind};
use crate::trie::OperatorTrie;
use crate::LexResult;

/// Maximum nesting depth the indent stack tolerates, mirroring the
/// reference lexer's fixed-size indent-level array.
pub const MAX_INDENT_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndentStyle {
    Unknown,
    Spaces,
    Tabs,
}

pub(crate) struct MultilineState {
    pub start_span: Span,
    pub buffer: String,
}

/// Turns a stream of physical lines into a flat token vector.
///
/// One `Lexer` is used for exactly one source file: it owns the indentation
/// stack, the operator trie, and the interner that every identifier and
/// literal token's text lives in.
pub struct Lexer {
    pub(crate) interner: Interner<TokenKind>,
    pub(crate) tokens: Vec<Token>,
    pub(crate) trie: OperatorTrie,
    pub(crate) line: u32,
    pub(crate) indent_style: IndentStyle,
    pub(crate) spaces_per_level: u32,
    pub(crate) indent_stack: Vec<u32>,
    pub(crate) multiline: Option<MultilineState>,
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            interner: Interner::new(),
            tokens: Vec::new(),
            trie: OperatorTrie::new(),
            line: 0,
            indent_style: IndentStyle::Unknown,
            spaces_per_level: 0,
            indent_stack: vec![0],
            multiline: None,
        }
    }

    /// Drains `source` line by line until EOF, returning the full token
    /// stream and the interner backing it.
    pub fn lex(mut self, source: &mut dyn LineSource) -> Result<LexResult, LexError> {
        let mut buf = Vec::new();
        loop {
            let read = source
                .stream_line(&mut buf)
                .map_err(|e| LexError::Io(e.to_string()))?;
            if read == 0 {
                break;
            }
            self.line += 1;

            if let Some(state) = self.multiline.take() {
                self.continue_multiline_string(state, &buf)?;
                continue;
            }
            self.process_line(&buf)?;
        }

        if let Some(state) = self.multiline.take() {
            return Err(LexError::UnterminatedMultilineString {
                span: state.start_span,
            });
        }

        self.close_remaining_indents();
        self.tokens.push(Token::new(
            TokenKind::End,
            None,
            Span::new(self.line + 1, 0),
        ));

        Ok(LexResult {
            tokens: self.tokens,
            interner: self.interner,
        })
    }

    fn process_line(&mut self, line: &[u8]) -> Result<(), LexError> {
        let (indent_width, body_start) = self.measure_indent(line)?;

        if super::comment::is_blank_or_comment_only(&line[body_start..]) {
            return Ok(());
        }

        self.apply_indent_change(indent_width)?;

        let mut cursor = LineCursor::new(&line[body_start..]);
        let base_column = body_start as u32;
        let mut emitted_any = false;

        loop {
            super::comment::skip_inline_whitespace(&mut cursor);
            if cursor.is_eof() {
                break;
            }
            if cursor.peek() == Some(b';') {
                break;
            }
            self.lex_one_token(&mut cursor, base_column)?;
            emitted_any = true;
        }

        if emitted_any {
            self.tokens.push(Token::new(
                TokenKind::Newline,
                None,
                Span::new(self.line, line.len() as u32),
            ));
        }
        Ok(())
    }

    fn lex_one_token(&mut self, cursor: &mut LineCursor<'_>, base_column: u32) -> Result<(), LexError> {
        let column = base_column + cursor.column();
        let span = Span::new(self.line, column);
        let byte = cursor.peek().expect("lex_one_token called at EOF");

        if byte == b'"' {
            return self.lex_string(cursor, span);
        }
        if byte.is_ascii_digit() {
            return self.lex_number(cursor, span);
        }
        if byte.is_ascii_alphabetic() || byte == b'_' {
            return self.lex_identifier(cursor, span);
        }
        if crate::trie::SYMBOL_ALPHABET.contains(&byte) {
            return self.lex_operator(cursor, span);
        }
        Err(LexError::UnrecognizedCharacter { byte, span })
    }
}

impl Lexer {
    pub(crate) fn push_bare(&mut self, kind: TokenKind, span: Span) {
        self.tokens.push(Token::new(kind, None, span));
    }

    pub(crate) fn push_literal(&mut self, kind: TokenKind, text: &str, span: Span) {
        let (symbol, _) = self.interner.intern(text, kind);
        self.tokens.push(Token::new(kind, Some(symbol), span));
    }

    /// Measures leading indentation, returning `(width, byte offset of the
    /// first non-whitespace byte)`. Tabs and spaces may not mix within a
    /// single file: the first indented line fixes the style for the rest of
    /// the file.
    fn measure_indent(&mut self, line: &[u8]) -> Result<(u32, usize), LexError> {
        let mut i = 0;
        let mut saw_space = false;
        let mut saw_tab = false;
        while i < line.len() {
            match line[i] {
                b' ' => {
                    saw_space = true;
                    i += 1;
                }
                b'\t' => {
                    saw_tab = true;
                    i += 1;
                }
                _ => break,
            }
        }
        if saw_space && saw_tab {
            return Err(LexError::MixedIndentation {
                span: Span::new(self.line, 0),
            });
        }
        if super::comment::is_blank_or_comment_only(&line[i..]) {
            return Ok((0, i));
        }
        match self.indent_style {
            IndentStyle::Unknown if i > 0 => {
                self.indent_style = if saw_tab {
                    IndentStyle::Tabs
                } else {
                    IndentStyle::Spaces
                };
                self.spaces_per_level = i as u32;
            }
            IndentStyle::Spaces if saw_tab => {
                return Err(LexError::MixedIndentation {
                    span: Span::new(self.line, 0),
                })
            }
            IndentStyle::Tabs if saw_space => {
                return Err(LexError::MixedIndentation {
                    span: Span::new(self.line, 0),
                })
            }
            _ => {}
        }
        Ok((i as u32, i))
    }

    /// Reduces a raw indentation width (space or tab count) to a normalized
    /// level: in `SPACES` mode, `width` must be an exact multiple of
    /// `spaces_per_level`; in `TABS` mode, the tab count already is the
    /// level.
    fn normalized_indent_level(&self, width: u32) -> Result<u32, LexError> {
        if width == 0 {
            return Ok(0);
        }
        match self.indent_style {
            IndentStyle::Spaces => {
                if width % self.spaces_per_level != 0 {
                    return Err(LexError::InconsistentIndentStep {
                        span: Span::new(self.line, width),
                    });
                }
                Ok(width / self.spaces_per_level)
            }
            IndentStyle::Tabs => Ok(width),
            IndentStyle::Unknown => Ok(0),
        }
    }

    fn apply_indent_change(&mut self, width: u32) -> Result<(), LexError> {
        let level = self.normalized_indent_level(width)?;
        let current = *self.indent_stack.last().unwrap();
        if level > current {
            if level != current + 1 {
                return Err(LexError::InconsistentIndentStep {
                    span: Span::new(self.line, width),
                });
            }
            if self.indent_stack.len() > MAX_INDENT_DEPTH {
                return Err(LexError::IndentTooDeep {
                    max: MAX_INDENT_DEPTH as u32,
                    span: Span::new(self.line, width),
                });
            }
            self.indent_stack.push(level);
            self.push_bare(TokenKind::Indent, Span::new(self.line, 0));
        } else if level < current {
            while *self.indent_stack.last().unwrap() > level {
                self.indent_stack.pop();
                self.push_bare(TokenKind::Dedent, Span::new(self.line, 0));
            }
            if *self.indent_stack.last().unwrap() != level {
                return Err(LexError::InconsistentDedent {
                    span: Span::new(self.line, width),
                });
            }
        }
        Ok(())
    }

    fn close_remaining_indents(&mut self) {
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.push_bare(TokenKind::Dedent, Span::new(self.line + 1, 0));
        }
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}
