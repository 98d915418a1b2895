//! slc-lex - tokenizer for the source language.
//!
//! Turns physical source lines, handed over one at a time by something
//! implementing [`LineSource`], into a flat [`Vec<Token>`] plus an
//! [`Interner<TokenKind>`] owning every identifier and literal's text.
//! Indentation is folded into synthetic `Indent`/`Dedent`/`Newline` tokens
//! during the same pass, so nothing downstream ever looks at whitespace.
//!
//! This crate does no file I/O and knows nothing about the grammar; it only
//! knows how to turn bytes into tokens.

mod cursor;
mod error;
mod lexer;
mod line_source;
mod token;
mod trie;

pub use error::LexError;
pub use lexer::Lexer;
pub use line_source::{LineSource, SliceLineSource};
pub use token::{Token, TokenKind};

use slc_util::Interner;

/// Everything a successful lex produces: the token stream and the interner
/// that resolves every `Token::text` back to its source bytes.
#[derive(Debug)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub interner: Interner<TokenKind>,
}

/// Lexes an entire in-memory source string in one call, for tests and other
/// callers that already hold the whole file in memory.
pub fn lex_str(source: &str) -> Result<LexResult, LexError> {
    let mut source_stream = SliceLineSource::new(source);
    Lexer::new().lex(&mut source_stream)
}
