//! slc-util - shared foundation types for the source-language front end.
//!
//! This crate has no knowledge of tokens, grammar, or the AST. It exists so
//! that `slc-lex` and `slc-par` share one definition of:
//!
//! - [`symbol::Interner`] / [`symbol::Symbol`] — string interning, generic over
//!   whatever "kind" tag the caller wants to associate with a canonicalized
//!   byte sequence (the lexer instantiates this with its own `TokenKind`).
//! - [`span::Span`] — a 1-based line / 0-based column source position,
//!   attached to every token and AST node.
//!
//! Diagnostic *formatting* is deliberately not here: per the front end's
//! scope, pretty-printed diagnostics are an external collaborator's job. This
//! crate only hands out the raw position data needed to build one.

pub mod span;
pub mod symbol;

pub use span::Span;
pub use symbol::{Interner, InternerStats, Symbol};
