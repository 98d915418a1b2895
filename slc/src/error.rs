//! CLI-level error type.
//!
//! Domain diagnostics (lex/parse failures) are printed directly to stderr in
//! the front end's wire format before one of these is returned — this type
//! only exists to give `main` a typed reason to exit non-zero with.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("lexing failed")]
    Lex,
    #[error("parsing failed")]
    Parse,
}
