//! Command-line front end: lexes and parses a source file, optionally
//! dumping the token stream and/or AST to stdout.

mod error;
mod line_streamer;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::CliError;
use line_streamer::LineStreamer;
use slc_lex::{LexError, Lexer, Token, TokenKind};
use slc_par::{ParseDiagnostic, ParseError};

#[derive(ClapParser, Debug)]
#[command(name = "slc")]
#[command(author = "slc contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexes and parses a source file", long_about = None)]
struct Cli {
    /// Print the parsed AST to stdout.
    #[arg(short = 'a', long = "emit-ast")]
    emit_ast: bool,

    /// Print the token stream to stdout.
    #[arg(short = 't', long = "emit-tokens")]
    emit_tokens: bool,

    /// Reserved for a future IR-lowering stage; accepted but has no effect.
    #[arg(short = 's', long = "save-ir")]
    save_ir: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,

    /// Source file to compile.
    filename: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "info" })
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .ok();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.save_ir {
        tracing::warn!("--save-ir has no effect: IR lowering is out of scope for this front end");
    }

    let mut streamer = LineStreamer::open(&cli.filename).map_err(|e| {
        eprintln!("{}: {e}", cli.filename.display());
        CliError::Lex
    })?;

    let lex_result = Lexer::new().lex(&mut streamer).map_err(|err| {
        eprintln!("{}", format_lex_error(&err));
        CliError::Lex
    })?;

    if cli.emit_tokens {
        for token in &lex_result.tokens {
            println!("{}", format_token(token, &lex_result.interner));
        }
    }

    let (parsed, interner) = slc_par::parse(lex_result.tokens, lex_result.interner);
    let program = match parsed {
        Ok(program) => program,
        Err(diagnostics) => {
            for diag in &diagnostics {
                eprintln!("{}", format_parse_diagnostic(diag));
            }
            return Err(CliError::Parse);
        }
    };

    if cli.emit_ast {
        print!("{}", slc_par::format_program(&program, &interner));
    }

    Ok(())
}

fn format_token(token: &Token, interner: &slc_util::Interner<TokenKind>) -> String {
    match token.text {
        Some(symbol) => format!(
            "{}:{} {:?}({:?})",
            token.span.line,
            token.span.column,
            token.kind,
            interner.resolve(symbol)
        ),
        None => format!("{}:{} {:?}", token.span.line, token.span.column, token.kind),
    }
}

fn format_lex_error(err: &LexError) -> String {
    let span = err.span();
    format!("{err} at line {}:{} ({})", span.line, span.column, lex_error_tag(err))
}

fn lex_error_tag(err: &LexError) -> &'static str {
    match err {
        LexError::UnterminatedString { .. } => "STRING",
        LexError::UnterminatedMultilineString { .. } => "MULTILINE_STRING",
        LexError::UnrecognizedCharacter { .. } => "UNKNOWN",
        LexError::InvalidEscape { .. } => "STRING",
        LexError::InvalidNumber { .. } => "NUMBER",
        LexError::MixedIndentation { .. } => "INDENT",
        LexError::InconsistentIndentStep { .. } => "INDENT",
        LexError::InconsistentDedent { .. } => "DEDENT",
        LexError::IndentTooDeep { .. } => "INDENT",
        LexError::Io(_) => "IO",
    }
}

fn format_parse_diagnostic(diag: &ParseDiagnostic) -> String {
    let span = diag.span();
    format!(
        "{} at line {}:{} ({})",
        diag.error,
        span.line,
        span.column,
        parse_error_tag(&diag.error)
    )
}

fn parse_error_tag(err: &ParseError) -> String {
    match err {
        ParseError::UnexpectedToken { found, .. } => format!("{found:?}"),
        ParseError::ExpectedToken { found, .. } => format!("{found:?}"),
        ParseError::NestedFunction { .. } => "FN".to_string(),
        ParseError::MissingMain => "END".to_string(),
        ParseError::StringOperandMisuse { .. } => "STRING".to_string(),
        ParseError::UndecidableForStep { .. } => "FOR".to_string(),
        ParseError::NotYetImplemented { keyword, .. } => keyword.to_ascii_uppercase(),
        ParseError::TooManyErrors { .. } => "END".to_string(),
    }
}

