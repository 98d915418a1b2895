//! Token kinds and the `Token` type the lexer emits.

use slc_util::{Span, Symbol};

/// Every kind of token the lexer can produce: keywords, operators and
/// punctuation, literals, and the synthetic structural markers
/// `INDENT`/`DEDENT`/`NEWLINE`/`END`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Fn,
    For,
    While,
    If,
    Else,
    Elif,
    Return,
    By,
    From,
    Import,
    To,
    Print,
    /// Reserved, never parsed into a node (see `slc-par`'s statement dispatch).
    Match,
    True,
    False,

    // Arithmetic / bitwise operators and their `=`-suffixed compound forms.
    Add,
    Sub,
    Mul,
    Div,
    IntDiv,
    Mod,
    Pow,
    BitNot,
    BitAnd,
    BitOr,
    AddEq,
    SubEq,
    MulEq,
    DivEq,
    IntDivEq,
    ModEq,
    PowEq,
    BitAndEq,
    BitOrEq,

    // Comparisons
    Eq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,

    // Logical
    And,
    Or,
    Not,

    // Shifts
    Shl,
    Shr,

    // Increment/decrement
    Inc,
    Dec,

    // Assignment
    Assign,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,

    // Literals
    Identifier,
    String,
    /// `"""..."""`, may span several physical lines.
    MultilineString,
    Integer,
    Float,

    // Structural markers
    Indent,
    Dedent,
    Newline,

    // Terminator
    End,
}

impl TokenKind {
    /// True for the operator/comparison kinds the Pratt parser folds into a
    /// `BinaryOp` node. Compound-assign forms (`+=` and friends) are lexed
    /// (so the trie's longest-match rule is satisfiable) but are not wired
    /// into any grammar rule, reserved the same way `match`/`import`/`from`/
    /// `to` are.
    pub fn is_binary_operator(self) -> bool {
        self.precedence().is_some()
    }

    /// Left-associative binding power, lowest to highest.
    /// `None` for anything that isn't a binary operator.
    pub fn precedence(self) -> Option<u8> {
        use TokenKind::*;
        match self {
            Or => Some(1),
            And => Some(2),
            Eq | NotEq => Some(3),
            Lt | Le | Gt | Ge => Some(4),
            Add | Sub => Some(5),
            Mul | Div | Mod => Some(6),
            Pow => Some(7),
            _ => None,
        }
    }

    /// True for the prefix unary operators (`- ! ~ ++ --`).
    pub fn is_unary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Sub | TokenKind::Not | TokenKind::BitNot | TokenKind::Inc | TokenKind::Dec
        )
    }
}

/// A single lexical token.
///
/// `text` is `Some` only for literals and identifiers; every other kind
/// carries all the meaning it needs in `kind` alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<Symbol>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: Option<Symbol>, span: Span) -> Self {
        Self { kind, text, span }
    }
}
