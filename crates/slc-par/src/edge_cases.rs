//! Boundary cases and the end-to-end scenarios from the front end's test
//! matrix: empty input, indentation limits, and full programs lexed and
//! parsed together.

use slc_lex::{lex_str, LexError, TokenKind};

use crate::ast::{Expr, Stmt};
use crate::error::ParseError;

fn parse_program(src: &str) -> Result<crate::Program, Vec<crate::ParseDiagnostic>> {
    let result = lex_str(src).unwrap();
    crate::parse(result.tokens, result.interner).0
}

#[test]
fn empty_file_has_no_main() {
    let err = parse_program("").unwrap_err();
    assert!(err.iter().any(|d| matches!(d.error, ParseError::MissingMain)));
}

#[test]
fn blank_indented_line_before_main_parses() {
    let src = "\n    \nfn main()\n    print 1\n";
    let program = parse_program(src).unwrap();
    assert_eq!(program.functions.len(), 1);
    assert_eq!(program.functions[0].body.len(), 1);
}

#[test]
fn indent_stack_exactly_at_limit_is_ok() {
    // 31 nested `if`s (levels 1-31) plus the final `print` as the 31st
    // if's body (level 32) is exactly 32 total indent levels.
    let mut src = String::from("fn main()\n");
    for depth in 1..=31 {
        src.push_str(&"    ".repeat(depth));
        src.push_str("if 1\n");
    }
    src.push_str(&"    ".repeat(32));
    src.push_str("print 1\n");
    let result = lex_str(&src);
    assert!(result.is_ok(), "depth 32 should not overflow the indent stack");
}

#[test]
fn indent_stack_depth_33_is_fatal() {
    let mut src = String::from("fn main()\n");
    for depth in 1..=33 {
        src.push_str(&"    ".repeat(depth));
        src.push_str("if 1\n");
    }
    src.push_str(&"    ".repeat(34));
    src.push_str("print 1\n");
    let err = lex_str(&src).unwrap_err();
    assert!(matches!(err, LexError::IndentTooDeep { .. }));
}

#[test]
fn minimal_program_tokens_and_ast() {
    let src = "fn main()\n    print 1\n";
    let result = lex_str(src).unwrap();
    let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Fn,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Print,
            TokenKind::Integer,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::End,
        ]
    );

    let program = crate::parse(result.tokens, result.interner).0.unwrap();
    assert_eq!(program.functions.len(), 1);
    let main_fn = &program.functions[0];
    assert!(main_fn.params.is_empty());
    assert_eq!(main_fn.body.len(), 1);
    assert!(matches!(main_fn.body[0], Stmt::Print(_)));
}

#[test]
fn operator_precedence_scenario() {
    let src = "fn main()\n    x = 1 + 2 * 3\n";
    let program = parse_program(src).unwrap();
    let Stmt::Assignment(assign) = &program.functions[0].body[0] else {
        panic!("expected an assignment")
    };
    let Expr::BinaryOp(add) = &assign.value else {
        panic!("expected a binary op")
    };
    assert_eq!(add.op, TokenKind::Add);
    assert!(matches!(*add.right, Expr::BinaryOp(ref mul) if mul.op == TokenKind::Mul));
}

#[test]
fn elif_chain_scenario() {
    let src = "fn main()\n    if a\n        print 1\n    elif b\n        print 2\n    else\n        print 3\n";
    let program = parse_program(src).unwrap();
    let Stmt::If(top) = &program.functions[0].body[0] else {
        panic!("expected if")
    };
    let elif = top.else_body.as_ref().expect("elif branch");
    let else_branch = elif.else_body.as_ref().expect("else branch");
    assert!(else_branch.condition.is_none());
}

#[test]
fn for_loop_default_step_scenario() {
    let src = "fn main()\n    for i from 1 to 5\n        print i\n";
    let program = parse_program(src).unwrap();
    let Stmt::For(f) = &program.functions[0].body[0] else {
        panic!("expected for")
    };
    match f.initializer.value {
        Expr::Number(n) => assert_eq!(n.value, 1.0),
        _ => panic!("expected numeric initializer"),
    }
    match f.condition {
        Expr::Number(n) => assert_eq!(n.value, 5.0),
        _ => panic!("expected numeric bound"),
    }
    match f.step {
        Expr::Number(n) => assert_eq!(n.value, 1.0),
        _ => panic!("expected numeric default step"),
    }
}

#[test]
fn string_operator_misuse_scenario() {
    let src = "fn main()\n    x = \"a\" * 3\n";
    let result = lex_str(src).unwrap();
    let err = crate::parse(result.tokens, result.interner).0.unwrap_err();
    assert!(err
        .iter()
        .any(|d| matches!(d.error, ParseError::StringOperandMisuse { .. })));
}

#[test]
fn mixed_indentation_scenario() {
    let src = "fn main()\n\t print 1\n";
    let err = lex_str(src).unwrap_err();
    assert!(matches!(err, LexError::MixedIndentation { .. }));
}

#[test]
fn indent_jump_of_more_than_one_level_is_rejected() {
    // First body line establishes level 1 at 4 spaces; jumping straight to
    // 12 spaces (level 3) skips level 2 entirely.
    let src = "fn main()\n    if 1\n            print 1\n";
    let err = lex_str(src).unwrap_err();
    assert!(matches!(err, LexError::InconsistentIndentStep { .. }));
}

#[test]
fn indent_width_not_a_multiple_of_the_established_step_is_rejected() {
    // Establishes 4 spaces per level, then indents by 6 on the next line.
    let src = "fn main()\n    if 1\n      print 1\n";
    let err = lex_str(src).unwrap_err();
    assert!(matches!(err, LexError::InconsistentIndentStep { .. }));
}

#[test]
fn nested_function_is_rejected() {
    let src = "fn main()\n    fn inner()\n        print 1\n";
    let result = lex_str(src).unwrap();
    let err = crate::parse(result.tokens, result.interner).0.unwrap_err();
    assert!(err
        .iter()
        .any(|d| matches!(d.error, ParseError::NestedFunction { .. })));
}

#[test]
fn missing_main_is_reported() {
    let src = "fn helper()\n    print 1\n";
    let result = lex_str(src).unwrap();
    let err = crate::parse(result.tokens, result.interner).0.unwrap_err();
    assert!(err.iter().any(|d| matches!(d.error, ParseError::MissingMain)));
}
