//! Human-readable AST dump, for the CLI's `--emit-ast` flag.
//!
//! `Program` only stores `Symbol` handles, so printing anything readable
//! needs the interner that produced them alongside the tree.

use slc_lex::TokenKind;
use slc_util::Interner;
use std::fmt::Write as _;

use crate::ast::*;

pub fn format_program(program: &Program, interner: &Interner<TokenKind>) -> String {
    let mut out = String::new();
    writeln!(out, "Program").unwrap();
    for function in &program.functions {
        write_function(&mut out, function, interner, 1);
    }
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_function(out: &mut String, function: &Function, interner: &Interner<TokenKind>, depth: usize) {
    indent(out, depth);
    let params: Vec<&str> = function.params.iter().map(|p| interner.resolve(*p)).collect();
    writeln!(
        out,
        "Function {}({})",
        interner.resolve(function.name),
        params.join(", ")
    )
    .unwrap();
    for stmt in &function.body {
        write_stmt(out, stmt, interner, depth + 1);
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt, interner: &Interner<TokenKind>, depth: usize) {
    match stmt {
        Stmt::If(node) => write_if(out, node, interner, depth),
        Stmt::While(node) => {
            indent(out, depth);
            writeln!(out, "While").unwrap();
            write_expr_line(out, &node.condition, interner, depth + 1);
            for s in &node.body {
                write_stmt(out, s, interner, depth + 1);
            }
        }
        Stmt::For(node) => {
            indent(out, depth);
            writeln!(
                out,
                "For {}",
                interner.resolve(node.initializer.var_name)
            )
            .unwrap();
            write_expr_line(out, &node.initializer.value, interner, depth + 1);
            write_expr_line(out, &node.condition, interner, depth + 1);
            write_expr_line(out, &node.step, interner, depth + 1);
            for s in &node.body {
                write_stmt(out, s, interner, depth + 1);
            }
        }
        Stmt::Assignment(node) => {
            indent(out, depth);
            writeln!(out, "Assignment {}", interner.resolve(node.var_name)).unwrap();
            write_expr_line(out, &node.value, interner, depth + 1);
        }
        Stmt::Print(node) => {
            indent(out, depth);
            writeln!(out, "Print").unwrap();
            write_expr_line(out, &node.expression, interner, depth + 1);
        }
        Stmt::Return(node) => {
            indent(out, depth);
            writeln!(out, "Return").unwrap();
            if let Some(expr) = &node.expression {
                write_expr_line(out, expr, interner, depth + 1);
            }
        }
        Stmt::Call(node) => write_call(out, node, interner, depth),
        Stmt::Expr(expr) => write_expr_line(out, expr, interner, depth),
    }
}

fn write_if(out: &mut String, node: &If, interner: &Interner<TokenKind>, depth: usize) {
    indent(out, depth);
    match &node.condition {
        Some(_) => writeln!(out, "If").unwrap(),
        None => writeln!(out, "Else").unwrap(),
    }
    if let Some(condition) = &node.condition {
        write_expr_line(out, condition, interner, depth + 1);
    }
    for s in &node.body {
        write_stmt(out, s, interner, depth + 1);
    }
    if let Some(else_body) = &node.else_body {
        write_if(out, else_body, interner, depth);
    }
}

fn write_call(out: &mut String, node: &Call, interner: &Interner<TokenKind>, depth: usize) {
    indent(out, depth);
    writeln!(out, "Call {}", interner.resolve(node.name)).unwrap();
    for arg in &node.args {
        write_expr_line(out, arg, interner, depth + 1);
    }
}

fn write_expr_line(out: &mut String, expr: &Expr, interner: &Interner<TokenKind>, depth: usize) {
    indent(out, depth);
    writeln!(out, "{}", format_expr(expr, interner)).unwrap();
}

fn format_expr(expr: &Expr, interner: &Interner<TokenKind>) -> String {
    match expr {
        Expr::BinaryOp(b) => format!(
            "BinaryOp({:?} {} {})",
            b.op,
            format_expr(&b.left, interner),
            format_expr(&b.right, interner)
        ),
        Expr::UnaryOp(u) => format!("UnaryOp({:?} {})", u.op, format_expr(&u.operand, interner)),
        Expr::Call(c) => {
            let args: Vec<String> = c.args.iter().map(|a| format_expr(a, interner)).collect();
            format!("Call({}, [{}])", interner.resolve(c.name), args.join(", "))
        }
        Expr::Identifier(i) => format!("Identifier({})", interner.resolve(i.name)),
        Expr::Number(n) => format!("Number({})", n.value),
        Expr::String(s) => format!("String({:?})", interner.resolve(s.text)),
    }
}
