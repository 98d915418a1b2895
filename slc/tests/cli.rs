//! End-to-end CLI tests: write a source file, invoke the `slc` binary
//! against it, and check exit status and stdout/stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_source(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn minimal_program_succeeds() {
    let file = write_source("fn main()\n    print 1\n");
    Command::cargo_bin("slc")
        .unwrap()
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn missing_main_fails_with_diagnostic() {
    let file = write_source("fn helper()\n    print 1\n");
    Command::cargo_bin("slc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("main"));
}

#[test]
fn emit_tokens_prints_token_stream() {
    let file = write_source("fn main()\n    print 1\n");
    Command::cargo_bin("slc")
        .unwrap()
        .arg("--emit-tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fn"))
        .stdout(predicate::str::contains("Print"));
}

#[test]
fn emit_ast_prints_program() {
    let file = write_source("fn main()\n    print 1\n");
    Command::cargo_bin("slc")
        .unwrap()
        .arg("--emit-ast")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Program"))
        .stdout(predicate::str::contains("main"));
}

#[test]
fn mixed_indentation_is_a_fatal_lex_error() {
    let file = write_source("fn main()\n\t print 1\n");
    Command::cargo_bin("slc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("at line"));
}

#[test]
fn nonexistent_file_fails() {
    Command::cargo_bin("slc")
        .unwrap()
        .arg("/no/such/file.src")
        .assert()
        .failure();
}

#[test]
fn unknown_flag_exits_non_zero() {
    let file = write_source("fn main()\n    print 1\n");
    Command::cargo_bin("slc")
        .unwrap()
        .arg("--not-a-real-flag")
        .arg(file.path())
        .assert()
        .failure();
}
