//! Integration tests for the `list` and `completions` commands.

mod common;

use common::{check_stdout, spanscope};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn list_sections() {
    check_stdout(
        &["list"],
        expect![[r#"
            algorithms  span, slide / starts_with / ends_with / contains
            assignment  span, assignment
            begin-end   span, iter
            rbegin      span, iter().rev()
            rend        span, iter().rev() to the front
            front       span, front
            back        span, back
            index       span, index
            data        span, last(n) suffixes
            size        span, len
            size-bytes  span, size_bytes
            empty       span, is_empty
            first       span, first
            last        span, last
            subspan     span, subspan
            as-bytes    span, as_bytes
            extent      span, extent
        "#]],
    );
}

#[test]
fn completions_for_bash() {
    spanscope()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spanscope"));
}

#[test]
fn completions_rejects_unknown_shell() {
    spanscope()
        .args(["completions", "cmd.exe"])
        .assert()
        .failure();
}
