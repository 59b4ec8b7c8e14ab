//! Snapshot tests for every section body.

use expect_test::{Expect, expect};
use spanscope_tour::find_section;

fn check(name: &str, expected: Expect) {
    let section = find_section(name).unwrap();
    let mut out = Vec::new();
    (section.run)(&mut out).unwrap();
    expected.assert_eq(&String::from_utf8(out).unwrap());
}

// ============================================================================
// Algorithms and assignment
// ============================================================================

#[test]
fn algorithms() {
    check(
        "algorithms",
        expect![[r#"
            0 1 2 3 4 5 
            1 2 3 4 5 6 
            2 3 4 5 6 7 
            3 4 5 6 7 8 
            test 1: true
            test 2: true
            test 3: false
            test 4: false
            test 5: true
            test 6: false
            test 7: true
            test 8: false
            span size: 9
            span extent: 9
        "#]],
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn assignment() {
    check(
        "assignment",
        expect![[r#"
            s1[6] { 3 3 3 3 3 3 } extent = 6, size_of = 8
            s2[6] { 4 4 4 4 4 4 } extent = 6, size_of = 8
            s1 = s2; is a shallow copy!
            s1[6] { 4 4 4 4 4 4 }
            Fill s1 with 5:
            s1[6] { 5 5 5 5 5 5 }
            s2[6] { 5 5 5 5 5 5 }

            dynamic_1[4] { 1 2 3 4 } extent = dynamic, size_of = 16
            dynamic_2[3] { 2 3 4 } extent = dynamic, size_of = 16
            static_1[4] { 1 2 3 4 } extent = 4, size_of = 8
            static_2[4] { 2 3 4 5 } extent = 4, size_of = 8
            static_3[3] { 3 4 5 } extent = 3, size_of = 8
            dynamic_1 = dynamic_2;
            dynamic_1[3] { 2 3 4 }
            dynamic_1 = static_1.into();
            dynamic_1[4] { 1 2 3 4 }
            static_1 = static_2;
            static_1[4] { 2 3 4 5 }
            static_1 = dynamic_1.try_into(): ok
            static_1 = dynamic_2.try_into(): extent mismatch: expected 4 elements, found 3
            static_1[4] { 1 2 3 4 }
        "#]],
    );
}

// ============================================================================
// Iteration
// ============================================================================

#[test]
fn begin_end() {
    check(
        "begin-end",
        expect![[r#"
            1 3 4 5 
            1
            2 3 4 5 
        "#]],
    );
}

#[test]
fn rbegin() {
    check("rbegin", expect!["password\n"]);
}

#[test]
fn rend() {
    check(
        "rend",
        expect!["▁ ▂ ▃ ▄ ▅ ▆ ▇ █  █ ▇ ▆ ▅ ▄ ▃ ▂ ▁ \n"],
    );
}

// ============================================================================
// Element access
// ============================================================================

#[test]
fn front() {
    check("front", expect!["0 1 2 3 \n"]);
}

#[test]
fn back() {
    check(
        "back",
        expect![[r#"
            0 1 2 3 4 
            4 3 2 1 0 
        "#]],
    );
}

#[test]
fn index() {
    check(
        "index",
        expect![[r#"
            1 2 3 4 5 
            5 4 3 2 1 
        "#]],
    );
}

#[test]
fn data() {
    check(
        "data",
        expect![[r#"
            ABCDEF
            BCDEF
            CDEF
            DEF
            EF
            F
        "#]],
    );
}

// ============================================================================
// Observers
// ============================================================================

#[test]
fn size() {
    check("size", expect!["8 7 6 5 4 3 2 \n"]);
}

#[test]
fn size_bytes() {
    check(
        "size-bytes",
        expect![[r#"
            size_of::<i32>()  : 4
            ary.len()         : 5
            size_of_val(&ary) : 20
            spn.len()         : 5
            spn.size_bytes()  : 20
        "#]],
    );
}

#[test]
fn empty() {
    check(
        "empty",
        expect![[r#"
            "ABCDEF"
            "BCDEF"
            "CDEF"
            "DEF"
            "EF"
            "F"
            ""
        "#]],
    );
}

// ============================================================================
// Subviews
// ============================================================================

#[test]
fn first() {
    check(
        "first",
        expect![[r#"
            i32  ary[8]{ 1, 2, 3, 4, 5, 6, 7, 8, };
            span: [8]{ 1, 2, 3, 4, 5, 6, 7, 8, };
            span.first_n::<5>(): [5]{ 1, 2, 3, 4, 5, };
            span.first(4):       [4]{ 1, 2, 3, 4, };
        "#]],
    );
}

#[test]
fn last() {
    check(
        "last",
        expect![[r#"
            i32  ary[8]{ 1, 2, 3, 4, 5, 6, 7, 8, };
            span: [8]{ 1, 2, 3, 4, 5, 6, 7, 8, };
            span.last_n::<3>(): [3]{ 6, 7, 8, };
            span.last(2):       [2]{ 7, 8, };
        "#]],
    );
}

#[test]
fn subspan() {
    check(
        "subspan",
        expect![[r#"
            ABCDEFGHIJKLMNOPQRST
            BCDEFGHIJKLMNOPQRSTU
            CDEFGHIJKLMNOPQRSTUV
            DEFGHIJKLMNOPQRSTUVW
            EFGHIJKLMNOPQRSTUVWX
            FGHIJKLMNOPQRSTUVWXY
            GHIJKLMNOPQRSTUVWXYZ
        "#]],
    );
}

// ============================================================================
// Bytes and extents
// ============================================================================

#[cfg(target_endian = "little")]
#[test]
fn as_bytes() {
    check(
        "as-bytes",
        expect![[r#"
             3.14159 = { D8 0F 49 40 }
            -3.14159 = { D8 0F 49 C0 }
        "#]],
    );
}

#[test]
fn extent() {
    check(
        "extent",
        expect![[r#"
            span1, static extent = 5
            span2, dynamic extent
            span3, static extent = 5
            span4, dynamic extent
            span5, dynamic extent
            span6, dynamic extent
        "#]],
    );
}
