mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_if_then() {
    let mut r = Runtime::default();
    r.enter(r#"if 1 then ? "one""#);
    assert_eq!(exec(&mut r), "one\n");
    r.enter(r#"if 0 then ? "one""#);
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_then_is_optional() {
    let mut r = Runtime::default();
    r.enter(r#"IF 2>1 PRINT "YES""#);
    assert_eq!(exec(&mut r), "YES\n");
}

#[test]
fn test_false_skips_rest_of_line() {
    let mut r = Runtime::default();
    let out = program(
        &mut r,
        &[
            "10 IF 0 THEN PRINT 1:PRINT 2",
            "20 PRINT 3",
            "RUN",
        ],
    );
    assert_eq!(out, "3\n");
}

#[test]
fn test_true_runs_rest_of_line() {
    let mut r = Runtime::default();
    r.enter("IF 1 THEN PRINT 1:PRINT 2");
    assert_eq!(exec(&mut r), "1\n2\n");
}

#[test]
fn test_if_goto() {
    let mut r = Runtime::default();
    let out = program(
        &mut r,
        &[
            "10 A=A+1",
            "20 IF A<3 GOTO 10",
            "30 PRINT A",
            "RUN",
        ],
    );
    assert_eq!(out, "3\n");
}

#[test]
fn test_if_needs_a_statement() {
    let mut r = Runtime::default();
    r.enter("IF 1");
    assert_eq!(exec(&mut r), "Syntax error\n");
    r.enter("IF 1 THEN");
    assert_eq!(exec(&mut r), "Syntax error\n");
}
