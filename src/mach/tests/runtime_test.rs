use super::*;

#[test]
fn test_direct_mode_has_no_ok() {
    let mut r = Runtime::default();
    r.enter("PRINT 1");
    assert_eq!(run(&mut r), "1\n");
    r.enter("PRINT 1+1");
    assert_eq!(r.execute(10), Event::Print("2\n".to_string()));
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_program_end_is_a_warm_start() {
    let mut r = Runtime::default();
    r.enter("10 PRINT \"HI\"");
    r.enter("RUN");
    assert_eq!(r.execute(100), Event::Print("HI\nOk\n".to_string()));
    assert_eq!(r.execute(100), Event::Stopped);
}

#[test]
fn test_syntax_error_marks_the_line() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1 2");
    r.enter("RUN");
    assert_eq!(run(&mut r), "1Syntax error in 10 PRINT 1 ^\n");
}

#[test]
fn test_break() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 10");
    r.enter("RUN");
    assert_eq!(r.execute(100), Event::Running);
    r.interrupt();
    assert_eq!(run(&mut r), "Break on line 10\n");
    assert_eq!(r.current_line, None);
}

#[test]
fn test_input() {
    let mut r = Runtime::default();
    r.enter("INPUT A:PRINT A*2");
    assert_eq!(run(&mut r), "?");
    r.enter("21");
    assert_eq!(run(&mut r), "42\n");
}

#[test]
fn test_input_asks_again() {
    let mut r = Runtime::default();
    r.enter("10 INPUT X");
    r.enter("20 PRINT X");
    r.enter("RUN");
    assert_eq!(run(&mut r), "?");
    r.enter("*");
    assert_eq!(run(&mut r), "?");
    r.enter("3+4");
    assert_eq!(run(&mut r), "7\n");
}

#[test]
fn test_input_takes_expressions_of_variables() {
    let mut r = Runtime::default();
    r.enter("B=10");
    run(&mut r);
    r.enter("INPUT A:PRINT A");
    assert_eq!(run(&mut r), "?");
    r.enter("b*2");
    assert_eq!(run(&mut r), "20\n");
}

#[test]
fn test_bye() {
    let mut r = Runtime::default();
    r.enter("BYE");
    assert_eq!(r.execute(10), Event::Quit);
    assert_eq!(r.execute(10), Event::Quit);
}

#[test]
fn test_list_and_replace() {
    let mut r = Runtime::default();
    r.enter("20 GOTO 10");
    r.enter("10 print \"lower\"");
    r.enter("LIST");
    assert_eq!(run(&mut r), "10 PRINT \"lower\"\n20 GOTO 10\n");
    r.enter("10 END");
    r.enter("LIST 10");
    assert_eq!(run(&mut r), "10 END\n20 GOTO 10\n");
    r.enter("10");
    r.enter("LIST");
    assert_eq!(run(&mut r), "20 GOTO 10\n");
}

#[test]
fn test_new() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("NEW");
    assert_eq!(run(&mut r), "");
    assert_eq!(r.arena.program_end(), 0);
    r.enter("NEW 5");
    assert_eq!(run(&mut r), "Syntax error\n");
}

#[test]
fn test_variables_survive_run() {
    let mut r = Runtime::default();
    r.enter("A=5");
    run(&mut r);
    r.enter("10 PRINT A");
    r.enter("RUN");
    assert_eq!(run(&mut r), "5\n");
}

#[test]
fn test_mem() {
    let mut r = Runtime::default();
    r.enter("MEM");
    assert_eq!(run(&mut r), "1132 bytes free.\n");
    r.enter("10 REM");
    r.enter("MEM");
    assert_eq!(run(&mut r), "1125 bytes free.\n");
}

#[test]
fn test_listing() {
    let mut r = Runtime::default();
    r.enter("20 print 2");
    r.enter("10 PRINT 1");
    assert_eq!(
        r.listing(),
        vec![(10, "10 PRINT 1".to_string()), (20, "20 PRINT 2".to_string())]
    );
}

#[test]
fn test_full_memory_still_takes_commands() {
    let mut r = Runtime::default();
    let mut number = 10;
    loop {
        assert!(number < 1000);
        r.enter(&format!("{} REM {}", number, "X".repeat(20)));
        match run(&mut r).as_str() {
            "" => number += 10,
            "Sorry!\n" => break,
            other => panic!("unexpected {:?}", other),
        }
    }
    r.enter("MEM");
    assert!(run(&mut r).ends_with(" bytes free.\n"));
    r.enter("LIST 10");
    assert!(run(&mut r).starts_with("10 REM X"));
    r.enter("10");
    assert_eq!(run(&mut r), "");
    r.enter("NEW");
    assert_eq!(run(&mut r), "");
    r.enter("MEM");
    assert_eq!(run(&mut r), "1132 bytes free.\n");
}

#[test]
fn test_delay() {
    let mut r = Runtime::default();
    r.enter("DELAY 20:PRINT \"DONE\"");
    assert_eq!(run(&mut r), "DONE\n");
}

#[test]
fn test_break_during_delay() {
    let mut r = Runtime::default();
    r.enter("10 DELAY 60000");
    r.enter("RUN");
    assert_eq!(r.execute(100), Event::Running);
    r.interrupt();
    assert_eq!(run(&mut r), "Break on line 10\n");
}

#[test]
fn test_line_too_long() {
    let mut r = Runtime::default();
    let long = format!("10 REM {}", "X".repeat(300));
    r.enter(&long);
    assert_eq!(run(&mut r), "Sorry!\n");
    assert_eq!(r.arena.program_end(), 0);
}
