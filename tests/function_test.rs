mod common;
use basic::mach::{Devices, Loopback, Runtime};
use common::*;

fn with_serial() -> (Runtime, Loopback) {
    let serial = Loopback::default();
    let dev = Devices {
        serial: Box::new(serial.clone()),
        ..Devices::default()
    };
    (Runtime::new(Default::default(), dev), serial)
}

#[test]
fn test_abs() {
    let mut r = Runtime::default();
    r.enter("PRINT ABS(-2.5);ABS(3)");
    assert_eq!(exec(&mut r), "2.53\n");
}

#[test]
fn test_rnd() {
    let mut r = Runtime::default();
    r.enter("A=RND(6):PRINT A>=0;A<6;A=ABS(A)");
    assert_eq!(exec(&mut r), "111\n");
    r.enter("PRINT RND(0)");
    assert_eq!(exec(&mut r), "Syntax error\n");
}

#[test]
fn test_ticks() {
    let mut r = Runtime::default();
    r.enter("PRINT TICKS()>=0;TICKS()<600");
    assert_eq!(exec(&mut r), "11\n");
}

#[test]
fn test_missing_argument() {
    let mut r = Runtime::default();
    r.enter("PRINT ABS()");
    assert_eq!(exec(&mut r), "Syntax error\n");
    r.enter("PRINT PEEK");
    assert_eq!(exec(&mut r), "Syntax error\n");
}

#[test]
fn test_peek_program_text() {
    let mut r = Runtime::default();
    r.enter("10 REM");
    r.enter("PRINT PEEK(0);PEEK(1);PEEK(3)");
    assert_eq!(exec(&mut r), "10082\n");
}

#[test]
fn test_streams() {
    let mut r = Runtime::default();
    r.enter("PRINT REDIRI();REDIRO()");
    assert_eq!(exec(&mut r), "23\n");
    r.enter("PRINT REDIRO(9)");
    assert_eq!(exec(&mut r), "Syntax error\n");
}

#[test]
fn test_print_to_serial() {
    let (mut r, serial) = with_serial();
    r.enter("X=REDIRO(0):PRINT 5:X=REDIRO(3):PRINT 6");
    assert_eq!(exec(&mut r), "6\n");
    assert_eq!(serial.sent(), b"5\n".to_vec());
}

#[test]
fn test_chr_is_one_byte() {
    let (mut r, serial) = with_serial();
    r.enter("X=REDIRO(0):PRINT CHR$(200);CHR$(65);");
    assert_eq!(exec(&mut r), "");
    assert_eq!(serial.sent(), vec![200, 65]);
}

#[test]
fn test_baud() {
    let (mut r, _serial) = with_serial();
    r.enter("PRINT BAUD()");
    assert_eq!(exec(&mut r), "9600\n");
    r.enter("PRINT BAUD(19200);BAUD()");
    assert_eq!(exec(&mut r), "119200\n");
    r.enter("PRINT BAUD(1234);BAUD()");
    assert_eq!(exec(&mut r), "019200\n");
}

#[test]
fn test_serial_round_trip() {
    let (mut r, serial) = with_serial();
    r.enter("PRINT UTX(65);URX();URX(0);URX()");
    assert_eq!(exec(&mut r), "11650\n");
    assert_eq!(serial.sent(), b"A".to_vec());
    r.enter("PRINT UTX()");
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_urxprt() {
    let (mut r, serial) = with_serial();
    serial.feed(b"XYZ");
    r.enter("PRINT URXPRT(2)");
    assert_eq!(exec(&mut r), "XY2\n");
    r.enter("PRINT URXPRT()");
    assert_eq!(exec(&mut r), "Z1\n");
}

#[test]
fn test_utxprt() {
    let (mut r, serial) = with_serial();
    r.enter("10 REM HELLO");
    r.enter("PRINT UTXPRT(3)");
    assert_eq!(exec(&mut r), "9\n");
    assert_eq!(serial.sent(), b"REM HELLO".to_vec());
}

#[test]
fn test_pin_reads() {
    let (mut r, io) = with_recorder();
    r.enter("PRINT AREAD(3);DREAD(4)");
    assert_eq!(exec(&mut r), "00\n");
    assert_eq!(io.take(), vec!["pin_mode 3 Input", "pin_mode 4 Input"]);
}
