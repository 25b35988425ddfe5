mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_save() {
    let (mut r, storage) = with_storage();
    let out = program(&mut r, &["10 PRINT \"Hi\"", "20 END", "save test.bas"]);
    assert_eq!(out, "");
    assert_eq!(
        storage.get("TEST.BAS"),
        Some(b"10 PRINT \"Hi\"\n20 END\n".to_vec())
    );
}

#[test]
fn test_load() {
    let (mut r, storage) = with_storage();
    storage.insert("HELLO.BAS", b"10 PRINT \"HI\"\r\n20 END\r\n");
    r.enter("30 PRINT 30");
    r.enter("LOAD \"HELLO.BAS\"");
    assert_eq!(exec(&mut r), "");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10 PRINT \"HI\"\n20 END\n");
}

#[test]
fn test_load_runs_direct_lines_quietly() {
    let (mut r, storage) = with_storage();
    storage.insert("SETUP.BAS", b"A=5\nPRINT 99\n10 PRINT A\n");
    r.enter("LOAD SETUP.BAS");
    assert_eq!(exec(&mut r), "");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "5\n");
}

#[test]
fn test_load_missing_file() {
    let (mut r, _storage) = with_storage();
    r.enter("10 PRINT 1");
    r.enter("LOAD NOPE.BAS");
    assert_eq!(exec(&mut r), "ERROR: File Operation failed.\n");
    r.enter("LOAD");
    assert_eq!(exec(&mut r), "Syntax error\n");
}

#[test]
fn test_save_then_load() {
    let (mut r, _storage) = with_storage();
    program(&mut r, &["10 FOR I=1 TO 3", "20 PRINT I;", "30 NEXT I", "SAVE LOOP.BAS"]);
    r.enter("NEW");
    exec(&mut r);
    r.enter("LOAD LOOP.BAS");
    assert_eq!(exec(&mut r), "");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "123");
}

#[test]
fn test_chain() {
    let (mut r, storage) = with_storage();
    storage.insert("NEXT.BAS", b"10 PRINT \"CHAINED\"\n");
    let out = program(&mut r, &["10 CHAIN NEXT.BAS", "RUN"]);
    assert_eq!(out, "CHAINED\n");
}

#[test]
fn test_files() {
    let (mut r, storage) = with_storage();
    storage.insert("A.BAS", b"0123456789");
    storage.insert("LONGNAME.BAS", b"");
    r.enter("FILES");
    assert_eq!(
        exec(&mut r),
        "    A.BAS        10\n    LONGNAME.BAS 0\n"
    );
}

#[test]
fn test_dload() {
    let (mut r, storage) = with_storage();
    storage.insert("DATA.BIN", &[1, 2, 3, 4, 5]);
    r.enter("DLOAD DATA.BIN,1,3,2000:PRINT PEEK(2000);PEEK(2001);PEEK(2002)");
    assert_eq!(exec(&mut r), "234\n");
    r.enter("DLOAD DATA.BIN,3,0,3000:PRINT PEEK(3000);PEEK(3001)");
    assert_eq!(exec(&mut r), "45\n");
}

#[test]
fn test_dload_short_file() {
    let (mut r, storage) = with_storage();
    storage.insert("DATA.BIN", &[1, 2, 3]);
    r.enter("DLOAD DATA.BIN,0,10,4000:PRINT PEEK(4002)");
    assert_eq!(exec(&mut r), "ERROR Ran out of file bytes\n3\n");
}

#[test]
fn test_dload_missing_file_continues() {
    let (mut r, _storage) = with_storage();
    r.enter("DLOAD NOPE,0,0,0:PRINT 1");
    assert_eq!(exec(&mut r), "ERROR: File Operation failed.\n1\n");
}

#[test]
fn test_boot_without_autorun() {
    let (mut r, _storage) = with_storage();
    r.boot();
    assert_eq!(
        exec(&mut r),
        "MICRO BASIC 0.2\nSearching for AUTORUN.BAS...Not Found\n1132 bytes free.\n"
    );
}

#[test]
fn test_boot_with_autorun() {
    let (mut r, storage) = with_storage();
    storage.insert("AUTORUN.BAS", b"10 PRINT \"AUTO\"\n");
    r.boot();
    assert_eq!(
        exec(&mut r),
        "MICRO BASIC 0.2\nSearching for AUTORUN.BAS...Loaded\n1132 bytes free.\nAUTO\n"
    );
}

#[test]
fn test_default_storage_is_empty() {
    let mut r = Runtime::default();
    r.enter("FILES");
    assert_eq!(exec(&mut r), "");
}
