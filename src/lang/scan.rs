use super::token::Lexeme;

/// Every line of text ends with this byte.
pub const NL: u8 = b'\n';

pub fn is_blank(ch: u8) -> bool {
    ch == b' ' || ch == b'\t'
}

pub fn is_letter(ch: u8) -> bool {
    ch.is_ascii_uppercase()
}

pub fn is_end_of_statement(ch: u8) -> bool {
    ch == NL || ch == b':'
}

/// Characters a file name may be made of.
pub fn is_filename_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_' || ch == b'+' || ch == b'.' || ch == b'~'
}

fn byte_at(text: &[u8], pos: usize) -> u8 {
    text.get(pos).copied().unwrap_or(NL)
}

pub fn skip_blanks(text: &[u8], pos: &mut usize) {
    while is_blank(byte_at(text, *pos)) {
        *pos += 1;
    }
}

/// Longest-match lookup of `T`'s table at `pos`.
///
/// Entries are tried in table order and the first full match wins. On a
/// match the cursor moves past the spelling and any blanks after it.
/// Otherwise the cursor is left alone.
pub fn scan<T: Lexeme>(text: &[u8], pos: &mut usize) -> Option<T> {
    for (spelling, lexeme) in T::TABLE {
        let len = spelling.len();
        if text.len() >= *pos + len && &text[*pos..*pos + len] == spelling.as_bytes() {
            *pos += len;
            skip_blanks(text, pos);
            return Some(*lexeme);
        }
    }
    None
}

/// Unsigned line number at `pos`, skipping blanks on both sides.
/// Zero means there was no number; numbers too large saturate to `u16::MAX`.
pub fn line_number(text: &[u8], pos: &mut usize) -> u16 {
    let mut num: u16 = 0;
    skip_blanks(text, pos);
    while byte_at(text, *pos).is_ascii_digit() {
        if num >= u16::max_value() / 10 {
            num = u16::max_value();
            break;
        }
        num = num * 10 + (byte_at(text, *pos) - b'0') as u16;
        *pos += 1;
    }
    skip_blanks(text, pos);
    num
}

/// Upper-case everything outside of quoted spans. A quote only closes
/// the span opened by the same quote character.
pub fn uppercase(text: &mut [u8]) {
    let mut quote = None;
    for ch in text.iter_mut() {
        if *ch == NL {
            break;
        }
        match quote {
            Some(q) if *ch == q => quote = None,
            Some(_) => {}
            None if *ch == b'"' || *ch == b'\'' => quote = Some(*ch),
            None => ch.make_ascii_uppercase(),
        }
    }
}

/// Scans a file name. Leading blanks and quotes are skipped; the name
/// is the following run of file name characters.
pub fn filename(text: &[u8], pos: &mut usize) -> Option<String> {
    while matches!(byte_at(text, *pos), b' ' | b'\t' | b'"' | b'\'') {
        *pos += 1;
    }
    let start = *pos;
    while is_filename_char(byte_at(text, *pos)) {
        *pos += 1;
    }
    if *pos == start {
        return None;
    }
    let name = String::from_utf8_lossy(&text[start..*pos]).into_owned();
    while matches!(byte_at(text, *pos), b'"' | b'\'') {
        *pos += 1;
    }
    skip_blanks(text, pos);
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::super::token::*;
    use super::*;

    #[test]
    fn test_scan_keyword() {
        let text = b"PRINT  1\n";
        let mut pos = 0;
        assert_eq!(scan::<Keyword>(text, &mut pos), Some(Keyword::Print));
        assert_eq!(pos, 7);
    }

    #[test]
    fn test_scan_unknown_leaves_cursor() {
        let text = b"A=1\n";
        let mut pos = 0;
        assert_eq!(scan::<Keyword>(text, &mut pos), None);
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_scan_table_order() {
        let mut pos = 0;
        assert_eq!(scan::<Relop>(b">=3", &mut pos), Some(Relop::GreaterEqual));
        assert_eq!(pos, 2);
        let mut pos = 0;
        assert_eq!(scan::<Relop>(b"> 3", &mut pos), Some(Relop::Greater));
        assert_eq!(pos, 2);
        let mut pos = 0;
        assert_eq!(scan::<Keyword>(b"TONEW 1", &mut pos), Some(Keyword::Tonew));
        let mut pos = 0;
        assert_eq!(scan::<Keyword>(b"TONE 1", &mut pos), Some(Keyword::Tone));
    }

    #[test]
    fn test_scan_is_case_sensitive() {
        let mut pos = 0;
        assert_eq!(scan::<Keyword>(b"print", &mut pos), None);
    }

    #[test]
    fn test_line_number() {
        let mut pos = 0;
        assert_eq!(line_number(b"  120 PRINT\n", &mut pos), 120);
        assert_eq!(pos, 6);
        let mut pos = 0;
        assert_eq!(line_number(b"PRINT\n", &mut pos), 0);
        let mut pos = 0;
        assert_eq!(line_number(b"99999\n", &mut pos), u16::max_value());
    }

    #[test]
    fn test_uppercase_respects_quotes() {
        let mut text = b"print \"abc\" + x\n".to_vec();
        uppercase(&mut text);
        assert_eq!(&text, b"PRINT \"abc\" + X\n");
        let mut text = b"? \"it's\" 'say \"hi\"' q\n".to_vec();
        uppercase(&mut text);
        assert_eq!(&text, b"? \"it's\" 'say \"hi\"' Q\n");
    }

    #[test]
    fn test_filename() {
        let mut pos = 0;
        assert_eq!(
            filename(b"\"game_1.bas\"\n", &mut pos),
            Some("game_1.bas".to_string())
        );
        assert_eq!(pos, 12);
        let mut pos = 0;
        assert_eq!(filename(b" WINDOW~1.TXT,3\n", &mut pos), Some("WINDOW~1.TXT".to_string()));
        assert_eq!(byte_at(b" WINDOW~1.TXT,3\n", pos), b',');
        let mut pos = 0;
        assert_eq!(filename(b"\n", &mut pos), None);
    }
}
