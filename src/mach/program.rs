use super::arena::{Arena, LINE_HEADER};
use super::Address;
use crate::error;
use crate::lang::scan::{self, NL};
use crate::lang::{Error, LineNumber};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Longest text a line can hold; its length has to fit the header byte.
pub const MAX_TEXT: usize = u8::max_value() as usize - LINE_HEADER - 1;

/// Space kept free between staged text and the variables.
const STAGING_MARGIN: usize = 2;

/// Typed text that must still fit once the program is as large as it
/// may grow: enough for `NEW`, `LIST` or a line number to delete.
pub const COMMAND_ROOM: usize = 16;

/// Bytes `stage_entry` needs above the program for `len` bytes of text.
fn staging_cost(len: usize) -> usize {
    2 + len + 1 + STAGING_MARGIN
}

/// ## Program store and line editor
///
/// Lines live at the bottom of the arena, sorted and packed:
/// `[number lo, number hi, length, text ..., NL]`, the length counting
/// the header and the newline.

impl Arena {
    pub fn line_number_at(&self, line: Address) -> LineNumber {
        u16::from_le_bytes([self.byte(line), self.byte(line + 1)])
    }

    fn line_len_at(&self, line: Address) -> usize {
        self.byte(line + 2) as usize
    }

    pub fn text_start(line: Address) -> Address {
        line + LINE_HEADER
    }

    /// Address of the line after `line`. A length byte that cannot be
    /// right ends the program there rather than walking into the weeds.
    pub fn next_line(&self, line: Address) -> Address {
        let len = self.line_len_at(line);
        if len <= LINE_HEADER || line + len > self.program_end {
            self.program_end
        } else {
            line + len
        }
    }

    /// First line numbered `number` or higher; the end of the program if none.
    pub fn find_line(&self, number: LineNumber) -> Address {
        let mut line = 0;
        while line < self.program_end {
            if self.line_number_at(line) >= number {
                return line;
            }
            line = self.next_line(line);
        }
        self.program_end
    }

    pub fn reset_program(&mut self) {
        debug!("program reset");
        self.program_end = 0;
    }

    /// Position of the newline ending the text at `pos`.
    pub fn end_of_text(&self, mut pos: Address) -> Address {
        while pos < self.len() && self.byte(pos) != NL {
            pos += 1;
        }
        pos
    }

    fn copy_in(&mut self, at: Address, input: &[u8]) {
        let bytes = self.bytes_mut();
        bytes[at..at + input.len()].copy_from_slice(input);
        bytes[at + input.len()] = NL;
        scan::uppercase(&mut bytes[at..=at + input.len()]);
    }

    /// Place a freshly typed line just above the program, upper-cased
    /// outside of quotes. Returns where the text begins.
    pub fn stage_entry(&mut self, input: &str) -> Result<Address> {
        let input = strip_terminators(input);
        let at = self.program_end + 2;
        if self.program_end + staging_cost(input.len()) > self.variables_begin() {
            return Err(error!(OutOfMemory));
        }
        self.copy_in(at, input);
        Ok(at)
    }

    /// Place an answer to INPUT at the top of free space, above `floor`.
    pub fn stage_input(&mut self, input: &str, floor: Address) -> Result<Address> {
        let input = strip_terminators(input);
        let top = self.variables_begin();
        match top.checked_sub(input.len() + 1) {
            Some(at) if at > floor + 1 => {
                self.copy_in(at, input);
                Ok(at)
            }
            _ => Err(error!(OutOfMemory)),
        }
    }

    /// Merge the staged text at `text` into the program as line `number`.
    ///
    /// An existing line with that number is removed first; empty text
    /// stops there. The new line is moved to the top of free space and
    /// then shuffled down into place a gap-sized chunk at a time, so
    /// nothing beyond the free space is ever needed. Running out of room
    /// is detected before the program is touched, and a line that would
    /// leave no room to stage a short command is refused.
    pub fn enter_line(&mut self, number: LineNumber, text: Address) -> Result<()> {
        let text_len = self.end_of_text(text) - text;
        if text_len > MAX_TEXT {
            return Err(error!(OutOfMemory));
        }
        let line_len = LINE_HEADER + text_len + 1;
        if text_len > 0 {
            let existing = self.find_line(number);
            let replaced =
                if existing != self.program_end && self.line_number_at(existing) == number {
                    self.next_line(existing) - existing
                } else {
                    0
                };
            let grown_end = self.program_end - replaced + line_len;
            if grown_end + staging_cost(COMMAND_ROOM) > self.variables_begin() {
                return Err(error!(OutOfMemory));
            }
        }
        let staged = match self.variables_begin().checked_sub(line_len + 1) {
            Some(staged) if staged > self.program_end && text >= self.program_end => staged,
            _ => return Err(error!(OutOfMemory)),
        };
        let program_end = self.program_end;
        {
            let bytes = self.bytes_mut();
            bytes.copy_within(text..=text + text_len, staged + LINE_HEADER);
            bytes[staged..staged + 2].copy_from_slice(&number.to_le_bytes());
            bytes[staged + 2] = line_len as u8;
        }

        let mut start = self.find_line(number);
        if start != program_end && self.line_number_at(start) == number {
            let from = self.next_line(start);
            let removed = from - start;
            self.bytes_mut().copy_within(from..program_end, start);
            self.program_end -= removed;
            debug!("removed line {} ({} bytes)", number, removed);
        }
        if text_len == 0 {
            return Ok(());
        }

        let mut from = staged;
        let mut remaining = line_len;
        while remaining > 0 {
            let end = self.program_end;
            let space = (from - end).min(remaining);
            let bytes = self.bytes_mut();
            bytes.copy_within(start..end, start + space);
            bytes.copy_within(from..from + space, start);
            from += space;
            start += space;
            remaining -= space;
            self.program_end = end + space;
        }
        debug!("entered line {} ({} bytes)", number, line_len);
        Ok(())
    }

    /// Lines from the first one numbered `number` or higher.
    pub fn lines_from(&self, number: LineNumber) -> Lines<'_> {
        Lines {
            arena: self,
            line: self.find_line(number),
        }
    }

    pub fn lines(&self) -> Lines<'_> {
        self.lines_from(0)
    }

    /// LIST rendering of one line. When `marker` falls on the line's text
    /// that character is shown as `^`.
    pub fn listing(&self, line: Address, marker: Option<Address>) -> String {
        let start = Arena::text_start(line);
        let end = self.end_of_text(start);
        let mut text = self.bytes()[start..end].to_vec();
        if let Some(pos) = marker {
            if pos >= start && pos < end {
                text[pos - start] = b'^';
            }
        }
        format!(
            "{} {}",
            self.line_number_at(line),
            String::from_utf8_lossy(&text)
        )
    }

    /// Looks through the lines after `line` for `NEXT <var>` ending a
    /// statement. Returns that line and the position after the variable.
    pub fn find_next(&self, mut line: Address, var: u8) -> Option<(Address, Address)> {
        loop {
            line = self.next_line(line);
            if line >= self.program_end {
                return None;
            }
            let start = Arena::text_start(line);
            let end = self.end_of_text(start);
            if end >= self.len() {
                return None;
            }
            let text = &self.bytes()[..=end];
            let mut pos = start;
            while pos + 4 <= end {
                if &text[pos..pos + 4] == b"NEXT" {
                    let mut after = pos + 4;
                    scan::skip_blanks(text, &mut after);
                    if text[after] == var {
                        after += 1;
                        scan::skip_blanks(text, &mut after);
                        if scan::is_end_of_statement(text[after]) {
                            return Some((line, after));
                        }
                    }
                }
                pos += 1;
            }
        }
    }
}

fn strip_terminators(input: &str) -> &[u8] {
    input.trim_end_matches(|c| c == '\r' || c == '\n').as_bytes()
}

pub struct Lines<'a> {
    arena: &'a Arena,
    line: Address,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (LineNumber, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.line >= self.arena.program_end() {
            return None;
        }
        let line = self.line;
        self.line = self.arena.next_line(line);
        let start = Arena::text_start(line);
        let end = self.arena.end_of_text(start).min(self.line.max(start));
        Some((self.arena.line_number_at(line), &self.arena.bytes()[start..end]))
    }
}
