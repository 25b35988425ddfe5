use super::device::PinMode;
use super::runtime::Stream;
use super::stack::{Frame, Resume};
use super::{Runtime, Val};
use crate::error;
use crate::lang::scan::{self, NL};
use crate::lang::token::{HighLow, Keyword, Step, Then, To};
use crate::lang::{Error, LineNumber};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// What the machine does after a statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    /// Past any `:` to the next statement, or the next line.
    Statement,
    /// Interpret right at the cursor.
    Interpret,
    NextLine,
    /// Start of `current_line`; past the end of the program is a warm start.
    Line,
    Prompt,
    Warm,
    Input(u8),
    Delay(u32),
    Quit,
}

const SFX_VOLUME: f32 = 192.0;

impl Runtime {
    /// Dispatches one statement at the cursor.
    pub(super) fn statement(&mut self) -> Result<Flow> {
        use Keyword::*;
        let keyword = match self.scan::<Keyword>() {
            Some(keyword) => keyword,
            None => return self.r#let(),
        };
        match keyword {
            List => self.r#list(),
            Load => self.r#load(false),
            New => self.r#new_(),
            Run => self.r#run(),
            Save => self.r#save(),
            Next => self.r#next(),
            Let => self.r#let(),
            If => self.r#if(),
            Goto => self.r#goto(),
            Gosub => self.r#gosub(),
            Return => self.r#return(),
            Rem | Quote => Ok(Flow::NextLine),
            For => self.r#for(),
            Input => self.r#input(),
            Print | Question => self.r#print_(),
            Poke => self.r#poke(),
            Stop | End => self.r#end(),
            Bye => Ok(Flow::Quit),
            Files => self.r#files(),
            Mem => self.r#mem(),
            Awrite => self.r#write_pin(false),
            Dwrite => self.r#write_pin(true),
            Delay => self.r#delay(),
            Rseed => self.r#rseed(),
            Chain => self.r#load(true),
            Tonew => self.r#tone(true),
            Tone => self.r#tone(false),
            Notone => {
                self.dev.io.no_tone();
                Ok(Flow::Statement)
            }
            Cls => {
                self.dev.io.clear_screen();
                Ok(Flow::Statement)
            }
            Exit => self.r#exit(),
            Dload => self.r#dload(),
            Sfxld | Songld => {
                self.print("not implemented\n");
                Ok(Flow::Statement)
            }
            Sfx => self.r#sfx(),
            Song => self.r#song(),
            Nosong => {
                self.dev.io.stop_song();
                Ok(Flow::Statement)
            }
        }
    }

    fn end_of_statement(&mut self) -> Result<()> {
        self.skip_blanks();
        if scan::is_end_of_statement(self.byte()) {
            Ok(())
        } else {
            Err(error!(SyntaxError))
        }
    }

    fn end_of_line(&mut self) -> Result<()> {
        self.skip_blanks();
        if self.byte() == NL {
            Ok(())
        } else {
            Err(error!(SyntaxError))
        }
    }

    fn expect(&mut self, ch: u8) -> Result<()> {
        self.skip_blanks();
        if self.byte() != ch {
            return Err(error!(SyntaxError));
        }
        self.txt_pos += 1;
        self.skip_blanks();
        Ok(())
    }

    fn letter(&mut self) -> Option<u8> {
        self.skip_blanks();
        let ch = self.byte();
        if !scan::is_letter(ch) {
            return None;
        }
        self.txt_pos += 1;
        self.skip_blanks();
        Some(ch)
    }

    fn numeric(&mut self) -> Result<f32> {
        Ok(self.expression()?.number())
    }

    fn line_target(&mut self) -> Result<LineNumber> {
        match self.expression() {
            Ok(val) => {
                self.skip_blanks();
                Ok(val.number() as LineNumber)
            }
            Err(_) => Err(error!(How)),
        }
    }

    fn resume(&self) -> Resume {
        Resume {
            line: self.current_line,
            txt_pos: self.txt_pos,
        }
    }

    fn resume_at(&mut self, resume: Resume) -> Result<()> {
        if let Some(line) = resume.line {
            if line >= self.arena.program_end() {
                return Err(error!(StackStuffed));
            }
        }
        if resume.txt_pos >= self.arena.len() {
            return Err(error!(StackStuffed));
        }
        self.current_line = resume.line;
        self.txt_pos = resume.txt_pos;
        Ok(())
    }

    fn listing_from(&self, number: LineNumber) -> Vec<String> {
        self.arena
            .lines_from(number)
            .map(|(n, text)| format!("{} {}\n", n, String::from_utf8_lossy(text)))
            .collect()
    }

    fn r#let(&mut self) -> Result<Flow> {
        let var = self.letter().ok_or_else(|| error!(How))?;
        self.expect(b'=')?;
        let val = self.numeric()?;
        self.end_of_statement()?;
        self.arena.set_variable(var, val);
        Ok(Flow::Statement)
    }

    fn r#if(&mut self) -> Result<Flow> {
        let val = self.numeric()?;
        self.skip_blanks();
        if self.byte() == NL {
            return Err(error!(SyntaxError));
        }
        if self.scan::<Then>().is_some() && self.byte() == NL {
            return Err(error!(SyntaxError));
        }
        if val != 0.0 {
            Ok(Flow::Interpret)
        } else {
            Ok(Flow::NextLine)
        }
    }

    fn r#goto(&mut self) -> Result<Flow> {
        let number = self.line_target()?;
        if self.byte() != NL {
            return Err(error!(How));
        }
        self.current_line = Some(self.arena.find_line(number));
        Ok(Flow::Line)
    }

    fn r#gosub(&mut self) -> Result<Flow> {
        let number = self.line_target()?;
        if !scan::is_end_of_statement(self.byte()) {
            return Err(error!(How));
        }
        let resume = self.resume();
        self.stack.push(Frame::Gosub { resume })?;
        self.current_line = Some(self.arena.find_line(number));
        Ok(Flow::Line)
    }

    /// Back to the innermost GOSUB, abandoning any loops opened since.
    fn r#return(&mut self) -> Result<Flow> {
        let idx = self.stack.find_gosub().ok_or_else(|| error!(How))?;
        let resume = match self.stack.get(idx) {
            Some(Frame::Gosub { resume }) => *resume,
            _ => return Err(error!(StackStuffed)),
        };
        self.stack.truncate(idx);
        self.resume_at(resume)?;
        Ok(Flow::Statement)
    }

    fn r#for(&mut self) -> Result<Flow> {
        let var = self.letter().ok_or_else(|| error!(SyntaxError))?;
        self.expect(b'=')?;
        let initial = self.numeric()?;
        self.scan::<To>().ok_or_else(|| error!(SyntaxError))?;
        let terminal = self.numeric()?;
        let step = match self.scan::<Step>() {
            Some(_) => self.numeric()?,
            None => 1.0,
        };
        self.end_of_statement()?;
        let resume = self.resume();
        self.stack.push(Frame::For {
            var,
            terminal,
            step,
            resume,
        })?;
        self.arena.set_variable(var, initial);
        Ok(Flow::Statement)
    }

    fn r#next(&mut self) -> Result<Flow> {
        let var = self.letter().ok_or_else(|| error!(How))?;
        self.end_of_statement()?;
        let idx = self.stack.find_for().ok_or_else(|| error!(How))?;
        let (terminal, step, resume) = match self.stack.get(idx) {
            Some(Frame::For {
                var: v,
                terminal,
                step,
                resume,
            }) if *v == var => (*terminal, *step, *resume),
            Some(Frame::For { .. }) => return Err(error!(How)),
            _ => return Err(error!(StackStuffed)),
        };
        let val = self.arena.variable(var) + step;
        self.arena.set_variable(var, val);
        if (step > 0.0 && val <= terminal) || (step < 0.0 && val >= terminal) {
            self.resume_at(resume)?;
        } else {
            self.stack.remove(idx);
        }
        Ok(Flow::Statement)
    }

    /// Leaves the innermost loop, continuing after its `NEXT`.
    fn r#exit(&mut self) -> Result<Flow> {
        self.end_of_line()?;
        let var = match self.stack.top() {
            Some(Frame::For { var, .. }) => *var,
            _ => return Err(error!(How)),
        };
        let line = self.current_line.ok_or_else(|| error!(How))?;
        let (line, after) = self.arena.find_next(line, var).ok_or_else(|| error!(How))?;
        self.stack.pop();
        self.current_line = Some(line);
        self.txt_pos = after;
        Ok(Flow::Statement)
    }

    fn r#print_(&mut self) -> Result<Flow> {
        self.skip_blanks();
        if scan::is_end_of_statement(self.byte()) {
            self.print("\n");
            return Ok(Flow::Statement);
        }
        loop {
            self.skip_blanks();
            let ch = self.byte();
            if ch == b'"' || ch == b'\'' {
                self.quoted(ch)?;
            } else {
                match self.expression()? {
                    Val::Char(n) => self.outchar(n as u8),
                    val => self.print(&val.to_string()),
                }
            }
            self.skip_blanks();
            match self.byte() {
                sep @ b',' | sep @ b';' => {
                    self.txt_pos += 1;
                    self.skip_blanks();
                    if scan::is_end_of_statement(self.byte()) {
                        // Only a trailing `;` holds the line open.
                        if sep == b',' {
                            self.print("\n");
                        }
                        return Ok(Flow::Statement);
                    }
                }
                b':' | NL => {
                    self.print("\n");
                    return Ok(Flow::Statement);
                }
                _ => return Err(error!(SyntaxError)),
            }
        }
    }

    fn quoted(&mut self, delim: u8) -> Result<()> {
        let start = self.txt_pos + 1;
        let mut end = start;
        loop {
            match self.arena.byte(end) {
                NL => return Err(error!(SyntaxError)),
                ch if ch == delim => break,
                _ => end += 1,
            }
        }
        for pos in start..end {
            let ch = self.arena.byte(pos);
            self.outchar(ch);
        }
        self.txt_pos = end + 1;
        Ok(())
    }

    fn r#input(&mut self) -> Result<Flow> {
        let var = self.letter().ok_or_else(|| error!(SyntaxError))?;
        self.end_of_statement()?;
        Ok(Flow::Input(var))
    }

    fn r#poke(&mut self) -> Result<Flow> {
        let addr = self.numeric()?.max(0.0);
        self.expect(b',')?;
        let val = self.numeric()? as u8;
        self.end_of_statement()?;
        if (addr as usize) < self.arena.len() {
            self.arena.poke(addr as usize, val);
        } else {
            self.dev.xram.write(addr as u32, val);
        }
        Ok(Flow::Statement)
    }

    fn r#end(&mut self) -> Result<Flow> {
        self.end_of_line()?;
        Ok(Flow::Warm)
    }

    fn r#new_(&mut self) -> Result<Flow> {
        self.end_of_line()?;
        self.arena.reset_program();
        Ok(Flow::Prompt)
    }

    fn r#run(&mut self) -> Result<Flow> {
        self.rewind();
        Ok(Flow::Line)
    }

    fn r#list(&mut self) -> Result<Flow> {
        let from = scan::line_number(self.arena.bytes(), &mut self.txt_pos);
        self.end_of_line()?;
        for line in self.listing_from(from) {
            self.print(&line);
        }
        Ok(Flow::Warm)
    }

    fn r#mem(&mut self) -> Result<Flow> {
        let free = self.arena.free();
        self.print(&format!("{} bytes free.\n", free));
        Ok(Flow::Statement)
    }

    fn r#files(&mut self) -> Result<Flow> {
        let entries = self.dev.storage.files().map_err(|e| {
            warn!("files: {}", e);
            error!(FileError)
        })?;
        for entry in entries {
            let pad = " ".repeat(13usize.saturating_sub(entry.name.len()));
            let line = if entry.is_dir {
                format!("    {}/{}(dir)\n", entry.name, pad)
            } else {
                format!("    {}{}{}\n", entry.name, pad, entry.size)
            };
            self.print(&line);
        }
        Ok(Flow::Warm)
    }

    /// LOAD and CHAIN. The file is fed through the input stream as if
    /// typed, with output held back until it runs dry.
    fn r#load(&mut self, chain: bool) -> Result<Flow> {
        self.arena.reset_program();
        let name = scan::filename(self.arena.bytes(), &mut self.txt_pos)
            .ok_or_else(|| error!(SyntaxError))?;
        let bytes = self.dev.storage.open_read(&name).map_err(|e| {
            warn!("load {}: {}", name, e);
            error!(FileError)
        })?;
        info!("load {} ({} bytes)", name, bytes.len());
        self.queue_load(&bytes);
        if chain {
            self.run_after_load = true;
        }
        Ok(Flow::Warm)
    }

    fn r#save(&mut self) -> Result<Flow> {
        let name = scan::filename(self.arena.bytes(), &mut self.txt_pos)
            .ok_or_else(|| error!(SyntaxError))?;
        let file = self.dev.storage.create(&name).map_err(|e| {
            warn!("save {}: {}", name, e);
            error!(FileError)
        })?;
        info!("save {}", name);
        self.save_file = Some(file);
        self.out_stream = Stream::File;
        for line in self.listing_from(0) {
            self.print(&line);
        }
        self.out_stream = Stream::Screen;
        if let Some(mut file) = self.save_file.take() {
            if let Err(e) = file.flush() {
                warn!("save {}: {}", name, e);
                return Err(error!(FileError));
            }
        }
        Ok(Flow::Warm)
    }

    fn r#delay(&mut self) -> Result<Flow> {
        let ms = self.numeric()?.max(0.0);
        self.end_of_statement()?;
        Ok(Flow::Delay(ms as u32))
    }

    fn r#write_pin(&mut self, digital: bool) -> Result<Flow> {
        let pin = self.numeric()? as u8;
        self.expect(b',')?;
        let val = match self.scan::<HighLow>() {
            Some(level) => level.level(),
            None => self.numeric()?,
        };
        self.end_of_statement()?;
        self.dev.io.pin_mode(pin, PinMode::Output);
        if digital {
            self.dev.io.digital_write(pin, val as u8);
        } else {
            self.dev.io.analog_write(pin, val as u16);
        }
        Ok(Flow::Statement)
    }

    fn r#rseed(&mut self) -> Result<Flow> {
        let seed = self.numeric()?;
        self.end_of_statement()?;
        debug!("rseed {}", seed);
        self.rng = StdRng::seed_from_u64(seed as u64);
        Ok(Flow::Statement)
    }

    /// TONE and TONEW. A zero frequency or duration silences the tone.
    fn r#tone(&mut self, wait: bool) -> Result<Flow> {
        let freq = self.numeric()?;
        self.skip_blanks();
        let duration = if self.byte() == b',' {
            self.txt_pos += 1;
            self.numeric()?
        } else if freq == 0.0 {
            0.0
        } else {
            return Err(error!(SyntaxError));
        };
        self.end_of_statement()?;
        if freq == 0.0 || duration <= 0.0 {
            self.dev.io.no_tone();
            return Ok(Flow::Statement);
        }
        self.dev.io.tone(freq as u16, duration as u32);
        if wait {
            Ok(Flow::Delay(duration as u32))
        } else {
            Ok(Flow::Statement)
        }
    }

    /// `DLOAD name, file_offset, length, ram_offset` into external RAM.
    fn r#dload(&mut self) -> Result<Flow> {
        let name = scan::filename(self.arena.bytes(), &mut self.txt_pos)
            .ok_or_else(|| error!(SyntaxError))?;
        self.expect(b',')?;
        let offset = self.numeric()?.max(0.0) as usize;
        self.expect(b',')?;
        let len = self.numeric()?.max(0.0) as usize;
        self.expect(b',')?;
        let ram_offset = self.numeric()?.max(0.0) as u32;
        self.end_of_statement()?;

        self.dev.xram.yield_bus();
        let data = self.dev.storage.open_read(&name);
        self.dev.xram.unyield_bus();
        let bytes = match data {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("dload {}: {}", name, e);
                self.print(&format!("{}\n", error!(FileError)));
                return Ok(Flow::Statement);
            }
        };
        let available = bytes.get(offset..).unwrap_or(&[]);
        let count = if len == 0 {
            available.len()
        } else {
            len.min(available.len())
        };
        debug!("dload {} bytes to {}", count, ram_offset);
        for (i, byte) in available[..count].iter().enumerate() {
            self.dev.xram.write(ram_offset.wrapping_add(i as u32), *byte);
        }
        if count < len {
            self.print("ERROR Ran out of file bytes\n");
        }
        Ok(Flow::Statement)
    }

    fn r#sfx(&mut self) -> Result<Flow> {
        let patch = self.numeric()?;
        if patch < 0.0 || patch >= self.dev.io.patch_count() as f32 {
            return Err(error!(OutOfMemory));
        }
        let mut volume = SFX_VOLUME;
        let mut retrigger = 1.0;
        self.skip_blanks();
        if self.byte() == b',' {
            self.txt_pos += 1;
            volume = self.numeric()?;
            self.skip_blanks();
            if self.byte() == b',' {
                self.txt_pos += 1;
                retrigger = self.numeric()?;
            }
        }
        self.end_of_statement()?;
        self.dev
            .io
            .trigger_fx(patch as u8, volume as u8, retrigger != 0.0);
        Ok(Flow::Statement)
    }

    fn r#song(&mut self) -> Result<Flow> {
        let song = self.numeric()?;
        if song < 0.0 || song >= self.dev.io.song_count() as f32 {
            return Err(error!(OutOfMemory));
        }
        self.end_of_statement()?;
        self.dev.io.start_song(song as u8);
        Ok(Flow::Statement)
    }
}
