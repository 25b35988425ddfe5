use super::arena::Arena;
use super::device::Devices;
use super::stack::{Stack, FOR_FRAME_SIZE};
use super::statement::Flow;
use super::Address;
use crate::config::Config;
use crate::error;
use crate::lang::scan::{self, NL};
use crate::lang::{Error, ErrorCode, LineNumber};
use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::io::Write;

pub const BANNER: &str = "MICRO BASIC 0.2";

/// ## Runtime
///
/// The machine never blocks. The front-end feeds it lines with `enter`
/// and calls `execute` to run it until something needs attention.

pub struct Runtime {
    pub(super) config: Config,
    pub(super) arena: Arena,
    pub(super) stack: Stack,
    pub(super) txt_pos: Address,
    pub(super) current_line: Option<Address>,
    pub(super) direct_end: Address,
    pub(super) expression_error: bool,
    pub(super) in_stream: Stream,
    pub(super) out_stream: Stream,
    pub(super) inhibit_output: bool,
    pub(super) load_queue: VecDeque<String>,
    pub(super) run_after_load: bool,
    pub(super) save_file: Option<Box<dyn Write>>,
    pub(super) rng: StdRng,
    pub(super) started: DateTime<Utc>,
    pub(super) dev: Devices,
    trigger_run: bool,
    serial_line: Vec<u8>,
    state: State,
    outbox: VecDeque<Event>,
    interrupted: bool,
}

/// Everything the front-end has to react to.
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Input(String),
    Print(String),
    Error(Error),
    Running,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Prompt,
    Execute,
    Input { var: u8 },
    Delay { until: DateTime<Utc> },
    Quit,
}

/// Character stream ids as seen by `REDIRI` and `REDIRO`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stream {
    Serial = 0,
    File = 1,
    Keyboard = 2,
    Screen = 3,
}

impl Stream {
    pub fn from_id(id: f32) -> Option<Stream> {
        if id < 0.0 {
            return None;
        }
        match id as u8 {
            0 => Some(Stream::Serial),
            1 => Some(Stream::File),
            2 => Some(Stream::Keyboard),
            3 => Some(Stream::Screen),
            _ => None,
        }
    }
}

enum Incoming {
    Ready(String),
    Wait,
    Keyboard,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default(), Devices::default())
    }
}

impl Runtime {
    pub fn new(config: Config, dev: Devices) -> Runtime {
        let stack_size = config.stack_depth * FOR_FRAME_SIZE;
        let arena = Arena::new(config.ram_size, stack_size);
        let direct_end = arena.program_end();
        Runtime {
            config,
            arena,
            stack: Stack::new(stack_size),
            txt_pos: 0,
            current_line: None,
            direct_end,
            expression_error: false,
            in_stream: Stream::Keyboard,
            out_stream: Stream::Screen,
            inhibit_output: false,
            load_queue: VecDeque::new(),
            run_after_load: false,
            save_file: None,
            rng: StdRng::from_entropy(),
            started: Utc::now(),
            dev,
            trigger_run: false,
            serial_line: vec![],
            state: State::Prompt,
            outbox: VecDeque::new(),
            interrupted: false,
        }
    }

    /// Start-up: banner, autorun, free memory.
    pub fn boot(&mut self) {
        self.print(BANNER);
        self.print("\n");
        let autorun = self.config.autorun.clone();
        self.print(&format!("Searching for {}...", autorun));
        let found = self.dev.storage.open_read(&autorun);
        self.print(if found.is_ok() { "Loaded\n" } else { "Not Found\n" });
        self.print(&format!("{} bytes free.\n", self.arena.free()));
        if let Ok(bytes) = found {
            info!("autorun {}", autorun);
            self.arena.reset_program();
            self.queue_load(&bytes);
            self.run_after_load = true;
        }
        self.warm_start();
    }

    /// Feeds one line of input. Returns whether it is worth keeping in
    /// the history.
    pub fn enter(&mut self, line: &str) -> bool {
        match self.state {
            State::Prompt => {
                self.command(line);
                !line.trim().is_empty()
            }
            State::Input { var } => {
                self.answer(var, line);
                true
            }
            _ => {
                warn!("input ignored while running: {:?}", line);
                false
            }
        }
    }

    /// Asks a running program to stop at the next statement.
    pub fn interrupt(&mut self) {
        match self.state {
            State::Execute | State::Input { .. } | State::Delay { .. } => self.interrupted = true,
            State::Prompt | State::Quit => {}
        }
    }

    /// Every stored line as LIST shows it, without the newline.
    pub fn listing(&self) -> Vec<(LineNumber, String)> {
        self.arena
            .lines()
            .map(|(n, text)| (n, format!("{} {}", n, String::from_utf8_lossy(text))))
            .collect()
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        let mut cycles = cycles;
        loop {
            if let Some(event) = self.outbox.pop_front() {
                return event;
            }
            match self.state {
                State::Quit => return Event::Quit,
                State::Prompt => {
                    if self.trigger_run {
                        self.trigger_run = false;
                        self.rewind();
                        self.follow(Flow::Line);
                        continue;
                    }
                    match self.incoming() {
                        Incoming::Ready(line) => self.command(&line),
                        Incoming::Wait => return Event::Running,
                        Incoming::Keyboard => return Event::Stopped,
                    }
                }
                State::Input { var } => {
                    if self.interrupted {
                        self.interrupted = false;
                        self.fail(error!(Break));
                        continue;
                    }
                    match self.incoming() {
                        Incoming::Ready(line) => self.answer(var, &line),
                        Incoming::Wait => return Event::Running,
                        Incoming::Keyboard => return Event::Input("?".to_string()),
                    }
                }
                State::Delay { until } => {
                    if self.interrupted {
                        self.interrupted = false;
                        self.fail(error!(Break));
                        continue;
                    }
                    let now = Utc::now();
                    if now >= until {
                        self.follow(Flow::Statement);
                        continue;
                    }
                    let wait = (until - now).min(Duration::milliseconds(10));
                    if let Ok(wait) = wait.to_std() {
                        std::thread::sleep(wait);
                    }
                    if Utc::now() < until {
                        return Event::Running;
                    }
                }
                State::Execute => {
                    if cycles == 0 {
                        return Event::Running;
                    }
                    cycles -= 1;
                    if self.interrupted {
                        self.interrupted = false;
                        self.fail(error!(Break));
                        continue;
                    }
                    match self.statement() {
                        Ok(flow) => self.follow(flow),
                        Err(error) => self.fail(error),
                    }
                }
            }
        }
    }

    /// A line typed at the prompt: stored if numbered, else run directly.
    fn command(&mut self, line: &str) {
        self.stack.clear();
        let at = match self.arena.stage_entry(line) {
            Ok(at) => at,
            Err(error) => return self.fail(error),
        };
        let mut pos = at;
        let number = scan::line_number(self.arena.bytes(), &mut pos);
        self.current_line = None;
        if number == 0 {
            self.txt_pos = pos;
            self.direct_end = self.arena.end_of_text(pos);
            self.state = if self.arena.byte(pos) == NL {
                State::Prompt
            } else {
                State::Execute
            };
        } else if number == LineNumber::max_value() {
            self.fail(error!(How));
        } else if let Err(error) = self.arena.enter_line(number, pos) {
            self.fail(error);
        }
    }

    /// The answer to INPUT. Anything that does not evaluate asks again.
    fn answer(&mut self, var: u8, line: &str) {
        let floor = match self.current_line {
            Some(_) => self.arena.program_end(),
            None => self.direct_end,
        };
        let at = match self.arena.stage_input(line, floor) {
            Ok(at) => at,
            Err(error) => return self.fail(error),
        };
        let resume = self.txt_pos;
        self.txt_pos = at;
        self.skip_blanks();
        let val = self.expression();
        self.txt_pos = resume;
        match val {
            Ok(val) => {
                self.arena.set_variable(var, val.number());
                self.follow(Flow::Statement);
            }
            Err(_) => debug!("input did not evaluate, asking again"),
        }
    }

    /// Back to the first line with a clean stack.
    pub(super) fn rewind(&mut self) {
        info!("run");
        self.stack.clear();
        self.current_line = Some(0);
    }

    fn follow(&mut self, flow: Flow) {
        match flow {
            Flow::Statement => {
                while self.byte() == b':' {
                    self.txt_pos += 1;
                }
                self.skip_blanks();
                if self.byte() == NL {
                    self.follow(Flow::NextLine);
                } else {
                    self.state = State::Execute;
                }
            }
            Flow::Interpret => self.state = State::Execute,
            Flow::NextLine => match self.current_line {
                None => self.state = State::Prompt,
                Some(line) => {
                    self.current_line = Some(self.arena.next_line(line));
                    self.follow(Flow::Line);
                }
            },
            Flow::Line => match self.current_line {
                Some(line) if line < self.arena.program_end() => {
                    self.txt_pos = Arena::text_start(line);
                    self.state = State::Execute;
                }
                _ => self.warm_start(),
            },
            Flow::Prompt => {
                self.current_line = None;
                self.state = State::Prompt;
            }
            Flow::Warm => self.warm_start(),
            Flow::Input(var) => self.state = State::Input { var },
            Flow::Delay(ms) => {
                let until = Utc::now() + Duration::milliseconds(ms as i64);
                self.state = State::Delay { until };
            }
            Flow::Quit => {
                info!("bye");
                self.state = State::Quit;
            }
        }
    }

    pub(super) fn warm_start(&mut self) {
        self.current_line = None;
        self.stack.clear();
        self.print("Ok\n");
        self.state = State::Prompt;
    }

    /// Reports an error and unwinds to the prompt.
    fn fail(&mut self, error: Error) {
        let error = match self.current_line {
            Some(line) if line < self.arena.program_end() => {
                let number = self.arena.line_number_at(line);
                match error.code() {
                    ErrorCode::SyntaxError => {
                        error.in_listing(number, self.arena.listing(line, Some(self.txt_pos)))
                    }
                    ErrorCode::Break => error.in_line_number(Some(number)),
                    _ => error,
                }
            }
            _ => error,
        };
        debug!("{}", error);
        let code = error.code();
        if !self.inhibit_output {
            self.outbox.push_back(Event::Error(error));
        }
        self.stack.clear();
        self.current_line = None;
        match code {
            ErrorCode::SyntaxError => {
                self.print("Ok\n");
                self.state = State::Prompt;
            }
            ErrorCode::How => self.state = State::Prompt,
            _ => self.warm_start(),
        }
    }

    /// Next line from the input stream, if one is there.
    fn incoming(&mut self) -> Incoming {
        match self.in_stream {
            Stream::Keyboard | Stream::Screen => Incoming::Keyboard,
            Stream::File => match self.load_queue.pop_front() {
                Some(line) => Incoming::Ready(line),
                None => {
                    self.finish_load();
                    Incoming::Ready(String::new())
                }
            },
            Stream::Serial => {
                while let Some(ch) = self.dev.serial.read() {
                    if ch == b'\r' || ch == NL {
                        let line = String::from_utf8_lossy(&self.serial_line).into_owned();
                        self.serial_line.clear();
                        return Incoming::Ready(line);
                    }
                    self.serial_line.push(ch);
                }
                Incoming::Wait
            }
        }
    }

    /// Primes the input stream with the lines of a file.
    pub(super) fn queue_load(&mut self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        self.load_queue = text
            .split(|c| c == '\n' || c == '\r')
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        debug!("loading {} lines", self.load_queue.len());
        self.in_stream = Stream::File;
        self.inhibit_output = true;
    }

    fn finish_load(&mut self) {
        debug!("load finished");
        self.in_stream = Stream::Keyboard;
        self.inhibit_output = false;
        if self.run_after_load {
            self.run_after_load = false;
            self.trigger_run = true;
        }
    }

    pub(super) fn print(&mut self, s: &str) {
        for ch in s.bytes() {
            self.outchar(ch);
        }
    }

    pub(super) fn outchar(&mut self, ch: u8) {
        if self.inhibit_output {
            return;
        }
        match self.out_stream {
            Stream::Screen => {
                if let Some(Event::Print(s)) = self.outbox.back_mut() {
                    s.push(char::from(ch));
                } else {
                    self.outbox.push_back(Event::Print(char::from(ch).to_string()));
                }
            }
            Stream::File => match &mut self.save_file {
                Some(file) => {
                    if let Err(error) = file.write_all(&[ch]) {
                        warn!("file write failed: {}", error);
                    }
                }
                None => debug!("no file open for output"),
            },
            Stream::Serial | Stream::Keyboard => self.dev.serial.write(ch),
        }
    }
}
