extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::config::Config;
use crate::lang::LineNumber;
use crate::mach::{Devices, Event, FsStorage, Runtime};
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main(config: Config) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
        return;
    }
    if let Err(error) = main_loop(config, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(config: Config, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    info!("storage in {}", config.root.display());
    let dev = Devices {
        storage: Box::new(FsStorage::new(config.root.clone())),
        ..Devices::default()
    };
    let mut runtime = Runtime::new(config, dev);
    let command = Interface::new("BASIC")?;
    command.set_prompt("> ")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);
    runtime.boot();

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&format!("{} ", prompt))?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        if runtime.enter(&string) {
                            input.add_history_unique(string);
                        }
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Quit => {
                debug!("quit");
                break;
            }
        }
    }
    Ok(())
}

/// TAB after a line number brings back that line for editing.
struct LineCompleter {
    lines: Vec<(LineNumber, String)>,
}

impl LineCompleter {
    fn new(lines: Vec<(LineNumber, String)>) -> LineCompleter {
        LineCompleter { lines }
    }

    fn line(&self, number: LineNumber) -> Option<&str> {
        self.lines
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, s)| s.as_str())
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<LineNumber>().ok()?;
        let s = self.line(num)?;
        let mut comp = Completion::simple(s.to_string());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}
