#![allow(dead_code)]
use basic::mach::{Devices, Event, MemStorage, Peripherals, PinMode, Runtime};
use std::cell::RefCell;
use std::rc::Rc;

/// Consecutive `Running` events tolerated before giving up.
const PATIENCE: usize = 100;

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut running = 0;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Quit => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                running += 1;
                if running > PATIENCE {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
        }
        if event != Event::Running {
            running = 0;
        }
    }
    s.trim_end_matches("Ok\n").to_string()
}

/// Enters each line then runs until the machine stops.
pub fn program(runtime: &mut Runtime, lines: &[&str]) -> String {
    for line in lines {
        runtime.enter(line);
    }
    exec(runtime)
}

/// Peripherals that write down everything asked of them.
#[derive(Clone, Default)]
pub struct Recorder {
    pub calls: Rc<RefCell<Vec<String>>>,
    pub level: u16,
}

impl Recorder {
    pub fn take(&self) -> Vec<String> {
        self.calls.borrow_mut().drain(..).collect()
    }

    fn log(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Peripherals for Recorder {
    fn pin_mode(&mut self, pin: u8, mode: PinMode) {
        self.log(format!("pin_mode {} {:?}", pin, mode));
    }
    fn analog_read(&mut self, _pin: u8) -> u16 {
        self.level
    }
    fn digital_read(&mut self, _pin: u8) -> u8 {
        (self.level > 0) as u8
    }
    fn analog_write(&mut self, pin: u8, val: u16) {
        self.log(format!("analog_write {} {}", pin, val));
    }
    fn digital_write(&mut self, pin: u8, val: u8) {
        self.log(format!("digital_write {} {}", pin, val));
    }
    fn tone(&mut self, freq: u16, duration: u32) {
        self.log(format!("tone {} {}", freq, duration));
    }
    fn no_tone(&mut self) {
        self.log("no_tone".to_string());
    }
    fn patch_count(&self) -> u8 {
        4
    }
    fn trigger_fx(&mut self, patch: u8, volume: u8, retrigger: bool) {
        self.log(format!("fx {} {} {}", patch, volume, retrigger));
    }
    fn song_count(&self) -> u8 {
        2
    }
    fn start_song(&mut self, song: u8) {
        self.log(format!("song {}", song));
    }
    fn stop_song(&mut self) {
        self.log("stop_song".to_string());
    }
    fn clear_screen(&mut self) {
        self.log("cls".to_string());
    }
}

/// A runtime on in-memory storage, plus a handle on that storage.
pub fn with_storage() -> (Runtime, MemStorage) {
    let storage = MemStorage::default();
    let dev = Devices {
        storage: Box::new(storage.clone()),
        ..Devices::default()
    };
    (Runtime::new(Default::default(), dev), storage)
}

pub fn with_recorder() -> (Runtime, Recorder) {
    let io = Recorder::default();
    let dev = Devices {
        io: Box::new(io.clone()),
        ..Devices::default()
    };
    (Runtime::new(Default::default(), dev), io)
}
