use super::device::PinMode;
use super::runtime::Stream;
use super::{Runtime, Val};
use crate::error;
use crate::lang::scan::NL;
use crate::lang::token::Function;
use crate::lang::Error;
use chrono::Utc;
use log::debug;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    /// Calls a built-in with its optional argument.
    pub(super) fn function(&mut self, function: Function, arg: Option<f32>) -> Result<Val> {
        use Function::*;
        let required = || arg.ok_or_else(|| error!(SyntaxError));
        match function {
            Peek => self.peek(required()?),
            Abs => Ok(Val::Number(required()?.abs())),
            Aread => {
                let pin = required()? as u8;
                self.dev.io.pin_mode(pin, PinMode::Input);
                Ok(Val::Number(self.dev.io.analog_read(pin) as f32))
            }
            Dread => {
                let pin = required()? as u8;
                self.dev.io.pin_mode(pin, PinMode::Input);
                Ok(Val::Number(self.dev.io.digital_read(pin) as f32))
            }
            Rnd => {
                let n = required()? as u16;
                if n == 0 {
                    return Err(error!(SyntaxError));
                }
                Ok(Val::Number(self.rng.gen_range(0..n) as f32))
            }
            Chr => Ok(Val::Char(required()?)),
            Ticks => Ok(Val::Number(self.ticks() as f32)),
            Rediri => match arg {
                None => Ok(Val::Number(self.in_stream as u8 as f32)),
                Some(id) => {
                    self.in_stream = Stream::from_id(id).ok_or_else(|| error!(SyntaxError))?;
                    debug!("input stream {:?}", self.in_stream);
                    Ok(Val::Number(1.0))
                }
            },
            Rediro => match arg {
                None => Ok(Val::Number(self.out_stream as u8 as f32)),
                Some(id) => {
                    self.out_stream = Stream::from_id(id).ok_or_else(|| error!(SyntaxError))?;
                    debug!("output stream {:?}", self.out_stream);
                    Ok(Val::Number(1.0))
                }
            },
            Baud => match arg {
                None => Ok(Val::Number(self.dev.serial.baud() as f32)),
                Some(rate) => Ok(Val::from(self.dev.serial.set_baud(rate as u32))),
            },
            Urx => match arg {
                None => Ok(Val::Number(self.dev.serial.unread() as f32)),
                Some(_) => Ok(Val::Number(self.dev.serial.read().unwrap_or(0) as f32)),
            },
            Utx => match arg {
                None => Ok(Val::from(self.dev.serial.tx_full())),
                Some(ch) => {
                    self.dev.serial.write(ch as u8);
                    Ok(Val::Number(1.0))
                }
            },
            Urxprt => {
                let limit = arg.map(|n| n.max(0.0) as usize).unwrap_or(usize::max_value());
                let mut count = 0;
                while count < limit {
                    match self.dev.serial.read() {
                        Some(ch) => self.outchar(ch),
                        None => break,
                    }
                    count += 1;
                }
                Ok(Val::Number(count as f32))
            }
            Utxprt => {
                let mut addr = match arg {
                    Some(addr) if addr >= 0.0 => addr as usize,
                    _ => return Ok(Val::Number(0.0)),
                };
                let mut count = 0;
                while let Some(ch) = self.arena.peek(addr) {
                    if ch == 0 || ch == NL {
                        break;
                    }
                    self.dev.serial.write(ch);
                    addr += 1;
                    count += 1;
                }
                Ok(Val::Number(count as f32))
            }
        }
    }

    /// Below the arena size reads the arena, above it the external RAM.
    fn peek(&mut self, addr: f32) -> Result<Val> {
        let addr = addr.max(0.0);
        let byte = if (addr as usize) < self.arena.len() {
            self.arena.peek(addr as usize).unwrap_or(0)
        } else {
            self.dev.xram.read(addr as u32)
        };
        Ok(Val::Number(byte as f32))
    }

    /// Sixtieths of a second since start-up.
    fn ticks(&self) -> i64 {
        (Utc::now() - self.started).num_milliseconds() * 60 / 1000
    }
}
