/*!
## Rust Machine Module

This Rust module is the BASIC machine: the byte arena holding program,
variables and stack, the statement and expression interpreter that
walks program text in place, and the devices it talks to.

*/

pub type Address = usize;

mod arena;
mod device;
mod expr;
mod function;
mod program;
mod runtime;
mod stack;
mod statement;
mod val;

pub use arena::Arena;
pub use device::{
    CursorState, Devices, DirEntry, ExternalMemory, FsStorage, Loopback, MemStorage,
    NullPeripherals, Peripherals, PinMode, Serial, SpiRam, Storage, BAUD_RATES,
};
pub use program::Lines;
pub use runtime::{Event, Runtime, Stream, BANNER};
pub use stack::{Frame, Resume, Stack};
pub use val::Val;

#[cfg(test)]
mod tests;
