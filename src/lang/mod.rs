/*!
# Rust Language Module

This Rust module provides the lexical layer of BASIC: the keyword
tables, the table scanner, and the diagnostics.

*/

pub type LineNumber = u16;

#[macro_use]
mod error;
pub mod scan;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use scan::scan;
