//! # Micro BASIC
//!
//! A line-numbered BASIC for machines with a few kilobytes of memory.
//!
//! The program, the 26 variables and the loop stack share one small
//! block of bytes and statements are interpreted straight from the
//! stored text. Storage, the serial port, external RAM and the
//! peripherals are traits, so the same machine runs on a desktop
//! terminal or against test doubles.
//!
//! Begin by opening a terminal and running the executable. If you get
//! the following, you have achieved success.
//! ```text
//! MICRO BASIC 0.2
//! Searching for AUTORUN.BAS...Not Found
//! 1132 bytes free.
//! Ok
//! > █
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod config;
pub mod lang;
pub mod mach;
pub mod term;
