//! # Micro BASIC
//!
//! `basic [DIRECTORY]` starts the interpreter with DIRECTORY as the
//! storage for LOAD, SAVE and FILES. Set `RUST_LOG` to see the log.
//!

use basic::config::Config;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    let mut config = Config::default();
    if let Some(root) = std::env::args_os().nth(1) {
        config.root = PathBuf::from(root);
    }
    basic::term::main(config);
}
