use std::path::PathBuf;

/// Machine settings. The defaults match a 4K microcontroller build.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bytes in the arena: program, variables and stack.
    pub ram_size: usize,
    /// Nested FOR loops that fit on the stack.
    pub stack_depth: usize,
    /// Loaded and run at start-up when present.
    pub autorun: String,
    /// Directory used for LOAD, SAVE and FILES.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            ram_size: 1300,
            stack_depth: 5,
            autorun: "AUTORUN.BAS".to_string(),
            root: PathBuf::from("."),
        }
    }
}
