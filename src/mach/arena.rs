use super::Address;

/// Bytes of a stored line's header: line number then length.
pub const LINE_HEADER: usize = 3;
pub const VAR_SIZE: usize = 4;
/// One slot per letter plus one spare.
pub const VAR_COUNT: usize = 27;

/// ## The memory of the machine
///
/// One fixed block of bytes. From the bottom: the program lines, free
/// space used to stage freshly typed text, the variable slots, and the
/// space reserved for the call/loop stack at the top. The program may
/// never grow into the variables.
///
/// ```text
/// 0           program_end          variables_begin   stack_limit      len
/// | lines ... | free / staging ... | A B C ... Z _    | stack frames   |
/// ```

#[derive(Debug, Clone)]
pub struct Arena {
    bytes: Vec<u8>,
    pub(super) program_end: Address,
    variables_begin: Address,
    stack_limit: Address,
}

impl Arena {
    pub fn new(ram_size: usize, stack_size: usize) -> Arena {
        let stack_limit = ram_size.saturating_sub(stack_size);
        Arena {
            bytes: vec![0; ram_size],
            program_end: 0,
            variables_begin: stack_limit.saturating_sub(VAR_COUNT * VAR_SIZE),
            stack_limit,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(super) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn program_end(&self) -> Address {
        self.program_end
    }

    pub fn variables_begin(&self) -> Address {
        self.variables_begin
    }

    pub fn stack_limit(&self) -> Address {
        self.stack_limit
    }

    /// Bytes left between the program and the variables.
    pub fn free(&self) -> usize {
        self.variables_begin.saturating_sub(self.program_end)
    }

    /// Text byte at `pos`; anything outside the arena reads as end of line.
    pub fn byte(&self, pos: Address) -> u8 {
        self.bytes.get(pos).copied().unwrap_or(crate::lang::scan::NL)
    }

    pub fn peek(&self, addr: Address) -> Option<u8> {
        self.bytes.get(addr).copied()
    }

    pub fn poke(&mut self, addr: Address, val: u8) -> bool {
        match self.bytes.get_mut(addr) {
            Some(b) => {
                *b = val;
                true
            }
            None => false,
        }
    }

    fn slot(&self, letter: u8) -> Address {
        let index = (letter.wrapping_sub(b'A') as usize).min(VAR_COUNT - 1);
        self.variables_begin + index * VAR_SIZE
    }

    pub fn variable(&self, letter: u8) -> f32 {
        let slot = self.slot(letter);
        let mut raw = [0u8; VAR_SIZE];
        if let Some(src) = self.bytes.get(slot..slot + VAR_SIZE) {
            raw.copy_from_slice(src);
        }
        f32::from_le_bytes(raw)
    }

    pub fn set_variable(&mut self, letter: u8, val: f32) {
        let slot = self.slot(letter);
        if let Some(dest) = self.bytes.get_mut(slot..slot + VAR_SIZE) {
            dest.copy_from_slice(&val.to_le_bytes());
        }
    }
}
