use super::Address;
use crate::error;
use crate::lang::Error;
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Bytes a frame would take in the arena's stack region.
pub const GOSUB_FRAME_SIZE: usize = 5;
pub const FOR_FRAME_SIZE: usize = 12;

/// Where execution continues: a stored line, or the direct line when `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resume {
    pub line: Option<Address>,
    pub txt_pos: Address,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Gosub {
        resume: Resume,
    },
    For {
        var: u8,
        terminal: f32,
        step: f32,
        resume: Resume,
    },
}

impl Frame {
    pub fn size(&self) -> usize {
        match self {
            Frame::Gosub { .. } => GOSUB_FRAME_SIZE,
            Frame::For { .. } => FOR_FRAME_SIZE,
        }
    }
}

/// ## Call and loop stack
///
/// Frames are kept typed but charged their byte size against the stack
/// region of the arena. A push that would not fit is `Sorry!`.

pub struct Stack {
    frames: Vec<Frame>,
    used: usize,
    capacity: usize,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.frames)
    }
}

impl Stack {
    pub fn new(capacity: usize) -> Stack {
        Stack {
            frames: vec![],
            used: 0,
            capacity,
        }
    }
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    pub fn used(&self) -> usize {
        self.used
    }
    pub fn clear(&mut self) {
        self.frames.clear();
        self.used = 0;
    }
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }
    pub fn get(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }
    pub fn push(&mut self, frame: Frame) -> Result<()> {
        if self.used + frame.size() > self.capacity {
            return Err(error!(OutOfMemory));
        }
        debug!("push {:?}", frame);
        self.used += frame.size();
        self.frames.push(frame);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<Frame> {
        let frame = self.frames.pop()?;
        self.used -= frame.size();
        debug!("pop {:?}", frame);
        Some(frame)
    }
    /// Drops the frame at `idx` and everything above it.
    pub fn truncate(&mut self, idx: usize) {
        while self.frames.len() > idx {
            self.pop();
        }
    }
    /// Takes out the frame at `idx`, leaving the ones above it in place.
    pub fn remove(&mut self, idx: usize) -> Option<Frame> {
        if idx >= self.frames.len() {
            return None;
        }
        let frame = self.frames.remove(idx);
        self.used -= frame.size();
        debug!("remove {:?}", frame);
        Some(frame)
    }
    /// Innermost For frame, walking past any Gosub frames above it.
    pub fn find_for(&self) -> Option<usize> {
        self.frames
            .iter()
            .rposition(|f| matches!(f, Frame::For { .. }))
    }
    /// Innermost Gosub frame, walking past any For frames above it.
    pub fn find_gosub(&self) -> Option<usize> {
        self.frames
            .iter()
            .rposition(|f| matches!(f, Frame::Gosub { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gosub() -> Frame {
        Frame::Gosub {
            resume: Resume {
                line: Some(0),
                txt_pos: 3,
            },
        }
    }

    fn for_frame(var: u8) -> Frame {
        Frame::For {
            var,
            terminal: 3.0,
            step: 1.0,
            resume: Resume {
                line: None,
                txt_pos: 10,
            },
        }
    }

    #[test]
    fn test_capacity_is_in_bytes() {
        let mut stack = Stack::new(FOR_FRAME_SIZE * 5);
        for _ in 0..5 {
            stack.push(for_frame(b'I')).unwrap();
        }
        assert_eq!(stack.push(gosub()).unwrap_err().code(), crate::lang::ErrorCode::OutOfMemory);
        assert_eq!(stack.len(), 5);
        stack.pop();
        stack.push(gosub()).unwrap();
        stack.push(gosub()).unwrap();
        assert_eq!(stack.used(), FOR_FRAME_SIZE * 4 + GOSUB_FRAME_SIZE * 2);
    }

    #[test]
    fn test_find_walks_past_other_kind() {
        let mut stack = Stack::new(100);
        stack.push(for_frame(b'I')).unwrap();
        stack.push(gosub()).unwrap();
        stack.push(for_frame(b'J')).unwrap();
        stack.push(for_frame(b'K')).unwrap();
        assert_eq!(stack.find_gosub(), Some(1));
        assert_eq!(stack.find_for(), Some(3));
        stack.truncate(1);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.find_gosub(), None);
        assert_eq!(stack.used(), FOR_FRAME_SIZE);
    }

    #[test]
    fn test_remove_keeps_frames_above() {
        let mut stack = Stack::new(100);
        stack.push(for_frame(b'I')).unwrap();
        stack.push(gosub()).unwrap();
        assert_eq!(stack.remove(0), Some(for_frame(b'I')));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.find_gosub(), Some(0));
        assert_eq!(stack.used(), GOSUB_FRAME_SIZE);
        assert_eq!(stack.remove(5), None);
    }
}
