use log::{debug, warn};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

/// ## Collaborators
///
/// The machine only knows these traits. Storage, the serial line, the
/// external RAM and the pins are all supplied from outside.

pub struct Devices {
    pub storage: Box<dyn Storage>,
    pub serial: Box<dyn Serial>,
    pub xram: Box<dyn ExternalMemory>,
    pub io: Box<dyn Peripherals>,
}

impl Default for Devices {
    fn default() -> Devices {
        Devices {
            storage: Box::new(MemStorage::default()),
            serial: Box::new(Loopback::default()),
            xram: Box::new(SpiRam::default()),
            io: Box::new(NullPeripherals),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
}

pub trait Storage {
    fn open_read(&mut self, name: &str) -> io::Result<Vec<u8>>;
    fn create(&mut self, name: &str) -> io::Result<Box<dyn Write>>;
    fn files(&mut self) -> io::Result<Vec<DirEntry>>;
}

/// Files in one directory. Names are tried as given, then without
/// regard to case, since the dialect upper-cases everything typed.
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new<P: Into<PathBuf>>(root: P) -> FsStorage {
        FsStorage { root: root.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let exact = self.root.join(name);
        if exact.exists() {
            return exact;
        }
        if let Ok(dir) = std::fs::read_dir(&self.root) {
            for entry in dir.flatten() {
                if entry.file_name().to_string_lossy().eq_ignore_ascii_case(name) {
                    return entry.path();
                }
            }
        }
        exact
    }
}

impl Storage for FsStorage {
    fn open_read(&mut self, name: &str) -> io::Result<Vec<u8>> {
        let path = self.resolve(name);
        debug!("read {}", path.display());
        std::fs::read(path)
    }

    fn create(&mut self, name: &str) -> io::Result<Box<dyn Write>> {
        let path = self.resolve(name);
        debug!("create {}", path.display());
        Ok(Box::new(std::fs::File::create(path)?))
    }

    fn files(&mut self) -> io::Result<Vec<DirEntry>> {
        let mut list = vec![];
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let meta = entry.metadata()?;
            list.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: meta.is_dir(),
                size: meta.len(),
            });
        }
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }
}

/// In-memory files. Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    files: Rc<RefCell<BTreeMap<String, Vec<u8>>>>,
}

impl MemStorage {
    pub fn insert(&self, name: &str, contents: &[u8]) {
        self.files
            .borrow_mut()
            .insert(name.to_string(), contents.to_vec());
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(name).cloned()
    }

    fn find(&self, name: &str) -> Option<String> {
        let files = self.files.borrow();
        if files.contains_key(name) {
            return Some(name.to_string());
        }
        files.keys().find(|k| k.eq_ignore_ascii_case(name)).cloned()
    }
}

impl Storage for MemStorage {
    fn open_read(&mut self, name: &str) -> io::Result<Vec<u8>> {
        match self.find(name) {
            Some(key) => Ok(self.get(&key).unwrap_or_default()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, name.to_string())),
        }
    }

    fn create(&mut self, name: &str) -> io::Result<Box<dyn Write>> {
        let key = self.find(name).unwrap_or_else(|| name.to_string());
        self.insert(&key, &[]);
        Ok(Box::new(MemFile {
            files: self.files.clone(),
            name: key,
            buf: vec![],
        }))
    }

    fn files(&mut self) -> io::Result<Vec<DirEntry>> {
        Ok(self
            .files
            .borrow()
            .iter()
            .map(|(name, data)| DirEntry {
                name: name.clone(),
                is_dir: false,
                size: data.len() as u64,
            })
            .collect())
    }
}

/// Writer for `MemStorage`; the file is committed when dropped.
struct MemFile {
    files: Rc<RefCell<BTreeMap<String, Vec<u8>>>>,
    name: String,
    buf: Vec<u8>,
}

impl Write for MemFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for MemFile {
    fn drop(&mut self) {
        let buf = std::mem::take(&mut self.buf);
        self.files.borrow_mut().insert(self.name.clone(), buf);
    }
}

pub const BAUD_RATES: [u32; 5] = [9600, 19200, 38400, 57600, 115200];

pub trait Serial {
    fn read(&mut self) -> Option<u8>;
    fn write(&mut self, byte: u8);
    fn unread(&self) -> usize;
    fn tx_full(&self) -> bool;
    fn baud(&self) -> u32;
    fn set_baud(&mut self, rate: u32) -> bool;
}

/// A serial line wired back to itself: every byte sent can be read back.
/// Clones share the same line so a test can feed and inspect it.
#[derive(Debug, Clone)]
pub struct Loopback {
    line: Rc<RefCell<LoopbackLine>>,
}

#[derive(Debug)]
struct LoopbackLine {
    rx: VecDeque<u8>,
    sent: Vec<u8>,
    baud: u32,
}

impl Default for Loopback {
    fn default() -> Loopback {
        Loopback {
            line: Rc::new(RefCell::new(LoopbackLine {
                rx: VecDeque::new(),
                sent: vec![],
                baud: BAUD_RATES[0],
            })),
        }
    }
}

impl Loopback {
    /// Bytes arriving from the far end.
    pub fn feed(&self, bytes: &[u8]) {
        self.line.borrow_mut().rx.extend(bytes.iter().copied());
    }

    /// Everything sent so far.
    pub fn sent(&self) -> Vec<u8> {
        self.line.borrow().sent.clone()
    }
}

impl Serial for Loopback {
    fn read(&mut self) -> Option<u8> {
        self.line.borrow_mut().rx.pop_front()
    }
    fn write(&mut self, byte: u8) {
        let mut line = self.line.borrow_mut();
        line.sent.push(byte);
        line.rx.push_back(byte);
    }
    fn unread(&self) -> usize {
        self.line.borrow().rx.len()
    }
    fn tx_full(&self) -> bool {
        false
    }
    fn baud(&self) -> u32 {
        self.line.borrow().baud
    }
    fn set_baud(&mut self, rate: u32) -> bool {
        if BAUD_RATES.contains(&rate) {
            self.line.borrow_mut().baud = rate;
            true
        } else {
            false
        }
    }
}

/// Byte-addressable memory behind a shared bus. Access is sequential;
/// the bus must be yielded while storage is using it.
pub trait ExternalMemory {
    fn read(&mut self, addr: u32) -> u8;
    fn write(&mut self, addr: u32, val: u8);
    fn yield_bus(&mut self);
    fn unyield_bus(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorState {
    Idle,
    Read,
    Write,
}

/// SPI RAM model with the sequential cursor of the real part.
#[derive(Debug)]
pub struct SpiRam {
    data: Vec<u8>,
    state: CursorState,
    last_state: CursorState,
    yielded: bool,
    cursor: u32,
    seeks: usize,
}

pub const SPI_RAM_SIZE: usize = 128 * 1024;

impl Default for SpiRam {
    fn default() -> SpiRam {
        SpiRam::new(SPI_RAM_SIZE)
    }
}

impl SpiRam {
    pub fn new(size: usize) -> SpiRam {
        SpiRam {
            data: vec![0; size],
            state: CursorState::Idle,
            last_state: CursorState::Idle,
            yielded: false,
            cursor: 0,
            seeks: 0,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// How many times a sequence had to be restarted.
    pub fn seeks(&self) -> usize {
        self.seeks
    }

    fn access(&mut self, addr: u32, state: CursorState) -> usize {
        if self.state != state || self.cursor != addr {
            self.state = state;
            self.seeks += 1;
        }
        self.cursor = addr.wrapping_add(1);
        addr as usize % self.data.len().max(1)
    }
}

impl ExternalMemory for SpiRam {
    fn read(&mut self, addr: u32) -> u8 {
        let idx = self.access(addr, CursorState::Read);
        self.data.get(idx).copied().unwrap_or(0)
    }

    fn write(&mut self, addr: u32, val: u8) {
        let idx = self.access(addr, CursorState::Write);
        if let Some(b) = self.data.get_mut(idx) {
            *b = val;
        }
    }

    fn yield_bus(&mut self) {
        if self.yielded {
            warn!("spi ram bus already yielded");
            return;
        }
        self.yielded = true;
        self.last_state = self.state;
        self.state = CursorState::Idle;
    }

    fn unyield_bus(&mut self) {
        if self.yielded {
            self.yielded = false;
            self.state = self.last_state;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinMode {
    Input,
    Output,
}

pub trait Peripherals {
    fn pin_mode(&mut self, pin: u8, mode: PinMode);
    fn analog_read(&mut self, pin: u8) -> u16;
    fn digital_read(&mut self, pin: u8) -> u8;
    fn analog_write(&mut self, pin: u8, val: u16);
    fn digital_write(&mut self, pin: u8, val: u8);
    fn tone(&mut self, freq: u16, duration: u32);
    fn no_tone(&mut self);
    fn patch_count(&self) -> u8;
    fn trigger_fx(&mut self, patch: u8, volume: u8, retrigger: bool);
    fn song_count(&self) -> u8;
    fn start_song(&mut self, song: u8);
    fn stop_song(&mut self);
    fn clear_screen(&mut self);
}

/// No hardware attached. Reads are zero, writes go nowhere.
pub struct NullPeripherals;

impl Peripherals for NullPeripherals {
    fn pin_mode(&mut self, _pin: u8, _mode: PinMode) {}
    fn analog_read(&mut self, _pin: u8) -> u16 {
        0
    }
    fn digital_read(&mut self, _pin: u8) -> u8 {
        0
    }
    fn analog_write(&mut self, _pin: u8, _val: u16) {}
    fn digital_write(&mut self, _pin: u8, _val: u8) {}
    fn tone(&mut self, _freq: u16, _duration: u32) {}
    fn no_tone(&mut self) {}
    fn patch_count(&self) -> u8 {
        0
    }
    fn trigger_fx(&mut self, _patch: u8, _volume: u8, _retrigger: bool) {}
    fn song_count(&self) -> u8 {
        0
    }
    fn start_song(&mut self, _song: u8) {}
    fn stop_song(&mut self) {}
    fn clear_screen(&mut self) {}
}
