#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Mutex;

use embedded_storage_async::nor_flash::{
    ErrorType, NorFlash, NorFlashError, NorFlashErrorKind, ReadNorFlash,
};
use glowmap::action::{EncoderAction, KeyAction};
use glowmap::config::StorageConfig;
use glowmap::driver::RgbMatrix;
use glowmap::event::KeyEvent;
use glowmap::keymap::KeyMap;
use glowmap::layer::LAYER_COUNT;
use glowmap::layout::{self, MATRIX_COLS, MATRIX_ROWS, NUM_ENCODERS};
use glowmap::led_map::LED_COUNT;
use glowmap::light::Frame;
use glowmap::storage::Storage;
use smart_leds::RGB8;
use smart_leds::hsv::Hsv;

// Linked for its critical-section implementation
use critical_section as _;

/// Serializes tests that drain the static report channel
pub static CHANNEL_LOCK: Mutex<()> = Mutex::new(());

#[ctor::ctor]
fn init_log() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

pub fn key_event(row: u8, col: u8, pressed: bool) -> KeyEvent {
    KeyEvent { row, col, pressed }
}

pub fn wrap_keymap(
    keymap: [[[KeyAction; MATRIX_COLS]; MATRIX_ROWS]; LAYER_COUNT],
    encoder_map: [[EncoderAction; NUM_ENCODERS]; LAYER_COUNT],
) -> &'static RefCell<KeyMap<'static, MATRIX_ROWS, MATRIX_COLS, NUM_ENCODERS>> {
    let keymap = Box::leak(Box::new(keymap));
    let encoder_map = Box::leak(Box::new(encoder_map));
    Box::leak(Box::new(RefCell::new(KeyMap::new(
        keymap,
        Some(encoder_map),
    ))))
}

pub fn default_keymap() -> &'static RefCell<KeyMap<'static, MATRIX_ROWS, MATRIX_COLS, NUM_ENCODERS>>
{
    wrap_keymap(layout::keymap(), layout::encoder_map())
}

pub const SECTOR_SIZE: usize = 4096;

#[derive(Debug)]
pub struct TestFlashError(NorFlashErrorKind);

impl NorFlashError for TestFlashError {
    fn kind(&self) -> NorFlashErrorKind {
        self.0
    }
}

/// An in-memory NOR flash: erase sets a sector to 0xFF, writes can only
/// clear bits.
pub struct TestFlash {
    data: Vec<u8>,
}

impl TestFlash {
    pub fn new(sectors: usize) -> Self {
        Self {
            data: vec![0xFF; sectors * SECTOR_SIZE],
        }
    }
}

impl ErrorType for TestFlash {
    type Error = TestFlashError;
}

impl ReadNorFlash for TestFlash {
    const READ_SIZE: usize = 1;

    async fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let offset = offset as usize;
        if offset + bytes.len() > self.data.len() {
            return Err(TestFlashError(NorFlashErrorKind::OutOfBounds));
        }
        bytes.copy_from_slice(&self.data[offset..offset + bytes.len()]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl NorFlash for TestFlash {
    const WRITE_SIZE: usize = 4;
    const ERASE_SIZE: usize = SECTOR_SIZE;

    async fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        let (from, to) = (from as usize, to as usize);
        if from % SECTOR_SIZE != 0 || to % SECTOR_SIZE != 0 {
            return Err(TestFlashError(NorFlashErrorKind::NotAligned));
        }
        if to > self.data.len() || from > to {
            return Err(TestFlashError(NorFlashErrorKind::OutOfBounds));
        }
        self.data[from..to].fill(0xFF);
        Ok(())
    }

    async fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let offset = offset as usize;
        if offset % Self::WRITE_SIZE != 0 || bytes.len() % Self::WRITE_SIZE != 0 {
            return Err(TestFlashError(NorFlashErrorKind::NotAligned));
        }
        if offset + bytes.len() > self.data.len() {
            return Err(TestFlashError(NorFlashErrorKind::OutOfBounds));
        }
        for (slot, byte) in self.data[offset..offset + bytes.len()].iter_mut().zip(bytes) {
            *slot &= byte;
        }
        Ok(())
    }
}

pub async fn fresh_storage() -> Storage<TestFlash> {
    Storage::new(TestFlash::new(4), &StorageConfig::default()).await
}

/// Records everything the keyboard asks of the RGB controller
#[derive(Default)]
pub struct MockRgbMatrix {
    pub frames: Vec<Frame>,
    pub static_modes: Vec<(Hsv, u8)>,
}

impl MockRgbMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &Frame {
        self.frames.last().expect("no frame was flushed")
    }

    pub fn last_static_hue(&self) -> u8 {
        self.static_modes.last().expect("no static mode was set").0.hue
    }
}

impl RgbMatrix for MockRgbMatrix {
    type Error = std::convert::Infallible;

    async fn write_frame(&mut self, frame: &[RGB8; LED_COUNT]) -> Result<(), Self::Error> {
        self.frames.push(*frame);
        Ok(())
    }

    async fn set_static_mode(&mut self, hsv: Hsv, mode: u8) -> Result<(), Self::Error> {
        self.static_modes.push((hsv, mode));
        Ok(())
    }
}
