use embassy_time::Duration;
use smart_leds::RGB8;

use crate::light::colors;

/// Configuration of the flash region used for persisted state
#[derive(Clone, Copy, Debug)]
pub struct StorageConfig {
    /// Start address of the storage region. 0 means "the last
    /// `num_sectors` sectors of the flash".
    pub start_addr: usize,
    /// Number of sectors, at least 2
    pub num_sectors: u8,
    /// Erase the region and start fresh on boot
    pub clear_storage: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            start_addr: 0,
            num_sectors: 2,
            clear_storage: false,
        }
    }
}

/// Configuration of the indicator rendering
#[derive(Clone, Copy, Debug)]
pub struct LightConfig {
    /// Amount added to a color channel per nudge trigger press
    pub nudge_step: u8,
    /// Color of layer indicator LEDs
    pub accent: RGB8,
    /// Color of the caps-lock warning LED
    pub alert: RGB8,
    /// Interval between indicator frame flushes
    pub frame_interval: Duration,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            nudge_step: 5,
            accent: colors::PURPLE,
            alert: colors::RED,
            frame_interval: Duration::from_millis(16),
        }
    }
}
