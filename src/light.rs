//! The indicator overlay rendered on top of the RGB matrix.

use smart_leds::RGB8;

use crate::keycode::KeyCode;
use crate::layer::Layer;
use crate::led_map::{LED_COUNT, LedIndex};

/// One full color frame in driver LED order
pub type Frame = [RGB8; LED_COUNT];

pub mod colors {
    use smart_leds::RGB8;

    pub const OFF: RGB8 = RGB8::new(0x00, 0x00, 0x00);
    pub const PURPLE: RGB8 = RGB8::new(0x7A, 0x00, 0xFF);
    pub const RED: RGB8 = RGB8::new(0xFF, 0x00, 0x00);
}

/// The color channel adjusted by a nudge trigger
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl RgbChannel {
    /// The trigger key to channel mapping: F10, F11 and F12 on the
    /// Function layer raise red, green and blue.
    pub const fn from_trigger(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::F10 => Some(RgbChannel::Red),
            KeyCode::F11 => Some(RgbChannel::Green),
            KeyCode::F12 => Some(RgbChannel::Blue),
            _ => None,
        }
    }
}

/// The user-adjusted base color plus the fixed accent and alert colors.
///
/// The channels start at zero on every boot and are not persisted.
pub struct IndicatorColor {
    red: u8,
    green: u8,
    blue: u8,
    accent: RGB8,
    alert: RGB8,
}

impl IndicatorColor {
    pub fn new(accent: RGB8, alert: RGB8) -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            accent,
            alert,
        }
    }

    /// Raise one channel, clamping at full brightness
    pub fn nudge(&mut self, channel: RgbChannel, amount: u8) {
        let slot = match channel {
            RgbChannel::Red => &mut self.red,
            RgbChannel::Green => &mut self.green,
            RgbChannel::Blue => &mut self.blue,
        };
        *slot = slot.saturating_add(amount);
        debug!(
            "Indicator color now ({}, {}, {})",
            self.red, self.green, self.blue
        );
    }

    pub fn channel(&self, channel: RgbChannel) -> u8 {
        match channel {
            RgbChannel::Red => self.red,
            RgbChannel::Green => self.green,
            RgbChannel::Blue => self.blue,
        }
    }

    /// Project the state onto a frame. Pure and idempotent; later writes
    /// win within one call.
    pub fn render(&self, frame: &mut Frame, layer: Layer, caps_lock: bool) {
        frame.fill(RGB8::new(self.red, self.green, self.blue));

        if layer == Layer::Function {
            // Per-channel previews on the keys that nudge them
            frame[LedIndex::F10.index()] = RGB8::new(self.red, 0, 0);
            frame[LedIndex::F11.index()] = RGB8::new(0, self.green, 0);
            frame[LedIndex::F12.index()] = RGB8::new(0, 0, self.blue);
        }
        frame[layer.indicator_led().index()] = self.accent;

        // The caps-lock warning outranks everything on its LED
        frame[LedIndex::Del.index()] = if caps_lock { self.alert } else { colors::OFF };
    }
}
