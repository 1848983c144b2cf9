use num_enum::TryFromPrimitive;
use smart_leds::hsv::Hsv;

use crate::led_map::LedIndex;

/// Number of layers in the keymap
pub const LAYER_COUNT: usize = 4;

/// The board's layers. The discriminant is the value stored in the
/// persisted config word, so `TryFrom<u8>` rejects anything a newer (or
/// corrupted) firmware might have written there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Layer {
    Base = 0,
    Gaming = 1,
    Programming = 2,
    Function = 3,
}

impl Layer {
    /// All layers, lowest first. Resolution walks this in reverse.
    pub const ALL: [Layer; LAYER_COUNT] = [Layer::Base, Layer::Gaming, Layer::Programming, Layer::Function];

    /// The single LED lit as the indicator for this layer
    pub const fn indicator_led(self) -> LedIndex {
        match self {
            Layer::Base => LedIndex::End,
            Layer::Gaming => LedIndex::PgDn,
            Layer::Programming => LedIndex::PgUp,
            Layer::Function => LedIndex::Home,
        }
    }

    /// Ambient HSV handed to the RGB driver's static mode when this layer
    /// becomes active
    pub const fn ambient(self) -> Hsv {
        match self {
            // Warm cream white
            Layer::Base => Hsv { hue: 36, sat: 80, val: 120 },
            Layer::Gaming => Hsv { hue: 0, sat: 255, val: 120 },
            Layer::Programming => Hsv { hue: 150, sat: 255, val: 120 },
            Layer::Function => Hsv { hue: 200, sat: 255, val: 120 },
        }
    }
}
