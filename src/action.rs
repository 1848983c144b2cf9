use crate::keycode::{KeyCode, ModifierCombination};
use crate::layer::Layer;

/// A basic keyboard action, the payload of [`KeyAction::Single`].
///
/// Layer actions carry a [`Layer`] value rather than a raw index, so an
/// action referring to a nonexistent layer cannot be constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Send a key code
    Key(KeyCode),
    /// Send a key code together with a modifier chord
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held
    LayerOn(Layer),
    /// Activate the given layer and deactivate every other toggled layer
    LayerToggleOnly(Layer),
    /// Change the default layer
    DefaultLayer(Layer),
}

/// One slot of a layer table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Ignore the key
    No,
    /// Fall through to the next active layer below
    Transparent,
    /// Execute the action
    Single(Action),
}

/// Actions bound to one rotary encoder, one per turn direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyAction,
    counter_clockwise: KeyAction,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self::new(KeyAction::No, KeyAction::No)
    }
}

impl EncoderAction {
    pub const fn new(clockwise: KeyAction, counter_clockwise: KeyAction) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    pub const fn action(&self, clockwise: bool) -> KeyAction {
        if clockwise { self.clockwise } else { self.counter_clockwise }
    }
}
