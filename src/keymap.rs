use heapless::Vec;

use crate::action::{EncoderAction, KeyAction};
use crate::event::KeyEvent;
use crate::layer::{LAYER_COUNT, Layer};

/// Maximum number of simultaneously held momentary layer keys
const HOLD_STACK_SIZE: usize = 8;

/// The keymap: static layer tables plus the mutable layer state.
///
/// Layer state is three things. Momentary holds form a stack, so of two
/// overlapping holds the more recent one wins and releasing it falls back
/// to the older one. Toggles are a set, highest member wins. Below both
/// sits the default layer. [`KeyMap::resolved_layer`] collapses the three
/// into the single active layer.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_ENCODER: usize = 0> {
    /// Action tables, layer-major
    layers: &'a mut [[[KeyAction; COL]; ROW]; LAYER_COUNT],
    /// Encoder bindings per layer
    encoders: Option<&'a mut [[EncoderAction; NUM_ENCODER]; LAYER_COUNT]>,
    /// Momentary holds, oldest first
    held: Vec<Layer, HOLD_STACK_SIZE>,
    /// Toggled layers
    toggled: [bool; LAYER_COUNT],
    default_layer: Layer,
    /// Layer each pressed position was resolved on, so the release is
    /// looked up in the same table even if the layer changed in between
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_ENCODER: usize>
    KeyMap<'a, ROW, COL, NUM_ENCODER>
{
    pub fn new(
        layers: &'a mut [[[KeyAction; COL]; ROW]; LAYER_COUNT],
        encoders: Option<&'a mut [[EncoderAction; NUM_ENCODER]; LAYER_COUNT]>,
    ) -> Self {
        Self {
            layers,
            encoders,
            held: Vec::new(),
            toggled: [false; LAYER_COUNT],
            default_layer: Layer::Base,
            layer_cache: [[0; COL]; ROW],
        }
    }

    /// The single active layer the current state collapses to
    pub fn resolved_layer(&self) -> Layer {
        if let Some(layer) = self.held.last() {
            return *layer;
        }
        for layer in Layer::ALL.iter().rev() {
            if self.toggled[*layer as usize] {
                return *layer;
            }
        }
        self.default_layer
    }

    /// Push a momentary hold. Re-holding an already held layer moves it to
    /// the top of the stack.
    pub fn hold_layer(&mut self, layer: Layer) {
        if let Some(pos) = self.held.iter().position(|l| *l == layer) {
            self.held.remove(pos);
        }
        if self.held.push(layer).is_err() {
            warn!("Momentary hold stack full, dropping hold");
        }
    }

    /// Release a momentary hold
    pub fn release_layer(&mut self, layer: Layer) {
        if let Some(pos) = self.held.iter().position(|l| *l == layer) {
            self.held.remove(pos);
        }
    }

    /// Toggle the given layer on and every other toggle off
    pub fn toggle_only(&mut self, layer: Layer) {
        self.toggled = [false; LAYER_COUNT];
        self.toggled[layer as usize] = true;
    }

    pub fn set_default_layer(&mut self, layer: Layer) {
        self.default_layer = layer;
    }

    pub fn default_layer(&self) -> Layer {
        self.default_layer
    }

    /// Look up the action for a key event.
    ///
    /// A press resolves from the active layer downwards, skipping
    /// `Transparent` slots of inactive or pass-through layers, and caches
    /// the layer it landed on. The matching release is served from the
    /// cache, so a key never gets stuck when the layer changes while it
    /// is down.
    pub fn get_action(&mut self, event: KeyEvent) -> KeyAction {
        let (row, col) = (event.row as usize, event.col as usize);
        if row >= ROW || col >= COL {
            warn!("Key event out of range: row {} col {}", event.row, event.col);
            return KeyAction::No;
        }

        if !event.pressed {
            let layer = self.layer_cache[row][col] as usize;
            return self.layers[layer][row][col];
        }

        let resolved = self.resolved_layer();
        let mut falling = false;
        for layer in Layer::ALL.iter().rev() {
            if *layer == resolved {
                falling = true;
            }
            if !falling || !self.layer_active(*layer) {
                continue;
            }
            match self.layers[*layer as usize][row][col] {
                KeyAction::Transparent => continue,
                action => {
                    self.layer_cache[row][col] = *layer as u8;
                    return action;
                }
            }
        }
        KeyAction::No
    }

    /// Look up the action for one encoder detent with the same
    /// transparent fallthrough as key lookups
    pub fn get_encoder_action(&self, id: usize, clockwise: bool) -> KeyAction {
        let Some(encoders) = &self.encoders else {
            return KeyAction::No;
        };
        if id >= NUM_ENCODER {
            warn!("Encoder event out of range: id {}", id);
            return KeyAction::No;
        }

        let resolved = self.resolved_layer();
        let mut falling = false;
        for layer in Layer::ALL.iter().rev() {
            if *layer == resolved {
                falling = true;
            }
            if !falling || !self.layer_active(*layer) {
                continue;
            }
            match encoders[*layer as usize][id].action(clockwise) {
                KeyAction::Transparent => continue,
                action => return action,
            }
        }
        KeyAction::No
    }

    /// Base is always active: it is the root table every transparent
    /// slot ultimately falls through to.
    fn layer_active(&self, layer: Layer) -> bool {
        layer == Layer::Base
            || layer == self.default_layer
            || self.toggled[layer as usize]
            || self.held.contains(&layer)
    }
}
