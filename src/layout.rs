//! The GMMK Pro ANSI keymap: four layers on a 6x15 logical grid.
//!
//! Grid slots without a physical key (the gaps next to Enter, RShift and
//! around the space bar) are `a!(No)` on every layer.

use crate::action::{EncoderAction, KeyAction};
use crate::keycode::{RALT, RCS, RSHIFT};
use crate::keymap::KeyMap;
use crate::layer::LAYER_COUNT;
use crate::{a, encoder, k, layer, mo, to, wm};

pub const MATRIX_ROWS: usize = 6;
pub const MATRIX_COLS: usize = 15;
pub const NUM_ENCODERS: usize = 1;

pub type GmmkKeyMap<'a> = KeyMap<'a, MATRIX_ROWS, MATRIX_COLS, NUM_ENCODERS>;

/// The four layer tables.
///
/// Base is a standard ANSI 75% layout with FN as a momentary hold to the
/// Function layer. Gaming swaps Grave and Escape and binds the voice-chat
/// chords on the side keys. Programming moves CapsLock and Escape and
/// pins the navigation column. Function hosts the color nudge triggers
/// (F10/F11/F12) and the layer toggles on the navigation column.
#[rustfmt::skip]
pub const fn keymap() -> [[[KeyAction; MATRIX_COLS]; MATRIX_ROWS]; LAYER_COUNT] {
    [
        // Base
        layer!([
            [k!(Escape), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), k!(Delete), k!(F14)],
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace), k!(Home)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Backslash), k!(PageUp)],
            [k!(CapsLock), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), a!(No), k!(Enter), k!(PageDown)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), a!(No), k!(RShift), k!(Up), k!(End)],
            [k!(LCtrl), k!(LGui), k!(LAlt), a!(No), a!(No), a!(No), k!(Space), a!(No), a!(No), k!(RAlt), mo!(Function), k!(RCtrl), k!(Left), k!(Down), k!(Right)]
        ]),
        // Gaming: Grave and Escape swapped, voice chat mute/deafen chords on the side keys
        layer!([
            [k!(Grave), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [k!(Escape), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), wm!(RightBracket, RCS)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), wm!(LeftBracket, RCS)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(Transparent), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        // Programming: CapsLock on the corner, Escape on home row, pinned navigation column
        layer!([
            [k!(CapsLock), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [k!(Grave), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Home)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(PageUp)],
            [k!(Escape), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), k!(PageDown)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), a!(Transparent), k!(End)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(Transparent), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        // Function: color nudge triggers and layer toggles; everything else is dead
        layer!([
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(F10), k!(F11), k!(F12), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), to!(Programming)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), to!(Gaming)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), to!(Base), to!(Base)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), to!(Gaming), a!(No)]
        ]),
    ]
}

/// Rotary encoder bindings: push-to-talk friendly volume chords on Base,
/// transparent everywhere else
pub const fn encoder_map() -> [[EncoderAction; NUM_ENCODERS]; LAYER_COUNT] {
    [
        [encoder!(wm!(F14, RSHIFT), wm!(F14, RALT))],
        [encoder!(a!(Transparent), a!(Transparent))],
        [encoder!(a!(Transparent), a!(Transparent))],
        [encoder!(a!(Transparent), a!(Transparent))],
    ]
}
