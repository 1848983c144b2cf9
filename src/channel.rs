//! Static channels connecting the keymap core to the outside of the crate.
//!
//! The matrix scanner pushes [`KeyEvent`]s and [`RotaryEncoderEvent`]s in;
//! the HID transport drains [`KeyReport`]s out.

use embassy_sync::channel::Channel;

use crate::RawMutex;
use crate::event::{KeyEvent, KeyReport, RotaryEncoderEvent};

pub const EVENT_CHANNEL_SIZE: usize = 16;
pub const REPORT_CHANNEL_SIZE: usize = 16;

/// Key events from the matrix scanner
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyEvent, EVENT_CHANNEL_SIZE> = Channel::new();

/// Rotary encoder detents
pub static ENCODER_EVENT_CHANNEL: Channel<RawMutex, RotaryEncoderEvent, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Resolved keys for the HID transport
pub static KEY_REPORT_CHANNEL: Channel<RawMutex, KeyReport, REPORT_CHANNEL_SIZE> = Channel::new();
