#![cfg_attr(not(test), no_std)]
//! Keymap firmware core for the GMMK Pro.
//!
//! This crate owns the layer state model of the board: the static layer
//! tables, the resolution of momentary holds and toggles into one active
//! layer, persistence of that layer across power cycles, and the RGB
//! indicator frame derived from it. Matrix scanning, HID transport and the
//! LED hardware live outside, behind channels and traits.

// Include generated logging macros first so that all following modules can use them
#[macro_use]
mod macros;

pub mod action;
pub mod channel;
pub mod config;
pub mod driver;
pub mod event;
pub mod keyboard;
pub mod keycode;
pub mod keymap;
pub mod layer;
pub mod layout;
pub mod layout_macro;
pub mod led_map;
pub mod light;
pub mod storage;

/// The mutex guarding shared channels. Events may be pushed from interrupt
/// context, so a critical-section based mutex is used.
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
