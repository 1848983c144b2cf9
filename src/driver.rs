use smart_leds::RGB8;
use smart_leds::hsv::Hsv;

use crate::led_map::LED_COUNT;

/// Mode id for a solid, non-animated background
pub const STATIC_MODE_SOLID: u8 = 1;

/// Hardware seam for the board's RGB matrix controller.
///
/// `write_frame` flushes one full per-LED frame, indexed by driver order
/// (see [`crate::led_map::LedIndex`]). `set_static_mode` programs the
/// controller's own background effect, used for the per-layer ambient
/// color underneath the indicator overlay.
pub trait RgbMatrix {
    type Error;

    async fn write_frame(&mut self, frame: &[RGB8; LED_COUNT]) -> Result<(), Self::Error>;

    async fn set_static_mode(&mut self, hsv: Hsv, mode: u8) -> Result<(), Self::Error>;
}

/// A no-op RGB driver for boards or tests without LED hardware
pub struct NoopRgbMatrix;

impl RgbMatrix for NoopRgbMatrix {
    type Error = core::convert::Infallible;

    async fn write_frame(&mut self, _frame: &[RGB8; LED_COUNT]) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn set_static_mode(&mut self, _hsv: Hsv, _mode: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}
