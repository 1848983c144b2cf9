use core::cell::RefCell;

use embassy_futures::select::{Either3, select3};
use embassy_time::{Duration, Ticker};
use embedded_storage_async::nor_flash::NorFlash as AsyncNorFlash;

use crate::action::{Action, KeyAction};
use crate::channel::{ENCODER_EVENT_CHANNEL, KEY_EVENT_CHANNEL, KEY_REPORT_CHANNEL};
use crate::config::LightConfig;
use crate::driver::{RgbMatrix, STATIC_MODE_SOLID};
use crate::event::{KeyEvent, KeyReport, LedIndicator};
use crate::keycode::{KeyCode, ModifierCombination};
use crate::keymap::KeyMap;
use crate::layer::Layer;
use crate::led_map::LED_COUNT;
use crate::light::{Frame, IndicatorColor, RgbChannel, colors};
use crate::storage::{ConfigWord, Storage};

/// The board state: keymap, persisted config word, indicator color and
/// the seams to flash and the RGB controller.
///
/// All state lives in this one struct and is touched from a single
/// execution context, so there are no locks around it.
pub struct Keyboard<
    'a,
    F: AsyncNorFlash,
    D: RgbMatrix,
    const ROW: usize,
    const COL: usize,
    const NUM_ENCODER: usize = 0,
> {
    keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_ENCODER>>,
    storage: Option<Storage<F>>,
    rgb: D,
    light: IndicatorColor,
    nudge_step: u8,
    frame_interval: Duration,
    frame: Frame,
    /// The currently resolved layer, also mirrored in `config`
    active: Layer,
    /// In-memory copy of the persisted word. Updates only touch the layer
    /// bits so that reserved bits written by other firmware survive.
    config: ConfigWord,
    led_state: LedIndicator,
    /// Triggers whose press was consumed as a nudge, per channel. Their
    /// release is swallowed as well, even when the layer changed in
    /// between, so a tap emits no report at all.
    consumed_triggers: [bool; 3],
}

impl<'a, F, D, const ROW: usize, const COL: usize, const NUM_ENCODER: usize>
    Keyboard<'a, F, D, ROW, COL, NUM_ENCODER>
where
    F: AsyncNorFlash,
    D: RgbMatrix,
{
    /// Restore the persisted layer and bring up the RGB background.
    ///
    /// A missing or unreadable record and a stored layer outside the
    /// valid range both fall back to `Base`.
    pub async fn new(
        keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_ENCODER>>,
        mut storage: Option<Storage<F>>,
        rgb: D,
        light_config: LightConfig,
    ) -> Self {
        let config = match &mut storage {
            Some(storage) => storage.read_config().await.unwrap_or(ConfigWord::new()),
            None => ConfigWord::new(),
        };
        let layer = match Layer::try_from(config.layer()) {
            Ok(layer) => layer,
            Err(_) => {
                warn!("Stored layer {} is out of range, using Base", config.layer());
                Layer::Base
            }
        };
        keymap.borrow_mut().set_default_layer(layer);

        let mut keyboard = Self {
            keymap,
            storage,
            rgb,
            light: IndicatorColor::new(light_config.accent, light_config.alert),
            nudge_step: light_config.nudge_step,
            frame_interval: light_config.frame_interval,
            frame: [colors::OFF; LED_COUNT],
            active: layer,
            config: config.with_layer(layer as u8),
            led_state: LedIndicator::new(),
            consumed_triggers: [false; 3],
        };
        if keyboard
            .rgb
            .set_static_mode(layer.ambient(), STATIC_MODE_SOLID)
            .await
            .is_err()
        {
            warn!("Applying the ambient background failed");
        }
        info!("Booted on layer {:?}", layer);
        keyboard
    }

    /// Drive the keyboard forever: key and encoder events as they come,
    /// an indicator frame on every tick.
    pub async fn run(&mut self) -> ! {
        let mut ticker = Ticker::every(self.frame_interval);
        loop {
            match select3(
                KEY_EVENT_CHANNEL.receive(),
                ENCODER_EVENT_CHANNEL.receive(),
                ticker.next(),
            )
            .await
            {
                Either3::First(event) => self.process_key_event(event).await,
                Either3::Second(event) => {
                    let action = self
                        .keymap
                        .borrow()
                        .get_encoder_action(event.id as usize, event.clockwise);
                    self.process_action(action, true).await;
                    self.process_action(action, false).await;
                }
                Either3::Third(_) => self.render_frame().await,
            }
        }
    }

    /// Resolve one key event through the keymap and execute its action
    pub async fn process_key_event(&mut self, event: KeyEvent) {
        let action = self.keymap.borrow_mut().get_action(event);
        self.process_action(action, event.pressed).await;
    }

    /// Update the cached host lock state used by the indicator overlay
    pub fn set_led_indicator(&mut self, state: LedIndicator) {
        self.led_state = state;
    }

    pub fn active_layer(&self) -> Layer {
        self.active
    }

    pub fn indicator(&self) -> &IndicatorColor {
        &self.light
    }

    pub fn rgb(&self) -> &D {
        &self.rgb
    }

    /// Tear the keyboard apart, handing back the storage and the RGB
    /// driver
    pub fn into_parts(self) -> (Option<Storage<F>>, D) {
        (self.storage, self.rgb)
    }

    async fn process_action(&mut self, action: KeyAction, pressed: bool) {
        match action {
            KeyAction::No | KeyAction::Transparent => {}
            KeyAction::Single(action) => match action {
                Action::Key(key) => {
                    if let Some(channel) = RgbChannel::from_trigger(key) {
                        if pressed && self.active == Layer::Function {
                            self.light.nudge(channel, self.nudge_step);
                            self.consumed_triggers[channel as usize] = true;
                            debug!("Consumed color nudge trigger {:?}", key);
                            return;
                        }
                        if !pressed && self.consumed_triggers[channel as usize] {
                            self.consumed_triggers[channel as usize] = false;
                            return;
                        }
                    }
                    self.forward(key, ModifierCombination::new(), pressed).await;
                }
                Action::KeyWithModifier(key, modifier) => {
                    self.forward(key, modifier, pressed).await;
                }
                Action::LayerOn(layer) => {
                    {
                        let mut keymap = self.keymap.borrow_mut();
                        if pressed {
                            keymap.hold_layer(layer);
                        } else {
                            keymap.release_layer(layer);
                        }
                    }
                    self.sync_active_layer().await;
                }
                Action::LayerToggleOnly(layer) => {
                    if pressed {
                        self.keymap.borrow_mut().toggle_only(layer);
                        self.sync_active_layer().await;
                    }
                }
                Action::DefaultLayer(layer) => {
                    if pressed {
                        self.keymap.borrow_mut().set_default_layer(layer);
                        self.sync_active_layer().await;
                    }
                }
            },
        }
    }

    async fn forward(&mut self, key: KeyCode, modifier: ModifierCombination, pressed: bool) {
        KEY_REPORT_CHANNEL
            .send(KeyReport {
                key,
                modifier,
                pressed,
            })
            .await;
    }

    /// Reconcile the resolved layer with the cached one. On a change the
    /// new layer is persisted before this returns, then the ambient
    /// background is re-applied.
    async fn sync_active_layer(&mut self) {
        let resolved = self.keymap.borrow().resolved_layer();
        if resolved == self.active {
            return;
        }
        info!("Active layer {:?} -> {:?}", self.active, resolved);
        self.active = resolved;
        self.config = self.config.with_layer(resolved as u8);
        if let Some(storage) = &mut self.storage {
            storage.write_config(self.config).await;
        }
        if self
            .rgb
            .set_static_mode(resolved.ambient(), STATIC_MODE_SOLID)
            .await
            .is_err()
        {
            warn!("Applying the ambient background failed");
        }
    }

    /// Render and flush one indicator frame
    pub async fn render_frame(&mut self) {
        self.light
            .render(&mut self.frame, self.active, self.led_state.caps_lock());
        if self.rgb.write_frame(&self.frame).await.is_err() {
            warn!("Flushing the indicator frame failed");
        }
    }
}
