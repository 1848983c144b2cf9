mod common;

use common::{MockRgbMatrix, key_event};
use embassy_futures::block_on;
use glowmap::channel::KEY_REPORT_CHANNEL;
use glowmap::config::LightConfig;
use glowmap::keyboard::Keyboard;
use glowmap::layer::Layer;
use glowmap::led_map::LedIndex;
use glowmap::light::colors;
use glowmap::storage::ConfigWord;
use smart_leds::RGB8;

#[test]
fn previews_are_dark_when_booting_into_function() {
    block_on(async {
        let mut storage = common::fresh_storage().await;
        storage
            .write_config(ConfigWord::new().with_layer(Layer::Function as u8))
            .await;

        let keymap = common::default_keymap();
        let mut keyboard = Keyboard::new(
            keymap,
            Some(storage),
            MockRgbMatrix::new(),
            LightConfig::default(),
        )
        .await;
        assert_eq!(keyboard.active_layer(), Layer::Function);

        keyboard.render_frame().await;
        let frame = keyboard.rgb().last_frame();
        // No nudges yet, so the previews show nothing
        assert_eq!(frame[LedIndex::F10.index()], colors::OFF);
        assert_eq!(frame[LedIndex::F11.index()], colors::OFF);
        assert_eq!(frame[LedIndex::F12.index()], colors::OFF);
        assert_eq!(frame[LedIndex::Home.index()], colors::PURPLE);
    });
}

#[test]
fn nudge_triggers_are_consumed_and_previewed() {
    let _guard = common::CHANNEL_LOCK.lock().unwrap();
    block_on(async {
        KEY_REPORT_CHANNEL.clear();

        let keymap = common::default_keymap();
        let mut keyboard = Keyboard::new(
            keymap,
            Some(common::fresh_storage().await),
            MockRgbMatrix::new(),
            LightConfig::default(),
        )
        .await;

        // Hold FN, tap F10 three times
        keyboard.process_key_event(key_event(5, 10, true)).await;
        for _ in 0..3 {
            keyboard.process_key_event(key_event(0, 10, true)).await;
        }
        // Trigger presses never reach the report channel
        assert!(KEY_REPORT_CHANNEL.try_receive().is_err());

        keyboard.render_frame().await;
        let frame = keyboard.rgb().last_frame();
        assert_eq!(frame[LedIndex::F10.index()], RGB8::new(15, 0, 0));
        assert_eq!(frame[LedIndex::F11.index()], colors::OFF);
        assert_eq!(frame[LedIndex::F12.index()], colors::OFF);

        // Every other LED carries the nudged base color
        assert_eq!(frame[LedIndex::Space.index()], RGB8::new(15, 0, 0));
    });
}

#[test]
fn a_consumed_trigger_tap_emits_no_reports_at_all() {
    let _guard = common::CHANNEL_LOCK.lock().unwrap();
    block_on(async {
        KEY_REPORT_CHANNEL.clear();

        let keymap = common::default_keymap();
        let mut keyboard = Keyboard::new(
            keymap,
            Some(common::fresh_storage().await),
            MockRgbMatrix::new(),
            LightConfig::default(),
        )
        .await;

        // Hold FN and tap F10: neither the press nor the release leaks out
        keyboard.process_key_event(key_event(5, 10, true)).await;
        keyboard.process_key_event(key_event(0, 10, true)).await;
        keyboard.process_key_event(key_event(0, 10, false)).await;
        assert!(KEY_REPORT_CHANNEL.try_receive().is_err());

        // The release is swallowed even when FN went up while the
        // trigger was still down
        keyboard.process_key_event(key_event(0, 10, true)).await;
        keyboard.process_key_event(key_event(5, 10, false)).await;
        keyboard.process_key_event(key_event(0, 10, false)).await;
        assert!(KEY_REPORT_CHANNEL.try_receive().is_err());

        // Back on Base a full F10 tap is a plain key again
        keyboard.process_key_event(key_event(0, 10, true)).await;
        keyboard.process_key_event(key_event(0, 10, false)).await;
        let down = KEY_REPORT_CHANNEL.try_receive().expect("missing down");
        let up = KEY_REPORT_CHANNEL.try_receive().expect("missing up");
        assert_eq!(down.key, glowmap::keycode::KeyCode::F10);
        assert!(down.pressed);
        assert!(!up.pressed);
    });
}

#[test]
fn f10_outside_function_layer_is_a_plain_key() {
    let _guard = common::CHANNEL_LOCK.lock().unwrap();
    block_on(async {
        KEY_REPORT_CHANNEL.clear();

        let keymap = common::default_keymap();
        let mut keyboard = Keyboard::new(
            keymap,
            Some(common::fresh_storage().await),
            MockRgbMatrix::new(),
            LightConfig::default(),
        )
        .await;

        keyboard.process_key_event(key_event(0, 10, true)).await;
        let report = KEY_REPORT_CHANNEL.try_receive().expect("report missing");
        assert_eq!(report.key, glowmap::keycode::KeyCode::F10);
        assert!(report.pressed);
        // The color stays untouched
        keyboard.render_frame().await;
        assert_eq!(
            keyboard.rgb().last_frame()[LedIndex::Tab.index()],
            colors::OFF
        );
    });
}

#[test]
fn caps_lock_lights_the_del_led_on_any_layer() {
    block_on(async {
        use glowmap::event::LedIndicator;

        let keymap = common::default_keymap();
        let mut keyboard = Keyboard::new(
            keymap,
            Some(common::fresh_storage().await),
            MockRgbMatrix::new(),
            LightConfig::default(),
        )
        .await;

        keyboard.set_led_indicator(LedIndicator::CAPS_LOCK);
        keyboard.render_frame().await;
        assert_eq!(
            keyboard.rgb().last_frame()[LedIndex::Del.index()],
            colors::RED
        );

        keyboard.set_led_indicator(LedIndicator::new());
        keyboard.render_frame().await;
        assert_eq!(
            keyboard.rgb().last_frame()[LedIndex::Del.index()],
            colors::OFF
        );
    });
}

#[test]
fn wrapped_nudge_output_shows_on_the_indicator() {
    block_on(async {
        let keymap = common::default_keymap();
        let mut keyboard = Keyboard::new(
            keymap,
            Some(common::fresh_storage().await),
            MockRgbMatrix::new(),
            LightConfig {
                nudge_step: 200,
                ..LightConfig::default()
            },
        )
        .await;

        keyboard.process_key_event(key_event(5, 10, true)).await;
        // Two big nudges clamp at full brightness instead of wrapping
        keyboard.process_key_event(key_event(0, 11, true)).await;
        keyboard.process_key_event(key_event(0, 11, true)).await;

        keyboard.render_frame().await;
        let frame = keyboard.rgb().last_frame();
        assert_eq!(frame[LedIndex::F11.index()], RGB8::new(0, 255, 0));
    });
}
