mod common;

use common::{MockRgbMatrix, fresh_storage};
use embassy_futures::block_on;
use glowmap::config::{LightConfig, StorageConfig};
use glowmap::keyboard::Keyboard;
use glowmap::layer::Layer;
use glowmap::storage::{ConfigWord, Storage};

#[test]
fn fresh_storage_holds_the_base_layer() {
    block_on(async {
        let mut storage = fresh_storage().await;
        let word = storage.read_config().await.expect("no config word");
        assert_eq!(word.layer(), Layer::Base as u8);
        assert_eq!(word.reserved(), 0);
    });
}

#[test]
fn config_word_round_trips_through_flash() {
    block_on(async {
        let mut storage = fresh_storage().await;
        let word = ConfigWord::new()
            .with_layer(Layer::Programming as u8)
            .with_reserved(0x00AB_CDEF);
        storage.write_config(word).await;

        // Rebuild the storage over the same flash, as a reboot would
        let flash = storage.into_inner();
        let mut storage = Storage::new(flash, &StorageConfig::default()).await;
        assert_eq!(storage.read_config().await, Some(word));
    });
}

#[test]
fn reserved_bits_survive_layer_changes() {
    block_on(async {
        let mut storage = fresh_storage().await;
        storage
            .write_config(ConfigWord::new().with_reserved(0x1555_5555))
            .await;

        let keymap = common::default_keymap();
        let mut keyboard = Keyboard::new(
            keymap,
            Some(storage),
            MockRgbMatrix::new(),
            LightConfig::default(),
        )
        .await;

        // Hold FN, toggle Gaming, release FN
        keyboard.process_key_event(common::key_event(5, 10, true)).await;
        keyboard.process_key_event(common::key_event(3, 14, true)).await;
        keyboard.process_key_event(common::key_event(3, 14, false)).await;
        keyboard.process_key_event(common::key_event(5, 10, false)).await;
        assert_eq!(keyboard.active_layer(), Layer::Gaming);

        let (storage, _) = keyboard.into_parts();
        let word = storage
            .expect("keyboard had storage")
            .read_config()
            .await
            .expect("no config word");
        assert_eq!(word.layer(), Layer::Gaming as u8);
        assert_eq!(word.reserved(), 0x1555_5555);
    });
}

#[test]
fn out_of_range_stored_layer_falls_back_to_base() {
    block_on(async {
        let mut storage = fresh_storage().await;
        storage.write_config(ConfigWord::new().with_layer(6)).await;

        let keymap = common::default_keymap();
        let keyboard = Keyboard::new(
            keymap,
            Some(storage),
            MockRgbMatrix::new(),
            LightConfig::default(),
        )
        .await;
        assert_eq!(keyboard.active_layer(), Layer::Base);
    });
}

#[test]
fn stored_layer_is_restored_at_boot() {
    block_on(async {
        let mut storage = fresh_storage().await;
        storage
            .write_config(ConfigWord::new().with_layer(Layer::Gaming as u8))
            .await;

        let keymap = common::default_keymap();
        let keyboard = Keyboard::new(
            keymap,
            Some(storage),
            MockRgbMatrix::new(),
            LightConfig::default(),
        )
        .await;
        assert_eq!(keyboard.active_layer(), Layer::Gaming);
        // The ambient background matches the restored layer
        assert_eq!(
            keyboard.rgb().last_static_hue(),
            Layer::Gaming.ambient().hue
        );
    });
}

#[test]
fn storage_is_optional() {
    block_on(async {
        use glowmap::storage::dummy_flash::DummyFlash;

        let keymap = common::default_keymap();
        let keyboard = Keyboard::<DummyFlash, _, 6, 15, 1>::new(
            keymap,
            None,
            MockRgbMatrix::new(),
            LightConfig::default(),
        )
        .await;
        assert_eq!(keyboard.active_layer(), Layer::Base);
    });
}
