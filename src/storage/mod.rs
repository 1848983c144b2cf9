//! Persistence of the board state in a flash region.
//!
//! The persisted state is a single [`ConfigWord`] kept in a
//! `sequential-storage` map. Each stored item carries its [`StorageKeys`]
//! discriminant as a type byte, so further record kinds can be added
//! without a layout change.

pub mod dummy_flash;

use bitfield_struct::bitfield;
use byteorder::{BigEndian, ByteOrder};
use embedded_storage_async::nor_flash::NorFlash as AsyncNorFlash;
use sequential_storage::Error as SSError;
use sequential_storage::cache::NoCache;
use sequential_storage::map::{MapConfig, MapStorage, SerializationError, Value};

use crate::config::StorageConfig;

/// The persisted config word.
///
/// Bits 0..3 hold the active layer; the remaining 29 bits are reserved and
/// must survive a read/modify/write cycle untouched, so a firmware that
/// uses them can downgrade and upgrade without losing state.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct ConfigWord {
    #[bits(3)]
    pub layer: u8,
    #[bits(29)]
    pub reserved: u32,
}

/// Map key of stored items, repeated as a type byte prefix inside the
/// value. The whole storage item is an enum because of the
/// single-value-type limitation of `sequential_storage`; the first byte
/// of the stored data tells the decoder which variant follows.
#[repr(u8)]
pub(crate) enum StorageKeys {
    StorageConfig = 0,
    LayoutConfig = 1,
}

impl StorageKeys {
    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKeys::StorageConfig),
            1 => Some(StorageKeys::LayoutConfig),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum StorageData {
    StorageConfig(LocalStorageConfig),
    LayoutConfig(ConfigWord),
}

/// Marker record telling whether the region has been initialized
#[derive(Clone, Copy, Debug)]
pub(crate) struct LocalStorageConfig {
    enable: bool,
}

impl Value<'_> for StorageData {
    fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        if buffer.len() < 5 {
            return Err(SerializationError::BufferTooSmall);
        }
        match self {
            StorageData::StorageConfig(c) => {
                buffer[0] = StorageKeys::StorageConfig as u8;
                // 1 is the erased state of the flash, so enabled is stored as 0
                buffer[1] = if c.enable { 0 } else { 1 };
                Ok(2)
            }
            StorageData::LayoutConfig(word) => {
                buffer[0] = StorageKeys::LayoutConfig as u8;
                BigEndian::write_u32(&mut buffer[1..5], word.into_bits());
                Ok(5)
            }
        }
    }

    fn deserialize_from(buffer: &[u8]) -> Result<(Self, usize), SerializationError>
    where
        Self: Sized,
    {
        if buffer.is_empty() {
            return Err(SerializationError::InvalidFormat);
        }
        match StorageKeys::from_u8(buffer[0]) {
            Some(StorageKeys::StorageConfig) => {
                if buffer.len() < 2 {
                    return Err(SerializationError::BufferTooSmall);
                }
                Ok((
                    StorageData::StorageConfig(LocalStorageConfig {
                        enable: buffer[1] == 0,
                    }),
                    2,
                ))
            }
            Some(StorageKeys::LayoutConfig) => {
                if buffer.len() < 5 {
                    return Err(SerializationError::BufferTooSmall);
                }
                Ok((
                    StorageData::LayoutConfig(ConfigWord::from_bits(BigEndian::read_u32(
                        &buffer[1..5],
                    ))),
                    5,
                ))
            }
            None => Err(SerializationError::InvalidFormat),
        }
    }
}

const BUFFER_SIZE: usize = 32;

/// The storage map over a flash region.
pub struct Storage<F: AsyncNorFlash> {
    map: MapStorage<u8, F, NoCache>,
    buffer: [u8; BUFFER_SIZE],
}

impl<F: AsyncNorFlash> Storage<F> {
    pub async fn new(flash: F, config: &StorageConfig) -> Self {
        assert!(
            config.num_sectors >= 2,
            "Number of used sectors for storage must be larger than 1"
        );

        info!(
            "Flash capacity {} KB, using {} KB ({} sectors) starting from 0x{:X} as storage",
            flash.capacity() / 1024,
            (F::ERASE_SIZE * config.num_sectors as usize) / 1024,
            config.num_sectors,
            config.start_addr,
        );

        // start_addr == 0 means the last `num_sectors` sectors of the flash
        let storage_range = if config.start_addr == 0 {
            (flash.capacity() - config.num_sectors as usize * F::ERASE_SIZE) as u32
                ..flash.capacity() as u32
        } else {
            assert!(
                config.start_addr % F::ERASE_SIZE == 0,
                "Storage's start addr MUST BE a multiplier of sector size"
            );
            config.start_addr as u32
                ..(config.start_addr + config.num_sectors as usize * F::ERASE_SIZE) as u32
        };

        let map_config = match MapConfig::try_new(storage_range) {
            Some(map_config) => map_config,
            None => panic!("Storage range is not usable as a map region"),
        };
        let mut storage = Self {
            map: MapStorage::new(flash, map_config, NoCache::new()),
            buffer: [0; BUFFER_SIZE],
        };

        if !storage.check_enable().await || config.clear_storage {
            debug!("Clearing storage");
            let _ = storage.map.erase_all().await;
            storage.initialize().await;
        }

        storage
    }

    /// Read the persisted config word. `None` means the record is missing
    /// or unreadable; the caller decides the fallback.
    pub async fn read_config(&mut self) -> Option<ConfigWord> {
        match self
            .map
            .fetch_item::<StorageData>(&mut self.buffer, &(StorageKeys::LayoutConfig as u8))
            .await
        {
            Ok(Some(StorageData::LayoutConfig(word))) => Some(word),
            Ok(_) => None,
            Err(e) => {
                print_storage_error::<F>(e);
                None
            }
        }
    }

    /// Write the config word. The write has completed (or failed and been
    /// logged) when this returns.
    pub async fn write_config(&mut self, word: ConfigWord) {
        if let Err(e) = self
            .map
            .store_item(
                &mut self.buffer,
                &(StorageKeys::LayoutConfig as u8),
                &StorageData::LayoutConfig(word),
            )
            .await
        {
            print_storage_error::<F>(e);
        }
    }

    async fn initialize(&mut self) {
        for (key, data) in [
            (
                StorageKeys::StorageConfig as u8,
                StorageData::StorageConfig(LocalStorageConfig { enable: true }),
            ),
            (
                StorageKeys::LayoutConfig as u8,
                StorageData::LayoutConfig(ConfigWord::new()),
            ),
        ] {
            if let Err(e) = self.map.store_item(&mut self.buffer, &key, &data).await {
                print_storage_error::<F>(e);
            }
        }
    }

    /// Hand the flash back, e.g. to rebuild the storage after a
    /// simulated power cycle
    pub fn into_inner(self) -> F {
        self.map.destroy().0
    }

    async fn check_enable(&mut self) -> bool {
        if let Ok(Some(StorageData::StorageConfig(config))) = self
            .map
            .fetch_item::<StorageData>(&mut self.buffer, &(StorageKeys::StorageConfig as u8))
            .await
        {
            return config.enable;
        }
        false
    }
}

fn print_storage_error<F: AsyncNorFlash>(e: SSError<F::Error>) {
    match e {
        #[cfg(feature = "defmt")]
        SSError::Storage { value: e, .. } => error!("Flash error: {:?}", defmt::Debug2Format(&e)),
        #[cfg(not(feature = "defmt"))]
        SSError::Storage { value: _e, .. } => error!("Flash error"),
        SSError::FullStorage => error!("Storage is full"),
        SSError::Corrupted { .. } => error!("Storage is corrupted"),
        SSError::BufferTooBig => error!("Buffer too big"),
        SSError::BufferTooSmall(x) => error!("Buffer too small, needs {} bytes", x),
        SSError::SerializationError(e) => error!("Map value error: {}", e),
        _ => error!("Unknown storage error"),
    }
}
