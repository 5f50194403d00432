use std::collections::HashMap;

use crate::converter::ChannelReading;
use crate::device::{AdcDevice, AdcError};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no converter named {name} is registered")]
    DeviceNotFound { name: String },

    #[error("a converter named {name} is already registered")]
    AlreadyRegistered { name: String },

    #[error(transparent)]
    Adc(#[from] AdcError),
}

/// Name-to-device lookup for every converter a board exposes.
///
/// Callers that only ever need one reading can go through the single-shot
/// helpers and never hold a device handle themselves.
#[derive(Default)]
pub struct AdcRegistry {
    devices: HashMap<String, AdcDevice>,
}

impl AdcRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a device under its own name. Names are unique.
    pub fn register(&mut self, device: AdcDevice) -> Result<(), RegistryError> {
        let name = device.name().to_string();
        if self.devices.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered { name });
        }
        log::debug!("registering converter {name}");
        self.devices.insert(name, device);
        Ok(())
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut AdcDevice, RegistryError> {
        self.devices
            .get_mut(name)
            .ok_or_else(|| RegistryError::DeviceNotFound {
                name: name.to_string(),
            })
    }

    /// Registered device names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    /// Resolve `name`, start `channel` and block until its sample is ready.
    pub fn single_shot_channel(&mut self, name: &str, channel: u32) -> Result<u32, RegistryError> {
        let device = self.get_mut(name)?;
        Ok(device.single_shot(channel)?)
    }

    /// Resolve `name`, start every channel in `mask` and block until all
    /// samples are ready. Falls back to per-channel conversion on
    /// converters without a native multi-channel start.
    pub fn single_shot_channels(
        &mut self,
        name: &str,
        mask: u32,
    ) -> Result<Vec<ChannelReading>, RegistryError> {
        let device = self.get_mut(name)?;
        Ok(device.multi_shot(mask)?)
    }
}
