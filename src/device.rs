use crate::config::{AdcConfig, RailConfig};
use crate::converter::{ChannelReading, Converter, DriverError};
use crate::settle::Settle;
use crate::supply::{Rail, SupplyError};

/// Highest channel index a request mask can describe.
pub const MAX_CHANNEL: u32 = 31;

#[derive(Debug, thiserror::Error)]
pub enum AdcError {
    #[error("wrong channel selection {requested:#x} for device: {device}")]
    InvalidChannel { device: String, requested: u32 },

    #[error("{device}: conversion still busy after {attempts} attempts")]
    Busy { device: String, attempts: u32 },

    #[error("{device}: {rail}-supply failure: {source}")]
    Supply {
        device: String,
        rail: Rail,
        source: SupplyError,
    },

    #[error("no {rail} voltage data")]
    NoData { rail: Rail },

    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// One converter device: its configuration plus the driver that talks to
/// the hardware.
///
/// All operations are synchronous and take `&mut self`; a started
/// conversion is consumed by the matching read before anything else may
/// run on the device, so interleaved callers are unrepresentable here.
pub struct AdcDevice {
    name: String,
    channel_mask: u32,
    data_mask: u32,
    single_timeout: u32,
    multi_timeout: u32,
    vdd: RailConfig,
    vss: RailConfig,
    settle: Box<dyn Settle>,
    driver: Box<dyn Converter>,
}

impl AdcDevice {
    /// Bind a driver to its configuration.
    ///
    /// Rails backed by a live regulator are queried once here to seed the
    /// cached voltage. A failing query is reported as a diagnostic and
    /// leaves the cache empty rather than failing device setup.
    pub fn new(name: impl Into<String>, config: AdcConfig, driver: impl Converter + 'static) -> Self {
        let name = name.into();
        let AdcConfig {
            channel_mask,
            data_mask,
            single_timeout,
            multi_timeout,
            mut vdd,
            mut vss,
            settle,
        } = config;

        Self::seed_rail_cache(&name, Rail::Vdd, &mut vdd);
        Self::seed_rail_cache(&name, Rail::Vss, &mut vss);

        log::debug!("{name}: channels {channel_mask:#x}, data mask {data_mask:#x}");

        Self {
            name,
            channel_mask,
            data_mask,
            single_timeout,
            multi_timeout,
            vdd,
            vss,
            settle,
            driver: Box::new(driver),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bitmask of the channels that may be requested on this device.
    pub fn channel_mask(&self) -> u32 {
        self.channel_mask
    }

    /// Valid bits of a raw sample. Advisory; reads do not enforce it.
    pub fn data_mask(&self) -> u32 {
        self.data_mask
    }

    fn seed_rail_cache(name: &str, rail: Rail, state: &mut RailConfig) {
        if let Some(supply) = state.supply.as_mut() {
            match supply.microvolts() {
                Ok(microvolts) => state.microvolts = Some(microvolts),
                Err(e) => log::warn!("{name}: can't resolve {rail} voltage: {e}"),
            }
        }
    }

    /// A request is legal when every requested bit is also set in the
    /// configured channel mask. Inactive channels between active ones are
    /// normal hardware: mask 0b1010 accepts channel 1 or 3 but rejects
    /// a request for 0b1110.
    fn check_channel(&self, value: u32, is_mask: bool) -> Result<u32, AdcError> {
        let mask = if is_mask {
            Some(value)
        } else {
            1u32.checked_shl(value)
        };

        match mask {
            Some(mask) if mask & self.channel_mask == mask => Ok(mask),
            _ => Err(AdcError::InvalidChannel {
                device: self.name.clone(),
                requested: value,
            }),
        }
    }

    /// Power both rails before a conversion. An unconfigured rail is a
    /// no-op; a failing one aborts before the second rail is touched.
    fn enable_supplies(&mut self) -> Result<(), AdcError> {
        Self::enable_rail(&self.name, Rail::Vdd, &mut self.vdd)?;
        Self::enable_rail(&self.name, Rail::Vss, &mut self.vss)
    }

    fn enable_rail(name: &str, rail: Rail, state: &mut RailConfig) -> Result<(), AdcError> {
        let Some(supply) = state.supply.as_mut() else {
            return Ok(());
        };
        supply.set_enabled(true).map_err(|source| {
            log::error!("{name}: can't enable {rail}-supply: {source}");
            AdcError::Supply {
                device: name.to_string(),
                rail,
                source,
            }
        })
    }

    fn rail_value(name: &str, rail: Rail, state: &mut RailConfig) -> Result<i32, AdcError> {
        // A live regulator wins over the static configuration value and
        // refreshes the cache on every successful query.
        if let Some(supply) = state.supply.as_mut() {
            let microvolts = supply.microvolts().map_err(|source| AdcError::Supply {
                device: name.to_string(),
                rail,
                source,
            })?;
            state.microvolts = Some(microvolts);
        }

        let microvolts = state.microvolts.ok_or(AdcError::NoData { rail })?;
        Ok(if state.polarity_negative {
            -microvolts
        } else {
            microvolts
        })
    }

    /// Current VDD voltage in microvolts, sign already applied.
    pub fn vdd_microvolts(&mut self) -> Result<i32, AdcError> {
        Self::rail_value(&self.name, Rail::Vdd, &mut self.vdd)
    }

    /// Current VSS voltage in microvolts, sign already applied.
    pub fn vss_microvolts(&mut self) -> Result<i32, AdcError> {
        Self::rail_value(&self.name, Rail::Vss, &mut self.vss)
    }

    /// Halt any running conversion.
    pub fn stop(&mut self) -> Result<(), AdcError> {
        Ok(self.driver.stop()?)
    }

    /// Begin a conversion on one channel.
    pub fn start_channel(&mut self, channel: u32) -> Result<(), AdcError> {
        self.check_channel(channel, false)?;
        self.enable_supplies()?;
        Ok(self.driver.start_channel(channel)?)
    }

    /// Begin conversions on every channel set in `mask` at once.
    pub fn start_channels(&mut self, mask: u32) -> Result<(), AdcError> {
        self.check_channel(mask, true)?;
        self.enable_supplies()?;
        Ok(self.driver.start_channels(mask)?)
    }

    /// Await and fetch the sample of a started single-channel conversion.
    ///
    /// Polls the driver up to `single_timeout + 1` times, pausing one
    /// settle delay between busy attempts. Any driver error other than
    /// busy is surfaced immediately.
    pub fn read_channel(&mut self, channel: u32) -> Result<u32, AdcError> {
        self.check_channel(channel, false)?;

        let budget = self.single_timeout;
        let mut remaining = budget;
        loop {
            match self.driver.channel_data(channel) {
                Ok(raw) => return Ok(raw),
                Err(DriverError::Busy) if remaining > 0 => {
                    self.settle.settle();
                    remaining -= 1;
                }
                Err(DriverError::Busy) => {
                    return Err(AdcError::Busy {
                        device: self.name.clone(),
                        attempts: budget + 1,
                    })
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Await and fetch the samples of a started multi-channel conversion.
    pub fn read_channels(&mut self, mask: u32) -> Result<Vec<ChannelReading>, AdcError> {
        self.check_channel(mask, true)?;

        let budget = self.multi_timeout;
        let mut remaining = budget;
        loop {
            match self.driver.channels_data(mask) {
                Ok(readings) => return Ok(readings),
                Err(DriverError::Busy) if remaining > 0 => {
                    self.settle.settle();
                    remaining -= 1;
                }
                Err(DriverError::Busy) => {
                    return Err(AdcError::Busy {
                        device: self.name.clone(),
                        attempts: budget + 1,
                    })
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Start one channel and block until its sample is ready.
    pub fn single_shot(&mut self, channel: u32) -> Result<u32, AdcError> {
        self.start_channel(channel)?;
        self.read_channel(channel)
    }

    /// Start every channel in `mask` and block until all samples are ready.
    ///
    /// Converters without a native multi-channel start are driven one
    /// channel at a time instead, so callers get the same interface either
    /// way. Readings come back in ascending channel order.
    pub fn multi_shot(&mut self, mask: u32) -> Result<Vec<ChannelReading>, AdcError> {
        match self.start_channels(mask) {
            Ok(()) => self.read_channels(mask),
            Err(AdcError::Driver(DriverError::NotSupported)) => self.multi_shot_manual(mask),
            Err(e) => Err(e),
        }
    }

    /// Per-channel emulation of a multi-channel shot. All-or-nothing: the
    /// first failing channel aborts the whole run.
    fn multi_shot_manual(&mut self, mask: u32) -> Result<Vec<ChannelReading>, AdcError> {
        let mut readings = Vec::with_capacity(mask.count_ones() as usize);

        for channel in 0..=MAX_CHANNEL {
            if (mask >> channel) & 0x1 == 0 {
                continue;
            }

            self.start_channel(channel)?;
            let raw = self.read_channel(channel)?;
            readings.push(ChannelReading::new(channel, raw));
        }

        Ok(readings)
    }
}
