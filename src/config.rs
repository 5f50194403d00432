use crate::settle::{BusyDelay, Settle};
use crate::supply::Supply;

/// Default busy-retry budget for both single- and multi-channel reads.
pub const DEFAULT_TIMEOUT: u32 = 100;

/// Static description of one rail: an optional live regulator, an optional
/// fixed fallback voltage, and the sign to report values with.
pub struct RailConfig {
    pub(crate) supply: Option<Box<dyn Supply>>,
    pub(crate) microvolts: Option<i32>,
    pub(crate) polarity_negative: bool,
}

impl RailConfig {
    fn unset() -> Self {
        Self {
            supply: None,
            microvolts: None,
            polarity_negative: false,
        }
    }
}

/// Per-device configuration consumed by [`AdcDevice`].
///
/// Mirrors what a board description provides for a converter: which
/// channels are wired up, how wide a raw sample is, how patient reads
/// should be, and where the reference rails come from.
///
/// [`AdcDevice`]: crate::device::AdcDevice
pub struct AdcConfig {
    pub(crate) channel_mask: u32,
    pub(crate) data_mask: u32,
    pub(crate) single_timeout: u32,
    pub(crate) multi_timeout: u32,
    pub(crate) vdd: RailConfig,
    pub(crate) vss: RailConfig,
    pub(crate) settle: Box<dyn Settle>,
}

impl AdcConfig {
    /// Start configuring a converter with `channel_mask` describing the
    /// wired-up channels (bit `i` set means channel `i` may be requested).
    pub fn with_channels(channel_mask: u32) -> AdcConfigBuilder {
        AdcConfigBuilder {
            channel_mask,
            data_mask: u32::MAX,
            single_timeout: DEFAULT_TIMEOUT,
            multi_timeout: DEFAULT_TIMEOUT,
            vdd: RailConfig::unset(),
            vss: RailConfig::unset(),
            settle: None,
        }
    }
}

pub struct AdcConfigBuilder {
    channel_mask: u32,
    data_mask: u32,
    single_timeout: u32,
    multi_timeout: u32,
    vdd: RailConfig,
    vss: RailConfig,
    settle: Option<Box<dyn Settle>>,
}

impl AdcConfigBuilder {
    /// Valid bits of a raw sample, e.g. `0xfff` for a 12-bit converter.
    /// Advisory for callers scaling samples; reads do not enforce it.
    pub fn data_mask(mut self, mask: u32) -> Self {
        self.data_mask = mask;
        self
    }

    /// Busy-retry budget for single-channel reads, in retries not time.
    pub fn single_timeout(mut self, retries: u32) -> Self {
        self.single_timeout = retries;
        self
    }

    /// Busy-retry budget for multi-channel reads, in retries not time.
    pub fn multi_timeout(mut self, retries: u32) -> Self {
        self.multi_timeout = retries;
        self
    }

    /// Attach a controllable VDD regulator.
    pub fn vdd_supply(mut self, supply: impl Supply + 'static) -> Self {
        self.vdd.supply = Some(Box::new(supply));
        self
    }

    /// Attach a controllable VSS regulator.
    pub fn vss_supply(mut self, supply: impl Supply + 'static) -> Self {
        self.vss.supply = Some(Box::new(supply));
        self
    }

    /// Fixed VDD voltage for boards without a controllable regulator.
    pub fn vdd_microvolts(mut self, microvolts: i32) -> Self {
        self.vdd.microvolts = Some(microvolts);
        self
    }

    /// Fixed VSS voltage for boards without a controllable regulator.
    pub fn vss_microvolts(mut self, microvolts: i32) -> Self {
        self.vss.microvolts = Some(microvolts);
        self
    }

    /// Report VDD magnitudes with a negative sign.
    pub fn vdd_polarity_negative(mut self) -> Self {
        self.vdd.polarity_negative = true;
        self
    }

    /// Report VSS magnitudes with a negative sign.
    pub fn vss_polarity_negative(mut self) -> Self {
        self.vss.polarity_negative = true;
        self
    }

    /// Replace the delay used between busy retries.
    pub fn settle(mut self, settle: impl Settle + 'static) -> Self {
        self.settle = Some(Box::new(settle));
        self
    }

    pub fn build(self) -> AdcConfig {
        AdcConfig {
            channel_mask: self.channel_mask,
            data_mask: self.data_mask,
            single_timeout: self.single_timeout,
            multi_timeout: self.multi_timeout,
            vdd: self.vdd,
            vss: self.vss,
            settle: self
                .settle
                .unwrap_or_else(|| Box::new(BusyDelay::default())),
        }
    }
}
