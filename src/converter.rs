/// One reading produced by a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelReading {
    /// Channel index the sample was taken from.
    pub channel: u32,
    /// Raw sample as reported by the converter, right-aligned.
    pub raw: u32,
}

impl ChannelReading {
    pub fn new(channel: u32, raw: u32) -> Self {
        Self { channel, raw }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("conversion in progress")]
    Busy,

    #[error("operation not supported by this converter")]
    NotSupported,

    #[error("converter fault: {0}")]
    Device(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability set a converter driver may implement.
///
/// Every operation defaults to [`DriverError::NotSupported`], so a driver
/// only implements the subset its hardware actually has. A converter that
/// can only do one channel at a time implements `start_channel` and
/// `channel_data` and leaves the rest alone; [`AdcDevice::multi_shot`]
/// still offers it a multi-channel interface by emulating one.
///
/// `channel_data` reports [`DriverError::Busy`] while a conversion is
/// still running; the device layer retries within its timeout budget.
///
/// [`AdcDevice::multi_shot`]: crate::device::AdcDevice::multi_shot
pub trait Converter {
    /// Halt any running conversion.
    fn stop(&mut self) -> Result<(), DriverError> {
        Err(DriverError::NotSupported)
    }

    /// Begin a conversion on a single channel.
    fn start_channel(&mut self, _channel: u32) -> Result<(), DriverError> {
        Err(DriverError::NotSupported)
    }

    /// Begin conversions on every channel set in `mask` at once.
    fn start_channels(&mut self, _mask: u32) -> Result<(), DriverError> {
        Err(DriverError::NotSupported)
    }

    /// Fetch the sample for a previously started single-channel conversion.
    fn channel_data(&mut self, _channel: u32) -> Result<u32, DriverError> {
        Err(DriverError::NotSupported)
    }

    /// Fetch the samples for a previously started multi-channel conversion.
    fn channels_data(&mut self, _mask: u32) -> Result<Vec<ChannelReading>, DriverError> {
        Err(DriverError::NotSupported)
    }
}
