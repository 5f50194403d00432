//! # adc-shot
//!
//! A hardware-agnostic layer for acquiring one-shot readings from
//! interchangeable analog-to-digital converter devices.
//!
//! Converter drivers implement whichever subset of the [`Converter`]
//! capability set their hardware has; this crate supplies everything
//! around them: per-device channel legality, bounded busy-polling until a
//! conversion completes, sequential per-channel emulation for converters
//! without a native multi-channel start, and resolution of the analog
//! supply-rail voltages needed to interpret raw samples.
//!
//! ## Features
//!
//! - **Capability-based drivers**: Implement only the operations the
//!   hardware supports; the rest report `NotSupported`
//! - **Channel masks**: Requests are validated against each device's
//!   configured set of wired-up channels
//! - **Bounded polling**: Busy conversions are retried within a
//!   per-device budget, with an injectable settle delay
//! - **Multi-channel everywhere**: Devices that can only start one
//!   channel at a time still serve multi-channel requests
//! - **Supply rails**: Optional VDD/VSS regulators are powered before a
//!   conversion and queried (or statically configured) in microvolts,
//!   with configurable polarity
//!
//! ## Examples
//!
//! ### Reading a channel by device name
//!
//! ```rust
//! use adc_shot::{AdcConfig, AdcDevice, AdcRegistry, Converter, DriverError};
//!
//! struct Saradc;
//!
//! impl Converter for Saradc {
//!     fn start_channel(&mut self, _channel: u32) -> Result<(), DriverError> {
//!         Ok(())
//!     }
//!     fn channel_data(&mut self, channel: u32) -> Result<u32, DriverError> {
//!         Ok(0x800 + channel)
//!     }
//! }
//!
//! let config = AdcConfig::with_channels(0b1111).data_mask(0xfff).build();
//! let mut registry = AdcRegistry::new();
//! registry.register(AdcDevice::new("saradc", config, Saradc))?;
//!
//! let raw = registry.single_shot_channel("saradc", 2)?;
//! assert_eq!(raw, 0x802);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Multi-channel requests on a single-channel converter
//!
//! ```rust
//! # use adc_shot::{AdcConfig, AdcDevice, Converter, DriverError};
//! # struct Saradc;
//! # impl Converter for Saradc {
//! #     fn start_channel(&mut self, _channel: u32) -> Result<(), DriverError> { Ok(()) }
//! #     fn channel_data(&mut self, channel: u32) -> Result<u32, DriverError> { Ok(0x800 + channel) }
//! # }
//! let config = AdcConfig::with_channels(0b1010).build();
//! let mut device = AdcDevice::new("saradc", config, Saradc);
//!
//! // No native multi-channel start: channels 1 and 3 are converted one
//! // after the other, readings in ascending channel order.
//! let readings = device.multi_shot(0b1010)?;
//! assert_eq!(readings.len(), 2);
//! assert_eq!(readings[0].channel, 1);
//! assert_eq!(readings[1].channel, 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Supply-rail voltages
//!
//! ```rust
//! use adc_shot::{AdcConfig, AdcDevice, Converter};
//!
//! struct Quiet;
//! impl Converter for Quiet {}
//!
//! let config = AdcConfig::with_channels(0b1)
//!     .vdd_microvolts(1_800_000)
//!     .vss_microvolts(800_000)
//!     .vss_polarity_negative()
//!     .build();
//! let mut device = AdcDevice::new("saradc", config, Quiet);
//!
//! assert_eq!(device.vdd_microvolts()?, 1_800_000);
//! assert_eq!(device.vss_microvolts()?, -800_000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod converter;
pub mod device;
pub mod registry;
pub mod settle;
pub mod supply;

// Re-export the main types for convenience
pub use config::{AdcConfig, AdcConfigBuilder, DEFAULT_TIMEOUT};

pub use converter::{ChannelReading, Converter, DriverError};

pub use device::{AdcDevice, AdcError, MAX_CHANNEL};

pub use registry::{AdcRegistry, RegistryError};

pub use settle::{BusyDelay, Settle};

pub use supply::{Rail, Supply, SupplyError};
