// One-shot reading example
//
// Registers a simulated converter and takes single- and multi-channel
// readings through the registry, the way a board-status tool would.

use adc_shot::{AdcConfig, AdcDevice, AdcRegistry, Converter, DriverError};
use clap::Parser;

#[derive(Parser)]
#[command(name = "single_shot")]
#[command(version = "1.0")]
#[command(about = "One-shot ADC readings through the device registry")]
struct Args {
    /// Channel for the single-channel reading
    #[arg(short, long, default_value_t = 1, help = "Channel index to read")]
    channel: u32,

    /// Channel mask for the multi-channel reading
    #[arg(short, long, default_value_t = 0b1010, help = "Bitmask of channels to read together")]
    mask: u32,

    /// Enable verbose logging
    #[arg(short, long, help = "Show debug information and detailed logs")]
    verbose: bool,
}

/// Simulated 12-bit converter. Conversions need a couple of polls before
/// data is ready, like the real thing.
struct RampAdc {
    polls_left: u32,
    step: u32,
}

impl RampAdc {
    fn new() -> Self {
        Self {
            polls_left: 0,
            step: 0,
        }
    }
}

impl Converter for RampAdc {
    fn start_channel(&mut self, _channel: u32) -> Result<(), DriverError> {
        self.polls_left = 2;
        Ok(())
    }

    fn channel_data(&mut self, channel: u32) -> Result<u32, DriverError> {
        if self.polls_left > 0 {
            self.polls_left -= 1;
            return Err(DriverError::Busy);
        }
        self.step = self.step.wrapping_add(37);
        Ok((0x800 + self.step * (channel + 1)) & 0xfff)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    println!("ADC Single-Shot Example");
    println!("=======================\n");

    // 1. Describe the converter: four wired channels, 12-bit samples.
    println!("1. Configuring simulated converter...");
    let config = AdcConfig::with_channels(0b1111)
        .data_mask(0xfff)
        .single_timeout(16)
        .multi_timeout(16)
        .build();

    // 2. Register it by name.
    println!("2. Registering device 'saradc'...");
    let mut registry = AdcRegistry::new();
    registry.register(AdcDevice::new("saradc", config, RampAdc::new()))?;

    // 3. Single-channel shot.
    println!("\n3. Reading channel {}...", args.channel);
    let raw = registry.single_shot_channel("saradc", args.channel)?;
    println!("   channel {} -> raw {:#05x}", args.channel, raw);

    // 4. Multi-channel shot. The simulated converter has no native
    //    multi-channel start, so the layer converts one channel at a time.
    println!("\n4. Reading channel mask {:#06b}...", args.mask);
    let readings = registry.single_shot_channels("saradc", args.mask)?;
    for reading in &readings {
        println!("   channel {} -> raw {:#05x}", reading.channel, reading.raw);
    }

    println!("\n5. Done, {} reading(s) taken.", readings.len() + 1);

    Ok(())
}
