// Supply-rail resolution example
//
// Shows how VDD/VSS voltages are resolved: live from a regulator (and
// memoized), or from a static configuration value with polarity applied.

use adc_shot::{AdcConfig, AdcDevice, Converter, DriverError, Supply, SupplyError};
use clap::Parser;

#[derive(Parser)]
#[command(name = "supply_rails")]
#[command(version = "1.0")]
#[command(about = "Resolve ADC supply-rail voltages")]
struct Args {
    /// Regulator output in microvolts
    #[arg(long, default_value_t = 3_300_000)]
    vdd_microvolts: i32,

    /// Enable verbose logging
    #[arg(short, long, help = "Show debug information and detailed logs")]
    verbose: bool,
}

/// Regulator stand-in that reports when it is switched.
struct BenchRegulator {
    microvolts: i32,
}

impl Supply for BenchRegulator {
    fn set_enabled(&mut self, enable: bool) -> Result<(), SupplyError> {
        println!("   regulator switched {}", if enable { "on" } else { "off" });
        Ok(())
    }

    fn microvolts(&mut self) -> Result<i32, SupplyError> {
        Ok(self.microvolts)
    }
}

/// Converter whose samples are ready immediately.
struct InstantAdc;

impl Converter for InstantAdc {
    fn start_channel(&mut self, _channel: u32) -> Result<(), DriverError> {
        Ok(())
    }

    fn channel_data(&mut self, _channel: u32) -> Result<u32, DriverError> {
        Ok(0x3ff)
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

    println!("ADC Supply-Rail Example");
    println!("=======================\n");

    // VDD comes from a live regulator; VSS is a fixed negative rail
    // described by configuration only.
    println!("1. Configuring device with a live VDD regulator...");
    let regulator = BenchRegulator {
        microvolts: args.vdd_microvolts,
    };
    let config = AdcConfig::with_channels(0b1)
        .data_mask(0x3ff)
        .vdd_supply(regulator)
        .vss_microvolts(1_200_000)
        .vss_polarity_negative()
        .build();
    let mut device = AdcDevice::new("bench-adc", config, InstantAdc);

    println!("\n2. Resolving rail voltages...");
    println!("   vdd = {} uV (live regulator query)", device.vdd_microvolts()?);
    println!("   vss = {} uV (static value, negative polarity)", device.vss_microvolts()?);

    // Taking a reading powers the configured rails first.
    println!("\n3. Taking a reading (enables the VDD regulator)...");
    let raw = device.single_shot(0)?;
    println!("   channel 0 -> raw {:#05x} of full scale {:#05x}", raw, device.data_mask());

    println!("\n4. Done.");

    Ok(())
}
