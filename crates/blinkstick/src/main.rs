//! blinkstick — play colors and lighting patterns on the first attached
//! BlinkStick.
//!
//! Resolves a named color, opens the first attached device, plays the
//! requested pattern and exits. No device attached is not an error: the
//! tool exits silently.

use std::thread;
use std::time::Duration;

use clap::Parser;

use blinkstick_lib::color::{self, Color};
use blinkstick_lib::device::{self, DeviceError, LedDevice};
use blinkstick_lib::error::Result;
use blinkstick_lib::pattern::{self, Pattern, SETTLE_DELAY};

#[derive(Parser)]
#[command(
    name = "blinkstick",
    version,
    about = "Play colors and lighting patterns on the first attached BlinkStick"
)]
struct Args {
    /// Color name (CSS/X11 extended set; e.g. red, lime, white, or off)
    #[arg(long, default_value = "black")]
    color: String,

    /// Lighting pattern: static, blink or pulse
    #[arg(long, default_value = "static")]
    lighttype: String,

    /// Milliseconds between blink phases
    #[arg(long, default_value_t = 300)]
    duration: u64,

    /// How many times to blink or pulse
    #[arg(long, default_value_t = 5)]
    times: u32,

    /// Intermediate samples between off and the target color per pulse fade
    #[arg(long, default_value_t = 15)]
    steps: u32,

    /// List attached BlinkStick devices and exit
    #[arg(long)]
    list: bool,

    /// Output the device list as JSON (with --list)
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.list {
        return list_devices(args.json);
    }

    let color = color::resolve(&args.color)?;

    let device = match device::open_device() {
        Ok(dev) => dev,
        Err(DeviceError::NotFound) => {
            // Nothing to light up — a one-shot tool exits silently.
            log::info!("no BlinkStick attached");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    log::debug!("using device at {}", device.info().path);

    device.set_keep_alive(true)?;

    // Start from a known-off state before dispatching the pattern.
    pattern::apply(&device, &Pattern::Static { color: Color::OFF })?;

    let pattern = Pattern::from_flags(
        &args.lighttype,
        color,
        Duration::from_millis(args.duration),
        args.times,
        args.steps,
    )?;
    pattern::apply(&device, &pattern)?;

    // Let the last write settle before the handle closes.
    thread::sleep(SETTLE_DELAY);
    Ok(())
}

fn list_devices(json: bool) -> Result<()> {
    let devices = device::enumerate_devices();

    if json {
        println!("{}", serde_json::to_string_pretty(&devices).unwrap());
        return Ok(());
    }

    if devices.is_empty() {
        println!("No BlinkStick devices found.");
        return Ok(());
    }

    println!(
        "Found {} BlinkStick device{}:",
        devices.len(),
        if devices.len() == 1 { "" } else { "s" }
    );
    println!();

    for (i, dev) in devices.iter().enumerate() {
        println!("  [{}] {}", i + 1, dev.path);
        if let Some(ref product) = dev.product {
            println!("      Product: {product}");
        }
        if let Some(ref serial) = dev.serial {
            println!("      Serial: {serial}");
        }
    }

    Ok(())
}
