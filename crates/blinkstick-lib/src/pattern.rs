//! Lighting patterns — solid color, blink, and pulsing fade.
//!
//! [`apply`] runs a pattern synchronously to completion against an open
//! device. Every color write is preceded by [`SETTLE_DELAY`].

use std::thread;
use std::time::Duration;

use crate::color::Color;
use crate::device::LedDevice;
use crate::error::{BlinkstickError, Result};

/// Minimum inter-command spacing the peripheral needs before each color
/// write. This is a hardware timing constraint, not a logical ordering
/// requirement.
pub const SETTLE_DELAY: Duration = Duration::from_millis(20);

/// A lighting pattern with its kind-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// One color write, then done.
    Static { color: Color },
    /// `times` repetitions of target/off, each phase `duration` apart.
    Blink {
        color: Color,
        duration: Duration,
        times: u32,
    },
    /// `times` symmetric triangular fades with `steps` intermediate samples
    /// per ramp.
    Pulse { color: Color, times: u32, steps: u32 },
}

impl Pattern {
    /// Build a pattern from the CLI's `-lighttype` string and flag values.
    ///
    /// Unknown kinds fail fast with [`BlinkstickError::InvalidPattern`].
    pub fn from_flags(
        lighttype: &str,
        color: Color,
        duration: Duration,
        times: u32,
        steps: u32,
    ) -> Result<Pattern> {
        match lighttype {
            "static" => Ok(Pattern::Static { color }),
            "blink" => Ok(Pattern::Blink {
                color,
                duration,
                times,
            }),
            "pulse" => Ok(Pattern::Pulse {
                color,
                times,
                steps,
            }),
            other => Err(BlinkstickError::InvalidPattern(other.to_string())),
        }
    }
}

/// Write one color after the settle delay.
fn set_with_settle(device: &impl LedDevice, color: Color) -> crate::device::Result<()> {
    thread::sleep(SETTLE_DELAY);
    device.set_color(color)
}

/// Run a pattern to completion.
pub fn apply(device: &impl LedDevice, pattern: &Pattern) -> crate::device::Result<()> {
    match *pattern {
        Pattern::Static { color } => set_with_settle(device, color),
        Pattern::Blink {
            color,
            duration,
            times,
        } => blink(device, color, duration, times),
        Pattern::Pulse {
            color,
            times,
            steps,
        } => pulse(device, color, times, steps),
    }
}

fn blink(
    device: &impl LedDevice,
    color: Color,
    duration: Duration,
    times: u32,
) -> crate::device::Result<()> {
    for _ in 0..times {
        thread::sleep(duration);
        set_with_settle(device, color)?;
        thread::sleep(duration);
        set_with_settle(device, Color::OFF)?;
    }
    Ok(())
}

fn pulse(device: &impl LedDevice, color: Color, times: u32, steps: u32) -> crate::device::Result<()> {
    for _ in 0..times {
        if steps == 0 {
            // Degenerate fade: a single on/off flash.
            set_with_settle(device, color)?;
            set_with_settle(device, Color::OFF)?;
            continue;
        }
        for j in 0..=steps {
            set_with_settle(device, color.scaled(j, steps))?;
        }
        for j in (0..=steps).rev() {
            set_with_settle(device, color.scaled(j, steps))?;
        }
        set_with_settle(device, Color::OFF)?;
    }
    Ok(())
}
