//! BlinkStick — color and pattern control for BlinkStick USB LED devices.

pub mod color;
pub mod device;
pub mod error;
pub mod pattern;
pub mod protocol;

pub use error::BlinkstickError;
