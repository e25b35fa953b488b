//! Unified error type for the blinkstick-lib crate.
//!
//! [`BlinkstickError`] wraps the device-layer error (`DeviceError`) and
//! domain-specific error kinds (`ColorNotFound`, `InvalidPattern`).
//! `From` impls allow `?` to propagate across module boundaries seamlessly.

use std::fmt;

use crate::device::DeviceError;

/// Unified error type for blinkstick-lib operations.
#[derive(Debug)]
pub enum BlinkstickError {
    /// Device communication error (enumerate, open, color transfer).
    Device(DeviceError),
    /// The requested color name is not in the color table.
    ColorNotFound(String),
    /// The requested lighting pattern kind is not recognized.
    InvalidPattern(String),
}

impl fmt::Display for BlinkstickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlinkstickError::Device(e) => write!(f, "{e}"),
            BlinkstickError::ColorNotFound(name) => write!(f, "Invalid color {name:?}"),
            BlinkstickError::InvalidPattern(kind) => {
                write!(f, "Invalid lighttype {kind:?} (use static, blink or pulse)")
            }
        }
    }
}

impl std::error::Error for BlinkstickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlinkstickError::Device(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DeviceError> for BlinkstickError {
    fn from(e: DeviceError) -> Self {
        BlinkstickError::Device(e)
    }
}

/// Crate-level Result alias using [`BlinkstickError`].
pub type Result<T> = std::result::Result<T, BlinkstickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_device_error() {
        let e: BlinkstickError = DeviceError::NotFound.into();
        assert!(matches!(e, BlinkstickError::Device(DeviceError::NotFound)));
    }

    #[test]
    fn display_device_error() {
        let e = BlinkstickError::Device(DeviceError::NotFound);
        assert_eq!(e.to_string(), "BlinkStick device not found");
    }

    #[test]
    fn display_color_not_found() {
        let e = BlinkstickError::ColorNotFound("chartreuse2".into());
        assert_eq!(e.to_string(), "Invalid color \"chartreuse2\"");
    }

    #[test]
    fn display_invalid_pattern() {
        let e = BlinkstickError::InvalidPattern("strobe".into());
        assert_eq!(
            e.to_string(),
            "Invalid lighttype \"strobe\" (use static, blink or pulse)"
        );
    }

    #[test]
    fn source_chains_device_error() {
        let e = BlinkstickError::Device(DeviceError::TransferFailed("timeout".into()));
        let source = std::error::Error::source(&e).unwrap();
        assert!(source.to_string().contains("timeout"));
    }

    #[test]
    fn source_none_for_string_variants() {
        let e = BlinkstickError::ColorNotFound("x".into());
        assert!(std::error::Error::source(&e).is_none());
    }

    #[test]
    fn question_mark_propagation_device_to_blinkstick() {
        fn inner() -> crate::device::Result<()> {
            Err(DeviceError::NotFound)
        }
        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }
        let err = outer().unwrap_err();
        assert!(matches!(err, BlinkstickError::Device(DeviceError::NotFound)));
    }
}
