//! Device communication — trait + Linux USB backend.

use std::fmt;

use serde::Serialize;

use crate::color::Color;

// ── Error type ──

/// Device communication errors.
///
/// String payloads follow the convention **"context: details"** where *context*
/// identifies the operation or step (e.g. `"USB open"`, `"SET_REPORT"`) and
/// *details* describes what went wrong.
#[derive(Debug)]
pub enum DeviceError {
    NotFound,
    OpenFailed(String),
    TransferFailed(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NotFound => write!(f, "BlinkStick device not found"),
            DeviceError::OpenFailed(e) => write!(f, "Failed to open device: {e}"),
            DeviceError::TransferFailed(e) => write!(f, "Transfer failed: {e}"),
        }
    }
}

impl std::error::Error for DeviceError {}

pub type Result<T> = std::result::Result<T, DeviceError>;

// ── Device info ──

#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    /// Bus path, e.g. `usb:001/004 [20a0:41e5]`.
    pub path: String,
    /// USB product string, e.g. "BlinkStick".
    pub product: String,
    /// USB serial number, e.g. "BS012345-3.0", if available.
    pub serial: Option<String>,
}

// ── Trait ──

/// One open BlinkStick. The handle is released when the value is dropped;
/// every exit path closes it exactly once.
pub trait LedDevice {
    fn open() -> Result<Self>
    where
        Self: Sized;
    fn info(&self) -> &DeviceInfo;
    /// Write one color to the first LED.
    fn set_color(&self, color: Color) -> Result<()>;
    /// Ask the device to keep showing the last color without refreshes.
    /// BlinkStick firmware latches the last written color, so backends may
    /// record the intent without a transfer.
    fn set_keep_alive(&self, enabled: bool) -> Result<()>;
}

// ── Linux implementation ──

#[cfg(target_os = "linux")]
mod linux_impl {
    use std::time::Duration;

    use nusb::transfer::{Control, ControlType, Recipient};

    use super::*;
    use crate::protocol::{
        BLINKSTICK_PID, BLINKSTICK_VID, HID_SET_REPORT, REPORT_COLOR, USB_TIMEOUT_MS,
        feature_report_value,
    };

    pub struct LinuxDevice {
        interface: nusb::Interface,
        info: DeviceInfo,
    }

    impl LinuxDevice {
        /// Send a HID feature report via a class control-out transfer.
        fn set_feature_report(&self, report_id: u8, data: &[u8]) -> Result<()> {
            let control = Control {
                control_type: ControlType::Class,
                recipient: Recipient::Interface,
                request: HID_SET_REPORT,
                value: feature_report_value(report_id),
                index: 0,
            };
            self.interface
                .control_out_blocking(control, data, Duration::from_millis(USB_TIMEOUT_MS))
                .map_err(|e| {
                    DeviceError::TransferFailed(format!("SET_REPORT(report={report_id}): {e}"))
                })?;
            Ok(())
        }
    }

    impl LedDevice for LinuxDevice {
        fn open() -> Result<Self> {
            let device_info = nusb::list_devices()
                .map_err(|e| DeviceError::OpenFailed(format!("USB enumeration: {e}")))?
                .find(|dev| {
                    dev.vendor_id() == BLINKSTICK_VID && dev.product_id() == BLINKSTICK_PID
                })
                .ok_or(DeviceError::NotFound)?;

            let serial = device_info.serial_number().map(|s| s.to_string());
            let product = device_info.product_string().unwrap_or_default().to_string();
            let bus_path = format!(
                "usb:{:03}/{:03} [{:04x}:{:04x}]",
                device_info.bus_number(),
                device_info.device_address(),
                device_info.vendor_id(),
                device_info.product_id(),
            );

            let usb_device = device_info
                .open()
                .map_err(|e| DeviceError::OpenFailed(format!("USB open: {e}")))?;

            // Claim the single HID interface (nusb auto-detaches the kernel
            // hid driver).
            let interface = usb_device
                .claim_interface(0)
                .map_err(|e| DeviceError::OpenFailed(format!("claim interface 0: {e}")))?;

            log::debug!("opened BlinkStick at {bus_path}");

            Ok(LinuxDevice {
                interface,
                info: DeviceInfo {
                    path: bus_path,
                    product,
                    serial,
                },
            })
        }

        fn info(&self) -> &DeviceInfo {
            &self.info
        }

        fn set_color(&self, color: Color) -> Result<()> {
            self.set_feature_report(REPORT_COLOR, &[REPORT_COLOR, color.r, color.g, color.b])
        }

        fn set_keep_alive(&self, enabled: bool) -> Result<()> {
            // Firmware latches the last written color; nothing to refresh.
            log::debug!("keep-alive {}", if enabled { "on" } else { "off" });
            Ok(())
        }
    }
}

#[cfg(target_os = "linux")]
pub use linux_impl::LinuxDevice;

// ── Stub device for unsupported platforms ──

/// Placeholder device that always returns `NotFound`.
/// Enables compilation and `cargo test` on unsupported hosts.
#[cfg(not(target_os = "linux"))]
pub struct StubDevice;

#[cfg(not(target_os = "linux"))]
impl LedDevice for StubDevice {
    fn open() -> Result<Self> {
        Err(DeviceError::NotFound)
    }
    fn info(&self) -> &DeviceInfo {
        unreachable!()
    }
    fn set_color(&self, _color: Color) -> Result<()> {
        unreachable!()
    }
    fn set_keep_alive(&self, _enabled: bool) -> Result<()> {
        unreachable!()
    }
}

// ── Device enumeration ──

/// A discovered BlinkStick (not yet opened).
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveredDevice {
    /// Bus path, e.g. `usb:001/004 [20a0:41e5]`.
    pub path: String,
    /// USB product string, if available.
    pub product: Option<String>,
    /// USB serial number, if available.
    pub serial: Option<String>,
}

/// Enumerate all attached BlinkSticks without opening them.
///
/// On unsupported platforms, always returns an empty list.
pub fn enumerate_devices() -> Vec<DiscoveredDevice> {
    #[cfg(target_os = "linux")]
    {
        enumerate_devices_linux()
    }
    #[cfg(not(target_os = "linux"))]
    {
        Vec::new()
    }
}

#[cfg(target_os = "linux")]
fn enumerate_devices_linux() -> Vec<DiscoveredDevice> {
    use crate::protocol::{BLINKSTICK_PID, BLINKSTICK_VID};

    let Ok(devices) = nusb::list_devices() else {
        return Vec::new();
    };

    devices
        .filter(|dev| dev.vendor_id() == BLINKSTICK_VID && dev.product_id() == BLINKSTICK_PID)
        .map(|dev| {
            let path = format!(
                "usb:{:03}/{:03} [{:04x}:{:04x}]",
                dev.bus_number(),
                dev.device_address(),
                dev.vendor_id(),
                dev.product_id(),
            );
            DiscoveredDevice {
                path,
                product: dev.product_string().map(|s| s.to_string()),
                serial: dev.serial_number().map(|s| s.to_string()),
            }
        })
        .collect()
}

/// Concrete device type for the current platform.
#[cfg(target_os = "linux")]
pub type PlatformDevice = LinuxDevice;
#[cfg(not(target_os = "linux"))]
pub type PlatformDevice = StubDevice;

/// Open the first attached BlinkStick.
///
/// The scan stops at the first matching device: either it opens or the open
/// error is returned. No device at all is [`DeviceError::NotFound`].
pub fn open_device() -> Result<PlatformDevice> {
    PlatformDevice::open()
}

// ── Mock device for testing ──

/// In-memory mock device for unit and integration tests.
///
/// Always compiled (zero runtime cost), hidden from public docs.
#[doc(hidden)]
pub mod mock {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// In-memory device for unit tests. Records every `set_color` call in
    /// order; `fail_set_color` injects transfer failures.
    pub struct MockDevice {
        info: DeviceInfo,
        /// Recorded colors, in call order.
        pub colors: RefCell<Vec<Color>>,
        /// Last keep-alive flag written, if any.
        pub keep_alive: Cell<Option<bool>>,
        /// If true, `set_color` returns an error.
        pub fail_set_color: Cell<bool>,
    }

    impl Default for MockDevice {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockDevice {
        pub fn new() -> Self {
            MockDevice {
                info: DeviceInfo {
                    path: "mock://blinkstick".into(),
                    product: "BlinkStick".into(),
                    serial: Some("BS000000-0.0".into()),
                },
                colors: RefCell::new(Vec::new()),
                keep_alive: Cell::new(None),
                fail_set_color: Cell::new(false),
            }
        }
    }

    impl LedDevice for MockDevice {
        fn open() -> Result<Self> {
            Ok(Self::new())
        }

        fn info(&self) -> &DeviceInfo {
            &self.info
        }

        fn set_color(&self, color: Color) -> Result<()> {
            if self.fail_set_color.get() {
                return Err(DeviceError::TransferFailed(
                    "mock: set_color failure injected".into(),
                ));
            }
            self.colors.borrow_mut().push(color);
            Ok(())
        }

        fn set_keep_alive(&self, enabled: bool) -> Result<()> {
            self.keep_alive.set(Some(enabled));
            Ok(())
        }
    }
}
