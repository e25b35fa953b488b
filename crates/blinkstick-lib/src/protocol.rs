//! BlinkStick USB protocol constants.
//!
//! The BlinkStick is a USB HID device; colors are written with a single
//! class-level SET_REPORT control transfer carrying a feature report.

/// BlinkStick USB vendor id (Agile Innovative via OpenMoko).
pub const BLINKSTICK_VID: u16 = 0x20A0;
/// BlinkStick USB product id.
pub const BLINKSTICK_PID: u16 = 0x41E5;

/// HID class request: SET_REPORT.
pub const HID_SET_REPORT: u8 = 0x09;
/// HID report type for feature reports (high byte of wValue).
pub const HID_REPORT_TYPE_FEATURE: u16 = 0x03;

/// Feature report id carrying `[report_id, r, g, b]` for the first LED.
pub const REPORT_COLOR: u8 = 1;

/// Control transfer timeout.
pub const USB_TIMEOUT_MS: u64 = 1000;

/// Compose the SET_REPORT wValue for a feature report id.
pub fn feature_report_value(report_id: u8) -> u16 {
    (HID_REPORT_TYPE_FEATURE << 8) | report_id as u16
}
