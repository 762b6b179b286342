//! Application constants

/// Single origin of the remote farm API.
pub const API_BASE: &str = "http://127.0.0.1:3001";

/// Seconds before the "resend OTP" button re-enables.
pub const OTP_RESEND_SECONDS: u32 = 30;

/// Polling interval for the device-data dashboard.
pub const SENSOR_REFRESH_MS: u32 = 10_000;
