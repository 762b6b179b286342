//! # Utilities Library
//!
//! Shared helpers for input validation, time handling and display formatting.

pub mod format;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use format::{format_area, mask_mobile};
pub use time::{display_date, format_time, now_epoch_ms, now_utc, parse_utc};
pub use validation::{
    validate_email, validate_min_length, validate_mobile, validate_not_empty, validate_pin_code,
};
