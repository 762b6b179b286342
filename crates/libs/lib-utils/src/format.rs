//! # Formatting Utilities
//!
//! Display formatting for the web client.
//!
//! - [`format_area`] - land area with its unit, trimming trailing zeros
//! - [`mask_mobile`] - mask a mobile number for display

/// Format a land area with its unit (e.g. `2.5, "acre"` -> `"2.5 acre"`,
/// `3.0, "acre"` -> `"3 acre"`).
pub fn format_area(value: f64, unit: &str) -> String {
    let mut number = format!("{:.2}", value);
    while number.ends_with('0') {
        number.pop();
    }
    if number.ends_with('.') {
        number.pop();
    }
    format!("{} {}", number, unit)
}

/// Mask all but the last four digits of a mobile number
/// (e.g. `"9876543210"` -> `"******3210"`).
///
/// Numbers with four or fewer characters are returned as-is.
pub fn mask_mobile(mobile: &str) -> String {
    let len = mobile.chars().count();
    if len <= 4 {
        return mobile.to_string();
    }
    let visible: String = mobile.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(2.5, "acre"), "2.5 acre");
        assert_eq!(format_area(3.0, "acre"), "3 acre");
        assert_eq!(format_area(1.25, "hectare"), "1.25 hectare");
    }

    #[test]
    fn test_mask_mobile() {
        assert_eq!(mask_mobile("9876543210"), "******3210");
        assert_eq!(mask_mobile("3210"), "3210");
    }
}
