//! # Validation Utilities
//!
//! Input validation helpers for the registration, login and KYC forms.
//! Validation failures are client-side: they block a local transition and
//! never reach the network.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check).
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.contains('@') && email.contains('.') {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Validate minimum length.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.len() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

/// Validate an Indian mobile number: exactly 10 digits, leading 6-9.
pub fn validate_mobile(mobile: &str) -> Result<(), String> {
    let digits_only = mobile.chars().all(|c| c.is_ascii_digit());
    let starts_valid = matches!(mobile.chars().next(), Some('6'..='9'));
    if mobile.len() == 10 && digits_only && starts_valid {
        Ok(())
    } else {
        Err("Mobile number must be 10 digits starting with 6-9".to_string())
    }
}

/// Validate a postal PIN code: exactly 6 digits, no leading zero.
pub fn validate_pin_code(pin: &str) -> Result<(), String> {
    let digits_only = pin.chars().all(|c| c.is_ascii_digit());
    if pin.len() == 6 && digits_only && !pin.starts_with('0') {
        Ok(())
    } else {
        Err("PIN code must be 6 digits".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(validate_not_empty("x", "field").is_ok());
        assert!(validate_not_empty("  ", "field").is_err());
        assert!(validate_not_empty("", "field").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_mobile() {
        assert!(validate_mobile("9876543210").is_ok());
        assert!(validate_mobile("1234567890").is_err()); // leading 1
        assert!(validate_mobile("98765").is_err()); // too short
        assert!(validate_mobile("98765432ab").is_err()); // non-digit
    }

    #[test]
    fn test_pin_code() {
        assert!(validate_pin_code("412207").is_ok());
        assert!(validate_pin_code("012207").is_err());
        assert!(validate_pin_code("4122").is_err());
        assert!(validate_pin_code("41220x").is_err());
    }
}
