use serde::{Deserialize, Serialize};

/// New-farmer registration request. Triggers an OTP to the given mobile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub mobile: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// OTP verification for a pending registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyOtpRequest {
    pub mobile: String,
    pub otp: String,
}

/// Password login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub mobile: String,
    pub password: String,
}

/// Passwordless login: ask the server to send an OTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OtpLoginRequest {
    pub mobile: String,
}

/// Second half of the passwordless login flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyLoginOtpRequest {
    pub mobile: String,
    pub otp: String,
}

/// Start of the password-reset flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    pub mobile: String,
}

/// Completion of the password-reset flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    pub mobile: String,
    pub otp: String,
    pub new_password: String,
}

/// Authentication response (login/registration success).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub token: String,
    pub message: String,
}

/// Account role, decides which navigation the client exposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Admin,
}

/// User information (public, safe to store client-side).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    pub kyc_status: super::kyc::KycStatus,
    pub created_at: String,
}

/// Profile update payload (farmer editing their own record).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Generic acknowledgement body ("OTP sent", "Password updated", ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Uniform error body returned by the API on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Farmer).unwrap(), "\"farmer\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn register_request_omits_missing_email() {
        let req = RegisterRequest {
            name: "Asha".into(),
            mobile: "9876543210".into(),
            password: "pw".into(),
            email: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("email"));
    }
}
