//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the remote farm API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, OTP verification and login DTOs
//! - [`kyc`] - Farmer KYC payloads (the richest entity graph in the app)
//! - [`device`] - IoT device claiming and sensor snapshots
//! - [`admin`] - Admin-console resources
//! - [`crops`] - Crop catalogue endpoints
//! - [`alerts`] - Farmer notifications
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: omitted when `None` via
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: lowercase strings via `#[serde(rename_all = "lowercase")]`
//!
//! ## Example Request/Response Pair
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "mobile": "9876543210",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "id": "42",
//!     "name": "Asha",
//!     "mobile": "9876543210",
//!     "role": "farmer",
//!     "kyc_status": "pending",
//!     "created_at": "2026-01-01T00:00:00Z"
//!   },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "message": "Login successful"
//! }
//! ```

pub mod admin;
pub mod alerts;
pub mod auth;
pub mod crops;
pub mod device;
pub mod kyc;

pub use admin::*;
pub use alerts::*;
pub use auth::*;
pub use crops::*;
pub use device::*;
pub use kyc::*;
