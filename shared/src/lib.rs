//! # Shared Data Transfer Objects Library
//!
//! This library defines the JSON contract between the farm-portal web client
//! and the remote farm API. The API itself lives outside this repository;
//! everything here is the shape of what goes over the wire.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, OTP and login DTOs
//!   - **[`dto::kyc`]**: The farmer KYC entity graph (identity, contact,
//!     address, farm plots and their crops)
//!   - **[`dto::device`]**: Sensor devices and readings
//!   - **[`dto::admin`]**: Admin-console resources (master data,
//!     subscriptions, dashboard stats, KYC review)
//!   - **[`dto::crops`]**: Crop catalogue served by the remote API
//!   - **[`dto::alerts`]**: Farmer alerts/notifications
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using default `serde` behavior:
//! - Field names are **snake_case** in Rust and on the wire
//! - Optional fields are omitted when `None`
//!   (`#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Enums with a wire representation use `#[serde(rename_all = "lowercase")]`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage in the client
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     mobile: "9876543210".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("9876543210"));
//! ```

pub mod dto;

// Re-export commonly used types for convenience.
// Wildcard re-exports are deliberate: shared is a DTO library where every
// export is public API.
pub use dto::*;
