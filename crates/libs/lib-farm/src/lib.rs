//! # Farm Domain Library
//!
//! Pure domain logic for the farm portal, kept free of DOM and network
//! concerns so it tests natively:
//!
//! - **[`kyc`]**: the four-step KYC wizard state machine and its
//!   scratch-record builders ([`kyc::DraftPlot`], [`kyc::DraftCrop`])
//! - **[`analysis`]**: the weighted crop-health score over a sensor reading
//! - **[`cropdb`]**: the hand-authored crop knowledge table
//! - **[`session`]**: the auth session store over a pluggable storage port
//!
//! The web client drives these from its pages; nothing in this crate
//! performs I/O beyond the injected [`session::SessionStorage`] port.

pub mod analysis;
pub mod cropdb;
pub mod kyc;
pub mod session;

pub use analysis::{analyze, HealthLabel, HealthReport};
pub use kyc::{DraftCrop, DraftError, DraftPlot, KycWizard, Step, SubmissionMode};
pub use session::{SessionStorage, SessionStore};
