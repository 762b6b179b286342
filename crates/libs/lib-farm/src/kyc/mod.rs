//! # KYC Wizard
//!
//! The four-step KYC form is the largest piece of client logic in the app:
//! identity and contact details (step 1), address (step 2), farm plots with
//! their crops (step 3) and review/submit (step 4).
//!
//! The state machine is explicit and pure: [`Step`] transitions are clamped
//! functions, plot/crop assembly goes through scratch builders that validate
//! before committing, and the single network submit is left to the caller.

pub mod draft;
pub mod wizard;

pub use draft::{DraftCrop, DraftError, DraftPlot};
pub use wizard::{KycWizard, SavedPlot, Step, SubmissionMode};
