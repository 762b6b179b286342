//! The four-step wizard state machine.
//!
//! Transitions are forward/backward only, clamped at both ends, with the
//! step-3 → step-4 edge gated on at least one saved farm plot. The wizard
//! never performs network I/O: the page layer reads [`KycWizard::payload`]
//! and makes the single create-or-update call dictated by
//! [`KycWizard::mode`]. On a failed call the wizard is simply left alone,
//! so the accumulated state survives intact.

use shared::dto::kyc::{KycData, KycRecord};

use super::draft::{DraftCrop, DraftError, DraftPlot};

/// The four wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Identity,
    Address,
    FarmPlots,
    Review,
}

impl Step {
    /// 1-based position for the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Step::Identity => 1,
            Step::Address => 2,
            Step::FarmPlots => 3,
            Step::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Identity => "Identity & Contact",
            Step::Address => "Address",
            Step::FarmPlots => "Farm Plots",
            Step::Review => "Review & Submit",
        }
    }

    fn forward(self) -> Step {
        match self {
            Step::Identity => Step::Address,
            Step::Address => Step::FarmPlots,
            Step::FarmPlots | Step::Review => Step::Review,
        }
    }

    fn backward(self) -> Step {
        match self {
            Step::Identity | Step::Address => Step::Identity,
            Step::FarmPlots => Step::Address,
            Step::Review => Step::FarmPlots,
        }
    }
}

/// Whether the terminal submit creates a new record or updates the one
/// loaded at mount. Fixed for the lifetime of the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionMode {
    Create,
    Update { kyc_id: String },
}

/// Outcome of a successful `add_farm_plot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPlot {
    pub plot_id: String,
    /// True when the plot was saved with zero crops; the UI shows a
    /// warning, not an error.
    pub without_crops: bool,
}

/// In-memory wizard state. Hydrated from a fetched record (if any) on
/// mount, mutated purely in memory across steps, discarded on unmount.
#[derive(Debug, Clone, PartialEq)]
pub struct KycWizard {
    step: Step,
    mode: SubmissionMode,
    pub data: KycData,
    pub draft_plot: DraftPlot,
    pub draft_crop: DraftCrop,
    last_plot_ms: i64,
}

impl KycWizard {
    /// Fresh wizard in create mode.
    pub fn new() -> Self {
        Self {
            step: Step::Identity,
            mode: SubmissionMode::Create,
            data: KycData::default(),
            draft_plot: DraftPlot::default(),
            draft_crop: DraftCrop::default(),
            last_plot_ms: 0,
        }
    }

    /// Wizard hydrated from an existing record: update mode, data
    /// pre-filled from the server copy.
    pub fn from_existing(record: KycRecord) -> Self {
        Self {
            step: Step::Identity,
            mode: SubmissionMode::Update { kyc_id: record.id },
            data: record.data,
            draft_plot: DraftPlot::default(),
            draft_crop: DraftCrop::default(),
            last_plot_ms: 0,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn mode(&self) -> &SubmissionMode {
        &self.mode
    }

    /// True when the step-3 → step-4 edge is open.
    pub fn can_enter_review(&self) -> bool {
        !self.data.farm_plots.is_empty()
    }

    /// Advance one step. Returns false (and stays put) at the last step or
    /// when entering review without any saved plot.
    pub fn next(&mut self) -> bool {
        if self.step == Step::Review {
            return false;
        }
        if self.step == Step::FarmPlots && !self.can_enter_review() {
            return false;
        }
        self.step = self.step.forward();
        true
    }

    /// Go back one step. Returns false (and stays put) at the first step.
    pub fn back(&mut self) -> bool {
        if self.step == Step::Identity {
            return false;
        }
        self.step = self.step.backward();
        true
    }

    /// Batch-add the scratch crop into the scratch plot: one entry per
    /// selected name, then the scratch crop resets. On a guard failure
    /// nothing changes and the typed error is surfaced to the user.
    pub fn add_crop_to_plot(&mut self) -> Result<usize, DraftError> {
        let committed = self.draft_crop.commit(&self.draft_plot.crops)?;
        let added = committed.len() - self.draft_plot.crops.len();
        self.draft_plot.crops = committed;
        self.draft_crop = DraftCrop::default();
        Ok(added)
    }

    /// Save the scratch plot under a fresh unique id derived from
    /// `now_ms`, then reset both scratch records. Zero-crop plots are
    /// allowed and flagged via [`SavedPlot::without_crops`].
    pub fn add_farm_plot(&mut self, now_ms: i64) -> Result<SavedPlot, DraftError> {
        self.draft_plot.validate()?;
        let plot_id = self.next_plot_id(now_ms);
        let without_crops = self.draft_plot.crops.is_empty();
        self.data.farm_plots = self
            .draft_plot
            .commit(&self.data.farm_plots, plot_id.clone())?;
        self.draft_plot = DraftPlot::default();
        self.draft_crop = DraftCrop::default();
        Ok(SavedPlot {
            plot_id,
            without_crops,
        })
    }

    /// Unconditional removal by identifier; unknown ids are a no-op.
    pub fn remove_farm_plot(&mut self, plot_id: &str) {
        self.data.farm_plots.retain(|p| p.plot_id != plot_id);
    }

    /// Remove a crop accumulated on the scratch plot by index.
    pub fn remove_crop_from_draft(&mut self, index: usize) {
        self.draft_plot.remove_crop(index);
    }

    /// Submit is available only from the review step and only with at
    /// least one saved plot.
    pub fn can_submit(&self) -> bool {
        self.step == Step::Review && !self.data.farm_plots.is_empty()
    }

    /// The single payload posted at submit time.
    pub fn payload(&self) -> &KycData {
        &self.data
    }

    // Plot ids come from the wall clock; two saves inside the same
    // millisecond still get distinct ids through the monotonic bump.
    fn next_plot_id(&mut self, now_ms: i64) -> String {
        let ms = if now_ms <= self.last_plot_ms {
            self.last_plot_ms + 1
        } else {
            now_ms
        };
        self.last_plot_ms = ms;
        format!("plot-{}", ms)
    }
}

impl Default for KycWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::kyc::KycStatus;

    fn valid_plot_draft() -> DraftPlot {
        DraftPlot {
            ownership_type: "owned".into(),
            total_area: 2.5,
            ..Default::default()
        }
    }

    fn wizard_with_one_plot() -> KycWizard {
        let mut wizard = KycWizard::new();
        wizard.draft_plot = valid_plot_draft();
        wizard.add_farm_plot(1_000).unwrap();
        wizard
    }

    #[test]
    fn back_at_first_step_is_noop() {
        let mut wizard = KycWizard::new();
        assert!(!wizard.back());
        assert_eq!(wizard.step(), Step::Identity);
    }

    #[test]
    fn next_at_last_step_is_noop() {
        let mut wizard = wizard_with_one_plot();
        assert!(wizard.next());
        assert!(wizard.next());
        assert!(wizard.next());
        assert_eq!(wizard.step(), Step::Review);
        assert!(!wizard.next());
        assert_eq!(wizard.step(), Step::Review);
    }

    #[test]
    fn review_is_blocked_without_plots() {
        let mut wizard = KycWizard::new();
        wizard.next();
        wizard.next();
        assert_eq!(wizard.step(), Step::FarmPlots);
        assert!(!wizard.next());
        assert_eq!(wizard.step(), Step::FarmPlots);
    }

    #[test]
    fn no_step_skipping() {
        let mut wizard = wizard_with_one_plot();
        let mut seen = vec![wizard.step().number()];
        while wizard.next() {
            seen.push(wizard.step().number());
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn add_farm_plot_rejects_invalid_draft_without_mutation() {
        let mut wizard = KycWizard::new();
        wizard.draft_plot.total_area = 0.0;
        wizard.draft_plot.ownership_type = "owned".into();
        assert_eq!(wizard.add_farm_plot(1_000), Err(DraftError::InvalidArea));
        assert!(wizard.data.farm_plots.is_empty());

        wizard.draft_plot.total_area = 1.0;
        wizard.draft_plot.ownership_type = String::new();
        assert_eq!(
            wizard.add_farm_plot(1_000),
            Err(DraftError::MissingOwnership)
        );
        assert!(wizard.data.farm_plots.is_empty());
    }

    #[test]
    fn add_farm_plot_appends_exactly_one_plot_and_resets_drafts() {
        let mut wizard = KycWizard::new();
        wizard.draft_plot = valid_plot_draft();
        wizard.draft_crop.toggle_name("Tomato");
        wizard.draft_crop.season = "rabi".into();
        wizard.add_crop_to_plot().unwrap();

        let saved = wizard.add_farm_plot(1_000).unwrap();
        assert!(!saved.without_crops);
        assert_eq!(wizard.data.farm_plots.len(), 1);
        assert_eq!(wizard.data.farm_plots[0].crops.len(), 1);
        assert_eq!(wizard.draft_plot, DraftPlot::default());
        assert_eq!(wizard.draft_crop, DraftCrop::default());
    }

    #[test]
    fn plot_ids_are_unique_within_the_same_millisecond() {
        let mut wizard = KycWizard::new();
        wizard.draft_plot = valid_plot_draft();
        let first = wizard.add_farm_plot(1_000).unwrap();
        wizard.draft_plot = valid_plot_draft();
        let second = wizard.add_farm_plot(1_000).unwrap();
        assert_ne!(first.plot_id, second.plot_id);
        assert_eq!(first.plot_id, "plot-1000");
        assert_eq!(second.plot_id, "plot-1001");
    }

    #[test]
    fn zero_crop_plot_is_saved_with_warning_flag() {
        let mut wizard = KycWizard::new();
        wizard.draft_plot = valid_plot_draft();
        let saved = wizard.add_farm_plot(1_000).unwrap();
        assert!(saved.without_crops);
        assert_eq!(wizard.data.farm_plots.len(), 1);
    }

    #[test]
    fn add_crop_without_selection_never_mutates() {
        let mut wizard = KycWizard::new();
        wizard.draft_crop.season = "rabi".into();
        assert_eq!(wizard.add_crop_to_plot(), Err(DraftError::NoCropSelected));
        assert!(wizard.draft_plot.crops.is_empty());
        // Scratch crop untouched on failure.
        assert_eq!(wizard.draft_crop.season, "rabi");
    }

    #[test]
    fn add_crop_batch_appends_one_entry_per_name_then_resets() {
        let mut wizard = KycWizard::new();
        wizard.draft_crop.toggle_name("Tomato");
        wizard.draft_crop.toggle_name("Onion");
        wizard.draft_crop.season = "rabi".into();
        wizard.draft_crop.variety = "hybrid".into();

        let added = wizard.add_crop_to_plot().unwrap();
        assert_eq!(added, 2);
        assert_eq!(wizard.draft_plot.crops.len(), 2);
        assert!(wizard.draft_plot.crops.iter().all(|c| c.variety == "hybrid"));
        assert_eq!(wizard.draft_crop, DraftCrop::default());
    }

    #[test]
    fn remove_farm_plot_by_id() {
        let mut wizard = wizard_with_one_plot();
        let id = wizard.data.farm_plots[0].plot_id.clone();
        wizard.remove_farm_plot("no-such-plot");
        assert_eq!(wizard.data.farm_plots.len(), 1);
        wizard.remove_farm_plot(&id);
        assert!(wizard.data.farm_plots.is_empty());
    }

    #[test]
    fn submit_guard_requires_review_step_and_plots() {
        let mut wizard = wizard_with_one_plot();
        assert!(!wizard.can_submit());
        wizard.next();
        wizard.next();
        wizard.next();
        assert!(wizard.can_submit());

        let id = wizard.data.farm_plots[0].plot_id.clone();
        wizard.remove_farm_plot(&id);
        assert!(!wizard.can_submit());
    }

    #[test]
    fn mode_is_fixed_by_construction() {
        assert_eq!(*KycWizard::new().mode(), SubmissionMode::Create);

        let record = KycRecord {
            id: "k7".into(),
            status: KycStatus::Pending,
            data: KycData::default(),
            submitted_at: "2026-01-01T00:00:00Z".into(),
            farmer_name: None,
            farmer_mobile: None,
        };
        let wizard = KycWizard::from_existing(record);
        assert_eq!(
            *wizard.mode(),
            SubmissionMode::Update {
                kyc_id: "k7".into()
            }
        );
    }
}
