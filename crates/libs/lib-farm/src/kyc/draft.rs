//! Scratch-record builders for step 3 of the KYC wizard.
//!
//! The user edits a [`DraftPlot`] and a [`DraftCrop`] independently. Both
//! follow the same discipline: `validate()` is a pure guard, `commit`
//! returns a NEW list instead of mutating in place, and a failed guard
//! performs no mutation at all. A saved plot is immutable; corrections are
//! delete-and-re-add.

use shared::dto::kyc::{CropInfo, FarmPlot};
use thiserror::Error;

/// Guard failures raised while assembling a plot. These block a local
/// transition and never reach the network.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Select at least one crop")]
    NoCropSelected,
    #[error("Season is required")]
    MissingSeason,
    #[error("Ownership type is required")]
    MissingOwnership,
    #[error("Total area must be greater than zero")]
    InvalidArea,
}

/// Scratch crop record: a set of selected crop names plus the common
/// fields stamped onto every one of them on commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftCrop {
    pub selected_names: Vec<String>,
    pub variety: String,
    pub season: String,
    pub harvest_window: String,
    pub major_problems: Vec<String>,
    pub is_primary: bool,
}

impl DraftCrop {
    /// Toggle a crop name in the selection set.
    pub fn toggle_name(&mut self, name: &str) {
        if let Some(pos) = self.selected_names.iter().position(|n| n == name) {
            self.selected_names.remove(pos);
        } else {
            self.selected_names.push(name.to_string());
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_names.iter().any(|n| n == name)
    }

    /// A batch-add requires at least one selected crop name and a season.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.selected_names.is_empty() {
            return Err(DraftError::NoCropSelected);
        }
        if self.season.trim().is_empty() {
            return Err(DraftError::MissingSeason);
        }
        Ok(())
    }

    /// Append one [`CropInfo`] per selected name to `crops`, returning the
    /// new list. Every entry shares the identical common fields. Fails
    /// without touching anything when the guard fails.
    pub fn commit(&self, crops: &[CropInfo]) -> Result<Vec<CropInfo>, DraftError> {
        self.validate()?;
        let mut out = crops.to_vec();
        for name in &self.selected_names {
            out.push(CropInfo {
                crop_name: name.clone(),
                variety: self.variety.clone(),
                season: self.season.clone(),
                harvest_window: self.harvest_window.clone(),
                major_problems: self.major_problems.clone(),
                is_primary: self.is_primary,
            });
        }
        Ok(out)
    }
}

/// Scratch plot record, committed into `KycData::farm_plots` once valid.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPlot {
    pub ownership_type: String,
    pub total_area: f64,
    pub irrigated_area: f64,
    pub rainfed_area: f64,
    pub area_unit: String,
    pub water_sources: Vec<String>,
    pub irrigation_methods: Vec<String>,
    pub soil_type: String,
    pub soil_tested: bool,
    pub soil_test_date: Option<String>,
    pub soil_report_ref: Option<String>,
    pub crops: Vec<CropInfo>,
}

impl Default for DraftPlot {
    fn default() -> Self {
        Self {
            ownership_type: String::new(),
            total_area: 0.0,
            irrigated_area: 0.0,
            rainfed_area: 0.0,
            area_unit: "acre".to_string(),
            water_sources: Vec::new(),
            irrigation_methods: Vec::new(),
            soil_type: String::new(),
            soil_tested: false,
            soil_test_date: None,
            soil_report_ref: None,
            crops: Vec::new(),
        }
    }
}

impl DraftPlot {
    /// A plot is only appendable with a positive total area and an
    /// ownership type.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.total_area <= 0.0 {
            return Err(DraftError::InvalidArea);
        }
        if self.ownership_type.trim().is_empty() {
            return Err(DraftError::MissingOwnership);
        }
        Ok(())
    }

    /// Remove an accumulated crop by index. Out-of-range is a no-op;
    /// saved plots are never edited through this path.
    pub fn remove_crop(&mut self, index: usize) {
        if index < self.crops.len() {
            self.crops.remove(index);
        }
    }

    /// Append a copy of this draft (with whatever crops were accumulated,
    /// zero included) under `plot_id`, returning the new plot list.
    pub fn commit(&self, plots: &[FarmPlot], plot_id: String) -> Result<Vec<FarmPlot>, DraftError> {
        self.validate()?;
        let mut out = plots.to_vec();
        out.push(FarmPlot {
            plot_id,
            ownership_type: self.ownership_type.clone(),
            total_area: self.total_area,
            irrigated_area: self.irrigated_area,
            rainfed_area: self.rainfed_area,
            area_unit: self.area_unit.clone(),
            water_sources: self.water_sources.clone(),
            irrigation_methods: self.irrigation_methods.clone(),
            soil_type: self.soil_type.clone(),
            soil_tested: self.soil_tested,
            soil_test_date: self.soil_test_date.clone(),
            soil_report_ref: self.soil_report_ref.clone(),
            crops: self.crops.clone(),
        });
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop_draft(names: &[&str], season: &str) -> DraftCrop {
        DraftCrop {
            selected_names: names.iter().map(|n| n.to_string()).collect(),
            variety: "local".into(),
            season: season.into(),
            harvest_window: "Feb-Mar".into(),
            major_problems: vec!["blight".into()],
            is_primary: true,
        }
    }

    #[test]
    fn crop_commit_requires_selection() {
        let draft = crop_draft(&[], "rabi");
        assert_eq!(draft.commit(&[]), Err(DraftError::NoCropSelected));
    }

    #[test]
    fn crop_commit_requires_season() {
        let draft = crop_draft(&["Tomato"], "  ");
        assert_eq!(draft.commit(&[]), Err(DraftError::MissingSeason));
    }

    #[test]
    fn crop_commit_stamps_common_fields_on_each_name() {
        let draft = crop_draft(&["Tomato", "Onion", "Chilli"], "rabi");
        let crops = draft.commit(&[]).unwrap();
        assert_eq!(crops.len(), 3);
        for (crop, name) in crops.iter().zip(["Tomato", "Onion", "Chilli"]) {
            assert_eq!(crop.crop_name, name);
            assert_eq!(crop.variety, "local");
            assert_eq!(crop.season, "rabi");
            assert_eq!(crop.harvest_window, "Feb-Mar");
            assert_eq!(crop.major_problems, vec!["blight".to_string()]);
            assert!(crop.is_primary);
        }
    }

    #[test]
    fn crop_commit_appends_to_existing_list_without_mutating_input() {
        let existing = crop_draft(&["Maize"], "kharif").commit(&[]).unwrap();
        let draft = crop_draft(&["Tomato"], "rabi");
        let combined = draft.commit(&existing).unwrap();
        assert_eq!(existing.len(), 1);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined[1].crop_name, "Tomato");
    }

    #[test]
    fn toggle_name_adds_and_removes() {
        let mut draft = DraftCrop::default();
        draft.toggle_name("Tomato");
        assert!(draft.is_selected("Tomato"));
        draft.toggle_name("Tomato");
        assert!(!draft.is_selected("Tomato"));
    }

    #[test]
    fn plot_commit_rejects_zero_area() {
        let draft = DraftPlot {
            ownership_type: "owned".into(),
            ..Default::default()
        };
        assert_eq!(draft.commit(&[], "p1".into()), Err(DraftError::InvalidArea));
    }

    #[test]
    fn plot_commit_rejects_missing_ownership() {
        let draft = DraftPlot {
            total_area: 2.0,
            ..Default::default()
        };
        assert_eq!(
            draft.commit(&[], "p1".into()),
            Err(DraftError::MissingOwnership)
        );
    }

    #[test]
    fn plot_commit_allows_zero_crops() {
        let draft = DraftPlot {
            ownership_type: "leased".into(),
            total_area: 1.0,
            ..Default::default()
        };
        let plots = draft.commit(&[], "p1".into()).unwrap();
        assert_eq!(plots.len(), 1);
        assert!(plots[0].crops.is_empty());
    }

    #[test]
    fn remove_crop_out_of_range_is_noop() {
        let mut draft = DraftPlot::default();
        draft.crops = crop_draft(&["Tomato"], "rabi").commit(&[]).unwrap();
        draft.remove_crop(5);
        assert_eq!(draft.crops.len(), 1);
        draft.remove_crop(0);
        assert!(draft.crops.is_empty());
    }
}
