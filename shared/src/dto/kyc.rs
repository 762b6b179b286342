//! Farmer KYC entity graph.
//!
//! [`KycData`] is the single payload submitted (create or update) at the end
//! of the four-step KYC wizard. The review step renders exactly this
//! structure, so the wire shape and the in-memory shape are one and the same.

use serde::{Deserialize, Serialize};

/// Review status of a submitted KYC record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Pending,
    Verified,
    Rejected,
}

/// Step-1 data: who the farmer is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub full_name: String,
    pub gender: String,
}

/// Step-1 data: how to reach the farmer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub alternate_mobile: String,
    pub whatsapp_number: String,
    pub email: String,
    pub preferred_language: String,
    /// Preferred communication channels, e.g. "sms", "whatsapp", "call".
    pub contact_methods: Vec<String>,
}

/// Step-2 data: where the farm is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub state: String,
    pub district: String,
    pub taluk: String,
    pub village: String,
    pub full_address: String,
    pub pin_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// One crop grown on a plot.
///
/// This is the single canonical crop shape; a batch-add stamps the same
/// common fields onto every crop name selected in that batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CropInfo {
    pub crop_name: String,
    pub variety: String,
    pub season: String,
    pub harvest_window: String,
    pub major_problems: Vec<String>,
    pub is_primary: bool,
}

/// One farm plot. Immutable once appended to [`KycData::farm_plots`];
/// corrections are delete-and-re-add.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FarmPlot {
    /// Client-assigned identifier, generated at save time.
    pub plot_id: String,
    pub ownership_type: String,
    pub total_area: f64,
    pub irrigated_area: f64,
    pub rainfed_area: f64,
    pub area_unit: String,
    pub water_sources: Vec<String>,
    pub irrigation_methods: Vec<String>,
    pub soil_type: String,
    pub soil_tested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_test_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_report_ref: Option<String>,
    pub crops: Vec<CropInfo>,
}

/// Aggregate KYC payload: identity + contact + address + plots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KycData {
    pub identity: Identity,
    pub contact: Contact,
    pub address: Address,
    pub farm_plots: Vec<FarmPlot>,
}

/// A KYC record as stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KycRecord {
    pub id: String,
    pub status: KycStatus,
    #[serde(flatten)]
    pub data: KycData,
    pub submitted_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_mobile: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_kyc() -> KycData {
        KycData {
            identity: Identity {
                full_name: "Asha Patil".into(),
                gender: "female".into(),
            },
            contact: Contact {
                alternate_mobile: "9876500000".into(),
                whatsapp_number: "9876543210".into(),
                email: "asha@example.com".into(),
                preferred_language: "mr".into(),
                contact_methods: vec!["whatsapp".into(), "sms".into()],
            },
            address: Address {
                state: "Maharashtra".into(),
                district: "Pune".into(),
                taluk: "Haveli".into(),
                village: "Wagholi".into(),
                full_address: "Plot 12, Wagholi".into(),
                pin_code: "412207".into(),
                latitude: Some(18.58),
                longitude: None,
            },
            farm_plots: vec![FarmPlot {
                plot_id: "plot-1700000000000".into(),
                ownership_type: "owned".into(),
                total_area: 2.5,
                irrigated_area: 1.5,
                rainfed_area: 1.0,
                area_unit: "acre".into(),
                water_sources: vec!["borewell".into()],
                irrigation_methods: vec!["drip".into()],
                soil_type: "black".into(),
                soil_tested: true,
                soil_test_date: Some("2025-11-02".into()),
                soil_report_ref: None,
                crops: vec![CropInfo {
                    crop_name: "Tomato".into(),
                    variety: "Pusa Ruby".into(),
                    season: "rabi".into(),
                    harvest_window: "Feb-Mar".into(),
                    major_problems: vec!["blight".into()],
                    is_primary: true,
                }],
            }],
        }
    }

    #[test]
    fn kyc_data_round_trips_field_for_field() {
        let data = sample_kyc();
        let json = serde_json::to_string(&data).unwrap();
        let back: KycData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn absent_geo_coordinates_are_omitted_from_wire() {
        let data = sample_kyc();
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("latitude"));
        assert!(!json.contains("longitude"));
    }

    #[test]
    fn kyc_record_flattens_data() {
        let record = KycRecord {
            id: "k1".into(),
            status: KycStatus::Pending,
            data: sample_kyc(),
            submitted_at: "2026-01-05T09:00:00Z".into(),
            farmer_name: None,
            farmer_mobile: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        // Flattened: identity sits at the top level, not under "data".
        assert!(json.contains("\"identity\""));
        assert!(!json.contains("\"data\""));
        let back: KycRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
