use serde::{Deserialize, Serialize};

/// Provisioned sensor device, as listed by the device endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceDto {
    pub id: String,
    pub serial: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_id: Option<String>,
    pub status: DeviceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Unclaimed,
    Active,
    Offline,
    Retired,
}

/// A farmer claiming a device during setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceClaimRequest {
    pub serial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_id: Option<String>,
}

/// Admin create/update of a device record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceUpsert {
    pub serial: String,
    pub model: String,
    pub status: DeviceStatus,
}

/// One sensor reading as returned by the device-data endpoints (and fed to
/// the local crop-health analysis).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorSnapshot {
    pub soil_moisture: f64,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub recorded_at: String,
}
