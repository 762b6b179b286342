use serde::{Deserialize, Serialize};

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_farmers: u64,
    pub pending_kyc: u64,
    pub active_devices: u64,
    pub active_subscriptions: u64,
}

/// One entry of an admin-managed lookup list (states, soil types,
/// water sources, languages, ...). `category` names the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MasterDataItem {
    pub id: String,
    pub category: String,
    pub value: String,
}

/// Payload for creating or updating a master-data entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MasterDataUpsert {
    pub category: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Cancelled,
}

/// A farmer's subscription as shown in the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionDto {
    pub id: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub plan: String,
    pub status: SubscriptionStatus,
    pub started_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Admin edit of a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionUpdate {
    pub plan: String,
    pub status: SubscriptionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Admin decision on a pending KYC record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KycDecisionRequest {
    pub status: super::kyc::KycStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Admin edit of a user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUserUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: super::auth::Role,
}
