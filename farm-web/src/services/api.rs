//! REST client for the remote farm API.
//!
//! One configured surface for the whole app: every request goes through the
//! helpers in this module, which attach the bearer token when a session
//! exists and intercept 401 globally (clear session, force `/login`).
//! Endpoints are grouped the way the API groups them: [`auth`],
//! [`profile`], [`kyc`], [`crops`], [`alerts`], [`devices`], [`admin`].

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shared::dto::auth::ErrorResponse;

use crate::state::session::session_store;
use crate::utils::constants::API_BASE;

/// Client-visible request failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Session expired, please log in again")]
    Unauthorized,
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Attach `Authorization: Bearer <token>` when a token is persisted.
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session_store().token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// 401 handling overrides any local error display: drop the session and
/// force navigation to the login route, keeping the interrupted path so
/// login can return there.
fn force_logout() {
    session_store().logout();
    if let Some(window) = web_sys::window() {
        let target = match window.location().pathname() {
            Ok(path) if path != "/login" => {
                format!("/login?redirect={}", urlencoding::encode(&path))
            }
            _ => "/login".to_string(),
        };
        window.location().set_href(&target).ok();
    }
}

async fn handle<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if response.status() == 401 {
        force_logout();
        return Err(ApiError::Unauthorized);
    }
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("Request failed with status {}", status),
        };
        Err(ApiError::Api { status, message })
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = authorized(Request::get(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = authorized(Request::post(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(response).await
}

async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = authorized(Request::put(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(response).await
}

async fn delete_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = authorized(Request::delete(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(response).await
}

pub mod auth {
    use super::*;
    use shared::dto::auth::{
        AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, OtpLoginRequest,
        RegisterRequest, ResetPasswordRequest, UserProfile, VerifyLoginOtpRequest,
        VerifyOtpRequest,
    };

    pub async fn register(request: &RegisterRequest) -> ApiResult<MessageResponse> {
        post_json("/api/auth/register", request).await
    }

    pub async fn verify_otp(request: &VerifyOtpRequest) -> ApiResult<AuthResponse> {
        post_json("/api/auth/verify-otp", request).await
    }

    pub async fn login(request: &LoginRequest) -> ApiResult<AuthResponse> {
        post_json("/api/auth/login", request).await
    }

    pub async fn request_login_otp(request: &OtpLoginRequest) -> ApiResult<MessageResponse> {
        post_json("/api/auth/login-otp", request).await
    }

    pub async fn verify_login_otp(request: &VerifyLoginOtpRequest) -> ApiResult<AuthResponse> {
        post_json("/api/auth/verify-login-otp", request).await
    }

    pub async fn forgot_password(request: &ForgotPasswordRequest) -> ApiResult<MessageResponse> {
        post_json("/api/auth/forgot-password", request).await
    }

    pub async fn reset_password(request: &ResetPasswordRequest) -> ApiResult<MessageResponse> {
        post_json("/api/auth/reset-password", request).await
    }

    pub async fn me() -> ApiResult<UserProfile> {
        get_json("/api/auth/me").await
    }
}

pub mod profile {
    use super::*;
    use shared::dto::auth::{UpdateProfileRequest, UserProfile};

    pub async fn get() -> ApiResult<UserProfile> {
        get_json("/api/profile").await
    }

    pub async fn update(request: &UpdateProfileRequest) -> ApiResult<UserProfile> {
        put_json("/api/profile", request).await
    }
}

pub mod kyc {
    use super::*;
    use shared::dto::kyc::{FarmPlot, KycData, KycRecord};

    pub async fn submit(data: &KycData) -> ApiResult<KycRecord> {
        post_json("/api/kyc", data).await
    }

    /// The caller's own record; `None` when nothing was ever submitted.
    pub async fn get_mine() -> ApiResult<Option<KycRecord>> {
        match get_json::<KycRecord>("/api/kyc/me").await {
            Ok(record) => Ok(Some(record)),
            Err(ApiError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn update(kyc_id: &str, data: &KycData) -> ApiResult<KycRecord> {
        put_json(&format!("/api/kyc/{}", kyc_id), data).await
    }

    pub async fn add_plot(plot: &FarmPlot) -> ApiResult<KycRecord> {
        post_json("/api/kyc/plots", plot).await
    }
}

pub mod crops {
    use super::*;
    use shared::dto::crops::{CropDetail, CropSummary};

    pub async fn list() -> ApiResult<Vec<CropSummary>> {
        get_json("/api/crops").await
    }

    pub async fn categories() -> ApiResult<Vec<String>> {
        get_json("/api/crops/categories").await
    }

    pub async fn detail(crop_id: &str) -> ApiResult<CropDetail> {
        get_json(&format!("/api/crops/{}", crop_id)).await
    }
}

pub mod alerts {
    use super::*;
    use shared::dto::alerts::Alert;
    use shared::dto::auth::MessageResponse;

    pub async fn list() -> ApiResult<Vec<Alert>> {
        get_json("/api/alerts").await
    }

    pub async fn mark_read(alert_id: &str) -> ApiResult<MessageResponse> {
        post_json(&format!("/api/alerts/{}/read", alert_id), &()).await
    }

    pub async fn mark_all_read() -> ApiResult<MessageResponse> {
        post_json("/api/alerts/read-all", &()).await
    }
}

pub mod devices {
    use super::*;
    use shared::dto::device::{DeviceClaimRequest, DeviceDto, SensorSnapshot};

    pub async fn claim(request: &DeviceClaimRequest) -> ApiResult<DeviceDto> {
        post_json("/api/devices/claim", request).await
    }

    pub async fn mine() -> ApiResult<Vec<DeviceDto>> {
        get_json("/api/devices/mine").await
    }

    pub async fn latest_reading(device_id: &str) -> ApiResult<SensorSnapshot> {
        get_json(&format!("/api/devices/{}/latest", device_id)).await
    }
}

pub mod admin {
    use super::*;
    use shared::dto::admin::{
        AdminUserUpdate, DashboardStats, KycDecisionRequest, MasterDataItem, MasterDataUpsert,
        SubscriptionDto, SubscriptionUpdate,
    };
    use shared::dto::auth::{MessageResponse, UserProfile};
    use shared::dto::crops::{CropDetail, CropUpsert};
    use shared::dto::device::{DeviceDto, DeviceUpsert};
    use shared::dto::kyc::KycRecord;

    pub async fn dashboard() -> ApiResult<DashboardStats> {
        get_json("/api/admin/dashboard").await
    }

    pub async fn users() -> ApiResult<Vec<UserProfile>> {
        get_json("/api/admin/users").await
    }

    pub async fn update_user(user_id: &str, request: &AdminUserUpdate) -> ApiResult<UserProfile> {
        put_json(&format!("/api/admin/users/{}", user_id), request).await
    }

    pub async fn pending_kyc() -> ApiResult<Vec<KycRecord>> {
        get_json("/api/admin/kyc/pending").await
    }

    pub async fn decide_kyc(
        kyc_id: &str,
        request: &KycDecisionRequest,
    ) -> ApiResult<MessageResponse> {
        post_json(&format!("/api/admin/kyc/{}/verify", kyc_id), request).await
    }

    pub async fn devices() -> ApiResult<Vec<DeviceDto>> {
        get_json("/api/admin/devices").await
    }

    pub async fn create_device(request: &DeviceUpsert) -> ApiResult<DeviceDto> {
        post_json("/api/admin/devices", request).await
    }

    pub async fn update_device(device_id: &str, request: &DeviceUpsert) -> ApiResult<DeviceDto> {
        put_json(&format!("/api/admin/devices/{}", device_id), request).await
    }

    pub async fn delete_device(device_id: &str) -> ApiResult<MessageResponse> {
        delete_json(&format!("/api/admin/devices/{}", device_id)).await
    }

    pub async fn subscriptions() -> ApiResult<Vec<SubscriptionDto>> {
        get_json("/api/admin/subscriptions").await
    }

    pub async fn update_subscription(
        subscription_id: &str,
        request: &SubscriptionUpdate,
    ) -> ApiResult<SubscriptionDto> {
        put_json(
            &format!("/api/admin/subscriptions/{}", subscription_id),
            request,
        )
        .await
    }

    pub async fn crops() -> ApiResult<Vec<CropDetail>> {
        get_json("/api/admin/crops").await
    }

    pub async fn create_crop(request: &CropUpsert) -> ApiResult<CropDetail> {
        post_json("/api/admin/crops", request).await
    }

    pub async fn update_crop(crop_id: &str, request: &CropUpsert) -> ApiResult<CropDetail> {
        put_json(&format!("/api/admin/crops/{}", crop_id), request).await
    }

    pub async fn delete_crop(crop_id: &str) -> ApiResult<MessageResponse> {
        delete_json(&format!("/api/admin/crops/{}", crop_id)).await
    }

    pub async fn master_data() -> ApiResult<Vec<MasterDataItem>> {
        get_json("/api/admin/master-data").await
    }

    pub async fn create_master_data(request: &MasterDataUpsert) -> ApiResult<MasterDataItem> {
        post_json("/api/admin/master-data", request).await
    }

    pub async fn update_master_data(
        item_id: &str,
        request: &MasterDataUpsert,
    ) -> ApiResult<MasterDataItem> {
        put_json(&format!("/api/admin/master-data/{}", item_id), request).await
    }

    pub async fn delete_master_data(item_id: &str) -> ApiResult<MessageResponse> {
        delete_json(&format!("/api/admin/master-data/{}", item_id)).await
    }
}
