//! Admin console: nested layout with its own navigation, each section a
//! fetch-list / edit / refetch page over the admin endpoints. The role gate
//! lives here; the API enforces the real authorization.

pub mod crops;
pub mod dashboard;
pub mod devices;
pub mod kyc;
pub mod master_data;
pub mod subscriptions;
pub mod users;

pub use crops::AdminCropsPage;
pub use dashboard::AdminDashboardPage;
pub use devices::AdminDevicesPage;
pub use kyc::AdminKycPage;
pub use master_data::AdminMasterDataPage;
pub use subscriptions::AdminSubscriptionsPage;
pub use users::AdminUsersPage;

use leptos::prelude::*;
use leptos_router::components::{Outlet, A};

use crate::state::session::use_session;

#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="admin-shell">
            {move || if session.is_admin() {
                view! {
                    <div class="admin-body">
                        <nav class="admin-nav">
                            <A href="/admin" {..} class="admin-link">"Dashboard"</A>
                            <A href="/admin/users" {..} class="admin-link">"Users"</A>
                            <A href="/admin/kyc" {..} class="admin-link">"KYC Review"</A>
                            <A href="/admin/crops" {..} class="admin-link">"Crops"</A>
                            <A href="/admin/master-data" {..} class="admin-link">"Master Data"</A>
                            <A href="/admin/devices" {..} class="admin-link">"Devices"</A>
                            <A href="/admin/subscriptions" {..} class="admin-link">"Subscriptions"</A>
                        </nav>
                        <main class="admin-content">
                            <Outlet/>
                        </main>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="page-centered">
                        <div class="card" style="max-width: 480px; text-align: center;">
                            <h1>"Admin access required"</h1>
                            <p class="text-muted">
                                "Sign in with an administrator account to use the console."
                            </p>
                            <A href="/login" {..} class="btn">"Go to login"</A>
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
