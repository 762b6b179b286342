//! Application shell: router over the public, farmer and admin surfaces.

use leptos::prelude::*;
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes, A},
    path,
};

use crate::components::{Footer, Navbar};
use crate::pages::admin::{
    AdminCropsPage, AdminDashboardPage, AdminDevicesPage, AdminKycPage, AdminLayout,
    AdminMasterDataPage, AdminSubscriptionsPage, AdminUsersPage,
};
use crate::pages::{
    AboutPage, ContactPage, CropAnalysisPage, CropDetailPage, CropsPage, DeviceDataPage,
    DeviceSetupPage, FarmerRegistrationPage, GalleryDetailsPage, GalleryPage, HomePage,
    KycUpdatePage, LoginPage, ProductDetailsPage, ProductListPage, ProfilePage,
    ServiceDetailsPage, ServicePage,
};
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    let session = provide_session_context();

    // The cached profile can go stale between visits (an admin may have
    // verified KYC in the meantime), so revalidate it once per page load.
    // A 401 here takes the normal forced-logout path inside the client.
    if session.is_logged_in() {
        leptos::task::spawn_local(async move {
            if let Ok(user) = crate::services::api::auth::me().await {
                session.refresh_user(user);
            }
        });
    }

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    // Public marketing pages
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/service") view=ServicePage/>
                    <Route path=path!("/service-details") view=ServiceDetailsPage/>
                    <Route path=path!("/gallery") view=GalleryPage/>
                    <Route path=path!("/gallery-details") view=GalleryDetailsPage/>
                    <Route path=path!("/product-list") view=ProductListPage/>
                    <Route path=path!("/product-details") view=ProductDetailsPage/>
                    <Route path=path!("/contact") view=ContactPage/>

                    // Farmer flows
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/farmer-registration") view=FarmerRegistrationPage/>
                    <Route path=path!("/kyc-update") view=KycUpdatePage/>
                    <Route path=path!("/device-setup") view=DeviceSetupPage/>
                    <Route path=path!("/device-data") view=DeviceDataPage/>
                    <Route path=path!("/crop-analysis") view=CropAnalysisPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                    <Route path=path!("/crops") view=CropsPage/>
                    <Route path=path!("/crops/:crop_name") view=CropDetailPage/>

                    // Admin console (nested layout, role-gated inside)
                    <ParentRoute path=path!("/admin") view=AdminLayout>
                        <Route path=path!("") view=AdminDashboardPage/>
                        <Route path=path!("users") view=AdminUsersPage/>
                        <Route path=path!("kyc") view=AdminKycPage/>
                        <Route path=path!("crops") view=AdminCropsPage/>
                        <Route path=path!("master-data") view=AdminMasterDataPage/>
                        <Route path=path!("devices") view=AdminDevicesPage/>
                        <Route path=path!("subscriptions") view=AdminSubscriptionsPage/>
                    </ParentRoute>
                </Routes>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-centered">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1>"404 - Page Not Found"</h1>
                <p class="text-muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
