//! Site footer shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-col">
                    <span class="brand-green">"Agri"</span><span class="brand-dark">"Sense"</span>
                    <p class="text-muted">
                        "Soil sensors, crop intelligence and advisory for small farms."
                    </p>
                </div>
                <div class="footer-col">
                    <h4>"Explore"</h4>
                    <A href="/service" {..} class="footer-link">"Services"</A>
                    <A href="/gallery" {..} class="footer-link">"Gallery"</A>
                    <A href="/crops" {..} class="footer-link">"Crop Library"</A>
                </div>
                <div class="footer-col">
                    <h4>"Farmers"</h4>
                    <A href="/farmer-registration" {..} class="footer-link">"Register"</A>
                    <A href="/device-setup" {..} class="footer-link">"Device Setup"</A>
                    <A href="/kyc-update" {..} class="footer-link">"KYC"</A>
                </div>
            </div>
            <p class="footer-note">"© 2026 AgriSense. All rights reserved."</p>
        </footer>
    }
}
