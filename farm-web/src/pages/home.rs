//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="page">
            <section class="hero">
                <h1>"Know your soil. Grow with confidence."</h1>
                <p class="hero-sub">
                    "AgriSense puts a soil lab on your farm: moisture, pH and NPK sensors, "
                    "crop-wise advisory and alerts in your own language."
                </p>
                <div class="hero-actions">
                    {move || if session.is_logged_in() {
                        view! {
                            <A href="/device-data" {..} class="btn btn-primary">"Open My Farm"</A>
                        }.into_any()
                    } else {
                        view! {
                            <span>
                                <A href="/farmer-registration" {..} class="btn btn-primary">"Join as a Farmer"</A>
                                <A href="/service" {..} class="btn">"Our Services"</A>
                            </span>
                        }.into_any()
                    }}
                </div>
            </section>

            <section class="feature-grid">
                <div class="card">
                    <h3>"Live Soil Sensing"</h3>
                    <p>"Field devices report moisture, pH, NPK, temperature and humidity around the clock."</p>
                </div>
                <div class="card">
                    <h3>"Crop Health Score"</h3>
                    <p>"Every reading becomes a single 0-100 health score with a factor-by-factor breakdown."</p>
                </div>
                <div class="card">
                    <h3>"Crop Library"</h3>
                    <p>"Season, soil and care guidance for the crops our farmers actually grow."</p>
                </div>
            </section>
        </div>
    }
}
