//! Services marketing pages: the overview grid and the detail view.

use leptos::prelude::*;
use leptos_router::components::A;

struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Soil Sensing Kits",
        blurb: "Solar-powered field devices reporting moisture, pH and NPK every hour.",
    },
    Service {
        title: "Crop Advisory",
        blurb: "Season-wise guidance tuned to your soil type and the crops you grow.",
    },
    Service {
        title: "Irrigation Alerts",
        blurb: "SMS and WhatsApp alerts when a plot drifts out of its moisture band.",
    },
    Service {
        title: "Soil Test Reports",
        blurb: "Lab-grade soil testing with a digital report attached to your KYC record.",
    },
];

#[component]
pub fn ServicePage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Services"</h1>
            <div class="feature-grid">
                {SERVICES.iter().map(|s| view! {
                    <div class="card">
                        <h3>{s.title}</h3>
                        <p>{s.blurb}</p>
                        <A href="/service-details" {..} class="text-link">"Learn more"</A>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ServiceDetailsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card" style="max-width: 720px; margin: 0 auto;">
                <h1>"How a sensing kit works"</h1>
                <p>
                    "Each kit carries a probe set for moisture, pH and NPK plus an "
                    "ambient sensor for temperature and humidity. Readings upload over "
                    "GSM; no Wi-Fi is needed on the farm."
                </p>
                <p>
                    "After device setup the dashboard shows the latest reading and a "
                    "computed crop-health score. Alerts fire when any factor leaves its "
                    "healthy band."
                </p>
                <A href="/device-setup" {..} class="btn btn-primary">"Set up a device"</A>
            </div>
        </div>
    }
}
