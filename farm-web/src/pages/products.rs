//! Product marketing pages.

use leptos::prelude::*;
use leptos_router::components::A;

struct Product {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product {
        name: "AgriSense Field Kit",
        price: "₹ 8,999",
        blurb: "Moisture, pH and NPK probes with a solar GSM gateway.",
    },
    Product {
        name: "AgriSense Mini",
        price: "₹ 3,499",
        blurb: "Single-probe moisture sensor for drip scheduling.",
    },
    Product {
        name: "Weather Mast",
        price: "₹ 12,499",
        blurb: "Temperature, humidity and rain gauge for a cluster of farms.",
    },
];

#[component]
pub fn ProductListPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Products"</h1>
            <div class="feature-grid">
                {PRODUCTS.iter().map(|p| view! {
                    <div class="card">
                        <h3>{p.name}</h3>
                        <p class="price">{p.price}</p>
                        <p>{p.blurb}</p>
                        <A href="/product-details" {..} class="text-link">"Details"</A>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card" style="max-width: 720px; margin: 0 auto;">
                <h1>"AgriSense Field Kit"</h1>
                <p class="price">"₹ 8,999 incl. first-year subscription"</p>
                <ul>
                    <li>"Probes: soil moisture, pH, N, P, K"</li>
                    <li>"Ambient: temperature, humidity"</li>
                    <li>"Uplink: GSM, hourly readings"</li>
                    <li>"Power: solar with 5-day battery reserve"</li>
                </ul>
                <p>
                    "Purchases are fulfilled through our district partners; after "
                    "delivery, claim the device with its serial number under "
                    <A href="/device-setup" {..} class="text-link">"Device Setup"</A>"."
                </p>
            </div>
        </div>
    }
}
