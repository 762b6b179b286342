//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card" style="max-width: 720px; margin: 0 auto;">
                <h1>"About AgriSense"</h1>
                <p>
                    "We build affordable soil-sensing kits and the software around them. "
                    "A farmer registers, completes a short KYC, claims a device, and from "
                    "then on the field reports its own condition."
                </p>
                <p>
                    "The portal you are using is the farmer's window into that data, and "
                    "the operations console our agronomy team uses to verify KYC records, "
                    "manage devices and keep the crop catalogue current."
                </p>
                <h3>"What we measure"</h3>
                <ul>
                    <li>"Soil moisture and temperature"</li>
                    <li>"pH and NPK nutrient levels"</li>
                    <li>"Ambient humidity"</li>
                </ul>
            </div>
        </div>
    }
}
