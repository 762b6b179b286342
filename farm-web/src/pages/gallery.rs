//! Gallery pages.

use leptos::prelude::*;
use leptos_router::components::A;

const GALLERY_ITEMS: &[(&str, &str)] = &[
    ("Sensor install, Wagholi", "/assets/gallery/install.jpg"),
    ("Drip retrofit on cotton", "/assets/gallery/drip.jpg"),
    ("Soil sampling day", "/assets/gallery/sampling.jpg"),
    ("Farmer training camp", "/assets/gallery/training.jpg"),
    ("Tomato harvest, Haveli", "/assets/gallery/harvest.jpg"),
    ("Monsoon field check", "/assets/gallery/monsoon.jpg"),
];

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Gallery"</h1>
            <div class="gallery-grid">
                {GALLERY_ITEMS.iter().map(|(caption, src)| view! {
                    <figure class="gallery-item">
                        <img src=*src alt=*caption/>
                        <figcaption>{*caption}</figcaption>
                    </figure>
                }).collect_view()}
            </div>
            <A href="/gallery-details" {..} class="text-link">"Field stories"</A>
        </div>
    }
}

#[component]
pub fn GalleryDetailsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card" style="max-width: 720px; margin: 0 auto;">
                <h1>"Field stories"</h1>
                <p>
                    "From the first pilot of twelve devices to sensor coverage across "
                    "four districts: photographs and notes from our field team."
                </p>
                <p class="text-muted">
                    "Want your farm featured? Tell us during your next service visit."
                </p>
            </div>
        </div>
    }
}
