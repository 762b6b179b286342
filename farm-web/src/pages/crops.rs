//! Crop library: the bundled knowledge base merged with the remote
//! catalogue, browsable by category with a detail page per crop.
//!
//! The bundled table always renders (offline-safe, carries care notes);
//! admin-added catalogue crops appear alongside it unless they shadow a
//! bundled name. Detail lookups resolve the bundled table first and fall
//! back to the catalogue.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use lib_farm::cropdb::{self, CropEntry};
use shared::{CropDetail, CropSummary};

use crate::services::api;
use crate::utils::scope::PageScope;

#[component]
pub fn CropsPage() -> impl IntoView {
    let scope = PageScope::new();

    let (category, set_category) = signal(None::<String>);
    let (remote, set_remote) = signal(Vec::<CropSummary>::new());
    let (remote_categories, set_remote_categories) = signal(Vec::<String>::new());

    // Catalogue fetch failure just leaves the bundled table on its own.
    {
        let scope = scope.clone();
        spawn_local(async move {
            let list = api::crops::list().await;
            let categories = api::crops::categories().await;
            if !scope.is_alive() {
                return;
            }
            match list {
                Ok(list) => set_remote.set(list),
                Err(e) => log::warn!("crop catalogue unavailable: {}", e),
            }
            if let Ok(categories) = categories {
                set_remote_categories.set(categories);
            }
        });
    }

    let all_categories = move || {
        let mut names: Vec<String> =
            cropdb::categories().iter().map(|c| c.to_string()).collect();
        for name in remote_categories.get() {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&name)) {
                names.push(name);
            }
        }
        names
    };

    view! {
        <div class="page">
            <h1>"Crop Library"</h1>
            <div class="tab-row">
                <button
                    class="btn btn-small"
                    class=("tab-active", move || category.get().is_none())
                    on:click=move |_| set_category.set(None)
                >"All"</button>
                {move || all_categories().into_iter().map(|cat| {
                    let label = cat.clone();
                    let select = cat.clone();
                    let active = cat.clone();
                    view! {
                        <button
                            class="btn btn-small"
                            class=("tab-active", move || category.get().as_deref() == Some(active.as_str()))
                            on:click=move |_| set_category.set(Some(select.clone()))
                        >{label}</button>
                    }
                }).collect_view()}
            </div>
            <div class="crop-grid">
                {move || {
                    let filter = category.get();
                    let entries: Vec<&'static CropEntry> = match filter.as_deref() {
                        Some(cat) => cropdb::by_category(cat),
                        None => cropdb::all().iter().collect(),
                    };
                    let bundled = entries.into_iter().map(|entry| view! {
                        <div class="card">
                            <h3>{entry.name}</h3>
                            <p class="text-muted">{entry.category}</p>
                            <p>{format!("Seasons: {}", entry.seasons.join(", "))}</p>
                            <p>{format!("Duration: {}", entry.duration)}</p>
                            <A
                                href=format!("/crops/{}", urlencoding::encode(entry.name))
                                {..}
                                class="btn btn-small"
                            >"Details"</A>
                        </div>
                    }).collect_view();
                    let extras = remote.get().into_iter()
                        .filter(|summary| cropdb::find(&summary.name).is_none())
                        .filter(|summary| match filter.as_deref() {
                            Some(cat) => summary.category.eq_ignore_ascii_case(cat),
                            None => true,
                        })
                        .map(|summary| view! {
                            <div class="card">
                                <h3>{summary.name.clone()}</h3>
                                <p class="text-muted">{summary.category.clone()}</p>
                                <A
                                    href=format!("/crops/{}", urlencoding::encode(&summary.name))
                                    {..}
                                    class="btn btn-small"
                                >"Details"</A>
                            </div>
                        })
                        .collect_view();
                    view! { {bundled} {extras} }
                }}
            </div>
        </div>
    }
}

#[component]
pub fn CropDetailPage() -> impl IntoView {
    let params = use_params_map();
    let scope = PageScope::new();

    let crop_name = move || {
        params
            .read()
            .get("crop_name")
            .and_then(|raw| urlencoding::decode(&raw).map(|c| c.into_owned()).ok())
            .unwrap_or_default()
    };

    let (remote_detail, set_remote_detail) = signal(None::<CropDetail>);
    let (remote_missed, set_remote_missed) = signal(false);

    // Catalogue fallback kicks in only when the bundled table misses.
    Effect::new(move |_| {
        let name = crop_name();
        if name.is_empty() || cropdb::find(&name).is_some() {
            return;
        }
        let scope = scope.clone();
        spawn_local(async move {
            let found = match api::crops::list().await {
                Ok(list) => {
                    match list.iter().find(|s| s.name.eq_ignore_ascii_case(&name)) {
                        Some(summary) => api::crops::detail(&summary.id).await.ok(),
                        None => None,
                    }
                }
                Err(e) => {
                    log::warn!("crop catalogue unavailable: {}", e);
                    None
                }
            };
            if !scope.is_alive() {
                return;
            }
            match found {
                Some(detail) => set_remote_detail.set(Some(detail)),
                None => set_remote_missed.set(true),
            }
        });
    });

    view! {
        <div class="page">
            {move || {
                let name = crop_name();
                if let Some(entry) = cropdb::find(&name) {
                    return view! { <BundledDetail entry/> }.into_any();
                }
                if let Some(detail) = remote_detail.get() {
                    return view! { <CatalogueDetail detail/> }.into_any();
                }
                if remote_missed.get() {
                    view! {
                        <div class="card" style="max-width: 640px; margin: 0 auto;">
                            <h1>"Crop not found"</h1>
                            <p class="text-muted">"That crop is not in the library."</p>
                            <A href="/crops" {..} class="btn">"Back to library"</A>
                        </div>
                    }.into_any()
                } else {
                    view! { <p class="text-muted">"Loading crop..."</p> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn BundledDetail(entry: &'static CropEntry) -> impl IntoView {
    view! {
        <div class="card" style="max-width: 640px; margin: 0 auto;">
            <h1>{entry.name}</h1>
            <p class="text-muted">{entry.category}</p>
            <table class="data-table">
                <tbody>
                    <tr><td>"Seasons"</td><td>{entry.seasons.join(", ")}</td></tr>
                    <tr><td>"Soil types"</td><td>{entry.soil_types.join(", ")}</td></tr>
                    <tr><td>"Water needs"</td><td>{entry.water_needs}</td></tr>
                    <tr><td>"Duration"</td><td>{entry.duration}</td></tr>
                    <tr><td>"Varieties"</td><td>{entry.varieties.join(", ")}</td></tr>
                    <tr><td>"Common problems"</td><td>{entry.major_problems.join(", ")}</td></tr>
                </tbody>
            </table>
            <h3>"Care notes"</h3>
            <p>{entry.care_notes}</p>
            <A href="/crops" {..} class="btn">"Back to library"</A>
        </div>
    }
}

#[component]
fn CatalogueDetail(detail: CropDetail) -> impl IntoView {
    view! {
        <div class="card" style="max-width: 640px; margin: 0 auto;">
            <h1>{detail.name.clone()}</h1>
            <p class="text-muted">{detail.category.clone()}</p>
            <table class="data-table">
                <tbody>
                    <tr><td>"Seasons"</td><td>{detail.seasons.join(", ")}</td></tr>
                    <tr><td>"Soil types"</td><td>{detail.soil_types.join(", ")}</td></tr>
                </tbody>
            </table>
            <p>{detail.description.clone()}</p>
            <A href="/crops" {..} class="btn">"Back to library"</A>
        </div>
    }
}
