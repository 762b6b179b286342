//! Remote crop catalogue administration.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{CropDetail, CropUpsert};

use crate::services::api;
use crate::utils::scope::PageScope;

/// `None` id means the form creates a new catalogue entry.
#[derive(Clone, Default)]
struct CropForm {
    id: Option<String>,
    name: String,
    category: String,
    seasons: String,
    soil_types: String,
    description: String,
}

impl CropForm {
    fn from_detail(detail: &CropDetail) -> Self {
        Self {
            id: Some(detail.id.clone()),
            name: detail.name.clone(),
            category: detail.category.clone(),
            seasons: detail.seasons.join(", "),
            soil_types: detail.soil_types.join(", "),
            description: detail.description.clone(),
        }
    }

    fn to_upsert(&self) -> CropUpsert {
        CropUpsert {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            seasons: split_list(&self.seasons),
            soil_types: split_list(&self.soil_types),
            description: self.description.trim().to_string(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[component]
pub fn AdminCropsPage() -> impl IntoView {
    let scope = PageScope::new();

    let (crops, set_crops) = signal(Vec::<CropDetail>::new());
    let (form, set_form) = signal(None::<CropForm>);
    let (error, set_error) = signal(None::<String>);

    let fetch = {
        let scope = scope.clone();
        move || {
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::admin::crops().await;
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(list) => set_crops.set(list),
                    Err(e) => {
                        log::error!("failed to load crops: {}", e);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };
    fetch();

    let on_save = {
        let scope = scope.clone();
        let fetch = fetch.clone();
        move |_| {
            let Some(current) = form.get_untracked() else {
                return;
            };
            let request = current.to_upsert();
            if request.name.is_empty() || request.category.is_empty() {
                set_error.set(Some("Name and category are required".into()));
                return;
            }
            set_error.set(None);
            let scope = scope.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                let result = match &current.id {
                    Some(id) => api::admin::update_crop(id, &request).await,
                    None => api::admin::create_crop(&request).await,
                };
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(_) => {
                        set_form.set(None);
                        fetch();
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let on_delete = {
        let scope = scope.clone();
        let fetch = fetch.clone();
        move |crop_id: String| {
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message("Delete this crop?").unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let scope = scope.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api::admin::delete_crop(&crop_id).await {
                    Ok(_) if scope.is_alive() => fetch(),
                    Ok(_) => {}
                    Err(e) => {
                        if scope.is_alive() {
                            set_error.set(Some(e.to_string()));
                        }
                    }
                }
            });
        }
    };

    view! {
        <div>
            <h1>"Crop Catalogue"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button
                class="btn btn-primary"
                on:click=move |_| set_form.set(Some(CropForm::default()))
            >"Add crop"</button>

            {move || form.get().map(|current| {
                let is_new = current.id.is_none();
                view! {
                    <div class="card modal-form">
                        <h3>{if is_new { "New crop" } else { "Edit crop" }}</h3>
                        <label>"Name"</label>
                        <input
                            prop:value=current.name.clone()
                            on:input=move |ev| set_form.update(|f| {
                                if let Some(f) = f { f.name = event_target_value(&ev); }
                            })
                        />
                        <label>"Category"</label>
                        <input
                            prop:value=current.category.clone()
                            on:input=move |ev| set_form.update(|f| {
                                if let Some(f) = f { f.category = event_target_value(&ev); }
                            })
                        />
                        <label>"Seasons (comma separated)"</label>
                        <input
                            prop:value=current.seasons.clone()
                            on:input=move |ev| set_form.update(|f| {
                                if let Some(f) = f { f.seasons = event_target_value(&ev); }
                            })
                        />
                        <label>"Soil types (comma separated)"</label>
                        <input
                            prop:value=current.soil_types.clone()
                            on:input=move |ev| set_form.update(|f| {
                                if let Some(f) = f { f.soil_types = event_target_value(&ev); }
                            })
                        />
                        <label>"Description"</label>
                        <textarea
                            prop:value=current.description.clone()
                            on:input=move |ev| set_form.update(|f| {
                                if let Some(f) = f { f.description = event_target_value(&ev); }
                            })
                        ></textarea>
                        <div class="wizard-actions">
                            <button class="btn" on:click=move |_| set_form.set(None)>"Cancel"</button>
                            <button class="btn btn-primary" on:click=on_save.clone()>"Save"</button>
                        </div>
                    </div>
                }
            })}

            <table class="data-table">
                <thead>
                    <tr><th>"Name"</th><th>"Category"</th><th>"Seasons"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || crops.get().into_iter().map(|crop| {
                        let on_delete = on_delete.clone();
                        let edit_source = crop.clone();
                        let delete_id = crop.id.clone();
                        view! {
                            <tr>
                                <td>{crop.name.clone()}</td>
                                <td>{crop.category.clone()}</td>
                                <td>{crop.seasons.join(", ")}</td>
                                <td>
                                    <button class="btn btn-small" on:click=move |_| {
                                        set_form.set(Some(CropForm::from_detail(&edit_source)));
                                    }>"Edit"</button>
                                    <button
                                        class="btn btn-small btn-danger"
                                        on:click=move |_| on_delete(delete_id.clone())
                                    >"Delete"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
