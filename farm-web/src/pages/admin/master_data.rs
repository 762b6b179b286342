//! Master data: the admin-managed lookup lists (states, soil types,
//! water sources, languages...).

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{MasterDataItem, MasterDataUpsert};

use crate::services::api;
use crate::utils::scope::PageScope;

#[component]
pub fn AdminMasterDataPage() -> impl IntoView {
    let scope = PageScope::new();

    let (items, set_items) = signal(Vec::<MasterDataItem>::new());
    let (error, set_error) = signal(None::<String>);
    // `editing` is Some(None) when creating, Some(Some(id)) when updating.
    let (editing, set_editing) = signal(None::<Option<String>>);
    let (form_category, set_form_category) = signal(String::new());
    let (form_value, set_form_value) = signal(String::new());

    let fetch = {
        let scope = scope.clone();
        move || {
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::admin::master_data().await;
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(list) => set_items.set(list),
                    Err(e) => {
                        log::error!("failed to load master data: {}", e);
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
            let Some(target) = editing.get_untracked() else {
                return;
            };
            let request = MasterDataUpsert {
                category: form_category.get_untracked().trim().to_string(),
                value: form_value.get_untracked().trim().to_string(),
            };
            if request.category.is_empty() || request.value.is_empty() {
                set_error.set(Some("Category and value are required".into()));
                return;
            }
            set_error.set(None);
            let scope = scope.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                let result = match &target {
                    Some(id) => api::admin::update_master_data(id, &request).await,
                    None => api::admin::create_master_data(&request).await,
                };
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(_) => {
                        set_editing.set(None);
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
        move |item_id: String| {
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message("Delete this entry?").unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let scope = scope.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api::admin::delete_master_data(&item_id).await {
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
            <h1>"Master Data"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button class="btn btn-primary" on:click=move |_| {
                set_form_category.set(String::new());
                set_form_value.set(String::new());
                set_editing.set(Some(None));
            }>"Add entry"</button>

            {move || editing.get().map(|target| view! {
                <div class="card modal-form">
                    <h3>{if target.is_none() { "New entry" } else { "Edit entry" }}</h3>
                    <label>"Category"</label>
                    <input
                        prop:value=form_category
                        on:input=move |ev| set_form_category.set(event_target_value(&ev))
                    />
                    <label>"Value"</label>
                    <input
                        prop:value=form_value
                        on:input=move |ev| set_form_value.set(event_target_value(&ev))
                    />
                    <div class="wizard-actions">
                        <button class="btn" on:click=move |_| set_editing.set(None)>"Cancel"</button>
                        <button class="btn btn-primary" on:click=on_save.clone()>"Save"</button>
                    </div>
                </div>
            })}

            <table class="data-table">
                <thead>
                    <tr><th>"Category"</th><th>"Value"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|item| {
                        let on_delete = on_delete.clone();
                        let delete_id = item.id.clone();
                        let edit_id = item.id.clone();
                        let edit_category = item.category.clone();
                        let edit_value = item.value.clone();
                        view! {
                            <tr>
                                <td>{item.category.clone()}</td>
                                <td>{item.value.clone()}</td>
                                <td>
                                    <button class="btn btn-small" on:click=move |_| {
                                        set_form_category.set(edit_category.clone());
                                        set_form_value.set(edit_value.clone());
                                        set_editing.set(Some(Some(edit_id.clone())));
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
