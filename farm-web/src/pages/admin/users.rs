//! User administration: list accounts, edit name/email/role.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_utils::time::display_date;
use shared::{AdminUserUpdate, Role, UserProfile};

use crate::services::api;
use crate::utils::scope::PageScope;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let scope = PageScope::new();

    let (users, set_users) = signal(Vec::<UserProfile>::new());
    let (error, set_error) = signal(None::<String>);
    // The account being edited, copied into the form signals below.
    let (editing, set_editing) = signal(None::<UserProfile>);
    let (form_name, set_form_name) = signal(String::new());
    let (form_email, set_form_email) = signal(String::new());
    let (form_role, set_form_role) = signal(String::new());

    let fetch = {
        let scope = scope.clone();
        move || {
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::admin::users().await;
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(list) => set_users.set(list),
                    Err(e) => {
                        log::error!("failed to load users: {}", e);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };
    fetch();

    let open_editor = move |user: UserProfile| {
        set_form_name.set(user.name.clone());
        set_form_email.set(user.email.clone().unwrap_or_default());
        set_form_role.set(role_value(user.role).to_string());
        set_editing.set(Some(user));
    };

    let on_save = {
        let scope = scope.clone();
        let fetch = fetch.clone();
        move |_| {
            let Some(user) = editing.get_untracked() else {
                return;
            };
            let email = form_email.get_untracked().trim().to_string();
            let request = AdminUserUpdate {
                name: form_name.get_untracked().trim().to_string(),
                email: (!email.is_empty()).then_some(email),
                role: match form_role.get_untracked().as_str() {
                    "admin" => Role::Admin,
                    _ => Role::Farmer,
                },
            };
            set_error.set(None);
            let scope = scope.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                let result = api::admin::update_user(&user.id, &request).await;
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

    view! {
        <div>
            <h1>"Users"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            {move || editing.get().map(|user| view! {
                <div class="card modal-form">
                    <h3>{format!("Edit {}", user.mobile)}</h3>
                    <label>"Name"</label>
                    <input
                        prop:value=form_name
                        on:input=move |ev| set_form_name.set(event_target_value(&ev))
                    />
                    <label>"Email"</label>
                    <input
                        prop:value=form_email
                        on:input=move |ev| set_form_email.set(event_target_value(&ev))
                    />
                    <label>"Role"</label>
                    <select
                        prop:value=form_role
                        on:change=move |ev| set_form_role.set(event_target_value(&ev))
                    >
                        <option value="farmer">"Farmer"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                    <div class="wizard-actions">
                        <button class="btn" on:click=move |_| set_editing.set(None)>"Cancel"</button>
                        <button class="btn btn-primary" on:click=on_save.clone()>"Save"</button>
                    </div>
                </div>
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th><th>"Mobile"</th><th>"Email"</th>
                        <th>"Role"</th><th>"Joined"</th><th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || users.get().into_iter().map(|user| {
                        let open_editor = open_editor.clone();
                        let row = user.clone();
                        view! {
                            <tr>
                                <td>{user.name.clone()}</td>
                                <td>{user.mobile.clone()}</td>
                                <td>{user.email.clone().unwrap_or_else(|| "-".into())}</td>
                                <td>{role_value(user.role)}</td>
                                <td>{display_date(&user.created_at)}</td>
                                <td>
                                    <button
                                        class="btn btn-small"
                                        on:click=move |_| open_editor(row.clone())
                                    >"Edit"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn role_value(role: Role) -> &'static str {
    match role {
        Role::Farmer => "farmer",
        Role::Admin => "admin",
    }
}
