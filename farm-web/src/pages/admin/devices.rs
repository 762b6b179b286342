//! Device fleet administration: provision, edit, retire.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{DeviceDto, DeviceStatus, DeviceUpsert};

use crate::services::api;
use crate::utils::scope::PageScope;

#[derive(Clone, Default)]
struct DeviceForm {
    id: Option<String>,
    serial: String,
    model: String,
    status: String,
}

fn status_value(status: DeviceStatus) -> &'static str {
    match status {
        DeviceStatus::Unclaimed => "unclaimed",
        DeviceStatus::Active => "active",
        DeviceStatus::Offline => "offline",
        DeviceStatus::Retired => "retired",
    }
}

fn parse_status(value: &str) -> DeviceStatus {
    match value {
        "active" => DeviceStatus::Active,
        "offline" => DeviceStatus::Offline,
        "retired" => DeviceStatus::Retired,
        _ => DeviceStatus::Unclaimed,
    }
}

#[component]
pub fn AdminDevicesPage() -> impl IntoView {
    let scope = PageScope::new();

    let (devices, set_devices) = signal(Vec::<DeviceDto>::new());
    let (form, set_form) = signal(None::<DeviceForm>);
    let (error, set_error) = signal(None::<String>);

    let fetch = {
        let scope = scope.clone();
        move || {
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::admin::devices().await;
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(list) => set_devices.set(list),
                    Err(e) => {
                        log::error!("failed to load devices: {}", e);
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
            let request = DeviceUpsert {
                serial: current.serial.trim().to_string(),
                model: current.model.trim().to_string(),
                status: parse_status(&current.status),
            };
            if request.serial.is_empty() || request.model.is_empty() {
                set_error.set(Some("Serial and model are required".into()));
                return;
            }
            set_error.set(None);
            let scope = scope.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                let result = match &current.id {
                    Some(id) => api::admin::update_device(id, &request).await,
                    None => api::admin::create_device(&request).await,
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
        move |device_id: String| {
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message("Delete this device?").unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let scope = scope.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api::admin::delete_device(&device_id).await {
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
            <h1>"Devices"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button class="btn btn-primary" on:click=move |_| {
                set_form.set(Some(DeviceForm {
                    status: "unclaimed".into(),
                    ..Default::default()
                }));
            }>"Provision device"</button>

            {move || form.get().map(|current| {
                let is_new = current.id.is_none();
                view! {
                    <div class="card modal-form">
                        <h3>{if is_new { "New device" } else { "Edit device" }}</h3>
                        <label>"Serial"</label>
                        <input
                            prop:value=current.serial.clone()
                            on:input=move |ev| set_form.update(|f| {
                                if let Some(f) = f { f.serial = event_target_value(&ev); }
                            })
                        />
                        <label>"Model"</label>
                        <input
                            prop:value=current.model.clone()
                            on:input=move |ev| set_form.update(|f| {
                                if let Some(f) = f { f.model = event_target_value(&ev); }
                            })
                        />
                        <label>"Status"</label>
                        <select
                            prop:value=current.status.clone()
                            on:change=move |ev| set_form.update(|f| {
                                if let Some(f) = f { f.status = event_target_value(&ev); }
                            })
                        >
                            <option value="unclaimed">"Unclaimed"</option>
                            <option value="active">"Active"</option>
                            <option value="offline">"Offline"</option>
                            <option value="retired">"Retired"</option>
                        </select>
                        <div class="wizard-actions">
                            <button class="btn" on:click=move |_| set_form.set(None)>"Cancel"</button>
                            <button class="btn btn-primary" on:click=on_save.clone()>"Save"</button>
                        </div>
                    </div>
                }
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Serial"</th><th>"Model"</th><th>"Farmer"</th>
                        <th>"Status"</th><th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || devices.get().into_iter().map(|device| {
                        let on_delete = on_delete.clone();
                        let delete_id = device.id.clone();
                        let edit_form = DeviceForm {
                            id: Some(device.id.clone()),
                            serial: device.serial.clone(),
                            model: device.model.clone(),
                            status: status_value(device.status).to_string(),
                        };
                        view! {
                            <tr>
                                <td>{device.serial.clone()}</td>
                                <td>{device.model.clone()}</td>
                                <td>{device.farmer_name.clone().unwrap_or_else(|| "-".into())}</td>
                                <td>{status_value(device.status)}</td>
                                <td>
                                    <button class="btn btn-small" on:click=move |_| {
                                        set_form.set(Some(edit_form.clone()));
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
