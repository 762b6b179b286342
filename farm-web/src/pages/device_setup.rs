//! Device claiming: bind a sensor unit to one of the farmer's plots.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use lib_farm::kyc::DraftPlot;
use lib_utils::time::now_epoch_ms;
use shared::{DeviceClaimRequest, DeviceDto, DeviceStatus};

use crate::services::api;
use crate::utils::scope::PageScope;

#[component]
pub fn DeviceSetupPage() -> impl IntoView {
    let navigate = use_navigate();
    let scope = PageScope::new();

    let (serial, set_serial) = signal(String::new());
    let (plot_id, set_plot_id) = signal(String::new());
    let (plots, set_plots) = signal(Vec::<String>::new());
    let (devices, set_devices) = signal(Vec::<DeviceDto>::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    // Plot choices come from the farmer's own KYC record.
    {
        let scope = scope.clone();
        spawn_local(async move {
            let record = api::kyc::get_mine().await;
            let mine = api::devices::mine().await;
            if !scope.is_alive() {
                return;
            }
            match record {
                Ok(Some(record)) => set_plots.set(
                    record.data.farm_plots.iter().map(|p| p.plot_id.clone()).collect(),
                ),
                Ok(None) => {}
                Err(e) => log::error!("failed to load farm plots: {}", e),
            }
            match mine {
                Ok(list) => set_devices.set(list),
                Err(e) => log::error!("failed to load devices: {}", e),
            }
        });
    }

    // Minimal plot creation for farmers whose KYC record has no plot yet;
    // posts straight to the record instead of re-running the wizard.
    let (show_quick_plot, set_show_quick_plot) = signal(false);
    let (quick_ownership, set_quick_ownership) = signal(String::new());
    let (quick_area, set_quick_area) = signal(String::new());

    let on_quick_plot = {
        let scope = scope.clone();
        move |_| {
            let draft = DraftPlot {
                ownership_type: quick_ownership.get_untracked(),
                total_area: quick_area.get_untracked().parse().unwrap_or(0.0),
                ..Default::default()
            };
            let plot = match draft.commit(&[], format!("plot-{}", now_epoch_ms())) {
                Ok(mut plots) => plots.remove(0),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    return;
                }
            };
            set_error.set(None);
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::kyc::add_plot(&plot).await;
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(record) => {
                        set_plots.set(
                            record.data.farm_plots.iter().map(|p| p.plot_id.clone()).collect(),
                        );
                        set_show_quick_plot.set(false);
                        set_quick_ownership.set(String::new());
                        set_quick_area.set(String::new());
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let on_claim = {
        let scope = scope.clone();
        let navigate = navigate.clone();
        move |_| {
            let serial = serial.get_untracked().trim().to_string();
            let plot = plot_id.get_untracked();
            if serial.is_empty() {
                set_error.set(Some("Enter the device serial number".into()));
                return;
            }
            if plot.is_empty() {
                set_error.set(Some("Choose the plot this device monitors".into()));
                return;
            }
            set_error.set(None);
            set_busy.set(true);
            let request = DeviceClaimRequest { serial, plot_id: Some(plot) };
            let scope = scope.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = api::devices::claim(&request).await;
                if !scope.is_alive() {
                    return;
                }
                set_busy.set(false);
                match result {
                    Ok(_) => navigate("/device-data", Default::default()),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="page">
            <div class="card" style="max-width: 560px; margin: 0 auto;">
                <h1>"Device Setup"</h1>
                <p class="text-muted">
                    "Claim a sensor unit by its serial number and bind it to one of your plots."
                </p>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <label>"Serial number"</label>
                <input
                    placeholder="e.g. AGS-00412"
                    prop:value=serial
                    on:input=move |ev| set_serial.set(event_target_value(&ev))
                />
                <label>"Plot"</label>
                <select
                    prop:value=plot_id
                    on:change=move |ev| set_plot_id.set(event_target_value(&ev))
                >
                    <option value="">"Select a plot"</option>
                    {move || plots.get().into_iter().map(|id| view! {
                        <option value=id.clone()>{id.clone()}</option>
                    }).collect_view()}
                </select>
                {move || plots.get().is_empty().then(|| view! {
                    <p class="form-warning">
                        "No plots on record yet. Complete your KYC, or add a plot below."
                    </p>
                })}
                {move || if show_quick_plot.get() {
                    let on_quick_plot = on_quick_plot.clone();
                    view! {
                        <div class="quick-plot">
                            <label>"Ownership type"</label>
                            <select
                                prop:value=quick_ownership
                                on:change=move |ev| set_quick_ownership.set(event_target_value(&ev))
                            >
                                <option value="">"Select"</option>
                                <option value="owned">"owned"</option>
                                <option value="leased">"leased"</option>
                                <option value="shared">"shared"</option>
                            </select>
                            <label>"Total area (acres)"</label>
                            <input
                                type="number"
                                prop:value=quick_area
                                on:input=move |ev| set_quick_area.set(event_target_value(&ev))
                            />
                            <div class="wizard-actions">
                                <button class="btn" on:click=move |_| set_show_quick_plot.set(false)>
                                    "Cancel"
                                </button>
                                <button class="btn btn-primary" on:click=on_quick_plot>
                                    "Add plot"
                                </button>
                            </div>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <button class="btn btn-small" on:click=move |_| set_show_quick_plot.set(true)>
                            "Add a plot to my record"
                        </button>
                    }.into_any()
                }}
                <button class="btn btn-primary" disabled=busy on:click=on_claim>
                    {move || if busy.get() { "Claiming..." } else { "Claim device" }}
                </button>

                <h3>"My devices"</h3>
                {move || {
                    let list = devices.get();
                    if list.is_empty() {
                        view! { <p class="text-muted">"No devices claimed yet."</p> }.into_any()
                    } else {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr><th>"Serial"</th><th>"Model"</th><th>"Plot"</th><th>"Status"</th></tr>
                                </thead>
                                <tbody>
                                    {list.into_iter().map(|device| view! {
                                        <tr>
                                            <td>{device.serial.clone()}</td>
                                            <td>{device.model.clone()}</td>
                                            <td>{device.plot_id.clone().unwrap_or_else(|| "-".into())}</td>
                                            <td>{status_label(device.status)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn status_label(status: DeviceStatus) -> &'static str {
    match status {
        DeviceStatus::Unclaimed => "Unclaimed",
        DeviceStatus::Active => "Active",
        DeviceStatus::Offline => "Offline",
        DeviceStatus::Retired => "Retired",
    }
}
