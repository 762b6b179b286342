//! Live sensor dashboard: latest reading per claimed device, refreshed on
//! a fixed interval while the page is mounted.

use std::collections::HashMap;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use shared::{DeviceDto, DeviceStatus, SensorSnapshot};

use crate::services::api;
use crate::utils::constants::SENSOR_REFRESH_MS;
use crate::utils::scope::PageScope;

#[component]
pub fn DeviceDataPage() -> impl IntoView {
    let scope = PageScope::new();

    let (devices, set_devices) = signal(Vec::<DeviceDto>::new());
    let (readings, set_readings) = signal(HashMap::<String, SensorSnapshot>::new());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let refresh = {
        let scope = scope.clone();
        move || {
            let scope = scope.clone();
            spawn_local(async move {
                let list = match api::devices::mine().await {
                    Ok(list) => list,
                    Err(e) => {
                        if scope.is_alive() {
                            set_error.set(Some(e.to_string()));
                            set_loaded.set(true);
                        }
                        return;
                    }
                };
                let mut latest = HashMap::new();
                for device in &list {
                    if device.status != DeviceStatus::Active {
                        continue;
                    }
                    match api::devices::latest_reading(&device.id).await {
                        Ok(snapshot) => {
                            latest.insert(device.id.clone(), snapshot);
                        }
                        Err(e) => log::warn!("no reading for {}: {}", device.serial, e),
                    }
                }
                if !scope.is_alive() {
                    return;
                }
                set_error.set(None);
                set_devices.set(list);
                set_readings.set(latest);
                set_loaded.set(true);
            });
        }
    };

    refresh();
    // The ticker is dropped on cleanup along with the page.
    let ticker = {
        let refresh = refresh.clone();
        Interval::new(SENSOR_REFRESH_MS, move || refresh())
    };
    let _ticker = StoredValue::new_local(Some(ticker));

    view! {
        <div class="page">
            <h1>"Sensor Data"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || {
                if !loaded.get() {
                    return view! { <p class="text-muted">"Loading devices..."</p> }.into_any();
                }
                let list = devices.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-muted">
                            "No devices yet. "
                            <A href="/device-setup">"Claim your first device"</A>
                            " to start receiving readings."
                        </p>
                    }.into_any();
                }
                view! {
                    <div class="device-grid">
                        {list.into_iter().map(|device| {
                            let device_id = device.id.clone();
                            view! {
                                <div class="card">
                                    <h3>{device.serial.clone()}</h3>
                                    <p class="text-muted">
                                        {format!(
                                            "{} · {}",
                                            device.model,
                                            device.plot_id.clone().unwrap_or_else(|| "no plot".into()),
                                        )}
                                    </p>
                                    {move || {
                                        match readings.get().get(&device_id).cloned() {
                                            Some(snapshot) => view! {
                                                <ReadingTable snapshot/>
                                            }.into_any(),
                                            None => view! {
                                                <p class="text-muted">"No recent reading."</p>
                                            }.into_any(),
                                        }
                                    }}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
            <p class="text-muted">
                "Want a health score for these numbers? See "
                <A href="/crop-analysis">"Crop Analysis"</A>
                "."
            </p>
        </div>
    }
}

#[component]
fn ReadingTable(snapshot: SensorSnapshot) -> impl IntoView {
    let rows = vec![
        ("Soil moisture", format!("{:.1} %", snapshot.soil_moisture)),
        ("Soil pH", format!("{:.1}", snapshot.ph)),
        ("Nitrogen", format!("{:.0} ppm", snapshot.nitrogen)),
        ("Phosphorus", format!("{:.0} ppm", snapshot.phosphorus)),
        ("Potassium", format!("{:.0} ppm", snapshot.potassium)),
        ("Temperature", format!("{:.1} °C", snapshot.temperature)),
        ("Humidity", format!("{:.0} %", snapshot.humidity)),
    ];
    view! {
        <table class="data-table">
            <tbody>
                {rows.into_iter().map(|(name, value)| view! {
                    <tr><td>{name}</td><td>{value}</td></tr>
                }).collect_view()}
            </tbody>
        </table>
        <p class="text-muted">{format!("Recorded {}", snapshot.recorded_at)}</p>
    }
}
