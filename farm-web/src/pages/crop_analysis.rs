//! Crop health analysis: the weighted scoring heuristic applied to the
//! latest sensor reading. The score is computed locally; only the reading
//! comes over the wire. Without a claimed device the page runs on a sample
//! reading so the breakdown is still explorable.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use lib_farm::analysis::{analyze, HealthReport};
use shared::{DeviceStatus, SensorSnapshot};

use crate::services::api;
use crate::utils::scope::PageScope;

fn sample_reading() -> SensorSnapshot {
    SensorSnapshot {
        soil_moisture: 42.0,
        ph: 6.8,
        nitrogen: 45.0,
        phosphorus: 32.0,
        potassium: 68.0,
        temperature: 29.8,
        humidity: 65.0,
        recorded_at: "sample".into(),
    }
}

#[component]
pub fn CropAnalysisPage() -> impl IntoView {
    let scope = PageScope::new();

    let (reading, set_reading) = signal(None::<SensorSnapshot>);
    let (is_sample, set_is_sample) = signal(false);
    let (loaded, set_loaded) = signal(false);

    {
        let scope = scope.clone();
        spawn_local(async move {
            let mut found = None;
            if let Ok(devices) = api::devices::mine().await {
                for device in devices {
                    if device.status != DeviceStatus::Active {
                        continue;
                    }
                    if let Ok(snapshot) = api::devices::latest_reading(&device.id).await {
                        found = Some(snapshot);
                        break;
                    }
                }
            }
            if !scope.is_alive() {
                return;
            }
            match found {
                Some(snapshot) => set_reading.set(Some(snapshot)),
                None => {
                    set_is_sample.set(true);
                    set_reading.set(Some(sample_reading()));
                }
            }
            set_loaded.set(true);
        });
    }

    view! {
        <div class="page">
            <h1>"Crop Analysis"</h1>
            {move || is_sample.get().then(|| view! {
                <p class="form-warning">
                    "Showing a sample reading. "
                    <A href="/device-setup">"Claim a device"</A>
                    " to analyse your own field."
                </p>
            })}
            {move || {
                if !loaded.get() {
                    return view! { <p class="text-muted">"Loading reading..."</p> }.into_any();
                }
                match reading.get() {
                    Some(snapshot) => {
                        let report = analyze(&snapshot);
                        view! { <ReportView snapshot report/> }.into_any()
                    }
                    None => view! { <p class="text-muted">"No reading available."</p> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn ReportView(snapshot: SensorSnapshot, report: HealthReport) -> impl IntoView {
    let label = report.label;
    view! {
        <div class="card">
            <div class="health-score">
                <span class=format!("health-badge {}", label.css_class())>
                    {format!("{}%", report.percentage)}
                </span>
                <h2>{label.as_str()}</h2>
            </div>
            <table class="data-table">
                <thead>
                    <tr><th>"Factor"</th><th>"Points"</th><th>"Weight"</th></tr>
                </thead>
                <tbody>
                    {report.factors.into_iter().map(|factor| view! {
                        <tr>
                            <td>{factor.name}</td>
                            <td>{factor.points}</td>
                            <td>{factor.max}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
            <p class="text-muted">{format!(
                "Based on: moisture {:.1}%, pH {:.1}, N {:.0}, P {:.0}, K {:.0}, {:.1} °C, humidity {:.0}% ({})",
                snapshot.soil_moisture,
                snapshot.ph,
                snapshot.nitrogen,
                snapshot.phosphorus,
                snapshot.potassium,
                snapshot.temperature,
                snapshot.humidity,
                snapshot.recorded_at,
            )}</p>
        </div>
    }
}
