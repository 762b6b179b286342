//! KYC review queue: inspect pending records, verify or reject.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_utils::format::format_area;
use lib_utils::time::display_date;
use shared::{KycDecisionRequest, KycRecord, KycStatus};

use crate::services::api;
use crate::utils::scope::PageScope;

// Farmer name and mobile are only attached once the backend resolves the
// submitting user, so both stay optional on the record.
fn farmer_label(record: &KycRecord) -> String {
    format!(
        "{} ({})",
        record.farmer_name.as_deref().unwrap_or("-"),
        record.farmer_mobile.as_deref().unwrap_or("-")
    )
}

#[component]
pub fn AdminKycPage() -> impl IntoView {
    let scope = PageScope::new();

    let (records, set_records) = signal(Vec::<KycRecord>::new());
    let (selected, set_selected) = signal(None::<KycRecord>);
    let (remarks, set_remarks) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let fetch = {
        let scope = scope.clone();
        move || {
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::admin::pending_kyc().await;
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(list) => set_records.set(list),
                    Err(e) => {
                        log::error!("failed to load pending KYC: {}", e);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };
    fetch();

    let decide = {
        let scope = scope.clone();
        let fetch = fetch.clone();
        move |status: KycStatus| {
            let Some(record) = selected.get_untracked() else {
                return;
            };
            let text = remarks.get_untracked().trim().to_string();
            if status == KycStatus::Rejected && text.is_empty() {
                set_error.set(Some("Remarks are required when rejecting".into()));
                return;
            }
            let request = KycDecisionRequest {
                status,
                remarks: (!text.is_empty()).then_some(text),
            };
            set_error.set(None);
            let scope = scope.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                let result = api::admin::decide_kyc(&record.id, &request).await;
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(_) => {
                        set_selected.set(None);
                        set_remarks.set(String::new());
                        fetch();
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };
    let approve = {
        let decide = decide.clone();
        move |_| decide(KycStatus::Verified)
    };
    let reject = {
        let decide = decide.clone();
        move |_| decide(KycStatus::Rejected)
    };

    view! {
        <div>
            <h1>"KYC Review"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            {move || selected.get().map(|record| view! {
                <div class="card modal-form">
                    <h3>{farmer_label(&record)}</h3>
                    <p class="text-muted">{format!("Submitted {}", display_date(&record.submitted_at))}</p>
                    <p>{format!(
                        "{} ({}) · {}, {}, {}, {} - {}",
                        record.data.identity.full_name,
                        record.data.identity.gender,
                        record.data.address.village,
                        record.data.address.taluk,
                        record.data.address.district,
                        record.data.address.state,
                        record.data.address.pin_code,
                    )}</p>
                    {record.data.farm_plots.iter().map(|plot| view! {
                        <div class="review-plot">
                            <p>
                                <strong>{plot.plot_id.clone()}</strong>
                                {format!(
                                    " · {} · {} · soil: {}",
                                    plot.ownership_type,
                                    format_area(plot.total_area, &plot.area_unit),
                                    plot.soil_type,
                                )}
                            </p>
                            <ul>
                                {plot.crops.iter().map(|crop| view! {
                                    <li>{format!(
                                        "{} - {} ({})",
                                        crop.crop_name, crop.variety, crop.season,
                                    )}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                    <label>"Remarks"</label>
                    <textarea
                        prop:value=remarks
                        on:input=move |ev| set_remarks.set(event_target_value(&ev))
                    ></textarea>
                    <div class="wizard-actions">
                        <button class="btn" on:click=move |_| set_selected.set(None)>"Close"</button>
                        <button class="btn btn-danger" on:click=reject.clone()>"Reject"</button>
                        <button class="btn btn-primary" on:click=approve.clone()>"Verify"</button>
                    </div>
                </div>
            })}

            {move || {
                let list = records.get();
                if list.is_empty() {
                    view! { <p class="text-muted">"No pending records."</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Farmer"</th><th>"Mobile"</th><th>"Plots"</th>
                                    <th>"Submitted"</th><th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|record| {
                                    let row = record.clone();
                                    view! {
                                        <tr>
                                            <td>{record.farmer_name.clone()}</td>
                                            <td>{record.farmer_mobile.clone()}</td>
                                            <td>{record.data.farm_plots.len()}</td>
                                            <td>{display_date(&record.submitted_at)}</td>
                                            <td>
                                                <button class="btn btn-small" on:click=move |_| {
                                                    set_remarks.set(String::new());
                                                    set_selected.set(Some(row.clone()));
                                                }>"Review"</button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, mobile: Option<&str>) -> KycRecord {
        KycRecord {
            id: "kyc-1".into(),
            status: KycStatus::Pending,
            data: Default::default(),
            submitted_at: "2026-08-01T09:30:00Z".into(),
            farmer_name: name.map(Into::into),
            farmer_mobile: mobile.map(Into::into),
        }
    }

    #[test]
    fn farmer_label_shows_name_and_mobile() {
        assert_eq!(
            farmer_label(&record(Some("Asha Patil"), Some("9876543210"))),
            "Asha Patil (9876543210)"
        );
    }

    #[test]
    fn farmer_label_falls_back_for_unresolved_fields() {
        assert_eq!(farmer_label(&record(None, None)), "- (-)");
        assert_eq!(
            farmer_label(&record(Some("Asha Patil"), None)),
            "Asha Patil (-)"
        );
    }
}
