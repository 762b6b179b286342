//! Subscription administration: plan and status per farmer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{SubscriptionDto, SubscriptionStatus, SubscriptionUpdate};

use crate::services::api;
use crate::utils::scope::PageScope;

fn status_value(status: SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Active => "active",
        SubscriptionStatus::Expired => "expired",
        SubscriptionStatus::Cancelled => "cancelled",
    }
}

fn parse_status(value: &str) -> SubscriptionStatus {
    match value {
        "expired" => SubscriptionStatus::Expired,
        "cancelled" => SubscriptionStatus::Cancelled,
        _ => SubscriptionStatus::Active,
    }
}

#[component]
pub fn AdminSubscriptionsPage() -> impl IntoView {
    let scope = PageScope::new();

    let (subscriptions, set_subscriptions) = signal(Vec::<SubscriptionDto>::new());
    let (editing, set_editing) = signal(None::<SubscriptionDto>);
    let (form_plan, set_form_plan) = signal(String::new());
    let (form_status, set_form_status) = signal(String::new());
    let (form_expires, set_form_expires) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let fetch = {
        let scope = scope.clone();
        move || {
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::admin::subscriptions().await;
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(list) => set_subscriptions.set(list),
                    Err(e) => {
                        log::error!("failed to load subscriptions: {}", e);
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
            let Some(subscription) = editing.get_untracked() else {
                return;
            };
            let expires = form_expires.get_untracked().trim().to_string();
            let request = SubscriptionUpdate {
                plan: form_plan.get_untracked().trim().to_string(),
                status: parse_status(&form_status.get_untracked()),
                expires_at: (!expires.is_empty()).then_some(expires),
            };
            if request.plan.is_empty() {
                set_error.set(Some("Plan is required".into()));
                return;
            }
            set_error.set(None);
            let scope = scope.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                let result = api::admin::update_subscription(&subscription.id, &request).await;
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
            <h1>"Subscriptions"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            {move || editing.get().map(|subscription| view! {
                <div class="card modal-form">
                    <h3>{format!("Edit subscription for {}", subscription.farmer_name)}</h3>
                    <label>"Plan"</label>
                    <input
                        prop:value=form_plan
                        on:input=move |ev| set_form_plan.set(event_target_value(&ev))
                    />
                    <label>"Status"</label>
                    <select
                        prop:value=form_status
                        on:change=move |ev| set_form_status.set(event_target_value(&ev))
                    >
                        <option value="active">"Active"</option>
                        <option value="expired">"Expired"</option>
                        <option value="cancelled">"Cancelled"</option>
                    </select>
                    <label>"Expires (blank for none)"</label>
                    <input
                        type="date"
                        prop:value=form_expires
                        on:input=move |ev| set_form_expires.set(event_target_value(&ev))
                    />
                    <div class="wizard-actions">
                        <button class="btn" on:click=move |_| set_editing.set(None)>"Cancel"</button>
                        <button class="btn btn-primary" on:click=on_save.clone()>"Save"</button>
                    </div>
                </div>
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Farmer"</th><th>"Plan"</th><th>"Status"</th>
                        <th>"Started"</th><th>"Expires"</th><th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || subscriptions.get().into_iter().map(|subscription| {
                        let row = subscription.clone();
                        view! {
                            <tr>
                                <td>{subscription.farmer_name.clone()}</td>
                                <td>{subscription.plan.clone()}</td>
                                <td>{status_value(subscription.status)}</td>
                                <td>{subscription.started_at.clone()}</td>
                                <td>{subscription.expires_at.clone().unwrap_or_else(|| "-".into())}</td>
                                <td>
                                    <button class="btn btn-small" on:click=move |_| {
                                        set_form_plan.set(row.plan.clone());
                                        set_form_status.set(status_value(row.status).to_string());
                                        set_form_expires.set(row.expires_at.clone().unwrap_or_default());
                                        set_editing.set(Some(row.clone()));
                                    }>"Edit"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
