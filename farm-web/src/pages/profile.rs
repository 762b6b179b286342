//! Farmer profile: account details, KYC status, alerts inbox.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use lib_utils::format::mask_mobile;
use lib_utils::time::display_date;
use lib_utils::validation::{validate_email, validate_not_empty};
use shared::{Alert, AlertSeverity, KycStatus, UpdateProfileRequest, UserProfile};

use crate::services::api;
use crate::state::session::use_session;
use crate::utils::scope::PageScope;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let scope = PageScope::new();

    let (profile, set_profile) = signal(None::<UserProfile>);
    let (alerts, set_alerts) = signal(Vec::<Alert>::new());
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);

    {
        let scope = scope.clone();
        spawn_local(async move {
            let me = api::profile::get().await;
            let inbox = api::alerts::list().await;
            if !scope.is_alive() {
                return;
            }
            match me {
                Ok(user) => {
                    set_name.set(user.name.clone());
                    set_email.set(user.email.clone().unwrap_or_default());
                    set_profile.set(Some(user));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            match inbox {
                Ok(list) => set_alerts.set(list),
                Err(e) => log::error!("failed to load alerts: {}", e),
            }
        });
    }

    let on_save = {
        let scope = scope.clone();
        move |_| {
            set_error.set(None);
            set_notice.set(None);
            let name = name.get_untracked().trim().to_string();
            if let Err(e) = validate_not_empty(&name, "Name") {
                set_error.set(Some(e));
                return;
            }
            let email = email.get_untracked().trim().to_string();
            if !email.is_empty() {
                if let Err(e) = validate_email(&email) {
                    set_error.set(Some(e));
                    return;
                }
            }
            let request = UpdateProfileRequest {
                name,
                email: (!email.is_empty()).then_some(email),
            };
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::profile::update(&request).await;
                if !scope.is_alive() {
                    return;
                }
                match result {
                    Ok(user) => {
                        session.refresh_user(user.clone());
                        set_profile.set(Some(user));
                        set_editing.set(false);
                        set_notice.set(Some("Profile updated".into()));
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let on_mark_read = {
        let scope = scope.clone();
        move |alert_id: String| {
            let scope = scope.clone();
            spawn_local(async move {
                match api::alerts::mark_read(&alert_id).await {
                    Ok(_) if scope.is_alive() => {
                        set_alerts.update(|list| {
                            if let Some(alert) = list.iter_mut().find(|a| a.id == alert_id) {
                                alert.read = true;
                            }
                        });
                    }
                    Ok(_) => {}
                    Err(e) => log::error!("failed to mark alert read: {}", e),
                }
            });
        }
    };

    let on_mark_all = {
        let scope = scope.clone();
        move |_| {
            let scope = scope.clone();
            spawn_local(async move {
                match api::alerts::mark_all_read().await {
                    Ok(_) if scope.is_alive() => {
                        set_alerts.update(|list| {
                            for alert in list.iter_mut() {
                                alert.read = true;
                            }
                        });
                    }
                    Ok(_) => {}
                    Err(e) => log::error!("failed to mark alerts read: {}", e),
                }
            });
        }
    };

    view! {
        <div class="page">
            <div class="card" style="max-width: 640px; margin: 0 auto;">
                <h1>"My Profile"</h1>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || notice.get().map(|n| view! { <p class="form-success">{n}</p> })}

                {move || match profile.get() {
                    None => view! { <p class="text-muted">"Loading profile..."</p> }.into_any(),
                    Some(user) => {
                        if editing.get() {
                            view! {
                                <div>
                                    <label>"Name"</label>
                                    <input
                                        prop:value=name
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                    />
                                    <label>"Email"</label>
                                    <input
                                        prop:value=email
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                    />
                                    <div class="wizard-actions">
                                        <button class="btn" on:click=move |_| set_editing.set(false)>
                                            "Cancel"
                                        </button>
                                        <button class="btn btn-primary" on:click=on_save.clone()>
                                            "Save"
                                        </button>
                                    </div>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div>
                                    <p><strong>{user.name.clone()}</strong></p>
                                    <p class="text-muted">{mask_mobile(&user.mobile)}</p>
                                    <p class="text-muted">
                                        {user.email.clone().unwrap_or_else(|| "No email on record".into())}
                                    </p>
                                    <p class="text-muted">
                                        {format!("Member since {}", display_date(&user.created_at))}
                                    </p>
                                    <p>
                                        "KYC status: "
                                        <span class=kyc_css(user.kyc_status)>
                                            {kyc_label(user.kyc_status)}
                                        </span>
                                        " "
                                        <A href="/kyc-update" {..} class="btn btn-small">
                                            {match user.kyc_status {
                                                KycStatus::Pending => "Complete KYC",
                                                _ => "Review KYC",
                                            }}
                                        </A>
                                    </p>
                                    <button class="btn" on:click=move |_| set_editing.set(true)>
                                        "Edit profile"
                                    </button>
                                </div>
                            }.into_any()
                        }
                    }
                }}
            </div>

            <div class="card" style="max-width: 640px; margin: 1rem auto;">
                <h2>"Alerts"</h2>
                {move || {
                    let unread = alerts.get().iter().filter(|a| !a.read).count();
                    (unread > 0).then(|| {
                        let on_mark_all = on_mark_all.clone();
                        view! {
                            <button class="btn btn-small" on:click=on_mark_all>
                                {format!("Mark all {} read", unread)}
                            </button>
                        }
                    })
                }}
                {move || {
                    let list = alerts.get();
                    if list.is_empty() {
                        view! { <p class="text-muted">"No alerts."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="alert-list">
                                {list.into_iter().map(|alert| {
                                    let on_mark_read = on_mark_read.clone();
                                    let alert_id = alert.id.clone();
                                    view! {
                                        <li class=severity_css(alert.severity)>
                                            <strong>{alert.title.clone()}</strong>
                                            <p>{alert.body.clone()}</p>
                                            <span class="text-muted">{display_date(&alert.created_at)}</span>
                                            {(!alert.read).then(|| view! {
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| on_mark_read(alert_id.clone())
                                                >"Mark read"</button>
                                            })}
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn kyc_label(status: KycStatus) -> &'static str {
    match status {
        KycStatus::Pending => "Pending",
        KycStatus::Verified => "Verified",
        KycStatus::Rejected => "Rejected",
    }
}

fn kyc_css(status: KycStatus) -> &'static str {
    match status {
        KycStatus::Pending => "badge badge-warning",
        KycStatus::Verified => "badge badge-success",
        KycStatus::Rejected => "badge badge-danger",
    }
}

fn severity_css(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Info => "alert-item alert-info",
        AlertSeverity::Warning => "alert-item alert-warning",
        AlertSeverity::Critical => "alert-item alert-critical",
    }
}
