//! Farmer registration: details form, then OTP verification. A verified
//! OTP returns an auth response and establishes the session directly.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use lib_utils::validation::{validate_min_length, validate_mobile, validate_not_empty};
use shared::dto::auth::{RegisterRequest, VerifyOtpRequest};

use crate::services::api;
use crate::state::session::use_session;
use crate::utils::scope::PageScope;

#[component]
pub fn FarmerRegistrationPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let scope = PageScope::new();

    let (name, set_name) = signal(String::new());
    let (mobile, set_mobile) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (otp, set_otp) = signal(String::new());
    let (awaiting_otp, set_awaiting_otp) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (info, set_info) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let validate = move || -> Result<(), String> {
        validate_not_empty(&name.get_untracked(), "Name")?;
        validate_mobile(&mobile.get_untracked())?;
        validate_min_length(&password.get_untracked(), 8, "Password")?;
        Ok(())
    };

    let on_register = {
        let scope = scope.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if let Err(message) = validate() {
                set_error.set(Some(message));
                return;
            }
            set_error.set(None);
            set_busy.set(true);
            let email_value = email.get_untracked();
            let request = RegisterRequest {
                name: name.get_untracked(),
                mobile: mobile.get_untracked(),
                password: password.get_untracked(),
                email: (!email_value.trim().is_empty()).then_some(email_value),
            };
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::auth::register(&request).await;
                if !scope.is_alive() {
                    return;
                }
                set_busy.set(false);
                match result {
                    Ok(response) => {
                        set_awaiting_otp.set(true);
                        set_info.set(Some(response.message));
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let on_verify = {
        let scope = scope.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_error.set(None);
            set_busy.set(true);
            let request = VerifyOtpRequest {
                mobile: mobile.get_untracked(),
                otp: otp.get_untracked(),
            };
            let scope = scope.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = api::auth::verify_otp(&request).await;
                if !scope.is_alive() {
                    return;
                }
                set_busy.set(false);
                match result {
                    Ok(response) => {
                        session.login(&response.token, response.user);
                        navigate("/kyc-update", Default::default());
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="page-centered">
            <div class="card" style="width: 100%; max-width: 480px;">
                <h1>"Farmer Registration"</h1>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || info.get().map(|m| view! { <p class="form-success">{m}</p> })}

                {move || if awaiting_otp.get() {
                    view! {
                        <form on:submit=on_verify.clone()>
                            <p class="text-muted">
                                "Enter the OTP sent to " {mobile.get()}
                            </p>
                            <label>"OTP"</label>
                            <input
                                prop:value=otp
                                on:input=move |ev| set_otp.set(event_target_value(&ev))
                            />
                            <button class="btn btn-primary" type="submit" disabled=busy>
                                "Verify & Continue"
                            </button>
                        </form>
                    }.into_any()
                } else {
                    view! {
                        <form on:submit=on_register.clone()>
                            <label>"Full name"</label>
                            <input
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <label>"Mobile number"</label>
                            <input
                                prop:value=mobile
                                on:input=move |ev| set_mobile.set(event_target_value(&ev))
                            />
                            <label>"Email (optional)"</label>
                            <input
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            <label>"Password"</label>
                            <input
                                type="password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                            <button class="btn btn-primary" type="submit" disabled=busy>
                                "Register"
                            </button>
                        </form>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
