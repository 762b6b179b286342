//! Login page: password login, OTP login and the password-reset flow.
//!
//! The OTP resend countdown holds at most one live interval: starting a new
//! countdown drops the previous `Interval`, and an effect drops the handle
//! when the countdown reaches zero.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use shared::dto::auth::{
    ForgotPasswordRequest, LoginRequest, OtpLoginRequest, ResetPasswordRequest,
    VerifyLoginOtpRequest,
};

use crate::services::api;
use crate::state::session::use_session;
use crate::utils::constants::OTP_RESEND_SECONDS;
use crate::utils::scope::PageScope;

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoginMode {
    Password,
    Otp,
    Forgot,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let scope = PageScope::new();

    let (mode, set_mode) = signal(LoginMode::Password);
    let (mobile, set_mobile) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (otp, set_otp) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (otp_sent, set_otp_sent) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (info, set_info) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    // Resend countdown state; the handle is page-local and not Send.
    let (countdown, set_countdown) = signal(0u32);
    let interval_handle: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);

    let start_countdown = move || {
        set_countdown.set(OTP_RESEND_SECONDS);
        let ticker = Interval::new(1_000, move || {
            set_countdown.update(|c| *c = c.saturating_sub(1));
        });
        // Dropping any previous interval cancels it.
        interval_handle.set_value(Some(ticker));
    };
    Effect::new(move || {
        if countdown.get() == 0 {
            interval_handle.update_value(|h| {
                h.take();
            });
        }
    });

    let finish_login = {
        let navigate = navigate.clone();
        move |response: shared::dto::auth::AuthResponse| {
            session.login(&response.token, response.user);
            // Return to the path a 401 interrupted, if any.
            let target = crate::utils::url::get_query_param("redirect")
                .filter(|p| p.starts_with('/'))
                .unwrap_or_else(|| "/device-data".to_string());
            navigate(&target, Default::default());
        }
    };

    let on_password_login = {
        let scope = scope.clone();
        let finish_login = finish_login.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_error.set(None);
            set_busy.set(true);
            let request = LoginRequest {
                mobile: mobile.get_untracked(),
                password: password.get_untracked(),
            };
            let scope = scope.clone();
            let finish_login = finish_login.clone();
            spawn_local(async move {
                let result = api::auth::login(&request).await;
                if !scope.is_alive() {
                    return;
                }
                set_busy.set(false);
                match result {
                    Ok(response) => finish_login(response),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let request_otp = {
        let scope = scope.clone();
        move || {
            set_error.set(None);
            set_busy.set(true);
            let request = OtpLoginRequest {
                mobile: mobile.get_untracked(),
            };
            let scope = scope.clone();
            spawn_local(async move {
                let result = api::auth::request_login_otp(&request).await;
                if !scope.is_alive() {
                    return;
                }
                set_busy.set(false);
                match result {
                    Ok(response) => {
                        set_otp_sent.set(true);
                        set_info.set(Some(response.message));
                        start_countdown();
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let on_verify_otp = {
        let scope = scope.clone();
        let finish_login = finish_login.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_error.set(None);
            set_busy.set(true);
            let request = VerifyLoginOtpRequest {
                mobile: mobile.get_untracked(),
                otp: otp.get_untracked(),
            };
            let scope = scope.clone();
            let finish_login = finish_login.clone();
            spawn_local(async move {
                let result = api::auth::verify_login_otp(&request).await;
                if !scope.is_alive() {
                    return;
                }
                set_busy.set(false);
                match result {
                    Ok(response) => finish_login(response),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let on_forgot = {
        let scope = scope.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_error.set(None);
            set_busy.set(true);
            let scope = scope.clone();
            if otp_sent.get_untracked() {
                let request = ResetPasswordRequest {
                    mobile: mobile.get_untracked(),
                    otp: otp.get_untracked(),
                    new_password: new_password.get_untracked(),
                };
                spawn_local(async move {
                    let result = api::auth::reset_password(&request).await;
                    if !scope.is_alive() {
                        return;
                    }
                    set_busy.set(false);
                    match result {
                        Ok(response) => {
                            set_info.set(Some(response.message));
                            set_otp_sent.set(false);
                            set_mode.set(LoginMode::Password);
                        }
                        Err(e) => set_error.set(Some(e.to_string())),
                    }
                });
            } else {
                let request = ForgotPasswordRequest {
                    mobile: mobile.get_untracked(),
                };
                spawn_local(async move {
                    let result = api::auth::forgot_password(&request).await;
                    if !scope.is_alive() {
                        return;
                    }
                    set_busy.set(false);
                    match result {
                        Ok(response) => {
                            set_otp_sent.set(true);
                            set_info.set(Some(response.message));
                            start_countdown();
                        }
                        Err(e) => set_error.set(Some(e.to_string())),
                    }
                });
            }
        }
    };

    let switch_mode = move |next: LoginMode| {
        set_mode.set(next);
        set_error.set(None);
        set_info.set(None);
        set_otp_sent.set(false);
        set_otp.set(String::new());
    };

    view! {
        <div class="page-centered">
            <div class="card" style="width: 100%; max-width: 420px;">
                <h1>"Farmer Login"</h1>

                <div class="tab-row">
                    <button
                        class:tab-active=move || mode.get() == LoginMode::Password
                        on:click=move |_| switch_mode(LoginMode::Password)
                    >"Password"</button>
                    <button
                        class:tab-active=move || mode.get() == LoginMode::Otp
                        on:click=move |_| switch_mode(LoginMode::Otp)
                    >"OTP"</button>
                </div>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || info.get().map(|m| view! { <p class="form-success">{m}</p> })}

                {move || match mode.get() {
                    LoginMode::Password => view! {
                        <form on:submit=on_password_login.clone()>
                            <label>"Mobile number"</label>
                            <input
                                prop:value=mobile
                                on:input=move |ev| set_mobile.set(event_target_value(&ev))
                            />
                            <label>"Password"</label>
                            <input
                                type="password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                            <button class="btn btn-primary" type="submit" disabled=busy>
                                "Login"
                            </button>
                            <button
                                type="button"
                                class="text-link"
                                on:click=move |_| switch_mode(LoginMode::Forgot)
                            >"Forgot password?"</button>
                        </form>
                    }.into_any(),
                    LoginMode::Otp => {
                        let request_otp = request_otp.clone();
                        view! {
                        <form on:submit=on_verify_otp.clone()>
                            <label>"Mobile number"</label>
                            <input
                                prop:value=mobile
                                on:input=move |ev| set_mobile.set(event_target_value(&ev))
                            />
                            {move || if otp_sent.get() {
                                view! {
                                    <span>
                                        <label>"OTP"</label>
                                        <input
                                            prop:value=otp
                                            on:input=move |ev| set_otp.set(event_target_value(&ev))
                                        />
                                        <button class="btn btn-primary" type="submit" disabled=busy>
                                            "Verify & Login"
                                        </button>
                                    </span>
                                }.into_any()
                            } else {
                                view! { <span></span> }.into_any()
                            }}
                            <button
                                type="button"
                                class="btn"
                                disabled=move || busy.get() || (countdown.get() > 0)
                                on:click=move |_| request_otp()
                            >
                                {move || {
                                    let left = countdown.get();
                                    if left > 0 {
                                        format!("Resend OTP in {}s", left)
                                    } else if otp_sent.get() {
                                        "Resend OTP".to_string()
                                    } else {
                                        "Send OTP".to_string()
                                    }
                                }}
                            </button>
                        </form>
                    }.into_any()
                    },
                    LoginMode::Forgot => view! {
                        <form on:submit=on_forgot.clone()>
                            <label>"Mobile number"</label>
                            <input
                                prop:value=mobile
                                on:input=move |ev| set_mobile.set(event_target_value(&ev))
                            />
                            {move || if otp_sent.get() {
                                view! {
                                    <span>
                                        <label>"OTP"</label>
                                        <input
                                            prop:value=otp
                                            on:input=move |ev| set_otp.set(event_target_value(&ev))
                                        />
                                        <label>"New password"</label>
                                        <input
                                            type="password"
                                            prop:value=new_password
                                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                                        />
                                    </span>
                                }.into_any()
                            } else {
                                view! { <span></span> }.into_any()
                            }}
                            <button class="btn btn-primary" type="submit" disabled=busy>
                                {move || if otp_sent.get() { "Reset password" } else { "Send reset OTP" }}
                            </button>
                        </form>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
