//! Contact page. The form is local-only presentation; there is no contact
//! endpoint on the API.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !name.get_untracked().trim().is_empty() && !message.get_untracked().trim().is_empty() {
            set_sent.set(true);
        }
    };

    view! {
        <div class="page">
            <div class="card" style="max-width: 560px; margin: 0 auto;">
                <h1>"Contact Us"</h1>
                <p class="text-muted">"Office: Pune, Maharashtra · support@agrisense.example · 1800-000-000"</p>
                {move || if sent.get() {
                    view! { <p class="form-success">"Thanks! We will get back to you."</p> }.into_any()
                } else {
                    view! {
                        <form on:submit=on_submit>
                            <label>"Your name"</label>
                            <input
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <label>"Message"</label>
                            <textarea
                                prop:value=message
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                            <button class="btn btn-primary" type="submit">"Send"</button>
                        </form>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
