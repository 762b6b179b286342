//! Admin landing page: headline counts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use shared::DashboardStats;

use crate::services::api;
use crate::utils::scope::PageScope;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let scope = PageScope::new();

    let (stats, set_stats) = signal(None::<DashboardStats>);
    let (error, set_error) = signal(None::<String>);

    {
        let scope = scope.clone();
        spawn_local(async move {
            let result = api::admin::dashboard().await;
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(stats) => set_stats.set(Some(stats)),
                Err(e) => {
                    log::error!("failed to load dashboard: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    }

    view! {
        <div>
            <h1>"Dashboard"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || match stats.get() {
                None => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
                Some(stats) => view! {
                    <div class="stat-grid">
                        <StatCard label="Farmers" value=stats.total_farmers href="/admin/users"/>
                        <StatCard label="Pending KYC" value=stats.pending_kyc href="/admin/kyc"/>
                        <StatCard label="Active devices" value=stats.active_devices href="/admin/devices"/>
                        <StatCard
                            label="Active subscriptions"
                            value=stats.active_subscriptions
                            href="/admin/subscriptions"
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: u64, href: &'static str) -> impl IntoView {
    view! {
        <A href={href} {..} class="card stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </A>
    }
}
