//! Navigation bar, session-aware: admin accounts get the console link,
//! farmers get their flows, anonymous visitors get login/register.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href="/" {..} class="nav-brand">
                    <span class="brand-green">"Agri"</span><span class="brand-dark">"Sense"</span>
                </A>
                <div class="nav-links">
                    <A href="/about" {..} class="nav-link">"About"</A>
                    <A href="/service" {..} class="nav-link">"Services"</A>
                    <A href="/product-list" {..} class="nav-link">"Products"</A>
                    <A href="/crops" {..} class="nav-link">"Crop Library"</A>
                    <A href="/contact" {..} class="nav-link">"Contact"</A>
                </div>
                <div class="nav-session">
                    {move || match session.current_user() {
                        None => view! {
                            <span>
                                <A href="/login" {..} class="nav-link">"Login"</A>
                                <A href="/farmer-registration" {..} class="btn btn-small">"Register"</A>
                            </span>
                        }.into_any(),
                        Some(user) if session.is_admin() => view! {
                            <span>
                                <A href="/admin" {..} class="nav-link">"Admin Console"</A>
                                <span class="nav-user">{user.name.clone()}</span>
                                <button class="btn btn-small" on:click=on_logout.clone()>"Logout"</button>
                            </span>
                        }.into_any(),
                        Some(user) => view! {
                            <span>
                                <A href="/device-data" {..} class="nav-link">"My Farm"</A>
                                <A href="/profile" {..} class="nav-link">"Profile"</A>
                                <span class="nav-user">{user.name.clone()}</span>
                                <button class="btn btn-small" on:click=on_logout.clone()>"Logout"</button>
                            </span>
                        }.into_any(),
                    }}
                </div>
            </div>
        </nav>
    }
}
