//! Link Component
//!
//! Anchor that navigates through the in-app router instead of reloading.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn Link(
    route: Route,
    #[prop(into)] class: Signal<String>,
    #[prop(optional, into)] test_id: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = route.path();
    let route = StoredValue::new(route);

    let on_click = move |ev: web_sys::MouseEvent| {
        // Let the browser handle modified clicks (new tab etc.)
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(route.get_value());
    };

    view! {
        <a href=href class=move || class.get() data-testid=test_id on:click=on_click>
            {children()}
        </a>
    }
}
