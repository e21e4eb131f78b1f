//! 404 Page

use leptos::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    log::info!(target: "router", "no page for {}", path);
    view! {
        <main class="page-not-found" data-testid="pageNotFound">
            <h1 class="page-not-found-code">"404"</h1>
            <p class="page-not-found-message">"Oops! The page you are looking for could not be found."</p>
            <Link route=Route::Login { team_id: None } class="button" test_id="backToLoginLink">
                "Back to login"
            </Link>
        </main>
    }
}
