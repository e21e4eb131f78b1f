//! Header Component
//!
//! Top bar of every team page: team name, page tabs, theme switch and logout.

use leptos::prelude::*;

use crate::components::Link;
use crate::context::use_app_context;
use crate::routes::Route;
use crate::session::Theme;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Which tab of the header is highlighted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderTab {
    Retro,
    Archives,
    Radiator,
}

impl HeaderTab {
    fn of(route: &Route) -> Option<HeaderTab> {
        match route {
            Route::Retro { .. } => Some(HeaderTab::Retro),
            Route::ArchivedBoards { .. } | Route::ArchivedBoard { .. } | Route::ArchivedActionItems { .. } => {
                Some(HeaderTab::Archives)
            }
            Route::Radiator { .. } => Some(HeaderTab::Radiator),
            _ => None,
        }
    }
}

#[component]
pub fn Header(#[prop(into)] team_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();

    let team_name = move || store.team().with(|t| t.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let active = Memo::new(move |_| ctx.route.with(HeaderTab::of));

    let tab_class = move |tab: HeaderTab| {
        Signal::derive(move || {
            if active.get() == Some(tab) { "header-tab active".to_string() } else { "header-tab".to_string() }
        })
    };

    let on_theme_change = move |ev: web_sys::Event| {
        ctx.set_theme(Theme::parse(&event_target_value(&ev)));
    };

    view! {
        <header class="retro-page-header" data-testid="retroPageHeader">
            <div class="header-title">
                <span class="app-name">"RetroQuest"</span>
                <span class="team-name" data-testid="teamName">{team_name}</span>
            </div>
            <nav class="header-tabs">
                <Link route=Route::Retro { team_id: team_id.clone() } class=tab_class(HeaderTab::Retro) test_id="retroLink">
                    "Retro"
                </Link>
                <Link
                    route=Route::ArchivedBoards { team_id: team_id.clone() }
                    class=tab_class(HeaderTab::Archives)
                    test_id="archivesLink"
                >
                    "Archives"
                </Link>
                <Link route=Route::Radiator { team_id } class=tab_class(HeaderTab::Radiator) test_id="radiatorLink">
                    "Radiator"
                </Link>
            </nav>
            <div class="header-controls">
                <select class="theme-select" data-testid="themeSelect" on:change=on_theme_change>
                    {Theme::ALL
                        .iter()
                        .map(|&theme| {
                            view! {
                                <option value=theme.as_str() selected=move || ctx.theme.get() == theme>
                                    {theme.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="logout-button" data-testid="logoutButton" on:click=move |_| ctx.logout()>
                    "Logout"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_pages_share_one_tab() {
        let team_id = "crew".to_string();
        assert_eq!(HeaderTab::of(&Route::ArchivedBoards { team_id: team_id.clone() }), Some(HeaderTab::Archives));
        assert_eq!(
            HeaderTab::of(&Route::ArchivedBoard { team_id: team_id.clone(), board_id: 3 }),
            Some(HeaderTab::Archives)
        );
        assert_eq!(HeaderTab::of(&Route::Retro { team_id }), Some(HeaderTab::Retro));
        assert_eq!(HeaderTab::of(&Route::CreateTeam), None);
    }
}
