//! Pages
//!
//! One component per route plus the data loading they share.

mod archives;
mod create_team;
mod login;
mod not_found;
mod password_reset_request;
mod radiator;
mod recover_team_name;
mod reset_password;
mod retro;

pub use archives::{ArchivedActionItemsPage, ArchivedBoardPage, ArchivedBoardsPage};
pub use create_team::CreateTeamPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use password_reset_request::PasswordResetRequestPage;
pub use radiator::RadiatorPage;
pub use recover_team_name::RecoverTeamNamePage;
pub use reset_password::{ExpiredResetLinkPage, ResetPasswordPage};
pub use retro::RetroPage;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::{Action, Column, Team, Thought};
use crate::routes::Route;
use crate::store::{store_set_team, BoardStateStoreFields, BoardStore};

/// Which board data a team page needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BoardData {
    /// Columns, thoughts and open action items
    Retro,
    /// Open action items only
    ActionItems,
}

/// Everything a team page shows, fetched in one go
pub(crate) struct BoardSnapshot {
    team: Team,
    columns: Option<Vec<Column>>,
    thoughts: Option<Vec<Thought>>,
    action_items: Vec<Action>,
}

impl BoardSnapshot {
    pub(crate) async fn fetch(team_id: &str, data: BoardData) -> Result<Self, ApiError> {
        let team = api::get_team(team_id).await?;
        let (columns, thoughts) = match data {
            BoardData::Retro => (Some(api::list_columns(team_id).await?), Some(api::list_thoughts(team_id).await?)),
            BoardData::ActionItems => (None, None),
        };
        let action_items = api::list_action_items(team_id, Some(false)).await?;
        Ok(Self { team, columns, thoughts, action_items })
    }

    pub(crate) fn apply(self, store: &BoardStore) {
        store_set_team(store, self.team);
        if let Some(columns) = self.columns {
            store.columns().set(columns);
        }
        if let Some(thoughts) = self.thoughts {
            store.thoughts().set(thoughts);
        }
        store.action_items().set(self.action_items);
    }
}

/// Expired or foreign sessions go back to the login page; anything else is logged
pub(crate) fn handle_load_error(ctx: AppContext, team_id: &str, err: ApiError) {
    match err.status() {
        Some(401) | Some(403) => {
            log::warn!(target: "board", "session for {} rejected, logging out", team_id);
            crate::session::clear_token();
            ctx.redirect(Route::Login { team_id: Some(team_id.to_string()) });
        }
        _ => log::error!(target: "board", "failed to load {}: {}", team_id, err),
    }
}

/// Reload on every reload trigger and poll for other people's changes while mounted
pub(crate) fn use_board_loader(ctx: AppContext, store: BoardStore, team_id: String, data: BoardData) {
    let team_id = StoredValue::new(team_id);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let team_id = team_id.get_value();
        let generation = ctx.begin_load();
        spawn_local(async move {
            let result = BoardSnapshot::fetch(&team_id, data).await;
            // A slow response must not touch the page navigated to since,
            // nor overwrite a newer load or one of our own mutations
            if ctx.route.get_untracked().team_id() != Some(team_id.as_str()) || !ctx.is_latest_load(generation) {
                log::debug!(target: "board", "dropping stale load {} of {}", generation, team_id);
                return;
            }
            match result {
                Ok(snapshot) => {
                    log::debug!(target: "board", "loaded board of {}", team_id);
                    snapshot.apply(&store);
                }
                Err(err) => handle_load_error(ctx, &team_id, err),
            }
        });
    });

    start_polling(ctx);
}

/// Bump the reload trigger every poll interval until the calling owner is disposed
fn start_polling(ctx: AppContext) {
    let alive = StoredValue::new(());
    let interval = ctx.poll_interval_ms;
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval).await;
            if alive.try_get_value().is_none() {
                break;
            }
            ctx.reload();
        }
    });
}

/// Load just the team, for pages that fetch the rest themselves
pub(crate) fn use_team_loader(ctx: AppContext, store: BoardStore, team_id: String) {
    let team_id = StoredValue::new(team_id);
    Effect::new(move |_| {
        let team_id = team_id.get_value();
        spawn_local(async move {
            match api::get_team(&team_id).await {
                Ok(team) => store_set_team(&store, team),
                Err(err) => handle_load_error(ctx, &team_id, err),
            }
        });
    });
}
