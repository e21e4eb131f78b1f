//! Archives Pages
//!
//! Past retros (board list and single board) and archived action items.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, BoardPage};
use crate::board_view::{column_thoughts, sort_action_items};
use crate::components::{dispatch_action, ActionItem, DeleteColumnItem, Header, Link, ThoughtItem};
use crate::context::{use_app_context, AppContext};
use crate::error::{log_error, ApiError};
use crate::format::format_board_date;
use crate::models::{Action, Board, Column, Thought};
use crate::pages::{handle_load_error, use_team_loader};
use crate::routes::Route;
use crate::store::use_board_store;
use crate::view_state::ActionItemState;

/// Thoughts / Action Items switch of the archive pages
#[component]
fn ArchivesSubheader(team_id: String, showing_action_items: bool) -> impl IntoView {
    let class = |active: bool| if active { "button button-secondary active" } else { "button button-secondary" };
    view! {
        <div class="archives-subheader sub-header">
            <ul class="archives-subheader-links">
                <li>
                    <Link
                        route=Route::ArchivedBoards { team_id: team_id.clone() }
                        class=class(!showing_action_items)
                        test_id="archivedThoughtsLink"
                    >
                        "Thoughts"
                    </Link>
                </li>
                <li>
                    <Link
                        route=Route::ArchivedActionItems { team_id }
                        class=class(showing_action_items)
                        test_id="archivedActionItemsLink"
                    >
                        "Action Items"
                    </Link>
                </li>
            </ul>
        </div>
    }
}

/// Page layout shared by the archive pages
#[component]
fn ArchivesLayout(team_id: String, showing_action_items: bool, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    use_team_loader(ctx, store, team_id.clone());

    view! {
        <div class="archives-page" data-testid="archivesPage">
            <Header team_id=team_id.clone() />
            <ArchivesSubheader team_id=team_id showing_action_items=showing_action_items />
            <div class="archives-page-content">{children()}</div>
        </div>
    }
}

/// Fetch into `target` whenever the reload trigger fires. Signals `fetch`
/// reads before its future starts are tracked too.
fn load_on_reload<T, F, Fut>(ctx: AppContext, team_id: String, target: WriteSignal<Option<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Fn(String) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let team_id = StoredValue::new(team_id);
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let team_id = team_id.get_value();
        let request = fetch(team_id.clone());
        spawn_local(async move {
            match request.await {
                Ok(value) => target.set(Some(value)),
                Err(err) => handle_load_error(ctx, &team_id, err),
            }
        });
    });
}

// ========================
// Archived Boards
// ========================

#[component]
pub fn ArchivedBoardsPage(#[prop(into)] team_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (boards, set_boards) = signal(None::<Vec<Board>>);
    let (page, set_page) = signal(BoardPage::default());

    load_on_reload(ctx, team_id.clone(), set_boards, move |team_id| {
        let page = page.get();
        async move { api::list_boards(&team_id, page).await }
    });

    let go_to = move |next: BoardPage| {
        set_boards.set(None);
        set_page.set(next);
    };
    let can_go_back = move || page.with(|p| p.previous().is_some());
    let can_go_on = move || boards.with(|b| b.as_ref().is_some_and(|list| page.get().may_have_more(list.len())));

    let tile_team_id = StoredValue::new(team_id.clone());

    view! {
        <ArchivesLayout team_id=team_id showing_action_items=false>
            <div class="archived-boards">
                <div class="archived-boards-header">
                    <h2 class="archived-boards-title">"Thought Archives"</h2>
                    <button
                        class="button button-secondary sort-button"
                        data-testid="boardSortButton"
                        on:click=move |_| go_to(page.get_untracked().reversed())
                    >
                        {move || if page.with(|p| p.newest_first) { "Newest first" } else { "Oldest first" }}
                    </button>
                </div>
                {move || match boards.get() {
                    None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    Some(list) if list.is_empty() => view! {
                        <p class="empty-state" data-testid="noArchivesFound">
                            "No archives were found. Boards will appear when retros are ended with thoughts."
                        </p>
                    }.into_any(),
                    Some(list) => view! {
                        <ol class="archived-boards-list">
                            {list
                                .into_iter()
                                .map(|board| view! { <ArchivedBoardTile board=board team_id=tile_team_id.get_value() /> })
                                .collect_view()}
                        </ol>
                    }.into_any(),
                }}
                <Show when=move || can_go_back() || can_go_on()>
                    <div class="archived-boards-paging">
                        <button
                            class="button button-secondary"
                            data-testid="previousPageButton"
                            disabled=move || !can_go_back()
                            on:click=move |_| {
                                if let Some(previous) = page.get_untracked().previous() {
                                    go_to(previous);
                                }
                            }
                        >
                            "Previous"
                        </button>
                        <span class="archived-boards-page">{move || format!("Page {}", page.get().index + 1)}</span>
                        <button
                            class="button button-secondary"
                            data-testid="nextPageButton"
                            disabled=move || !can_go_on()
                            on:click=move |_| go_to(page.get_untracked().next())
                        >
                            "Next"
                        </button>
                    </div>
                </Show>
            </div>
        </ArchivesLayout>
    }
}

#[component]
fn ArchivedBoardTile(board: Board, team_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (confirming, set_confirming) = signal(false);
    let board_id = board.id;
    let team_id = StoredValue::new(team_id);

    let delete = move |_: ()| {
        set_confirming.set(false);
        let team_id = team_id.get_value();
        spawn_local(async move {
            if log_error("delete board", api::delete_board(&team_id, board_id).await).is_some() {
                ctx.reload();
            }
        });
    };

    view! {
        <li class="archived-board-tile" data-testid="boardArchive">
            {move || if confirming.get() {
                view! {
                    <DeleteColumnItem
                        message="Delete this retro? All of its thoughts go with it."
                        on_confirm=delete
                        on_cancel=move |_: ()| set_confirming.set(false)
                    />
                }.into_any()
            } else {
                view! {
                    <span class="archived-board-date">{format_board_date(&board.date_created)}</span>
                    <span class="archived-board-count">{format!("{} thoughts", board.thoughts.len())}</span>
                    <Link
                        route=Route::ArchivedBoard { team_id: team_id.get_value(), board_id }
                        class="button button-secondary"
                        test_id="viewArchiveButton"
                    >
                        "View"
                    </Link>
                    <button class="button delete-button" data-testid="deleteArchiveButton" on:click=move |_| set_confirming.set(true)>
                        "Delete"
                    </button>
                }.into_any()
            }}
        </li>
    }
}

// ========================
// Single Archived Board
// ========================

#[component]
pub fn ArchivedBoardPage(#[prop(into)] team_id: String, board_id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let (board, set_board) = signal(None::<Board>);
    let (columns, set_columns) = signal(Vec::<Column>::new());
    let fetch_team_id = StoredValue::new(team_id.clone());

    Effect::new(move |_| {
        let team_id = fetch_team_id.get_value();
        spawn_local(async move {
            let loaded = match api::get_board(&team_id, board_id).await {
                Ok(board) => board,
                Err(err) => return handle_load_error(ctx, &team_id, err),
            };
            if let Some(list) = log_error("load columns", api::list_columns(&team_id).await) {
                set_columns.set(list);
            }
            set_board.set(Some(loaded));
        });
    });

    let item_team_id = StoredValue::new(team_id.clone());

    view! {
        <ArchivesLayout team_id=team_id showing_action_items=false>
            {move || board.get().map(|board| {
                let thoughts = board.thoughts.clone();
                view! {
                    <div class="archived-board" data-testid="archivedBoard">
                        <h2 class="archived-board-title">{format!("Retro from {}", format_board_date(&board.date_created))}</h2>
                        <div class="archived-board-columns">
                            {columns.get()
                                .into_iter()
                                .map(|column| {
                                    let column_thoughts = column_thoughts(&thoughts, &column, false);
                                    view! {
                                        <div class=format!("column thoughts-column {}", column.topic)>
                                            <div class="column-header">
                                                <span class="column-title">{column.title.clone()}</span>
                                                <span class="column-count">{column_thoughts.len()}</span>
                                            </div>
                                            <div class="column-items">
                                                {column_thoughts
                                                    .into_iter()
                                                    .map(|thought: Thought| view! {
                                                        <ThoughtItem
                                                            thought=Signal::derive(move || thought.clone())
                                                            team_id=item_team_id.get_value()
                                                            readonly=true
                                                        />
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            })}
        </ArchivesLayout>
    }
}

// ========================
// Archived Action Items
// ========================

#[component]
pub fn ArchivedActionItemsPage(#[prop(into)] team_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let (items, set_items) = signal(None::<Vec<Action>>);

    load_on_reload(ctx, team_id.clone(), set_items, |team_id| async move {
        api::list_action_items(&team_id, Some(true)).await.map(|items| sort_action_items(&items))
    });

    let item_team_id = StoredValue::new(team_id.clone());

    let restore = move |action: Action| {
        if let Some(mutation) = ActionItemState::new(action, false, true).restore() {
            dispatch_action(item_team_id.get_value(), mutation, store, ctx);
        }
    };

    view! {
        <ArchivesLayout team_id=team_id showing_action_items=true>
            <div class="archived-action-items">
                <h2 class="archived-action-items-title">"Action Item Archives"</h2>
                {move || match items.get() {
                    None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    Some(list) if list.is_empty() => view! {
                        <p class="empty-state" data-testid="noArchivedActionItems">
                            "Archived action items will show up here once a completed item is archived."
                        </p>
                    }.into_any(),
                    Some(list) => view! {
                        <div class="archived-action-items-grid">
                            {list
                                .into_iter()
                                .map(|action| {
                                    let restore_action = action.clone();
                                    view! {
                                        <div class="archived-action-item">
                                            <ActionItem
                                                action=Signal::derive(move || action.clone())
                                                team_id=item_team_id.get_value()
                                                readonly=true
                                                disable_animations=true
                                            />
                                            <button
                                                class="button restore-button"
                                                data-testid="restoreButton"
                                                on:click=move |_| restore(restore_action.clone())
                                            >
                                                "Restore"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }.into_any(),
                }}
            </div>
        </ArchivesLayout>
    }
}
