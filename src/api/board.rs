//! Board (Archived Retro) Endpoints

use super::{get_json, send_empty, team_path, Method};
use crate::error::ApiError;
use crate::models::Board;

/// Paging of the archived board list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPage {
    pub index: u32,
    pub size: u32,
    pub newest_first: bool,
}

impl Default for BoardPage {
    fn default() -> Self {
        Self { index: 0, size: 30, newest_first: true }
    }
}

impl BoardPage {
    pub fn next(self) -> Self {
        Self { index: self.index + 1, ..self }
    }

    pub fn previous(self) -> Option<Self> {
        self.index.checked_sub(1).map(|index| Self { index, ..self })
    }

    /// Flip the date order, starting again from the first page
    pub fn reversed(self) -> Self {
        Self { index: 0, newest_first: !self.newest_first, ..self }
    }

    /// A full page means the server may hold more boards after it
    pub fn may_have_more(self, loaded: usize) -> bool {
        loaded >= self.size as usize
    }
}

fn boards_path(team_id: &str, page: BoardPage) -> String {
    let order = if page.newest_first { "DESC" } else { "ASC" };
    team_path(
        team_id,
        &format!(
            "/boards?pageIndex={}&pageSize={}&sortBy=dateCreated&sortOrder={}",
            page.index, page.size, order
        ),
    )
}

pub async fn list_boards(team_id: &str, page: BoardPage) -> Result<Vec<Board>, ApiError> {
    get_json(&boards_path(team_id, page)).await
}

pub async fn get_board(team_id: &str, board_id: u64) -> Result<Board, ApiError> {
    get_json(&team_path(team_id, &format!("/boards/{}", board_id))).await
}

pub async fn delete_board(team_id: &str, board_id: u64) -> Result<(), ApiError> {
    send_empty(Method::Delete, &team_path(team_id, &format!("/board/{}", board_id))).await
}

/// Archive every thought and completed action item of the active retro
pub async fn end_retro(team_id: &str) -> Result<(), ApiError> {
    send_empty(Method::Put, &team_path(team_id, "/end-retro")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_newest_thirty() {
        assert_eq!(
            boards_path("t", BoardPage::default()),
            "/team/t/boards?pageIndex=0&pageSize=30&sortBy=dateCreated&sortOrder=DESC"
        );
    }

    #[test]
    fn oldest_first_sorts_ascending() {
        let page = BoardPage { index: 2, size: 10, newest_first: false };
        assert!(boards_path("t", page).ends_with("pageIndex=2&pageSize=10&sortBy=dateCreated&sortOrder=ASC"));
    }

    #[test]
    fn paging_stops_at_the_first_page() {
        let first = BoardPage::default();
        assert_eq!(first.previous(), None);
        let second = first.next();
        assert_eq!(second.index, 1);
        assert_eq!(second.previous(), Some(first));
    }

    #[test]
    fn reversing_order_restarts_paging() {
        let page = BoardPage::default().next().next().reversed();
        assert_eq!(page, BoardPage { index: 0, size: 30, newest_first: false });
        assert!(boards_path("t", page).ends_with("pageIndex=0&pageSize=30&sortBy=dateCreated&sortOrder=ASC"));
    }

    #[test]
    fn only_a_full_page_offers_more() {
        let page = BoardPage { index: 0, size: 3, newest_first: true };
        assert!(page.may_have_more(3));
        assert!(!page.may_have_more(2));
        assert!(!page.may_have_more(0));
    }
}
