//! Column Endpoints

use serde::Serialize;

use super::{get_json, send_json, team_path, Method};
use crate::error::ApiError;
use crate::models::Column;

#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

pub async fn list_columns(team_id: &str) -> Result<Vec<Column>, ApiError> {
    get_json(&team_path(team_id, "/columns")).await
}

pub async fn update_column_title(team_id: &str, column_id: u64, title: &str) -> Result<(), ApiError> {
    let path = team_path(team_id, &format!("/column/{}/title", column_id));
    send_json(Method::Put, &path, &TitleBody { title }).await.map(|_| ())
}
