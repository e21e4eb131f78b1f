//! REST Service Wrappers
//!
//! One function per backend endpoint, organized by resource.

mod action_item;
mod board;
mod column;
mod email;
mod environment;
mod password;
mod team;
mod thought;

use std::sync::OnceLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::ApiError;
use crate::session;

pub use action_item::*;
pub use board::*;
pub use column::*;
pub use email::*;
pub use environment::*;
pub use password::*;
pub use team::*;
pub use thought::*;

static API_BASE: OnceLock<String> = OnceLock::new();

/// Set the REST prefix once at start-up (defaults to `/api`)
pub fn init(api_base: &str) {
    let _ = API_BASE.set(api_base.to_string());
}

fn api_base() -> &'static str {
    API_BASE.get().map(String::as_str).unwrap_or("/api")
}

// ========================
// URL Building
// ========================

const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

const QUERY_VALUE_ENCODE_SET: &AsciiSet = &SEGMENT_ENCODE_SET.add(b'&').add(b'=').add(b'+');

pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string()
}

pub(crate) fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET).to_string()
}

/// `/team/{teamId}{rest}` with the team id encoded
pub(crate) fn team_path(team_id: &str, rest: &str) -> String {
    format!("/team/{}{}", encode_segment(team_id), rest)
}

// ========================
// Transport
// ========================

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

fn js_err(e: JsValue) -> ApiError {
    ApiError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

async fn fetch(method: Method, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let url = format!("{}{}", api_base(), path);
    log::debug!(target: "api", "{} {}", method.as_str(), url);

    let init = RequestInit::new();
    init.set_method(method.as_str());
    init.set_mode(RequestMode::Cors);
    let has_body = body.is_some();
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(&url, &init).map_err(js_err)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_err)?;
    if has_body {
        headers.set("Content-Type", "application/json").map_err(js_err)?;
    }
    if let Some(token) = session::load_token() {
        headers.set("Authorization", &format!("Bearer {}", token)).map_err(js_err)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("window not available".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    if response.ok() {
        Ok(response)
    } else {
        let body = read_text(&response).await.unwrap_or_default();
        let err = ApiError::from_status(response.status(), &body);
        log::warn!(target: "api", "{} {} failed: {}", method.as_str(), url, err);
        Err(err)
    }
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let text = JsFuture::from(response.text().map_err(js_err)?).await.map_err(js_err)?;
    Ok(text.as_string().unwrap_or_default())
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))
}

/// GET and decode a JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = fetch(Method::Get, path, None).await?;
    let json = JsFuture::from(response.json().map_err(js_err)?).await.map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Raw answer to a request with a body
pub(crate) struct Reply {
    pub body: String,
    /// `Location` header of `201 Created` answers
    pub location: Option<String>,
}

/// Send a JSON body, return the response text and `Location` header
pub(crate) async fn send_json<B: Serialize>(method: Method, path: &str, body: &B) -> Result<Reply, ApiError> {
    let response = fetch(method, path, Some(encode_body(body)?)).await?;
    let location = response.headers().get("Location").ok().flatten();
    let body = read_text(&response).await?;
    Ok(Reply { body, location })
}

/// Bodiless request whose response is ignored
pub(crate) async fn send_empty(method: Method, path: &str) -> Result<(), ApiError> {
    fetch(method, path, None).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_ids_are_encoded_as_one_segment() {
        assert_eq!(team_path("my-team", "/thoughts"), "/team/my-team/thoughts");
        assert_eq!(team_path("a b/c", ""), "/team/a%20b%2Fc");
        assert_eq!(team_path("50%", "/columns"), "/team/50%25/columns");
    }

    #[test]
    fn request_bodies_are_json() {
        #[derive(Serialize)]
        struct Body<'a> {
            title: &'a str,
        }
        assert_eq!(encode_body(&Body { title: "Happy" }).unwrap(), r#"{"title":"Happy"}"#);
    }
}
