//! Board page: the submit form and the live entry list.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::rejection::FormRejection,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use url::Url;

use crate::application::services::LinkSnapshot;
use crate::error::AppError;
use crate::session::BoardSession;

/// One rendered list row.
pub struct BoardRow {
    pub original_url: String,
    /// Target for the original text, present only for `http`/`https` URLs.
    pub link_href: Option<String>,
    pub short_code: String,
    pub short_url: String,
    pub countdown: String,
    pub expired: bool,
}

impl From<LinkSnapshot> for BoardRow {
    fn from(snapshot: LinkSnapshot) -> Self {
        Self {
            original_url: snapshot.entry.original_url().to_string(),
            link_href: link_href(snapshot.entry.original_url()),
            short_code: snapshot.entry.short_code().to_string(),
            short_url: snapshot.entry.short_url().to_string(),
            countdown: snapshot.countdown.display().to_string(),
            expired: snapshot.countdown.is_expired(),
        }
    }
}

/// Returns the text as a link target if it is an absolute web URL.
///
/// Anything else (`javascript:`, `data:`, relative paths, plain words) is
/// rendered as text only.
pub fn link_href(text: &str) -> Option<String> {
    let url = Url::parse(text).ok()?;

    match url.scheme() {
        "http" | "https" => Some(url.into()),
        _ => None,
    }
}

/// Renders `templates/board.html`.
#[derive(Template, WebTemplate)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub rows: Vec<BoardRow>,
    /// True while at least one row is still counting down.
    pub live: bool,
}

/// Form body posted by the board.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub url: String,
}

/// Renders the caller's board.
///
/// # Endpoint
///
/// `GET /`
pub async fn board_handler(Extension(session): Extension<BoardSession>) -> impl IntoResponse {
    let rows: Vec<BoardRow> = session
        .board
        .entries()
        .await
        .into_iter()
        .map(BoardRow::from)
        .collect();
    let live = rows.iter().any(|row| !row.expired);

    BoardTemplate { rows, live }
}

/// Submits the form field and sends the browser back to an empty form.
///
/// # Endpoint
///
/// `POST /` (`application/x-www-form-urlencoded`, field `url`)
///
/// Always answers `303 See Other` to `/`; blank input creates nothing.
pub async fn submit_form_handler(
    Extension(session): Extension<BoardSession>,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form?;
    session.board.submit(&form.url).await;

    Ok(Redirect::to("/"))
}
