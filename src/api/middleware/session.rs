//! Cookie-keyed board sessions.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};

use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// Attaches the caller's [`BoardSession`](crate::session::BoardSession) to the
/// request extensions.
///
/// Requests without a known `linkdrop_session` cookie get a fresh, empty
/// board, and the response carries a `Set-Cookie` for it. The cookie has no
/// expiry, so it lasts as long as the browser session.
///
/// # Example
///
/// ```rust,ignore
/// let boards = Router::new()
///     .route("/", get(board_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), session::layer));
/// ```
pub async fn layer(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let presented = session_cookie(req.headers());
    let (session, created) = state.sessions.open(presented.as_deref());

    let set_cookie = created.then(|| session_set_cookie(&session.id));
    req.extensions_mut().insert(session);

    let mut response = next.run(req).await;

    if let Some(cookie) = set_cookie {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Failed to encode session cookie: {}", e),
        }
    }

    response
}

/// Reads the session id from the `Cookie` request headers.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

fn session_set_cookie(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_found_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; linkdrop_session=Abc123; lang=en"),
        );

        assert_eq!(session_cookie(&headers).as_deref(), Some("Abc123"));
    }

    #[test]
    fn test_session_cookie_across_header_lines() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(header::COOKIE, HeaderValue::from_static("linkdrop_session=Xyz"));

        assert_eq!(session_cookie(&headers).as_deref(), Some("Xyz"));
    }

    #[test]
    fn test_session_cookie_missing_or_empty() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_cookie(&headers), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("linkdrop_session="));
        assert_eq!(session_cookie(&headers), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("other_session=abc"));
        assert_eq!(session_cookie(&headers), None);
    }

    #[test]
    fn test_set_cookie_attributes() {
        let cookie = session_set_cookie("Abc123");

        assert!(cookie.starts_with("linkdrop_session=Abc123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));
        assert!(!cookie.contains("Max-Age"));
    }
}
