use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::handlers::helpers::{session_id_from_jar, SessionId};
use crate::models::AppState;
use crate::sessions::SESSION_COOKIE;

/// Attach a `SessionId` to every request, starting a session (and setting
/// the cookie) for visitors without a known one.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(sid) = session_id_from_jar(&jar).filter(|sid| state.sessions.contains(sid)) {
        request.extensions_mut().insert(SessionId(sid));
        return next.run(request).await;
    }

    let sid = state.sessions.create();
    tracing::debug!(session = %sid, "Started session");
    request.extensions_mut().insert(SessionId(sid.clone()));
    let response = next.run(request).await;

    let mut cookie = Cookie::new(SESSION_COOKIE, sid);
    cookie.set_path("/");
    cookie.set_http_only(true);
    (jar.add(cookie), response).into_response()
}
