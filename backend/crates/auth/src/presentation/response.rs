//! Redirect helpers shared by the auth and tweet handlers

use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use crate::error::AuthError;

/// 302 Found
pub fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// 302 Found with a `Set-Cookie` header
pub fn redirect_with_cookie(location: &str, set_cookie: String) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, location.to_string()),
            (header::SET_COOKIE, set_cookie),
        ],
    )
        .into_response()
}

/// Re-rendered form carrying the error's status code
pub fn form_error(err: &AuthError, html: String) -> Response {
    err.log();
    (err.status_code(), Html(html)).into_response()
}
