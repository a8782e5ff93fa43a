//! HTTP request handlers.
//!
//! `vuln` and `malicious` are intentionally unsafe: request input reaches
//! the response body and the shell without any sanitization.

use axum::{extract::Extension, response::Html};
use std::sync::Arc;
use tracing::instrument;

use super::query::QueryArgs;
use super::responses::ApiError;
use super::AppState;

/// Landing page
#[instrument]
pub async fn home() -> Html<&'static str> {
    Html("Welcome to Vulnerable App!")
}

/// Liveness check
#[instrument]
pub async fn ping() -> Html<&'static str> {
    Html("pong")
}

/// Echo `input` back without escaping (reflected XSS)
#[instrument(skip_all)]
pub async fn vuln(args: QueryArgs) -> Html<String> {
    let user_input = args.get_or_empty("input");
    Html(format!("You entered: {}", user_input))
}

/// Run `cmd` through the shell (command injection)
#[instrument(skip_all)]
pub async fn malicious(
    Extension(state): Extension<Arc<AppState>>,
    args: QueryArgs,
) -> Result<Html<&'static str>, ApiError> {
    let user_input = args.get_or_empty("cmd");

    // Exit status is ignored; only a failure to start the shell surfaces.
    state.shell.run(&user_input).await.map_err(ApiError::from)?;

    Ok(Html("Command executed (vulnerable)"))
}

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
