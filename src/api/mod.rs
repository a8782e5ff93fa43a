//! HTTP API module using axum.
//!
//! Four fixed `GET` routes, exact path match. Unmatched paths get a bare
//! 404; other methods on a known path get 405; a panicking handler gets a
//! bare 500.

mod handlers;
mod middleware;
mod query;
mod responses;

use axum::{middleware::from_fn, routing::get, Extension, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

use crate::shell::Shell;
use crate::{Result, VulnAppError};

pub use handlers::*;
pub use query::QueryArgs;
pub use responses::*;

/// Application state shared across handlers
pub struct AppState {
    pub shell: Shell,
}

impl AppState {
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Shell::platform_default())
    }
}

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::home))
        .route("/ping", get(handlers::ping))
        .route("/vuln", get(handlers::vuln))
        .route("/malicious", get(handlers::malicious));

    with_fallbacks(routes).layer(Extension(state))
}

/// Add the generic 404 fallback, panic recovery and request logging
fn with_fallbacks(router: Router) -> Router {
    router
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(responses::panic_response))
        .layer(from_fn(middleware::log_requests))
}

/// Bind the listening socket
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let addr = format!("{}:{}", host, port);
    TcpListener::bind(&addr)
        .await
        .map_err(|source| VulnAppError::Bind { addr, source })
}

/// Start the HTTP server on an already bound listener
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
    let app = create_router(state);

    info!("API server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .map_err(VulnAppError::internal)?;

    Ok(())
}
