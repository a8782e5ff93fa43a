//! Startup side effect: one outbound fetch through the shell.
//!
//! The fetch is started before the listener is bound and never awaited.
//! Whatever it does (succeed, fail, hang) has no bearing on serving.

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::shell::Shell;

/// Fire `command` through `shell` on a background task.
///
/// Returns immediately. The handle is only useful to tests; callers are
/// expected to drop it.
pub fn spawn_startup_fetch(shell: Shell, command: String) -> JoinHandle<()> {
    info!("Running startup fetch");

    tokio::spawn(async move {
        match shell.run(&command).await {
            Ok(status) => debug!(exit_code = ?status.code(), "startup fetch finished"),
            Err(e) => debug!("startup fetch failed: {}", e),
        }
    })
}
