//! Runtime configuration.
//!
//! Built-in defaults reproduce the fixture exactly; an optional file can
//! override them. No environment variables are read.

use std::path::Path;

use ::config::{Config, File};
use serde::Deserialize;

use crate::shell::Shell;
use crate::{Result, DEFAULT_HOST, DEFAULT_PORT, STARTUP_FETCH_COMMAND};

/// Settings for one server process
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Shell executable used for command strings
    pub shell: String,
    /// Flag passed to the shell before the command string
    pub shell_flag: String,
    /// Command fired once before serving
    pub startup_fetch: String,
}

impl AppConfig {
    /// Load defaults, overlaid by `path` when given.
    ///
    /// The file format is picked from the extension (toml, json, yaml, ...).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let default_shell = Shell::platform_default();

        let mut builder = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("shell", default_shell.program())?
            .set_default("shell_flag", default_shell.flag())?
            .set_default("startup_fetch", STARTUP_FETCH_COMMAND)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Shell described by this configuration
    pub fn shell(&self) -> Shell {
        Shell::new(&self.shell, &self.shell_flag)
    }

    /// `host:port` as passed to the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let shell = Shell::platform_default();
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            shell: shell.program().to_string(),
            shell_flag: shell.flag().to_string(),
            startup_fetch: STARTUP_FETCH_COMMAND.to_string(),
        }
    }
}
