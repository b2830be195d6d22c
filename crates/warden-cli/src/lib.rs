//! Warden CLI library.
//!
//! Offline console for the POI claim arbiter: chat lines are typed as
//! `player: message`, replies and expiry notices are printed in place.

pub mod cli;
pub mod console;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use console::{Console, ConsoleInput};
pub use error::{CliError, Result};
pub use output::Formatter;

use std::path::Path;
use warden_server::config::ServerConfig;

/// Load server configuration, or the built-in demo catalog when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ServerConfig> {
    match path {
        Some(path) => Ok(ServerConfig::from_file(path)?),
        None => Ok(ServerConfig::default_test_config()),
    }
}
