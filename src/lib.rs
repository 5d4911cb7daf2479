//! Spotify Playlist Relay Library
//!
//! This library implements a small HTTP backend that signs a user in with
//! Spotify's OAuth authorization-code flow and relays search and playlist
//! operations to the Spotify Web API on the user's behalf.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the auth, playlist and search endpoints
//! - `cli` - Command implementations behind the binary's subcommands
//! - `config` - Configuration loading from `.env` files and environment variables
//! - `error` - The error type shared by handlers, services and the upstream client
//! - `management` - In-memory token store
//! - `server` - Router construction and the server loop
//! - `spotify` - OAuth flow, upstream client and domain services
//! - `types` - Request and token data structures
//! - `utils` - Small helpers
//!
//! # Example
//!
//! ```
//! use playlist_relay::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> playlist_relay::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for process-level operations that may fail.
///
/// Used for startup and server lifetime errors where the concrete error type
/// does not matter to the caller. Request handling uses [`error::ApiError`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Token pair stored");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal startup failures. Request handling never calls it.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems such as a failed upstream call that is
/// reported back to the client.
///
/// # Example
///
/// ```
/// warning!("Upstream returned {} for {}", status, path);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
