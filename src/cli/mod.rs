//! # CLI Module
//!
//! Command implementations behind the `playlist-relay` binary.
//!
//! - [`serve`] - Runs the HTTP relay (default command)
//! - [`login_url`] - Prints the Spotify authorization URL
//!
//! ```bash
//! playlist-relay                        # serve on SERVER_ADDRESS
//! playlist-relay serve --addr 0.0.0.0:9000
//! playlist-relay login-url
//! playlist-relay completions zsh
//! ```

mod auth;
mod serve;

pub use auth::login_url;
pub use serve::serve;
