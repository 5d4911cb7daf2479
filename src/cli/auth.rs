use crate::{config::Config, info, spotify};

/// Prints the authorization URL so a login can be started without the server's
/// `/api/auth/login` redirect.
pub fn login_url(config: &Config) {
    info!("Open the following URL to authorize the application:");
    println!("{}", spotify::auth::authorize_url(config));
}
