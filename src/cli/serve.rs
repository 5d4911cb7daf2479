use crate::{config::Config, error, server};

pub async fn serve(mut config: Config, addr: Option<String>) {
    if let Some(addr) = addr {
        config.server_addr = addr;
    }

    if let Err(e) = server::start_api_server(config).await {
        error!("Server stopped. Err: {}", e);
    }
}
