use crate::{
    backend::{config::InsightConfig, utils::error::BackendResult},
    frontend::api::ApiClient,
};
use log::info;
use server::start_server;
use std::net::SocketAddr;
use tokio::sync::oneshot;

pub mod config;
mod server;
pub mod utils;

/// Serves the dashboard until the server fails. `override_bind` replaces the configured
/// address, `notify_start` fires once the listener is bound.
pub async fn start(
    config: InsightConfig,
    override_bind: Option<SocketAddr>,
    notify_start: Option<oneshot::Sender<()>>,
) -> BackendResult<()> {
    let addr = match override_bind {
        Some(addr) => addr,
        None => config.bind()?,
    };
    let article_source = config.article_source()?;
    info!("Reading articles from {article_source}");
    let client = ApiClient::new(reqwest::Client::new(), article_source.to_string());

    start_server(client, addr, notify_start).await?;
    Ok(())
}
