mod cache;
mod config;
mod error;
mod server;
mod store;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cache::AnalysisCache;
use config::Config;
use mcp_common::redis::RedisCache;
use server::SeoContentServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting seo-content MCP server");

    let config = Config::from_env()?;
    info!(
        redis = config.redis_url.is_some(),
        cache_ttl_secs = config.cache_ttl_secs,
        "configuration loaded"
    );

    let redis = RedisCache::new(config.redis_url.as_deref(), cache::NAMESPACE);
    let cache = AnalysisCache::new(redis, config.cache_ttl_secs);
    match cache.check().await {
        Ok(()) => info!("redis connected"),
        Err(e) => info!(reason = %e, "redis unavailable, running without cache"),
    }

    let server = SeoContentServer::new(Arc::new(cache));

    if let Some(addr) = config.listen_addr {
        let listener = TcpListener::bind(&addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
