//! HTTP server command
//!
//! Creates the single store handle, runs the listener until shutdown,
//! then closes the handle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use hyperplanner_core::MemoryCourseStore;
use hyperplanner_server::http::{run_server, ServerConfig};

use crate::config::StoreArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Serve from an empty in-process store instead of MongoDB
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    if args.memory {
        tracing::warn!("serving from in-memory store; data is lost on exit");
        return run_server(Arc::new(MemoryCourseStore::new()), config)
            .await
            .context("Server error");
    }

    let store = args.store.connect().await?;
    tracing::info!("Starting hyperplanner server on {}", args.bind);

    let served = run_server(Arc::new(store.clone()), config).await;
    store.shutdown().await;

    served.context("Server error")
}
