//! Store configuration shared by every command
//!
//! Resolution order: command-line flag, environment, `.env` in the working
//! directory (loaded by `main` before parsing).

use anyhow::{Context, Result};
use clap::Args;

use hyperplanner_server::db::pool::{DEFAULT_COLLECTION, DEFAULT_DATABASE};
use hyperplanner_server::{MongoCourseStore, StoreConfig};

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// MongoDB connection string
    #[arg(long, env = "CONNECT_STR", hide_env_values = true)]
    pub connect_str: Option<String>,

    /// Database holding the course collection
    #[arg(long, env = "HYPERPLANNER_DB", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Course collection name
    #[arg(long, env = "HYPERPLANNER_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,
}

impl StoreArgs {
    pub fn store_config(&self) -> Result<StoreConfig> {
        let uri = self
            .connect_str
            .clone()
            .context("CONNECT_STR not set. Set via --connect-str, CONNECT_STR env, or .env")?;

        Ok(StoreConfig {
            uri,
            database: self.database.clone(),
            collection: self.collection.clone(),
        })
    }

    /// Open the process-wide store handle. Failure here is fatal.
    pub async fn connect(&self) -> Result<MongoCourseStore> {
        let config = self.store_config()?;
        MongoCourseStore::connect(&config)
            .await
            .context("Failed to connect to course store")
    }
}
