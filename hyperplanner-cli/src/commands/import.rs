//! Bulk-insert courses from a JSON file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hyperplanner_core::CourseStore;
use hyperplanner_server::http::routes::courses::CourseSubmission;

use crate::config::StoreArgs;

/// Arguments for the import command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// JSON file shaped like `{ "courses": [...] }`
    pub file: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run_import(args: ImportArgs) -> Result<()> {
    let raw = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let courses = if raw.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str::<CourseSubmission>(&raw)
            .with_context(|| format!("Invalid course file {}", args.file.display()))?
            .courses
    };

    let store = args.store.connect().await?;
    let inserted = store.insert_many(&courses).await;
    store.shutdown().await;

    let inserted = inserted.context("Bulk insert failed")?;
    tracing::info!(inserted, file = %args.file.display(), "import complete");
    println!("{}", inserted);
    Ok(())
}
