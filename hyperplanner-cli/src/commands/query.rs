//! Filtered read printed as JSON

use anyhow::{Context, Result};
use clap::Parser;

use hyperplanner_core::{build_filter_decoded, CourseStore};
use hyperplanner_server::http::routes::courses::CourseList;

use crate::config::StoreArgs;

/// Arguments for the query command
#[derive(Parser, Debug)]
pub struct QueryArgs {
    #[arg(long)]
    pub campus: Option<String>,

    #[arg(long)]
    pub code: Option<String>,

    /// Decimal credit value, e.g. 3.0
    #[arg(long)]
    pub credits: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

impl QueryArgs {
    fn inputs(&self) -> Vec<(&'static str, &str)> {
        [
            ("campus", &self.campus),
            ("code", &self.code),
            ("credits", &self.credits),
            ("title", &self.title),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

pub async fn run_query(args: QueryArgs) -> Result<()> {
    // Validate before opening a connection
    let filter = build_filter_decoded(args.inputs()).context("Invalid filter")?;

    let store = args.store.connect().await?;
    let courses = store.find_by_filter(&filter).await;
    store.shutdown().await;

    let courses = courses.context("Course lookup failed")?;
    let list = CourseList {
        length: courses.len(),
        courses,
    };
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}
