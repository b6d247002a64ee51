//! Schedules resolved from a config file.
//!
//! The task returns a `${...}` placeholder from `schedule()`; the builder
//! resolves it against `demos/application.toml` before parsing. Setting
//! `CRONTASK_REPORT_CRON` overrides the file value.
//!
//! Run with: cargo run --example with-config

use crontask::{CronTask, DispatcherBuilder};
use std::future::Future;
use std::pin::Pin;

struct WeeklyReport;

impl CronTask for WeeklyReport {
    fn name(&self) -> &str {
        "report"
    }

    fn schedule(&self) -> &str {
        "${report.cron:0 9 * * 1}"
    }

    fn process(&self) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + '_>> {
        Box::pin(async move {
            println!("compiling the weekly report");
            Ok(())
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let dispatcher = DispatcherBuilder::with_toml("demos/application.toml")
        .register(WeeklyReport)
        .build()?;

    for result in dispatcher.run_due(chrono::Utc::now()).await {
        println!("{:<10} {:?}", result.task, result.outcome);
    }

    Ok(())
}
