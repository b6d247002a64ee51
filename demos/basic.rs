//! Basic usage: register a few tasks and run one dispatch pass.
//!
//! In production, an external trigger (OS cron, a systemd timer) invokes
//! the pass once per minute; here we just call it with the current time.
//!
//! Run with: cargo run --example basic

use crontask::{CronTask, DispatcherBuilder};
use std::future::Future;
use std::pin::Pin;

struct Heartbeat;

impl CronTask for Heartbeat {
    fn name(&self) -> &str {
        "heartbeat"
    }

    fn schedule(&self) -> &str {
        "* * * * *"
    }

    fn process(&self) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + '_>> {
        Box::pin(async move {
            println!("heartbeat: still alive");
            Ok(())
        })
    }
}

struct FlakyCleanup;

impl CronTask for FlakyCleanup {
    fn name(&self) -> &str {
        "cleanup"
    }

    fn schedule(&self) -> &str {
        "* * * * *"
    }

    fn process(&self) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + '_>> {
        Box::pin(async move { anyhow::bail!("temp dir is locked") })
    }
}

struct Parked;

impl CronTask for Parked {
    fn name(&self) -> &str {
        "parked"
    }

    fn schedule(&self) -> &str {
        // Empty schedule = disabled; stays registered, never runs.
        ""
    }

    fn process(&self) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + '_>> {
        Box::pin(async move { Ok(()) })
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

    let dispatcher = DispatcherBuilder::new()
        .register(Heartbeat)
        .register(FlakyCleanup)
        .register(Parked)
        .build()?;

    let results = dispatcher.run_due(chrono::Utc::now()).await;

    println!("\npass results:");
    for result in &results {
        println!("  {:<10} {:?}", result.task, result.outcome);
    }

    Ok(())
}
