//! `huntboard-reporter` -- submit a manual testing report from a JSON draft.
//!
//! Replays the draft into a report dialog exactly as the form would, submits
//! it, and logs the toasts the dialog raises. Exits non-zero when the draft
//! is missing required fields.
//!
//! # Environment variables
//!
//! | Variable            | Required | Default     | Description                          |
//! |---------------------|----------|-------------|--------------------------------------|
//! | `REPORT_DRAFT_PATH` | yes*     | --          | Draft JSON (*or first CLI argument)  |
//! | `CATALOG_PATH`      | no       | built-in    | Testing type catalog override (JSON) |
//! | `LABEL_STRATEGY`    | no       | `monotonic` | `monotonic` or `positional` ids      |
//! | `DRAFT_POLICY`      | no       | `discard`   | `discard` or `preserve`              |

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huntboard_core::repository::{InMemoryReportRepository, ReportRepository};
use huntboard_core::{NotificationSink, SubmitOutcome};
use huntboard_events::{ToastBus, TracingNotifier};
use huntboard_reporter::{session, ReporterConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huntboard_reporter=info,huntboard_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ReporterConfig::from_env(std::env::args().nth(1).map(PathBuf::from))?;
    tracing::info!(
        draft = %config.draft_path.display(),
        label_strategy = config.dialog.label_strategy.as_str(),
        "Starting huntboard-reporter",
    );

    let bus = Arc::new(ToastBus::default());
    let listener = tokio::spawn(log_toasts(bus.subscribe()));

    let repository = Arc::new(InMemoryReportRepository::new());
    let sink: Arc<dyn NotificationSink> = bus.clone();
    let repo: Arc<dyn ReportRepository> = repository.clone();

    // The session is synchronous; run it off the async workers.
    let run_config = config.clone();
    let result =
        tokio::task::spawn_blocking(move || session::run(&run_config, sink, Some(repo))).await??;

    // Dropping the last sender closes the bus and ends the listener.
    drop(bus);
    listener.await?;

    let s = result.summary;
    tracing::info!(
        total = s.total,
        passed = s.passed,
        failed = s.failed,
        partial = s.partial,
        blocked = s.blocked,
        stored = repository.len(),
        "Test case summary",
    );

    match result.outcome {
        SubmitOutcome::Submitted { report_id } => {
            tracing::info!(report_id = ?report_id, "Report accepted");
            Ok(())
        }
        SubmitOutcome::Rejected(missing) => {
            let names: Vec<&str> = missing.iter().map(|m| m.label()).collect();
            anyhow::bail!("report rejected, missing: {}", names.join(", "))
        }
    }
}

/// Print every toast until the bus closes.
async fn log_toasts(mut rx: broadcast::Receiver<huntboard_events::ToastEvent>) {
    let printer = TracingNotifier;
    loop {
        match rx.recv().await {
            Ok(toast) => printer.notify(toast.notification),
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!(skipped = n, "Toast listener lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
