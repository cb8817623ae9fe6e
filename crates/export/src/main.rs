use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod site;

#[derive(Debug, Parser)]
#[command(name = "ci_export")]
struct Args {
    /// Directory the HTML files are written to.
    #[arg(long, default_value = "site")]
    out: PathBuf,

    /// Directory holding the report PDFs. Overrides REPORT_DIR.
    #[arg(long)]
    report_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = ci_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(dir) = args.report_dir {
        settings.report_dir = dir;
    }

    let dataset = ci_core::dataset::Dataset::snapshot().context("dataset snapshot is invalid")?;
    let store = settings.artifact_store();

    match site::write(&args.out, &dataset, &store).await {
        Ok(summary) => {
            tracing::info!(
                out = %args.out.display(),
                pages = summary.pages,
                reports = summary.artifacts.len(),
                "static site written"
            );
            Ok(())
        }
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(out = %args.out.display(), error = %err, "export failed");
            Err(err)
        }
    }
}

fn init_sentry(settings: &ci_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
