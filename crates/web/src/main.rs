use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ci_core::dataset::Dataset;
use ci_web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = ci_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    if let Err(e) = run(settings).await {
        sentry_anyhow::capture_anyhow(&e);
        tracing::error!(error = %e, "dashboard failed");
        return Err(e);
    }
    Ok(())
}

async fn run(settings: ci_core::config::Settings) -> anyhow::Result<()> {
    let dataset = Dataset::snapshot().context("dataset snapshot is invalid")?;
    let artifacts = settings.artifact_store();

    for artifact in ci_core::artifacts::Artifact::ALL {
        if !artifacts.is_available(artifact) {
            tracing::debug!(
                artifact = %artifact.slug(),
                expected = %artifacts.expected_location(artifact),
                "report not present; downloads page will show a warning"
            );
        }
    }

    let app = ci_web::app(AppState::new(dataset, artifacts)).layer(TraceLayer::new_for_http());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!(%addr, report_dir = %settings.report_dir.display(), "dashboard listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
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
