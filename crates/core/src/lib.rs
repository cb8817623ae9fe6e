pub mod aggregate;
pub mod artifacts;
pub mod dataset;
pub mod domain;
pub mod pages;
pub mod view;

pub mod config {
    use anyhow::Context;
    use std::path::PathBuf;

    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_REPORT_DIR: &str = "report";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub port: u16,
        pub report_dir: PathBuf,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT") {
                Ok(v) => v
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT must be a port number (got {v:?})"))?,
                Err(_) => DEFAULT_PORT,
            };

            Ok(Self {
                port,
                report_dir: std::env::var("REPORT_DIR")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_DIR)),
                sentry_dsn: std::env::var("SENTRY_DSN")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
            })
        }

        pub fn artifact_store(&self) -> crate::artifacts::ArtifactStore {
            crate::artifacts::ArtifactStore::new(self.report_dir.clone())
        }
    }
}
