use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";

/// The two report documents offered on the downloads page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    FullReport,
    ExecutiveSummary,
}

impl Artifact {
    pub const ALL: [Artifact; 2] = [Artifact::FullReport, Artifact::ExecutiveSummary];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::FullReport => "Competitive Intelligence Analysis.pdf",
            Artifact::ExecutiveSummary => "Executive Summary.pdf",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Artifact::FullReport => "full-report",
            Artifact::ExecutiveSummary => "executive-summary",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.slug() == slug)
    }

    pub fn heading(self) -> &'static str {
        match self {
            Artifact::FullReport => "Full Competitive Intelligence Report",
            Artifact::ExecutiveSummary => "Executive Summary",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Artifact::FullReport => "Download Full Report (PDF)",
            Artifact::ExecutiveSummary => "Download Executive Summary (PDF)",
        }
    }

    fn missing_label(self) -> &'static str {
        match self {
            Artifact::FullReport => "Full report PDF",
            Artifact::ExecutiveSummary => "Executive summary PDF",
        }
    }
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("{label} not found.\n\nExpected at: `{expected}`")]
    Missing {
        label: &'static str,
        expected: String,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Looks up report documents under a fixed directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.dir.join(artifact.file_name())
    }

    /// Display form of where the file is expected, as configured.
    pub fn expected_location(&self, artifact: Artifact) -> String {
        self.path(artifact).display().to_string()
    }

    pub fn is_available(&self, artifact: Artifact) -> bool {
        self.path(artifact).is_file()
    }

    pub fn missing(&self, artifact: Artifact) -> ArtifactError {
        ArtifactError::Missing {
            label: artifact.missing_label(),
            expected: self.expected_location(artifact),
        }
    }

    /// Reads the whole document into memory.
    pub async fn read(&self, artifact: Artifact) -> Result<Vec<u8>, ArtifactError> {
        let path = self.path(artifact);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(self.missing(artifact)),
        }
        tokio::fs::read(&path).await.map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => self.missing(artifact),
            _ => ArtifactError::Read { path, source },
        })
    }
}
