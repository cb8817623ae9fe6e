//! Writes the whole dashboard to a directory of static HTML files.

use std::path::{Path, PathBuf};

use anyhow::Context;

use ci_core::artifacts::{Artifact, ArtifactStore};
use ci_core::dataset::Dataset;
use ci_core::domain::Company;
use ci_core::pages::{Page, Selection};
use ci_web::{render_document, Links};

pub const DOWNLOADS_DIR: &str = "downloads";

/// One HTML file of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    pub file_name: String,
    pub selection: Selection,
}

/// Every file the export produces, in sidebar order.
///
/// `index.html` duplicates the landing page so the directory opens on it.
pub fn plan() -> Vec<PageFile> {
    let mut files = vec![PageFile {
        file_name: "index.html".to_string(),
        selection: Selection::default(),
    }];

    for page in Page::ALL {
        files.push(PageFile {
            file_name: Links::Static.page(page, None),
            selection: Selection::new(page, None),
        });
        if page.takes_company() {
            for company in Company::ALL {
                files.push(PageFile {
                    file_name: Links::Static.page(page, Some(company)),
                    selection: Selection::new(page, Some(company)),
                });
            }
        }
    }
    files
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub pages: usize,
    pub artifacts: Vec<Artifact>,
}

pub async fn write(out: &Path, dataset: &Dataset, store: &ArtifactStore) -> anyhow::Result<Summary> {
    tokio::fs::create_dir_all(out)
        .await
        .with_context(|| format!("create output dir {}", out.display()))?;

    let mut summary = Summary::default();
    for file in plan() {
        let html = render_document(&file.selection, dataset, store, &Links::Static);
        let path = out.join(&file.file_name);
        tokio::fs::write(&path, html)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "page written");
        summary.pages += 1;
    }

    for artifact in Artifact::ALL {
        if !store.is_available(artifact) {
            tracing::debug!(
                artifact = %artifact.slug(),
                expected = %store.expected_location(artifact),
                "report not present; skipping"
            );
            continue;
        }
        let target = downloads_path(out, artifact);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create {}", parent.display()))?;
        }
        tokio::fs::copy(store.path(artifact), &target)
            .await
            .with_context(|| format!("copy {} to {}", artifact.file_name(), target.display()))?;
        summary.artifacts.push(artifact);
    }

    Ok(summary)
}

pub fn downloads_path(out: &Path, artifact: Artifact) -> PathBuf {
    out.join(DOWNLOADS_DIR).join(artifact.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_covers_pages_and_company_variants() {
        let files = plan();
        // index + 9 pages + 3 company pages x 3 companies
        assert_eq!(files.len(), 1 + 9 + 9);
        assert_eq!(files[0].file_name, "index.html");
        assert_eq!(files[0].selection.page, Page::Overview);

        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert!(names.contains(&"risk.html"));
        assert!(names.contains(&"technology-state-street.html"));
        assert!(!names.iter().any(|n| n.starts_with("risk-")));

        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }

    #[tokio::test]
    async fn writes_pages_and_copies_present_reports() {
        let report = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let payload = b"%PDF-1.7 full report".to_vec();
        std::fs::write(report.path().join("Competitive Intelligence Analysis.pdf"), &payload)
            .unwrap();

        let store = ArtifactStore::new(report.path());
        let summary = write(out.path(), &Dataset::snapshot().unwrap(), &store)
            .await
            .unwrap();

        assert_eq!(summary.pages, plan().len());
        assert_eq!(summary.artifacts, vec![Artifact::FullReport]);

        let copied = std::fs::read(downloads_path(out.path(), Artifact::FullReport)).unwrap();
        assert_eq!(copied, payload);
        assert!(!downloads_path(out.path(), Artifact::ExecutiveSummary).exists());

        let downloads = std::fs::read_to_string(out.path().join("downloads.html")).unwrap();
        assert!(downloads.contains(r#"href="downloads/Competitive%20Intelligence%20Analysis.pdf""#));
        assert!(downloads.contains("Executive summary PDF not found"));

        let swot = std::fs::read_to_string(out.path().join("swot-invesco.html")).unwrap();
        assert!(swot.contains(r#"<a class="pill pill-active" href="swot-invesco.html">Invesco</a>"#));
    }
}
