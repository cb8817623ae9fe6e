use super::Page;
use crate::artifacts::{Artifact, ArtifactStore, PDF_MIME};
use crate::view::{Block, Column, Download, RenderedPage};

const REPOSITORY_URL: &str = "https://github.com/tommoni98/competitive-intel-asset-mgmt";

pub(super) fn render(store: &ArtifactStore) -> RenderedPage {
    let columns = Artifact::ALL
        .into_iter()
        .map(|artifact| {
            Column::new(vec![
                Block::heading(4, format!("📄 {}", artifact.heading())),
                slot(store, artifact),
            ])
        })
        .collect();

    RenderedPage {
        page: Page::Downloads,
        title: "Downloads & Artefacts",
        subtitle: "Download the PDF versions of the full report and executive summary used in this analysis.",
        blocks: vec![
            Block::Columns(columns),
            Block::Divider,
            Block::heading(4, "🔗 GitHub Repository"),
            Block::paragraph("View the full project, code and documentation on GitHub."),
            Block::Code(REPOSITORY_URL.to_string()),
        ],
    }
}

/// Download control when the file is on disk, otherwise a warning in its place.
fn slot(store: &ArtifactStore, artifact: Artifact) -> Block {
    if store.is_available(artifact) {
        Block::Download(Download {
            artifact,
            label: artifact.button_label(),
            file_name: artifact.file_name(),
            mime: PDF_MIME,
        })
    } else {
        Block::Warning(store.missing(artifact).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls(page: &RenderedPage) -> (Vec<Artifact>, Vec<String>) {
        let mut downloads = Vec::new();
        let mut warnings = Vec::new();
        for block in page.walk() {
            match block {
                Block::Download(d) => downloads.push(d.artifact),
                Block::Warning(w) => warnings.push(w.clone()),
                _ => {}
            }
        }
        (downloads, warnings)
    }

    #[test]
    fn missing_files_become_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let page = render(&ArtifactStore::new(dir.path()));
        let (downloads, warnings) = controls(&page);
        assert!(downloads.is_empty());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Competitive Intelligence Analysis.pdf"));
        assert!(warnings[1].contains("Executive Summary.pdf"));
    }

    #[test]
    fn present_file_gets_a_control_and_no_warning() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Competitive Intelligence Analysis.pdf"), b"%PDF").unwrap();
        let page = render(&ArtifactStore::new(dir.path()));
        let (downloads, warnings) = controls(&page);
        assert_eq!(downloads, vec![Artifact::FullReport]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Executive summary PDF not found."));
    }
}
