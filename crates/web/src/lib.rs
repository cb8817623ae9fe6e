//! HTTP surface of the dashboard: one HTML route per page plus the report
//! downloads.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};

use ci_core::artifacts::{Artifact, ArtifactStore, PDF_MIME};
use ci_core::dataset::Dataset;
use ci_core::domain::Company;
use ci_core::pages::{self, Page, Selection};

pub mod error;
mod html;
pub mod shell;
mod svg;

use error::AppError;
pub use shell::Links;

#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub artifacts: ArtifactStore,
}

impl AppState {
    pub fn new(dataset: Dataset, artifacts: ArtifactStore) -> Self {
        Self {
            dataset: Arc::new(dataset),
            artifacts,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(index))
        .route("/downloads/:artifact", get(download))
        .route("/:page", get(page))
        .with_state(state)
}

/// Renders a full HTML document for `selection`.
pub fn render_document(
    selection: &Selection,
    dataset: &Dataset,
    artifacts: &ArtifactStore,
    links: &Links,
) -> String {
    let rendered = pages::render(selection, dataset, artifacts);
    shell::document(&rendered, dataset.as_of, links)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index() -> Redirect {
    Redirect::to(&Links::Server.page(Page::default(), None))
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(default, deserialize_with = "blank_as_default")]
    company: Option<Company>,
}

/// `?company=` with an empty value selects the default company.
fn blank_as_default<'de, D>(deserializer: D) -> Result<Option<Company>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(slug) => Company::deserialize(slug.into_deserializer()).map(Some),
    }
}

async fn page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let page =
        Page::from_slug(&slug).ok_or_else(|| AppError::NotFound(format!("no page named {slug}")))?;

    let selection = Selection::new(page, query.company);
    tracing::debug!(page = %page.slug(), company = %selection.company.slug(), "render page");

    Ok(Html(render_document(
        &selection,
        &state.dataset,
        &state.artifacts,
        &Links::Server,
    )))
}

async fn download(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let artifact = Artifact::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("no download named {slug}")))?;

    let bytes = state.artifacts.read(artifact).await?;
    tracing::info!(artifact = %artifact.slug(), bytes = bytes.len(), "serving download");

    Ok((
        [
            (header::CONTENT_TYPE, PDF_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!(r#"attachment; filename="{}""#, artifact.file_name()),
            ),
        ],
        bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::{StatusCode, Uri};
    use axum::response::Response;

    fn state(dir: &std::path::Path) -> AppState {
        AppState::new(Dataset::snapshot().unwrap(), ArtifactStore::new(dir))
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn query(company: Option<&str>) -> Query<PageQuery> {
        let uri: Uri = match company {
            Some(c) => format!("/swot?company={c}"),
            None => "/swot".to_string(),
        }
        .parse()
        .unwrap();
        Query::try_from_uri(&uri).unwrap()
    }

    #[tokio::test]
    async fn healthz_says_ok() {
        assert_eq!(healthz().await, "ok");
    }

    #[tokio::test]
    async fn root_redirects_to_overview() {
        let response = index().await.into_response();
        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/overview"
        );
    }

    #[tokio::test]
    async fn every_page_serves_html() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path());
        for p in Page::ALL {
            let response = page(
                State(state.clone()),
                Path(p.slug().to_string()),
                query(None),
            )
            .await
            .into_response();
            assert_eq!(response.status(), StatusCode::OK, "{p}");
            let body = body_text(response).await;
            assert!(body.starts_with("<!DOCTYPE html>"));
            assert!(body.contains(&format!(r#"data-page="{}""#, p.slug())));
            assert!(body.contains(r#"<time datetime="2024-12-31">"#));
        }
    }

    #[tokio::test]
    async fn company_query_selects_company() {
        let dir = tempfile::tempdir().unwrap();
        let response = page(
            State(state(dir.path())),
            Path("swot".into()),
            query(Some("state-street")),
        )
        .await
        .into_response();
        let body = body_text(response).await;
        assert!(body.contains(
            r#"<a class="pill pill-active" href="/swot?company=state-street">State Street</a>"#
        ));
    }

    #[tokio::test]
    async fn unknown_page_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let missing = page(State(state(dir.path())), Path("valuation".into()), query(None))
            .await
            .into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn company_query_parses_slugs() {
        assert_eq!(query(Some("invesco")).0.company, Some(Company::Invesco));
        assert_eq!(query(Some("state-street")).0.company, Some(Company::StateStreet));
        assert_eq!(query(Some("")).0.company, None);
        assert_eq!(query(None).0.company, None);
    }

    #[test]
    fn unknown_company_is_400() {
        let uri: Uri = "/swot?company=vanguard".parse().unwrap();
        let rejection = Query::<PageQuery>::try_from_uri(&uri).unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn downloads_page_warns_when_reports_absent() {
        let dir = tempfile::tempdir().unwrap();
        let response = page(State(state(dir.path())), Path("downloads".into()), query(None))
            .await
            .into_response();
        let body = body_text(response).await;
        assert_eq!(body.matches(r#"class="warning""#).count(), 2);
        assert!(body.contains("Executive summary PDF not found.\n\nExpected at: `"));
        assert!(!body.contains(r#"class="download""#));
    }

    #[tokio::test]
    async fn download_returns_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let payload = b"%PDF-1.4\n\x00\x01\x02binary\n%%EOF".to_vec();
        std::fs::write(dir.path().join("Executive Summary.pdf"), &payload).unwrap();

        let response = download(State(state(dir.path())), Path("executive-summary".into()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            r#"attachment; filename="Executive Summary.pdf""#
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(bytes.as_ref(), payload.as_slice());
    }

    #[tokio::test]
    async fn missing_download_is_404_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let response = download(State(state(dir.path())), Path("full-report".into()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_text(response).await;
        assert!(body.starts_with("Full report PDF not found.\n\nExpected at: `"));
        assert!(body.contains("Competitive Intelligence Analysis.pdf"));
    }
}
