//! One renderer per navigation section plus the dispatcher that picks between
//! them.

use crate::artifacts::ArtifactStore;
use crate::dataset::Dataset;
use crate::domain::Company;
use crate::view::RenderedPage;
use std::fmt;

mod business_model;
mod downloads;
mod financials;
mod outlook;
mod overview;
mod product_mix;
mod risk;
mod swot;
mod technology;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Overview,
    Financials,
    BusinessModel,
    ProductMix,
    Technology,
    Risk,
    Swot,
    Outlook,
    Downloads,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 9] = [
        Page::Overview,
        Page::Financials,
        Page::BusinessModel,
        Page::ProductMix,
        Page::Technology,
        Page::Risk,
        Page::Swot,
        Page::Outlook,
        Page::Downloads,
    ];

    /// Name shown in the navigation.
    pub fn title(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Financials => "Financials",
            Page::BusinessModel => "Business Model",
            Page::ProductMix => "Product Mix",
            Page::Technology => "Technology",
            Page::Risk => "Risk & Regulation",
            Page::Swot => "SWOT",
            Page::Outlook => "Outlook",
            Page::Downloads => "Downloads",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Financials => "financials",
            Page::BusinessModel => "business-model",
            Page::ProductMix => "product-mix",
            Page::Technology => "technology",
            Page::Risk => "risk",
            Page::Swot => "swot",
            Page::Outlook => "outlook",
            Page::Downloads => "downloads",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// Whether the page offers a company picker.
    pub fn takes_company(self) -> bool {
        matches!(self, Page::BusinessModel | Page::Technology | Page::Swot)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Per-request UI state. Nothing here survives between requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub page: Page,
    pub company: Company,
}

impl Selection {
    pub fn new(page: Page, company: Option<Company>) -> Self {
        Self {
            page,
            company: company.unwrap_or_default(),
        }
    }
}

pub fn render(selection: &Selection, dataset: &Dataset, artifacts: &ArtifactStore) -> RenderedPage {
    match selection.page {
        Page::Overview => overview::render(dataset),
        Page::Financials => financials::render(dataset),
        Page::BusinessModel => business_model::render(dataset, selection.company),
        Page::ProductMix => product_mix::render(dataset),
        Page::Technology => technology::render(dataset, selection.company),
        Page::Risk => risk::render(dataset),
        Page::Swot => swot::render(dataset, selection.company),
        Page::Outlook => outlook::render(),
        Page::Downloads => downloads::render(artifacts),
    }
}

/// Fixed chart heights in pixels.
pub(crate) const CHART_HEIGHT: u32 = 360;
pub(crate) const TALL_CHART_HEIGHT: u32 = 420;
pub(crate) const SIDE_CHART_HEIGHT: u32 = 400;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Block;

    fn fixtures() -> (Dataset, ArtifactStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        (Dataset::snapshot().unwrap(), store, dir)
    }

    #[test]
    fn every_page_renders_something() {
        let (ds, store, _dir) = fixtures();
        for page in Page::ALL {
            let rendered = render(&Selection::new(page, None), &ds, &store);
            assert_eq!(rendered.page, page);
            assert!(!rendered.is_empty(), "{page} rendered no blocks");
            assert!(!rendered.title.is_empty());
        }
    }

    #[test]
    fn page_slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::from_slug("valuation"), None);
    }

    #[test]
    fn company_pages_show_picker_with_selection() {
        let (ds, store, _dir) = fixtures();
        for page in Page::ALL {
            let rendered = render(
                &Selection::new(page, Some(Company::Invesco)),
                &ds,
                &store,
            );
            let pickers: Vec<_> = rendered
                .walk()
                .into_iter()
                .filter_map(|b| match b {
                    Block::CompanyPicker { selected, .. } => Some(*selected),
                    _ => None,
                })
                .collect();
            if page.takes_company() {
                assert_eq!(pickers, vec![Company::Invesco], "{page}");
            } else {
                assert!(pickers.is_empty(), "{page}");
            }
        }
    }

    #[test]
    fn selection_defaults_to_first_company() {
        let selection = Selection::new(Page::Swot, None);
        assert_eq!(selection.company, Company::BlackRock);
    }
}
