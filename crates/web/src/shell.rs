//! Page chrome: document head, global theme, header and sidebar.

use chrono::NaiveDate;

use ci_core::artifacts::Artifact;
use ci_core::domain::Company;
use ci_core::pages::Page;
use ci_core::view::RenderedPage;

use crate::html::{self, esc, Ctx};

pub const DOCUMENT_TITLE: &str = "Competitive Intelligence – Asset Management";

/// How pages and downloads are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Links {
    /// Routes served by the HTTP service.
    Server,
    /// Relative file names written by the static exporter.
    Static,
}

impl Links {
    pub fn page(&self, page: Page, company: Option<Company>) -> String {
        match (self, company) {
            (Links::Server, None) => format!("/{}", page.slug()),
            (Links::Server, Some(c)) => format!("/{}?company={}", page.slug(), c.slug()),
            (Links::Static, None) => format!("{}.html", page.slug()),
            (Links::Static, Some(c)) => format!("{}-{}.html", page.slug(), c.slug()),
        }
    }

    pub fn download(&self, artifact: Artifact) -> String {
        match self {
            Links::Server => format!("/downloads/{}", artifact.slug()),
            Links::Static => format!("downloads/{}", artifact.file_name().replace(' ', "%20")),
        }
    }
}

/// Wraps a rendered page into a complete HTML document.
pub fn document(rendered: &RenderedPage, as_of: NaiveDate, links: &Links) -> String {
    let ctx = Ctx {
        page: rendered.page,
        links,
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} · {section}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🏦</text></svg>">
    <style>{css}</style>
</head>
<body>
<div class="app">
    {sidebar}
    <main class="main">
        <div class="block-container">
            {header}
            <section class="page" data-page="{slug}">
                <div class="section-title">{page_title}</div>
                <div class="section-subtitle">{subtitle}</div>
                {body}
            </section>
        </div>
    </main>
</div>
</body>
</html>"#,
        title = esc(DOCUMENT_TITLE),
        section = esc(rendered.page.title()),
        css = THEME_CSS,
        sidebar = sidebar(rendered.page, links),
        header = header(as_of),
        slug = rendered.page.slug(),
        page_title = esc(rendered.title),
        subtitle = esc(rendered.subtitle),
        body = html::render_blocks(&rendered.blocks, &ctx),
    )
}

fn header(as_of: NaiveDate) -> String {
    format!(
        r#"<header class="masthead">
                <h1>Competitive Intelligence Dashboard</h1>
                <p class="muted">Strategic analysis of BlackRock, State Street and Invesco based on 2024 10-Ks and Annual Reports (figures as of <time datetime="{iso}">{long}</time>).</p>
            </header>"#,
        iso = as_of.format("%Y-%m-%d"),
        long = as_of.format("%-d %B %Y"),
    )
}

fn sidebar(current: Page, links: &Links) -> String {
    let pills: String = Company::ALL
        .iter()
        .map(|c| format!(r#"<span class="pill">{}</span> "#, esc(c.name())))
        .collect();

    let mut nav = String::new();
    for page in Page::ALL {
        let (class, aria) = if page == current {
            ("nav-link nav-active", r#" aria-current="page""#)
        } else {
            ("nav-link", "")
        };
        nav.push_str(&format!(
            r#"<li><a class="{class}" href="{href}"{aria}>{title}</a></li>"#,
            href = esc(&links.page(page, None)),
            title = esc(page.title()),
        ));
    }

    format!(
        r#"<aside class="sidebar">
        <h3>🏦 CI: Asset Management</h3>
        <div class="pills">{pills}</div>
        <nav aria-label="Navigate"><p class="nav-caption">Navigate</p><ul class="nav">{nav}</ul></nav>
    </aside>"#
    )
}

const THEME_CSS: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: "Source Sans Pro", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    background: radial-gradient(circle at top, #020617 0, #020617 45%, #000 100%);
    color: #e5e7eb;
}
a { color: #93c5fd; }
.app { display: flex; min-height: 100vh; }
.sidebar {
    width: 260px;
    flex-shrink: 0;
    padding: 1.5rem 1.2rem;
    background: #0f172a;
    border-right: 1px solid rgba(148,163,184,0.25);
}
.nav-caption { font-size: 0.8rem; color: #9ca3af; margin: 1.2rem 0 0.4rem; }
.nav { list-style: none; padding: 0; margin: 0; }
.nav-link {
    display: block;
    padding: 0.35rem 0.6rem;
    border-radius: 8px;
    color: #e5e7eb;
    text-decoration: none;
}
.nav-link:hover { background: rgba(148,163,184,0.12); }
.nav-active { background: rgba(99,110,250,0.25); font-weight: 600; }
.main {
    flex: 1;
    background: linear-gradient(140deg, #020617 0%, #020617 40%, #020617 100%);
}
.block-container { padding: 1.5rem 2.5rem 2rem; max-width: 1280px; }
.masthead h1 { margin-bottom: 0.1rem; }
.muted { color: #9ca3af; font-size: 0.92rem; margin-bottom: 0.5rem; }
.kpis { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; }
.metric-card {
    background: linear-gradient(135deg, rgba(15,23,42,0.95), rgba(15,23,42,0.8));
    border-radius: 18px;
    border: 1px solid rgba(148,163,184,0.4);
    padding: 0.9rem 1.1rem;
    box-shadow: 0 18px 45px rgba(15,23,42,0.85);
}
.metric-label {
    font-size: 0.8rem;
    color: #9ca3af;
    text-transform: uppercase;
    letter-spacing: 0.07em;
    margin-bottom: 0.15rem;
}
.metric-value { font-size: 1.35rem; font-weight: 600; color: #e5e7eb; }
.metric-sub { font-size: 0.8rem; color: #9ca3af; }
.section-title { font-size: 1.4rem; font-weight: 600; margin-bottom: 0.4rem; }
.section-subtitle { font-size: 0.9rem; color: #9ca3af; margin-bottom: 0.8rem; }
.pill {
    display: inline-flex;
    padding: 0.15rem 0.6rem;
    border-radius: 999px;
    border: 1px solid rgba(148,163,184,0.65);
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    margin-right: 0.3rem;
    color: #9ca3af;
    text-decoration: none;
}
.pill-active { border-color: #636efa; color: #e5e7eb; background: rgba(99,110,250,0.25); }
.picker { margin: 0.6rem 0 1rem; display: flex; flex-wrap: wrap; align-items: center; gap: 0.3rem; }
.picker-label { font-size: 0.9rem; margin-right: 0.5rem; }
.columns { display: flex; gap: 1.5rem; flex-wrap: wrap; }
.column { min-width: 280px; }
figure.chart { margin: 0 0 1rem; }
figure.chart svg { width: 100%; height: auto; background: #111827; border-radius: 8px; }
.table-wrap { overflow-x: auto; }
table.data { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
table.data th, table.data td { padding: 0.4rem 0.7rem; border-bottom: 1px solid rgba(148,163,184,0.25); text-align: left; }
table.data .num { text-align: right; font-variant-numeric: tabular-nums; }
.warning {
    white-space: pre-line;
    background: rgba(250,204,21,0.12);
    border: 1px solid rgba(250,204,21,0.45);
    color: #fde68a;
    border-radius: 8px;
    padding: 0.8rem 1rem;
}
.download {
    display: inline-block;
    padding: 0.5rem 1rem;
    border-radius: 8px;
    border: 1px solid rgba(148,163,184,0.65);
    color: #e5e7eb;
    text-decoration: none;
}
.download:hover { border-color: #636efa; }
hr { border: none; border-top: 1px solid rgba(148,163,184,0.25); margin: 1.5rem 0; }
code { background: rgba(148,163,184,0.15); padding: 0.1rem 0.35rem; border-radius: 4px; }
"#;
