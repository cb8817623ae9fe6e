//! Turns the page model into HTML fragments.

use ci_core::domain::Company;
use ci_core::pages::Page;
use ci_core::view::{Block, Bullet, Column, Download, KpiCard, Table};

use crate::shell::Links;
use crate::svg;

/// Escape HTML special characters
pub(crate) fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// What the block renderer needs beyond the blocks themselves.
pub(crate) struct Ctx<'a> {
    pub page: Page,
    pub links: &'a Links,
}

pub(crate) fn render_blocks(blocks: &[Block], ctx: &Ctx<'_>) -> String {
    let mut out = String::with_capacity(8 * 1024);
    for block in blocks {
        out.push_str(&render_block(block, ctx));
        out.push('\n');
    }
    out
}

fn render_block(block: &Block, ctx: &Ctx<'_>) -> String {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(2, 6);
            format!("<h{level}>{}</h{level}>", esc(text))
        }
        Block::Paragraph(text) => format!("<p>{}</p>", esc(text)),
        Block::Bullets(items) => render_bullets(items),
        Block::Kpis(cards) => render_kpis(cards),
        Block::Chart(chart) => format!(r#"<figure class="chart">{}</figure>"#, svg::render_chart(chart)),
        Block::Table(table) => render_table(table),
        Block::Columns(columns) => render_columns(columns, ctx),
        Block::CompanyPicker { label, selected } => render_picker(label, *selected, ctx),
        Block::Download(download) => render_download(download, ctx),
        Block::Warning(message) => format!(
            r#"<div class="warning" role="alert">{}</div>"#,
            esc(message)
        ),
        Block::Code(text) => format!("<p><code>{}</code></p>", esc(text)),
        Block::Divider => "<hr>".to_string(),
    }
}

fn render_bullets(items: &[Bullet]) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        out.push_str("<li>");
        if let Some(lead) = &item.lead {
            out.push_str(&format!("<strong>{}</strong>{}", esc(lead), esc(item.separator)));
        }
        out.push_str(&esc(&item.text));
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

fn render_kpis(cards: &[KpiCard]) -> String {
    let mut out = String::from(r#"<div class="kpis">"#);
    for card in cards {
        out.push_str(&format!(
            r#"<div class="metric-card"><div class="metric-label">{}</div><div class="metric-value">{}</div><div class="metric-sub">{}</div></div>"#,
            esc(&card.label),
            esc(&card.value),
            esc(&card.sublabel),
        ));
    }
    out.push_str("</div>");
    out
}

fn render_table(table: &Table) -> String {
    let mut out = String::from(r#"<div class="table-wrap"><table class="data"><thead><tr>"#);
    out.push_str(&format!("<th>{}</th>", esc(&table.index_header)));
    for column in &table.columns {
        out.push_str(&format!(r#"<th class="num">{}</th>"#, esc(column)));
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str(&format!("<tr><th>{}</th>", esc(&row.label)));
        for value in &row.values {
            out.push_str(&format!(
                r#"<td class="num">{:.*}</td>"#,
                table.precision, value
            ));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
    out
}

fn render_columns(columns: &[Column], ctx: &Ctx<'_>) -> String {
    let mut out = String::from(r#"<div class="columns">"#);
    for column in columns {
        out.push_str(&format!(
            r#"<div class="column" style="flex: {} 1 0">{}</div>"#,
            column.weight,
            render_blocks(&column.blocks, ctx)
        ));
    }
    out.push_str("</div>");
    out
}

fn render_picker(label: &str, selected: Company, ctx: &Ctx<'_>) -> String {
    let mut out = format!(
        r#"<nav class="picker" aria-label="{label}"><span class="picker-label">{label}</span>"#,
        label = esc(label)
    );
    for company in Company::ALL {
        let class = if company == selected {
            "pill pill-active"
        } else {
            "pill"
        };
        out.push_str(&format!(
            r#"<a class="{class}" href="{}">{}</a>"#,
            esc(&ctx.links.page(ctx.page, Some(company))),
            esc(company.name())
        ));
    }
    out.push_str("</nav>");
    out
}

fn render_download(download: &Download, ctx: &Ctx<'_>) -> String {
    format!(
        r#"<a class="download" href="{href}" download="{file}" type="{mime}">{label}</a>"#,
        href = esc(&ctx.links.download(download.artifact)),
        file = esc(download.file_name),
        mime = esc(download.mime),
        label = esc(download.label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ci_core::artifacts::Artifact;

    fn ctx(links: &Links) -> Ctx<'_> {
        Ctx {
            page: Page::Swot,
            links,
        }
    }

    #[test]
    fn escapes_text() {
        assert_eq!(esc(r#"<a href="x">R&D's</a>"#), "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;");
    }

    #[test]
    fn bullets_emphasise_lead() {
        let html = render_bullets(&[
            Bullet::labelled("BlackRock", "Scale & tech"),
            Bullet::plain("plain"),
        ]);
        assert_eq!(
            html,
            "<ul><li><strong>BlackRock</strong>: Scale &amp; tech</li><li>plain</li></ul>"
        );
    }

    #[test]
    fn picker_marks_selected_company() {
        let links = Links::Server;
        let html = render_picker("Select a company:", Company::StateStreet, &ctx(&links));
        assert_eq!(html.matches(r#"class="pill""#).count(), 2);
        assert!(html.contains(r#"<a class="pill pill-active" href="/swot?company=state-street">State Street</a>"#));
    }

    #[test]
    fn download_links_to_artifact_route() {
        let links = Links::Server;
        let html = render_download(
            &Download {
                artifact: Artifact::ExecutiveSummary,
                label: Artifact::ExecutiveSummary.button_label(),
                file_name: Artifact::ExecutiveSummary.file_name(),
                mime: "application/pdf",
            },
            &ctx(&links),
        );
        assert!(html.contains(r#"href="/downloads/executive-summary""#));
        assert!(html.contains(r#"download="Executive Summary.pdf""#));
    }

    #[test]
    fn table_uses_fixed_precision() {
        let html = render_table(&Table {
            index_header: "Company".into(),
            columns: vec!["Equity".into()],
            rows: vec![ci_core::view::TableRow {
                label: "Invesco".into(),
                values: vec![0.2665],
            }],
            precision: 2,
        });
        assert!(html.contains(r#"<td class="num">0.27</td>"#));
    }
}
