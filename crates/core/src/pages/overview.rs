use super::{Page, CHART_HEIGHT};
use crate::aggregate;
use crate::dataset::Dataset;
use crate::view::{BarChart, Block, Bullet, Chart, Column, KpiCard, RenderedPage};

pub(super) fn render(ds: &Dataset) -> RenderedPage {
    let profiles = &ds.profiles;

    let kpis = vec![
        KpiCard::new(
            "Total AUM (2024)",
            format!("{:.2} Tn", aggregate::total_aum(profiles)),
            format!("Across {} managers", profiles.len()),
        ),
        KpiCard::new(
            "Total ETF AUM",
            format!("{:.2} Tn", aggregate::total_etf_aum(profiles)),
            "ETF platforms",
        ),
        KpiCard::new(
            "Total Alternatives",
            format!("{:.2} Tn", aggregate::total_alternatives_aum(profiles)),
            "Private markets & alts",
        ),
        KpiCard::new(
            "Avg Tech Strength",
            format!("{:.1} / 10", aggregate::average_tech_score(profiles)),
            "Tech & platform capability",
        ),
    ];

    let aum = BarChart {
        title: "Total AUM 2024".to_string(),
        y_label: "AUM ($ Trillions)".to_string(),
        bars: profiles
            .iter()
            .map(|(c, p)| (c.name().to_string(), p.aum_tn))
            .collect(),
        value_precision: 2,
        height: CHART_HEIGHT,
    };

    let etf_share = BarChart {
        title: "ETF AUM as % of Total AUM".to_string(),
        y_label: "ETF Share of AUM (%)".to_string(),
        bars: profiles
            .iter()
            .map(|(c, p)| (c.name().to_string(), aggregate::etf_share_pct(p)))
            .collect(),
        value_precision: 1,
        height: CHART_HEIGHT,
    };

    RenderedPage {
        page: Page::Overview,
        title: "Overview & Executive Snapshot",
        subtitle: "High-level view of scale, ETF exposure, alternatives and technology strength for BlackRock, State Street and Invesco.",
        blocks: vec![
            Block::Kpis(kpis),
            Block::Divider,
            Block::Columns(vec![
                Column::new(vec![Block::Chart(Chart::Bar(aum))]),
                Column::new(vec![Block::Chart(Chart::Bar(etf_share))]),
            ]),
            Block::heading(3, "Narrative Highlights"),
            Block::Bullets(vec![
                Bullet::labelled(
                    "BlackRock",
                    "Clear scale leader with > $11.5T AUM and the highest tech score, reflecting the strength of Aladdin and its expansion into private markets.",
                ),
                Bullet::labelled(
                    "State Street",
                    "Smaller AUM as an asset manager but huge AUC/A as a servicer; strong ETF presence via SPDR and a robust Alpha platform.",
                ),
                Bullet::labelled(
                    "Invesco",
                    "Large independent manager with meaningful ETF and alternatives exposure, but trailing in overall scale and tech score.",
                ),
            ]),
        ],
    }
}
