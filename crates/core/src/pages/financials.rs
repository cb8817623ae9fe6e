use super::{Page, CHART_HEIGHT};
use crate::aggregate::leader_by;
use crate::dataset::Dataset;
use crate::domain::{ByCompany, FinancialsRecord};
use crate::view::{
    BarChart, Block, Bullet, Chart, Column, KpiCard, RenderedPage, ScatterChart, ScatterPoint,
};

pub(super) fn render(ds: &Dataset) -> RenderedPage {
    let fin = &ds.financials;

    let (revenue_leader, revenue) = leader_by(fin, |f| f.revenue_bn);
    let (margin_leader, margin) = leader_by(fin, |f| f.op_margin_pct);
    let (roe_leader, roe) = leader_by(fin, |f| f.roe_pct);

    let kpis = vec![
        KpiCard::new("Revenue Leader", revenue_leader.name(), format!("{revenue:.1} Bn")),
        KpiCard::new(
            "Highest Operating Margin",
            margin_leader.name(),
            format!("{margin:.1}%"),
        ),
        KpiCard::new("ROE Leader", roe_leader.name(), format!("{roe:.1}%")),
    ];

    let returns = Chart::Scatter(ScatterChart {
        title: "ROE vs ROA (Bubble size = Revenue)".to_string(),
        x_label: "ROE (%)".to_string(),
        y_label: "ROA (%)".to_string(),
        points: fin
            .iter()
            .map(|(c, f)| ScatterPoint {
                label: c.name().to_string(),
                x: f.roe_pct,
                y: f.roa_pct,
                size: Some(f.revenue_bn),
            })
            .collect(),
        x_ticks: None,
        show_labels: false,
        height: CHART_HEIGHT,
    });

    RenderedPage {
        page: Page::Financials,
        title: "Financial Performance",
        subtitle: "Comparing revenue, profitability and returns across the three competitors.",
        blocks: vec![
            Block::Kpis(kpis),
            Block::Divider,
            Block::Columns(vec![
                Column::new(vec![
                    Block::Chart(bar(fin, "Total Revenue (2024, $Bn)", "Revenue ($Bn)", 1, |f| {
                        f.revenue_bn
                    })),
                    Block::Chart(bar(fin, "Operating Margin (%)", "Operating Margin (%)", 1, |f| {
                        f.op_margin_pct
                    })),
                ]),
                Column::new(vec![
                    Block::Chart(returns),
                    Block::Chart(bar(fin, "Net Income (2024, $Bn)", "Net Income ($Bn)", 2, |f| {
                        f.net_income_bn
                    })),
                ]),
            ]),
            Block::heading(3, "Interpretation"),
            Block::Bullets(vec![
                Bullet::led(
                    "BlackRock",
                    "generates the highest revenue and net income by a wide margin and sustains the best operating margin.",
                ),
                Bullet::led(
                    "State Street",
                    "delivers solid profitability within a lower-margin servicing model, with ROE close to BlackRock’s.",
                ),
                Bullet::led(
                    "Invesco",
                    "exhibits materially lower margins and returns, highlighting the impact of fee pressure and scale constraints.",
                ),
            ]),
        ],
    }
}

fn bar(
    fin: &ByCompany<FinancialsRecord>,
    title: &str,
    y_label: &str,
    value_precision: usize,
    metric: impl Fn(&FinancialsRecord) -> f64,
) -> Chart {
    Chart::Bar(BarChart {
        title: title.to_string(),
        y_label: y_label.to_string(),
        bars: fin
            .iter()
            .map(|(c, f)| (c.name().to_string(), metric(f)))
            .collect(),
        value_precision,
        height: CHART_HEIGHT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leader_cards_name_blackrock() {
        let page = render(&Dataset::snapshot().unwrap());
        let Some(Block::Kpis(kpis)) = page.blocks.first() else {
            panic!("financials must lead with KPI cards");
        };
        assert_eq!(kpis.len(), 3);
        assert!(kpis.iter().all(|k| k.value == "BlackRock"));
        assert_eq!(kpis[0].sublabel, "20.4 Bn");
        assert_eq!(kpis[1].sublabel, "37.1%");
        assert_eq!(kpis[2].sublabel, "13.4%");
    }

    #[test]
    fn renders_four_charts() {
        let page = render(&Dataset::snapshot().unwrap());
        let charts = page
            .walk()
            .into_iter()
            .filter(|b| matches!(b, Block::Chart(_)))
            .count();
        assert_eq!(charts, 4);
    }

    #[test]
    fn scatter_bubbles_sized_by_revenue() {
        let page = render(&Dataset::snapshot().unwrap());
        let scatter = page
            .walk()
            .into_iter()
            .find_map(|b| match b {
                Block::Chart(Chart::Scatter(s)) => Some(s),
                _ => None,
            })
            .unwrap();
        let sizes: Vec<_> = scatter.points.iter().map(|p| p.size.unwrap()).collect();
        assert_eq!(sizes, vec![20.407, 13.04, 6.067]);
    }
}
