use super::{Page, TALL_CHART_HEIGHT};
use crate::dataset::Dataset;
use crate::domain::{RiskCategory, RiskScore};
use crate::view::{Block, Bullet, Chart, Heatmap, RenderedPage};

pub(super) fn render(ds: &Dataset) -> RenderedPage {
    let heatmap = Heatmap {
        title: "Relative Risk Exposure Heatmap".to_string(),
        rows: ds
            .profiles
            .iter()
            .map(|(c, _)| c.name().to_string())
            .collect(),
        columns: RiskCategory::ALL
            .iter()
            .map(|c| c.label().to_string())
            .collect(),
        values: ds
            .profiles
            .iter()
            .map(|(c, _)| ds.risk.row(c).iter().map(|s| s.get()).collect())
            .collect(),
        min: RiskScore::MIN,
        max: RiskScore::MAX,
        scale_label: "Risk Level (1–5)".to_string(),
        height: TALL_CHART_HEIGHT,
    };

    RenderedPage {
        page: Page::Risk,
        title: "Risk & Regulatory Profile",
        subtitle: "Heatmap of key risk exposures: regulatory, market, interest rate, operational/tech and fee pressure.",
        blocks: vec![
            Block::Chart(Chart::Heatmap(heatmap)),
            Block::heading(3, "Narrative Interpretation"),
            Block::Bullets(vec![
                Bullet::led(
                    "State Street",
                    "shows the highest regulatory and interest rate risk due to its G-SIB status and NII dependence.",
                ),
                Bullet::led(
                    "BlackRock",
                    "faces elevated regulatory and operational/tech risk given its scale and centrality of Aladdin.",
                ),
                Bullet::led(
                    "Invesco",
                    "is most exposed to fee pressure and market risk, reflecting its traditional asset management model and smaller scale.",
                ),
            ]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heatmap_covers_full_grid() {
        let page = render(&Dataset::snapshot().unwrap());
        let Some(Block::Chart(Chart::Heatmap(map))) = page.blocks.first() else {
            panic!("risk page must lead with the heatmap");
        };
        assert_eq!(map.rows, vec!["BlackRock", "State Street", "Invesco"]);
        assert_eq!(map.columns.len(), 5);
        assert_eq!(map.values[1], vec![5, 3, 5, 4, 3]);
        assert!(map
            .values
            .iter()
            .flatten()
            .all(|v| (map.min..=map.max).contains(v)));
    }
}
