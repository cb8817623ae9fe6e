use super::{Page, TALL_CHART_HEIGHT};
use crate::dataset::Dataset;
use crate::domain::{Company, FeeLevel};
use crate::view::{Block, Bullet, Chart, RenderedPage, ScatterChart, ScatterPoint};

pub(super) fn render(ds: &Dataset, company: Company) -> RenderedPage {
    let model = &ds.business_models[company];

    let positioning = ScatterChart {
        title: "Competitive Positioning: Fees vs Technology".to_string(),
        x_label: "Relative Fee Level (Higher = More Expensive)".to_string(),
        y_label: "Technology / Platform Strength (1–10)".to_string(),
        points: ds
            .profiles
            .iter()
            .map(|(c, p)| ScatterPoint {
                label: c.name().to_string(),
                x: f64::from(p.fee_level.score()),
                y: f64::from(p.tech_score),
                size: None,
            })
            .collect(),
        x_ticks: Some(
            FeeLevel::ALL
                .iter()
                .map(|f| (f64::from(f.score()), f.label().to_string()))
                .collect(),
        ),
        show_labels: true,
        height: TALL_CHART_HEIGHT,
    };

    RenderedPage {
        page: Page::BusinessModel,
        title: "Business Model & Strategic Positioning",
        subtitle: "Comparing how each firm creates value through its core model and strategic pillars.",
        blocks: vec![
            Block::CompanyPicker {
                label: "Select a company to explore its business model:",
                selected: company,
            },
            Block::heading(4, format!("{company} – Model Overview")),
            Block::paragraph(model.narrative),
            Block::heading(4, "Strategic Pillars"),
            Block::Bullets(model.pillars.iter().map(|p| Bullet::plain(*p)).collect()),
            Block::Divider,
            Block::heading(4, "Strategic Positioning Map – Price vs Innovation"),
            Block::Chart(Chart::Scatter(positioning)),
            Block::Bullets(vec![
                Bullet::led(
                    "Top-left quadrant (low fee, high tech)",
                    "is the most attractive: BlackRock is closest given its scale and Aladdin.",
                ),
                Bullet::led(
                    "State Street",
                    "leans more toward institutional, competitively priced servicing with strong platform capability.",
                ),
                Bullet::led(
                    "Invesco",
                    "sits in the middle on fees and somewhat lower on tech, relying on its product franchises rather than a flagship platform.",
                ),
            ]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_selected_company_pillars() {
        let ds = Dataset::snapshot().unwrap();
        let page = render(&ds, Company::StateStreet);
        assert!(page.blocks.contains(&Block::heading(
            4,
            "State Street – Model Overview"
        )));
        assert!(page.blocks.contains(&Block::paragraph(
            "Custody and investment servicing bank + asset manager (SSGA)"
        )));
    }

    #[test]
    fn positioning_maps_fee_levels_to_ordinals() {
        let ds = Dataset::snapshot().unwrap();
        let page = render(&ds, Company::BlackRock);
        let scatter = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Chart(Chart::Scatter(s)) => Some(s),
                _ => None,
            })
            .unwrap();
        let coords: Vec<_> = scatter.points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(coords, vec![(3.0, 9.0), (4.0, 7.0), (5.0, 6.0)]);
        assert!(scatter.show_labels);
        assert_eq!(scatter.x_ticks.as_ref().map(Vec::len), Some(3));
    }
}
