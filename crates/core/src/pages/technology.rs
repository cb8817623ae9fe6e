use super::{Page, SIDE_CHART_HEIGHT};
use crate::dataset::Dataset;
use crate::domain::Company;
use crate::view::{BarChart, Block, Bullet, Chart, Column, RenderedPage};

pub(super) fn render(ds: &Dataset, company: Company) -> RenderedPage {
    let scores = BarChart {
        title: "Technology / Platform Strength (1–10)".to_string(),
        y_label: "Tech Score".to_string(),
        bars: ds
            .profiles
            .iter()
            .map(|(c, p)| (c.name().to_string(), f64::from(p.tech_score)))
            .collect(),
        value_precision: 0,
        height: SIDE_CHART_HEIGHT,
    };

    let mut summary = vec![Block::heading(4, "Platform Summary")];
    for (c, tech) in ds.tech.iter() {
        summary.push(Block::heading(5, c.name()));
        summary.push(Block::Bullets(vec![
            Bullet::labelled("Platform", tech.platform),
            Bullet::labelled("Positioning", tech.positioning),
        ]));
    }

    let selected = &ds.tech[company];

    RenderedPage {
        page: Page::Technology,
        title: "Technology & Platform Edge",
        subtitle: "Assessing Aladdin, Alpha and Invesco’s embedded tech capabilities.",
        blocks: vec![
            Block::Columns(vec![
                Column::weighted(1.2, vec![Block::Chart(Chart::Bar(scores))]),
                Column::weighted(1.0, summary),
            ]),
            Block::Divider,
            Block::heading(4, "Platform Highlights by Firm"),
            Block::CompanyPicker {
                label: "Select company to view platform details:",
                selected: company,
            },
            Block::heading(5, format!("{company} – {}", selected.platform)),
            Block::Bullets(selected.highlights.iter().map(|h| Bullet::plain(*h)).collect()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_follow_selection() {
        let ds = Dataset::snapshot().unwrap();
        let page = render(&ds, Company::Invesco);
        let last = page.blocks.last().unwrap();
        let Block::Bullets(items) = last else {
            panic!("technology page must end with the highlight list");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].text, "No external platform like Aladdin/Alpha (yet)");
    }

    #[test]
    fn score_chart_uses_side_height() {
        let page = render(&Dataset::snapshot().unwrap(), Company::BlackRock);
        let chart = page
            .walk()
            .into_iter()
            .find_map(|b| match b {
                Block::Chart(Chart::Bar(c)) => Some(c),
                _ => None,
            })
            .unwrap();
        assert_eq!(chart.height, SIDE_CHART_HEIGHT);
        assert_eq!(chart.bars.len(), 3);
    }

    #[test]
    fn summary_lists_every_platform() {
        let ds = Dataset::snapshot().unwrap();
        let page = render(&ds, Company::BlackRock);
        let platforms = page
            .walk()
            .into_iter()
            .filter_map(|b| match b {
                Block::Bullets(items) => Some(items),
                _ => None,
            })
            .flatten()
            .filter(|item| item.lead.as_deref() == Some("Platform"))
            .count();
        assert_eq!(platforms, 3);
    }
}
