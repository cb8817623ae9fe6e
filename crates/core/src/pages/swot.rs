use super::Page;
use crate::dataset::Dataset;
use crate::domain::Company;
use crate::view::{Block, Bullet, Column, RenderedPage};

fn list(items: &[&'static str]) -> Block {
    Block::Bullets(items.iter().map(|s| Bullet::plain(*s)).collect())
}

pub(super) fn render(ds: &Dataset, company: Company) -> RenderedPage {
    let entry = &ds.swot[company];

    RenderedPage {
        page: Page::Swot,
        title: "SWOT Explorer",
        subtitle: "Interactive view of strengths, weaknesses, opportunities and threats for each firm.",
        blocks: vec![
            Block::CompanyPicker {
                label: "Select a company:",
                selected: company,
            },
            Block::Columns(vec![
                Column::new(vec![
                    Block::heading(4, "✅ Strengths"),
                    list(&entry.strengths),
                    Block::heading(4, "⚠️ Weaknesses"),
                    list(&entry.weaknesses),
                ]),
                Column::new(vec![
                    Block::heading(4, "🎯 Opportunities"),
                    list(&entry.opportunities),
                    Block::heading(4, "⚡ Threats"),
                    list(&entry.threats),
                ]),
            ]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_columns_with_two_lists_each() {
        let ds = Dataset::snapshot().unwrap();
        let page = render(&ds, Company::BlackRock);
        let Some(Block::Columns(columns)) = page.blocks.get(1) else {
            panic!("swot lists must sit in columns");
        };
        assert_eq!(columns.len(), 2);
        for column in columns {
            let lists = column
                .blocks
                .iter()
                .filter(|b| matches!(b, Block::Bullets(_)))
                .count();
            assert_eq!(lists, 2);
        }
    }

    #[test]
    fn lists_come_from_selected_company() {
        let ds = Dataset::snapshot().unwrap();
        let page = render(&ds, Company::StateStreet);
        let first_strength = page.walk().into_iter().find_map(|b| match b {
            Block::Bullets(items) => items.first().map(|i| i.text.clone()),
            _ => None,
        });
        assert_eq!(
            first_strength.as_deref(),
            Some("Top-tier global custodian with $46T+ AUC/A")
        );
    }
}
