use super::Page;
use crate::view::{Block, Bullet, RenderedPage};

pub(super) fn render() -> RenderedPage {
    RenderedPage {
        page: Page::Outlook,
        title: "Forward Outlook & Strategic Implications",
        subtitle: "How industry trends, technology and private markets shape the next phase of competition.",
        blocks: vec![
            Block::heading(3, "Major Industry Themes"),
            Block::Bullets(vec![
                Bullet::led("Private markets & alternatives", "are the main growth engine."),
                Bullet::led(
                    "Integrated technology and data platforms",
                    "are becoming the core competitive moat.",
                ),
                Bullet::led(
                    "Fee compression and margin pressure",
                    "continue to challenge traditional managers.",
                ),
                Bullet::led(
                    "Regulation and operational resilience",
                    "are critical constraints for systemically important firms.",
                ),
            ]),
            Block::heading(3, "Firm-by-Firm Outlook"),
            Block::heading(5, "BlackRock"),
            Block::Bullets(vec![
                Bullet::plain("Best positioned to dominate in private markets and technology, provided it manages integration risk."),
                Bullet::plain("Likely to keep expanding Aladdin’s ecosystem and data capabilities."),
            ]),
            Block::heading(5, "State Street"),
            Block::Bullets(vec![
                Bullet::plain("Expected to reinforce its role as institutional infrastructure through Alpha and alternative servicing."),
                Bullet::plain("Profitability will hinge on balancing regulatory capital, NII and servicing fees."),
            ]),
            Block::heading(5, "Invesco"),
            Block::Bullets(vec![
                Bullet::plain("Must execute on efficiency, scale its winning franchises (e.g., QQQ, ETFs) and continue upgrading tech."),
                Bullet::plain("Success depends on differentiating as an independent, diversified manager in a scale-driven world."),
            ]),
            Block::Divider,
            Block::heading(3, "High-Level Strategic Recommendations"),
            Block::Bullets(vec![
                Bullet::labelled(
                    "Double down on technology",
                    "treating platforms and data as profit centers, not cost centers.",
                ),
                Bullet::labelled(
                    "Align product strategy with secular flows",
                    "particularly towards private markets, ETFs, and solutions.",
                ),
                Bullet::labelled(
                    "Strengthen operating leverage",
                    "through automation, simplification and global operating models.",
                ),
                Bullet::labelled(
                    "Build resilience",
                    "ensuring regulatory, risk and cyber capabilities keep up with business complexity.",
                ),
            ]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Company;

    fn headings(page: &RenderedPage) -> Vec<&str> {
        page.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn covers_themes_firms_and_recommendations() {
        let page = render();
        let headings = headings(&page);
        assert!(headings.contains(&"Major Industry Themes"));
        assert!(headings.contains(&"Firm-by-Firm Outlook"));
        assert!(headings.contains(&"High-Level Strategic Recommendations"));
        for company in Company::ALL {
            assert!(headings.contains(&company.name()), "{company}");
        }

        let lists = page
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Bullets(items) if !items.is_empty()))
            .count();
        // themes, one per firm, recommendations
        assert_eq!(lists, 5);
    }
}
