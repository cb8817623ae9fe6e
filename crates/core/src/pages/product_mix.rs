use super::{Page, TALL_CHART_HEIGHT};
use crate::aggregate::{bucket_total, long_form};
use crate::dataset::Dataset;
use crate::domain::AssetClass;
use crate::view::{
    Block, Bullet, Chart, RenderedPage, Series, StackedBarChart, Table, TableRow,
};

pub(super) fn render(ds: &Dataset) -> RenderedPage {
    let rows = long_form(&ds.product_mix);
    let categories: Vec<String> = ds
        .product_mix
        .iter()
        .map(|(c, _)| c.name().to_string())
        .collect();

    // Pivot the long rows back into one series per asset class for stacking.
    let series = AssetClass::ALL
        .iter()
        .map(|class| Series {
            name: class.label().to_string(),
            values: rows
                .iter()
                .filter(|r| r.asset_class == *class)
                .map(|r| r.aum_tn)
                .collect(),
        })
        .collect();

    let stacked = StackedBarChart {
        title: "AUM by Asset Class (2024, $Trillions)".to_string(),
        y_label: "AUM ($ Trillions)".to_string(),
        categories,
        series,
        height: TALL_CHART_HEIGHT,
    };

    let mut columns: Vec<String> = AssetClass::ALL
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    columns.push("Total".to_string());

    let table = Table {
        index_header: "Company".to_string(),
        columns,
        rows: ds
            .product_mix
            .iter()
            .map(|(c, mix)| {
                let mut values: Vec<f64> = AssetClass::ALL.iter().map(|a| mix.bucket(*a)).collect();
                values.push(bucket_total(mix));
                TableRow {
                    label: c.name().to_string(),
                    values,
                }
            })
            .collect(),
        precision: 4,
    };

    RenderedPage {
        page: Page::ProductMix,
        title: "Product & AUM Mix",
        subtitle: "Breakdown of AUM across equity, fixed income, multi-asset, cash and alternatives.",
        blocks: vec![
            Block::Chart(Chart::StackedBar(stacked)),
            Block::heading(3, "Product Mix Table"),
            Block::Table(table),
            Block::heading(3, "Product Mix Observations"),
            Block::Bullets(vec![
                Bullet::labelled(
                    "BlackRock",
                    "Heavily equity-weighted, with substantial fixed income and a meaningful but smaller alternatives book.",
                ),
                Bullet::labelled(
                    "State Street",
                    "Strong equity and cash presence consistent with its institutional index and ETF heritage.",
                ),
                Bullet::labelled(
                    "Invesco",
                    "Smaller in absolute terms but diversified across equity, fixed income, cash and growing alternatives.",
                ),
            ]),
        ],
    }
}
