//! Presentation-neutral page model produced by the renderers in [`crate::pages`].
//!
//! Backends (HTML, static export) walk these blocks; nothing in here knows about
//! markup.

use crate::artifacts::Artifact;
use crate::domain::Company;
use crate::pages::Page;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub page: Page,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub blocks: Vec<Block>,
}

impl RenderedPage {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Depth-first walk over every block, descending into columns.
    pub fn walk(&self) -> Vec<&Block> {
        fn visit<'a>(blocks: &'a [Block], out: &mut Vec<&'a Block>) {
            for block in blocks {
                out.push(block);
                if let Block::Columns(columns) = block {
                    for column in columns {
                        visit(&column.blocks, out);
                    }
                }
            }
        }
        let mut out = Vec::new();
        visit(&self.blocks, &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    Bullets(Vec<Bullet>),
    Kpis(Vec<KpiCard>),
    Chart(Chart),
    Table(Table),
    Columns(Vec<Column>),
    CompanyPicker { label: &'static str, selected: Company },
    Download(Download),
    Warning(String),
    Code(String),
    Divider,
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(text.into())
    }
}

/// A list item with an optional emphasised lead.
///
/// `led` reads as "**BlackRock** generates ..."; `labelled` as "**BlackRock**: ...".
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub lead: Option<String>,
    pub separator: &'static str,
    pub text: String,
}

impl Bullet {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            lead: None,
            separator: "",
            text: text.into(),
        }
    }

    pub fn led(lead: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lead: Some(lead.into()),
            separator: " ",
            text: text.into(),
        }
    }

    pub fn labelled(lead: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lead: Some(lead.into()),
            separator: ": ",
            text: text.into(),
        }
    }

    /// The item as plain text, lead included.
    pub fn to_plain(&self) -> String {
        match &self.lead {
            Some(lead) => format!("{lead}{}{}", self.separator, self.text),
            None => self.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    pub sublabel: String,
}

impl KpiCard {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        sublabel: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            sublabel: sublabel.into(),
        }
    }
}

/// A column in a side-by-side layout. `weight` is the relative width.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub weight: f32,
    pub blocks: Vec<Block>,
}

impl Column {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            weight: 1.0,
            blocks,
        }
    }

    pub fn weighted(weight: f32, blocks: Vec<Block>) -> Self {
        Self { weight, blocks }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub index_header: String,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
    /// Decimal places used for every cell.
    pub precision: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub artifact: Artifact,
    pub label: &'static str,
    pub file_name: &'static str,
    pub mime: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    StackedBar(StackedBarChart),
    Scatter(ScatterChart),
    Heatmap(Heatmap),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.title,
            Chart::StackedBar(c) => &c.title,
            Chart::Scatter(c) => &c.title,
            Chart::Heatmap(c) => &c.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
    /// Decimal places of the value printed on each bar.
    pub value_precision: usize,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackedBarChart {
    pub title: String,
    pub y_label: String,
    /// One stack per category, in display order.
    pub categories: Vec<String>,
    /// One series per segment; `values[i]` belongs to `categories[i]`.
    pub series: Vec<Series>,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    /// Replaces numeric x ticks when set.
    pub x_ticks: Option<Vec<(f64, String)>>,
    /// Print each point's label next to the marker.
    pub show_labels: bool,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Relative marker size; markers are scaled against the largest size.
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub title: String,
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<u8>>,
    pub min: u8,
    pub max: u8,
    pub scale_label: String,
    pub height: u32,
}
