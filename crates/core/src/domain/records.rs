use crate::domain::company::{AssetClass, ByCompany, Company, FeeLevel, RiskCategory};
use anyhow::{ensure, Context};

/// Headline scale and positioning figures. Amounts are USD trillions.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    pub company: Company,
    pub aum_tn: f64,
    pub etf_aum_tn: f64,
    pub alternatives_aum_tn: f64,
    pub tech_score: u8,
    pub fee_level: FeeLevel,
    pub model: &'static str,
}

impl CompanyProfile {
    pub fn validate(self) -> anyhow::Result<Self> {
        ensure!(
            (1..=10).contains(&self.tech_score),
            "tech score for {} must be between 1 and 10 (got {})",
            self.company,
            self.tech_score
        );
        ensure!(
            self.aum_tn > 0.0,
            "AUM for {} must be positive (got {})",
            self.company,
            self.aum_tn
        );
        Ok(self)
    }
}

/// FY2024 income statement and balance sheet figures. Amounts are USD billions.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialsRecord {
    pub revenue_bn: f64,
    pub net_income_bn: f64,
    pub op_margin_pct: f64,
    pub roe_pct: f64,
    pub roa_pct: f64,
    pub total_assets_bn: f64,
    pub equity_bn: f64,
}

/// AUM split across the five asset-class buckets, USD trillions.
///
/// The buckets come straight from segment disclosures and are not reconciled
/// against [`CompanyProfile::aum_tn`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductMixRecord {
    pub equity_tn: f64,
    pub fixed_income_tn: f64,
    pub multi_asset_tn: f64,
    pub cash_tn: f64,
    pub alternatives_tn: f64,
}

impl ProductMixRecord {
    pub fn bucket(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::Equity => self.equity_tn,
            AssetClass::FixedIncome => self.fixed_income_tn,
            AssetClass::MultiAsset => self.multi_asset_tn,
            AssetClass::Cash => self.cash_tn,
            AssetClass::Alternatives => self.alternatives_tn,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechProfile {
    pub platform: &'static str,
    pub positioning: &'static str,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwotEntry {
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub opportunities: Vec<&'static str>,
    pub threats: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BusinessModelEntry {
    pub narrative: &'static str,
    pub pillars: Vec<&'static str>,
}

/// Subjective exposure score on a 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> anyhow::Result<Self> {
        ensure!(
            (Self::MIN..=Self::MAX).contains(&value),
            "risk score must be between {} and {} (got {value})",
            Self::MIN,
            Self::MAX
        );
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskMatrix {
    rows: ByCompany<[RiskScore; 5]>,
}

impl RiskMatrix {
    /// Builds the grid from raw scores ordered like [`RiskCategory::ALL`].
    pub fn try_new(raw: ByCompany<[u8; 5]>) -> anyhow::Result<Self> {
        let rows = ByCompany::try_from_fn(|company| {
            let mut row = [RiskScore(RiskScore::MIN); 5];
            for (slot, value) in row.iter_mut().zip(raw[company]) {
                *slot = RiskScore::new(value)
                    .with_context(|| format!("invalid risk row for {company}"))?;
            }
            Ok(row)
        })?;
        Ok(Self { rows })
    }

    pub fn score(&self, company: Company, category: RiskCategory) -> RiskScore {
        self.rows[company][category.index()]
    }

    pub fn row(&self, company: Company) -> &[RiskScore; 5] {
        &self.rows[company]
    }
}
