use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed universe covered by the report. Declaration order is display order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Company {
    #[default]
    #[serde(rename = "blackrock")]
    BlackRock,
    StateStreet,
    Invesco,
}

impl Company {
    pub const ALL: [Company; 3] = [Company::BlackRock, Company::StateStreet, Company::Invesco];

    pub fn name(self) -> &'static str {
        match self {
            Company::BlackRock => "BlackRock",
            Company::StateStreet => "State Street",
            Company::Invesco => "Invesco",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Company::BlackRock => "blackrock",
            Company::StateStreet => "state-street",
            Company::Invesco => "invesco",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A total mapping from [`Company`] to `T`.
///
/// There is no way to build one with a company missing, so lookups never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ByCompany<T> {
    entries: [T; 3],
}

impl<T> ByCompany<T> {
    pub fn from_fn(f: impl FnMut(Company) -> T) -> Self {
        Self {
            entries: Company::ALL.map(f),
        }
    }

    pub fn try_from_fn(f: impl FnMut(Company) -> anyhow::Result<T>) -> anyhow::Result<Self> {
        let entries: Vec<T> = Company::ALL.into_iter().map(f).collect::<anyhow::Result<_>>()?;
        let entries: [T; 3] = entries
            .try_into()
            .map_err(|_| anyhow::anyhow!("expected exactly one entry per company"))?;
        Ok(Self { entries })
    }

    pub fn get(&self, company: Company) -> &T {
        &self.entries[company.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Company, &T)> {
        Company::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T> std::ops::Index<Company> for ByCompany<T> {
    type Output = T;

    fn index(&self, company: Company) -> &T {
        self.get(company)
    }
}

/// Relative fee positioning as stated in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeLevel {
    LowMid,
    Competitive,
    MidRange,
}

impl FeeLevel {
    pub const ALL: [FeeLevel; 3] = [FeeLevel::LowMid, FeeLevel::Competitive, FeeLevel::MidRange];

    pub fn label(self) -> &'static str {
        match self {
            FeeLevel::LowMid => "Low–Mid",
            FeeLevel::Competitive => "Competitive",
            FeeLevel::MidRange => "Mid-range",
        }
    }

    /// Ordinal used on the positioning map; higher means more expensive.
    pub fn score(self) -> u8 {
        match self {
            FeeLevel::LowMid => 3,
            FeeLevel::Competitive => 4,
            FeeLevel::MidRange => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetClass {
    Equity,
    FixedIncome,
    MultiAsset,
    Cash,
    Alternatives,
}

impl AssetClass {
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Equity,
        AssetClass::FixedIncome,
        AssetClass::MultiAsset,
        AssetClass::Cash,
        AssetClass::Alternatives,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::FixedIncome => "Fixed Income",
            AssetClass::MultiAsset => "Multi-Asset",
            AssetClass::Cash => "Cash / Money Market",
            AssetClass::Alternatives => "Alternatives",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    Regulatory,
    Market,
    InterestRate,
    OperationalTech,
    FeePressure,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::Regulatory,
        RiskCategory::Market,
        RiskCategory::InterestRate,
        RiskCategory::OperationalTech,
        RiskCategory::FeePressure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::Regulatory => "Regulatory",
            RiskCategory::Market => "Market",
            RiskCategory::InterestRate => "Interest Rate",
            RiskCategory::OperationalTech => "Operational/Tech",
            RiskCategory::FeePressure => "Fee Pressure",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_for_every_company() {
        for company in Company::ALL {
            assert_eq!(Company::from_slug(company.slug()), Some(company));
        }
        assert_eq!(Company::from_slug("vanguard"), None);
    }

    #[test]
    fn serde_uses_slugs() {
        let parsed: Company = serde_json::from_str("\"state-street\"").unwrap();
        assert_eq!(parsed, Company::StateStreet);
        assert_eq!(serde_json::to_string(&Company::BlackRock).unwrap(), "\"blackrock\"");
    }

    #[test]
    fn by_company_keeps_declaration_order() {
        let names = ByCompany::from_fn(|c| c.name());
        let ordered: Vec<_> = names.iter().map(|(c, n)| (c, *n)).collect();
        assert_eq!(
            ordered,
            vec![
                (Company::BlackRock, "BlackRock"),
                (Company::StateStreet, "State Street"),
                (Company::Invesco, "Invesco"),
            ]
        );
        assert_eq!(names[Company::Invesco], "Invesco");
    }

    #[test]
    fn fee_scores_are_ordinal() {
        let scores: Vec<u8> = FeeLevel::ALL.iter().map(|f| f.score()).collect();
        assert_eq!(scores, vec![3, 4, 5]);
    }
}
