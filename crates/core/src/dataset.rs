use crate::domain::{
    BusinessModelEntry, ByCompany, Company, CompanyProfile, FeeLevel, FinancialsRecord,
    ProductMixRecord, RiskMatrix, SwotEntry, TechProfile,
};
use anyhow::Context;
use chrono::NaiveDate;

/// Read-only snapshot of the competitive analysis.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Fiscal year end the figures refer to.
    pub as_of: NaiveDate,
    pub profiles: ByCompany<CompanyProfile>,
    pub financials: ByCompany<FinancialsRecord>,
    pub product_mix: ByCompany<ProductMixRecord>,
    pub tech: ByCompany<TechProfile>,
    pub swot: ByCompany<SwotEntry>,
    pub business_models: ByCompany<BusinessModelEntry>,
    pub risk: RiskMatrix,
}

impl Dataset {
    /// The figures from the 2024 10-Ks and annual reports.
    pub fn snapshot() -> anyhow::Result<Self> {
        let as_of = NaiveDate::from_ymd_opt(2024, 12, 31).context("invalid as-of date")?;

        let profiles = ByCompany::try_from_fn(|c| profile(c).validate())?;
        let risk = RiskMatrix::try_new(ByCompany::from_fn(|c| match c {
            Company::BlackRock => [4, 4, 3, 4, 4],
            Company::StateStreet => [5, 3, 5, 4, 3],
            Company::Invesco => [3, 4, 3, 3, 5],
        }))
        .context("risk matrix")?;

        Ok(Self {
            as_of,
            profiles,
            financials: ByCompany::from_fn(financials),
            product_mix: ByCompany::from_fn(product_mix),
            tech: ByCompany::from_fn(tech_profile),
            swot: ByCompany::from_fn(swot),
            business_models: ByCompany::from_fn(business_model),
            risk,
        })
    }
}

fn profile(company: Company) -> CompanyProfile {
    match company {
        Company::BlackRock => CompanyProfile {
            company,
            aum_tn: 11.551,
            etf_aum_tn: 4.23,
            alternatives_aum_tn: 0.422,
            tech_score: 9,
            fee_level: FeeLevel::LowMid,
            model: "Scale + Tech (Aladdin)",
        },
        Company::StateStreet => CompanyProfile {
            company,
            aum_tn: 4.715,
            etf_aum_tn: 1.578,
            alternatives_aum_tn: 0.200,
            tech_score: 7,
            fee_level: FeeLevel::Competitive,
            model: "Custody + Platform (Alpha)",
        },
        Company::Invesco => CompanyProfile {
            company,
            aum_tn: 1.846,
            etf_aum_tn: 0.484,
            alternatives_aum_tn: 0.1285,
            tech_score: 6,
            fee_level: FeeLevel::MidRange,
            model: "Independent Asset Manager",
        },
    }
}

fn financials(company: Company) -> FinancialsRecord {
    match company {
        Company::BlackRock => FinancialsRecord {
            revenue_bn: 20.407,
            net_income_bn: 6.369,
            op_margin_pct: 37.1,
            roe_pct: 13.4,
            roa_pct: 4.6,
            total_assets_bn: 138.615,
            equity_bn: 47.431,
        },
        Company::StateStreet => FinancialsRecord {
            revenue_bn: 13.04,
            net_income_bn: 2.687,
            op_margin_pct: 26.1,
            roe_pct: 10.6,
            roa_pct: 0.76,
            total_assets_bn: 353.240,
            equity_bn: 25.326,
        },
        Company::Invesco => FinancialsRecord {
            revenue_bn: 6.067,
            net_income_bn: 0.538,
            op_margin_pct: 13.7,
            roe_pct: 3.6,
            roa_pct: 2.0,
            total_assets_bn: 27.0089,
            equity_bn: 15.1241,
        },
    }
}

fn product_mix(company: Company) -> ProductMixRecord {
    match company {
        Company::BlackRock => ProductMixRecord {
            equity_tn: 6.3102,
            fixed_income_tn: 2.9057,
            multi_asset_tn: 0.9929,
            cash_tn: 0.9207,
            alternatives_tn: 0.4218,
        },
        Company::StateStreet => ProductMixRecord {
            equity_tn: 3.007,
            fixed_income_tn: 0.616,
            multi_asset_tn: 0.374,
            cash_tn: 0.518,
            alternatives_tn: 0.200,
        },
        Company::Invesco => ProductMixRecord {
            equity_tn: 0.2665,
            fixed_income_tn: 0.2811,
            multi_asset_tn: 0.0588,
            cash_tn: 0.1894,
            alternatives_tn: 0.1285,
        },
    }
}

fn tech_profile(company: Company) -> TechProfile {
    match company {
        Company::BlackRock => TechProfile {
            platform: "Aladdin + eFront + Preqin",
            positioning: "Enterprise investment OS / data platform",
            highlights: vec![
                "Used by internal teams and external clients",
                "AI copilots and private markets integration",
                "Key differentiator and revenue source",
            ],
        },
        Company::StateStreet => TechProfile {
            platform: "State Street Alpha (incl. Charles River Development)",
            positioning: "Front-to-back institutional servicing platform",
            highlights: vec![
                "Integrates portfolio mgmt, trading, and servicing",
                "Deeply embedded with large institutions",
                "Supports complex multi-asset / alternatives",
            ],
        },
        Company::Invesco => TechProfile {
            platform: "Embedded next-gen tech (no standalone platform)",
            positioning: "Tech-enabled global investment manager",
            highlights: vec![
                "Quant models and analytics in investment process",
                "Focus on efficiency and client experience",
                "No external platform like Aladdin/Alpha (yet)",
            ],
        },
    }
}

fn swot(company: Company) -> SwotEntry {
    match company {
        Company::BlackRock => SwotEntry {
            strengths: vec![
                "Largest global AUM (> $11.5T)",
                "Dominant ETF franchise (iShares)",
                "Aladdin technology and data moat",
                "Broad product spectrum (active + passive + alts)",
            ],
            weaknesses: vec![
                "High regulatory scrutiny and SIFI risk",
                "Integration risk from large acquisitions",
                "Fee pressure in core ETF business",
            ],
            opportunities: vec![
                "Private markets & infrastructure growth",
                "AI & data monetization via Aladdin + Preqin",
                "International and wealth channel expansion",
            ],
            threats: vec![
                "ETF fee wars with Vanguard & others",
                "Regulatory constraints on size and data",
                "Market downturn impacting AUM and fees",
            ],
        },
        Company::StateStreet => SwotEntry {
            strengths: vec![
                "Top-tier global custodian with $46T+ AUC/A",
                "Alpha platform drives front-to-back stickiness",
                "Deep institutional relationships",
            ],
            weaknesses: vec![
                "Lower margins vs pure asset managers",
                "High dependency on interest-rate-sensitive NII",
                "Limited retail presence",
            ],
            opportunities: vec![
                "Servicing of alternatives and private assets",
                "Wealth and data-driven services",
                "More Alpha mandates from large asset owners",
            ],
            threats: vec![
                "Regulatory burden as a G-SIB",
                "Custody fee pressure and competition",
                "Operational and cyber risk in complex stack",
            ],
        },
        Company::Invesco => SwotEntry {
            strengths: vec![
                "Independent global asset manager",
                "Strong ETF and QQQ franchise",
                "Diversified product and geography mix",
            ],
            weaknesses: vec![
                "Smaller scale vs mega-managers",
                "Exposure to fee and margin pressure",
                "Less differentiated technology platform",
            ],
            opportunities: vec![
                "APAC and ETF expansion",
                "Scaling private markets and global liquidity",
                "Cost efficiency and operating leverage",
            ],
            threats: vec![
                "Intense competition from BlackRock/Vanguard",
                "Market volatility impacting active flows",
                "Regulation and distribution changes",
            ],
        },
    }
}

fn business_model(company: Company) -> BusinessModelEntry {
    match company {
        Company::BlackRock => BusinessModelEntry {
            narrative: "Global asset manager focused on Retail, iShares (ETFs) and Institutional",
            pillars: vec![
                "Scale-driven AUM model",
                "Technology & data (Aladdin) as second growth engine",
                "Strategic push into private markets & infrastructure",
            ],
        },
        Company::StateStreet => BusinessModelEntry {
            narrative: "Custody and investment servicing bank + asset manager (SSGA)",
            pillars: vec![
                "Investment Servicing as foundation (custody, FX, lending)",
                "Alpha platform integrating front-to-back processes",
                "Institutional client depth and recurring relationships",
            ],
        },
        Company::Invesco => BusinessModelEntry {
            narrative: "Independent global investment manager across active, passive, ETFs & alternatives",
            pillars: vec![
                "Balanced retail and institutional footprint",
                "Scaling high-conviction franchises (e.g., QQQ)",
                "Embedding next-generation technology internally",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetClass, RiskCategory};

    #[test]
    fn every_table_has_one_entry_per_company() {
        let ds = Dataset::snapshot().unwrap();
        assert_eq!(ds.profiles.len(), Company::ALL.len());
        assert_eq!(ds.financials.len(), Company::ALL.len());
        assert_eq!(ds.product_mix.len(), Company::ALL.len());
        assert_eq!(ds.tech.len(), Company::ALL.len());
        assert_eq!(ds.swot.len(), Company::ALL.len());
        assert_eq!(ds.business_models.len(), Company::ALL.len());

        for (company, profile) in ds.profiles.iter() {
            assert_eq!(profile.company, company);
        }
    }

    #[test]
    fn product_mix_is_not_reconciled_to_headline_aum() {
        let ds = Dataset::snapshot().unwrap();
        let bucket_sum = |c: Company| -> f64 {
            AssetClass::ALL
                .iter()
                .map(|a| ds.product_mix[c].bucket(*a))
                .sum()
        };

        // Segment rounding: 11.5513 vs 11.551.
        let blackrock = bucket_sum(Company::BlackRock) - ds.profiles[Company::BlackRock].aum_tn;
        assert!(blackrock > 0.0 && blackrock < 0.001);

        // Invesco's buckets cover roughly half of headline AUM.
        let invesco = ds.profiles[Company::Invesco].aum_tn - bucket_sum(Company::Invesco);
        assert!(invesco > 0.9);
    }

    #[test]
    fn risk_grid_matches_report() {
        let ds = Dataset::snapshot().unwrap();
        assert_eq!(
            ds.risk.score(Company::StateStreet, RiskCategory::Regulatory).get(),
            5
        );
        assert_eq!(
            ds.risk.score(Company::Invesco, RiskCategory::FeePressure).get(),
            5
        );
        assert_eq!(
            ds.risk.score(Company::BlackRock, RiskCategory::InterestRate).get(),
            3
        );
    }

    #[test]
    fn swot_lists_are_non_empty() {
        let ds = Dataset::snapshot().unwrap();
        for entry in ds.swot.values() {
            assert!(!entry.strengths.is_empty());
            assert!(!entry.weaknesses.is_empty());
            assert!(!entry.opportunities.is_empty());
            assert!(!entry.threats.is_empty());
        }
    }
}
