//! Derived figures for KPI cards and charts. Everything here is pure and total
//! over the fixed company universe.

use crate::domain::{AssetClass, ByCompany, Company, CompanyProfile, ProductMixRecord};

pub fn total_aum(profiles: &ByCompany<CompanyProfile>) -> f64 {
    profiles.values().map(|p| p.aum_tn).sum()
}

pub fn total_etf_aum(profiles: &ByCompany<CompanyProfile>) -> f64 {
    profiles.values().map(|p| p.etf_aum_tn).sum()
}

pub fn total_alternatives_aum(profiles: &ByCompany<CompanyProfile>) -> f64 {
    profiles.values().map(|p| p.alternatives_aum_tn).sum()
}

pub fn average_tech_score(profiles: &ByCompany<CompanyProfile>) -> f64 {
    let sum: f64 = profiles.values().map(|p| f64::from(p.tech_score)).sum();
    sum / profiles.len() as f64
}

/// ETF AUM as a percentage of total AUM.
pub fn etf_share_pct(profile: &CompanyProfile) -> f64 {
    profile.etf_aum_tn / profile.aum_tn * 100.0
}

/// The company with the largest `metric`. Ties go to the earlier company.
pub fn leader_by<T>(table: &ByCompany<T>, metric: impl Fn(&T) -> f64) -> (Company, f64) {
    let mut iter = table.iter().map(|(c, row)| (c, metric(row)));
    let first = iter
        .next()
        .unwrap_or((Company::default(), f64::NEG_INFINITY));
    iter.fold(first, |best, cand| if cand.1 > best.1 { cand } else { best })
}

/// One cell of the product-mix table in long form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixRow {
    pub company: Company,
    pub asset_class: AssetClass,
    pub aum_tn: f64,
}

/// Reshapes the wide product-mix table, company-major then bucket order.
pub fn long_form(mix: &ByCompany<ProductMixRecord>) -> Vec<MixRow> {
    mix.iter()
        .flat_map(|(company, record)| {
            AssetClass::ALL.into_iter().map(move |asset_class| MixRow {
                company,
                asset_class,
                aum_tn: record.bucket(asset_class),
            })
        })
        .collect()
}

pub fn bucket_total(record: &ProductMixRecord) -> f64 {
    AssetClass::ALL.iter().map(|c| record.bucket(*c)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn totals_match_report() {
        let ds = Dataset::snapshot().unwrap();
        assert!(close(total_aum(&ds.profiles), 18.112));
        assert!(close(total_etf_aum(&ds.profiles), 6.292));
        assert!(close(total_alternatives_aum(&ds.profiles), 0.7505));
        assert_eq!(format!("{:.2}", total_aum(&ds.profiles)), "18.11");
    }

    #[test]
    fn average_tech_score_is_mean_of_three() {
        let ds = Dataset::snapshot().unwrap();
        let avg = average_tech_score(&ds.profiles);
        assert!(close(avg, 22.0 / 3.0));
        assert_eq!(format!("{avg:.2}"), "7.33");
    }

    #[test]
    fn leaders_follow_max_selection() {
        let ds = Dataset::snapshot().unwrap();

        let (company, revenue) = leader_by(&ds.financials, |f| f.revenue_bn);
        assert_eq!(company, Company::BlackRock);
        assert!(close(revenue, 20.407));

        let (company, margin) = leader_by(&ds.financials, |f| f.op_margin_pct);
        assert_eq!(company, Company::BlackRock);
        assert!(close(margin, 37.1));

        let (company, roe) = leader_by(&ds.financials, |f| f.roe_pct);
        assert_eq!(company, Company::BlackRock);
        assert!(close(roe, 13.4));

        let (company, _) = leader_by(&ds.financials, |f| f.total_assets_bn);
        assert_eq!(company, Company::StateStreet);
    }

    #[test]
    fn leader_ties_resolve_to_first_company() {
        let flat = ByCompany::from_fn(|_| 1.0_f64);
        assert_eq!(leader_by(&flat, |v| *v), (Company::BlackRock, 1.0));
    }

    #[test]
    fn etf_share_is_percentage_of_aum() {
        let ds = Dataset::snapshot().unwrap();
        let share = etf_share_pct(&ds.profiles[Company::StateStreet]);
        assert!(close(share, 1.578 / 4.715 * 100.0));
        assert_eq!(format!("{share:.1}"), "33.5");
    }

    #[test]
    fn long_form_has_one_row_per_cell() {
        let ds = Dataset::snapshot().unwrap();
        let rows = long_form(&ds.product_mix);
        assert_eq!(rows.len(), Company::ALL.len() * AssetClass::ALL.len());
        assert_eq!(rows.len(), 15);

        for row in &rows {
            assert_eq!(row.aum_tn, ds.product_mix[row.company].bucket(row.asset_class));
        }

        assert_eq!(rows[0].company, Company::BlackRock);
        assert_eq!(rows[0].asset_class, AssetClass::Equity);
        assert_eq!(rows[14].company, Company::Invesco);
        assert_eq!(rows[14].asset_class, AssetClass::Alternatives);
    }
}
