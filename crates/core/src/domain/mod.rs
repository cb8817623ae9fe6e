pub mod company;
pub mod records;

pub use company::{AssetClass, ByCompany, Company, FeeLevel, RiskCategory};
pub use records::{
    BusinessModelEntry, CompanyProfile, FinancialsRecord, ProductMixRecord, RiskMatrix, RiskScore,
    SwotEntry, TechProfile,
};
