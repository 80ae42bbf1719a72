pub mod associate_company;
pub mod create_industry;
pub mod list_industries;

pub use associate_company::{AssociateCompanyCommand, AssociateCompanyUseCase};
pub use create_industry::{CreateIndustryCommand, CreateIndustryUseCase};
pub use list_industries::{ListIndustriesResponse, ListIndustriesUseCase};
