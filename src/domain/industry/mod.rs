pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{CompanyIndustry, Industry, IndustryListing};
pub use errors::{IndustryError, IndustryValidationError};
pub use ports::IndustryRepository;
pub use services::IndustryService;
pub use value_objects::{IndustryCode, IndustryName};
