pub mod company;
pub mod errors;
pub mod industry;
pub mod invoice;

pub use errors::RepositoryError;
