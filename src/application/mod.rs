//! Application layer
//!
//! One use case per operation. Use cases turn raw commands into value
//! objects, call the domain services and shape the result for the adapters.

pub mod company;
pub mod industry;
pub mod invoice;
