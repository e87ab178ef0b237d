//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod employee;
pub mod error;

pub use constants::*;
pub use employee::{Employee, NewEmployee};
pub use error::{DomainError, DomainResult};
