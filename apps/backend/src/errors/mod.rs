//! Error handling for the Fastbreak backend.

pub mod domain;

pub use domain::DomainError;
