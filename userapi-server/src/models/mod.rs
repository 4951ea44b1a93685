//! Domain model support types

pub mod validation;

pub use validation::ValidationError;
