//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Together these conversions play the
//! role of the DTO/entity mapper.

pub mod student;
