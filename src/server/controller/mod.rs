//! HTTP request handlers.
//!
//! Controllers extract request input, convert DTOs to domain parameters, call the
//! service layer and convert results back to DTOs. They hold no state of their own.

pub mod student;
