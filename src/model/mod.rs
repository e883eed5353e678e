//! Wire-format DTOs shared by the HTTP API and its documentation.

pub mod api;
pub mod student;
