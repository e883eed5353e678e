//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for each domain in the application.
//! They use SeaORM entity models internally and return domain models to maintain
//! separation between the data layer and business logic layer.

pub mod student;
