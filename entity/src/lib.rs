//! SeaORM entities for the student registry database.

pub mod prelude;

pub mod student;
