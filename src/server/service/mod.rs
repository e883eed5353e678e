//! Service layer orchestrating repositories and image storage.

pub mod student;

#[cfg(test)]
mod test;
