//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .name("Ada Lovelace")
//!     .semester(3)
//!     .image_location("/tmp/images/student_1_ada.png")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;

pub use student::create_student;
