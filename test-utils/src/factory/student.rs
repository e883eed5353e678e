//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .name("Grace Hopper")
///     .central_id(4242)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    birth_date: Option<NaiveDate>,
    semester: Option<i32>,
    central_id: Option<i32>,
    image_location: Option<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {n}"` where n is auto-incremented
    /// - birth_date: `2000-01-01`
    /// - semester: `1`
    /// - central_id: `None`
    /// - image_location: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Student {}", next_id()),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            semester: Some(1),
            central_id: None,
            image_location: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn central_id(mut self, central_id: i32) -> Self {
        self.central_id = Some(central_id);
        self
    }

    /// Sets the recorded image path without creating any file.
    pub fn image_location(mut self, image_location: impl Into<String>) -> Self {
        self.image_location = Some(image_location.into());
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            name: ActiveValue::Set(self.name),
            birth_date: ActiveValue::Set(self.birth_date),
            semester: ActiveValue::Set(self.semester),
            central_id: ActiveValue::Set(self.central_id),
            image_location: ActiveValue::Set(self.image_location),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
