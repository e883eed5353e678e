//! Student domain models and parameters.
//!
//! Provides the domain model for a student record, parameter types for create and
//! update operations, and the partial example used for search-by-example.

use chrono::NaiveDate;

use crate::{
    model::student::{StudentDto, StudentExampleDto},
    server::error::AppError,
};

/// A persisted student record.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Server-assigned identifier.
    pub id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub semester: Option<i32>,
    /// Identifier in the external student registry.
    pub central_id: Option<i32>,
    /// Absolute path of the student's image file, if one is recorded.
    pub image_location: Option<String>,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            birth_date: entity.birth_date,
            semester: entity.semester,
            central_id: entity.central_id,
            image_location: entity.image_location,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: Some(self.id),
            name: self.name,
            birth_date: self.birth_date,
            semester: self.semester,
            central_id: self.central_id,
            image_location: self.image_location,
        }
    }
}

/// Parameters for creating a new student.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub semester: Option<i32>,
    pub central_id: Option<i32>,
}

impl CreateStudentParams {
    /// Converts a DTO into create parameters.
    ///
    /// The DTO's `id` and `image_location` are ignored; both are owned by the server.
    ///
    /// # Returns
    /// - `Ok(CreateStudentParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Name is blank
    pub fn from_dto(dto: StudentDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(dto.name)?,
            birth_date: dto.birth_date,
            semester: dto.semester,
            central_id: dto.central_id,
        })
    }
}

/// Parameters for updating an existing student.
///
/// The stored image location is never touched by an update.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub semester: Option<i32>,
    pub central_id: Option<i32>,
}

impl UpdateStudentParams {
    /// Converts a DTO into update parameters for the student at `id`.
    ///
    /// The id from the request path always wins over any id in the body, so the
    /// update addresses exactly the record named by the URL.
    ///
    /// # Returns
    /// - `Ok(UpdateStudentParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Name is blank
    pub fn from_dto(id: i32, dto: StudentDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: validate_name(dto.name)?,
            birth_date: dto.birth_date,
            semester: dto.semester,
            central_id: dto.central_id,
        })
    }
}

/// Search template: every present field must match.
///
/// `name` matches as a prefix, all other fields match exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentExample {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub semester: Option<i32>,
    pub central_id: Option<i32>,
}

impl StudentExample {
    /// Converts a search DTO into an example. A blank name does not constrain.
    pub fn from_dto(dto: StudentExampleDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.filter(|name| !name.trim().is_empty()),
            birth_date: dto.birth_date,
            semester: dto.semester,
            central_id: dto.central_id,
        }
    }
}

fn validate_name(name: String) -> Result<String, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Student name must not be blank".to_string(),
        ));
    }

    Ok(name)
}
