use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{StudentDto, StudentExampleDto, UploadImageForm},
    },
    server::{
        error::{image::ImageError, AppError},
        model::student::{CreateStudentParams, StudentExample, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Multipart part carrying the image content
const FILE_PART: &str = "file";

/// Get all students.
///
/// # Returns
/// - `200 OK` - All students ordered by ID, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db, &state.images);

    let students = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            students
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new student.
///
/// The ID is assigned by the server; any `id` or `image_location` in the body is
/// ignored.
///
/// # Returns
/// - `200 OK` - The persisted student including its assigned ID
/// - `400 Bad Request` - Blank name or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = StudentDto,
    responses(
        (status = 200, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db, &state.images);

    let params = CreateStudentParams::from_dto(payload)?;

    let student = service.create(params).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Search students by example.
///
/// Every field present in the example must match: `name` as a prefix, all other
/// fields exactly. An empty example returns every student.
///
/// # Returns
/// - `200 OK` - Matching students ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students/search",
    tag = STUDENT_TAG,
    request_body = StudentExampleDto,
    responses(
        (status = 200, description = "Successfully searched students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_students(
    State(state): State<AppState>,
    Json(example): Json<StudentExampleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db, &state.images);

    let students = service.search(StudentExample::from_dto(example)).await?;

    Ok((
        StatusCode::OK,
        Json(
            students
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific student by ID.
///
/// # Returns
/// - `200 OK` - Student details
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db, &state.images);

    match service.get_by_id(id).await? {
        Some(student) => Ok((StatusCode::OK, Json(student.into_dto()))),
        None => Err(AppError::NotFound("Student not found".to_string())),
    }
}

/// Update a student.
///
/// The ID from the path is used regardless of any ID in the body. The recorded
/// image location is preserved.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Blank name or malformed body
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn modify_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db, &state.images);

    let params = UpdateStudentParams::from_dto(id, payload)?;

    match service.update(params).await? {
        Some(student) => Ok((StatusCode::OK, Json(student.into_dto()))),
        None => Err(AppError::NotFound("Student not found".to_string())),
    }
}

/// Delete a student.
///
/// Idempotent: deleting a student that does not exist also succeeds. The
/// student's image file is removed along with the record.
///
/// # Returns
/// - `200 OK` - Student deleted or already absent
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted or already absent"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db, &state.images);

    if !service.delete(id).await? {
        tracing::debug!("Student {} already absent", id);
    }

    Ok(StatusCode::OK)
}

/// Upload or replace the image of a student.
///
/// Reads the `file` part of the multipart body. The stored file name is derived
/// from the student ID and the part's original file name; a `fileName` part, if
/// sent, is ignored. The previous image is deleted before the new one is written.
///
/// # Returns
/// - `200 OK` - Plain text `File uploaded successfully: <path>`
/// - `400 Bad Request` - Empty upload or no usable file name
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Previous image could not be deleted or the new one
///   could not be written
#[utoipa::path(
    post,
    path = "/students/{id}/image",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = String, content_type = "text/plain"),
        (status = 400, description = "Empty upload or missing file name", body = String, content_type = "text/plain"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Failed to replace or write the image", body = String, content_type = "text/plain")
    ),
)]
pub async fn upload_image_for_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_PART) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await?;
        upload = Some((file_name, content));
    }

    let Some((file_name, content)) = upload.filter(|(_, content)| !content.is_empty()) else {
        return Err(ImageError::EmptyUpload.into());
    };

    let service = StudentService::new(&state.db, &state.images);

    let path = service.upload_image(id, &file_name, &content).await?;

    Ok((
        StatusCode::OK,
        format!("File uploaded successfully: {}", path),
    ))
}

/// Delete the image of a student.
///
/// Removes the image file and clears the recorded location.
///
/// # Returns
/// - `200 OK` - Image deleted, empty body
/// - `404 Not Found` - No student, no recorded image, or the file is missing; empty body
/// - `500 Internal Server Error` - The file could not be deleted; empty body
#[utoipa::path(
    delete,
    path = "/students/{id}/image",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Image deleted"),
        (status = 404, description = "No image to delete"),
        (status = 500, description = "Image file could not be deleted")
    ),
)]
pub async fn delete_image_for_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db, &state.images);

    service.delete_image(id).await?;

    Ok(StatusCode::OK)
}
