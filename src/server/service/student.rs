use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::{image::ImageError, AppError},
    model::student::{CreateStudentParams, Student, StudentExample, UpdateStudentParams},
    storage::ImageStorage,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStorage,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStorage) -> Self {
        Self { db, images }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Finds students matching the example template
    pub async fn search(&self, example: StudentExample) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.find_by_example(&example).await?)
    }

    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        let student = repo.create(params).await?;

        tracing::info!("Created student {}", student.id);

        Ok(student)
    }

    /// Updates a student's descriptive fields
    /// Returns None if the student doesn't exist
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Ok(None);
        }

        let student = repo.update(params).await?;

        Ok(Some(student))
    }

    /// Deletes a student together with its image file
    ///
    /// Returns false if there was no such student. A failure to remove the image
    /// file is logged and does not fail the deletion.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = StudentRepository::new(self.db);
        let _guard = self.images.lock(id).await;

        let Some(student) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        let deleted = repo.delete(id).await?;

        if let Some(location) = student.image_location {
            match self.images.exists(&location).await {
                Ok(true) => {
                    if let Err(e) = self.images.remove(&location).await {
                        tracing::warn!(
                            "Deleted student {} but could not remove image {}: {}",
                            id,
                            location,
                            e
                        );
                    }
                }
                Ok(false) => {}
                Err(e) => tracing::warn!("Could not check image {}: {}", location, e),
            }
        }

        Ok(deleted)
    }

    /// Gets the recorded image path of a student
    /// Returns None if the student doesn't exist or has no image
    pub async fn get_image_location(&self, id: i32) -> Result<Option<String>, AppError> {
        let repo = StudentRepository::new(self.db);

        let student = repo.get_by_id(id).await?;

        Ok(student.and_then(|s| s.image_location))
    }

    /// Writes image content to the given absolute path
    pub async fn save_image(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        self.images
            .store(path, content)
            .await
            .map_err(ImageError::Write)?;

        Ok(())
    }

    /// Records the image path of a student
    /// Returns false if the student doesn't exist
    pub async fn save_image_location(&self, id: i32, path: &str) -> Result<bool, AppError> {
        let repo = StudentRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.set_image_location(id, Some(path.to_string())).await?;

        Ok(true)
    }

    /// Replaces the image of a student and returns the new absolute path
    ///
    /// The file is stored as `student_<id>_<original file name>` inside the image
    /// storage. Any previously recorded image that still exists is deleted first;
    /// if that fails the upload is aborted before the new file is written.
    ///
    /// # Arguments
    /// - `id` - Student ID
    /// - `original_file_name` - File name supplied by the client; only its final
    ///   path component is used
    /// - `content` - Image bytes
    ///
    /// # Returns
    /// - `Ok(String)` - Absolute path the image was stored at
    /// - `Err(ImageError::EmptyUpload)` - No content
    /// - `Err(ImageError::MissingFileName)` - No usable original file name
    /// - `Err(AppError::NotFound)` - No such student
    /// - `Err(ImageError::ReplaceExisting)` - The previous image could not be removed
    /// - `Err(ImageError::Write)` - Writing the new image failed
    pub async fn upload_image(
        &self,
        id: i32,
        original_file_name: &str,
        content: &[u8],
    ) -> Result<String, AppError> {
        if content.is_empty() {
            return Err(ImageError::EmptyUpload.into());
        }

        let original = Path::new(original_file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or(ImageError::MissingFileName)?;

        let path = self
            .images
            .resolve(&format!("student_{}_{}", id, original))
            .ok_or(ImageError::MissingFileName)?;
        let path_str = path.to_string_lossy().into_owned();

        let _guard = self.images.lock(id).await;

        let repo = StudentRepository::new(self.db);
        if !repo.exists(id).await? {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }

        if let Some(existing) = self.get_image_location(id).await? {
            let exists = self
                .images
                .exists(&existing)
                .await
                .map_err(ImageError::ReplaceExisting)?;

            if exists {
                self.images
                    .remove(&existing)
                    .await
                    .map_err(ImageError::ReplaceExisting)?;
            } else {
                tracing::warn!("Existing image for student {} not found: {}", id, existing);
            }
        }

        self.save_image(&path, content).await?;

        if !self.save_image_location(id, &path_str).await? {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }

        tracing::info!("Stored image for student {} at {}", id, path_str);

        Ok(path_str)
    }

    /// Deletes the image file of a student and clears the recorded path
    ///
    /// # Returns
    /// - `Ok(())` - File removed and reference cleared
    /// - `Err(ImageError::NoImage)` - No student, no recorded path, or no file at the path
    /// - `Err(ImageError::Remove)` - The filesystem refused the removal
    pub async fn delete_image(&self, id: i32) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);
        let _guard = self.images.lock(id).await;

        let Some(student) = repo.get_by_id(id).await? else {
            tracing::debug!("Student not found for ID: {}", id);
            return Err(ImageError::NoImage(id).into());
        };

        let Some(location) = student.image_location else {
            tracing::debug!("No image associated with student ID: {}", id);
            return Err(ImageError::NoImage(id).into());
        };

        if !self
            .images
            .exists(&location)
            .await
            .map_err(ImageError::Remove)?
        {
            tracing::warn!("Image file not found: {}", location);
            return Err(ImageError::NoImage(id).into());
        }

        self.images
            .remove(&location)
            .await
            .map_err(ImageError::Remove)?;

        repo.set_image_location(id, None).await?;

        tracing::info!("Deleted image {} of student {}", location, id);

        Ok(())
    }
}
