use crate::server::{
    error::{image::ImageError, AppError},
    model::student::{CreateStudentParams, StudentExample, UpdateStudentParams},
    service::student::StudentService,
    storage::ImageStorage,
};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, factory, factory::student::StudentFactory};

mod create;
mod update;

/// Opens image storage in a fresh temporary directory.
///
/// The `TempDir` must be kept alive for as long as the storage is used.
async fn temp_storage() -> (TempDir, ImageStorage) {
    let dir = TempDir::new().unwrap();
    let storage = ImageStorage::open(dir.path().join("images")).await.unwrap();
    (dir, storage)
}
