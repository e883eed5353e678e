use super::*;

/// Tests that a created student can be read back unchanged.
///
/// Expected: Ok with get_by_id returning the created student
#[tokio::test]
async fn created_student_is_readable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, images) = temp_storage().await;

    let service = StudentService::new(db, &images);
    let created = service
        .create(CreateStudentParams {
            name: "Ada".to_string(),
            birth_date: None,
            semester: Some(2),
            central_id: Some(31),
        })
        .await?;

    let fetched = service.get_by_id(created.id).await?.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}
