use super::*;

/// Tests updating an existing student.
///
/// Expected: Ok(Some(Student)) with new fields
#[tokio::test]
async fn updates_existing_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, images) = temp_storage().await;

    let student = factory::create_student(db).await?;

    let service = StudentService::new(db, &images);
    let updated = service
        .update(UpdateStudentParams {
            id: student.id,
            name: "Renamed".to_string(),
            birth_date: None,
            semester: Some(6),
            central_id: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, student.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.semester, Some(6));

    Ok(())
}

/// Tests updating a student that doesn't exist.
///
/// Verifies that no record is created as a side effect.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, images) = temp_storage().await;

    let service = StudentService::new(db, &images);
    let result = service
        .update(UpdateStudentParams {
            id: 404,
            name: "Nobody".to_string(),
            birth_date: None,
            semester: None,
            central_id: None,
        })
        .await?;

    assert!(result.is_none());
    assert!(service.get_all().await?.is_empty());

    Ok(())
}
