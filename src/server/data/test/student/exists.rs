use super::*;

/// Tests existence checks for present and absent students.
///
/// Expected: Ok(true) for a created student, Ok(false) otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);

    assert!(repo.exists(student.id).await?);
    assert!(!repo.exists(student.id + 1000).await?);

    Ok(())
}
