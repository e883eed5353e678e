use super::*;

/// Tests listing students when none exist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests listing all students ordered by id.
///
/// Expected: Ok(Vec) with every student in insertion order
#[tokio::test]
async fn returns_all_students_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    let third = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
