use super::*;

/// Tests creating a student with all descriptive fields.
///
/// Verifies that the repository assigns an id, persists every field and never
/// records an image location on creation.
///
/// Expected: Ok(Student) matching the params
#[tokio::test]
async fn creates_student_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            name: "Ada Lovelace".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1815, 12, 10),
            semester: Some(3),
            central_id: Some(1815),
        })
        .await?;

    assert!(student.id > 0);
    assert_eq!(student.name, "Ada Lovelace");
    assert_eq!(student.birth_date, NaiveDate::from_ymd_opt(1815, 12, 10));
    assert_eq!(student.semester, Some(3));
    assert_eq!(student.central_id, Some(1815));
    assert_eq!(student.image_location, None);

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Ada Lovelace");

    Ok(())
}

/// Tests creating a student with only the required name.
///
/// Expected: Ok(Student) with all optional fields empty
#[tokio::test]
async fn creates_student_with_only_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            name: "Minimal".to_string(),
            birth_date: None,
            semester: None,
            central_id: None,
        })
        .await?;

    assert_eq!(student.name, "Minimal");
    assert_eq!(student.birth_date, None);
    assert_eq!(student.semester, None);
    assert_eq!(student.central_id, None);

    Ok(())
}

/// Tests that consecutive creates get distinct ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let params = CreateStudentParams {
        name: "Twin".to_string(),
        birth_date: None,
        semester: None,
        central_id: None,
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
