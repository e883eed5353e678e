use super::*;

/// Seeds three students with distinct semesters and name prefixes.
async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    StudentFactory::new(db)
        .name("Alice Smith")
        .semester(1)
        .central_id(100)
        .birth_date(NaiveDate::from_ymd_opt(2001, 2, 3).unwrap())
        .build()
        .await?;
    StudentFactory::new(db)
        .name("Alan Turing")
        .semester(2)
        .central_id(200)
        .build()
        .await?;
    StudentFactory::new(db)
        .name("Bob Jones")
        .semester(2)
        .central_id(300)
        .build()
        .await?;
    Ok(())
}

/// Tests that an empty example matches every student.
///
/// Expected: Ok(Vec) with all students
#[tokio::test]
async fn empty_example_matches_all() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_by_example(&StudentExample::default()).await?;

    assert_eq!(students.len(), 3);

    Ok(())
}

/// Tests matching by name prefix.
///
/// Expected: Ok(Vec) with the two students whose names start with "Al"
#[tokio::test]
async fn matches_name_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo
        .find_by_example(&StudentExample {
            name: Some("Al".to_string()),
            ..Default::default()
        })
        .await?;

    let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice Smith", "Alan Turing"]);

    Ok(())
}

/// Tests that every present field must match.
///
/// Expected: Ok(Vec) with only the student matching both prefix and semester
#[tokio::test]
async fn combines_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo
        .find_by_example(&StudentExample {
            name: Some("Al".to_string()),
            semester: Some(2),
            ..Default::default()
        })
        .await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Alan Turing");

    Ok(())
}

/// Tests exact matches on central id and birth date.
///
/// Expected: Ok(Vec) with the single matching student each time
#[tokio::test]
async fn matches_exact_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);

    let by_central_id = repo
        .find_by_example(&StudentExample {
            central_id: Some(300),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_central_id.len(), 1);
    assert_eq!(by_central_id[0].name, "Bob Jones");

    let by_birth_date = repo
        .find_by_example(&StudentExample {
            birth_date: NaiveDate::from_ymd_opt(2001, 2, 3),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_birth_date.len(), 1);
    assert_eq!(by_birth_date[0].name, "Alice Smith");

    Ok(())
}

/// Tests an example that matches nothing.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo
        .find_by_example(&StudentExample {
            semester: Some(9),
            ..Default::default()
        })
        .await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests that the name prefix is matched literally.
///
/// `%` and `_` carry no wildcard meaning and letter case must match.
///
/// Expected: Ok(empty Vec) for wildcard and wrong-case prefixes
#[tokio::test]
async fn name_prefix_is_literal_and_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);

    for prefix in ["A_", "%", "_", "al", "ALICE"] {
        let students = repo
            .find_by_example(&StudentExample {
                name: Some(prefix.to_string()),
                ..Default::default()
            })
            .await?;
        assert!(students.is_empty(), "prefix {:?} matched {:?}", prefix, students);
    }

    Ok(())
}

/// Tests that names containing wildcard characters are found by their literal prefix.
///
/// Expected: Ok(Vec) with only the student whose name starts with "100%"
#[tokio::test]
async fn matches_prefix_containing_wildcard_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db).name("100% Attendance").build().await?;
    StudentFactory::new(db).name("1000 Points").build().await?;
    StudentFactory::new(db).name("snake_case").build().await?;
    StudentFactory::new(db).name("snakeXcase").build().await?;

    let repo = StudentRepository::new(db);

    let percent = repo
        .find_by_example(&StudentExample {
            name: Some("100%".to_string()),
            ..Default::default()
        })
        .await?;
    let names: Vec<&str> = percent.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["100% Attendance"]);

    let underscore = repo
        .find_by_example(&StudentExample {
            name: Some("snake_".to_string()),
            ..Default::default()
        })
        .await?;
    let names: Vec<&str> = underscore.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["snake_case"]);

    Ok(())
}
