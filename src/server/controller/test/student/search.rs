use super::*;

/// Tests searching by example.
///
/// Expected: 200 with students matching the name prefix and semester
#[tokio::test]
async fn searches_by_example() {
    let app = TestApp::new().await;

    StudentFactory::new(app.db())
        .name("Alice")
        .semester(2)
        .build()
        .await
        .unwrap();
    StudentFactory::new(app.db())
        .name("Alan")
        .semester(3)
        .build()
        .await
        .unwrap();
    StudentFactory::new(app.db())
        .name("Bob")
        .semester(2)
        .build()
        .await
        .unwrap();

    let response = app
        .server
        .post("/students/search")
        .json(&json!({ "name": "Al", "semester": 2 }))
        .await;
    response.assert_status(StatusCode::OK);

    let found = response.json::<Vec<StudentDto>>();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Alice");
}

/// Tests that an empty example matches everyone.
///
/// Expected: 200 with all students
#[tokio::test]
async fn empty_example_returns_all() {
    let app = TestApp::new().await;

    StudentFactory::new(app.db()).build().await.unwrap();
    StudentFactory::new(app.db()).build().await.unwrap();

    let response = app.server.post("/students/search").json(&json!({})).await;
    response.assert_status(StatusCode::OK);

    assert_eq!(response.json::<Vec<StudentDto>>().len(), 2);
}
