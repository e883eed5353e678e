use sea_orm::{
    sea_query::Expr,
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::student::{
    CreateStudentParams, Student, StudentExample, UpdateStudentParams,
};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new student without an image and returns it with its assigned id
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            name: ActiveValue::Set(params.name),
            birth_date: ActiveValue::Set(params.birth_date),
            semester: ActiveValue::Set(params.semester),
            central_id: ActiveValue::Set(params.central_id),
            image_location: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(student))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let student = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(student.map(Student::from_entity))
    }

    /// Gets all students ordered by id
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    /// Finds students matching every field present in the example
    ///
    /// Name matches as a literal, case-sensitive prefix, all other fields match
    /// exactly. An empty example matches every student.
    pub async fn find_by_example(&self, example: &StudentExample) -> Result<Vec<Student>, DbErr> {
        use entity::student::Column;

        let condition = Condition::all()
            .add_option(example.id.map(|id| Column::Id.eq(id)))
            .add_option(
                example
                    .name
                    .as_deref()
                    .map(name_has_prefix),
            )
            .add_option(example.birth_date.map(|date| Column::BirthDate.eq(date)))
            .add_option(example.semester.map(|semester| Column::Semester.eq(semester)))
            .add_option(
                example
                    .central_id
                    .map(|central_id| Column::CentralId.eq(central_id)),
            );

        let students = entity::prelude::Student::find()
            .filter(condition)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates a student's descriptive fields, leaving the image location untouched
    ///
    /// Fails with `DbErr::RecordNotUpdated` if the student does not exist.
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name: ActiveValue::Set(params.name),
            birth_date: ActiveValue::Set(params.birth_date),
            semester: ActiveValue::Set(params.semester),
            central_id: ActiveValue::Set(params.central_id),
            image_location: ActiveValue::NotSet,
        }
        .update(self.db)
        .await?;

        Ok(Student::from_entity(student))
    }

    /// Records (or clears) the image path of a student
    ///
    /// Fails with `DbErr::RecordNotUpdated` if the student does not exist.
    pub async fn set_image_location(
        &self,
        id: i32,
        image_location: Option<String>,
    ) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(id),
            image_location: ActiveValue::Set(image_location),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Student::from_entity(student))
    }

    /// Deletes a student, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Literal prefix match on the name column.
///
/// `LIKE` would treat `%` and `_` as wildcards and ignore ASCII case in SQLite.
fn name_has_prefix(prefix: &str) -> Expr {
    Expr::cust_with_values(
        r#"substr("name", 1, length(?)) = ?"#,
        [prefix.to_string(), prefix.to_string()],
    )
}
