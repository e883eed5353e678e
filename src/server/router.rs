use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller::student::*, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Registry", description = "Student records and profile images"),
    tags((name = "student", description = "Student records and their images"))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_all_students, create_student))
        .routes(routes!(search_students))
        .routes(routes!(get_student_by_id, modify_student, delete_student))
        .routes(routes!(upload_image_for_student, delete_image_for_student))
        .split_for_parts();

    router.route(
        "/api-docs/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
