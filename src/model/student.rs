use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student record as exchanged over the API.
///
/// `id` is assigned by the server and ignored on input; updates take the id from
/// the request path instead. `image_location` is read-only and only changes
/// through the image endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub central_id: Option<i32>,
    #[serde(default)]
    #[schema(read_only)]
    pub image_location: Option<String>,
}

/// Partial student used as a search template.
///
/// Absent fields do not constrain the search; `name` matches as a prefix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentExampleDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub central_id: Option<i32>,
}

/// Multipart form accepted by the image upload endpoint.
///
/// Only used for API documentation; the handler reads the parts directly.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    /// Image content. The part's file name is used to build the stored file name.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Requested file name. Accepted for compatibility but always overridden.
    #[schema(rename = "fileName")]
    pub file_name: Option<String>,
}
