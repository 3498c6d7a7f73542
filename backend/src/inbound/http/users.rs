//! User API handlers.
//!
//! ```text
//! GET /user/70
//! POST /user/upload   (multipart/form-data, field `users_data`)
//! ```

use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, get, post, web};
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::ports::IngestionReport;
use crate::domain::{Error, ErrorCode, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UsersDataUploadSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_id, payload_too_large_error,
};

/// Multipart field carrying the purchase file.
pub const USERS_DATA_FIELD: &str = "users_data";
/// Largest accepted purchase file, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
/// Message returned once a purchase file has been ingested.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "file processed successfully!";

const USERS_DATA: FieldName = FieldName::new(USERS_DATA_FIELD);

/// User response body for `GET /user/{id}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_owned(),
        }
    }
}

/// Upload summary returned by `POST /user/upload`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct UploadResponse {
    #[schema(example = "file processed successfully!")]
    pub message: String,
    /// Lines read from the file, whether or not their inserts succeeded.
    pub processed_lines: usize,
    /// Individual entity inserts that failed.
    pub failed_inserts: usize,
}

impl From<IngestionReport> for UploadResponse {
    fn from(report: IngestionReport) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_owned(),
            processed_lines: report.processed_lines,
            failed_inserts: report.failed_inserts(),
        }
    }
}

/// Only a missing user keeps its status; every other failure is a bad request.
fn map_user_lookup_error(error: Error) -> Error {
    if error.code() == ErrorCode::NotFound {
        return error;
    }
    let mapped = Error::invalid_request(error.message());
    match error.details() {
        Some(details) => mapped.with_details(details.clone()),
        None => mapped,
    }
}

fn malformed_upload(err: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("malformed multipart upload: {err}"))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Malformed id or lookup failure", body = ErrorSchema),
        (status = 404, description = "User does not exist", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_id(&path.into_inner(), FieldName::new("id"))?;
    let user = state
        .users
        .get_user_by_id(UserId::new(id))
        .await
        .map_err(map_user_lookup_error)?;
    Ok(web::Json(UserResponse::from(user)))
}

async fn read_limited(field: &mut Field) -> ApiResult<Vec<u8>> {
    let mut contents = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(malformed_upload)? {
        if contents.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(payload_too_large_error(USERS_DATA, MAX_UPLOAD_BYTES));
        }
        contents.extend_from_slice(&chunk);
    }
    Ok(contents)
}

/// Read the `users_data` field, draining and ignoring any other field.
async fn read_users_data(mut payload: Multipart) -> ApiResult<Vec<u8>> {
    while let Some(mut field) = payload.try_next().await.map_err(malformed_upload)? {
        if field.name() == Some(USERS_DATA_FIELD) {
            return read_limited(&mut field).await;
        }
        debug!(field = ?field.name(), "skipping unexpected multipart field");
        while field.try_next().await.map_err(malformed_upload)?.is_some() {}
    }
    Err(missing_field_error(USERS_DATA))
}

/// Ingest a fixed-width purchase file.
#[utoipa::path(
    post,
    path = "/user/upload",
    request_body(
        content = UsersDataUploadSchema,
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 201, description = "File ingested", body = UploadResponse),
        (status = 400, description = "Missing, malformed or oversized upload", body = ErrorSchema),
        (status = 500, description = "Ingestion could not run", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "uploadUsersData"
)]
#[post("/user/upload")]
pub async fn upload_users_data(
    state: web::Data<HttpState>,
    payload: Multipart,
) -> ApiResult<HttpResponse> {
    let contents = read_users_data(payload).await?;
    info!(bytes = contents.len(), "purchase file received");
    let report = state.purchase_files.load_purchase_file(&contents).await?;
    Ok(HttpResponse::Created().json(UploadResponse::from(report)))
}
