use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }
}

/// A single field-level failure, shared by both envelope styles.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Standard envelope: `{success, message?, data?, meta?, details?}`.
///
/// `data` is doubly optional so that a success without payload omits the key
/// while an error renders it as an explicit `null`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T, M = Meta> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Option<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl<T: Serialize, M: Serialize> ApiResponse<T, M> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<M>) -> Self {
        Self {
            success: true,
            message,
            data: data.map(Some),
            meta,
            details: None,
        }
    }

    pub fn error(message: impl Into<String>, details: Option<Vec<FieldError>>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: Some(None),
            meta: None,
            details,
        }
    }
}

/// An [`ApiResponse`] paired with the HTTP status it is sent with.
#[derive(Debug)]
pub struct Envelope<T, M = Meta> {
    pub status: StatusCode,
    pub body: ApiResponse<T, M>,
}

impl<T: Serialize, M: Serialize> Envelope<T, M> {
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<T: Serialize, M: Serialize> IntoResponse for Envelope<T, M> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Wrap handler output in a success envelope sent with `200 OK`.
pub fn success<T: Serialize, M: Serialize>(
    data: Option<T>,
    message: Option<&str>,
    meta: Option<M>,
) -> Envelope<T, M> {
    Envelope {
        status: StatusCode::OK,
        body: ApiResponse::success(data, message.map(str::to_owned), meta),
    }
}

/// Wrap a failure in an error envelope. Without a status the response is a
/// `500 Internal Server Error`.
pub fn error(
    message: impl Into<String>,
    status: Option<StatusCode>,
    details: Option<Vec<FieldError>>,
) -> Envelope<serde_json::Value> {
    Envelope {
        status: status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        body: ApiResponse::error(message, details),
    }
}
