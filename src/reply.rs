//! Compact envelope: `{message, data, meta?}` for successes and
//! `{message, code, details?}` for failures, where `code` mirrors the HTTP
//! status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::{FieldError, Meta};

#[derive(Debug, Serialize, ToSchema)]
pub struct ReplyBody<T, M = Meta> {
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug)]
pub struct Reply<B> {
    pub status: StatusCode,
    pub body: B,
}

impl<B: Serialize> Reply<B> {
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<B: Serialize> IntoResponse for Reply<B> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn send_success<T: Serialize, M: Serialize>(
    data: T,
    message: impl Into<String>,
    meta: Option<M>,
) -> Reply<ReplyBody<T, M>> {
    Reply {
        status: StatusCode::OK,
        body: ReplyBody {
            message: message.into(),
            data,
            meta,
        },
    }
}

/// Without a status the reply is a `400 Bad Request`.
pub fn send_error(
    message: impl Into<String>,
    status: Option<StatusCode>,
    details: Option<Vec<FieldError>>,
) -> Reply<ErrorBody> {
    let status = status.unwrap_or(StatusCode::BAD_REQUEST);
    Reply {
        status,
        body: ErrorBody {
            message: message.into(),
            code: status.as_u16(),
            details,
        },
    }
}
