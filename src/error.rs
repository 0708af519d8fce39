use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::response::{self, FieldError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// A body field that could not be read as its declared type.
    #[error("Validation failed")]
    InvalidField { field: String, message: String },

    #[error("Invalid JSON body")]
    InvalidJson(#[from] JsonRejection),

    #[error("Invalid path parameter")]
    InvalidPath(#[from] PathRejection),
}

impl AppError {
    /// Build an [`AppError::InvalidField`] from a path-tracked serde failure.
    pub fn from_json_path(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();
        let field = if path == "." {
            missing_field(&message).unwrap_or("body").to_string()
        } else {
            path
        };
        AppError::InvalidField { field, message }
    }
}

// serde reports absent fields at the root as "missing field `name`".
fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}

/// Validator keys are Rust field names; the wire uses camelCase.
fn json_field_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Flatten validator output into `{field, message}` pairs, ordered by field.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut details: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = json_field_name(&field);
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid ({})", err.code));
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    details.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    details
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(errors) => response::error(
                self.to_string(),
                Some(StatusCode::BAD_REQUEST),
                Some(field_errors(errors)),
            )
            .into_response(),
            AppError::InvalidField { field, message } => response::error(
                self.to_string(),
                Some(StatusCode::BAD_REQUEST),
                Some(vec![FieldError::new(field.clone(), message.clone())]),
            )
            .into_response(),
            AppError::InvalidJson(rejection) => {
                tracing::debug!(error = %rejection, "json body rejected");
                response::error(
                    self.to_string(),
                    Some(rejection.status()),
                    Some(vec![FieldError::new("body", rejection.body_text())]),
                )
                .into_response()
            }
            AppError::InvalidPath(rejection) => response::error(
                self.to_string(),
                Some(rejection.status()),
                Some(vec![FieldError::new("path", rejection.body_text())]),
            )
            .into_response(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use validator::ValidationError;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(dead_code)]
    struct Sample {
        product_variant_id: u64,
    }

    fn decode(body: &str) -> AppError {
        let de = &mut serde_json::Deserializer::from_str(body);
        let err = serde_path_to_error::deserialize::<_, Sample>(de).unwrap_err();
        AppError::from_json_path(err)
    }

    #[test]
    fn field_errors_are_sorted_and_use_json_names() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "quantity",
            ValidationError::new("range").with_message("quantity must be a positive integer".into()),
        );
        errors.add("product_variant_id", ValidationError::new("range"));

        let details = field_errors(&errors);
        assert_eq!(
            details,
            vec![
                FieldError::new("productVariantId", "productVariantId is invalid (range)"),
                FieldError::new("quantity", "quantity must be a positive integer"),
            ]
        );
    }

    #[test]
    fn json_field_name_converts_snake_case() {
        assert_eq!(json_field_name("item_id"), "itemId");
        assert_eq!(json_field_name("quantity"), "quantity");
        assert_eq!(json_field_name("productVariantId"), "productVariantId");
    }

    #[test]
    fn type_errors_name_the_offending_field() {
        match decode(r#"{"productVariantId": "x"}"#) {
            AppError::InvalidField { field, .. } => assert_eq!(field, "productVariantId"),
            other => panic!("unexpected {other:?}"),
        }
        match decode("{}") {
            AppError::InvalidField { field, message } => {
                assert_eq!(field, "productVariantId");
                assert!(message.starts_with("missing field"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn validation_failures_are_bad_requests() {
        assert_eq!(
            AppError::Validation(ValidationErrors::new())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidField {
                field: "quantity".into(),
                message: "invalid type".into(),
            }
            .into_response()
            .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
