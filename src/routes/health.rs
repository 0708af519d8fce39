use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    reply::{Reply, ReplyBody, send_success},
    response::Meta,
};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ReplyBody<HealthData, Meta>),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Reply<ReplyBody<HealthData, Meta>> {
    let data = HealthData {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    };

    send_success(data, "Health check", None)
}
