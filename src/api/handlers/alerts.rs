//! `GET /alerts`: names of items expiring within the configured window.
//!
//! This is the endpoint the client-side notifier polls once on load; an
//! empty array means nothing is worth alerting about.

use crate::{api::ApiContext, pantry::store};
use axum::{extract::Extension, http::StatusCode, Json};
use chrono::Local;
use sqlx::PgPool;
use tracing::{error, instrument};

type AlertsResponse = Result<Json<Vec<String>>, (StatusCode, String)>;

#[utoipa::path(
    get,
    path= "/alerts",
    responses (
        (status = 200, description = "Names of items expiring within the window, soonest first", body = [String]),
        (status = 500, description = "Failed to query the pantry", body = String)
    ),
    tag = "alerts",
)]
#[instrument(skip(pool, context))]
pub async fn alerts(
    Extension(pool): Extension<PgPool>,
    Extension(context): Extension<ApiContext>,
) -> AlertsResponse {
    let today = Local::now().date_naive();

    let names = store::expiring_names(&pool, today, context.expiry_window_days)
        .await
        .map_err(|err| {
            error!("Failed to list expiring items: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to list expiring items".to_string(),
            )
        })?;

    Ok(Json(names))
}
