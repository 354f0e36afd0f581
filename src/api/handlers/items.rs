//! Pantry item handlers: the pantry view, adding and deleting items.

use crate::{
    api::ApiContext,
    pantry::{self, store, PantryItem, Stats},
};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct PantryView {
    pub items: Vec<PantryItem>,
    pub stats: Stats,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct NewItem {
    pub name: String,
    pub expiry: NaiveDate,
}

type PantryResponse = Result<Json<PantryView>, (StatusCode, String)>;
type AddItemResponse = Result<(StatusCode, Json<PantryItem>), (StatusCode, String)>;
type DeleteItemResponse = Result<StatusCode, (StatusCode, String)>;

fn storage_error(err: &sqlx::Error, what: &str) -> (StatusCode, String) {
    error!("Failed to {what}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Failed to {what}"),
    )
}

#[utoipa::path(
    get,
    path= "/pantry",
    responses (
        (status = 200, description = "Pantry items with expiry stats; expired rows are purged first", body = PantryView),
        (status = 500, description = "Failed to query the pantry", body = String)
    ),
    tag = "pantry",
)]
#[instrument(skip(pool, context))]
pub async fn pantry(
    Extension(pool): Extension<PgPool>,
    Extension(context): Extension<ApiContext>,
) -> PantryResponse {
    let today = Local::now().date_naive();

    let purged = store::purge_expired(&pool, today)
        .await
        .map_err(|err| storage_error(&err, "purge expired items"))?;
    if purged > 0 {
        debug!("purged {purged} expired items");
    }

    let stored = store::list(&pool)
        .await
        .map_err(|err| storage_error(&err, "list items"))?;

    let mut stats = Stats {
        expired: purged,
        ..Stats::default()
    };
    let items: Vec<PantryItem> = stored
        .into_iter()
        .map(|row| {
            stats.record(pantry::classify(
                row.expiry,
                today,
                context.expiry_window_days,
            ));
            PantryItem::from_stored(row, today)
        })
        .collect();

    Ok(Json(PantryView { items, stats }))
}

#[utoipa::path(
    post,
    path= "/items",
    request_body = NewItem,
    responses (
        (status = 201, description = "Item stored", body = PantryItem),
        (status = 400, description = "Missing or blank item name", body = String),
        (status = 500, description = "Failed to store the item", body = String)
    ),
    tag = "pantry",
)]
#[instrument(skip(pool, context, payload))]
pub async fn add_item(
    Extension(pool): Extension<PgPool>,
    Extension(context): Extension<ApiContext>,
    payload: Option<Json<NewItem>>,
) -> AddItemResponse {
    let Some(Json(new_item)) = payload else {
        return Err((StatusCode::BAD_REQUEST, "Missing payload".to_string()));
    };

    let Some(name) = clean_name(&new_item.name) else {
        return Err((StatusCode::BAD_REQUEST, "Item name is required".to_string()));
    };

    let today = Local::now().date_naive();
    let image = context.images.lookup(name).await;

    let stored = store::insert(&pool, name, new_item.expiry, &image, today)
        .await
        .map_err(|err| storage_error(&err, "store the item"))?;

    debug!("stored item {} expiring {}", stored.id, stored.expiry);

    Ok((
        StatusCode::CREATED,
        Json(PantryItem::from_stored(stored, today)),
    ))
}

#[utoipa::path(
    delete,
    path= "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item id")
    ),
    responses (
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Unknown item id", body = String),
        (status = 500, description = "Failed to delete the item", body = String)
    ),
    tag = "pantry",
)]
#[instrument(skip(pool))]
pub async fn delete_item(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> DeleteItemResponse {
    let deleted = store::delete(&pool, id)
        .await
        .map_err(|err| storage_error(&err, "delete the item"))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Unknown item id".to_string()))
    }
}

/// Trimmed item name, or `None` when blank.
fn clean_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_trims() {
        assert_eq!(clean_name("  Milk "), Some("Milk"));
        assert_eq!(clean_name("Eggs"), Some("Eggs"));
    }

    #[test]
    fn test_clean_name_rejects_blank() {
        assert_eq!(clean_name(""), None);
        assert_eq!(clean_name("   "), None);
        assert_eq!(clean_name("\t\n"), None);
    }

    #[test]
    fn test_new_item_deserializes_date() -> Result<(), serde_json::Error> {
        let item: NewItem = serde_json::from_str(r#"{"name": "Milk", "expiry": "2024-05-17"}"#)?;
        assert_eq!(item.name, "Milk");
        assert_eq!(
            item.expiry,
            NaiveDate::from_ymd_opt(2024, 5, 17).expect("valid date")
        );
        Ok(())
    }

    #[test]
    fn test_pantry_view_serializes_stats() -> Result<(), serde_json::Error> {
        let view = PantryView {
            items: vec![],
            stats: Stats {
                total: 0,
                expired: 2,
                expiring_soon: 0,
                safe: 0,
            },
        };

        let value = serde_json::to_value(&view)?;
        assert_eq!(value["stats"]["expired"], 2);
        assert!(value["items"].as_array().map_or(false, |a| a.is_empty()));
        Ok(())
    }
}
