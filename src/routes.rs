use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState,
    error::AppResult,
    models::{CreateInput, FormOptions, MediaId, MediaRecord, PatchInput},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/{id}", get(get_item).patch(update_item).delete(delete_item))
        .route("/api/options", get(options))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
}

pub async fn list_items(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<MediaRecord>>> {
    let mut catalog = state.catalog.lock().await;
    Ok(Json(catalog.list_items().await?.to_vec()))
}

pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<MediaRecord>> {
    let mut catalog = state.catalog.lock().await;
    Ok(Json(catalog.get_item(&MediaId::from(id)).await?))
}

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateInput>,
) -> AppResult<(StatusCode, Json<MediaRecord>)> {
    let mut catalog = state.catalog.lock().await;
    let record = catalog.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<PatchInput>,
) -> AppResult<Json<MediaRecord>> {
    let mut catalog = state.catalog.lock().await;
    Ok(Json(catalog.update_item(&MediaId::from(id), patch).await?))
}

pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let mut catalog = state.catalog.lock().await;
    catalog.delete_item(&MediaId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn options(State(state): State<Arc<AppState>>) -> Json<FormOptions> {
    Json(FormOptions::new(state.config.slot.as_str()))
}
