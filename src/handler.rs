use std::sync::Arc;

use axum::extract::Path;
use axum::http::{StatusCode, Uri};
use axum::Json;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::schema::Match;
use crate::{schema::Pagination, AppState};

pub async fn index_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn get_matches_handler(
    opts: Option<Query<Pagination>>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let Query(opts) = opts.unwrap_or_default();
    let page = opts.page.unwrap_or(1);

    Ok(Json(data.repo.list(page, data.list_per_page).await?))
}

pub async fn get_match_by_id_handler(
    Path(match_id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let res = data.repo.get_by_id(match_id).await?;
    if res.data.is_empty() {
        return Err(AppError::NotFound(format!("match {match_id}")));
    }
    Ok(Json(res))
}

pub async fn create_match_handler(
    State(data): State<Arc<AppState>>,
    Json(body): Json<Match>,
) -> Result<impl IntoResponse, AppError> {
    let res = data.repo.create(body).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

/// Shared by PATCH and PUT. The id in the path wins over any `matchId` in
/// the body.
pub async fn update_match_handler(
    Path(match_id): Path<i64>,
    State(data): State<Arc<AppState>>,
    Json(mut body): Json<Match>,
) -> Result<impl IntoResponse, AppError> {
    body.match_id = Some(match_id);

    let res = data.repo.update(body).await?;
    if res.meta.affected_rows == Some(0) {
        return Err(AppError::NotFound(format!("match {match_id}")));
    }
    Ok(Json(res))
}

pub async fn delete_match_handler(
    Path(match_id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let res = data.repo.delete(match_id).await?;
    if res.meta.affected_rows == Some(0) {
        return Err(AppError::NotFound(format!("match {match_id}")));
    }
    Ok(Json(res))
}

pub async fn not_found_handler(uri: Uri) -> AppError {
    tracing::debug!(%uri, "no route");
    AppError::NotFound(format!("no route for {uri}"))
}
