use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    store::Recipe,
};

use super::dto::{CreateRecipeRequest, DeleteConfirmation, UpdateRecipeRequest};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/api/recetas/", get(list_recipes))
        .route("/api/recetas/:id", get(get_recipe))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/api/recetas/", post(create_recipe))
        .route("/api/recetas/:id", put(update_recipe).delete(delete_recipe))
}

#[instrument(skip(state))]
pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<Json<Vec<Recipe>>> {
    let recetas = state.store.list_recipes().await?;
    Ok(Json(recetas))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Recipe>> {
    let receta = state
        .store
        .find_recipe_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Receta no encontrada".into()))?;
    Ok(Json(receta))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecipeRequest>,
) -> ApiResult<(StatusCode, Json<Recipe>)> {
    let receta = state.store.create_recipe(payload.into()).await?;
    info!(recipe_id = receta.id, titulo = %receta.titulo, "recipe created");
    Ok((StatusCode::CREATED, Json(receta)))
}

#[instrument(skip(state, payload))]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRecipeRequest>,
) -> ApiResult<Json<Recipe>> {
    let receta = state
        .store
        .update_recipe(id, payload.into())
        .await?
        .ok_or_else(|| ApiError::NotFound("Receta no encontrada".into()))?;
    info!(recipe_id = receta.id, "recipe updated");
    Ok(Json(receta))
}

#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteConfirmation>> {
    let receta = state
        .store
        .delete_recipe(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Receta no encontrada".into()))?;
    info!(recipe_id = receta.id, titulo = %receta.titulo, "recipe deleted");
    Ok(Json(DeleteConfirmation {
        mensaje: format!("Receta '{}' eliminada correctamente", receta.titulo),
    }))
}
