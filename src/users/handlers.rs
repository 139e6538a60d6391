use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::UserOut,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/usuarios/", get(list_users))
        .route("/usuarios/:id", get(get_user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserOut>>> {
    let users = state.store.list_users().await?;
    Ok(Json(users.into_iter().map(UserOut::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserOut>> {
    let user = state
        .store
        .find_user_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Usuario no encontrado".into()))?;
    Ok(Json(user.into()))
}
