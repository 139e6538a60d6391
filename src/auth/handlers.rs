use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest, UserOut},
        password::{hash_password, verify_password},
    },
    error::{ApiError, ApiResult},
    state::AppState,
    store::NewUser,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserOut>)> {
    let taken = state
        .store
        .find_user_by_username(&payload.username)
        .await?
        .is_some()
        || state
            .store
            .find_user_by_email(&payload.email)
            .await?
            .is_some();
    if taken {
        warn!(username = %payload.username, "username or email already registered");
        return Err(ApiError::Conflict("El usuario o email ya existe".into()));
    }

    let digest = hash_password(&payload.password)?;
    let user = state
        .store
        .create_user(NewUser {
            username: payload.username,
            email: payload.email,
            password: digest,
            phone: payload.phone,
        })
        .await?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<UserOut>> {
    // Unknown username and wrong password collapse into one response; the
    // client must not learn which it was.
    let Some(user) = state.store.find_user_by_username(&payload.username).await? else {
        warn!(username = %payload.username, "login with unknown username");
        return Err(ApiError::Unauthorized("Credenciales incorrectas".into()));
    };

    if !verify_password(&payload.password, &user.password)? {
        warn!(user_id = user.id, "login with wrong password");
        return Err(ApiError::Unauthorized("Credenciales incorrectas".into()));
    }

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(user.into()))
}
