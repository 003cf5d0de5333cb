//! Handlers for the `/auth` resource (register, login).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ludo_core::error::CoreError;
use ludo_core::types::DbId;
use ludo_db::models::user::CreateUser;
use ludo_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Code of the language being learned, e.g. `"en"`.
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: DbId,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a learner account. Returns 201 with the new id, 409 if the username
/// is taken.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<RegisteredUser>>)> {
    let Json(input) = payload?;
    state.config.password.validate(&input.password)?;

    let password_hash = hash_password_blocking(input.password).await?;
    let user = UserRepo::register(
        &state.pool,
        &CreateUser {
            username: input.username,
            password_hash,
            current_language: input.language,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Learner registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: RegisteredUser { id: user.id },
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Exchange username + password for an access token. Unknown usernames and
/// wrong passwords get the same 401.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(input) = payload?;
    let user = UserRepo::find_by_username(&state.pool, &input.username).await?;

    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let password_valid = verify_password_blocking(input.password, stored_hash).await?;

    let user = match user {
        Some(user) if password_valid => user,
        _ => {
            tracing::debug!(username = %input.username, "Rejected login attempt");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            )));
        }
    };

    let token = generate_access_token(user.id, &user.username, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "Learner logged in");

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}
