use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, MeResponse, PublicUser, RegisterRequest},
        jwt::{AuthUser, JwtKeys},
        password,
        repo::User,
    },
    db,
    error::{bad_request, internal, unauthorized, ApiError},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

fn present(field: Option<&String>) -> Option<&str> {
    field.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Emails are stored and looked up lowercased, so matching is
/// case-insensitive by construction.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (Some(name), Some(email), Some(password)) = (
        present(payload.name.as_ref()),
        present(payload.email.as_ref()),
        payload.password.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(bad_request("Fill in all fields"));
    };

    password::validate_complexity(password).map_err(bad_request)?;

    let email = normalize_email(email);

    // Fast-path duplicate check; the unique constraint below is authoritative.
    if User::find_by_email(&state.db, &email)
        .await
        .map_err(internal)?
        .is_some()
    {
        warn!(%email, "email already registered");
        return Err(bad_request("A user with this email already exists"));
    }

    let hash = password::hash_password(password).map_err(internal)?;

    let user = match User::create(&state.db, name, &email, &hash).await {
        Ok(u) => u,
        Err(e) if db::is_unique_violation(&e) => {
            warn!(%email, "email already registered (lost insert race)");
            return Err(bad_request("A user with this email already exists"));
        }
        Err(e) => return Err(internal(e)),
    };

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user).map_err(internal)?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (Some(email), Some(password)) = (
        present(payload.email.as_ref()),
        payload.password.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(bad_request("Fill in all fields"));
    };

    let email = normalize_email(email);

    // One generic message for unknown email and wrong password alike,
    // so the endpoint cannot be used to enumerate accounts.
    let user = match User::find_by_email(&state.db, &email)
        .await
        .map_err(internal)?
    {
        Some(u) => u,
        None => {
            warn!(%email, "login unknown email");
            return Err(unauthorized("Invalid credentials"));
        }
    };

    let ok = password::verify_password(password, &user.password_hash).map_err(internal)?;
    if !ok {
        warn!(user_id = user.id, "login invalid password");
        return Err(unauthorized("Invalid credentials"));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user).map_err(internal)?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        success: true,
        token,
        user: PublicUser::from(&user),
    }))
}

/// Session check: the verified claims are the answer, no database read.
#[instrument(skip_all)]
pub async fn me(AuthUser(claims): AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        success: true,
        user: PublicUser::from(&claims),
    })
}
