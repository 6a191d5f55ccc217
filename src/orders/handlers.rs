use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::{bad_request, internal, ApiError},
    orders::{
        dto::{CreateOrderRequest, CreatedOrderResponse, OrdersResponse},
        repo::Order,
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/orders", get(list_orders))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/orders", post(create_order))
}

#[instrument(skip(state, claims))]
pub async fn list_orders(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<OrdersResponse>, ApiError> {
    let orders = Order::list_by_user(&state.db, claims.sub)
        .await
        .map_err(internal)?;
    Ok(Json(OrdersResponse { orders }))
}

#[instrument(skip(state, claims, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreatedOrderResponse>), ApiError> {
    let new_order = payload.into_new_order().map_err(bad_request)?;

    let order = Order::create(&state.db, claims.sub, new_order)
        .await
        .map_err(internal)?;

    info!(order_id = order.id, user_id = claims.sub, "order created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedOrderResponse {
            success: true,
            order,
        }),
    ))
}
