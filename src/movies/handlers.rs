use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{error, instrument};

use crate::{
    movies::{
        client::{TmdbClient, UpstreamReply},
        dto::{DetailsQuery, PopularQuery},
    },
    state::AppState,
};

pub fn popular_routes() -> Router<AppState> {
    Router::new().route("/movies/popular", get(popular))
}

pub fn details_routes() -> Router<AppState> {
    Router::new().route("/movies/:id", get(details))
}

// Upstream status and body are relayed verbatim; only transport failures
// become a local 500.
fn relay(reply: UpstreamReply) -> Response {
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

fn upstream_failure(err: anyhow::Error, msg: &str) -> Response {
    error!(error = %err, "tmdb proxy error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": msg })),
    )
        .into_response()
}

#[instrument(skip(state))]
pub async fn popular(State(state): State<AppState>, Query(q): Query<PopularQuery>) -> Response {
    let client = TmdbClient::from_state(&state);
    match client.popular(q.page, &q.language).await {
        Ok(reply) => relay(reply),
        Err(e) => upstream_failure(e, "Failed to load movies"),
    }
}

#[instrument(skip(state))]
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(q): Query<DetailsQuery>,
) -> Response {
    let client = TmdbClient::from_state(&state);
    match client.movie(id, &q.language).await {
        Ok(reply) => relay(reply),
        Err(e) => upstream_failure(e, "Failed to load movie"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn relay_preserves_upstream_status_and_body() {
        let reply = UpstreamReply {
            status: StatusCode::NOT_FOUND,
            body: Bytes::from_static(b"{\"status_message\":\"not found\"}"),
        };
        let response = relay(reply);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn upstream_failure_is_a_generic_500() {
        let response = upstream_failure(anyhow::anyhow!("dns error"), "Failed to load movies");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
