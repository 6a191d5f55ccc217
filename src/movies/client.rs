use anyhow::Context;
use axum::http::StatusCode;
use bytes::Bytes;

use crate::state::AppState;

/// Upstream reply relayed to the client untouched: the catalog's JSON shape
/// is not modeled, only its status and raw body are carried.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Thin client for the movie catalog. The API key stays server-side and is
/// appended to every upstream request as a query parameter.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            http: state.http.clone(),
            base_url: state.config.tmdb.base_url.trim_end_matches('/').to_string(),
            api_key: state.config.tmdb.api_key.clone(),
        }
    }

    pub fn popular_url(&self) -> String {
        format!("{}/movie/popular", self.base_url)
    }

    pub fn movie_url(&self, id: i32) -> String {
        format!("{}/movie/{}", self.base_url, id)
    }

    pub async fn popular(&self, page: u32, language: &str) -> anyhow::Result<UpstreamReply> {
        self.forward(
            self.popular_url(),
            &[
                ("api_key", self.api_key.as_str()),
                ("language", language),
                ("page", &page.to_string()),
            ],
        )
        .await
    }

    pub async fn movie(&self, id: i32, language: &str) -> anyhow::Result<UpstreamReply> {
        self.forward(
            self.movie_url(id),
            &[("api_key", self.api_key.as_str()), ("language", language)],
        )
        .await
    }

    async fn forward(&self, url: String, query: &[(&str, &str)]) -> anyhow::Result<UpstreamReply> {
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .context("catalog request failed")?;
        let status = StatusCode::from_u16(response.status().as_u16())
            .context("catalog returned an invalid status")?;
        let body = response
            .bytes()
            .await
            .context("catalog response body unreadable")?;
        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client() -> TmdbClient {
        TmdbClient::from_state(&AppState::fake())
    }

    #[tokio::test]
    async fn popular_url_targets_the_catalog() {
        let client = make_client();
        assert_eq!(
            client.popular_url(),
            "https://api.themoviedb.org/3/movie/popular"
        );
    }

    #[tokio::test]
    async fn movie_url_embeds_the_id() {
        let client = make_client();
        assert_eq!(client.movie_url(603), "https://api.themoviedb.org/3/movie/603");
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let state = AppState::fake();
        let mut config = (*state.config).clone();
        config.tmdb.base_url = "https://api.themoviedb.org/3/".into();
        let state = AppState {
            config: std::sync::Arc::new(config),
            ..state
        };
        let client = TmdbClient::from_state(&state);
        assert_eq!(
            client.popular_url(),
            "https://api.themoviedb.org/3/movie/popular"
        );
    }
}
