//! REST client for the KinoPulse collection service.
//!
//! The backend exposes classified market "signals" (reviews, ratings moves,
//! box-office reports, ...), tracked movie records and aggregate overview
//! statistics. This crate only shapes requests and decodes responses; every
//! view keeps its own mock fallback for when the service is unreachable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default service location for local development; the production dashboard
/// points elsewhere via `KINOPULSE_API_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0} from {1}")]
    Status(u16, String),
}

/// One classified market signal (a review, a rating change, a box-office
/// report, ...). Optional fields are simply absent for unclassified or
/// sparsely scraped records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: String,
    pub external_id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub source_url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub signal_type: Option<String>,
    #[serde(default)]
    pub importance: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub platform_rating: Option<String>,
    #[serde(default)]
    pub views_count: Option<u64>,
    #[serde(default)]
    pub likes_count: Option<u64>,
    #[serde(default)]
    pub comments_count: Option<u64>,
    #[serde(default)]
    pub shares_count: Option<u64>,
    #[serde(default)]
    pub published_at: Option<String>,
    pub created_at: String,
    pub is_classified: bool,
    pub is_published: bool,
    pub is_featured: bool,
    #[serde(default)]
    pub movie_title: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
}

/// A tracked theatrical release with its aggregated counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub age_rating: Option<String>,
    #[serde(default)]
    pub kinopoisk_rating: Option<f64>,
    #[serde(default)]
    pub kinopoisk_votes: Option<u64>,
    #[serde(default)]
    pub imdb_rating: Option<f64>,
    pub signals_count: u64,
    pub reviews_count: u64,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    pub total_screenings: u64,
    #[serde(default)]
    pub avg_occupancy: Option<f64>,
    pub is_active: bool,
    pub is_featured: bool,
    #[serde(default)]
    pub distributor_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Aggregate counters for the overview page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverviewStats {
    pub signals_24h: u64,
    pub signals_7d: u64,
    pub critical_count: u64,
    pub notable_count: u64,
    #[serde(default)]
    pub by_movie: std::collections::BTreeMap<String, u64>,
    #[serde(default)]
    pub by_type: std::collections::BTreeMap<String, u64>,
    #[serde(default)]
    pub by_sentiment: std::collections::BTreeMap<String, u64>,
    pub trend_vs_previous: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalPage {
    pub signals: Vec<Signal>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

/// Filters for `GET /signals`. `None` fields are omitted from the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalQuery {
    pub movie_slug: Option<String>,
    pub signal_type: Option<String>,
    pub importance: Option<String>,
    pub hours: Option<u32>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SignalQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(slug) = &self.movie_slug {
            params.push(("movie_slug", slug.clone()));
        }
        if let Some(kind) = &self.signal_type {
            params.push(("signal_type", kind.clone()));
        }
        if let Some(importance) = &self.importance {
            params.push(("importance", importance.clone()));
        }
        if let Some(hours) = self.hours {
            params.push(("hours", hours.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }
}

/// Filters for `GET /movies`. The featured flag is only sent when set, to
/// match the service's "absent means all" convention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieQuery {
    pub search: Option<String>,
    pub featured: bool,
    pub distributor: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl MovieQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            if !search.trim().is_empty() {
                params.push(("search", search.clone()));
            }
        }
        if self.featured {
            params.push(("featured", "true".to_string()));
        }
        if let Some(distributor) = &self.distributor {
            params.push(("distributor", distributor.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }
}

/// Thin typed wrapper over the service endpoints.
#[derive(Debug, Clone)]
pub struct Api {
    base_url: String,
    http: reqwest::Client,
}

impl Default for Api {
    fn default() -> Self {
        Self::new(resolve_base_url())
    }
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn overview_stats(&self) -> Result<OverviewStats, ApiError> {
        self.get_json("/stats/overview", &[]).await
    }

    pub async fn signals(&self, query: &SignalQuery) -> Result<SignalPage, ApiError> {
        self.get_json("/signals", &query.params()).await
    }

    pub async fn movies(&self, query: &MovieQuery) -> Result<MoviePage, ApiError> {
        self.get_json("/movies", &query.params()).await
    }

    pub async fn movie(&self, slug: &str) -> Result<Movie, ApiError> {
        self.get_json(&format!("/movies/{slug}"), &[]).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), url));
        }
        Ok(response.json::<T>().await?)
    }
}

/// Base URL resolution: env override on native, compile-time default on wasm
/// (the browser build always talks to the same origin-configured service).
fn resolve_base_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(url) = std::env::var("KINOPULSE_API_URL") {
            if !url.trim().is_empty() {
                return url;
            }
        }
    }
    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_query_omits_unset_filters() {
        let query = SignalQuery {
            importance: Some("critical".into()),
            per_page: Some(5),
            ..Default::default()
        };
        assert_eq!(
            query.params(),
            vec![
                ("importance", "critical".to_string()),
                ("per_page", "5".to_string()),
            ]
        );
    }

    #[test]
    fn movie_query_sends_featured_only_when_set() {
        let mut query = MovieQuery {
            search: Some("финист".into()),
            ..Default::default()
        };
        assert!(!query.params().iter().any(|(k, _)| *k == "featured"));

        query.featured = true;
        assert!(query
            .params()
            .iter()
            .any(|(k, v)| *k == "featured" && v == "true"));
    }

    #[test]
    fn blank_search_is_not_sent() {
        let query = MovieQuery {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert!(query.params().is_empty());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = Api::new("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
    }

    #[test]
    fn overview_stats_decode_with_missing_maps() {
        let stats: OverviewStats = serde_json::from_str(
            r#"{
                "signals_24h": 142,
                "signals_7d": 983,
                "critical_count": 7,
                "notable_count": 54,
                "trend_vs_previous": 12.5
            }"#,
        )
        .expect("partial overview payload should decode");
        assert_eq!(stats.signals_7d, 983);
        assert!(stats.by_movie.is_empty());
    }

    #[test]
    fn signal_decodes_with_sparse_fields() {
        let signal: Signal = serde_json::from_str(
            r#"{
                "id": "sig-1",
                "external_id": "ext-1",
                "title": "Рекордный уикенд",
                "source_url": "https://example.com/1",
                "created_at": "2026-01-02T10:00:00Z",
                "is_classified": true,
                "is_published": true,
                "is_featured": false
            }"#,
        )
        .expect("sparse signal should decode");
        assert_eq!(signal.title, "Рекордный уикенд");
        assert!(signal.signal_type.is_none());
        assert!(signal.views_count.is_none());
    }
}
