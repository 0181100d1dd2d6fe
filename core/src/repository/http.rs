use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::repository::traits::StatsRepository;

// Error body shape of the backend: { "detail": "..." }.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Blocking client for the case/report backend. The bearer token is handed
/// in explicitly; nothing here reads ambient state.
#[derive(Clone)]
pub struct HttpStatsRepository {
    base_url: String,
    token: String,
    client: Client,
}

impl HttpStatsRepository {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client: Client::new(),
        }
    }

    fn fetch_count(&self, path: &str) -> Result<u64> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching counter");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .send()
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(rejection(path, status, &body));
        }

        // Counter endpoints return a bare integer body.
        response
            .json::<u64>()
            .with_context(|| format!("invalid counter body from {}", path))
    }
}

/// Map a non-success response to an error carrying the backend's `detail`
/// message when the body has one, or the bare status otherwise.
fn rejection(path: &str, status: StatusCode, body: &str) -> anyhow::Error {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| format!("HTTP {}", status));
    anyhow!("backend rejected GET {}: {}", path, detail)
}

impl StatsRepository for HttpStatsRepository {
    fn total_cases(&self) -> Result<u64> {
        self.fetch_count("/case/total")
    }

    fn total_reports(&self) -> Result<u64> {
        self.fetch_count("/report/total")
    }

    fn cases_this_month(&self) -> Result<u64> {
        self.fetch_count("/case/this-month")
    }

    fn reports_this_month(&self) -> Result<u64> {
        self.fetch_count("/report/this-month")
    }
}
