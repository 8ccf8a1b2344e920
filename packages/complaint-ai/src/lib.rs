//! Complaint classification engine.
//!
//! Maps a free-text complaint description (plus an optional image reference)
//! to a structured analysis: category, priority, responsible department,
//! estimated resolution window, human-readable reasoning, and a 0-100 risk
//! score.
//!
//! Remote-first with a local fallback: [`AnalysisClient::analyze`] makes
//! exactly one bounded attempt against the AI service, and on any failure
//! (timeout, connection error, HTTP error, malformed body) degrades to the
//! deterministic rule-based analyzer in [`heuristic`]. The caller always
//! gets a usable [`AnalysisResult`]; the only visible trace of a remote
//! failure is the result's [`Provenance`] tag.
//!
//! # Example
//!
//! ```rust,ignore
//! use complaint_ai::AnalysisClient;
//!
//! let client = AnalysisClient::from_env()?;
//! let analysis = client.analyze("water leaking from the ceiling", None).await;
//! println!("{} -> {}", analysis.category, analysis.department);
//! ```

pub mod error;
pub mod heuristic;
pub mod types;

pub use error::{AnalysisError, Result};
pub use types::{AnalysisResult, Category, Priority, Provenance, RemoteAnalysis};

use std::time::{Duration, Instant};

use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

/// Default AI service endpoint, overridable via `AI_SERVICE_URL`.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8081/ai/analyze";

/// Default bound on the remote attempt, overridable via
/// `AI_SERVICE_TIMEOUT_SECS`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(50);

/// Client for the remote AI analysis service, with built-in local fallback.
///
/// Cheap to clone and safe to share across concurrent calls: each analysis
/// is an independent unit of work with no shared mutable state.
#[derive(Clone)]
pub struct AnalysisClient {
    http_client: Client,
    endpoint: String,
    timeout: Duration,
}

impl AnalysisClient {
    /// Create a client for the given endpoint with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create from `AI_SERVICE_URL` and `AI_SERVICE_TIMEOUT_SECS`, falling
    /// back to the defaults when unset.
    pub fn from_env() -> Result<Self> {
        let endpoint =
            std::env::var("AI_SERVICE_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let timeout = match std::env::var("AI_SERVICE_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AnalysisError::Config(format!(
                        "AI_SERVICE_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self::new(endpoint).with_timeout(timeout))
    }

    /// Set a custom bound on the remote attempt.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Analyze a complaint, remote-first.
    ///
    /// Makes exactly one attempt against the AI service — no retries — and
    /// on any failure logs the reason and delegates to
    /// [`heuristic::analyze`] with `has_image = image_url.is_some()`.
    /// Never returns an error.
    pub async fn analyze(&self, description: &str, image_url: Option<&str>) -> AnalysisResult {
        let start = Instant::now();

        match self.remote_analyze(description, image_url).await {
            Ok(analysis) => {
                debug!(
                    duration_ms = start.elapsed().as_millis() as u64,
                    category = %analysis.category,
                    priority = %analysis.priority,
                    risk_score = analysis.risk_score,
                    "remote analysis succeeded"
                );
                analysis
            }
            Err(e) => {
                warn!(
                    error = %e,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "AI service unavailable, using built-in analyzer"
                );
                heuristic::analyze(description, image_url.is_some())
            }
        }
    }

    /// Call the AI service once, bounded by the configured timeout.
    ///
    /// The full response body is retained on the result as `raw_remote`;
    /// `department` and `estimated_resolution` are re-derived from the
    /// parsed category and priority so the 1:1 routing invariants hold on
    /// the remote path too, and `risk_score` is clamped to 100.
    pub async fn remote_analyze(
        &self,
        description: &str,
        image_url: Option<&str>,
    ) -> Result<AnalysisResult> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&json!({
                "description": description,
                "imageUrl": image_url,
            }))
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api(format!(
                "AI service returned {status}: {error_text}"
            )));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;

        let remote: RemoteAnalysis = serde_json::from_value(raw.clone())
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;

        if remote.reasoning.trim().is_empty() {
            return Err(AnalysisError::Parse("reasoning must not be empty".into()));
        }

        Ok(AnalysisResult {
            category: remote.category,
            priority: remote.priority,
            department: remote.category.department().to_string(),
            estimated_resolution: remote.priority.estimated_resolution().to_string(),
            reasoning: remote.reasoning,
            risk_score: remote.risk_score.min(100) as u8,
            raw_remote: Some(raw),
            provenance: Provenance::Remote,
        })
    }
}
