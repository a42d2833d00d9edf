use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use hub_core::model::Persona;

use crate::error::CoachApiError;

#[derive(Clone, Debug)]
pub struct CoachConfig {
    pub base_url: String,
}

impl CoachConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";

    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("HUB_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.into());
        Self { base_url }
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.into(),
        }
    }
}

/// The coaching backend as the UI sees it: two JSON-over-HTTP operations.
///
/// Behind a trait so views can be exercised against a scripted double.
#[async_trait]
pub trait CoachApi: Send + Sync {
    /// Ask for hints on an activity prompt.
    ///
    /// # Errors
    ///
    /// Returns `CoachApiError` on a non-2xx status or transport failure.
    async fn request_hints(
        &self,
        question: &str,
        persona: Persona,
        meeting_notes: &str,
    ) -> Result<Vec<String>, CoachApiError>;

    /// Turn mentor session notes into a weekly-tasks summary.
    ///
    /// # Errors
    ///
    /// Returns `CoachApiError` on a non-2xx status or transport failure.
    async fn generate_weekly_tasks(
        &self,
        meeting_notes: &str,
    ) -> Result<WeeklyTasksReport, CoachApiError>;
}

#[derive(Debug, Serialize)]
struct HintRequest<'a> {
    question: &'a str,
    resume_name: Persona,
    meeting_notes: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct HintResponse {
    // Absent field reads as "no hints", not an error.
    #[serde(default)]
    hints: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WeeklyTasksRequest<'a> {
    meeting_notes: &'a str,
}

/// Typed view of the loosely-shaped summarization response. Every field is
/// optional on the wire; callers pick fallbacks by name instead of probing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WeeklyTasksSummary {
    pub session_summary: Option<String>,
    pub raw_output: Option<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    pub emotional_progress: Option<String>,
}

/// A parsed summary plus the body it was parsed from, kept for the
/// collapsible raw-response view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeeklyTasksReport {
    pub summary: WeeklyTasksSummary,
    pub raw_body: String,
}

#[derive(Clone)]
pub struct CoachService {
    client: Client,
    config: CoachConfig,
}

impl CoachService {
    #[must_use]
    pub fn new(config: CoachConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(CoachConfig::from_env())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CoachApi for CoachService {
    async fn request_hints(
        &self,
        question: &str,
        persona: Persona,
        meeting_notes: &str,
    ) -> Result<Vec<String>, CoachApiError> {
        let url = self.endpoint("ai-hint");
        debug!(%url, persona = persona.as_str(), "requesting hints");

        let payload = HintRequest {
            question,
            resume_name: persona,
            meeting_notes,
        };
        let response = self.client.post(url).json(&payload).send().await?;

        if !response.status().is_success() {
            warn!(status = response.status().as_u16(), "hint request failed");
            return Err(CoachApiError::Status(response.status()));
        }

        let body: HintResponse = response.json().await?;
        Ok(body.hints)
    }

    async fn generate_weekly_tasks(
        &self,
        meeting_notes: &str,
    ) -> Result<WeeklyTasksReport, CoachApiError> {
        let url = self.endpoint("generate-weekly-tasks");
        debug!(%url, "generating weekly tasks");

        let response = self
            .client
            .post(url)
            .json(&WeeklyTasksRequest { meeting_notes })
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(
                status = response.status().as_u16(),
                "weekly tasks request failed"
            );
            return Err(CoachApiError::Status(response.status()));
        }

        let body: serde_json::Value = response.json().await?;
        // A non-object body degrades to the all-fallbacks summary; the raw
        // view still shows what actually came back.
        let summary = serde_json::from_value(body.clone()).unwrap_or_default();
        let raw_body = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
        Ok(WeeklyTasksReport { summary, raw_body })
    }
}
