//! Request and result types exchanged with the analysis backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::AnalyzeError;
use crate::ports::BackendReply;

/// Largest integer a JSON number can carry without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Input of one analysis, built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Trimmed, non-empty repository URL.
    pub repo_url: String,
    /// Issue number, always greater than zero.
    pub issue_number: u64,
}

impl AnalysisRequest {
    /// Validates raw form input.
    ///
    /// The URL is trimmed and must not be empty. The issue number must parse
    /// to a positive integer; integral values written as `30000.0` or `3e4`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::Validation`] when either field is unusable.
    pub fn from_raw(repo_url_raw: &str, issue_number_raw: &str) -> Result<Self, AnalyzeError> {
        let repo_url = repo_url_raw.trim();
        match parse_issue_number(issue_number_raw) {
            Some(issue_number) if !repo_url.is_empty() => {
                Ok(Self { repo_url: repo_url.to_owned(), issue_number })
            }
            _ => Err(AnalyzeError::Validation),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_issue_number(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return (n > 0).then_some(n);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= MAX_SAFE_INTEGER {
        Some(value as u64)
    } else {
        None
    }
}

/// Priority as sent by the backend: either a bare number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriorityScore {
    /// Numeric score, e.g. `4`.
    Number(serde_json::Number),
    /// Textual score, e.g. `"4 - high: crashes on start"`.
    Text(String),
}

impl PriorityScore {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl fmt::Display for PriorityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Structured analysis of one issue.
///
/// Only the named fields are rendered individually; anything else the
/// backend sends is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Short summary of the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Issue classification (`bug`, `feature_request`, `documentation`, `question`, `other`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Priority score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<PriorityScore>,
    /// Labels in the order the backend suggested them.
    #[serde(default, deserialize_with = "labels_or_empty")]
    pub suggested_labels: Vec<String>,
    /// Who or what the issue affects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_impact: Option<String>,
    /// Unrecognized fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    /// Summary, treating an empty string as absent.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        non_empty(self.summary.as_deref())
    }

    /// Classification, treating an empty string as absent.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        non_empty(self.kind.as_deref())
    }

    /// Priority score, treating an empty string as absent.
    #[must_use]
    pub fn priority_score(&self) -> Option<&PriorityScore> {
        self.priority_score.as_ref().filter(|score| !score.is_blank())
    }

    /// Potential impact, treating an empty string as absent.
    #[must_use]
    pub fn potential_impact(&self) -> Option<&str> {
        non_empty(self.potential_impact.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn labels_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Interprets a completed exchange.
///
/// The body is decoded as JSON whatever the status. On success returns the
/// typed result together with the raw payload it was decoded from.
///
/// # Errors
///
/// Non-2xx replies become [`AnalyzeError::Application`] when the body carries
/// a usable `detail`, otherwise [`AnalyzeError::MalformedApplication`]. A 2xx
/// reply that does not decode becomes [`AnalyzeError::MalformedResult`].
pub fn interpret_reply(reply: &BackendReply) -> Result<(AnalysisResult, Value), AnalyzeError> {
    let body = serde_json::from_str::<Value>(&reply.body);

    if !reply.is_success() {
        let status = reply.status;
        return Err(match body.ok().as_ref().and_then(usable_detail) {
            Some(detail) => AnalyzeError::Application { status, detail },
            None => AnalyzeError::MalformedApplication { status },
        });
    }

    let payload = body.map_err(|e| AnalyzeError::MalformedResult { reason: e.to_string() })?;
    let result = serde_json::from_value::<AnalysisResult>(payload.clone())
        .map_err(|e| AnalyzeError::MalformedResult { reason: e.to_string() })?;
    Ok((result, payload))
}

/// Extracts `detail` from an error body.
///
/// A non-empty string is used verbatim. Request-validation failures carry a
/// list of `{loc, msg, type}` objects instead; their messages are joined.
fn usable_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> =
                items.iter().filter_map(|item| item.get("msg").and_then(Value::as_str)).collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
