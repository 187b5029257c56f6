//! Runtime configuration for the CLI shell around the orchestrator.
//!
//! Resolution order for the backend URL: `--base-url`, then
//! `ISSUE_LENS_BASE_URL` (a `.env` file is honoured), then the default.

use std::path::PathBuf;

use reqwest::Url;

/// Where the analysis backend listens unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Environment variable overriding the backend URL.
pub const BASE_URL_VAR: &str = "ISSUE_LENS_BASE_URL";
/// Environment variable naming a cassette to record backend exchanges into.
pub const RECORD_VAR: &str = "ISSUE_LENS_RECORD";
/// Environment variable naming a cassette to replay backend exchanges from.
pub const REPLAY_VAR: &str = "ISSUE_LENS_REPLAY";

/// How the analysis port is wired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Talk to the backend.
    #[default]
    Live,
    /// Talk to the backend and record every exchange into a cassette.
    Record(PathBuf),
    /// Serve exchanges from a cassette; the backend is never contacted.
    Replay(PathBuf),
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL without a trailing slash.
    pub base_url: String,
    /// Adapter wiring for the analysis port.
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), mode: Mode::Live }
    }
}

impl Config {
    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error for an unusable base URL or conflicting cassette variables.
    pub fn from_env(base_url_flag: Option<&str>) -> Result<Self, String> {
        Self::resolve(base_url_flag, |key| std::env::var(key).ok())
    }

    /// Resolves configuration from a flag value and a variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error for an unusable base URL or conflicting cassette variables.
    pub fn resolve(
        base_url_flag: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let non_empty = |value: String| (!value.trim().is_empty()).then_some(value);

        let raw = base_url_flag
            .map(str::to_owned)
            .or_else(|| lookup(BASE_URL_VAR))
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let base_url = normalize_base_url(&raw)?;

        let record = lookup(RECORD_VAR).and_then(non_empty);
        let replay = lookup(REPLAY_VAR).and_then(non_empty);
        let mode = match (record, replay) {
            (Some(_), Some(_)) => {
                return Err(format!("{RECORD_VAR} and {REPLAY_VAR} cannot both be set"));
            }
            (Some(path), None) => Mode::Record(PathBuf::from(path)),
            (None, Some(path)) => Mode::Replay(PathBuf::from(path)),
            (None, None) => Mode::Live,
        };

        Ok(Self { base_url, mode })
    }
}

/// Validates an http(s) URL and strips trailing slashes.
///
/// # Errors
///
/// Returns an error if `raw` is not an absolute http or https URL.
pub fn normalize_base_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw.trim()).map_err(|e| format!("Invalid backend URL {raw:?}: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url.as_str().trim_end_matches('/').to_owned()),
        other => Err(format!("Invalid backend URL {raw:?}: unsupported scheme {other:?}")),
    }
}
