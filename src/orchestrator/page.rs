//! Named slots of the page the orchestrator drives.

use crate::render::ResultsPanel;

/// Submit control label when idle.
pub const SUBMIT_LABEL: &str = "Analyze Issue";
/// Submit control label while a request is outstanding.
pub const SUBMIT_BUSY_LABEL: &str = "Analyzing...";
/// Copy control label at rest.
pub const COPY_LABEL: &str = "Copy JSON";
/// Copy control label right after a successful copy.
pub const COPY_DONE_LABEL: &str = "Copied!";
/// Notice shown in the results area while a request is outstanding.
pub const PENDING_NOTICE: &str = "Working on it...";

/// Example repository filled in by the sample action.
pub const SAMPLE_REPO_URL: &str = "https://github.com/facebook/react";
/// Example issue number filled in by the sample action.
pub const SAMPLE_ISSUE_NUMBER: &str = "30000";

/// Raw text of the two input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Repository URL text field.
    pub repo_url: String,
    /// Issue number field, as typed.
    pub issue_number: String,
}

/// A button-like control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Whether the control accepts input.
    pub enabled: bool,
    /// Text shown on the control.
    pub label: &'static str,
}

/// Every slot the orchestrator reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Input fields.
    pub form: FormFields,
    /// Submit control.
    pub submit: Control,
    /// Whether the results area is shown.
    pub results_visible: bool,
    /// Content of the results area.
    pub results: ResultsPanel,
    /// Pretty-printed payload of the last success; empty otherwise.
    pub raw_json: String,
    /// Copy control.
    pub copy: Control,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            form: FormFields::default(),
            submit: Control { enabled: true, label: SUBMIT_LABEL },
            results_visible: false,
            results: ResultsPanel::Empty,
            raw_json: String::new(),
            copy: Control { enabled: false, label: COPY_LABEL },
        }
    }
}
