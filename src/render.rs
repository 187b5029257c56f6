//! Pure rendering of analysis results into display records.
//!
//! Records are produced first and formatted second, so escaping stays a
//! separate, explicit step: [`sanitize_text`] when building records and
//! [`escape_markup`] when writing HTML.

use std::fmt::Write as _;

use crate::model::AnalysisResult;

/// Shown in place of any absent value.
pub const PLACEHOLDER: &str = "-";

/// The rendered fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    /// Free-text summary.
    Summary,
    /// Issue classification.
    Type,
    /// Priority score.
    Priority,
    /// Suggested label tags.
    SuggestedLabels,
    /// Free-text impact statement.
    PotentialImpact,
}

impl FieldName {
    /// Human-readable caption.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Type => "Type",
            Self::Priority => "Priority",
            Self::SuggestedLabels => "Suggested Labels",
            Self::PotentialImpact => "Potential Impact",
        }
    }
}

/// How a single field value is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Free text.
    Text(String),
    /// Verbatim identifier, shown in code style.
    Code(String),
    /// Discrete tags in their original order.
    Tags(Vec<String>),
    /// The value is absent.
    Placeholder,
}

/// One named field of the rendered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    /// Which field this is.
    pub name: FieldName,
    /// The value to display.
    pub value: DisplayValue,
}

/// Content of the results area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsPanel {
    /// Nothing rendered yet.
    #[default]
    Empty,
    /// Transient notice while a request is outstanding.
    Pending(String),
    /// A successful analysis.
    Fields(Vec<DisplayField>),
    /// A highlighted error block.
    Error(String),
}

/// Maps a result to its display records.
#[must_use]
pub fn display_fields(result: &AnalysisResult) -> Vec<DisplayField> {
    let text = |value: Option<&str>| {
        value.map_or(DisplayValue::Placeholder, |s| DisplayValue::Text(sanitize_text(s)))
    };

    let labels: Vec<String> = result.suggested_labels.iter().map(|l| sanitize_text(l)).collect();

    vec![
        DisplayField { name: FieldName::Summary, value: text(result.summary()) },
        DisplayField {
            name: FieldName::Type,
            value: result
                .kind()
                .map_or(DisplayValue::Placeholder, |k| DisplayValue::Code(sanitize_text(k))),
        },
        DisplayField {
            name: FieldName::Priority,
            value: result.priority_score().map_or(DisplayValue::Placeholder, |p| {
                DisplayValue::Text(sanitize_text(&p.to_string()))
            }),
        },
        DisplayField {
            name: FieldName::SuggestedLabels,
            value: if labels.is_empty() {
                DisplayValue::Placeholder
            } else {
                DisplayValue::Tags(labels)
            },
        },
        DisplayField { name: FieldName::PotentialImpact, value: text(result.potential_impact()) },
    ]
}

/// Removes control characters, keeping newlines and tabs.
///
/// Backend text ends up in a terminal, where raw escape sequences would be
/// interpreted.
#[must_use]
pub fn sanitize_text(input: &str) -> String {
    input.chars().filter(|c| !c.is_control() || matches!(c, '\n' | '\t')).collect()
}

/// Escapes the characters that are significant in HTML text and attributes.
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats the results area as an HTML fragment.
#[must_use]
pub fn to_markup(panel: &ResultsPanel) -> String {
    match panel {
        ResultsPanel::Empty => String::new(),
        ResultsPanel::Pending(notice) => {
            format!("<div class=\"pending-box\">{}</div>\n", escape_markup(notice))
        }
        ResultsPanel::Error(message) => format!(
            "<div class=\"error-box\"><strong>Oops.</strong> {}</div>\n",
            escape_markup(message)
        ),
        ResultsPanel::Fields(fields) => {
            let mut out = String::new();
            for field in fields {
                let value = match &field.value {
                    DisplayValue::Text(text) => escape_markup(text),
                    DisplayValue::Code(code) => format!("<code>{}</code>", escape_markup(code)),
                    DisplayValue::Tags(tags) => tags
                        .iter()
                        .map(|tag| format!("<span class=\"pill\">{}</span>", escape_markup(tag)))
                        .collect::<Vec<_>>()
                        .join(" "),
                    DisplayValue::Placeholder => PLACEHOLDER.to_owned(),
                };
                let _ = writeln!(
                    out,
                    "<div class=\"result-field\"><span class=\"label\">{}</span><p>{value}</p></div>",
                    field.name.caption()
                );
            }
            out
        }
    }
}

/// Formats the results area for a terminal.
#[must_use]
pub fn to_plain_text(panel: &ResultsPanel) -> String {
    match panel {
        ResultsPanel::Empty => String::new(),
        ResultsPanel::Pending(notice) => format!("{notice}\n"),
        ResultsPanel::Error(message) => format!("Oops. {message}\n"),
        ResultsPanel::Fields(fields) => {
            let width = fields.iter().map(|f| f.name.caption().len()).max().unwrap_or(0);
            let mut out = String::new();
            for field in fields {
                let value = match &field.value {
                    DisplayValue::Text(text) | DisplayValue::Code(text) => text.clone(),
                    DisplayValue::Tags(tags) => {
                        tags.iter().map(|t| format!("[{t}]")).collect::<Vec<_>>().join(" ")
                    }
                    DisplayValue::Placeholder => PLACEHOLDER.to_owned(),
                };
                let _ = writeln!(out, "{:<width$}  {value}", field.name.caption());
            }
            out
        }
    }
}
