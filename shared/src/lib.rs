use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

mod parser;

pub use parser::{Analysis, ParseError, looks_like_snake_report, parse_analysis, strip_code_fence, strip_data_uri_prefix};

#[derive(Serialize, Deserialize, Clone)]
pub struct AnalyzeRequest {
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub content: String,
    pub is_snake_image: bool,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

/// The set of fields a deployment's prompt requests and its UI parses.
/// Client and server must be built for the same version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SchemaVersion {
    Basic,
    Extended,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BasicReport {
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub venomous: bool,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub safety_concerns: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtendedReport {
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub venomous: bool,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub safety_concerns: String,
    #[serde(default)]
    pub habitat: String,
    #[serde(default)]
    pub first_aid_steps: Vec<String>,
    #[serde(default)]
    pub interesting_facts: Vec<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Source {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One report variant per deployment, never both at once.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisReport {
    Basic(BasicReport),
    Extended(ExtendedReport),
}

impl AnalysisReport {
    pub fn species(&self) -> &str {
        match self {
            AnalysisReport::Basic(report) => &report.species,
            AnalysisReport::Extended(report) => &report.species,
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            AnalysisReport::Basic(report) => report.confidence,
            AnalysisReport::Extended(report) => report.confidence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Thresholds at 70 and 90, inclusive on the upper side.
    pub fn from_confidence(value: f64) -> Self {
        if value >= 90.0 {
            ConfidenceTier::High
        } else if value >= 70.0 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}
