use serde::{Deserialize, Serialize};

/// Origin of an input source. Drives the text-extraction path during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Text,
    Pdf,
    Docx,
    Image,
}

/// One piece of raw career evidence with its extracted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSource {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Extracted text, never raw bytes.
    pub content: String,
}

/// Structured metrics extracted from the merged input sources.
///
/// Every field tolerates being absent in the wire payload; a missing sequence
/// is the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedMetrics {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub internships: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// The aggregate career-context record owned by the caller's session.
///
/// `detected_metrics` stays `None` until metric extraction has run; scoring
/// treats that as the all-empty case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub input_sources: Vec<InputSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_metrics: Option<DetectedMetrics>,
}

impl UserProfile {
    /// Merges all input sources into one labelled context block for the LLM.
    pub fn merged_context(&self) -> String {
        self.input_sources
            .iter()
            .map(|s| format!("Source: {}\nContent: {}", s.label, s.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
