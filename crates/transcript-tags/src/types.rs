#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TagKind {
    Speaker,
    Timestamp,
    Topic,
    TopicSummary,
    Sentiments,
    Chapter,
    Entities,
}

/// Byte range into a reconstructed pseudo-text. `start <= end`; `start == end`
/// marks a zero-width span (empty fragment text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// One annotation over the transcript.
///
/// `span: None` means the tag describes the document as a whole rather than a
/// character range (`topic_summary`, `chapter`, `entities`).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tag {
    pub kind: TagKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Tag {
    pub fn is_anchored(&self) -> bool {
        self.span.is_some()
    }
}

/// Final output: the transcript text verbatim plus the ordered tag list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub text: String,
    pub tags: Vec<Tag>,
}
