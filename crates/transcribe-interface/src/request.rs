/// Body of a transcription job submission.
///
/// `audio_url` must be fetchable by the remote service for the lifetime of
/// the job, so presigned URLs need a TTL that outlives the poll budget.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptRequest {
    pub audio_url: String,
    pub speaker_labels: bool,
    pub language_detection: bool,
    pub auto_highlights: bool,
    pub iab_categories: bool,
    pub sentiment_analysis: bool,
    pub auto_chapters: bool,
    pub entity_detection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl TranscriptRequest {
    pub fn new(audio_url: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
            speaker_labels: true,
            language_detection: true,
            auto_highlights: true,
            iab_categories: true,
            sentiment_analysis: true,
            auto_chapters: true,
            entity_detection: true,
            language_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_language_code_when_unset() {
        let request = TranscriptRequest::new("https://example.com/audio.wav");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["audio_url"], "https://example.com/audio.wav");
        assert_eq!(json["speaker_labels"], true);
        assert!(json.get("language_code").is_none());
    }
}
