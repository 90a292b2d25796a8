use blockify_transcribe_interface::{
    Chapter, Entity, SentimentResult, TopicCategories, Transcript, Utterance, Word,
};

use crate::types::{Document, Span, Tag, TagKind};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transcript has no text")]
    MissingText,
}

#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Gates the speaker rule and the speaker-named nested timestamp variant.
    pub speaker_detection: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            speaker_detection: true,
        }
    }
}

/// Map a terminal transcript into a `Document`.
///
/// `Document.text` is the service transcript verbatim. Tag offsets are
/// computed against per-rule pseudo-texts reconstructed by joining fragment
/// texts with single spaces — they are never validated against
/// `Document.text`, so a service that joins fragments differently drifts the
/// offsets. That behavior is intentional and pinned by tests.
///
/// Tags are concatenated in fixed category order: speaker, timestamp, topic,
/// topic_summary, sentiments, chapter, entities. Rules are independent and
/// pure; absent sections contribute no tags.
pub fn document(transcript: &Transcript, options: &MapOptions) -> Result<Document, Error> {
    let text = transcript.text.clone().ok_or(Error::MissingText)?;

    let mut tags = Vec::new();

    if options.speaker_detection
        && let Some(utterances) = &transcript.utterances
    {
        tags.extend(speaker_tags(utterances));
    }
    if let Some(source) = TimestampSource::select(transcript, options) {
        tags.extend(timestamp_tags(source));
    }
    if let Some(topics) = &transcript.iab_categories_result {
        tags.extend(topic_tags(topics));
        tags.extend(topic_summary_tags(topics));
    }
    if let Some(sentiments) = &transcript.sentiment_analysis_results {
        tags.extend(sentiment_tags(sentiments));
    }
    if let Some(chapters) = &transcript.chapters {
        tags.extend(chapter_tags(chapters));
    }
    if let Some(entities) = &transcript.entities {
        tags.extend(entity_tags(entities));
    }

    Ok(Document { text, tags })
}

// ── Offset reconstruction ─────────────────────────────────────────────────────

/// Running offset into a pseudo-text built by joining fragments with single
/// spaces. Each rule owns its own cursor; cursors are never shared.
struct Cursor(usize);

impl Cursor {
    fn new() -> Self {
        Self(0)
    }

    /// Span for the next fragment, then advance past it plus one reserved
    /// separator byte. Empty fragments yield a zero-width span and still
    /// reserve the separator.
    fn claim(&mut self, len: usize) -> Span {
        let span = Span {
            start: self.0,
            end: self.0 + len,
        };
        self.0 = span.end + 1;
        span
    }
}

// ── Span-anchored rules ───────────────────────────────────────────────────────

fn speaker_tags(utterances: &[Utterance]) -> Vec<Tag> {
    let mut cursor = Cursor::new();

    utterances
        .iter()
        .map(|utterance| Tag {
            kind: TagKind::Speaker,
            name: Some(utterance.speaker.clone()),
            value: None,
            span: Some(cursor.claim(utterance.text.len())),
        })
        .collect()
}

/// The service exposes word timings in two shapes: a flat top-level list and
/// per-utterance nested lists. The two anchor differently and the divergence
/// is kept, not unified:
///
/// - `FlatList`: one continuous cursor across the whole response; tags are
///   named by word text and carry `{start_time, end_time}`.
/// - `NestedInUtterances`: the cursor restarts at 0 for each utterance's word
///   list; tags are named by the utterance speaker and carry no value.
pub enum TimestampSource<'a> {
    FlatList(&'a [Word]),
    NestedInUtterances(&'a [Utterance]),
}

impl<'a> TimestampSource<'a> {
    /// The flat list wins when both shapes are present; the nested variant is
    /// speaker-named, so it follows the speaker-detection gate.
    fn select(transcript: &'a Transcript, options: &MapOptions) -> Option<Self> {
        if let Some(words) = &transcript.words {
            return Some(Self::FlatList(words));
        }
        match &transcript.utterances {
            Some(utterances) if options.speaker_detection => {
                Some(Self::NestedInUtterances(utterances))
            }
            _ => None,
        }
    }
}

fn timestamp_tags(source: TimestampSource<'_>) -> Vec<Tag> {
    match source {
        TimestampSource::FlatList(words) => {
            let mut cursor = Cursor::new();

            words
                .iter()
                .map(|word| Tag {
                    kind: TagKind::Timestamp,
                    name: Some(word.text.clone()),
                    value: Some(serde_json::json!({
                        "start_time": word.start,
                        "end_time": word.end,
                    })),
                    span: Some(cursor.claim(word.text.len())),
                })
                .collect()
        }
        TimestampSource::NestedInUtterances(utterances) => {
            let mut tags = Vec::new();

            for utterance in utterances {
                let mut cursor = Cursor::new();
                for word in &utterance.words {
                    tags.push(Tag {
                        kind: TagKind::Timestamp,
                        name: Some(utterance.speaker.clone()),
                        value: None,
                        span: Some(cursor.claim(word.text.len())),
                    });
                }
            }

            tags
        }
    }
}

fn topic_tags(topics: &TopicCategories) -> Vec<Tag> {
    let mut cursor = Cursor::new();
    let mut tags = Vec::new();

    for fragment in &topics.results {
        let span = cursor.claim(fragment.text.len());
        for label in &fragment.labels {
            tags.push(Tag {
                kind: TagKind::Topic,
                name: Some(label.label.clone()),
                value: Some(serde_json::json!({
                    "span_text": fragment.text,
                    "relevance": label.relevance,
                })),
                span: Some(span),
            });
        }
    }

    tags
}

fn sentiment_tags(sentiments: &[SentimentResult]) -> Vec<Tag> {
    let mut cursor = Cursor::new();

    sentiments
        .iter()
        .map(|sentiment| Tag {
            kind: TagKind::Sentiments,
            name: Some(sentiment.sentiment.to_string()),
            value: Some(serde_json::json!({
                "span_text": sentiment.text,
                "confidence": sentiment.confidence,
            })),
            span: Some(cursor.claim(sentiment.text.len())),
        })
        .collect()
}

// ── Unanchored rules ──────────────────────────────────────────────────────────

fn topic_summary_tags(topics: &TopicCategories) -> Vec<Tag> {
    topics
        .summary
        .iter()
        .map(|(topic, relevance)| Tag {
            kind: TagKind::TopicSummary,
            name: Some(topic.clone()),
            value: Some(serde_json::json!({ "relevance": relevance })),
            span: None,
        })
        .collect()
}

fn chapter_tags(chapters: &[Chapter]) -> Vec<Tag> {
    chapters
        .iter()
        .enumerate()
        .map(|(ix, chapter)| Tag {
            kind: TagKind::Chapter,
            name: Some(ix.to_string()),
            value: Some(serde_json::json!({
                "summary": chapter.summary,
                "headline": chapter.headline,
                "gist": chapter.gist,
                "start_time": chapter.start,
                "end_time": chapter.end,
            })),
            span: None,
        })
        .collect()
}

fn entity_tags(entities: &[Entity]) -> Vec<Tag> {
    entities
        .iter()
        .map(|entity| Tag {
            kind: TagKind::Entities,
            name: Some(entity.entity_type.clone()),
            value: Some(serde_json::json!({ "value": entity.text })),
            span: None,
        })
        .collect()
}
