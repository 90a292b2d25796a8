mod request;
mod transcript;

pub use request::TranscriptRequest;
pub use transcript::{
    Chapter, Entity, JobStatus, Sentiment, SentimentResult, TopicCategories, TopicFragment,
    TopicLabel, Transcript, Utterance, Word,
};
