mod config;
mod error;
mod pipeline;
mod services;

pub use config::BlockifierConfig;
pub use error::Error;
pub use pipeline::Blockifier;
pub use services::{BlobStore, ServiceError, Transcriber};
