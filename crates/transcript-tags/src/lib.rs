mod mapper;
mod types;

pub use mapper::{Error, MapOptions, TimestampSource, document};
pub use types::{Document, Span, Tag, TagKind};
