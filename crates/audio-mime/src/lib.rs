/// Media types accepted for transcription, as advertised in error messages.
pub const SUPPORTED_MIME_TYPES: &[&str] = &[
    "audio/mp3",
    "audio/wav",
    "video/mp4",
    "audio/mp4",
    "audio/webm",
    "video/webm",
];

/// File extension for a supported media type, used to suffix blob object
/// keys. `None` means the type is outside the allow-list; this doubles as
/// the mime validation gate.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim();
    match essence {
        "audio/mp3" | "audio/mpeg" => Some("mp3"),
        "audio/wav" | "audio/wave" | "audio/x-wav" => Some("wav"),
        "video/mp4" | "audio/mp4" => Some("mp4"),
        "audio/webm" | "video/webm" => Some("webm"),
        _ => None,
    }
}
