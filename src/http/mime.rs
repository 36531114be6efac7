//! File extension to media type lookup.

/// Resolves a file extension (including its leading dot, e.g. `".json"`) to a
/// media type.
///
/// Matching is case-insensitive. Unknown extensions resolve to the empty
/// string rather than a generic fallback so callers can tell a miss apart.
///
/// ```
/// # use trellis::http::mime::type_by_extension;
/// assert_eq!(type_by_extension(".json"), "application/json");
/// assert_eq!(type_by_extension(".HTML"), "text/html; charset=utf-8");
/// assert_eq!(type_by_extension(".nope"), "");
/// assert_eq!(type_by_extension("json"), "");
/// ```
pub fn type_by_extension(ext: &str) -> &'static str {
    let Some(ext) = ext.strip_prefix('.') else {
        return "";
    };

    match ext.to_ascii_lowercase().as_str() {
        // Text
        "txt" | "text" => "text/plain; charset=utf-8",
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "csv" => "text/csv; charset=utf-8",
        "md" => "text/markdown; charset=utf-8",
        "xml" => "text/xml; charset=utf-8",

        // Structured data
        "json" | "map" => "application/json",
        "yaml" | "yml" => "application/yaml",
        "rss" => "application/rss+xml",
        "atom" => "application/atom+xml",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Archives and documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "wasm" => "application/wasm",

        // Media
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "webm" => "video/webm",

        _ => "",
    }
}
