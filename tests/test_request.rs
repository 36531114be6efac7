use trellis::http::request::{Method, Request, RequestBuilder};

fn get(path: &str) -> RequestBuilder {
    RequestBuilder::new().method(Method::GET).path(path)
}

#[test]
fn test_request_header_retrieval() {
    let req = get("/")
        .header("Host", "example.com")
        .header("Content-Type", "application/json")
        .build()
        .unwrap();

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let req = get("/api").header("Content-Length", "42").build().unwrap();
    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing_or_invalid() {
    let missing = get("/").build().unwrap();
    let invalid = get("/").header("Content-Length", "not-a-number").build().unwrap();

    assert_eq!(missing.content_length(), 0);
    assert_eq!(invalid.content_length(), 0);
}

#[test]
fn test_request_keep_alive_http11_default() {
    let req = get("/").build().unwrap();
    assert!(req.keep_alive());
}

#[test]
fn test_request_keep_alive_close() {
    let req = get("/").header("Connection", "close").build().unwrap();
    assert!(!req.keep_alive());
}

#[test]
fn test_request_keep_alive_case_insensitive() {
    let req = get("/").header("connection", "Keep-Alive").build().unwrap();
    assert!(req.keep_alive());
}

#[test]
fn test_request_keep_alive_http10() {
    let plain = get("/").version("HTTP/1.0").build().unwrap();
    let explicit = get("/")
        .version("HTTP/1.0")
        .header("Connection", "keep-alive")
        .build()
        .unwrap();

    assert!(!plain.keep_alive());
    assert!(explicit.keep_alive());
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("INVALID"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
    assert_eq!(Method::PATCH.as_str(), "PATCH");
}

#[test]
fn test_request_path_and_query() {
    let req = get("/search?q=rust&page=2").build().unwrap();

    assert_eq!(req.path_only(), "/search");
    assert_eq!(req.query(), Some("q=rust&page=2"));

    let bare = get("/search").build().unwrap();
    assert_eq!(bare.path_only(), "/search");
    assert_eq!(bare.query(), None);
}

#[test]
fn test_request_builder_defaults_and_errors() {
    let req: Request = get("/").body(b"payload".to_vec()).build().unwrap();
    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.raw_body(), b"payload");

    assert_eq!(RequestBuilder::new().path("/").build().unwrap_err(), "method missing");
    assert_eq!(
        RequestBuilder::new().method(Method::GET).build().unwrap_err(),
        "path missing"
    );
}
