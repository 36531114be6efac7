use trellis::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::OK.as_u16(), 200);
    assert_eq!(StatusCode::FOUND.as_u16(), 302);
    assert_eq!(StatusCode::NOT_MODIFIED.as_u16(), 304);
    assert_eq!(StatusCode::UNAUTHORIZED.as_u16(), 401);
    assert_eq!(StatusCode::FORBIDDEN.as_u16(), 403);
    assert_eq!(StatusCode::NOT_FOUND.as_u16(), 404);
    assert_eq!(StatusCode::NOT_ACCEPTABLE.as_u16(), 406);
    assert_eq!(StatusCode::from(418).as_u16(), 418);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::OK.reason_phrase(), "OK");
    assert_eq!(StatusCode::FOUND.reason_phrase(), "Found");
    assert_eq!(StatusCode::NOT_ACCEPTABLE.reason_phrase(), "Not Acceptable");
    assert_eq!(
        StatusCode::INTERNAL_SERVER_ERROR.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(StatusCode(599).reason_phrase(), "");
    assert_eq!(StatusCode::NOT_FOUND.to_string(), "404 Not Found");
}

#[test]
fn test_status_code_classes() {
    assert!(StatusCode::FOUND.is_redirection());
    assert!(!StatusCode::OK.is_redirection());
    assert!(StatusCode::NOT_MODIFIED.forbids_body());
    assert!(StatusCode::NO_CONTENT.forbids_body());
    assert!(!StatusCode::NOT_FOUND.forbids_body());
}

#[test]
fn test_response_builder_with_headers() {
    let response = ResponseBuilder::new(StatusCode::OK)
        .header("Content-Type", "text/plain")
        .header("X-Custom", "value")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
    assert_eq!(response.headers.get("X-Custom").unwrap(), "value");
    assert_eq!(response.body, b"test".to_vec());
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::OK).body(body.clone()).build();

    assert_eq!(
        response.headers.get("content-length").unwrap(),
        body.len().to_string()
    );
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::OK)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Length").unwrap(), "999");
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_response_helpers() {
    let ok = Response::ok(b"test content".to_vec());
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.body, b"test content".to_vec());

    let missing = Response::not_found();
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body, b"404 Not Found".to_vec());

    let failed = Response::internal_error();
    assert_eq!(failed.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(failed.body, b"500 Internal Server Error".to_vec());

    let bad = Response::bad_request();
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad.headers.get("Connection"), Some("close"));
}
