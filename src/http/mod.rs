//! HTTP protocol implementation.
//!
//! A small HTTP/1.1 server with keep-alive support, plus the request and
//! response types handlers work with.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection request/response state machine
//! - **`parser`**: parses incoming HTTP requests from byte buffers
//! - **`request`**: decoded request representation
//! - **`headers`**: case-insensitive header collection
//! - **`params`**: query string and form body aggregation
//! - **`response`**: status codes and the final response value
//! - **`sink`**: the write side a handler's `Context` talks to
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: media type lookup by file extension
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Build Context, run handler, write value
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Close → Closed
//! ```

pub mod connection;
pub mod headers;
pub mod mime;
pub mod params;
pub mod parser;
pub mod request;
pub mod response;
pub mod sink;
pub mod writer;
