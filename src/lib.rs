//! Trellis - a small HTTP application framework
//!
//! Every request gets a [`Context`](context::Context): the decoded request,
//! its aggregated parameters, and a response façade that can write any
//! handler value, picking an encoder from the response content type.

pub mod config;
pub mod context;
pub mod encoding;
pub mod error;
pub mod http;
pub mod server;
