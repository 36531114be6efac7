#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use trellis::context::Context;
use trellis::encoding::EncoderRegistry;
use trellis::http::headers::Headers;
use trellis::http::params::Params;
use trellis::http::request::{Method, Request, RequestBuilder};
use trellis::http::response::StatusCode;
use trellis::http::sink::{BufferedResponse, ResponseSink};

pub fn get(path: &str) -> Request {
    RequestBuilder::new()
        .method(Method::GET)
        .path(path)
        .build()
        .unwrap()
}

/// Runs `f` against a fresh context over a buffered sink and hands the sink
/// back once the context is gone.
pub fn with_context<R>(
    registry: EncoderRegistry,
    f: impl FnOnce(&mut Context<'_>) -> R,
) -> (R, BufferedResponse) {
    let request = get("/");
    let mut sink = BufferedResponse::new();
    let out = {
        let mut ctx = Context::new(&request, Params::new(), &mut sink, Arc::new(registry));
        f(&mut ctx)
    };
    (out, sink)
}

/// A sink whose client has gone away: every write fails.
#[derive(Default)]
pub struct DisconnectedSink {
    pub headers: Headers,
    pub status: Option<StatusCode>,
    pub write_attempts: usize,
}

impl ResponseSink for DisconnectedSink {
    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status.get_or_insert(status);
    }

    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.write_attempts += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "client disconnected"))
    }
}

pub fn with_disconnected_context<R>(
    registry: EncoderRegistry,
    f: impl FnOnce(&mut Context<'_>) -> R,
) -> (R, DisconnectedSink) {
    let request = get("/");
    let mut sink = DisconnectedSink::default();
    let out = {
        let mut ctx = Context::new(&request, Params::new(), &mut sink, Arc::new(registry));
        f(&mut ctx)
    };
    (out, sink)
}
