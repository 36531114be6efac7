//! Response sinks.
//!
//! A [`ResponseSink`] is the write side of one request: a mutable header set,
//! a status line that is fixed once, and an append-only body. The server uses
//! [`BufferedResponse`] and hands the finished [`Response`] to the
//! [`ResponseWriter`](crate::http::writer::ResponseWriter).

use std::io;

use tracing::debug;

use crate::http::headers::Headers;
use crate::http::response::{Response, StatusCode};

/// Write side of a single request/response cycle.
pub trait ResponseSink: Send {
    /// Headers that will be sent with the response.
    fn headers(&self) -> &Headers;

    /// Mutable headers. Changes made after the status is committed are not
    /// part of the response.
    fn headers_mut(&mut self) -> &mut Headers;

    /// Commits the status line. Only the first call has an effect.
    fn set_status(&mut self, status: StatusCode);

    /// Appends body bytes, committing `200 OK` if no status was set.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory sink used by the server connection.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    headers: Headers,
    committed: Option<(StatusCode, Headers)>,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    fn commit(&mut self, status: StatusCode) {
        if self.committed.is_none() {
            self.committed = Some((status, self.headers.clone()));
        }
    }

    /// Whether the status line (and with it the header set) is fixed.
    pub fn is_committed(&self) -> bool {
        self.committed.is_some()
    }

    /// The committed status, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.committed.as_ref().map(|(status, _)| *status)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Finalizes the sink into a response.
    ///
    /// An untouched sink yields `200 OK` with the current headers and an empty
    /// body.
    pub fn into_response(self) -> Response {
        let (status, mut headers) = self
            .committed
            .unwrap_or((StatusCode::OK, self.headers));

        if status.forbids_body() {
            headers.remove("Content-Length");
            return Response {
                status,
                headers,
                body: Vec::new(),
            };
        }

        headers.set("Content-Length", self.body.len().to_string());
        Response {
            status,
            headers,
            body: self.body,
        }
    }
}

impl ResponseSink for BufferedResponse {
    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    fn set_status(&mut self, status: StatusCode) {
        if let Some((current, _)) = &self.committed {
            debug!(
                current = current.as_u16(),
                ignored = status.as_u16(),
                "Status already committed"
            );
            return;
        }
        self.commit(status);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.commit(StatusCode::OK);
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Exposes a [`ResponseSink`] body as [`std::io::Write`].
///
/// This is what encoders, self-serializing values and stream copies write to.
pub struct BodyWriter<'s> {
    sink: &'s mut dyn ResponseSink,
}

impl<'s> BodyWriter<'s> {
    pub fn new(sink: &'s mut dyn ResponseSink) -> Self {
        Self { sink }
    }
}

impl io::Write for BodyWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
