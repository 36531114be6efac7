//! Per-request context.
//!
//! A [`Context`] is built right before a handler runs and dropped right
//! after. It borrows the decoded [`Request`] and exclusively borrows the
//! [`ResponseSink`] for that one request, so it can never outlive or be shared
//! across requests.

use std::any::Any;
use std::io::{self, Read, Write};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::encoding::{Body, EncoderRegistry};
use crate::error::{Result, WriteError};
use crate::http::headers::Headers;
use crate::http::mime;
use crate::http::params::Params;
use crate::http::request::Request;
use crate::http::response::StatusCode;
use crate::http::sink::{BodyWriter, ResponseSink};

/// Shared, read-only state handed to every handler.
pub type UserState = Arc<dyn Any + Send + Sync>;

/// A bidirectional byte channel taken over from an upgraded request.
pub trait Upgraded: Read + Write + Send {}

impl<T: Read + Write + Send> Upgraded for T {}

/// Request and response state for a single handler invocation.
pub struct Context<'a> {
    request: &'a Request,
    params: Params,
    response: &'a mut dyn ResponseSink,
    registry: Arc<EncoderRegistry>,
    user: Option<UserState>,
    connection: Option<Box<dyn Upgraded>>,
}

impl<'a> Context<'a> {
    pub fn new(
        request: &'a Request,
        params: Params,
        response: &'a mut dyn ResponseSink,
        registry: Arc<EncoderRegistry>,
    ) -> Self {
        Self {
            request,
            params,
            response,
            registry,
            user: None,
            connection: None,
        }
    }

    pub fn with_user(mut self, user: Option<UserState>) -> Self {
        self.user = user;
        self
    }

    pub fn with_connection(mut self, connection: Box<dyn Upgraded>) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn request(&self) -> &'a Request {
        self.request
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// First value of the named parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn registry(&self) -> &EncoderRegistry {
        &self.registry
    }

    /// Shared state downcast to `T`, if present and of that type.
    pub fn user<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.user.as_deref().and_then(|u| u.downcast_ref::<T>())
    }

    /// The upgraded connection, present only for upgraded requests.
    pub fn connection_mut(&mut self) -> Option<&mut (dyn Upgraded + 'static)> {
        self.connection.as_deref_mut()
    }

    pub fn take_connection(&mut self) -> Option<Box<dyn Upgraded>> {
        self.connection.take()
    }

    /// Response headers.
    pub fn header(&self) -> &Headers {
        self.response.headers()
    }

    /// Mutable response headers. Changes only reach the client if made before
    /// the status is set or the first byte is written.
    pub fn header_mut(&mut self) -> &mut Headers {
        self.response.headers_mut()
    }

    /// Sets a response header, replacing existing values when `unique`.
    pub fn set_header(&mut self, name: &str, value: &str, unique: bool) {
        let headers = self.response.headers_mut();
        if unique {
            headers.set(name, value);
        } else {
            headers.add(name, value);
        }
    }

    /// Writes raw bytes to the response body.
    pub fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.response.write(data)
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.response.set_status(status);
    }

    /// Ends the response with a plain-text body. Write failures are dropped.
    pub fn abort(&mut self, status: StatusCode, body: &str) {
        self.content_type("txt");
        self.set_status(status);
        if let Err(e) = self.response.write(body.as_bytes()) {
            debug!(status = status.as_u16(), error = %e, "Dropped abort body");
        }
    }

    /// Sends a redirect to `url`. `status` should be a 3xx code; it is not
    /// checked.
    pub fn redirect(&mut self, status: StatusCode, url: &str) {
        self.response.headers_mut().set("Location", url);
        self.abort(status, &format!("Redirecting to: {url}"));
    }

    pub fn not_modified(&mut self) {
        self.set_status(StatusCode::NOT_MODIFIED);
    }

    pub fn not_found(&mut self, message: &str) {
        self.abort(StatusCode::NOT_FOUND, message);
    }

    pub fn not_acceptable(&mut self, message: &str) {
        self.abort(StatusCode::NOT_ACCEPTABLE, message);
    }

    pub fn unauthorized(&mut self, message: &str) {
        self.abort(StatusCode::UNAUTHORIZED, message);
    }

    pub fn forbidden(&mut self, message: &str) {
        self.abort(StatusCode::FORBIDDEN, message);
    }

    /// Sets `Content-Type` from an extension (`"json"`, `".html"`) or a full
    /// media type.
    ///
    /// Input containing `/` is used verbatim. Anything else is looked up as a
    /// file extension. Returns the resolved type; an unknown extension yields
    /// an empty string and leaves the header untouched.
    pub fn content_type(&mut self, ext: &str) -> String {
        let ctype = if ext.contains('/') {
            ext.to_string()
        } else if ext.starts_with('.') {
            mime::type_by_extension(ext).to_string()
        } else {
            mime::type_by_extension(&format!(".{ext}")).to_string()
        };

        if !ctype.is_empty() {
            self.response.headers_mut().set("Content-Type", ctype.as_str());
        }
        ctype
    }

    /// Writes any handler value to the response.
    ///
    /// Strategies are tried in a fixed order, first match wins:
    ///
    /// 1. text is written as its bytes
    /// 2. bytes are written verbatim
    /// 3. a [`WriteTo`](crate::encoding::WriteTo) value writes itself
    /// 4. a stream is copied until exhausted
    /// 5. a structured value goes to the encoder registered for the current
    ///    `Content-Type` (exact match)
    ///
    /// A structured value with no matching encoder fails with
    /// [`WriteError::NoSerializer`] before anything is written. Sink failures
    /// are returned as [`WriteError::Io`].
    pub fn write_any(&mut self, body: impl Into<Body>) -> Result<()> {
        let body = body.into();
        trace!(kind = body.kind(), "Writing handler value");

        match body {
            Body::Text(text) => self.body_writer().write_all(text.as_bytes())?,
            Body::Bytes(bytes) => self.body_writer().write_all(&bytes)?,
            Body::WriteTo(mut value) => {
                value.write_to(&mut self.body_writer())?;
            }
            Body::Stream(mut reader) => {
                io::copy(&mut reader, &mut self.body_writer())?;
            }
            Body::Structured(value) => self.encode_structured(&value)?,
        }
        Ok(())
    }

    fn body_writer(&mut self) -> BodyWriter<'_> {
        BodyWriter::new(&mut *self.response)
    }

    fn encode_structured(&mut self, value: &serde_json::Value) -> Result<()> {
        let content_type = self
            .response
            .headers()
            .get("Content-Type")
            .unwrap_or_default()
            .to_string();

        let Some(factory) = self.registry.lookup(&content_type) else {
            return Err(WriteError::NoSerializer { content_type });
        };

        debug!(content_type = %content_type, "Encoding structured value");
        let mut writer = self.body_writer();
        factory(&mut writer)
            .encode(value)
            .map_err(|source| match source.downcast::<io::Error>() {
                Ok(io) => WriteError::Io(*io),
                Err(source) => WriteError::Encode {
                    content_type,
                    source,
                },
            })
    }
}
