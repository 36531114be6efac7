use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::server::App;

/// Upper bound on buffered, not yet parsed request bytes.
const MAX_REQUEST_SIZE: usize = 1024 * 1024;

pub struct Connection<S> {
    stream: S,
    buffer: Vec<u8>,
    state: ConnectionState,
    app: Arc<App>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, app: Arc<App>) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            state: ConnectionState::Reading,
            app,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(Some(req)) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    Ok(None) => {
                        self.state = ConnectionState::Closed;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Rejecting malformed request");
                        let writer = ResponseWriter::new(&Response::bad_request());
                        self.state = ConnectionState::Writing(writer, false);
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = self.app.respond(req);
                    let keep_alive = req.keep_alive();

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.drain(..consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            if self.buffer.len() > MAX_REQUEST_SIZE {
                anyhow::bail!("request exceeds {} bytes", MAX_REQUEST_SIZE);
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
