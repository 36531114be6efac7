//! Server setup and per-request handling.
//!
//! [`Server`] wires a [`Handler`], an [`EncoderRegistry`] and optional shared
//! state into an [`App`], which every connection uses to turn a decoded
//! [`Request`] into a [`Response`].

pub mod handler;
pub mod listener;

use std::sync::Arc;

use tracing::{error, info};

use crate::config::Config;
use crate::context::{Context, UserState};
use crate::encoding::EncoderRegistry;
use crate::http::params::Params;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::sink::BufferedResponse;

pub use handler::Handler;

/// Everything a connection needs to answer requests. Read-only once built.
pub struct App {
    registry: Arc<EncoderRegistry>,
    user: Option<UserState>,
    handler: Arc<dyn Handler>,
}

impl App {
    pub fn new(
        handler: Arc<dyn Handler>,
        registry: Arc<EncoderRegistry>,
        user: Option<UserState>,
    ) -> Self {
        Self {
            registry,
            user,
            handler,
        }
    }

    /// Runs the handler for `request` against a fresh [`Context`].
    ///
    /// Errors from the handler or from writing its value are logged. If
    /// nothing was committed yet the client gets a 500; otherwise the partial
    /// response stands.
    pub fn respond(&self, request: &Request) -> Response {
        let params = Params::from_request(request);
        let mut sink = BufferedResponse::new();

        let outcome = {
            let mut ctx = Context::new(request, params, &mut sink, Arc::clone(&self.registry))
                .with_user(self.user.clone());

            match self.handler.call(&mut ctx) {
                Ok(Some(body)) => ctx.write_any(body).map_err(anyhow::Error::from),
                Ok(None) => Ok(()),
                Err(e) => Err(e),
            }
        };

        if let Err(e) = outcome {
            error!(
                method = request.method.as_str(),
                path = %request.path,
                error = %e,
                "Handler failed"
            );
            if !sink.is_committed() {
                return Response::internal_error();
            }
        }

        let mut response = sink.into_response();
        if request.method == Method::HEAD {
            response.body.clear();
        }

        info!(
            method = request.method.as_str(),
            path = %request.path,
            status = response.status.as_u16(),
            "Request handled"
        );
        response
    }
}

/// HTTP server running a single handler.
pub struct Server {
    config: Config,
    registry: EncoderRegistry,
    user: Option<UserState>,
    handler: Arc<dyn Handler>,
}

impl Server {
    /// A server with the default JSON/YAML encoders and no shared state.
    pub fn new(config: Config, handler: impl Handler) -> Self {
        Self {
            config,
            registry: EncoderRegistry::with_defaults(),
            user: None,
            handler: Arc::new(handler),
        }
    }

    pub fn with_encoders(mut self, registry: EncoderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// State exposed to every handler through [`Context::user`].
    pub fn with_user(mut self, user: UserState) -> Self {
        self.user = Some(user);
        self
    }

    pub fn app(&self) -> App {
        App::new(
            Arc::clone(&self.handler),
            Arc::new(self.registry.clone()),
            self.user.clone(),
        )
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = Arc::new(self.app());
        listener::run(&self.config.server.listen_addr, app).await
    }
}
