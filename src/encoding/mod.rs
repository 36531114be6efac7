//! Turning handler values into response bytes.
//!
//! - [`Body`] - the shapes a handler value can take, in dispatch order
//! - [`WriteTo`] - values that serialize themselves into a writer
//! - [`Encoder`] / [`EncoderFactory`] - content-type specific encoders for
//!   structured values
//! - [`EncoderRegistry`] - content type to encoder factory mapping
//!
//! The dispatch itself lives on [`Context::write_any`](crate::context::Context::write_any).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis::encoding::{EncoderRegistry, JsonEncoder};
//!
//! let mut registry = EncoderRegistry::new();
//! registry.register("application/vnd.api+json", |w| Box::new(JsonEncoder::new(w)));
//! let registry = Arc::new(registry);
//!
//! assert!(registry.contains("application/vnd.api+json"));
//! assert!(!registry.contains("application/json"));
//! ```

mod body;
mod json;
mod registry;
mod yaml;

use std::io;
use std::sync::Arc;

pub use body::{Body, WriteTo};
pub use json::JsonEncoder;
pub use registry::EncoderRegistry;
pub use yaml::YamlEncoder;

use crate::error::EncodeError;

/// Serializes structured values into the writer it was built with.
pub trait Encoder {
    fn encode(&mut self, value: &serde_json::Value) -> Result<(), EncodeError>;
}

/// Builds an [`Encoder`] bound to a response body writer.
pub type EncoderFactory =
    Arc<dyn for<'w> Fn(&'w mut dyn io::Write) -> Box<dyn Encoder + 'w> + Send + Sync>;
