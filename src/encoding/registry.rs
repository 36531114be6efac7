use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use super::{Encoder, EncoderFactory, JsonEncoder, YamlEncoder};

/// Maps an exact `Content-Type` value to the factory for its encoder.
///
/// Built and populated at startup, then shared read-only as
/// `Arc<EncoderRegistry>` by every connection. Lookups are exact string
/// matches: `application/json` does not match
/// `application/json; charset=utf-8`.
#[derive(Clone, Default)]
pub struct EncoderRegistry {
    encoders: HashMap<String, EncoderFactory>,
}

impl EncoderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with JSON and YAML encoders.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("application/json", |w| Box::new(JsonEncoder::new(w)));
        registry.register("application/yaml", |w| Box::new(YamlEncoder::new(w)));
        registry.register("application/x-yaml", |w| Box::new(YamlEncoder::new(w)));
        registry
    }

    /// Adds or replaces the encoder for `content_type`.
    pub fn register<F>(&mut self, content_type: impl Into<String>, factory: F)
    where
        F: for<'w> Fn(&'w mut dyn io::Write) -> Box<dyn Encoder + 'w> + Send + Sync + 'static,
    {
        self.register_factory(content_type, Arc::new(factory));
    }

    /// Adds or replaces the encoder for `content_type` with a shared factory.
    pub fn register_factory(&mut self, content_type: impl Into<String>, factory: EncoderFactory) {
        let content_type = content_type.into();
        if self.encoders.insert(content_type.clone(), factory).is_some() {
            tracing::debug!(content_type = %content_type, "Replaced encoder");
        }
    }

    /// The factory registered for exactly `content_type`.
    pub fn lookup(&self, content_type: &str) -> Option<EncoderFactory> {
        self.encoders.get(content_type).cloned()
    }

    pub fn contains(&self, content_type: &str) -> bool {
        self.encoders.contains_key(content_type)
    }

    /// Registered content types, in no particular order.
    pub fn content_types(&self) -> impl Iterator<Item = &str> {
        self.encoders.keys().map(String::as_str)
    }
}

impl fmt::Debug for EncoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderRegistry")
            .field("content_types", &self.encoders.keys().collect::<Vec<_>>())
            .finish()
    }
}
