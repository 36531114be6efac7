use std::io;

use super::Encoder;
use crate::error::EncodeError;

/// `application/json` encoder backed by `serde_json`.
pub struct JsonEncoder<'w> {
    writer: &'w mut dyn io::Write,
}

impl<'w> JsonEncoder<'w> {
    pub fn new(writer: &'w mut dyn io::Write) -> Self {
        Self { writer }
    }
}

impl Encoder for JsonEncoder<'_> {
    fn encode(&mut self, value: &serde_json::Value) -> Result<(), EncodeError> {
        serde_json::to_writer(&mut *self.writer, value).map_err(|e| -> EncodeError {
            if e.is_io() {
                Box::new(io::Error::from(e))
            } else {
                Box::new(e)
            }
        })
    }
}
