use std::io;

use super::Encoder;
use crate::error::EncodeError;

/// `application/yaml` encoder backed by `serde_yaml`.
pub struct YamlEncoder<'w> {
    writer: &'w mut dyn io::Write,
}

impl<'w> YamlEncoder<'w> {
    pub fn new(writer: &'w mut dyn io::Write) -> Self {
        Self { writer }
    }
}

impl Encoder for YamlEncoder<'_> {
    fn encode(&mut self, value: &serde_json::Value) -> Result<(), EncodeError> {
        let mut writer = CaptureIo {
            inner: &mut *self.writer,
            error: None,
        };

        // serde_yaml wraps writer failures in its own error type.
        serde_yaml::to_writer(&mut writer, value).map_err(|e| -> EncodeError {
            match writer.error.take() {
                Some(io) => Box::new(io),
                None => Box::new(e),
            }
        })
    }
}

/// Passes writes through and keeps the first I/O error seen.
struct CaptureIo<'a> {
    inner: &'a mut dyn io::Write,
    error: Option<io::Error>,
}

impl CaptureIo<'_> {
    fn capture<T>(&mut self, result: io::Result<T>) -> io::Result<T> {
        result.map_err(|e| {
            if self.error.is_none() && e.kind() != io::ErrorKind::Interrupted {
                self.error = Some(io::Error::new(e.kind(), e.to_string()));
            }
            e
        })
    }
}

impl io::Write for CaptureIo<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf);
        self.capture(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.inner.flush();
        self.capture(result)
    }
}
