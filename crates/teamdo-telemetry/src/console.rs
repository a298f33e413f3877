//! Browser console sink for the fmt layer.

use std::io;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Produces one buffered writer per log record.
pub(crate) struct MakeConsoleWriter;

/// Buffers a formatted record and forwards it to `console.log` on flush or drop.
pub(crate) struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buffer: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        self.buffer.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}
