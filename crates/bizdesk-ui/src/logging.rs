//! Routes `tracing` events to the browser console.

use std::io::{self, Write};

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Buffers one formatted event and hands it to `console.log` when dropped.
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}

pub fn init() {
    // no clock or ANSI colours in the browser
    let layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(ConsoleWriter::default);

    let result = tracing_subscriber::registry()
        .with(EnvFilter::new("info"))
        .with(layer)
        .try_init();

    if result.is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}
