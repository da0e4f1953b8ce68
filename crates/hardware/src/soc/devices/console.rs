//! Console output device.
//!
//! Receives bytes from the `write` syscall. Output is staged in a transmit
//! buffer and flushed to stdout on newline, when the buffer grows large, or
//! when the run halts. A capturing console keeps everything in memory instead,
//! which is how tests observe guest output.

use std::io::{self, Write};

use tracing::warn;

/// Threshold for flushing the transmit buffer to stdout (4 KiB).
const TX_BUFFER_FLUSH_THRESHOLD: usize = 4096;

/// Where console bytes end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sink {
    Stdout,
    Capture,
}

/// Console output device.
#[derive(Debug)]
pub struct Console {
    sink: Sink,
    tx: Vec<u8>,
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    /// A console that forwards to the host's stdout.
    pub const fn stdout() -> Self {
        Self {
            sink: Sink::Stdout,
            tx: Vec::new(),
        }
    }

    /// A console that keeps every byte for later inspection.
    pub const fn capture() -> Self {
        Self {
            sink: Sink::Capture,
            tx: Vec::new(),
        }
    }

    /// Queues `bytes` for output.
    pub fn write(&mut self, bytes: &[u8]) {
        self.tx.extend_from_slice(bytes);
        if self.sink == Sink::Stdout
            && (bytes.contains(&b'\n') || self.tx.len() >= TX_BUFFER_FLUSH_THRESHOLD)
        {
            self.flush();
        }
    }

    /// Pushes pending stdout output to the host. A capturing console keeps its bytes.
    pub fn flush(&mut self) {
        if self.sink != Sink::Stdout || self.tx.is_empty() {
            return;
        }
        let mut out = io::stdout().lock();
        if let Err(err) = out.write_all(&self.tx).and_then(|()| out.flush()) {
            warn!(%err, "console write to stdout failed");
        }
        self.tx.clear();
    }

    /// Bytes captured so far (always empty for a stdout console after a flush).
    pub fn captured(&self) -> &[u8] {
        &self.tx
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        self.flush();
    }
}
