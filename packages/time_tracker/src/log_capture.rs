//! Captures formatted `tracing` output of a closure for assertions in tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::Level;

use crate::ERR_POISONED_LOCK;

#[derive(Clone, Debug, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect(ERR_POISONED_LOCK).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `body` with a thread-local subscriber that formats every event up to `TRACE`
/// into a buffer, returning the result of `body` and the captured text.
pub(crate) fn capture_logs<R>(body: impl FnOnce() -> R) -> (R, String) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, body);

    let bytes = buffer.0.lock().expect(ERR_POISONED_LOCK).clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}
