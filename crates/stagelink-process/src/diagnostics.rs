use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Fixed tag identifying stage diagnostic lines on the text channel.
const LOG_TAG: &str = "[stagelink]";

/// The process-wide diagnostic sink and counters.
///
/// Emits one tagged line per log event to a text channel (stderr by
/// default), each line prefixed by the tag and the configured process name.
/// The counters are monotonic for the life of the process and are never
/// reset. The loop is single-threaded today; atomics keep the counters
/// safely shareable if computation ever becomes concurrent.
pub struct Diagnostics {
    prefix: String,
    sink: Mutex<Box<dyn Write + Send>>,
    received: AtomicU64,
    processed: AtomicU64,
}

impl Diagnostics {
    /// Create diagnostics logging to stderr.
    pub fn new(name: &str) -> Self {
        Self::with_sink(name, Box::new(std::io::stderr()))
    }

    /// Create diagnostics logging to an explicit sink.
    pub fn with_sink(name: &str, sink: Box<dyn Write + Send>) -> Self {
        Self {
            prefix: format!("{LOG_TAG} {name}: "),
            sink: Mutex::new(sink),
            received: AtomicU64::new(0),
            processed: AtomicU64::new(0),
        }
    }

    /// Write one tagged diagnostic line.
    ///
    /// A failing diagnostic channel never disturbs message processing, so
    /// write errors are swallowed here.
    pub fn log(&self, msg: impl fmt::Display) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}{}", self.prefix, msg);
            let _ = sink.flush();
        }
    }

    /// A borrowed logging capability for codec and computation calls.
    pub fn context(&self) -> Context<'_> {
        Context { diagnostics: self }
    }

    /// Count one frame that passed framing and was not a shutdown signal.
    pub(crate) fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one output frame successfully sent.
    pub(crate) fn record_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Frames received so far.
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    /// Output frames sent so far.
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("prefix", &self.prefix)
            .field("received", &self.received())
            .field("processed", &self.processed())
            .finish_non_exhaustive()
    }
}

/// The only capability handed to codec and computation implementations:
/// diagnostic logging. No channel or counter access.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    diagnostics: &'a Diagnostics,
}

impl Context<'_> {
    /// Write one tagged diagnostic line.
    pub fn log(&self, msg: impl fmt::Display) {
        self.diagnostics.log(msg);
    }
}
