use std::io::{Read, Write};

use stagelink_frame::{FrameConfig, FrameReader, FrameWriter};

use crate::codec::Codec;
use crate::computation::Computation;
use crate::config::StageConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{ConfigError, FatalError};

/// Lifecycle of one stage run. Transitions are forward-only:
/// `Running -> ShuttingDown -> Terminated`, no cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    ShuttingDown,
    Terminated,
}

/// Final counter values of an orderly run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames that passed framing and were not shutdown signals.
    pub received: u64,
    /// Output frames successfully sent.
    pub processed: u64,
}

/// One external stage: the state machine tying reading, decoding, computing,
/// encoding, writing, counting, and shutdown together.
///
/// A stage processes one message at a time on a single thread. Output frames
/// appear in the same relative order as the inputs that produced them;
/// dropped messages simply produce no output.
pub struct Stage<C, P> {
    computation: P,
    codec: C,
    diagnostics: Diagnostics,
    frame_config: FrameConfig,
    state: ProcessState,
}

impl<C, P> Stage<C, P>
where
    C: Codec,
    P: Computation<In = C::In, Out = C::Out>,
{
    /// Validate the configuration and build a stage.
    ///
    /// Fails before any channel I/O, naming the first missing component.
    pub fn new(config: StageConfig<C, P>) -> Result<Self, ConfigError> {
        let (computation, codec, name, sink, frame_config) = config.into_parts()?;
        let diagnostics = match sink {
            Some(sink) => Diagnostics::with_sink(&name, sink),
            None => Diagnostics::new(&name),
        };
        Ok(Self {
            computation,
            codec,
            diagnostics,
            frame_config,
            state: ProcessState::Running,
        })
    }

    /// The process-wide diagnostic sink and counters.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Drive the stage until the host engine stops it.
    ///
    /// Pulls frames from `input`, pushes results to `output`, one message at
    /// a time. Ends with `Ok` when the inbound channel closes or a shutdown
    /// signal arrives; ends with `Err` on a fatal framing or I/O failure,
    /// bypassing the orderly shutdown sequence.
    pub fn run<R: Read, W: Write>(
        mut self,
        input: R,
        output: W,
    ) -> Result<RunSummary, FatalError> {
        let mut reader = FrameReader::with_config(input, self.frame_config.clone());
        let mut writer = FrameWriter::with_config(output, self.frame_config.clone());

        self.diagnostics.log("process started");

        while self.state == ProcessState::Running {
            let frame = match reader.next() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    self.diagnostics
                        .log("input closed without shutdown signal; shutting down");
                    self.state = ProcessState::ShuttingDown;
                    break;
                }
                Err(err) => {
                    self.state = ProcessState::Terminated;
                    return Err(FatalError::Inbound(err));
                }
            };

            if self.codec.is_shutdown_signal(&frame) {
                self.diagnostics.log("shutdown signal received; shutting down");
                self.state = ProcessState::ShuttingDown;
                break;
            }

            self.diagnostics.record_received();

            if let Some(outbound) = self.transform(&frame) {
                if let Err(err) = writer.send(&outbound) {
                    self.state = ProcessState::Terminated;
                    return Err(FatalError::Outbound(err));
                }
                self.diagnostics.record_processed();
            }
        }

        self.shutdown(reader, writer)
    }

    /// Decode, compute, and encode one frame.
    ///
    /// Every failure here is per-message and recoverable: log, drop the
    /// message, return `None` so the loop continues without an output frame.
    fn transform(&self, frame: &[u8]) -> Option<Vec<u8>> {
        let ctx = self.diagnostics.context();

        let msg = match self.codec.decode(frame, &ctx) {
            Ok(msg) => msg,
            Err(err) => {
                self.diagnostics.log(format_args!(
                    "dropping frame: {err} (raw: {:?})",
                    String::from_utf8_lossy(frame)
                ));
                return None;
            }
        };

        self.diagnostics
            .log(format_args!("received message id={}", msg.id));

        let result = match self.computation.execute(&msg.data, &ctx) {
            Ok(result) => result,
            Err(err) => {
                self.diagnostics
                    .log(format_args!("dropping message id={}: {err}", msg.id));
                return None;
            }
        };

        let outbound = msg.with_result(result);
        match self.codec.encode(&outbound, &ctx) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                self.diagnostics
                    .log(format_args!("dropping message id={}: {err}", outbound.id));
                None
            }
        }
    }

    /// Orderly shutdown: close the outbound channel first (flushing any
    /// buffered writes), then the inbound channel, log the final counts, and
    /// terminate with a success outcome.
    fn shutdown<R: Read, W: Write>(
        mut self,
        reader: FrameReader<R>,
        mut writer: FrameWriter<W>,
    ) -> Result<RunSummary, FatalError> {
        if let Err(err) = writer.flush() {
            self.state = ProcessState::Terminated;
            return Err(FatalError::Outbound(err));
        }
        drop(writer);
        drop(reader);

        let summary = RunSummary {
            received: self.diagnostics.received(),
            processed: self.diagnostics.processed(),
        };
        self.diagnostics.log(format_args!(
            "received {}, processed {}",
            summary.received, summary.processed
        ));
        self.diagnostics.log("done");
        self.state = ProcessState::Terminated;
        Ok(summary)
    }
}
