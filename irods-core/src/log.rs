//! Run events emitted by the transcoder. The caller picks where they go:
//! buffered in memory and flushed afterwards, or straight to `tracing`.

use crate::stats::Stats;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunEvent {
    /// The first input line, which is never transcoded.
    Header(String),
    /// Input exhausted without error.
    Finished(Stats),
}

pub trait RunLog {
    fn record(&mut self, event: RunEvent);
}

fn emit(event: &RunEvent) {
    match event {
        RunEvent::Header(line) => info!(header = %line, "input header"),
        RunEvent::Finished(stats) => {
            info!("Number of lines read {}", stats.lines_read);
            info!("Number of lines written {}", stats.lines_written);
        }
    }
}

/// Forwards every event to `tracing` as it happens.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl RunLog for TracingLog {
    fn record(&mut self, event: RunEvent) {
        emit(&event);
    }
}

/// Keeps events in arrival order until the caller flushes them.
#[derive(Clone, Debug, Default)]
pub struct MemoryLog {
    events: Vec<RunEvent>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RunEvent] {
        &self.events
    }

    pub fn header(&self) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            RunEvent::Header(line) => Some(line.as_str()),
            _ => None,
        })
    }

    /// Counters from the last completed run, if any.
    pub fn stats(&self) -> Option<Stats> {
        self.events.iter().rev().find_map(|e| match e {
            RunEvent::Finished(stats) => Some(*stats),
            _ => None,
        })
    }

    /// Emit buffered events to `tracing` and clear the buffer.
    pub fn flush(&mut self) {
        for event in self.events.drain(..) {
            emit(&event);
        }
    }
}

impl RunLog for MemoryLog {
    fn record(&mut self, event: RunEvent) {
        self.events.push(event);
    }
}
