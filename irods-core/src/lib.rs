#![forbid(unsafe_code)]

pub mod error;
pub mod group;
pub mod log;
pub mod project;
pub mod record;
pub mod stats;
pub mod transcode;

pub mod util {
    pub mod line;
    pub mod path;
}

// Re-exports: stable API surface
pub use group::GroupTable;
pub use log::{MemoryLog, RunEvent, RunLog, TracingLog};
pub use project::derive_identifier;
pub use record::Fill;
pub use stats::Stats;
pub use transcode::{TranscodeOptions, transcode, transcode_stream};
