use std::path::Path;

use irods_core::error::Result;
use irods_core::{MemoryLog, TranscodeOptions, transcode};
use tracing::info;

/// Run one conversion. Run events are buffered and flushed once the run
/// ends, whether or not it succeeded.
pub fn handle_format(
    input: &Path,
    output: &Path,
    groups: &Path,
    opts: &TranscodeOptions,
) -> Result<()> {
    info!("Start file processing");
    let mut log = MemoryLog::new();
    let res = transcode(input, output, groups, opts, &mut log);
    log.flush();
    info!("End file processing");
    res
}
