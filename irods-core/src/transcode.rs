use crate::error::{ReportError, Result};
use crate::group::GroupTable;
use crate::log::{RunEvent, RunLog};
use crate::project::derive_identifier;
use crate::record::{Fill, InputRecord, OutputRecord};
use crate::stats::Stats;
use crate::util::line::next_line;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Field separator used by the `iquest` export.
pub const DEFAULT_DELIMITER: &str = "???";

/// Collections reported on by default.
pub const DEFAULT_PREFIXES: [&str; 2] = ["/humgen/projects", "/humgen/teams"];

#[derive(Clone, Debug)]
pub struct TranscodeOptions {
    pub delimiter: String,
    /// Raw-line prefixes a record must start with. Empty means no filtering.
    pub prefixes: Vec<String>,
    pub fill: Fill,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            fill: Fill::default(),
        }
    }
}

impl TranscodeOptions {
    /// True when `line` passes the prefix allowlist. The match is against the
    /// whole unsplit line, not the collection field.
    pub fn accepts(&self, line: &[u8]) -> bool {
        self.prefixes.is_empty() || self.prefixes.iter().any(|p| line.starts_with(p.as_bytes()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(ReportError::EmptyDelimiter);
        }
        Ok(())
    }
}

/// Convert the export at `input` into mpistat rows at `output`, resolving
/// group ids through the table at `groups`.
///
/// A malformed line aborts the run; rows already written stay in `output`.
pub fn transcode(
    input: &Path,
    output: &Path,
    groups: &Path,
    opts: &TranscodeOptions,
    log: &mut dyn RunLog,
) -> Result<()> {
    opts.validate()?;
    let table = GroupTable::load(groups)?;

    let infile = File::open(input).map_err(|e| ReportError::io(input, e))?;
    let outfile = File::create(output).map_err(|e| ReportError::io(output, e))?;

    let mut writer = BufWriter::new(outfile);
    transcode_stream(BufReader::new(infile), &mut writer, &table, opts, log)
        .map_err(|e| e.locate(input, output))?;
    writer.flush().map_err(|e| ReportError::io(output, e))
}

/// Stream form of [`transcode`]. I/O failures come back as
/// `ReportError::Read` / `ReportError::Write` since no paths are known here.
///
/// Lines are handled as raw bytes; nothing requires the input to be UTF-8.
pub fn transcode_stream<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    groups: &GroupTable,
    opts: &TranscodeOptions,
    log: &mut dyn RunLog,
) -> Result<()> {
    opts.validate()?;
    let mut stats = Stats::default();
    let mut buf = Vec::new();

    while let Some(line) = next_line(&mut input, &mut buf).map_err(ReportError::Read)? {
        stats.lines_read += 1;
        if stats.lines_read == 1 {
            log.record(RunEvent::Header(String::from_utf8_lossy(line).into_owned()));
            continue;
        }
        if !opts.accepts(line) {
            continue;
        }

        let rec = InputRecord::parse(line, opts.delimiter.as_bytes())?;
        let project = derive_identifier(rec.collection);
        let row = OutputRecord::new(&rec, groups.resolve(project), opts.fill);
        debug!(
            collection = %String::from_utf8_lossy(rec.collection),
            project = %String::from_utf8_lossy(project),
            b64 = %row.b64_path,
            "row"
        );

        row.write_to(output).map_err(ReportError::Write)?;
        stats.lines_written += 1;
    }

    log.record(RunEvent::Finished(stats));
    Ok(())
}
