//! Input rows as exported by `iquest` and output rows in mpistat column order.
//!
//! Both sides work on raw bytes: catalog names are not guaranteed to be UTF-8,
//! and the path column is the base64 of whatever bytes the catalog holds.

use crate::error::{ReportError, Result};
use crate::util::path::join_clean;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use memchr::memmem;
use std::io::Write;

/// Number of tab separated columns in every emitted row.
pub const OUTPUT_COLUMNS: usize = 11;

/// One data object: `collection<D>name<D>create_time<D>size`. Extra fields
/// are ignored; timestamps and sizes are passed through verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputRecord<'a> {
    pub collection: &'a [u8],
    pub filename: &'a [u8],
    pub create_time: &'a [u8],
    pub size: &'a [u8],
}

impl<'a> InputRecord<'a> {
    pub fn parse(line: &'a [u8], delimiter: &[u8]) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(ReportError::EmptyDelimiter);
        }

        let mut fields: Vec<&'a [u8]> = Vec::with_capacity(4);
        let mut start = 0;
        for pos in memmem::find_iter(line, delimiter) {
            fields.push(&line[start..pos]);
            start = pos + delimiter.len();
            if fields.len() == 4 {
                break;
            }
        }
        fields.push(&line[start..]);

        match fields[..] {
            [collection, filename, create_time, size, ..] => Ok(Self {
                collection,
                filename,
                create_time,
                size,
            }),
            _ => Err(ReportError::Format {
                line: String::from_utf8_lossy(line).into_owned(),
            }),
        }
    }

    /// Collection and object name as one cleaned slash path.
    pub fn full_path(&self) -> Vec<u8> {
        join_clean(self.collection, self.filename)
    }
}

/// Value written into the columns this tool has no data for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fill {
    #[default]
    Empty,
    Zero,
}

impl Fill {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Fill::Empty => b"",
            Fill::Zero => b"0",
        }
    }
}

/// Columns, in order: path (base64), size, uid, gid, atime, mtime, ctime,
/// mode, inode, hardlinks, device. Only path, size, gid and ctime carry data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputRecord<'a> {
    pub b64_path: String,
    pub size: &'a [u8],
    pub group: &'a [u8],
    pub ctime: &'a [u8],
    pub fill: Fill,
}

impl<'a> OutputRecord<'a> {
    pub fn new(input: &InputRecord<'a>, group: &'a [u8], fill: Fill) -> Self {
        Self {
            b64_path: STANDARD.encode(input.full_path()),
            size: input.size,
            group,
            ctime: input.create_time,
            fill,
        }
    }

    pub fn columns(&self) -> [&[u8]; OUTPUT_COLUMNS] {
        let f = self.fill.as_bytes();
        [
            self.b64_path.as_bytes(),
            self.size,
            f,
            self.group,
            f,
            f,
            self.ctime,
            f,
            f,
            f,
            f,
        ]
    }

    /// The row without its line terminator.
    pub fn to_line(&self) -> Vec<u8> {
        self.columns().join(&b'\t')
    }

    /// Write the row, tab separated and newline terminated.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut line = self.to_line();
        line.push(b'\n');
        out.write_all(&line)
    }
}
