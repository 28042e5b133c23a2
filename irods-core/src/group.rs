//! Project/team name to numeric group id, parsed from a `getent group` style
//! listing (`name:password:gid:members`).

use crate::error::{ReportError, Result};
use crate::util::line::next_line;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Group id emitted when a project has no entry in the table.
pub const UNKNOWN_GROUP: &[u8] = b"xx";

/// Names and ids are kept as raw bytes, like the rest of the pipeline.
#[derive(Clone, Debug, Default)]
pub struct GroupTable {
    groups: HashMap<Vec<u8>, Vec<u8>>,
}

impl GroupTable {
    /// Load the table from a file. Any open or read failure is reported as
    /// `ReportError::GroupTable` carrying `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let wrap = |source: std::io::Error| ReportError::GroupTable {
            path: path.to_path_buf(),
            source,
        };
        let f = File::open(path).map_err(wrap)?;
        Self::from_reader(BufReader::new(f)).map_err(wrap)
    }

    /// Build the table from any line source. Rows with two or fewer
    /// `:`-separated fields are skipped; a later row for the same name
    /// replaces an earlier one.
    pub fn from_reader<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut groups = HashMap::new();
        let mut buf = Vec::new();
        while let Some(row) = next_line(&mut reader, &mut buf)? {
            if let Some((name, gid)) = parse_row(row) {
                groups.insert(name.to_vec(), gid.to_vec());
            }
        }
        Ok(Self { groups })
    }

    pub fn get(&self, name: &[u8]) -> Option<&[u8]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Group id for `name`, or [`UNKNOWN_GROUP`] when absent.
    pub fn resolve(&self, name: &[u8]) -> &[u8] {
        self.get(name).unwrap_or(UNKNOWN_GROUP)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K: Into<Vec<u8>>, V: Into<Vec<u8>>> FromIterator<(K, V)> for GroupTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            groups: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn parse_row(row: &[u8]) -> Option<(&[u8], &[u8])> {
    let parts: Vec<&[u8]> = row.split(|&b| b == b':').collect();
    if parts.len() > 2 {
        Some((parts[0], parts[2]))
    } else {
        None
    }
}
