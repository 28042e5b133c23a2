/// Line counters for one conversion run. `lines_read` includes the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub lines_read: u64,
    pub lines_written: u64,
}
