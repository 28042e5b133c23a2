use std::io::BufRead;

/// Read one line into `buf` (cleared first) and return it without its
/// terminator: a trailing `\n`, then a trailing `\r`, are removed even on a
/// final unterminated line. `None` at end of input.
pub fn next_line<'b, R: BufRead>(
    reader: &mut R,
    buf: &'b mut Vec<u8>,
) -> std::io::Result<Option<&'b [u8]>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let mut line = &buf[..];
    if let Some(rest) = line.strip_suffix(b"\n") {
        line = rest;
    }
    if let Some(rest) = line.strip_suffix(b"\r") {
        line = rest;
    }
    Ok(Some(line))
}
