/// Join a collection and a data object name into one slash path, then clean
/// it lexically: empty and `.` segments dropped, `..` folded into its parent
/// (never above a leading `/`), trailing separator removed.
///
/// Works on raw bytes; catalog names need not be UTF-8. Empty parts are
/// ignored and if both are empty the result is empty.
pub fn join_clean(dir: &[u8], name: &[u8]) -> Vec<u8> {
    let joined = match (dir.is_empty(), name.is_empty()) {
        (true, true) => return Vec::new(),
        (false, true) => dir.to_vec(),
        (true, false) => name.to_vec(),
        (false, false) => [dir, &b"/"[..], name].concat(),
    };
    clean(&joined)
}

/// Lexical clean of a slash path. An empty result becomes `.`.
pub fn clean(path: &[u8]) -> Vec<u8> {
    let rooted = path.first() == Some(&b'/');
    let mut out: Vec<&[u8]> = Vec::new();
    for seg in path.split(|&b| b == b'/') {
        match seg {
            b"" | b"." => {}
            b".." => match out.last() {
                Some(&last) if last != b".." => {
                    out.pop();
                }
                _ if rooted => {}
                _ => out.push(b".."),
            },
            s => out.push(s),
        }
    }

    let body = out.join(&b'/');
    match (rooted, body.is_empty()) {
        (true, _) => [&b"/"[..], &body[..]].concat(),
        (false, true) => b".".to_vec(),
        (false, false) => body,
    }
}
