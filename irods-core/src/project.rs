/// Identifier used when a collection sits outside any project or team area.
pub const DEFAULT_PROJECT: &[u8] = b"hgi";

/// Path segments whose successor names the owning project or team.
pub const MARKERS: [&[u8]; 2] = [b"projects", b"teams"];

/// Project or team name owning `collection`: the segment after the first
/// `projects` or `teams` segment that has a successor, else [`DEFAULT_PROJECT`].
pub fn derive_identifier(collection: &[u8]) -> &[u8] {
    let parts: Vec<&[u8]> = collection.split(|&b| b == b'/').collect();
    parts
        .windows(2)
        .find(|w| MARKERS.contains(&w[0]))
        .map(|w| w[1])
        .unwrap_or(DEFAULT_PROJECT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_segment() {
        assert_eq!(derive_identifier(b"/humgen/projects/myproj/run1"), b"myproj");
    }

    #[test]
    fn test_team_segment() {
        assert_eq!(derive_identifier(b"/humgen/teams/teamA/data"), b"teamA");
    }

    #[test]
    fn test_no_marker_defaults() {
        assert_eq!(derive_identifier(b"/humgen/other/x"), b"hgi");
        assert_eq!(derive_identifier(b""), b"hgi");
    }

    #[test]
    fn test_trailing_marker_defaults() {
        assert_eq!(derive_identifier(b"/a/projects"), b"hgi");
        assert_eq!(derive_identifier(b"/a/teams"), b"hgi");
    }

    #[test]
    fn test_first_marker_wins() {
        assert_eq!(derive_identifier(b"/teams/t1/projects/p1"), b"t1");
        assert_eq!(derive_identifier(b"/projects/p1/teams/t1"), b"p1");
    }

    #[test]
    fn test_marker_must_match_whole_segment() {
        assert_eq!(derive_identifier(b"/humgen/myprojects/p1"), b"hgi");
        assert_eq!(derive_identifier(b"/humgen/project/p1"), b"hgi");
    }

    #[test]
    fn test_empty_successor_is_returned() {
        // "/projects//x" splits into an empty segment after the marker
        assert_eq!(derive_identifier(b"/projects//x"), b"");
        assert_eq!(derive_identifier(b"/projects/"), b"");
    }

    #[test]
    fn test_non_utf8_project_name() {
        assert_eq!(derive_identifier(b"/humgen/projects/pr\xf6j/x"), b"pr\xf6j");
    }
}
