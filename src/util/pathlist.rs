//! PATH-list merge and strip algorithms.
//!
//! Both engines treat PATH as an ordered list of literal segments joined
//! by the platform separator. Comparison is structural string equality:
//! no normalization, no case folding, no trailing-separator trimming.
//! Repeated activation of the same version therefore never duplicates a
//! segment, but `/opt/Node` and `/opt/node/` are distinct entries.

/// Split a PATH-style value into its segments. An empty value has no
/// segments.
pub fn split(value: &str, separator: char) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(separator).map(|s| s.to_string()).collect()
}

/// Join segments back into a PATH-style value.
pub fn join(segments: &[String], separator: char) -> String {
    segments.join(&separator.to_string())
}

/// Append `segment` unless an identical segment is already present.
pub fn push_unique(value: &str, segment: &str, separator: char) -> String {
    let mut segments = split(value, separator);
    if !segments.iter().any(|s| s == segment) {
        segments.push(segment.to_string());
    }
    join(&segments, separator)
}

/// Drop every segment containing `needle` as a substring.
///
/// Substring match is deliberate: it also strips versioned sub-paths
/// under a tool directory, not just the directory itself.
pub fn strip_containing(value: &str, needle: &str, separator: char) -> String {
    let segments: Vec<String> = split(value, separator)
        .into_iter()
        .filter(|s| !s.contains(needle))
        .collect();
    join(&segments, separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_unique_appends_once() {
        let merged = push_unique("/usr/bin:/bin", "/opt/sdk/Node/lin_current", ':');
        assert_eq!(merged, "/usr/bin:/bin:/opt/sdk/Node/lin_current");

        // Second push of the identical segment is a no-op.
        let merged_again = push_unique(&merged, "/opt/sdk/Node/lin_current", ':');
        assert_eq!(merged_again, merged);
    }

    #[test]
    fn test_push_unique_into_empty() {
        assert_eq!(push_unique("", "/opt/bin", ':'), "/opt/bin");
    }

    #[test]
    fn test_push_unique_is_structural_not_normalized() {
        // Different casing and trailing separators are distinct segments.
        let merged = push_unique("/opt/Node", "/opt/node/", ':');
        assert_eq!(merged, "/opt/Node:/opt/node/");
    }

    #[test]
    fn test_strip_containing_preserves_order() {
        let stripped = strip_containing(
            "/usr/bin:/opt/sdk/Node/lin_current:/bin:/opt/sdk/Node/lin_16.11.1/bin",
            "/opt/sdk/Node",
            ':',
        );
        assert_eq!(stripped, "/usr/bin:/bin");
    }

    #[test]
    fn test_strip_containing_matches_substrings() {
        // Versioned sub-paths under the tool directory are stripped too.
        let stripped = strip_containing("/a:/opt/sdk/Java/lin_jdk-17/bin:/b", "/opt/sdk/Java", ':');
        assert_eq!(stripped, "/a:/b");
    }

    #[test]
    fn test_split_empty_has_no_segments() {
        assert!(split("", ':').is_empty());
        assert_eq!(strip_containing("", "/opt", ':'), "");
    }

    #[test]
    fn test_windows_separator() {
        let merged = push_unique("C:\\Windows", "D:\\Sdk\\Node\\win_current", ';');
        assert_eq!(merged, "C:\\Windows;D:\\Sdk\\Node\\win_current");
    }
}
