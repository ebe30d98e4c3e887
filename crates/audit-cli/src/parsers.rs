//! Parsers for inspector tool output.

use anyhow::Result;
use archaudit_report::ArchSet;
use regex::Regex;

/// Parse `lipo -info` style output into an ordered architecture set.
///
/// Two shapes are recognized:
/// - fat file: `Architectures in the fat file: <path> are: armv7 arm64`
/// - thin file: `Non-fat file: <path> is architecture: arm64`
///
/// The fat-form marker takes precedence; the thin form is the
/// fallback. Output matching neither yields an empty set, never an
/// error. Both matches are anchored to end of line with a token-only
/// charset, so a marker substring inside a file path cannot satisfy
/// them on its own.
pub fn parse_architectures(output: &str) -> Result<ArchSet> {
    let fat = Regex::new(r"(?m)are: (?P<list>\w[\w ]*?)\s*$")?;
    let thin = Regex::new(r"(?m)is architecture: (?P<arch>\w+)\s*$")?;

    if let Some(caps) = fat.captures(output) {
        return Ok(caps["list"].split_whitespace().collect());
    }
    if let Some(caps) = thin.captures(output) {
        let mut set = ArchSet::new();
        set.insert(&caps["arch"]);
        return Ok(set);
    }

    Ok(ArchSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fat_file_output() {
        let out = "Architectures in the fat file: a.app are: armv7 arm64\n";
        let archs = parse_architectures(out).unwrap();
        assert_eq!(archs.as_slice(), ["armv7", "arm64"]);
    }

    #[test]
    fn test_parse_thin_file_output() {
        let out = "Non-fat file: a.app is architecture: arm64\n";
        let archs = parse_architectures(out).unwrap();
        assert_eq!(archs.as_slice(), ["arm64"]);
    }

    #[test]
    fn test_fat_marker_wins_over_thin_marker() {
        let out = "Architectures in the fat file: is architecture: x.app are: arm64 arm64e\n";
        let archs = parse_architectures(out).unwrap();
        assert_eq!(archs.as_slice(), ["arm64", "arm64e"]);
    }

    #[test]
    fn test_unrecognized_output_yields_empty_set() {
        let archs = parse_architectures("fatal error: can't open file\n").unwrap();
        assert!(archs.is_empty());
    }

    #[test]
    fn test_empty_output_yields_empty_set() {
        assert!(parse_architectures("").unwrap().is_empty());
    }

    #[test]
    fn test_marker_inside_path_does_not_misfire() {
        // The directory name contains "are: " but is followed by path
        // characters, so only the thin marker matches.
        let out = "Non-fat file: /tmp/they are: here/Foo is architecture: arm64\n";
        let archs = parse_architectures(out).unwrap();
        assert_eq!(archs.as_slice(), ["arm64"]);
    }

    #[test]
    fn test_duplicate_tokens_keep_first_occurrence() {
        let out = "Architectures in the fat file: a.app are: arm64 armv7 arm64\n";
        let archs = parse_architectures(out).unwrap();
        assert_eq!(archs.as_slice(), ["arm64", "armv7"]);
    }
}
