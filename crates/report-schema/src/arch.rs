//! Architecture identifiers and ordered architecture sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical architecture vocabulary, in presence-table column order.
pub const ARCH_COLUMNS: [&str; 6] = ["i386", "x86_64", "armv7", "armv7s", "arm64", "arm64e"];

/// Architectures rejected for store submission (simulator and legacy
/// Intel targets).
pub const FORBIDDEN_ARCHS: [&str; 2] = ["i386", "x86_64"];

/// An ordered, deduplicated set of architecture identifiers.
///
/// Insertion order follows the order of discovery in tool output.
/// The set is empty only when the inspector output matched neither
/// recognized shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchSet(Vec<String>);

impl ArchSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert an identifier, keeping the first occurrence's position.
    /// Returns false if it was already present.
    pub fn insert(&mut self, arch: impl Into<String>) -> bool {
        let arch = arch.into();
        if self.0.iter().any(|a| *a == arch) {
            return false;
        }
        self.0.push(arch);
        true
    }

    pub fn contains(&self, arch: &str) -> bool {
        self.0.iter().any(|a| a == arch)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for ArchSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = ArchSet::new();
        for arch in iter {
            set.insert(arch);
        }
        set
    }
}

impl<'a> FromIterator<&'a str> for ArchSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for ArchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_discovery_order() {
        let mut set = ArchSet::new();
        set.insert("armv7");
        set.insert("arm64");
        set.insert("i386");
        assert_eq!(set.as_slice(), ["armv7", "arm64", "i386"]);
    }

    #[test]
    fn test_insert_deduplicates_keeping_first_position() {
        let set: ArchSet = ["arm64", "armv7", "arm64"].into_iter().collect();
        assert_eq!(set.as_slice(), ["arm64", "armv7"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_is_space_joined() {
        let set: ArchSet = ["arm64", "arm64e"].into_iter().collect();
        assert_eq!(set.to_string(), "arm64 arm64e");
    }

    #[test]
    fn test_serde_transparent() {
        let set: ArchSet = ["armv7", "arm64"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["armv7","arm64"]"#);
        let back: ArchSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
