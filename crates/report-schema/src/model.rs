//! Report types for a bundle audit.

use crate::arch::ArchSet;
use crate::compliance;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How an embedded binary is packaged inside the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryKind {
    /// A `.framework` bundle; its binary sits inside, named after the
    /// bundle minus extension.
    Framework,
    /// A standalone `.dylib`; the file itself is the binary.
    Dylib,
}

/// One inspectable binary discovered in the bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryEntry {
    /// Display name, e.g. `A.framework` or `B.dylib`.
    pub name: String,
    /// Filesystem location of the actual inspectable binary.
    pub path: PathBuf,
    pub kind: BinaryKind,
    /// Architectures found in the binary, in discovery order. Empty
    /// when the inspector output could not be parsed.
    pub architectures: ArchSet,
    /// Watch-listed symbols found in the binary's symbol table.
    pub found_symbols: Vec<String>,
}

/// Aggregate result of auditing one application bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleReport {
    /// Schema version for forward compatibility.
    pub schema_version: String,
    /// Path of the audited bundle.
    pub bundle_path: PathBuf,
    /// When the audit ran.
    pub generated_at: DateTime<Utc>,
    /// Architectures of the main executable.
    pub app_architectures: ArchSet,
    /// Watch-listed symbols found in the main executable.
    pub app_symbols: Vec<String>,
    /// Embedded framework/dylib entries, in discovery order. Empty when
    /// the main executable already fails compliance and the audit
    /// short-circuited.
    pub framework_entries: Vec<BinaryEntry>,
}

pub const SCHEMA_VERSION: &str = "1.0.0";

impl BundleReport {
    pub fn new(bundle_path: PathBuf, app_architectures: ArchSet, app_symbols: Vec<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            bundle_path,
            generated_at: Utc::now(),
            app_architectures,
            app_symbols,
            framework_entries: Vec::new(),
        }
    }

    /// Whether the main executable's architectures pass submission rules.
    pub fn app_compliant(&self) -> bool {
        !compliance::has_forbidden_arch(&self.app_architectures)
    }

    /// Entries whose architectures intersect the forbidden set. A view
    /// over `framework_entries`, not a copy.
    pub fn non_compliant_entries(&self) -> Vec<&BinaryEntry> {
        compliance::non_compliant(&self.framework_entries)
    }

    /// Overall verdict: main executable and every embedded binary pass.
    pub fn is_compliant(&self) -> bool {
        self.app_compliant() && self.non_compliant_entries().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, archs: &[&str]) -> BinaryEntry {
        BinaryEntry {
            name: name.to_string(),
            path: PathBuf::from(name),
            kind: BinaryKind::Framework,
            architectures: archs.iter().copied().collect(),
            found_symbols: Vec::new(),
        }
    }

    #[test]
    fn test_report_verdicts() {
        let mut report = BundleReport::new(
            PathBuf::from("a.app"),
            ["arm64", "arm64e"].into_iter().collect(),
            Vec::new(),
        );
        assert!(report.app_compliant());
        assert!(report.is_compliant());

        report.framework_entries.push(entry("A.framework", &["arm64"]));
        report.framework_entries.push(entry("B.dylib", &["arm64", "i386"]));
        assert!(report.app_compliant());
        assert!(!report.is_compliant());

        let bad = report.non_compliant_entries();
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].name, "B.dylib");
    }

    #[test]
    fn test_app_level_failure() {
        let report = BundleReport::new(
            PathBuf::from("a.app"),
            ["arm64", "x86_64"].into_iter().collect(),
            Vec::new(),
        );
        assert!(!report.app_compliant());
        assert!(!report.is_compliant());
    }

    #[test]
    fn test_report_serde_round_trip() {
        let mut report = BundleReport::new(
            PathBuf::from("a.app"),
            ["arm64"].into_iter().collect(),
            vec!["PHAsset".to_string()],
        );
        report.framework_entries.push(entry("A.framework", &["arm64"]));

        let json = serde_json::to_string_pretty(&report).unwrap();
        let back: BundleReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.app_architectures, report.app_architectures);
        assert_eq!(back.framework_entries.len(), 1);
        assert_eq!(back.framework_entries[0].kind, BinaryKind::Framework);
    }
}
