//! Bundle traversal and embedded-binary classification.

use archaudit_common::{Error, Result};
use archaudit_report::BinaryKind;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUNDLE_EXT: &str = ".app";
const FRAMEWORK_EXT: &str = ".framework";
const DYLIB_EXT: &str = ".dylib";

/// An inspectable binary discovered under `Frameworks/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovered {
    /// Directory-entry name, used as display name in the report.
    pub name: String,
    /// Resolved path of the actual inspectable binary.
    pub path: PathBuf,
    pub kind: BinaryKind,
}

/// Path of the bundle's main executable: `<bundle>/<name>` where
/// `<name>` is the bundle's filename with the `.app` suffix removed.
/// Only the bundle extension is stripped, so `My.Cool.app` resolves to
/// `My.Cool.app/My.Cool`.
pub fn main_binary_path(bundle: &Path) -> PathBuf {
    let name = bundle
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = name.strip_suffix(BUNDLE_EXT).unwrap_or(&name);
    bundle.join(base)
}

/// Enumerate the immediate children of `<bundle>/Frameworks` and
/// classify each as a framework bundle or a standalone dylib.
///
/// A missing `Frameworks` directory is the normal zero-frameworks case
/// and yields an empty list; any other IO failure is fatal for the
/// scan. Children that are neither frameworks nor dylibs are skipped.
/// `read_dir` order is unspecified, so children are sorted by name to
/// keep discovery order deterministic.
pub fn scan_frameworks(bundle: &Path) -> Result<Vec<Discovered>> {
    let dir = bundle.join("Frameworks");
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no Frameworks directory in {}", bundle.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let mut found = Vec::new();
    for name in names {
        match classify(bundle, &name) {
            Some(discovered) => found.push(discovered),
            None => debug!("skipping non-binary entry {}", name),
        }
    }

    Ok(found)
}

/// Classify one `Frameworks/` child by extension and resolve it to its
/// inspectable binary path. Returns None for entries that are neither
/// framework bundles nor dylibs.
pub fn classify(bundle: &Path, child: &str) -> Option<Discovered> {
    let frameworks = bundle.join("Frameworks");

    if let Some(base) = child.strip_suffix(FRAMEWORK_EXT) {
        // The framework bundle's real binary sits inside it, named
        // after the bundle minus extension.
        return Some(Discovered {
            name: child.to_string(),
            path: frameworks.join(child).join(base),
            kind: BinaryKind::Framework,
        });
    }

    if child.ends_with(DYLIB_EXT) {
        return Some(Discovered {
            name: child.to_string(),
            path: frameworks.join(child),
            kind: BinaryKind::Dylib,
        });
    }

    None
}
