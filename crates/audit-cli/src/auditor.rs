//! Bundle audit orchestration.

use crate::inspector::Inspector;
use crate::parsers;
use crate::scanner;
use crate::symbols;
use anyhow::Result;
use archaudit_common::Error;
use archaudit_report::{ArchSet, BinaryEntry, BundleReport};
use std::path::Path;
use tracing::{debug, info, warn};

/// Drives a full audit of one bundle: main executable first, then
/// every embedded framework/dylib.
pub struct Auditor {
    inspector: Box<dyn Inspector>,
}

impl Auditor {
    pub fn new(inspector: Box<dyn Inspector>) -> Self {
        Self { inspector }
    }

    /// Audit the bundle at `bundle` and build the report.
    ///
    /// If the main executable itself contains forbidden architectures
    /// the audit short-circuits: the binary already fails submission,
    /// so no framework entries are inspected. An IO failure while
    /// enumerating `Frameworks/` aborts the audit with no partial
    /// report; per-entry tool or parse failures degrade to an empty
    /// architecture/symbol result for that entry only.
    pub async fn audit(&self, bundle: &Path) -> Result<BundleReport> {
        info!("Auditing bundle {}", bundle.display());

        if !bundle.is_dir() {
            return Err(Error::InvalidBundle(format!(
                "{} is not a bundle directory",
                bundle.display()
            ))
            .into());
        }

        let app_binary = scanner::main_binary_path(bundle);
        let app_architectures = self.inspect_archs(&app_binary).await?;
        let app_symbols = self.scan_symbols(&app_binary).await;

        let mut report = BundleReport::new(bundle.to_path_buf(), app_architectures, app_symbols);

        if !report.app_compliant() {
            warn!(
                "main executable contains forbidden architectures: {}",
                report.app_architectures
            );
            return Ok(report);
        }

        for discovered in scanner::scan_frameworks(bundle)? {
            debug!("inspecting {}", discovered.name);
            let architectures = self.inspect_archs(&discovered.path).await?;
            let found_symbols = self.scan_symbols(&discovered.path).await;

            if !found_symbols.is_empty() {
                info!(
                    "{} uses watch-listed symbols: {}",
                    discovered.name,
                    found_symbols.join(" ")
                );
            }

            report.framework_entries.push(BinaryEntry {
                name: discovered.name,
                path: discovered.path,
                kind: discovered.kind,
                architectures,
                found_symbols,
            });
        }

        Ok(report)
    }

    /// Architecture inspection for one binary. Tool failure and
    /// unrecognized output both degrade to an empty set so one odd
    /// entry cannot abort the audit.
    async fn inspect_archs(&self, binary: &Path) -> Result<ArchSet> {
        let text = match self.inspector.arch_info(binary).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "architecture inspection failed for {}: {:#}",
                    binary.display(),
                    e
                );
                return Ok(ArchSet::new());
            }
        };

        debug!("inspector output for {}: {}", binary.display(), text.trim_end());

        let archs = parsers::parse_architectures(&text)?;
        if archs.is_empty() {
            warn!(
                "unrecognized inspector output for {}, no architectures known",
                binary.display()
            );
        }
        Ok(archs)
    }

    /// Best-effort symbol scan; a failed dump means "no symbols found".
    async fn scan_symbols(&self, binary: &Path) -> Vec<String> {
        match self.inspector.symbol_dump(binary).await {
            Ok(dump) => symbols::find_watched(&dump),
            Err(e) => {
                debug!("symbol dump failed for {}: {:#}", binary.display(), e);
                Vec::new()
            }
        }
    }
}
