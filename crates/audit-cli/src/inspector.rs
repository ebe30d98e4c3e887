//! External binary-inspection tools.

use anyhow::Result;
use archaudit_common::Error;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Trait for obtaining raw text about a binary from external tools.
///
/// The parsers depend only on this interface, so tests can substitute
/// canned output without spawning real processes.
#[async_trait]
pub trait Inspector: Send + Sync {
    /// Raw architecture description of the binary (`lipo -info` shape).
    async fn arch_info(&self, binary: &Path) -> Result<String>;

    /// Full symbol-table dump of the binary (`nm` shape).
    async fn symbol_dump(&self, binary: &Path) -> Result<String>;
}

/// Inspector backed by the host `lipo` and `nm` tools.
pub struct HostTools {
    timeout: Duration,
}

impl HostTools {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn run(
        &self,
        tool: &str,
        args: &[&str],
        binary: &Path,
    ) -> archaudit_common::Result<String> {
        debug!("exec: {} {} {}", tool, args.join(" "), binary.display());

        let mut cmd = Command::new(tool);
        cmd.args(args).arg(binary);

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| Error::ToolTimeout {
                tool: tool.to_string(),
            })?
            .map_err(|e| Error::ToolInvocation {
                tool: tool.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::ToolInvocation {
                tool: tool.to_string(),
                reason: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl Inspector for HostTools {
    async fn arch_info(&self, binary: &Path) -> Result<String> {
        Ok(self.run("lipo", &["-info"], binary).await?)
    }

    async fn symbol_dump(&self, binary: &Path) -> Result<String> {
        Ok(self.run("nm", &[], binary).await?)
    }
}
