use crate::domain::model::ResolverOutcome;
use crate::domain::ports::Resolver;
use crate::utils::error::{BridgeError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Invokes the external resolver binary under a hard wall-clock limit.
///
/// The binary path is resolved once at startup and carried here as an
/// immutable value; request handling never touches the environment.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    binary: PathBuf,
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(binary: PathBuf, timeout: Duration) -> Self {
        Self { binary, timeout }
    }
}

#[async_trait]
impl Resolver for ProcessRunner {
    async fn resolve(&self, ballot_path: &Path) -> Result<ResolverOutcome> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg(format!("--file={}", ballot_path.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|source| BridgeError::LaunchError {
            binary: self.binary.display().to_string(),
            source,
        })?;

        tracing::debug!("resolver spawned for {}", ballot_path.display());

        // Dropping the wait future on timeout kills the child (kill_on_drop),
        // so a hung resolver cannot outlive its request.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                return Err(BridgeError::TimeoutError {
                    timeout_secs: self.timeout.as_secs(),
                });
            }
        };

        Ok(ResolverOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
