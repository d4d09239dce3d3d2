use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tideman-bridge")]
#[command(about = "HTTP bridge for an external ranked-pairs election resolver")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Path to the resolver binary. Defaults to the platform convention
    /// (`tideman.exe` on Windows, `./tideman` elsewhere) when unset.
    #[arg(long, env = "TIDEMAN_BIN")]
    pub resolver_bin: Option<PathBuf>,

    /// Wall-clock limit for a single resolver run, in seconds.
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Resolves the binary path once, at startup. Request handling only ever
    /// sees the resolved value, never the environment.
    pub fn resolver_bin(&self) -> PathBuf {
        match &self.resolver_bin {
            Some(path) => path.clone(),
            None => PathBuf::from(default_resolver_name()),
        }
    }
}

fn default_resolver_name() -> &'static str {
    if cfg!(windows) {
        "tideman.exe"
    } else {
        "./tideman"
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("resolver_bin", &self.resolver_bin().to_string_lossy())?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        Ok(())
    }
}
