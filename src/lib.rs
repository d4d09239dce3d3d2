pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{engine::ElectionEngine, runner::ProcessRunner};
pub use crate::server::{router, AppState};
pub use crate::utils::error::{BridgeError, Result};
