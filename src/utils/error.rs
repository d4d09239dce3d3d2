use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("CSV payload is empty")]
    EmptyPayloadError,

    #[error("failed to launch resolver {binary}: {source}")]
    LaunchError {
        binary: String,
        source: std::io::Error,
    },

    #[error("resolver exceeded {timeout_secs}s time limit")]
    TimeoutError { timeout_secs: u64 },

    #[error("resolver failed (exit code {exit_code})")]
    ResolverFailedError {
        stdout: String,
        stderr: String,
        exit_code: i32,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("malformed multipart request: {message}")]
    MultipartError { message: String },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BridgeError>;
