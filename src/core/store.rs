use crate::domain::model::BallotPayload;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// One request's ballot data on disk. The file is uniquely named inside the
/// system temp dir and fully flushed before the path is handed out, so the
/// resolver always observes a complete file. Dropping the guard removes the
/// file on every exit path; removal failures are swallowed.
pub struct BallotFile {
    file: NamedTempFile,
}

impl BallotFile {
    pub fn create(payload: &BallotPayload) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("ballots-")
            .suffix(".csv")
            .tempfile()?;
        file.write_all(payload.as_str().as_bytes())?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
