use crate::utils::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};

/// Ballot CSV text as received from a client, trimmed and known non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallotPayload(String);

impl BallotPayload {
    /// Builds a payload from uploaded file bytes. Invalid UTF-8 sequences are
    /// substituted rather than rejected; the resolver does its own validation.
    pub fn from_upload(bytes: &[u8]) -> Result<Self> {
        Self::from_text(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Builds a payload from an inline JSON body of the form `{"csv": "<text>"}`.
    /// A missing field or a body that is not JSON degrades to the empty payload,
    /// not a decode error.
    pub fn from_json_body(body: &[u8]) -> Result<Self> {
        let csv = serde_json::from_slice::<InlineCsv>(body)
            .map(|inline| inline.csv.unwrap_or_default())
            .unwrap_or_default();
        Self::from_text(csv)
    }

    fn from_text(text: String) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(BridgeError::EmptyPayloadError);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
struct InlineCsv {
    csv: Option<String>,
}

/// Captured output of one resolver invocation. A non-zero exit code lives here
/// as data, not as an error.
#[derive(Debug, Clone, Serialize)]
pub struct ResolverOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Outcome of one full election request.
#[derive(Debug, Clone)]
pub struct ElectionResult {
    pub winner: Option<String>,
    pub outcome: ResolverOutcome,
}

impl ElectionResult {
    /// Winner extraction is necessary but not sufficient; the exit code dominates.
    pub fn is_success(&self) -> bool {
        self.outcome.exit_code == 0 && self.winner.is_some()
    }
}
