use crate::core::parser;
use crate::core::store::BallotFile;
use crate::domain::model::{BallotPayload, ElectionResult};
use crate::domain::ports::Resolver;
use crate::utils::error::Result;

/// Runs one election request end to end: transient ballot file, resolver
/// invocation, winner extraction. Strictly sequential, nothing shared between
/// requests beyond the temp dir namespace.
pub struct ElectionEngine<R: Resolver> {
    resolver: R,
}

impl<R: Resolver> ElectionEngine<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub async fn run(&self, payload: BallotPayload) -> Result<ElectionResult> {
        let ballot_file = BallotFile::create(&payload)?;
        tracing::debug!("ballot written to {}", ballot_file.path().display());

        // The guard drops on every path out of this function, timeouts and
        // resolver errors included, taking the file with it.
        let outcome = self.resolver.resolve(ballot_file.path()).await?;

        let winner = parser::extract_winner(&outcome.stdout);
        tracing::debug!(exit_code = outcome.exit_code, winner = ?winner, "resolver finished");

        Ok(ElectionResult { winner, outcome })
    }
}
