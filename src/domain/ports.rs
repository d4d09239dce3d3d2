use crate::domain::model::ResolverOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Seam between request orchestration and the external election program.
/// Production uses a subprocess runner; tests drop in mock resolvers.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, ballot_path: &Path) -> Result<ResolverOutcome>;
}
