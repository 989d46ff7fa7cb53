//! Assembly of the configuration object consumed by the release pipeline.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::BranchSpec;
use crate::error::Result;
use crate::git::RemoteLister;
use crate::resolver::{self, BranchResolution, ResolveWarning};

/// The configuration object handed to the release orchestrator.
///
/// Field names serialize in the orchestrator's shape: `branches`,
/// `tagFormat`, `plugins`. Built fresh on every resolution, no caching
/// and no global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConfig {
    pub branches: Vec<BranchSpec>,
    pub tag_format: String,
    pub plugins: Vec<String>,
}

impl ReleaseConfig {
    /// Resolve the full release configuration against a remote.
    ///
    /// Branch discovery failures do not fail the resolution; they surface
    /// as the returned warning, and the branch list degrades to the main
    /// branch alone.
    pub fn resolve(remote: &dyn RemoteLister, config: &Config) -> (Self, Option<ResolveWarning>) {
        Self::from_resolution(resolver::resolve_branches(remote, config), config)
    }

    /// Build the fallback configuration when no remote query is possible
    /// (e.g. the repository itself could not be opened).
    pub fn degraded(config: &Config, reason: impl Into<String>) -> (Self, Option<ResolveWarning>) {
        Self::from_resolution(BranchResolution::degraded(config, reason), config)
    }

    fn from_resolution(
        resolution: BranchResolution,
        config: &Config,
    ) -> (Self, Option<ResolveWarning>) {
        let release = ReleaseConfig {
            branches: resolution.branches,
            tag_format: config.tag_format.clone(),
            plugins: config.plugins.clone(),
        };

        (release, resolution.warning)
    }

    /// Render the configuration as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
