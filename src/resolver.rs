//! Release branch resolution
//!
//! Turns the remote branch listing into the ordered branch list fed to the
//! release pipeline: the always-present main branch first, then every
//! maintenance branch matching the configured naming prefix, in the order
//! the remote reported them.

use std::fmt;

use crate::config::Config;
use crate::domain::{BranchSpec, ReleaseBranch};
use crate::git::RemoteLister;

/// Non-fatal conditions hit while resolving the branch list.
/// These are reported to the user but never abort configuration loading.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveWarning {
    /// The remote branch listing could not be obtained
    RemoteQueryFailed { reason: String },
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::RemoteQueryFailed { reason } => {
                write!(f, "Could not list branches: {}", reason)
            }
        }
    }
}

/// Outcome of branch resolution: the branch list plus an optional warning
/// when the resolver had to degrade to the minimal list.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchResolution {
    pub branches: Vec<BranchSpec>,
    pub warning: Option<ResolveWarning>,
}

impl BranchResolution {
    /// The fallback resolution: only the main branch, plus a warning
    /// carrying the failure message.
    pub fn degraded(config: &Config, reason: impl Into<String>) -> Self {
        BranchResolution {
            branches: vec![BranchSpec::Named(config.main_branch.clone())],
            warning: Some(ResolveWarning::RemoteQueryFailed {
                reason: reason.into(),
            }),
        }
    }
}

/// Resolve the ordered branch list from the remote branch listing.
///
/// The listing is split on newlines; entries starting with
/// `<remote>/<prefix>` (e.g. `origin/release/`) become [ReleaseBranch]
/// records with the remote prefix stripped, in input order. Everything
/// else is ignored. A failed query degrades to the single-entry fallback
/// list instead of propagating the error.
pub fn resolve_branches(remote: &dyn RemoteLister, config: &Config) -> BranchResolution {
    let listing = match remote.list_remote_branches() {
        Ok(listing) => listing,
        Err(e) => return BranchResolution::degraded(config, e.to_string()),
    };

    let remote_prefix = format!("{}/", config.remote);
    let release_prefix = format!("{}{}", remote_prefix, config.branch_prefix);

    let mut branches = vec![BranchSpec::Named(config.main_branch.clone())];

    for entry in listing.split('\n') {
        if !entry.starts_with(&release_prefix) {
            continue;
        }

        let name = &entry[remote_prefix.len()..];

        if let Some(branch) = ReleaseBranch::from_branch_name(name, &config.branch_prefix) {
            branches.push(BranchSpec::Release(branch));
        }
    }

    BranchResolution { branches, warning: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRemote;

    fn release(name: &str, range: &str) -> BranchSpec {
        BranchSpec::Release(ReleaseBranch {
            name: name.to_string(),
            range: range.to_string(),
            prerelease: false,
        })
    }

    #[test]
    fn test_resolve_keeps_remote_order() {
        let remote = MockRemote::with_branches(&[
            "origin/release/2.x",
            "origin/main",
            "origin/release/1.x",
        ]);
        let config = Config::default();

        let resolution = resolve_branches(&remote, &config);
        assert_eq!(
            resolution.branches,
            vec![
                BranchSpec::Named("main".to_string()),
                release("release/2.x", "2.x"),
                release("release/1.x", "1.x"),
            ]
        );
        assert!(resolution.warning.is_none());
    }

    #[test]
    fn test_resolve_empty_listing() {
        let remote = MockRemote::with_branches(&[]);
        let config = Config::default();

        let resolution = resolve_branches(&remote, &config);
        assert_eq!(
            resolution.branches,
            vec![BranchSpec::Named("main".to_string())]
        );
    }

    #[test]
    fn test_resolve_ignores_other_remotes() {
        let remote = MockRemote::with_branches(&["upstream/release/1.x", "origin/release/2.x"]);
        let config = Config::default();

        let resolution = resolve_branches(&remote, &config);
        assert_eq!(
            resolution.branches,
            vec![
                BranchSpec::Named("main".to_string()),
                release("release/2.x", "2.x"),
            ]
        );
    }

    #[test]
    fn test_resolve_custom_prefix_and_remote() {
        let remote = MockRemote::with_branches(&["fork/maint/3.x", "origin/release/1.x"]);
        let config = Config {
            remote: "fork".to_string(),
            branch_prefix: "maint/".to_string(),
            ..Config::default()
        };

        let resolution = resolve_branches(&remote, &config);
        assert_eq!(
            resolution.branches,
            vec![
                BranchSpec::Named("main".to_string()),
                release("maint/3.x", "3.x"),
            ]
        );
    }

    #[test]
    fn test_degraded_resolution() {
        let config = Config::default();
        let resolution = BranchResolution::degraded(&config, "remote is unreachable");

        assert_eq!(
            resolution.branches,
            vec![BranchSpec::Named("main".to_string())]
        );
        let warning = resolution.warning.unwrap();
        assert_eq!(
            warning.to_string(),
            "Could not list branches: remote is unreachable"
        );
    }

    #[test]
    fn test_resolve_blank_lines_excluded() {
        let remote = MockRemote::with_raw_listing("\norigin/release/1.x\n\n");
        let config = Config::default();

        let resolution = resolve_branches(&remote, &config);
        assert_eq!(
            resolution.branches,
            vec![
                BranchSpec::Named("main".to_string()),
                release("release/1.x", "1.x"),
            ]
        );
    }
}
