use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

/// A maintenance branch eligible for publishing releases of one version line.
///
/// The `range` is the branch name with its naming prefix removed (e.g.
/// `release/2.x` -> `2.x`) and states which versions the branch is
/// authoritative for. `prerelease` is always `false` for maintenance lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseBranch {
    pub name: String,
    pub range: String,
    pub prerelease: bool,
}

impl ReleaseBranch {
    /// Build a release branch from a bare branch name.
    ///
    /// Returns `None` if the name does not carry the expected prefix. The
    /// remainder after the prefix is used as the range verbatim, with no
    /// version validation.
    pub fn from_branch_name(name: impl Into<String>, prefix: &str) -> Option<Self> {
        let name = name.into();
        let range = name.strip_prefix(prefix)?.to_string();

        Some(ReleaseBranch {
            name,
            range,
            prerelease: false,
        })
    }

    /// Check whether a concrete version falls inside this branch's range.
    ///
    /// Ranges are interpreted as semver requirements (`2.x` matches every
    /// 2.y.z). A range that does not parse as a requirement covers nothing.
    pub fn covers(&self, version: &Version) -> bool {
        VersionReq::parse(&self.range)
            .map(|req| req.matches(version))
            .unwrap_or(false)
    }
}

/// One entry of the branch list handed to the release pipeline.
///
/// The list is heterogeneous: the always-present main branch is a bare
/// name, discovered maintenance branches are full [ReleaseBranch] records.
/// Serialization mirrors that shape (`"main"` vs. an object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BranchSpec {
    Named(String),
    Release(ReleaseBranch),
}

impl BranchSpec {
    /// The branch's short name, regardless of entry kind.
    pub fn name(&self) -> &str {
        match self {
            BranchSpec::Named(name) => name,
            BranchSpec::Release(branch) => &branch.name,
        }
    }
}
