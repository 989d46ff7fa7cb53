use crate::error::{ReleaseConfigError, Result};
use crate::git::RemoteLister;

/// Mock remote for testing without actual git operations
///
/// Holds a canned branch listing, or simulates a failing remote query.
pub struct MockRemote {
    listing: Option<String>,
}

impl MockRemote {
    /// Create a mock returning the given branch short names
    pub fn with_branches(branches: &[&str]) -> Self {
        MockRemote {
            listing: Some(branches.join("\n")),
        }
    }

    /// Create a mock returning raw listing text verbatim
    ///
    /// Useful for exercising malformed or oddly-shaped query output.
    pub fn with_raw_listing(raw: impl Into<String>) -> Self {
        MockRemote {
            listing: Some(raw.into()),
        }
    }

    /// Create a mock whose query always fails
    pub fn failing() -> Self {
        MockRemote { listing: None }
    }
}

impl RemoteLister for MockRemote {
    fn list_remote_branches(&self) -> Result<String> {
        match &self.listing {
            Some(listing) => Ok(listing.clone()),
            None => Err(ReleaseConfigError::remote("remote is unreachable")),
        }
    }
}
