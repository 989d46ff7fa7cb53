//! Git remote query abstraction layer
//!
//! This module provides a trait-based abstraction over the one git
//! capability release-config needs: listing remote-tracking branches.
//! The concrete implementations include:
//!
//! - [repository::Git2Remote]: A real implementation using the `git2` crate
//! - [mock::MockRemote]: A mock implementation for testing
//!
//! Most code should depend on the [RemoteLister] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! use release_config::git::{MockRemote, RemoteLister};
//!
//! let remote = MockRemote::with_branches(&["origin/main", "origin/release/1.x"]);
//! let listing = remote.list_remote_branches().unwrap();
//! assert!(listing.contains("origin/release/1.x"));
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRemote;
pub use repository::Git2Remote;

use crate::error::Result;

/// Capability to list remote-tracking branches.
///
/// The single method returns all remote branch short names
/// (`<remote>/<branch>`, e.g. `origin/release/2.x`) as newline-separated
/// text, or fails when the listing cannot be obtained. The listing may be
/// empty and may contain arbitrary branch names unrelated to releases.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// threads.
///
/// ## Error Handling
///
/// Implementations should map underlying errors (like `git2::Error`) to
/// the appropriate [crate::error::ReleaseConfigError] variants.
pub trait RemoteLister: Send + Sync {
    /// Get the newline-separated listing of remote branch short names
    fn list_remote_branches(&self) -> Result<String>;
}
