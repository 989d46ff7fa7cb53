//! Domain logic - pure data types independent of git operations

pub mod branch;
pub mod tag;

pub use branch::{BranchSpec, ReleaseBranch};
pub use tag::TagFormat;
