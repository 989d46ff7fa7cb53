//! Pure formatting functions for UI output.

use crate::domain::BranchSpec;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a non-fatal warning to the user.
pub fn display_warning(message: &str) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", message);
}

/// Display the resolved branch list.
///
/// Maintenance branches show the version range they are authoritative for.
///
/// # Arguments
/// * `branches` - Resolved branch list, main branch first
pub fn display_branches(branches: &[BranchSpec]) {
    println!("\x1b[1mResolved release branches:\x1b[0m");
    for branch in branches {
        match branch {
            BranchSpec::Named(name) => println!("  - {}", name),
            BranchSpec::Release(release) => {
                println!("  - {} \x1b[36m(range {})\x1b[0m", release.name, release.range)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReleaseBranch;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_warning() {
        // Visual verification test - output is printed to stderr
        display_warning("test warning");
    }

    #[test]
    fn test_display_branches() {
        // Visual verification test - output is printed to stdout
        display_branches(&[
            BranchSpec::Named("main".to_string()),
            BranchSpec::Release(
                ReleaseBranch::from_branch_name("release/1.x", "release/").unwrap(),
            ),
        ]);
    }
}
