use crate::error::{ReleaseConfigError, Result};

/// Tag naming template (e.g. "{version}", "release-{version}")
///
/// The default template names tags with the bare version number, no "v"
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFormat {
    pub template: String,
}

impl TagFormat {
    /// Create a new tag format
    pub fn new(template: impl Into<String>) -> Self {
        TagFormat {
            template: template.into(),
        }
    }

    /// Format a version according to the template
    /// Example: template="{version}", version="1.2.3" -> "1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.template.replace("{version}", version)
    }

    /// Check the template carries the {version} placeholder
    pub fn validate(&self) -> Result<()> {
        if !self.template.contains("{version}") {
            return Err(ReleaseConfigError::config(format!(
                "Tag format '{}' must contain the {{version}} placeholder",
                self.template
            )));
        }

        Ok(())
    }

    /// Validate if a tag is an instantiation of this template
    pub fn matches(&self, tag: &str) -> Result<bool> {
        self.validate()?;

        // Create regex pattern: escape everything, replace {version} with regex
        let escaped = regex::escape(&self.template);
        let regex_pattern = escaped.replace(r"\{version\}", r"(\d+\.\d+\.\d+)");

        if let Ok(re) = regex::Regex::new(&format!("^{}$", regex_pattern)) {
            Ok(re.is_match(tag))
        } else {
            Err(ReleaseConfigError::config("Invalid tag format"))
        }
    }
}

impl Default for TagFormat {
    fn default() -> Self {
        TagFormat::new("{version}")
    }
}
