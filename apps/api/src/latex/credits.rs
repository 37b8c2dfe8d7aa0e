//! Attribution comment block stamped at the top of every generated document.

use crate::config::Config;

/// Static attribution metadata. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credits {
    pub project_name: String,
    pub author_name: String,
    pub author_url: String,
}

impl Credits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            project_name: config.credit_project_name.clone(),
            author_name: config.credit_author_name.clone(),
            author_url: config.credit_author_url.clone(),
        }
    }

    /// The comment block for one template, e.g. `% Template: Classic`.
    pub fn banner(&self, template_name: &str) -> String {
        format!(
            "%-------------------------\n\
             % Resume in LaTeX\n\
             % Template: {template_name}\n\
             % Created with {} by {}\n\
             % {}\n\
             %------------------------",
            self.project_name, self.author_name, self.author_url
        )
    }
}

impl Default for Credits {
    fn default() -> Self {
        Self {
            project_name: "Resumake".to_string(),
            author_name: "Resumake Contributors".to_string(),
            author_url: "https://github.com/resumake/resumake".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_comment_only() {
        let banner = Credits::default().banner("Classic");
        assert!(banner.lines().all(|l| l.starts_with('%')));
        assert!(banner.contains("% Template: Classic"));
        assert_eq!(banner.lines().count(), 6);
    }
}
