//! Template model
//!
//! A template is a YAML document with a `content` block scalar holding
//! placeholder tokens and an optional list of default `tags`.

use serde::{Deserialize, Serialize};

/// File extension used for template files
pub const TEMPLATE_EXTENSION: &str = "yaml";

/// Name of the template seeded into a fresh templates directory
pub const DEFAULT_TEMPLATE_NAME: &str = "default";

/// Raw YAML written for the default template and for every new template
pub const DEFAULT_TEMPLATE_CONTENT: &str = "content: |
  # {{TITLE}}

  Date: {{DATE}}
  Time: {{TIME}}
  Tags: {{TAGS}}

  ## Introduction

  ## Main Content

  ## Conclusion
tags: []
";

/// A loaded note template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Body text containing placeholder tokens
    pub content: String,

    /// Tags applied when the caller gives none
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Template {
    /// Create a template from content with no default tags
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tags: Vec::new(),
        }
    }
}
