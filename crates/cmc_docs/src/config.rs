//! Documentation page configuration (`docs.toml`)
//!
//! Every field has a default matching the markup hooks of the CMC
//! documentation page, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Top-level page configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DocsConfig {
    pub search: SearchConfig,
    pub copy: CopyConfig,
    pub scroll_spy: ScrollSpyConfig,
    pub sidebar: SidebarConfig,
    pub code_toggle: CodeToggleConfig,
    pub hex: HexConfig,
}

/// Search box and results panel
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub input_id: String,
    pub results_id: String,
    /// Attribute that marks an element as searchable and holds its title
    pub title_attribute: String,
    pub category_attribute: String,
    /// Category used when the element has none
    pub default_category: String,
    pub active_class: String,
    pub result_item_class: String,
    pub no_results_label: String,
    /// Trimmed queries shorter than this leave the panel inactive
    pub min_query_len: usize,
    /// Delay before a blurred search box closes its panel
    pub blur_grace_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input_id: "docs-search".to_string(),
            results_id: "search-results".to_string(),
            title_attribute: "data-search-title".to_string(),
            category_attribute: "data-search-category".to_string(),
            default_category: "General".to_string(),
            active_class: "active".to_string(),
            result_item_class: "search-result-item".to_string(),
            no_results_label: "No results found".to_string(),
            min_query_len: 2,
            blur_grace_ms: 200,
        }
    }
}

/// Code block copy buttons
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CopyConfig {
    pub button_class: String,
    pub block_class: String,
    pub code_tag: String,
    pub ack_label: String,
    /// Label restored after a fallback copy
    pub idle_label: String,
    pub accent_color: String,
    pub revert_ms: u64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            button_class: "copy-btn".to_string(),
            block_class: "code-block".to_string(),
            code_tag: "code".to_string(),
            ack_label: "Copied!".to_string(),
            idle_label: "Copy".to_string(),
            accent_color: "#22d3ee".to_string(),
            revert_ms: 2000,
        }
    }
}

/// Sidebar scroll spy
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    pub link_class: String,
    pub section_tag: String,
    pub active_class: String,
    /// Viewport inset from the top, in pixels
    pub top_inset_px: f32,
    /// Viewport inset from the bottom, as a fraction of its height
    pub bottom_inset_fraction: f32,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            link_class: "sidebar-link".to_string(),
            section_tag: "section".to_string(),
            active_class: "active".to_string(),
            top_inset_px: 80.0,
            bottom_inset_fraction: 0.5,
        }
    }
}

/// Mobile sidebar toggle
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub toggle_id: String,
    pub close_id: String,
    pub sidebar_class: String,
    pub open_class: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            toggle_id: "sidebar-toggle".to_string(),
            close_id: "sidebar-close".to_string(),
            sidebar_class: "docs-sidebar".to_string(),
            open_class: "open".to_string(),
        }
    }
}

/// Show/hide code toggles on component examples
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CodeToggleConfig {
    pub button_class: String,
    pub example_class: String,
    pub block_class: String,
    pub show_label: String,
    pub hide_label: String,
}

impl Default for CodeToggleConfig {
    fn default() -> Self {
        Self {
            button_class: "toggle-code".to_string(),
            example_class: "component-example".to_string(),
            block_class: "code-block".to_string(),
            show_label: "Show Code".to_string(),
            hide_label: "Hide Code".to_string(),
        }
    }
}

/// Hex color swatch buttons
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HexConfig {
    pub button_class: String,
    pub ack_label: String,
    pub accent_background: String,
    pub accent_color: String,
    pub revert_ms: u64,
    /// Elements whose text is never scanned
    pub skip_tags: Vec<String>,
}

impl Default for HexConfig {
    fn default() -> Self {
        Self {
            button_class: "hex-code-btn".to_string(),
            ack_label: "Copied!".to_string(),
            accent_background: "#22d3ee".to_string(),
            accent_color: "#000".to_string(),
            revert_ms: 1500,
            skip_tags: vec!["script".to_string(), "style".to_string()],
        }
    }
}

impl DocsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
