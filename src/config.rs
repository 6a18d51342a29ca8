//! Generator configuration.
//!
//! Handles loading, validating, and merging `cover.toml`. Stock defaults ship
//! with the binary; a user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! brand = "my-blog.dev"        # Shown in every cover footer
//! series_segment = "posts"     # Path segment that precedes the series directory
//!
//! [social]                     # Each key is optional; omit to hide the icon
//! github = "octocat"
//! linkedin = "octocat"
//! email = "octo@example.com"
//!
//! [defaults]
//! template = "minimal"
//! format = "both"              # linkedin | blog | both
//! output_dir = "covers"
//! content_dir = "content/posts"
//!
//! [categories.kafka]
//! colors = ["#8B5CF6", "#F59E0B"]
//! icon = "📡"
//! label = "Kafka Series"
//!
//! [[title_keywords]]           # Checked in file order
//! keyword = "kafka"
//! category = "kafka"
//! ```
//!
//! ## Merging
//!
//! Tables merge key by key, so adding `[categories.rust]` keeps every stock
//! category. Arrays are replaced wholesale: a user `[[title_keywords]]` list
//! replaces the stock list, because keyword order is significant.
//!
//! Unknown keys are rejected to catch typos early.

use crate::category::{CategoryEntry, CategoryError, CategoryResolver, DEFAULT_CATEGORY, TitleKeyword};
use crate::color::Rgb;
use crate::types::FormatSelection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "cover.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("category table has no 'default' entry")]
    MissingDefaultCategory,
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `cover.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverConfig {
    /// Brand name printed first in the footer.
    pub brand: String,
    /// Directory name that precedes the series directory in article paths.
    pub series_segment: String,
    /// Social identities shown in the footer.
    pub social: SocialLinks,
    /// CLI defaults.
    pub defaults: DefaultsConfig,
    /// Category table keyed by lowercase slug. Must contain `default`.
    pub categories: BTreeMap<String, CategoryEntry>,
    /// Ordered title keyword → category slug table.
    pub title_keywords: Vec<TitleKeyword>,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            brand: "my-blog.dev".to_string(),
            series_segment: "posts".to_string(),
            social: SocialLinks::default(),
            defaults: DefaultsConfig::default(),
            categories: stock_categories(),
            title_keywords: stock_title_keywords(),
        }
    }
}

impl CoverConfig {
    /// Category resolver over this config's tables.
    pub fn resolver(&self) -> Result<CategoryResolver<'_>, CategoryError> {
        CategoryResolver::new(&self.categories, &self.title_keywords, &self.series_segment)
    }

    /// Social links for the footer, `None` when every identity is absent.
    pub fn social_links(&self) -> Option<SocialLinks> {
        (!self.social.is_empty()).then(|| self.social.clone())
    }

    /// Validate config values are usable for rendering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.categories.contains_key(DEFAULT_CATEGORY) {
            return Err(ConfigError::MissingDefaultCategory);
        }
        if self.series_segment.trim().is_empty() {
            return Err(ConfigError::Validation(
                "series_segment must not be empty".into(),
            ));
        }
        for (slug, entry) in &self.categories {
            if slug.to_lowercase() != *slug {
                return Err(ConfigError::Validation(format!(
                    "category key '{slug}' must be lowercase"
                )));
            }
            if entry.colors.len() != 2 {
                return Err(ConfigError::Validation(format!(
                    "categories.{slug}.colors must have exactly 2 entries, found {}",
                    entry.colors.len()
                )));
            }
            if let Some(bad) = entry.colors.iter().find(|c| Rgb::from_hex(c).is_none()) {
                return Err(ConfigError::Validation(format!(
                    "categories.{slug}.colors: '{bad}' is not a #RRGGBB color"
                )));
            }
        }
        for TitleKeyword { keyword, category } in &self.title_keywords {
            if keyword.to_lowercase() != *keyword {
                return Err(ConfigError::Validation(format!(
                    "title keyword '{keyword}' must be lowercase"
                )));
            }
            if !self.categories.contains_key(category) {
                log::warn!("title keyword '{keyword}' points at unknown category '{category}'");
            }
        }
        Ok(())
    }
}

/// Social identities for the cover footer. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        [&self.github, &self.linkedin, &self.email]
            .iter()
            .all(|v| v.as_deref().is_none_or(str::is_empty))
    }
}

/// Defaults for CLI options that were not given explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub template: String,
    pub format: FormatSelection,
    pub output_dir: String,
    /// Directory holding one subdirectory per series.
    pub content_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            template: "minimal".to_string(),
            format: FormatSelection::Both,
            output_dir: "covers".to_string(),
            content_dir: "content/posts".to_string(),
        }
    }
}

fn stock_categories() -> BTreeMap<String, CategoryEntry> {
    let rows: &[(&str, [&str; 2], &str, &str)] = &[
        ("kafka", ["#8B5CF6", "#F59E0B"], "📡", "Kafka Series"),
        ("keycloak", ["#DC2626", "#EC4899"], "🔑", "Security"),
        ("security", ["#7F1D1D", "#DC2626"], "🔒", "Security"),
        ("kubernetes", ["#2563EB", "#06B6D4"], "☸️", "Cloud Native"),
        ("cloud native", ["#2563EB", "#06B6D4"], "☁️", "Cloud Native"),
        ("testing", ["#059669", "#10B981"], "🧪", "Testing"),
        ("e2e testing", ["#059669", "#10B981"], "🎯", "E2E Testing"),
        ("quality engineering", ["#059669", "#10B981"], "✅", "Quality Engineering"),
        ("devops", ["#4F46E5", "#7C3AED"], "🚀", "DevOps"),
        ("cicd", ["#4F46E5", "#7C3AED"], "🔄", "CI/CD"),
        ("ci/cd", ["#4F46E5", "#7C3AED"], "🔄", "CI/CD"),
        ("web development", ["#0891B2", "#14B8A6"], "🌐", "Web Development"),
        ("frontend", ["#0891B2", "#14B8A6"], "⚛️", "Frontend"),
        ("backend", ["#0891B2", "#14B8A6"], "⚙️", "Backend"),
        ("observability", ["#0E7490", "#06B6D4"], "📊", "Observability"),
        ("monitoring", ["#0E7490", "#06B6D4"], "📈", "Monitoring"),
        ("platform engineering", ["#6D28D9", "#A855F7"], "🏗️", "Platform Engineering"),
        ("homelab", ["#047857", "#34D399"], "🏠", "Homelab"),
        ("infrastruttura", ["#64748B", "#94A3B8"], "🖥️", "Infrastructure"),
        ("infrastructure", ["#64748B", "#94A3B8"], "🖥️", "Infrastructure"),
        ("performance engineering", ["#EA580C", "#FB923C"], "⚡", "Performance"),
        ("event-driven", ["#8B5CF6", "#F59E0B"], "📡", "Event-Driven"),
        ("identity management", ["#DC2626", "#EC4899"], "🆔", "Identity"),
        ("automazione", ["#4F46E5", "#7C3AED"], "🤖", "Automation"),
        ("automation", ["#4F46E5", "#7C3AED"], "🤖", "Automation"),
        (DEFAULT_CATEGORY, ["#475569", "#94A3B8"], "📝", "Article"),
    ];
    rows.iter()
        .map(|(slug, colors, icon, label)| {
            (slug.to_string(), CategoryEntry::new(*colors, icon, label))
        })
        .collect()
}

fn stock_title_keywords() -> Vec<TitleKeyword> {
    [
        ("kafka", "kafka"),
        ("keycloak", "keycloak"),
        ("kubernetes", "kubernetes"),
        ("k8s", "kubernetes"),
        ("playwright", "testing"),
        ("testing", "testing"),
        ("opentelemetry", "observability"),
        ("otel", "observability"),
        ("cluster api", "kubernetes"),
        ("capi", "kubernetes"),
        ("vue", "web development"),
    ]
    .iter()
    .map(|(keyword, category)| TitleKeyword::new(keyword, category))
    .collect()
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(CoverConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<CoverConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CoverConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit file path. The file must exist.
pub fn load_config_file(path: &Path) -> Result<CoverConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Load `cover.toml` from `dir`, falling back to stock defaults when absent.
pub fn load_config(dir: &Path) -> Result<CoverConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        load_config_file(&path)
    } else {
        resolve_config(stock_defaults_value(), None)
    }
}

/// Returns a fully-commented stock `cover.toml`.
///
/// Used by the `gen-config` CLI command. Only a few categories are listed;
/// the rest of the stock table stays active through merging.
pub fn stock_config_toml() -> &'static str {
    r##"# Cover Generator Configuration
# =============================
# All settings are optional. Values shown below are the defaults.
# Tables merge with the built-in defaults; arrays replace them.
# Unknown keys will cause an error.

# Brand name shown first in every cover footer.
brand = "my-blog.dev"

# Article paths look like <content>/<series_segment>/<series>/<article>.
# The directory after this segment selects the category.
series_segment = "posts"

# ---------------------------------------------------------------------------
# Footer social identities. Omit a key to hide its icon.
# ---------------------------------------------------------------------------
[social]
# github = "octocat"
# linkedin = "octocat"
# email = "octo@example.com"

# ---------------------------------------------------------------------------
# CLI defaults
# ---------------------------------------------------------------------------
[defaults]
# Template id, see `cover-gen templates`.
template = "minimal"

# linkedin (1200x627), blog (1280x720), or both.
format = "both"

# Where generated images are written.
output_dir = "covers"

# Directory with one subdirectory per series, used by `batch`.
content_dir = "content/posts"

# ---------------------------------------------------------------------------
# Categories, keyed by lowercase slug.
# colors = [primary, secondary] as #RRGGBB; label defaults to the slug.
# A "default" entry is required.
# ---------------------------------------------------------------------------
[categories.kafka]
colors = ["#8B5CF6", "#F59E0B"]
icon = "📡"
label = "Kafka Series"

[categories.testing]
colors = ["#059669", "#10B981"]
icon = "🧪"
label = "Testing"

[categories.default]
colors = ["#475569", "#94A3B8"]
icon = "📝"
label = "Article"

# ---------------------------------------------------------------------------
# Title keywords, checked in order against the lowercased title.
# Defining any entry here replaces the whole built-in list.
# ---------------------------------------------------------------------------
# [[title_keywords]]
# keyword = "kafka"
# category = "kafka"
"##
}
