//! Category resolution: article metadata → colors, icon and label.
//!
//! ## Resolution priority
//!
//! Rules are tried in order and the first hit wins. Resolution never fails:
//! when nothing matches, the mandatory `default` entry is used.
//!
//! 1. **Series path**: the directory after the series segment
//!    (`content/posts/<series>/...`). Series directories are curated by hand,
//!    so they are the most reliable signal.
//! 2. **Tags**: the first tag, in document order, that names a category.
//! 3. **Title keywords**: the first keyword in table order that occurs in the
//!    lowercased title and points at an existing category.
//! 4. **Categories field**: the first `categories` entry that names a
//!    category. Checked last because it usually repeats the tags.
//! 5. **Default**.
//!
//! All lookups are against lowercase slugs.

use crate::frontmatter::FrontMatter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path};
use thiserror::Error;

/// Key of the fallback entry every category table must contain.
pub const DEFAULT_CATEGORY: &str = "default";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CategoryError {
    #[error("category table has no 'default' entry")]
    MissingDefault,
}

/// One row of the category table, as written in `cover.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryEntry {
    /// `[primary, secondary]` hex colors.
    pub colors: Vec<String>,
    /// Emoji or glyph shown on the cover.
    pub icon: String,
    /// Display label. Derived from the slug when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CategoryEntry {
    pub fn new(colors: [&str; 2], icon: &str, label: &str) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            icon: icon.to_string(),
            label: Some(label.to_string()),
        }
    }
}

/// A title substring that maps to a category slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleKeyword {
    pub keyword: String,
    pub category: String,
}

impl TitleKeyword {
    pub fn new(keyword: &str, category: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            category: category.to_string(),
        }
    }
}

/// The presentation config a cover is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    pub colors: Vec<String>,
    pub icon: String,
    pub label: String,
}

/// Which rule produced a [`CategoryConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSource {
    SeriesPath(String),
    Tag(String),
    TitleKeyword { keyword: String, category: String },
    CategoryField(String),
    Default,
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSource::SeriesPath(slug) => write!(f, "series '{slug}'"),
            MatchSource::Tag(slug) => write!(f, "tag '{slug}'"),
            MatchSource::TitleKeyword { keyword, category } => {
                write!(f, "title keyword '{keyword}' → '{category}'")
            }
            MatchSource::CategoryField(slug) => write!(f, "category '{slug}'"),
            MatchSource::Default => f.write_str("default"),
        }
    }
}

/// A resolved config together with the rule that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: CategoryConfig,
    pub source: MatchSource,
}

/// Priority-ordered category matcher over a category table.
#[derive(Debug, Clone)]
pub struct CategoryResolver<'a> {
    categories: &'a BTreeMap<String, CategoryEntry>,
    title_keywords: &'a [TitleKeyword],
    series_segment: &'a str,
}

impl<'a> CategoryResolver<'a> {
    /// Build a resolver. Fails when the table lacks a `default` entry, which
    /// is what makes [`resolve`](Self::resolve) total.
    pub fn new(
        categories: &'a BTreeMap<String, CategoryEntry>,
        title_keywords: &'a [TitleKeyword],
        series_segment: &'a str,
    ) -> Result<Self, CategoryError> {
        if !categories.contains_key(DEFAULT_CATEGORY) {
            return Err(CategoryError::MissingDefault);
        }
        Ok(Self {
            categories,
            title_keywords,
            series_segment,
        })
    }

    pub fn resolve(&self, front_matter: &FrontMatter, article_path: &Path) -> CategoryConfig {
        self.resolve_with_source(front_matter, article_path).config
    }

    pub fn resolve_with_source(
        &self,
        front_matter: &FrontMatter,
        article_path: &Path,
    ) -> Resolution {
        let resolution = self.find_match(front_matter, article_path);
        log::debug!(
            "category for {}: {} (matched {})",
            article_path.display(),
            resolution.config.label,
            resolution.source
        );
        resolution
    }

    fn find_match(&self, front_matter: &FrontMatter, article_path: &Path) -> Resolution {
        if let Some(series) = series_from_path(article_path, self.series_segment)
            && let Some(entry) = self.categories.get(&series)
        {
            return self.hit(&series, entry, MatchSource::SeriesPath(series.clone()));
        }

        for tag in front_matter.list("tags") {
            let term = tag.to_lowercase();
            if let Some(entry) = self.categories.get(&term) {
                return self.hit(&term, entry, MatchSource::Tag(term.clone()));
            }
        }

        let title = front_matter.text("title").unwrap_or_default().to_lowercase();
        for TitleKeyword { keyword, category } in self.title_keywords {
            if !title.contains(keyword.as_str()) {
                continue;
            }
            if let Some(entry) = self.categories.get(category) {
                let source = MatchSource::TitleKeyword {
                    keyword: keyword.clone(),
                    category: category.clone(),
                };
                return self.hit(category, entry, source);
            }
        }

        for category in front_matter.list("categories") {
            let term = category.to_lowercase();
            if let Some(entry) = self.categories.get(&term) {
                return self.hit(&term, entry, MatchSource::CategoryField(term.clone()));
            }
        }

        let entry = &self.categories[DEFAULT_CATEGORY];
        self.hit(DEFAULT_CATEGORY, entry, MatchSource::Default)
    }

    fn hit(&self, slug: &str, entry: &CategoryEntry, source: MatchSource) -> Resolution {
        let label = entry
            .label
            .clone()
            .unwrap_or_else(|| capitalize_first(slug));
        Resolution {
            config: CategoryConfig {
                colors: entry.colors.clone(),
                icon: entry.icon.clone(),
                label,
            },
            source,
        }
    }
}

/// The lowercased path segment right after `series_segment`, if any.
pub fn series_from_path(path: &Path, series_segment: &str) -> Option<String> {
    let segments: Vec<&str> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();
    let index = segments.iter().position(|s| *s == series_segment)?;
    segments.get(index + 1).map(|s| s.to_lowercase())
}

/// Uppercase the first character only: `kafka` → `Kafka`.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::FieldValue;

    fn table() -> BTreeMap<String, CategoryEntry> {
        let mut map = BTreeMap::new();
        map.insert(
            "kafka".to_string(),
            CategoryEntry::new(["#8B5CF6", "#F59E0B"], "📡", "Kafka Series"),
        );
        map.insert(
            "testing".to_string(),
            CategoryEntry::new(["#059669", "#10B981"], "🧪", "Testing"),
        );
        map.insert(
            "kubernetes".to_string(),
            CategoryEntry::new(["#2563EB", "#06B6D4"], "☸️", "Cloud Native"),
        );
        map.insert(
            "homelab".to_string(),
            CategoryEntry {
                colors: vec!["#047857".to_string(), "#34D399".to_string()],
                icon: "🏠".to_string(),
                label: None,
            },
        );
        map.insert(
            DEFAULT_CATEGORY.to_string(),
            CategoryEntry::new(["#475569", "#94A3B8"], "📝", "Article"),
        );
        map
    }

    fn keywords() -> Vec<TitleKeyword> {
        vec![
            TitleKeyword::new("kafka", "kafka"),
            TitleKeyword::new("k8s", "kubernetes"),
            TitleKeyword::new("playwright", "testing"),
            TitleKeyword::new("nomad", "missing-category"),
        ]
    }

    fn fm(fields: &[(&str, FieldValue)]) -> FrontMatter {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn list(items: &[&str]) -> FieldValue {
        FieldValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn new_requires_default_entry() {
        let mut categories = table();
        categories.remove(DEFAULT_CATEGORY);
        let kw = keywords();
        let err = CategoryResolver::new(&categories, &kw, "posts").unwrap_err();
        assert_eq!(err, CategoryError::MissingDefault);
    }

    #[test]
    fn series_path_wins_for_every_slug() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        for (slug, entry) in &categories {
            let path = Path::new("content/posts").join(slug).join("01-article");
            let config = resolver.resolve(&FrontMatter::default(), &path);
            assert_eq!(config.colors, entry.colors, "colors for {slug}");
            assert_eq!(config.icon, entry.icon, "icon for {slug}");
        }
    }

    #[test]
    fn series_path_beats_conflicting_tag() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let front = fm(&[("tags", list(&["testing"]))]);
        let res = resolver.resolve_with_source(&front, Path::new("content/posts/kafka/01-intro"));
        assert_eq!(res.config.label, "Kafka Series");
        assert_eq!(res.source, MatchSource::SeriesPath("kafka".to_string()));
    }

    #[test]
    fn series_segment_is_case_folded() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let config = resolver.resolve(&FrontMatter::default(), Path::new("content/posts/Kafka/x"));
        assert_eq!(config.label, "Kafka Series");
    }

    #[test]
    fn series_label_falls_back_to_capitalized_slug() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let config = resolver.resolve(&FrontMatter::default(), Path::new("posts/homelab/nas"));
        assert_eq!(config.label, "Homelab");
        assert_eq!(config.icon, "🏠");
    }

    #[test]
    fn custom_series_segment() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "articles").unwrap();
        let config =
            resolver.resolve(&FrontMatter::default(), Path::new("site/articles/testing/a"));
        assert_eq!(config.label, "Testing");
        let config = resolver.resolve(&FrontMatter::default(), Path::new("site/posts/testing/a"));
        assert_eq!(config.label, "Article");
    }

    #[test]
    fn unknown_series_falls_through_to_tags() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let front = fm(&[("tags", list(&["Unknown", "TESTING", "kafka"]))]);
        let res = resolver.resolve_with_source(&front, Path::new("content/posts/misc/a"));
        assert_eq!(res.config.label, "Testing");
        assert_eq!(res.source, MatchSource::Tag("testing".to_string()));
    }

    #[test]
    fn tags_beat_title_keywords() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let front = fm(&[
            ("title", text("Kafka consumers")),
            ("tags", list(&["testing"])),
        ]);
        let config = resolver.resolve(&front, Path::new("drafts/a"));
        assert_eq!(config.label, "Testing");
    }

    #[test]
    fn title_keywords_follow_table_order() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let front = fm(&[("title", text("Playwright tests for Kafka on K8s"))]);
        let res = resolver.resolve_with_source(&front, Path::new("drafts/a"));
        assert_eq!(
            res.source,
            MatchSource::TitleKeyword {
                keyword: "kafka".to_string(),
                category: "kafka".to_string()
            }
        );
    }

    #[test]
    fn title_keyword_with_unknown_category_is_skipped() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let front = fm(&[("title", text("Nomad clusters"))]);
        let res = resolver.resolve_with_source(&front, Path::new("drafts/a"));
        assert_eq!(res.source, MatchSource::Default);
    }

    #[test]
    fn title_keywords_beat_categories_field() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let front = fm(&[
            ("title", text("Scaling k8s")),
            ("categories", list(&["testing"])),
        ]);
        let config = resolver.resolve(&front, Path::new("drafts/a"));
        assert_eq!(config.label, "Cloud Native");
    }

    #[test]
    fn categories_field_is_used_last() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let front = fm(&[
            ("title", text("Notes")),
            ("categories", list(&["Nope", "Kubernetes"])),
        ]);
        let res = resolver.resolve_with_source(&front, Path::new("drafts/a"));
        assert_eq!(res.config.label, "Cloud Native");
        assert_eq!(res.source, MatchSource::CategoryField("kubernetes".to_string()));
    }

    #[test]
    fn nothing_matches_returns_default() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let front = fm(&[
            ("title", text("Gardening")),
            ("tags", list(&["plants"])),
            ("categories", list(&["life"])),
        ]);
        let res = resolver.resolve_with_source(&front, Path::new("content/posts/garden/a"));
        assert_eq!(res.source, MatchSource::Default);
        assert_eq!(res.config.label, "Article");
        assert_eq!(res.config.colors, vec!["#475569", "#94A3B8"]);
    }

    #[test]
    fn empty_front_matter_and_path_returns_default() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let config = resolver.resolve(&FrontMatter::default(), Path::new(""));
        assert_eq!(config.icon, "📝");
    }

    #[test]
    fn kafka_scenario_matches_table_entry_exactly() {
        let categories = table();
        let kw = keywords();
        let resolver = CategoryResolver::new(&categories, &kw, "posts").unwrap();
        let front = fm(&[("title", text("Kafka in Pratica 1"))]);
        let config = resolver.resolve(&front, Path::new("content/posts/kafka/01-intro"));
        assert_eq!(
            config,
            CategoryConfig {
                colors: vec!["#8B5CF6".to_string(), "#F59E0B".to_string()],
                icon: "📡".to_string(),
                label: "Kafka Series".to_string(),
            }
        );
    }

    #[test]
    fn series_from_path_cases() {
        assert_eq!(
            series_from_path(Path::new("content/posts/kafka/01"), "posts"),
            Some("kafka".to_string())
        );
        assert_eq!(series_from_path(Path::new("content/posts"), "posts"), None);
        assert_eq!(series_from_path(Path::new("content/blog/kafka"), "posts"), None);
        assert_eq!(
            series_from_path(Path::new("/abs/posts/Kafka/"), "posts"),
            Some("kafka".to_string())
        );
    }

    #[test]
    fn capitalize_first_only_touches_first_char() {
        assert_eq!(capitalize_first("kafka"), "Kafka");
        assert_eq!(capitalize_first("event-driven"), "Event-driven");
        assert_eq!(capitalize_first(""), "");
    }
}
