//! Cover templates.
//!
//! A template is a pure function from [`RenderData`] and [`Dimensions`] to a
//! self-contained HTML document: inline CSS, inline SVG icons, no external
//! assets. All sixteen built-in templates share one document shell:
//!
//! ```text
//! <!DOCTYPE html>
//! <html>
//!   <head>
//!     <style>
//!       :root { --primary; --secondary; --primary-rgb; --secondary-rgb }
//!       html, body, .cover sized to exactly width×height, overflow hidden
//!       base.css, then the template's own stylesheet
//!     </style>
//!   </head>
//!   <body><div class="cover"> layout markup </div></body>
//! </html>
//! ```
//!
//! Template stylesheets live in `static/templates/` and only reference the
//! palette through the CSS custom properties above, so colors are validated
//! once in [`Palette::from_colors`] and never spliced into CSS as raw text.
//! Everything user-provided in the layout markup goes through maud and is
//! escaped.
//!
//! ## Variants
//!
//! | Module       | Templates                                        |
//! |--------------|--------------------------------------------------|
//! | `gradient`   | minimal, glass, mesh, duotone, stack, wave       |
//! | `dark`       | dark, neon, code, terminal, retro                |
//! | `paper`      | split, magazine, polaroid, blueprint, outline    |

mod dark;
mod footer;
mod gradient;
mod paper;

use crate::color::Rgb;
use crate::config::SocialLinks;
use crate::types::Dimensions;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::borrow::Cow;
use std::collections::BTreeMap;
use thiserror::Error;

const BASE_CSS: &str = include_str!("../../static/templates/base.css");

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{id}' not found (available: {})", .available.join(", "))]
    NotFound { id: String, available: Vec<String> },
    #[error("duplicate template id '{0}'")]
    Duplicate(String),
    #[error("template id '{0}' must be non-empty lowercase")]
    InvalidId(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("expected 2 colors, got {0}")]
    MissingColors(usize),
    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

/// Everything a template needs to draw one cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderData {
    pub title: String,
    pub category_label: String,
    pub icon: String,
    /// `[primary, secondary]` hex colors.
    pub colors: Vec<String>,
    pub brand: String,
    pub social: Option<SocialLinks>,
    /// Reading time in minutes.
    pub read_time: u32,
}

/// The two validated accent colors of a cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl Palette {
    /// Validate the first two entries of `colors`. Extra entries are ignored.
    pub fn from_colors(colors: &[String]) -> Result<Self, RenderError> {
        let [primary, secondary, ..] = colors else {
            return Err(RenderError::MissingColors(colors.len()));
        };
        let parse = |hex: &String| {
            Rgb::from_hex(hex).ok_or_else(|| RenderError::InvalidColor(hex.clone()))
        };
        Ok(Self {
            primary: parse(primary)?,
            secondary: parse(secondary)?,
        })
    }

    /// The `:root` custom properties every stylesheet reads colors from.
    fn css_vars(&self) -> String {
        format!(
            ":root {{ --primary: {}; --secondary: {}; --primary-rgb: {}; --secondary-rgb: {}; }}\n",
            self.primary,
            self.secondary,
            self.primary.triplet(),
            self.secondary.triplet()
        )
    }
}

/// Builds the markup placed inside `div.cover`.
pub type Layout = fn(&RenderData) -> Markup;

/// A named template: stylesheet plus layout.
#[derive(Debug, Clone)]
pub struct TemplateDef {
    pub id: String,
    pub name: String,
    pub stylesheet: Cow<'static, str>,
    pub layout: Layout,
}

impl TemplateDef {
    pub fn new(id: &str, name: &str, stylesheet: impl Into<Cow<'static, str>>, layout: Layout) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            stylesheet: stylesheet.into(),
            layout,
        }
    }

    /// Render a complete HTML document sized to `dims`.
    ///
    /// Output is byte-identical for identical inputs.
    pub fn render(&self, data: &RenderData, dims: Dimensions) -> Result<String, RenderError> {
        let palette = Palette::from_colors(&data.colors)?;
        Ok(document(self, data, &palette, dims).into_string())
    }
}

fn document(def: &TemplateDef, data: &RenderData, palette: &Palette, dims: Dimensions) -> Markup {
    let frame = format!(
        "html, body, .cover {{ width: {w}px; height: {h}px; overflow: hidden; }}\n",
        w = dims.width,
        h = dims.height
    );
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (data.title) }
                style {
                    (PreEscaped(palette.css_vars()))
                    (PreEscaped(BASE_CSS))
                    (PreEscaped(frame))
                    (PreEscaped(def.stylesheet.as_ref()))
                }
            }
            body {
                div.cover {
                    ((def.layout)(data))
                }
            }
        }
    }
}

/// Lookup table of templates keyed by lowercase id.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateDef>,
}

impl TemplateRegistry {
    /// Build a registry from explicit definitions. Ids must be unique and lowercase.
    pub fn new(defs: impl IntoIterator<Item = TemplateDef>) -> Result<Self, TemplateError> {
        let mut templates = BTreeMap::new();
        for def in defs {
            if def.id.is_empty() || def.id.to_lowercase() != def.id {
                return Err(TemplateError::InvalidId(def.id));
            }
            if templates.contains_key(&def.id) {
                return Err(TemplateError::Duplicate(def.id));
            }
            templates.insert(def.id.clone(), def);
        }
        Ok(Self { templates })
    }

    /// The sixteen shipped templates.
    pub fn builtin() -> Self {
        let templates = builtin_templates()
            .into_iter()
            .map(|def| (def.id.clone(), def))
            .collect();
        Self { templates }
    }

    /// Look up a template. Ids are matched case-insensitively.
    pub fn get(&self, id: &str) -> Result<&TemplateDef, TemplateError> {
        self.templates
            .get(&id.to_lowercase())
            .ok_or_else(|| TemplateError::NotFound {
                id: id.to_string(),
                available: self.ids().map(str::to_string).collect(),
            })
    }

    /// Ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &TemplateDef> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn builtin_templates() -> Vec<TemplateDef> {
    vec![
        TemplateDef::new("minimal", "Minimal Gradient", gradient::MINIMAL_CSS, gradient::minimal),
        TemplateDef::new("dark", "Dark Geometric", dark::DARK_CSS, dark::dark),
        TemplateDef::new("split", "Split Color", paper::SPLIT_CSS, paper::split),
        TemplateDef::new("glass", "Glassmorphism", gradient::GLASS_CSS, gradient::glass),
        TemplateDef::new("neon", "Neon Cyber", dark::NEON_CSS, dark::neon),
        TemplateDef::new("magazine", "Magazine Style", paper::MAGAZINE_CSS, paper::magazine),
        TemplateDef::new("code", "Code Editor", dark::CODE_CSS, dark::code),
        TemplateDef::new("mesh", "Gradient Mesh", gradient::MESH_CSS, gradient::mesh),
        TemplateDef::new("terminal", "Terminal", dark::TERMINAL_CSS, dark::terminal),
        TemplateDef::new("polaroid", "Polaroid", paper::POLAROID_CSS, paper::polaroid),
        TemplateDef::new("blueprint", "Blueprint", paper::BLUEPRINT_CSS, paper::blueprint),
        TemplateDef::new("duotone", "Duotone", gradient::DUOTONE_CSS, gradient::duotone),
        TemplateDef::new("retro", "Retro CRT", dark::RETRO_CSS, dark::retro),
        TemplateDef::new("wave", "Wave", gradient::WAVE_CSS, gradient::wave),
        TemplateDef::new("outline", "Outline", paper::OUTLINE_CSS, paper::outline),
        TemplateDef::new("stack", "Stack", gradient::STACK_CSS, gradient::stack),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_render_data;
    use crate::types::Format;

    const LINKEDIN: Dimensions = Format::Linkedin.dimensions();

    fn bare_layout(data: &RenderData) -> Markup {
        html! { p { (data.title) } }
    }

    // =========================================================================
    // Registry
    // =========================================================================

    #[test]
    fn builtin_has_sixteen_sorted_templates() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 16);
        let ids: Vec<&str> = registry.ids().collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.first(), Some(&"blueprint"));
        assert_eq!(ids.last(), Some(&"wave"));
    }

    #[test]
    fn builtin_display_names() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.get("minimal").unwrap().name, "Minimal Gradient");
        assert_eq!(registry.get("retro").unwrap().name, "Retro CRT");
        assert_eq!(registry.get("glass").unwrap().name, "Glassmorphism");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.get("NEON").unwrap().id, "neon");
    }

    #[test]
    fn unknown_template_lists_available() {
        let registry = TemplateRegistry::builtin();
        let err = registry.get("fancy").unwrap_err();
        let TemplateError::NotFound { id, available } = &err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert_eq!(id, "fancy");
        assert_eq!(available.len(), 16);
        assert!(err.to_string().contains("minimal"));
    }

    #[test]
    fn new_rejects_duplicates() {
        let result = TemplateRegistry::new([
            TemplateDef::new("one", "One", "", bare_layout),
            TemplateDef::new("one", "Again", "", bare_layout),
        ]);
        assert_eq!(result.unwrap_err(), TemplateError::Duplicate("one".into()));
    }

    #[test]
    fn new_rejects_uppercase_id() {
        let result = TemplateRegistry::new([TemplateDef::new("Loud", "Loud", "", bare_layout)]);
        assert!(matches!(result, Err(TemplateError::InvalidId(_))));
    }

    #[test]
    fn custom_registry_renders_custom_template() {
        let registry =
            TemplateRegistry::new([TemplateDef::new("bare", "Bare", ".x { color: red; }", bare_layout)])
                .unwrap();
        let html = registry
            .get("bare")
            .unwrap()
            .render(&sample_render_data(), LINKEDIN)
            .unwrap();
        assert!(html.contains(".x { color: red; }"));
        assert!(html.contains("<p>Kafka in Pratica 1</p>"));
    }

    #[test]
    fn empty_registry() {
        let registry = TemplateRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.get("minimal").is_err());
    }

    // =========================================================================
    // Palette
    // =========================================================================

    #[test]
    fn palette_requires_two_colors() {
        let one = vec!["#8B5CF6".to_string()];
        assert_eq!(Palette::from_colors(&one), Err(RenderError::MissingColors(1)));
        assert_eq!(Palette::from_colors(&[]), Err(RenderError::MissingColors(0)));
    }

    #[test]
    fn palette_rejects_invalid_hex() {
        let colors = vec!["#8B5CF6".to_string(), "red; } body { x".to_string()];
        assert!(matches!(
            Palette::from_colors(&colors),
            Err(RenderError::InvalidColor(c)) if c.starts_with("red")
        ));
    }

    #[test]
    fn palette_css_vars() {
        let colors = vec!["#8B5CF6".to_string(), "#F59E0B".to_string()];
        let css = Palette::from_colors(&colors).unwrap().css_vars();
        assert!(css.contains("--primary: #8B5CF6;"));
        assert!(css.contains("--secondary-rgb: 245, 158, 11;"));
    }

    // =========================================================================
    // Every built-in template
    // =========================================================================

    #[test]
    fn every_template_contains_title_label_and_read_time() {
        let data = sample_render_data();
        for def in TemplateRegistry::builtin().iter() {
            let html = def.render(&data, LINKEDIN).unwrap();
            assert!(html.contains(&data.title), "{}: missing title", def.id);
            assert!(html.contains(&data.category_label), "{}: missing label", def.id);
            assert!(html.contains("12 min"), "{}: missing read time", def.id);
            assert!(html.contains(&data.icon), "{}: missing icon", def.id);
            assert!(html.contains(&data.brand), "{}: missing brand", def.id);
        }
    }

    #[test]
    fn every_template_is_sized_to_dimensions() {
        let data = sample_render_data();
        for def in TemplateRegistry::builtin().iter() {
            let html = def.render(&data, Format::Blog.dimensions()).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"), "{}", def.id);
            assert!(
                html.contains("width: 1280px; height: 720px; overflow: hidden;"),
                "{}: not sized",
                def.id
            );
        }
    }

    #[test]
    fn every_template_is_deterministic() {
        let data = sample_render_data();
        for def in TemplateRegistry::builtin().iter() {
            let first = def.render(&data, LINKEDIN).unwrap();
            let second = def.render(&data, LINKEDIN).unwrap();
            assert_eq!(first, second, "{}", def.id);
        }
    }

    #[test]
    fn every_template_uses_the_palette() {
        let data = sample_render_data();
        for def in TemplateRegistry::builtin().iter() {
            assert!(
                def.stylesheet.contains("var(--primary") || def.stylesheet.contains("var(--secondary"),
                "{}: stylesheet ignores the palette",
                def.id
            );
            let html = def.render(&data, LINKEDIN).unwrap();
            assert!(html.contains("--primary: #8B5CF6;"), "{}", def.id);
        }
    }

    #[test]
    fn every_template_escapes_user_text() {
        let mut data = sample_render_data();
        data.title = "<script>alert('x')</script>".to_string();
        data.category_label = "<b>label</b>".to_string();
        data.brand = "a&b".to_string();
        for def in TemplateRegistry::builtin().iter() {
            let html = def.render(&data, LINKEDIN).unwrap();
            assert!(!html.contains("<script>"), "{}: title not escaped", def.id);
            assert!(html.contains("&lt;script&gt;"), "{}", def.id);
            assert!(!html.contains("<b>label"), "{}: label not escaped", def.id);
            assert!(html.contains("a&amp;b"), "{}: brand not escaped", def.id);
        }
    }

    #[test]
    fn every_template_rejects_missing_colors() {
        let mut data = sample_render_data();
        data.colors.truncate(1);
        for def in TemplateRegistry::builtin().iter() {
            assert_eq!(
                def.render(&data, LINKEDIN),
                Err(RenderError::MissingColors(1)),
                "{}",
                def.id
            );
        }
    }

    #[test]
    fn kafka_scenario_renders_title_and_label() {
        let html = TemplateRegistry::builtin()
            .get("minimal")
            .unwrap()
            .render(&sample_render_data(), LINKEDIN)
            .unwrap();
        assert!(html.contains("Kafka in Pratica 1"));
        assert!(html.contains("Kafka Series"));
        assert!(html.contains("width: 1200px; height: 627px;"));
    }
}
