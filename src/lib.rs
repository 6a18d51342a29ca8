//! # Cover Gen
//!
//! Generates social-media and blog cover images for markdown articles. Each
//! article directory holds an `index.md`; its front matter and location pick
//! a category, the category picks colors and an icon, and one of sixteen
//! templates lays it all out at LinkedIn (1200×627) or blog (1280×720) size.
//!
//! # Pipeline
//!
//! ```text
//! index.md ─▶ frontmatter ─▶ category ─▶ RenderData ─▶ templates ─▶ raster ─▶ PNG
//!                              ▲                          ▲
//!                          cover.toml                 registry
//! ```
//!
//! Everything up to the rendered HTML document is pure and deterministic: the
//! same article and config always produce byte-identical HTML. Only the last
//! step touches a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Line-oriented `key: value` front matter parser, title cleanup, reading time |
//! | [`category`] | Five-rule category resolution: series path, tags, title keywords, category field, default |
//! | [`config`] | `cover.toml` loading over stock defaults, validation, the stock category table |
//! | [`templates`] | Template registry and the sixteen Maud layouts |
//! | [`raster`] | `Rasterizer` trait: headless Chrome screenshots or plain HTML output |
//! | [`cover`] | One article in, one file per requested format out |
//! | [`batch`] | Every article of a series, failures isolated |
//! | [`export`] | All templates rendered with sample data, plus a gallery page |
//! | [`types`] | Output formats and their pixel dimensions |
//! | [`color`] | `#RRGGBB` parsing |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Templates Are Functions
//!
//! A template is a static stylesheet plus a `fn(&RenderData) -> Markup`. Maud
//! escapes every interpolated value, so titles and labels can never break the
//! markup. Colors reach the stylesheet only as CSS custom properties
//! (`--primary`, `--primary-rgb`, ...) written from parsed [`color::Rgb`]
//! values, never as raw config text.
//!
//! ## First Rule Wins
//!
//! Category resolution is an ordered list of rules. An article inside a known
//! series always gets the series look, even when its tags say otherwise, so a
//! series reads as one set. Later rules only fill in when earlier ones have
//! nothing to say.
//!
//! ## The Browser Is Optional
//!
//! Rasterizing needs Chrome. Every command accepts `--html-only`, which swaps
//! in a rasterizer that writes the HTML document itself, so templates can be
//! previewed and tested on machines without a browser.

pub mod batch;
pub mod category;
pub mod color;
pub mod config;
pub mod cover;
pub mod export;
pub mod frontmatter;
pub mod output;
pub mod raster;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
