//! Single-article cover generation.
//!
//! ```text
//! <article>/index.md ──▶ FrontMatter ──▶ CategoryResolver ──▶ RenderData
//!                                                                 │
//!             <output>/<slug>-<format>.<ext> ◀── Rasterizer ◀── template
//! ```
//!
//! The template is looked up before anything is read, so a typo in
//! `--template` fails fast. Each requested format is rendered and written
//! in turn; LinkedIn first, then blog.

use crate::category::{CategoryError, MatchSource};
use crate::config::CoverConfig;
use crate::frontmatter::{FrontMatter, FrontMatterError, clean_title, estimate_reading_time};
use crate::raster::{RasterError, Rasterizer};
use crate::templates::{RenderData, RenderError, TemplateError, TemplateRegistry};
use crate::types::{Dimensions, Format, FormatSelection};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Markdown file every article directory must contain.
pub const ARTICLE_FILE: &str = "index.md";

#[derive(Error, Debug)]
pub enum CoverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("index.md not found in {}", .0.display())]
    ArticleNotFound(PathBuf),
    #[error("front matter error: {0}")]
    FrontMatter(#[from] FrontMatterError),
    #[error("no title found in front matter of {}", .0.display())]
    MissingTitle(PathBuf),
    #[error("category config error: {0}")]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("rasterization error: {0}")]
    Raster(#[from] RasterError),
}

/// An article directory with its parsed `index.md`.
#[derive(Debug, Clone)]
pub struct Article {
    pub dir: PathBuf,
    /// Directory name, used to name output files.
    pub slug: String,
    pub front_matter: FrontMatter,
    /// Full text of `index.md`, front matter included.
    pub content: String,
}

impl Article {
    pub fn load(dir: &Path) -> Result<Self, CoverError> {
        let file = dir.join(ARTICLE_FILE);
        if !file.is_file() {
            return Err(CoverError::ArticleNotFound(dir.to_path_buf()));
        }
        let content = fs::read_to_string(&file)?;
        let front_matter = FrontMatter::parse(&content)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            slug: article_slug(dir)?,
            front_matter,
            content,
        })
    }

    /// The display title: one surrounding quote stripped at each end, trimmed.
    pub fn title(&self) -> Result<String, CoverError> {
        self.front_matter
            .text("title")
            .map(clean_title)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CoverError::MissingTitle(self.dir.clone()))
    }
}

/// Last path component of `dir`, resolving `.` and `..` through the filesystem.
fn article_slug(dir: &Path) -> Result<String, CoverError> {
    let name = match dir.file_name() {
        Some(name) => name.to_os_string(),
        None => fs::canonicalize(dir)?
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "cover".into()),
    };
    Ok(name.to_string_lossy().into_owned())
}

/// Render data for an article, plus which category rule produced it.
#[derive(Debug, Clone)]
pub struct PreparedCover {
    pub data: RenderData,
    pub source: MatchSource,
}

/// Combine an article with the config into template input.
pub fn prepare(article: &Article, config: &CoverConfig) -> Result<PreparedCover, CoverError> {
    let title = article.title()?;
    let resolution = config
        .resolver()?
        .resolve_with_source(&article.front_matter, &article.dir);
    let data = RenderData {
        title,
        category_label: resolution.config.label,
        icon: resolution.config.icon,
        colors: resolution.config.colors,
        brand: config.brand.clone(),
        social: config.social_links(),
        read_time: estimate_reading_time(&article.content),
    };
    Ok(PreparedCover {
        data,
        source: resolution.source,
    })
}

/// What to generate for one article.
#[derive(Debug, Clone)]
pub struct CoverOptions {
    pub template: String,
    pub format: FormatSelection,
    pub output_dir: PathBuf,
}

impl CoverOptions {
    /// Options taken from the config's `[defaults]`.
    pub fn from_config(config: &CoverConfig) -> Self {
        Self {
            template: config.defaults.template.clone(),
            format: config.defaults.format,
            output_dir: PathBuf::from(&config.defaults.output_dir),
        }
    }
}

/// A file written for one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub format: Format,
    pub dimensions: Dimensions,
    pub path: PathBuf,
}

/// Summary of one generated article.
#[derive(Debug, Clone)]
pub struct CoverReport {
    pub slug: String,
    pub template: String,
    pub data: RenderData,
    pub source: MatchSource,
    pub files: Vec<GeneratedFile>,
}

/// Generate every requested format of one article's cover.
pub fn generate_cover(
    article_dir: &Path,
    options: &CoverOptions,
    config: &CoverConfig,
    registry: &TemplateRegistry,
    rasterizer: &mut dyn Rasterizer,
) -> Result<CoverReport, CoverError> {
    let template = registry.get(&options.template)?;
    let article = Article::load(article_dir)?;
    let PreparedCover { data, source } = prepare(&article, config)?;

    fs::create_dir_all(&options.output_dir)?;

    let mut files = Vec::new();
    for format in options.format.formats() {
        let dimensions = format.dimensions();
        let html = template.render(&data, dimensions)?;
        let bytes = rasterizer.rasterize(&html, dimensions)?;
        let path = options.output_dir.join(format!(
            "{}-{}.{}",
            article.slug,
            format.name(),
            rasterizer.file_extension()
        ));
        fs::write(&path, bytes)?;
        log::info!("wrote {} ({dimensions})", path.display());
        files.push(GeneratedFile {
            format,
            dimensions,
            path,
        });
    }

    Ok(CoverReport {
        slug: article.slug,
        template: template.id.clone(),
        data,
        source,
        files,
    })
}
