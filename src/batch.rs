//! Batch generation over a series directory.
//!
//! A series is a directory under the content dir (`content/posts/kafka`).
//! Every directory below it that holds an `index.md` is an article; articles
//! may be nested. They are generated in path order, one at a time, sharing
//! a single rasterizer.
//!
//! One article failing never stops the batch: the error is recorded in the
//! [`BatchReport`] and generation moves on. Only problems with the series
//! itself (missing directory, no articles) are errors of the batch.
//!
//! Progress is reported through an optional channel so the CLI can print
//! while the batch runs.

use crate::config::CoverConfig;
use crate::cover::{ARTICLE_FILE, CoverError, CoverOptions, CoverReport, generate_cover};
use crate::raster::Rasterizer;
use crate::templates::TemplateRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("series '{series}' not found in {}", .dir.display())]
    SeriesNotFound { series: String, dir: PathBuf },
    #[error("no articles found in series '{0}'")]
    NoArticles(String),
}

/// A series directory and how many articles it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSummary {
    pub name: String,
    pub article_count: usize,
}

/// Progress notifications sent while a batch runs.
#[derive(Debug)]
pub enum BatchEvent {
    Started {
        series: String,
        articles: Vec<PathBuf>,
    },
    Generated {
        /// 1-based position in the batch.
        index: usize,
        report: CoverReport,
    },
    Failed {
        index: usize,
        article: PathBuf,
        error: String,
    },
}

/// An article that could not be generated.
#[derive(Debug)]
pub struct BatchFailure {
    pub article: PathBuf,
    pub error: CoverError,
}

#[derive(Debug)]
pub struct BatchReport {
    pub series: String,
    pub succeeded: Vec<CoverReport>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Article directories below `series_dir`, sorted by path.
///
/// The series directory itself is never an article, even if it holds an
/// `index.md` (series landing pages usually do).
pub fn find_articles(series_dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let mut articles = Vec::new();
    for entry in WalkDir::new(series_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() && entry.path().join(ARTICLE_FILE).is_file() {
            articles.push(entry.into_path());
        }
    }
    Ok(articles)
}

/// Series directories of `content_dir` that contain at least one article.
pub fn list_series(content_dir: &Path) -> Result<Vec<SeriesSummary>, BatchError> {
    let mut series = Vec::new();
    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let article_count = find_articles(&entry.path())?.len();
        if article_count > 0 {
            series.push(SeriesSummary {
                name: entry.file_name().to_string_lossy().into_owned(),
                article_count,
            });
        }
    }
    series.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(series)
}

/// Generate covers for every article of `series`.
pub fn run_batch(
    content_dir: &Path,
    series: &str,
    options: &CoverOptions,
    config: &CoverConfig,
    registry: &TemplateRegistry,
    rasterizer: &mut dyn Rasterizer,
    progress: Option<Sender<BatchEvent>>,
) -> Result<BatchReport, BatchError> {
    let series_dir = content_dir.join(series);
    if !series_dir.is_dir() {
        return Err(BatchError::SeriesNotFound {
            series: series.to_string(),
            dir: content_dir.to_path_buf(),
        });
    }
    let articles = find_articles(&series_dir)?;
    if articles.is_empty() {
        return Err(BatchError::NoArticles(series.to_string()));
    }

    let send = |event: BatchEvent| {
        if let Some(tx) = &progress {
            // Receiver hung up: nobody is listening, keep working.
            tx.send(event).ok();
        }
    };

    send(BatchEvent::Started {
        series: series.to_string(),
        articles: articles.clone(),
    });

    let mut report = BatchReport {
        series: series.to_string(),
        succeeded: Vec::new(),
        failed: Vec::new(),
    };

    for (i, article) in articles.into_iter().enumerate() {
        let index = i + 1;
        match generate_cover(&article, options, config, registry, rasterizer) {
            Ok(cover) => {
                send(BatchEvent::Generated {
                    index,
                    report: cover.clone(),
                });
                report.succeeded.push(cover);
            }
            Err(error) => {
                log::warn!("failed to generate cover for {}: {error}", article.display());
                send(BatchEvent::Failed {
                    index,
                    article: article.clone(),
                    error: error.to_string(),
                });
                report.failed.push(BatchFailure { article, error });
            }
        }
    }

    Ok(report)
}
