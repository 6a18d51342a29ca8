//! Template preview export.
//!
//! Renders every registered template with the same sample article at
//! LinkedIn size, for comparing designs side by side:
//!
//! ```text
//! <output>/
//! ├── index.html        # Gallery: one iframe card per template
//! ├── 01-blueprint.html
//! ├── 01-blueprint.png  # Only with a PNG rasterizer
//! ├── 02-code.html
//! └── ...
//! ```
//!
//! Files are numbered in template id order. HTML is rendered in parallel,
//! then written and rasterized sequentially. A template that fails to render
//! or rasterize is recorded in the report and skipped; the rest still export.

use crate::config::CoverConfig;
use crate::raster::Rasterizer;
use crate::templates::{RenderData, TemplateRegistry};
use crate::types::{Dimensions, Format};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const GALLERY_CSS: &str = include_str!("../static/gallery.css");

/// Size every preview is rendered at.
pub const PREVIEW_DIMENSIONS: Dimensions = Format::Linkedin.dimensions();

pub const SAMPLE_TITLE: &str = "Kafka in Pratica 1: Architettura di un Flusso di Eventi";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One template's exported files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedTemplate {
    pub id: String,
    pub name: String,
    pub html_file: PathBuf,
    /// `None` when previews were not requested.
    pub preview: Option<PathBuf>,
}

/// A template whose HTML or preview could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub file_name: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct ExportReport {
    pub output_dir: PathBuf,
    pub index_file: PathBuf,
    pub exported: Vec<ExportedTemplate>,
    pub failures: Vec<ExportFailure>,
}

/// The sample article previews are rendered with. Brand and social links
/// come from the config.
pub fn sample_data(config: &CoverConfig) -> RenderData {
    RenderData {
        title: SAMPLE_TITLE.to_string(),
        category_label: "Kafka Series".to_string(),
        icon: "📡".to_string(),
        colors: vec!["#8B5CF6".to_string(), "#F59E0B".to_string()],
        brand: config.brand.clone(),
        social: config.social_links(),
        read_time: 12,
    }
}

/// `NN-<id>`, numbered from 1.
fn file_stem(position: usize, id: &str) -> String {
    format!("{position:02}-{id}")
}

/// Export every template in `registry`. Pass a rasterizer to also write
/// PNG previews next to the HTML files.
pub fn export_templates(
    registry: &TemplateRegistry,
    data: &RenderData,
    output_dir: &Path,
    mut previews: Option<&mut dyn Rasterizer>,
) -> Result<ExportReport, ExportError> {
    fs::create_dir_all(output_dir)?;

    let defs: Vec<_> = registry.iter().collect();
    let rendered: Vec<_> = defs
        .par_iter()
        .map(|def| def.render(data, PREVIEW_DIMENSIONS))
        .collect();

    let mut exported = Vec::new();
    let mut failures = Vec::new();

    for (i, (def, result)) in defs.iter().zip(rendered).enumerate() {
        let stem = file_stem(i + 1, &def.id);
        let html_name = format!("{stem}.html");
        let html = match result {
            Ok(html) => html,
            Err(e) => {
                failures.push(ExportFailure {
                    file_name: html_name,
                    error: e.to_string(),
                });
                continue;
            }
        };
        let html_file = output_dir.join(&html_name);
        fs::write(&html_file, &html)?;
        log::info!("wrote {}", html_file.display());

        let preview = match previews.as_deref_mut() {
            Some(rasterizer) => {
                let preview_name = format!("{stem}.{}", rasterizer.file_extension());
                match rasterizer.rasterize(&html, PREVIEW_DIMENSIONS) {
                    Ok(bytes) => {
                        let path = output_dir.join(&preview_name);
                        fs::write(&path, bytes)?;
                        Some(path)
                    }
                    Err(e) => {
                        failures.push(ExportFailure {
                            file_name: preview_name,
                            error: e.to_string(),
                        });
                        None
                    }
                }
            }
            None => None,
        };

        exported.push(ExportedTemplate {
            id: def.id.clone(),
            name: def.name.clone(),
            html_file,
            preview,
        });
    }

    let index_file = output_dir.join("index.html");
    fs::write(&index_file, gallery(&exported, data).into_string())?;

    Ok(ExportReport {
        output_dir: output_dir.to_path_buf(),
        index_file,
        exported,
        failures,
    })
}

fn gallery(exported: &[ExportedTemplate], data: &RenderData) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Cover Templates" }
                style { (PreEscaped(GALLERY_CSS)) }
            }
            body {
                h1 { "Cover Templates" }
                p.subtitle { "Static HTML previews of all available templates" }
                div.grid {
                    @for template in exported {
                        @let href = template
                            .html_file
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        div.card {
                            iframe src=(href) title=(template.name) {}
                            div.card-info {
                                h3 { (template.name) }
                                p { "LinkedIn Format (" (PREVIEW_DIMENSIONS) ")" }
                                div.meta {
                                    span { (data.category_label) }
                                    span { (data.read_time) " min" }
                                }
                                a href=(href) target="_blank" { "Open Full Size" }
                            }
                        }
                    }
                }
            }
        }
    }
}
