//! Shared types used across the pipeline: output formats and their pixel sizes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output size in CSS pixels. Renderers lay out to exactly this box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A canonical cover format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// LinkedIn share image, 1200×627.
    Linkedin,
    /// Blog header image, 1280×720.
    Blog,
}

impl Format {
    pub const fn dimensions(self) -> Dimensions {
        match self {
            Format::Linkedin => Dimensions::new(1200, 627),
            Format::Blog => Dimensions::new(1280, 720),
        }
    }

    /// Suffix used in output file names (`<slug>-<name>.png`).
    pub const fn name(self) -> &'static str {
        match self {
            Format::Linkedin => "linkedin",
            Format::Blog => "blog",
        }
    }
}

/// Which formats to produce for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatSelection {
    Linkedin,
    Blog,
    #[default]
    Both,
}

impl FormatSelection {
    /// Formats in generation order: LinkedIn first, then blog.
    pub fn formats(self) -> Vec<Format> {
        match self {
            FormatSelection::Linkedin => vec![Format::Linkedin],
            FormatSelection::Blog => vec![Format::Blog],
            FormatSelection::Both => vec![Format::Linkedin, Format::Blog],
        }
    }
}

impl fmt::Display for FormatSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatSelection::Linkedin => "linkedin",
            FormatSelection::Blog => "blog",
            FormatSelection::Both => "both",
        };
        f.write_str(name)
    }
}
