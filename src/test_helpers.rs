//! Shared test utilities for the cover-gen test suite.
//!
//! Provides fixture setup, article writers, and canned render data.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let article = tmp.path().join("content/posts/kafka/01-intro");
//!
//! let other = write_article(tmp.path(), "content/posts/rust/01-hello", "---\ntitle: Hi\n---\n");
//! let data = sample_render_data();
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SocialLinks;
use crate::templates::RenderData;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to `<tmp>/content` and return the temp directory.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, &tmp.path().join("content")).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `<root>/<rel>/index.md` with `content` and return the article directory.
pub fn write_article(root: &Path, rel: &str, content: &str) -> PathBuf {
    let dir = root.join(rel);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.md"), content).unwrap();
    dir
}

// =========================================================================
// Render data
// =========================================================================

/// Kafka-series render data with every social identity set and a 12 minute
/// read time.
pub fn sample_render_data() -> RenderData {
    RenderData {
        title: "Kafka in Pratica 1".to_string(),
        category_label: "Kafka Series".to_string(),
        icon: "📡".to_string(),
        colors: vec!["#8B5CF6".to_string(), "#F59E0B".to_string()],
        brand: "my-blog.dev".to_string(),
        social: Some(SocialLinks {
            github: Some("octocat".to_string()),
            linkedin: Some("octo-linked".to_string()),
            email: Some("octo@example.com".to_string()),
        }),
        read_time: 12,
    }
}
