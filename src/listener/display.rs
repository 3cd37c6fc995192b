//! Display regions and paragraph rendering.
//!
//! A [`DisplayRegion`] is the single output surface of a listener. Every
//! render replaces its whole content; nothing is patched in place.

use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::FeedError;

/// Output surface whose content is replaced wholesale on each render.
pub trait DisplayRegion: Send {
    /// Replaces the region's content with `html`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Render`] if the underlying surface cannot be
    /// written.
    fn replace(&mut self, html: &str) -> impl Future<Output = Result<(), FeedError>> + Send;
}

/// Renders payloads as consecutive `<p>` paragraphs, in order.
///
/// Payloads are inserted verbatim, without escaping. Each call builds its
/// output from a fresh accumulator.
#[must_use]
pub fn render_paragraphs(payloads: &[String]) -> String {
    let capacity = payloads.iter().map(|p| p.len() + 7).sum();
    let mut html = String::with_capacity(capacity);
    for payload in payloads {
        html.push_str("<p>");
        html.push_str(payload);
        html.push_str("</p>");
    }
    html
}

/// In-memory region. Unset until the first render.
#[derive(Debug, Default, Clone)]
pub struct MemoryRegion {
    content: Option<String>,
}

impl MemoryRegion {
    /// Creates an unset region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content, or `None` if nothing was ever rendered.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl DisplayRegion for MemoryRegion {
    async fn replace(&mut self, html: &str) -> Result<(), FeedError> {
        self.content = Some(html.to_string());
        Ok(())
    }
}

/// Region backed by a file that is rewritten on every render.
///
/// Content goes to a staging file next to the target first and is then
/// renamed over it, so readers never observe a partial write. The staging
/// name is unique per region, so two regions on one path do not clobber
/// each other's staging file.
#[derive(Debug, Clone)]
pub struct FileRegion {
    path: PathBuf,
    staging: PathBuf,
}

impl FileRegion {
    /// Creates a region writing to `path`. Nothing is written until the
    /// first render.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut staging = path.clone().into_os_string();
        staging.push(format!(".{}.tmp", uuid::Uuid::new_v4().simple()));
        Self {
            path,
            staging: PathBuf::from(staging),
        }
    }

    /// Target file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Staging file path used during a render.
    #[must_use]
    pub fn staging_path(&self) -> &Path {
        &self.staging
    }
}

impl DisplayRegion for FileRegion {
    async fn replace(&mut self, html: &str) -> Result<(), FeedError> {
        tokio::fs::write(&self.staging, html).await?;
        tokio::fs::rename(&self.staging, &self.path).await?;
        Ok(())
    }
}

/// Region that prints the full content to stdout on every render.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutRegion;

impl DisplayRegion for StdoutRegion {
    async fn replace(&mut self, html: &str) -> Result<(), FeedError> {
        let mut out = tokio::io::stdout();
        out.write_all(html.as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;
        Ok(())
    }
}
