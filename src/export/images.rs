//! Image rewriting for exported note bodies.
//!
//! Three text passes, in order:
//!
//! 1. Internal references (`<scheme>://file:<id>`) are materialized into the
//!    `images` directory next to the note and replaced with relative paths.
//! 2. Raw `<img>` tags become Markdown images. A declared `width` that
//!    differs from the image's intrinsic width (or can't be checked) is kept
//!    as a `|width` size hint in the alt text.
//! 3. Single-line `<p>...</p>` wrappers are unwrapped.
//!
//! Per-image problems never abort the note: an unresolved reference stays
//! verbatim, an unprobeable image gets a size hint.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::export::{ExportResult, ImageExtractor, SizeProbe};
use crate::infra::ensure_dir;

/// Default scheme of internal image references.
pub const DEFAULT_SCHEME: &str = "inkdrop";

/// Default name of the per-directory image folder.
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Alt text used when an `<img>` tag has none.
pub const ALT_PLACEHOLDER: &str = "image";

static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\b[^>]*>").expect("valid img tag pattern"));

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#)
        .expect("valid attribute pattern")
});

static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(.*?)</p>").expect("valid paragraph pattern"));

/// Options for image rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Scheme of internal image references, without `://`.
    pub scheme: String,
    /// Folder name, relative to the note, that receives extracted images.
    pub images_dir: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
        }
    }
}

/// Where an image reference came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An internal-scheme URI.
    Internal(String),
    /// A raw HTML `<img>` tag.
    HtmlTag(String),
}

/// One located image occurrence and how it was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub source: ImageSource,
    /// Path written into the Markdown output; `None` if left unresolved.
    pub destination: Option<String>,
    /// Width emitted as a size hint, if any.
    pub width: Option<String>,
}

/// Result of rewriting a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub body: String,
    pub references: Vec<ImageReference>,
}

impl RewriteOutcome {
    /// Number of internal references materialized as files.
    pub fn extracted(&self) -> usize {
        self.references
            .iter()
            .filter(|r| matches!(r.source, ImageSource::Internal(_)) && r.destination.is_some())
            .count()
    }
}

/// Rewrites image content so a body is self-contained next to its export.
pub struct ImageRewriter<'a> {
    extractor: &'a dyn ImageExtractor,
    probe: &'a dyn SizeProbe,
    images_dir: String,
    reference_re: Regex,
}

impl<'a> ImageRewriter<'a> {
    pub fn new(
        extractor: &'a dyn ImageExtractor,
        probe: &'a dyn SizeProbe,
        options: &RewriteOptions,
    ) -> Self {
        let pattern = format!(
            r#"{}://file:[^\s)"'<>\]]+"#,
            regex::escape(&options.scheme)
        );
        Self {
            extractor,
            probe,
            images_dir: options.images_dir.clone(),
            reference_re: Regex::new(&pattern).expect("escaped scheme forms a valid pattern"),
        }
    }

    /// Rewrites `body` for a note living in `dest_dir`.
    ///
    /// Extracted image paths and `<img>` sources are resolved against `base`
    /// when given.
    ///
    /// # Errors
    ///
    /// Fails only if the images directory can't be created.
    pub fn rewrite(
        &self,
        body: &str,
        dest_dir: &Path,
        base: Option<&Path>,
    ) -> ExportResult<RewriteOutcome> {
        let mut references = Vec::new();

        let body = self.rewrite_internal(body, dest_dir, base, &mut references)?;
        let body = self.rewrite_img_tags(&body, base, &mut references);
        let body = unwrap_paragraphs(&body);

        Ok(RewriteOutcome { body, references })
    }

    fn rewrite_internal(
        &self,
        body: &str,
        dest_dir: &Path,
        base: Option<&Path>,
        references: &mut Vec<ImageReference>,
    ) -> ExportResult<String> {
        let uris: Vec<String> = self
            .reference_re
            .find_iter(body)
            .map(|m| m.as_str().to_string())
            .collect();
        if uris.is_empty() {
            return Ok(body.to_string());
        }

        let images_dir = dest_dir.join(&self.images_dir);
        ensure_dir(&images_dir)?;

        let mut body = body.to_string();
        for uri in uris {
            let destination = match self.extractor.export_image(&uri, &images_dir) {
                Ok(Some(path)) => Some(markdown_path(&path, base)),
                Ok(None) => {
                    tracing::warn!(uri = %uri, "image reference did not resolve, leaving it as is");
                    None
                }
                Err(e) => {
                    tracing::warn!(uri = %uri, error = %e, "failed to extract image");
                    None
                }
            };

            if let Some(dest) = &destination {
                body = self
                    .reference_re
                    .replace_all(&body, |caps: &Captures| {
                        if caps[0] == *uri {
                            dest.clone()
                        } else {
                            caps[0].to_string()
                        }
                    })
                    .into_owned();
            }

            references.push(ImageReference {
                source: ImageSource::Internal(uri),
                destination,
                width: None,
            });
        }

        Ok(body)
    }

    fn rewrite_img_tags(
        &self,
        body: &str,
        base: Option<&Path>,
        references: &mut Vec<ImageReference>,
    ) -> String {
        IMG_TAG_RE
            .replace_all(body, |caps: &Captures| {
                let tag = &caps[0];
                let attrs = parse_attributes(tag);
                let alt = attrs.alt.unwrap_or_else(|| ALT_PLACEHOLDER.to_string());
                let src = attrs.src.unwrap_or_default();

                let width = attrs
                    .width
                    .filter(|w| self.needs_size_hint(w, &src, base));

                let markdown = match &width {
                    Some(w) => format!("![{}|{}]({})", alt, w, src),
                    None => format!("![{}]({})", alt, src),
                };

                references.push(ImageReference {
                    source: ImageSource::HtmlTag(tag.to_string()),
                    destination: Some(src),
                    width,
                });
                markdown
            })
            .into_owned()
    }

    /// A declared width needs a hint unless it matches the intrinsic width.
    ///
    /// Probe failures count as a mismatch.
    fn needs_size_hint(&self, declared: &str, src: &str, base: Option<&Path>) -> bool {
        let path = match base {
            Some(base) => base.join(src),
            None => PathBuf::from(src),
        };

        match self.probe.probe(&path) {
            Ok((intrinsic, _)) => declared.trim().parse::<u32>().ok() != Some(intrinsic),
            Err(e) => {
                tracing::info!(src = %src, error = %e, "could not read image size, keeping width hint");
                true
            }
        }
    }
}

#[derive(Debug, Default)]
struct ImgAttributes {
    alt: Option<String>,
    src: Option<String>,
    width: Option<String>,
}

fn parse_attributes(tag: &str) -> ImgAttributes {
    let mut attrs = ImgAttributes::default();
    for caps in ATTR_RE.captures_iter(tag) {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        match caps[1].to_ascii_lowercase().as_str() {
            "alt" => attrs.alt = Some(value),
            "src" => attrs.src = Some(value),
            "width" => attrs.width = Some(value),
            _ => {}
        }
    }
    attrs
}

/// Unwraps `<p>...</p>` occurrences that open and close on the same line.
pub fn unwrap_paragraphs(body: &str) -> String {
    PARAGRAPH_RE.replace_all(body, "$1").into_owned()
}

/// Path as written into Markdown: relative to `base` when inside it, with
/// forward slashes.
fn markdown_path(path: &Path, base: Option<&Path>) -> String {
    let relative = base
        .and_then(|b| path.strip_prefix(b).ok())
        .unwrap_or(path);

    let mut parts = Vec::new();
    let mut prefix = String::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => parts.push("..".to_string()),
            Component::CurDir => {}
            Component::RootDir => prefix = "/".to_string(),
            Component::Prefix(p) => prefix = p.as_os_str().to_string_lossy().into_owned(),
        }
    }
    format!("{}{}", prefix, parts.join("/"))
}
