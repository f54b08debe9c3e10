//! Slug and title extraction from a document's YAML front matter.

use std::path::Path;

use gray_matter::engine::YAML;
use gray_matter::{Matter, Pod};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub slug: String,
    pub title: String,
}

/// Derives the slug and title of the document at `path` from its content.
///
/// The slug falls back to the file name without `extension` and the title
/// falls back to the full path. A missing or malformed front matter block
/// never fails extraction.
pub fn extract(path: &str, content: &str, extension: &str) -> DocumentMetadata {
    let fields = front_matter(path, content);

    let slug = fields
        .slug
        .unwrap_or_else(|| fallback_slug(path, extension));
    let title = fields.title.unwrap_or_else(|| path.to_string());

    DocumentMetadata { slug, title }
}

#[derive(Default)]
struct FrontMatterFields {
    slug: Option<String>,
    title: Option<String>,
}

fn front_matter(path: &str, content: &str) -> FrontMatterFields {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let parsed = Matter::<YAML>::new().parse(content);

    match parsed.data {
        Some(Pod::Hash(fields)) => FrontMatterFields {
            slug: fields.get("slug").and_then(scalar_text),
            title: fields.get("title").and_then(scalar_text),
        },
        Some(_) => {
            debug!(path, "ignoring front matter that is not a mapping");
            FrontMatterFields::default()
        }
        None => FrontMatterFields::default(),
    }
}

fn scalar_text(value: &Pod) -> Option<String> {
    let text = match value {
        Pod::String(text) => text.trim().to_string(),
        Pod::Integer(number) => number.to_string(),
        Pod::Float(number) => number.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

fn fallback_slug(path: &str, extension: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.strip_suffix(extension) {
        Some(stem) if !extension.is_empty() && !stem.is_empty() => stem.to_string(),
        _ => Path::new(file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_slug_and_title_from_front_matter() {
        let content = "---\nslug: hello\ntitle: \"Hello World\"\n---\n\nBody text.\n";
        let meta = extract("blog/a.md", content, ".md");
        assert_eq!(meta.slug, "hello");
        assert_eq!(meta.title, "Hello World");
    }

    #[test]
    fn falls_back_without_front_matter() {
        let meta = extract("blog/b.md", "# Just a heading\n", ".md");
        assert_eq!(meta.slug, "b");
        assert_eq!(meta.title, "blog/b.md");
    }

    #[test]
    fn falls_back_per_missing_field() {
        let only_title = extract("blog/c.md", "---\ntitle: Only Title\n---\n", ".md");
        assert_eq!(only_title.slug, "c");
        assert_eq!(only_title.title, "Only Title");

        let only_slug = extract("blog/d.md", "---\nslug: custom\n---\n", ".md");
        assert_eq!(only_slug.slug, "custom");
        assert_eq!(only_slug.title, "blog/d.md");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let meta = extract("blog/e.md", "---\nslug: \"  \"\ntitle: ''\n---\n", ".md");
        assert_eq!(meta.slug, "e");
        assert_eq!(meta.title, "blog/e.md");
    }

    #[test]
    fn malformed_front_matter_degrades_to_fallback() {
        let content = "---\nslug: [unterminated\ntitle: : :\n---\nbody";
        let meta = extract("blog/broken.md", content, ".md");
        assert_eq!(meta.slug, "broken");
        assert_eq!(meta.title, "blog/broken.md");
    }

    #[test]
    fn unterminated_block_is_ignored() {
        let meta = extract("blog/open.md", "---\nslug: never-closed\n", ".md");
        assert_eq!(meta.slug, "open");
    }

    #[test]
    fn accepts_crlf_and_bom() {
        let content = "\u{feff}---\r\nslug: windows\r\ntitle: CRLF post\r\n---\r\nbody";
        let meta = extract("blog/w.md", content, ".md");
        assert_eq!(meta.slug, "windows");
        assert_eq!(meta.title, "CRLF post");
    }

    #[test]
    fn stringifies_numeric_slug() {
        let meta = extract("blog/n.md", "---\nslug: 2024\n---\n", ".md");
        assert_eq!(meta.slug, "2024");
    }

    #[test]
    fn non_scalar_values_are_ignored() {
        let meta = extract("blog/list.md", "---\ntitle:\n  - a\n  - b\n---\n", ".md");
        assert_eq!(meta.title, "blog/list.md");
    }

    #[test]
    fn fallback_slug_uses_configured_extension() {
        assert_eq!(fallback_slug("blog/post.mdx", ".mdx"), "post");
        assert_eq!(fallback_slug("blog/v1.2.md", ".md"), "v1.2");
        assert_eq!(fallback_slug("blog/notes.txt", ".md"), "notes");
        assert_eq!(fallback_slug("top.md", ".md"), "top");
    }

    #[test]
    fn extraction_is_idempotent() {
        let content = "---\nslug: same\n---\n";
        assert_eq!(
            extract("blog/x.md", content, ".md"),
            extract("blog/x.md", content, ".md")
        );
    }
}
