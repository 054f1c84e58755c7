//! Single page model

use serde::{Serialize, Serializer};
use std::path::Path;

use super::{ContentFile, Frontmatter, MarkdownRenderer};
use crate::error::Result;

/// A page ready to be bound to a template
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub description: String,
    pub author: String,
    /// Expected as `YYYY-MM-DD` but kept verbatim
    pub date: String,
    /// Rendered HTML body
    pub content: String,
    /// Every front-matter field, for templates that want more than the basics.
    /// Templates see an empty mapping when the page has no front-matter.
    #[serde(serialize_with = "meta_or_empty")]
    pub meta: Option<Frontmatter>,
}

fn meta_or_empty<S>(
    meta: &Option<Frontmatter>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match meta {
        Some(fm) => fm.serialize(serializer),
        None => Frontmatter::default().serialize(serializer),
    }
}

impl Page {
    /// Read a content file and build its page.
    ///
    /// An unreadable file is an error here, unlike post collection which
    /// skips it.
    pub fn build(path: &Path) -> Result<Self> {
        let file = ContentFile::read(path)?;
        Ok(Self::from_source(&file.text))
    }

    /// Build a page from raw file text.
    ///
    /// The title is left empty when front-matter has none; only the post
    /// listing falls back to the file name.
    pub fn from_source(text: &str) -> Self {
        let (frontmatter, body) = Frontmatter::parse(text);
        let content = MarkdownRenderer::new().render(body);

        let fm = frontmatter.as_ref();
        Self {
            title: string_field(fm, "title"),
            description: string_field(fm, "description"),
            author: string_field(fm, "author"),
            date: string_field(fm, "date"),
            content,
            meta: frontmatter,
        }
    }
}

/// A string front-matter field, or empty when missing or not a string
pub(crate) fn string_field(fm: Option<&Frontmatter>, key: &str) -> String {
    fm.and_then(|fm| fm.get_str(key))
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_extracts_known_fields() {
        let page = Page::from_source(
            "---\ntitle: Hello\ndescription: A greeting\nauthor: Jane\ndate: 2024-05-01\nmood: happy\n---\n# Heading\n\nBody.",
        );
        assert_eq!(page.title, "Hello");
        assert_eq!(page.description, "A greeting");
        assert_eq!(page.author, "Jane");
        assert_eq!(page.date, "2024-05-01");
        assert!(page.content.contains("<h1>Heading</h1>"));
        assert!(!page.content.contains("mood"));

        let meta = page.meta.unwrap();
        assert_eq!(meta.get_str("mood"), Some("happy"));
    }

    #[test]
    fn test_non_string_fields_stay_empty() {
        let page = Page::from_source("---\ntitle: 2024\nauthor: false\n---\nBody");
        assert_eq!(page.title, "");
        assert_eq!(page.author, "");
        assert!(page.meta.is_some());
    }

    #[test]
    fn test_no_frontmatter_has_no_title_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my-notes.md");
        fs::write(&path, "Just text.").unwrap();

        let page = Page::build(&path).unwrap();
        assert_eq!(page.title, "");
        assert!(page.meta.is_none());
        assert_eq!(page.content, "<p>Just text.</p>\n");
    }

    #[test]
    fn test_missing_meta_is_an_empty_mapping_for_templates() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("meta.tmpl");
        fs::write(
            &template,
            r#"[{% for key, value in meta %}{{ key }};{% endfor %}]{{ meta.mood | default(value="none") }}"#,
        )
        .unwrap();

        let mut renderer = crate::templates::TemplateRenderer::new();
        let bare = renderer.render(&Page::from_source("Just text."), &template).unwrap();
        assert_eq!(bare, "[]none");

        let with_meta = renderer
            .render(&Page::from_source("---\nmood: calm\n---\nBody"), &template)
            .unwrap();
        assert_eq!(with_meta, "[mood;]calm");
    }

    #[test]
    fn test_malformed_frontmatter_renders_whole_file() {
        let page = Page::from_source("---\ntitle: [oops\n---\nBody");
        assert!(page.meta.is_none());
        assert_eq!(page.title, "");
        assert!(page.content.contains("Body"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = Page::build(&dir.path().join("missing.md")).unwrap_err();
        assert!(err.is_fatal());
    }
}
