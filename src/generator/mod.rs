//! Generator module - renders pages and the index page to HTML files

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::SiteInfo;
use crate::content::post::INDEX_FILE;
use crate::content::{collect_posts, ContentFile, Frontmatter, MarkdownRenderer, Page, PostMeta};
use crate::error::{Error, Result};
use crate::templates::TemplateRenderer;

/// Data bound to the index template
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexPage {
    pub site_title: String,
    pub site_author: String,
    pub site_author_bio: String,
    /// Rendered body of `_index.md`
    pub content: String,
    /// Newest first
    pub posts: Vec<PostMeta>,
}

impl IndexPage {
    /// Start from site defaults, then let the index front-matter override them
    fn new(site: &SiteInfo, frontmatter: Option<&Frontmatter>, content: String) -> Self {
        let pick = |key: &str, default: &str| {
            frontmatter
                .and_then(|fm| fm.get_str(key))
                .unwrap_or(default)
                .to_string()
        };

        Self {
            site_title: pick("title", site.title.as_str()),
            site_author: pick("author", site.author.as_str()),
            site_author_bio: pick("bio", site.bio.as_str()),
            content,
            posts: Vec::new(),
        }
    }
}

/// Static site generator
///
/// Holds the template renderer so templates are parsed once per build.
#[derive(Default)]
pub struct Generator {
    renderer: TemplateRenderer,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a page to its template
    pub fn render_page(&mut self, page: &Page, template_path: &Path) -> Result<String> {
        self.renderer.render(page, template_path)
    }

    /// Build, render and write one post
    pub fn generate_page(
        &mut self,
        content_path: &Path,
        template_path: &Path,
        output_path: &Path,
    ) -> Result<()> {
        let page = Page::build(content_path)?;
        let html = self.render_page(&page, template_path)?;
        write_output(output_path, &html)
    }

    /// Build, render and write the index page from `_index.md` and the post listing
    pub fn generate_index_page(
        &mut self,
        content_dir: &Path,
        template_path: &Path,
        output_path: &Path,
        site: &SiteInfo,
    ) -> Result<()> {
        let index = ContentFile::read(&content_dir.join(INDEX_FILE))?;
        let (frontmatter, body) = Frontmatter::parse(&index.text);
        let content = MarkdownRenderer::new().render(body);

        let mut index_page = IndexPage::new(site, frontmatter.as_ref(), content);
        index_page.posts = collect_posts(content_dir)?;

        let html = self.renderer.render(&index_page, template_path)?;
        write_output(output_path, &html)
    }
}

/// Write an output file, creating its parent directories
pub fn write_output(output_path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(output_path, html).map_err(|source| Error::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    })
}
