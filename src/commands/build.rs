//! Build the static site

use anyhow::{bail, Context, Result};
use std::fs;

use crate::content::list_posts;
use crate::content::post::{output_file_name, BLOGS_DIR};
use crate::generator::Generator;
use crate::Koyo;

/// Template every post is rendered with
pub const POST_TEMPLATE: &str = "default.tmpl";

/// Template for the site index
pub const INDEX_TEMPLATE: &str = "index.tmpl";

/// Build every post and, when its template exists, the index page.
///
/// A post that fails to render is reported and skipped. A post that cannot
/// be read, a missing post template or an unusable output directory abort
/// the build. Index failures never abort it.
pub fn run(koyo: &Koyo) -> Result<()> {
    let start = std::time::Instant::now();
    println!("⚙️  Building site...");

    let blogs_dir = koyo.output_dir.join(BLOGS_DIR);
    fs::create_dir_all(&blogs_dir)
        .with_context(|| format!("failed to create {}", blogs_dir.display()))?;

    let post_template = koyo.templates_dir.join(POST_TEMPLATE);
    if !post_template.is_file() {
        bail!("template not found: {}", post_template.display());
    }

    let posts = list_posts(&koyo.content_dir)?;
    tracing::debug!("Found {} posts in {}", posts.len(), koyo.content_dir.display());

    let mut generator = Generator::new();

    for content_path in &posts {
        let name = content_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output_name = output_file_name(&name);
        let output_path = blogs_dir.join(&output_name);

        println!("📄 Building {} -> {}/{}", name, BLOGS_DIR, output_name);

        if let Err(e) = generator.generate_page(content_path, &post_template, &output_path) {
            if e.is_fatal() {
                return Err(e.into());
            }
            tracing::error!("Failed to generate {}: {:#}", name, anyhow::Error::from(e));
        }
    }

    let index_template = koyo.templates_dir.join(INDEX_TEMPLATE);
    if !index_template.is_file() {
        tracing::warn!(
            "{} not found, skipping index generation",
            index_template.display()
        );
    } else {
        println!("📄 Building index.html");
        let index_output = koyo.output_dir.join("index.html");

        if let Err(e) = generator.generate_index_page(
            &koyo.content_dir,
            &index_template,
            &index_output,
            &koyo.config.site,
        ) {
            tracing::error!("Failed to generate index: {:#}", anyhow::Error::from(e));
        }
    }

    tracing::info!("Built in {:.2}s", start.elapsed().as_secs_f64());
    println!("✅ Site built successfully!");

    Ok(())
}
