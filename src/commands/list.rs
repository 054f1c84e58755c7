//! List site content

use anyhow::Result;

use crate::content::{collect_posts, PostMeta};
use crate::Koyo;

/// Print every post in index order
pub fn run(koyo: &Koyo) -> Result<()> {
    let posts = collect_posts(&koyo.content_dir)?;
    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("{}", format_post(post));
    }
    Ok(())
}

fn format_post(post: &PostMeta) -> String {
    let date = if post.date.is_empty() {
        "----------"
    } else {
        post.date.as_str()
    };
    format!("  {} - {} [{}]", date, post.title, post.filename)
}
