//! Post listing model

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

use super::page::string_field;
use super::Frontmatter;

/// Content file that feeds the index page instead of becoming a post
pub const INDEX_FILE: &str = "_index.md";

/// Output subdirectory holding one HTML file per post
pub const BLOGS_DIR: &str = "blogs";

const MARKDOWN_EXT: &str = ".md";

/// Summary of a post for the index listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: String,
    /// Public path, e.g. `/blogs/hello.html`
    pub url: String,
    /// Source file name, e.g. `hello.md`
    pub filename: String,
}

impl PostMeta {
    /// Build listing metadata from a post's file name and raw text.
    ///
    /// The body is not rendered. A missing title falls back to the file stem.
    pub fn from_source(filename: &str, text: &str) -> Self {
        let (frontmatter, _) = Frontmatter::parse(text);
        let fm = frontmatter.as_ref();

        let mut title = string_field(fm, "title");
        if title.is_empty() {
            title = post_stem(filename).to_string();
        }

        Self {
            title,
            description: string_field(fm, "description"),
            author: string_field(fm, "author"),
            date: string_field(fm, "date"),
            url: post_url(filename),
            filename: filename.to_string(),
        }
    }
}

/// Whether a directory entry name is a post: a markdown file that is not the index
pub fn is_post_file(filename: &str) -> bool {
    filename.ends_with(MARKDOWN_EXT) && filename != INDEX_FILE
}

/// File name with only the final `.md` removed
pub fn post_stem(filename: &str) -> &str {
    filename.strip_suffix(MARKDOWN_EXT).unwrap_or(filename)
}

/// Name of the HTML file generated for a post, relative to [`BLOGS_DIR`]
pub fn output_file_name(filename: &str) -> String {
    format!("{}.html", post_stem(filename))
}

/// Public URL of a post. Must agree with [`output_file_name`].
pub fn post_url(filename: &str) -> String {
    format!("/{}/{}", BLOGS_DIR, output_file_name(filename))
}

/// Parse a strict `YYYY-MM-DD` date
fn parse_post_date(date: &str) -> Option<NaiveDate> {
    let bytes = date.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Newest-first ordering of two post dates.
///
/// Two valid dates compare as calendar dates. If either side fails to parse
/// both raw strings compare lexicographically, descending. Valid dates are
/// fixed-width, so their lexicographic order matches calendar order and the
/// two branches never disagree: the ordering is total.
pub fn compare_post_dates(a: &str, b: &str) -> Ordering {
    match (parse_post_date(a), parse_post_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        _ => b.cmp(a),
    }
}

/// Sort posts newest first. Stable, so equal dates keep listing order.
pub fn sort_posts(posts: &mut [PostMeta]) {
    posts.sort_by(|a, b| compare_post_dates(&a.date, &b.date));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(date: &str) -> PostMeta {
        PostMeta {
            date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_derivation() {
        assert_eq!(post_url("post.md"), "/blogs/post.html");
        assert_eq!(post_url("a.b.md"), "/blogs/a.b.html");
        assert_eq!(post_url("notes.md.md"), "/blogs/notes.md.html");
        assert_eq!(output_file_name("a.b.md"), "a.b.html");
    }

    #[test]
    fn test_url_matches_output_name() {
        for name in ["post.md", "a.b.md", "2024-01-01-hello.md"] {
            assert_eq!(
                post_url(name),
                format!("/{}/{}", BLOGS_DIR, output_file_name(name))
            );
        }
    }

    #[test]
    fn test_is_post_file() {
        assert!(is_post_file("hello.md"));
        assert!(!is_post_file("_index.md"));
        assert!(!is_post_file("notes.markdown"));
        assert!(!is_post_file("image.png"));
        assert!(!is_post_file("README.MD"));
    }

    #[test]
    fn test_title_falls_back_to_stem() {
        let meta = PostMeta::from_source("my-notes.md", "---\ndate: 2024-01-01\n---\nBody");
        assert_eq!(meta.title, "my-notes");
        assert_eq!(meta.date, "2024-01-01");

        let meta = PostMeta::from_source("plain.md", "No frontmatter at all");
        assert_eq!(meta.title, "plain");
        assert_eq!(meta.url, "/blogs/plain.html");
        assert_eq!(meta.filename, "plain.md");
    }

    #[test]
    fn test_frontmatter_fields() {
        let meta = PostMeta::from_source(
            "hello.md",
            "---\ntitle: Hello\ndescription: Hi there\nauthor: Sam\ndate: 2024-05-01\n---\nBody",
        );
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.description, "Hi there");
        assert_eq!(meta.author, "Sam");
        assert_eq!(meta.date, "2024-05-01");
    }

    #[test]
    fn test_parse_post_date_is_strict() {
        assert!(parse_post_date("2024-03-05").is_some());
        assert!(parse_post_date("2024-3-5").is_none());
        assert!(parse_post_date("2024-02-30").is_none());
        assert!(parse_post_date("invalid-date").is_none());
        assert!(parse_post_date("").is_none());
    }

    #[test]
    fn test_sort_newest_first_with_invalid_date() {
        let mut posts = vec![
            post("2024-01-01"),
            post("2024-03-05"),
            post("invalid-date"),
            post("2023-12-31"),
        ];
        sort_posts(&mut posts);

        let dates: Vec<_> = posts.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["invalid-date", "2024-03-05", "2024-01-01", "2023-12-31"]
        );
    }

    #[test]
    fn test_missing_date_sorts_last() {
        let mut posts = vec![post(""), post("2024-05-01")];
        sort_posts(&mut posts);
        assert_eq!(posts[0].date, "2024-05-01");
        assert_eq!(posts[1].date, "");
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut posts = vec![
            PostMeta {
                filename: "a.md".to_string(),
                ..post("2024-01-01")
            },
            PostMeta {
                filename: "b.md".to_string(),
                ..post("2024-01-01")
            },
        ];
        sort_posts(&mut posts);
        assert_eq!(posts[0].filename, "a.md");
        assert_eq!(posts[1].filename, "b.md");
    }

    #[test]
    fn test_comparator_is_antisymmetric() {
        let dates = ["2024-01-01", "2024-03-05", "invalid-date", "", "2023-12-31", "zzz"];
        for a in dates {
            for b in dates {
                assert_eq!(compare_post_dates(a, b), compare_post_dates(b, a).reverse());
            }
        }
    }
}
