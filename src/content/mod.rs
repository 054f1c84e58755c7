//! Content module - handles content files, front-matter and markdown

mod frontmatter;
pub mod loader;
mod markdown;
mod page;
pub mod post;

pub use frontmatter::{FrontValue, Frontmatter};
pub use loader::{collect_posts, list_posts, ContentFile};
pub use markdown::MarkdownRenderer;
pub use page::Page;
pub use post::PostMeta;
