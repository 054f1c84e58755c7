//! Initialize a new koyo-site project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::commands::build::{INDEX_TEMPLATE, POST_TEMPLATE};
use crate::config::SiteConfig;
use crate::content::post::INDEX_FILE;
use crate::CONFIG_FILE;

const CONFIG_CONTENT: &str = r#"site:
  title: "My Koyo Site"
  author: "Your Name"
  bio: ""

paths:
  content: "content"
  templates: "templates"
  output: "public"

server:
  port: 8080
"#;

const POST_TEMPLATE_CONTENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
  <meta name="description" content="{{ description }}">
</head>
<body>
  <a href="/">&larr; Home</a>
  <article>
    <h1>{{ title }}</h1>
    {# Optional front-matter fields live under meta; guard them with default #}
    {% set subtitle = meta.subtitle | default(value="") %}
    {% if subtitle %}<p>{{ subtitle }}</p>{% endif %}
    <p>{{ author }}{% if date %} &middot; {{ date | date_format(format="%B %d, %Y") }}{% endif %}</p>
    {{ content | safe }}
  </article>
</body>
</html>
"#;

const INDEX_TEMPLATE_CONTENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ site_title }}</title>
</head>
<body>
  <header>
    <h1>{{ site_title }}</h1>
    <p>{{ site_author }}{% if site_author_bio %} &mdash; {{ site_author_bio }}{% endif %}</p>
  </header>
  {{ content | safe }}
  <ul>
  {% for post in posts %}
    <li>
      <a href="{{ post.url }}">{{ post.title }}</a>
      {% if post.date %}<time>{{ post.date }}</time>{% endif %}
      {% if post.description %}<p>{{ post.description | truncate_chars(length=160) }}</p>{% endif %}
    </li>
  {% endfor %}
  </ul>
</body>
</html>
"#;

const INDEX_CONTENT: &str = r#"---
title: My Koyo Site
---

Welcome to my site.
"#;

/// Initialize a project in `target_dir`.
///
/// Creates the directories from the default configuration, the config file
/// and starter templates and content. Existing files are left alone.
pub fn init_site(target_dir: &Path) -> Result<()> {
    println!("📁 Initializing koyo-site project...");

    let paths = SiteConfig::default().paths;
    for dir in [&paths.content, &paths.templates, &paths.output] {
        let path = target_dir.join(dir);
        fs::create_dir_all(&path).with_context(|| format!("failed to create {}", path.display()))?;
        println!("✔ Created {}/", dir);
    }

    let today = chrono::Local::now().format("%Y-%m-%d");
    let hello_world = format!(
        "---\ntitle: Hello World\ndescription: The first post\ndate: {}\n---\n\nThis is your first post. Edit or delete it, then run `koyo-site build`.\n",
        today
    );

    let files = [
        (target_dir.join(CONFIG_FILE), CONFIG_CONTENT.to_string()),
        (
            target_dir.join(&paths.templates).join(POST_TEMPLATE),
            POST_TEMPLATE_CONTENT.to_string(),
        ),
        (
            target_dir.join(&paths.templates).join(INDEX_TEMPLATE),
            INDEX_TEMPLATE_CONTENT.to_string(),
        ),
        (
            target_dir.join(&paths.content).join(INDEX_FILE),
            INDEX_CONTENT.to_string(),
        ),
        (target_dir.join(&paths.content).join("hello-world.md"), hello_world),
    ];

    for (path, content) in files {
        let shown = path.strip_prefix(target_dir).unwrap_or(path.as_path()).display().to_string();
        if path.exists() {
            println!("• Kept existing {}", shown);
            continue;
        }
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
        println!("✔ Created {}", shown);
    }

    println!("✨ koyo-site project initialized");
    Ok(())
}
