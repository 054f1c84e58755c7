//! Template rendering with Tera
//!
//! Templates are read from disk on first use and cached by path for the
//! lifetime of the renderer, which is one build.

use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera};

use crate::error::{Error, Result};

/// Renders page-like records through template files
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut tera = Tera::default();

        // Escape output of every template, whatever its file extension.
        // Pre-rendered HTML must opt out with `| safe`.
        tera.autoescape_on(vec![""]);
        tera.set_escape_fn(escape_html);

        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("date_format", date_format_filter);

        Self { tera }
    }

    /// Render `data` through the template at `template_path`
    pub fn render<T: Serialize>(&mut self, data: &T, template_path: &Path) -> Result<String> {
        let name = self.load(template_path)?;

        let render_error = |source| Error::TemplateRender {
            path: template_path.to_path_buf(),
            source,
        };
        let context = Context::from_serialize(data).map_err(render_error)?;
        self.tera.render(&name, &context).map_err(render_error)
    }

    /// Parse the template file unless it is already cached, returning its name
    fn load(&mut self, template_path: &Path) -> Result<String> {
        let name = template_path.to_string_lossy().into_owned();

        if self.tera.get_template_names().any(|n| n == name) {
            tracing::debug!("Using cached template {}", name);
            return Ok(name);
        }

        self.tera
            .add_template_file(template_path, Some(&name))
            .map_err(|source| Error::TemplateParse {
                path: template_path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Loaded template {}", name);

        Ok(name)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// HTML escaping for template output.
///
/// Leaves `/` alone so URLs such as `/blogs/post.html` render as written.
fn escape_html(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
    output
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        return Ok(tera::Value::String(s));
    }
    let truncated: String = s.chars().take(length).collect();
    Ok(tera::Value::String(format!(
        "{}{}",
        truncated.trim_end(),
        omission
    )))
}

/// Tera filter: reformat a `YYYY-MM-DD` date with a strftime pattern.
///
/// Dates that do not parse are passed through unchanged.
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => return Ok(tera::Value::String(s)),
    };

    match chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        Ok(date) => Ok(tera::Value::String(date.format(&format).to_string())),
        Err(_) => Ok(tera::Value::String(s)),
    }
}
