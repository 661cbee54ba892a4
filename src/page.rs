use std::path::Path;

use crate::config::TemplateConfig;
use crate::error::SiteError;
use crate::parser::markdown_to_html_node;

/// Text of the first `# ` heading line in a document.
///
/// Uses the same `"# "` prefix rule as level-1 heading classification.
pub fn extract_title(markdown: &str) -> Result<&str, SiteError> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .ok_or(SiteError::MissingTitle)
}

/// Render a document and substitute its title and content into `template`.
///
/// `path` names the document in errors; nothing is read from it.
pub fn render_page(
    path: &Path,
    markdown: &str,
    template: &str,
    placeholders: &TemplateConfig,
) -> Result<String, SiteError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html_node(markdown)
        .and_then(|node| node.to_html())
        .map_err(|source| SiteError::markdown(path, source))?;
    Ok(template
        .replace(&placeholders.title_placeholder, title)
        .replace(&placeholders.content_placeholder, &content))
}
