//! Filesystem side of site generation: static assets and page output.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{Config, TemplateConfig};
use crate::error::SiteError;
use crate::page::render_page;

/// Recursively copy `src` into `dst`, creating directories as needed.
///
/// Symlinks are not followed and are skipped.
pub fn copy_static(src: &Path, dst: &Path) -> Result<(), SiteError> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| walk_error(src, e))?;
        let to = mirrored(src, dst, entry.path());
        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&to).map_err(|e| SiteError::io(&to, e))?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &to).map_err(|e| SiteError::io(entry.path(), e))?;
            log::info!("Copied {} -> {}", entry.path().display(), to.display());
        } else {
            log::debug!("Skipping {}", entry.path().display());
        }
    }
    Ok(())
}

/// Render one Markdown file through the template at `template_path`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    placeholders: &TemplateConfig,
) -> Result<(), SiteError> {
    log::debug!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );
    let template =
        fs::read_to_string(template_path).map_err(|e| SiteError::io(template_path, e))?;
    write_page(from, &template, dest, placeholders)
}

/// Render every `.md` file below `content_dir` into the mirrored path under
/// `dest_dir`, with an `.html` extension. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    placeholders: &TemplateConfig,
) -> Result<usize, SiteError> {
    let template =
        fs::read_to_string(template_path).map_err(|e| SiteError::io(template_path, e))?;

    let mut count = 0;
    for entry in WalkDir::new(content_dir) {
        let entry = entry.map_err(|e| walk_error(content_dir, e))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md") {
            let dest = mirrored(content_dir, dest_dir, path).with_extension("html");
            write_page(path, &template, &dest, placeholders)?;
            count += 1;
        }
    }
    Ok(count)
}

fn write_page(
    from: &Path,
    template: &str,
    dest: &Path,
    placeholders: &TemplateConfig,
) -> Result<(), SiteError> {
    let markdown = fs::read_to_string(from).map_err(|e| SiteError::io(from, e))?;
    let page = render_page(from, &markdown, template, placeholders)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(dest, page).map_err(|e| SiteError::io(dest, e))?;
    log::info!("Created {}", dest.display());
    Ok(())
}

/// `path` below `src`, moved to the same place below `dst`.
fn mirrored(src: &Path, dst: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(src) {
        Ok(relative) => dst.join(relative),
        Err(_) => dst.to_path_buf(),
    }
}

fn walk_error(root: &Path, error: walkdir::Error) -> SiteError {
    let path = error.path().unwrap_or(root).to_path_buf();
    SiteError::io(path, error.into())
}

/// Rebuild the whole site described by `config`: clear the output
/// directory, copy static assets, then generate every page.
pub fn build_site(config: &Config) -> Result<usize, SiteError> {
    let paths = &config.paths;
    if paths.output.exists() {
        fs::remove_dir_all(&paths.output).map_err(|e| SiteError::io(&paths.output, e))?;
        log::info!("Deleted {}", paths.output.display());
    }

    if paths.static_dir.exists() {
        copy_static(&paths.static_dir, &paths.output)?;
    } else {
        log::warn!(
            "static directory {} not found, skipping",
            paths.static_dir.display()
        );
    }

    generate_pages_recursive(
        &paths.content,
        &paths.template,
        &paths.output,
        &config.template,
    )
}
