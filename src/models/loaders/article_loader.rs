use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{CardError, Result};
use crate::models::loaders::front_matter;
use crate::models::Article;

/// Reads one article file and splits off its front matter
pub async fn load_article(path: &Path) -> Result<Article> {
    let source = fs::read_to_string(path)
        .await
        .map_err(|e| CardError::io(path, e))?;

    let (metadata, body) = front_matter::parse(&source).map_err(|message| CardError::FrontMatter {
        path: path.to_path_buf(),
        message,
    })?;

    Ok(Article {
        path: path.to_path_buf(),
        body: body.to_string(),
        metadata,
    })
}

/// Lists the article files of `content_dir`, sorted by file name.
///
/// Only regular files count; the file named exactly `excluded` is left out.
pub async fn list_articles(content_dir: &Path, excluded: &str) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(content_dir)
        .await
        .map_err(|e| CardError::io(content_dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| CardError::io(content_dir, e))?
    {
        let path = entry.path();
        if entry.file_name() == excluded {
            tracing::debug!("skipping index file {}", path.display());
            continue;
        }
        let file_type = entry.file_type().await.map_err(|e| CardError::io(&path, e))?;
        if !file_type.is_file() {
            tracing::debug!("skipping non-file entry {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
