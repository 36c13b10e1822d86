//! Render job
//!
//! Which article is being rendered and where its card goes

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::models::article::file_name_of;

/// One article to render
#[derive(Debug, Clone)]
pub struct CardJob {
    /// 1-based position in the run (log display only)
    pub index: usize,
    pub source: PathBuf,
    pub output: PathBuf,
}

impl CardJob {
    pub fn new(index: usize, source: PathBuf, output_dir: &Path) -> Self {
        let output = card_path(output_dir, &source);
        Self {
            index,
            source,
            output,
        }
    }

    pub fn file_name(&self) -> String {
        file_name_of(&self.source)
    }
}

impl Display for CardJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[#{} {}]", self.index, self.file_name())
    }
}

/// Output file for `source`: same stem, `.png` extension, inside `output_dir`.
pub fn card_path(output_dir: &Path, source: &Path) -> PathBuf {
    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push(".png");
    output_dir.join(name)
}
