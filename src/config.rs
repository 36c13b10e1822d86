use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::MetadataPolicy;

const PROGRAM_NAME: &str = "social-cards";

/// Run configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding one source file per article
    pub content_dir: PathBuf,
    /// Directory the PNG cards are written to
    pub output_dir: PathBuf,
    /// Root under which `images_subdir` is resolved
    pub assets_root: PathBuf,
    pub images_subdir: PathBuf,
    /// Logo drawn in the bottom-right corner of every card
    pub logo_file: String,
    /// Section index file that is never rendered
    pub excluded_file: String,
    /// Number of cards rendered at the same time
    pub max_concurrent_renders: usize,
    pub metadata_policy: MetadataPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("social-cards"),
            assets_root: PathBuf::from("."),
            images_subdir: PathBuf::from("assets/images"),
            logo_file: "reflect-logo-dark.png".to_string(),
            excluded_file: "_index.md".to_string(),
            max_concurrent_renders: 5,
            metadata_policy: MetadataPolicy::Permissive,
        }
    }
}

impl Config {
    /// Builds the config from the process arguments (program name first).
    ///
    /// Exactly two positional arguments are accepted: the content directory
    /// and the output directory.
    pub fn from_args<I, S>(args: I, assets_root: impl Into<PathBuf>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args
            .next()
            .as_deref()
            .and_then(|p| Path::new(p).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| PROGRAM_NAME.to_string());

        let rest: Vec<OsString> = args.collect();
        let [content_dir, output_dir] = <[OsString; 2]>::try_from(rest)
            .map_err(|_| ConfigError::Usage { program })?;

        Ok(Self {
            content_dir: PathBuf::from(content_dir),
            output_dir: PathBuf::from(output_dir),
            assets_root: assets_root.into(),
            ..Self::default()
        })
    }

    /// `<assets_root>/assets/images`
    pub fn images_dir(&self) -> PathBuf {
        self.assets_root.join(&self.images_subdir)
    }
}
