use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{CardError, Result};

/// How missing card fields are treated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MetadataPolicy {
    /// Missing fields render as empty strings
    #[default]
    Permissive,
    /// Missing or empty fields fail the article
    Strict,
}

/// Front matter key/value pairs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Scalar value as text. Strings come back verbatim, numbers and bools are formatted.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A parsed article: its file, front matter and body text
#[derive(Clone, Debug)]
pub struct Article {
    pub path: PathBuf,
    pub metadata: Metadata,
    pub body: String,
}

impl Article {
    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }

    /// Pulls the four fields drawn on the card.
    pub fn card_fields(&self, policy: MetadataPolicy) -> Result<CardFields> {
        let field = |key: &'static str| -> Result<String> {
            match (self.metadata.get_str(key), policy) {
                (Some(v), MetadataPolicy::Strict) if v.trim().is_empty() => {
                    Err(CardError::MissingField { field: key })
                }
                (Some(v), _) => Ok(v),
                (None, MetadataPolicy::Strict) => Err(CardError::MissingField { field: key }),
                (None, MetadataPolicy::Permissive) => Ok(String::new()),
            }
        };

        Ok(CardFields {
            title: field("title")?,
            author: field("author")?,
            author_avatar: field("authoravatar")?,
            hero: field("hero")?,
        })
    }
}

/// Metadata consumed by the card template
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardFields {
    pub title: String,
    pub author: String,
    /// File name under the images directory
    pub author_avatar: String,
    /// File name under the images directory
    pub hero: String,
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
