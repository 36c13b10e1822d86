pub mod article;
pub mod loaders;

pub use article::{Article, CardFields, Metadata, MetadataPolicy};
pub use loaders::{list_articles, load_article};
