pub mod article_loader;
pub mod front_matter;

pub use article_loader::{list_articles, load_article};
