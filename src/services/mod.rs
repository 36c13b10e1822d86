pub mod embed;
pub mod reading_time;
pub mod template;

pub use embed::image_data_uri;
pub use reading_time::reading_time_minutes;
pub use template::{AssetPaths, TemplateBuilder};
