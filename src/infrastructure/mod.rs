pub mod rasterizer;

pub use rasterizer::{ChromeRasterizer, Rasterizer, CARD_HEIGHT, CARD_WIDTH};
