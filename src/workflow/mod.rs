pub mod card_ctx;
pub mod card_flow;

pub use card_ctx::{card_path, CardJob};
pub use card_flow::CardFlow;
