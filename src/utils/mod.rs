pub mod chunk;
pub mod fs;
pub mod logging;

pub use chunk::chunk;
pub use fs::ensure_dir;
