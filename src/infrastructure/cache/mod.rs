//! Preprocessing cache stores

mod file;
mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;
