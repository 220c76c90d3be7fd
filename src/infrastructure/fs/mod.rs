//! File System Implementations
//!
//! Concrete implementations of the directory ports.

mod atomic;
mod filesystem;
mod local;

pub use atomic::atomic_write;
pub use filesystem::LocalFilesystem;
pub use local::LocalDirectory;
