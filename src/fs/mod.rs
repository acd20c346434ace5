//! File System Module
//!
//! Provides the read-only virtual file system behind `ls`, `cat` and `cd`.

pub mod types;
pub mod virtual_fs;

pub use types::*;
pub use virtual_fs::{VirtualFs, EXPERIMENTS_DIR};
