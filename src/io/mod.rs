pub mod real;
pub mod traits;

// Re-export I/O traits for convenient access
pub use real::{MemoryFileSystem, RealFileSystem};
pub use traits::FileSystem;
