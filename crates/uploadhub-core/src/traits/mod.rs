//! Trait seams implemented by other UploadHub crates.

pub mod storage;

pub use storage::ArtifactStore;
