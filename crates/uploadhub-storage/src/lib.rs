//! # uploadhub-storage
//!
//! Storage provider implementations for UploadHub. Currently local
//! filesystem only; the [`uploadhub_core::traits::ArtifactStore`] trait is
//! the seam a future object-store backend would implement.

pub mod providers;

pub use providers::local::LocalStorageProvider;
