//! # uploadhub-core
//!
//! Core crate for UploadHub. Contains the storage trait, configuration
//! schemas, the stored-artifact descriptor type, filename sanitization,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other UploadHub crates.

pub mod config;
pub mod error;
pub mod naming;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
