//! Shared domain types.

pub mod artifact;

pub use artifact::StoredArtifact;
