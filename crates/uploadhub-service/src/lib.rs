//! # uploadhub-service
//!
//! The upload ingestion operation: size policy, storage name derivation,
//! persistence, and descriptor assembly.

pub mod ingest;

pub use ingest::IngestService;
