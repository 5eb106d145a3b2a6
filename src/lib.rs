//! # CoNLL Datasets
#![forbid(unsafe_code)]

/// Feature schema types
pub mod features;

/// Datasets
pub mod datasets;

/// Download managers
pub mod download;

/// Utilities
pub mod utils;

/// CLI indexes and utilities
pub mod cli;
