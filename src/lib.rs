//! verless scaffolds content-publishing projects.
//! It provisions the directory layout of new projects and themes, and streams
//! the content files of a tree to a concurrent consumer.

/// Command-line interface definition for the verless binary
pub mod cli;

/// Default project and theme configuration, and per-call options
pub mod config;

/// Fixed file and directory names, default template content
pub mod constants;

/// Project and theme creation
pub mod create;

/// Error types and handling for verless
pub mod error;

/// Reusable filter predicates for content streaming
pub mod filter;

/// Logger initialization for the binary
pub mod logger;

/// Directory creation, file writing and cleanup helpers
pub mod provision;

/// Background walk of a content tree feeding a bounded channel
pub mod stream;

/// Theme directory layout inside a project
pub mod theme;
