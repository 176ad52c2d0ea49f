//! Shared test utilities for the modlink workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`tree`]: [`ModuleTree`] builder for modules roots, manifests, and
//!   per-module configs in a temp directory

pub mod tree;

pub use tree::ModuleTree;
