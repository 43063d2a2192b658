//! CMS Console Core Library
//!
//! This crate provides the core functionality for cms-console, an
//! administration console for a content-management system. It covers the two
//! jobs the console performs against the host framework: inspecting the
//! service container and generating batches of sample content nodes.
//!
//! # Key Features
//!
//! - **Site Definition**: Load the content-type catalog and service registry from YAML
//! - **Parameter Resolution**: Merge command-line values, interactive answers and defaults
//! - **Batch Generation**: Draft nodes with random titles and creation times
//! - **Content Store**: Create nodes with sequential ids, optionally persisted to YAML
//! - **Container Inspection**: List services or describe a single one
//! - **Tables and Messages**: Plain-text tables and a keyed message table
//!
//! # Examples
//!
//! Generating nodes without prompting:
//!
//! ```
//! use chrono::Utc;
//! use cms_console_core::catalog::ContentTypeCatalog;
//! use cms_console_core::content_store::ContentStore;
//! use cms_console_core::generator::BatchGenerator;
//! use cms_console_core::messages::Messages;
//! use cms_console_core::parameters::{
//!     resolve_generation_request, NonInteractivePrompter, RawGenerationInput,
//! };
//! use indexmap::IndexMap;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut entries = IndexMap::new();
//! entries.insert("article".to_string(), "Article".to_string());
//! let catalog = ContentTypeCatalog::new(entries);
//!
//! let raw = RawGenerationInput {
//!     content_types: vec!["article".to_string()],
//!     limit: Some("3".to_string()),
//!     ..RawGenerationInput::default()
//! };
//! let (selection, parameters) = resolve_generation_request(
//!     &raw,
//!     &catalog,
//!     &Messages::default(),
//!     &mut NonInteractivePrompter,
//! )?;
//!
//! let mut store = ContentStore::in_memory(catalog.ids());
//! let mut generator = BatchGenerator::new(StdRng::seed_from_u64(1), Utc::now());
//! let result = generator.generate(&mut store, &selection, &parameters)?;
//! assert_eq!(result.success.len(), 3);
//! # Ok::<(), cms_console_core::error::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod content_store;
pub mod error;
pub mod generator;
pub mod inspector;
pub mod messages;
pub mod parameters;
pub mod site;
pub mod table;
