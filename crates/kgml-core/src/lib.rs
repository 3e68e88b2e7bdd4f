//! # kgml-core
//!
//! KEGG Markup Language (KGML) parser and pathway graph model.
//!
//! This crate turns a KGML document into a typed graph: a [`Pathway`] owning
//! its [`Entry`] nodes, [`Reaction`]s and [`Relation`] edges.
//!
//! ## Pipeline
//!
//! ```text
//! file / stream ──► preprocess (offline only) ──► roxmltree DOM ──► KgmlParser ──► Vec<Pathway>
//! ```
//!
//! ## Architectural Constraints
//!
//! - Synchronous, single pass, no network access
//! - No process-wide state: behavior is set through [`ParserOptions`]
//! - Tolerant attributes, strict vocabulary
//!
//! ## Example
//!
//! ```
//! use kgml_core::{KgmlParser, ParserOptions};
//!
//! let xml = r#"<pathway name="path:map00010" number="10">
//!     <entry id="1" name="cpd:C00031" type="compound"/>
//! </pathway>"#;
//!
//! let pathways = KgmlParser::new(ParserOptions::default()).parse_str(xml)?;
//! assert_eq!(pathways[0].number_padded(), "00010");
//! assert!(pathways[0].get_entry_for_id(1).is_some());
//! # Ok::<(), kgml_core::KgmlError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod attributes;
pub mod graph;
pub mod parser;
pub mod preprocess;
pub mod primitives;
pub mod types;
pub mod vocabulary;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::KgmlError;
pub use vocabulary::{ElementKind, EntryType, GraphicsType, ReactionType, RelationType};

// =============================================================================
// RE-EXPORTS: Graph Model
// =============================================================================

pub use graph::{Entry, Graphics, Pathway, Reaction, ReactionComponent, Relation};

// =============================================================================
// RE-EXPORTS: Parsing
// =============================================================================

pub use attributes::AttributeSource;
pub use parser::{KgmlParser, ParserOptions, parse_kgml};
pub use preprocess::strip_external_dtd;
