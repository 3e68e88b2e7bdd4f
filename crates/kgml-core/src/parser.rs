//! # KGML Parser
//!
//! Depth-first walk over a `roxmltree` DOM that builds the pathway graph.
//!
//! ```text
//! document ── pathway* ─┬─ entry ─┬─ graphics*
//!                       │         └─ component*
//!                       ├─ reaction ─┬─ substrate ── alt ── alt ...
//!                       │            └─ product ─── alt ...
//!                       └─ relation ── subtype*
//! ```
//!
//! - Element names match case-insensitively; unknown elements are skipped
//! - Incidental attributes are resolved tolerantly (see `attributes`)
//! - An unknown `entry`, `reaction` or `relation` type aborts the document
//! - No partial results: any error discards every pathway of the document

use crate::attributes::AttributeSource;
use crate::graph::{Entry, Graphics, Pathway, Reaction, ReactionComponent, Relation};
use crate::preprocess::strip_external_dtd;
use crate::vocabulary::{ElementKind, EntryType, GraphicsType, ReactionType, RelationType};
use crate::KgmlError;
use roxmltree::{Document, Node, ParsingOptions};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// =============================================================================
// OPTIONS
// =============================================================================

/// Per-parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserOptions {
    /// Suppress the progress trace.
    pub silent: bool,
    /// Strip the external DTD declaration before parsing.
    pub offline: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            silent: true,
            offline: false,
        }
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// KGML document parser.
///
/// Holds no state besides its options; one instance may parse any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct KgmlParser {
    options: ParserOptions,
}

impl KgmlParser {
    /// Create a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse the KGML file at `path`.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Pathway>, KgmlError> {
        let path = path.as_ref();
        if !self.options.silent {
            tracing::info!("Reading KGML from {}", path.display());
        }
        let file = File::open(path)
            .map_err(|e| KgmlError::IoError(format!("{}: {}", path.display(), e)))?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse a KGML document from an already opened stream.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Vec<Pathway>, KgmlError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse_str(&text)
    }

    /// Parse a KGML document held in memory.
    pub fn parse_str(&self, text: &str) -> Result<Vec<Pathway>, KgmlError> {
        let text = if self.options.offline {
            strip_external_dtd(text)
        } else {
            Cow::Borrowed(text)
        };

        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(&text, options)?;

        let mut pathways = Vec::new();
        for node in doc.root().children().filter(Node::is_element) {
            if kind_of(node) == Some(ElementKind::Pathway) && node.has_children() {
                pathways.push(self.parse_pathway(node)?);
            }
        }
        Ok(pathways)
    }

    /// Parse the file at `path`, logging and swallowing any failure.
    ///
    /// Returns `None` if the file could not be read or parsed.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Option<Vec<Pathway>> {
        let path = path.as_ref();
        match self.parse_file(path) {
            Ok(pathways) => Some(pathways),
            Err(e) => {
                tracing::error!("Failed to parse KGML {}: {}", path.display(), e);
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Pathway level
    // -------------------------------------------------------------------------

    fn parse_pathway(&self, node: Node<'_, '_>) -> Result<Pathway, KgmlError> {
        let mut pathway = Pathway::new(
            node.string("name"),
            node.string("org"),
            node.int("number"),
            node.string("title"),
            node.string("image"),
            node.string("link"),
        );

        for child in node.children().filter(Node::is_element) {
            match kind_of(child) {
                Some(ElementKind::Entry) => pathway.add_entry(self.parse_entry(child)?),
                Some(ElementKind::Reaction) => pathway.add_reaction(self.parse_reaction(child)?),
                Some(ElementKind::Relation) => pathway.add_relation(self.parse_relation(child)?),
                _ if !self.options.silent => {
                    tracing::trace!("Skipping <{}> in pathway", child.tag_name().name());
                }
                _ => {}
            }
        }

        if !self.options.silent {
            tracing::info!(
                "Parsed {}: {} entries, {} reactions, {} relations",
                pathway,
                pathway.entries().len(),
                pathway.reactions().len(),
                pathway.relations().len()
            );
        }
        Ok(pathway)
    }

    // -------------------------------------------------------------------------
    // Entry / Graphics level
    // -------------------------------------------------------------------------

    fn parse_entry(&self, node: Node<'_, '_>) -> Result<Entry, KgmlError> {
        let entry_type: EntryType = node.string("type").parse()?;
        let mut entry = Entry::new(node.int("id"), node.string("name"), entry_type);
        entry.link = node.string("link");
        entry.reaction = node.non_empty("reaction");

        for child in node.children().filter(Node::is_element) {
            match kind_of(child) {
                Some(ElementKind::Graphics) => {
                    entry.graphics.push(parse_graphics(child, entry.is_gene_product()));
                }
                Some(ElementKind::Component) => entry.components.push(child.int("id")),
                _ => {}
            }
        }

        if !self.options.silent {
            tracing::debug!("entry {} {} ({})", entry.id, entry.name, entry.entry_type);
        }
        Ok(entry)
    }

    // -------------------------------------------------------------------------
    // Reaction level
    // -------------------------------------------------------------------------

    fn parse_reaction(&self, node: Node<'_, '_>) -> Result<Reaction, KgmlError> {
        let reaction_type: ReactionType = node.string("type").parse()?;
        let mut reaction = Reaction::new(node.string("name"), reaction_type);
        reaction.id = node.int("id");

        for child in node.children().filter(Node::is_element) {
            match kind_of(child) {
                Some(ElementKind::Substrate) => reaction.substrates.push(parse_component(child)),
                Some(ElementKind::Product) => reaction.products.push(parse_component(child)),
                _ => {}
            }
        }

        if !self.options.silent {
            tracing::debug!(
                "reaction {} ({}): {} substrates, {} products",
                reaction.name,
                reaction.reaction_type,
                reaction.substrates.len(),
                reaction.products.len()
            );
        }
        Ok(reaction)
    }

    // -------------------------------------------------------------------------
    // Relation level
    // -------------------------------------------------------------------------

    fn parse_relation(&self, node: Node<'_, '_>) -> Result<Relation, KgmlError> {
        let relation_type: RelationType = node.string("type").parse()?;
        let mut relation = Relation::new(node.int("entry1"), node.int("entry2"), relation_type);

        for child in node.children().filter(Node::is_element) {
            if kind_of(child) == Some(ElementKind::Subtype) {
                relation
                    .subtypes
                    .insert(child.string("name"), child.string("value"));
            }
        }

        if !self.options.silent {
            tracing::debug!(
                "relation {} -> {} ({})",
                relation.entry1,
                relation.entry2,
                relation.relation_type
            );
        }
        Ok(relation)
    }
}

/// Parse a KGML document with default options.
pub fn parse_kgml(text: &str) -> Result<Vec<Pathway>, KgmlError> {
    KgmlParser::default().parse_str(text)
}

// =============================================================================
// HELPERS
// =============================================================================

fn kind_of(node: Node<'_, '_>) -> Option<ElementKind> {
    ElementKind::from_tag(node.tag_name().name())
}

fn parse_graphics(node: Node<'_, '_>, is_gene_product: bool) -> Graphics {
    let mut graphics = Graphics::new(is_gene_product);
    graphics.name = node.string("name");
    graphics.x = node.int("x");
    graphics.y = node.int("y");
    graphics.shape = GraphicsType::from_token(&node.string("type"));
    graphics.width = node.int("width");
    graphics.height = node.int("height");
    if let Some(fg) = node.non_empty("fgcolor") {
        graphics.fgcolor = fg;
    }
    if let Some(bg) = node.non_empty("bgcolor") {
        graphics.bgcolor = bg;
    }
    graphics.coords = node.int_list("coords");
    graphics
}

/// Build a component and, recursively, its chain of `<alt>` alternatives.
///
/// Only the first `<alt>` child of each node continues the chain.
fn parse_component(node: Node<'_, '_>) -> ReactionComponent {
    let mut component = ReactionComponent::new(node.string("name"));
    component.id = node.int("id");
    component.alt = node
        .children()
        .find(|c| c.is_element() && kind_of(*c) == Some(ElementKind::Alt))
        .map(|alt| Box::new(parse_component(alt)));
    component
}

// =============================================================================
// TESTS
// =============================================================================
