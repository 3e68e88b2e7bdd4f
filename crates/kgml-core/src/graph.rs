//! # Pathway Graph Model
//!
//! The in-memory graph produced by the KGML parser.
//!
//! Ownership is strict tree containment:
//!
//! ```text
//! Pathway ─┬─ Entry ──── Graphics
//!          ├─ Reaction ── ReactionComponent ── alt ── alt ...
//!          └─ Relation ·· entry1 / entry2 (integer lookup, not ownership)
//! ```
//!
//! All collections are `Vec`s filled in document order. Entry ids are
//! expected to be unique within a pathway but this is not enforced;
//! [`Pathway::get_entry_for_id`] returns the first match.

use crate::primitives::{
    DEFAULT_BGCOLOR, DEFAULT_FGCOLOR, GENE_PRODUCT_BGCOLOR, PATHWAY_NUMBER_WIDTH,
};
use crate::vocabulary::{EntryType, GraphicsType, ReactionType, RelationType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// PATHWAY
// =============================================================================

/// Root aggregate: one `<pathway>` element.
///
/// Identity fields are fixed at construction. The three collections only
/// grow; nothing is ever removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    name: String,
    org: String,
    number: i32,
    title: String,
    image: String,
    link: String,
    entries: Vec<Entry>,
    reactions: Vec<Reaction>,
    relations: Vec<Relation>,
}

impl Pathway {
    /// Create an empty pathway.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        org: impl Into<String>,
        number: i32,
        title: impl Into<String>,
        image: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            org: org.into(),
            number,
            title: title.into(),
            image: image.into(),
            link: link.into(),
            entries: Vec::new(),
            reactions: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Pathway identifier, e.g. `path:hsa04010`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Organism code, e.g. `hsa` or `map`.
    #[must_use]
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Pathway number as parsed.
    #[must_use]
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Pathway number zero-padded to five digits. Longer numbers are kept whole.
    #[must_use]
    pub fn number_padded(&self) -> String {
        format!("{:0width$}", self.number, width = PATHWAY_NUMBER_WIDTH)
    }

    /// Human readable title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// URL of the pathway image.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// URL of the pathway information page.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    // -------------------------------------------------------------------------
    // Mutation (parse time only)
    // -------------------------------------------------------------------------

    /// Append an entry.
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Append a reaction.
    pub fn add_reaction(&mut self, reaction: Reaction) {
        self.reactions.push(reaction);
    }

    /// Append a relation.
    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Reactions in document order.
    #[must_use]
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Relations in document order.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// First entry whose id equals `id`.
    #[must_use]
    pub fn get_entry_for_id(&self, id: i32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries listing `name` among their space-separated identifiers.
    #[must_use]
    pub fn get_entries_for_name(&self, name: &str) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.has_name(name)).collect()
    }

    /// First reaction called `name`.
    #[must_use]
    pub fn get_reaction_for_name(&self, name: &str) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.name == name)
    }

    /// Relations with `id` as either endpoint.
    pub fn relations_for_entry(&self, id: i32) -> impl Iterator<Item = &Relation> + '_ {
        self.relations
            .iter()
            .filter(move |r| r.entry1 == id || r.entry2 == id)
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} ({})", self.name, self.title)
        }
    }
}

// =============================================================================
// ENTRY
// =============================================================================

/// A node of the pathway diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Id, scoped to the owning pathway.
    pub id: i32,
    /// One or more space-separated KEGG identifiers.
    pub name: String,
    /// Node kind.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// URL of the entry information page.
    pub link: String,
    /// Name of the associated reaction, if any.
    pub reaction: Option<String>,
    /// Drawing information, one per `<graphics>` child.
    pub graphics: Vec<Graphics>,
    /// Member entry ids of a `group` entry.
    pub components: Vec<i32>,
}

impl Entry {
    /// Create an entry without link, reaction, graphics or components.
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            id,
            name: name.into(),
            entry_type,
            link: String::new(),
            reaction: None,
            graphics: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Individual identifiers of the `name` attribute.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.name.split_whitespace()
    }

    /// Whether `name` is one of this entry's identifiers.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    /// Whether this entry is drawn as a gene product.
    #[must_use]
    pub fn is_gene_product(&self) -> bool {
        self.entry_type.is_gene_product()
    }
}

// =============================================================================
// GRAPHICS
// =============================================================================

/// Rendering metadata of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graphics {
    /// Label.
    pub name: String,
    /// Center x coordinate.
    pub x: i32,
    /// Center y coordinate.
    pub y: i32,
    /// Shape.
    #[serde(rename = "type")]
    pub shape: GraphicsType,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Foreground color, `#RRGGBB`.
    pub fgcolor: String,
    /// Background color, `#RRGGBB`.
    pub bgcolor: String,
    /// Polyline points `x1,y1,x2,y2,...` of `line` graphics.
    pub coords: Vec<i32>,
}

impl Graphics {
    /// Empty graphics with the default colors for the owning entry kind.
    #[must_use]
    pub fn new(is_gene_product: bool) -> Self {
        Self {
            name: String::new(),
            x: 0,
            y: 0,
            shape: GraphicsType::default(),
            width: 0,
            height: 0,
            fgcolor: DEFAULT_FGCOLOR.to_string(),
            bgcolor: Self::default_bgcolor(is_gene_product).to_string(),
            coords: Vec::new(),
        }
    }

    /// Background color used when `<graphics>` carries no `bgcolor`.
    #[must_use]
    pub fn default_bgcolor(is_gene_product: bool) -> &'static str {
        if is_gene_product {
            GENE_PRODUCT_BGCOLOR
        } else {
            DEFAULT_BGCOLOR
        }
    }
}

// =============================================================================
// REACTION
// =============================================================================

/// A biochemical transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Id of the reaction node (KGML 0.7 and later), 0 if absent.
    pub id: i32,
    /// Reaction identifier(s), e.g. `rn:R00710`.
    pub name: String,
    /// Direction.
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
    /// `<substrate>` children in document order.
    pub substrates: Vec<ReactionComponent>,
    /// `<product>` children in document order.
    pub products: Vec<ReactionComponent>,
}

impl Reaction {
    /// Create a reaction with no substrates or products.
    #[must_use]
    pub fn new(name: impl Into<String>, reaction_type: ReactionType) -> Self {
        Self {
            id: 0,
            name: name.into(),
            reaction_type,
            substrates: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Whether the reaction can run backwards.
    #[must_use]
    pub fn is_reversible(&self) -> bool {
        self.reaction_type == ReactionType::Reversible
    }
}

// =============================================================================
// REACTION COMPONENT
// =============================================================================

/// A substrate or product, with a forward chain of alternative names.
///
/// Each node owns at most one successor, so the chain is finite and acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionComponent {
    /// Id of the referenced compound entry, 0 if absent.
    pub id: i32,
    /// Compound identifier, e.g. `cpd:C00031`.
    pub name: String,
    /// Alternative for the same chemical role.
    pub alt: Option<Box<ReactionComponent>>,
}

impl ReactionComponent {
    /// Create a component without alternatives.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            alt: None,
        }
    }

    /// Attach `alt` as the direct alternative, replacing any previous one.
    #[must_use]
    pub fn with_alt(mut self, alt: ReactionComponent) -> Self {
        self.alt = Some(Box::new(alt));
        self
    }

    /// This component followed by every alternative, in chain order.
    pub fn alt_chain(&self) -> impl Iterator<Item = &ReactionComponent> + '_ {
        std::iter::successors(Some(self), |c| c.alt.as_deref())
    }

    /// Number of nodes in the chain, including this one.
    #[must_use]
    pub fn chain_len(&self) -> usize {
        self.alt_chain().count()
    }
}

// =============================================================================
// RELATION
// =============================================================================

/// A non-reaction edge between two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Id of the first entry.
    pub entry1: i32,
    /// Id of the second entry.
    pub entry2: i32,
    /// Edge kind.
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    /// `<subtype>` children: name -> value.
    pub subtypes: BTreeMap<String, String>,
}

impl Relation {
    /// Create a relation without subtypes.
    #[must_use]
    pub fn new(entry1: i32, entry2: i32, relation_type: RelationType) -> Self {
        Self {
            entry1,
            entry2,
            relation_type,
            subtypes: BTreeMap::new(),
        }
    }

    /// Resolve both endpoints in `pathway`.
    #[must_use]
    pub fn endpoints<'p>(&self, pathway: &'p Pathway) -> (Option<&'p Entry>, Option<&'p Entry>) {
        (
            pathway.get_entry_for_id(self.entry1),
            pathway.get_entry_for_id(self.entry2),
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Pathway {
        let mut p = Pathway::new("path:map00010", "map", 10, "Glycolysis", "", "");
        p.add_entry(Entry::new(1, "hsa:3101 hsa:3098", EntryType::Gene));
        p.add_entry(Entry::new(2, "cpd:C00031", EntryType::Compound));
        p.add_entry(Entry::new(1, "hsa:9999", EntryType::Gene));
        p.add_relation(Relation::new(1, 2, RelationType::PcRel));
        p
    }

    #[test]
    fn number_padding() {
        let p = Pathway::new("", "", 42, "", "", "");
        assert_eq!(p.number_padded(), "00042");

        let wide = Pathway::new("", "", 123_456, "", "", "");
        assert_eq!(wide.number_padded(), "123456");
    }

    #[test]
    fn get_entry_for_id_returns_first_match() {
        let p = sample();
        let e = p.get_entry_for_id(1).expect("entry 1");
        assert_eq!(e.name, "hsa:3101 hsa:3098");
        assert!(p.get_entry_for_id(7).is_none());
    }

    #[test]
    fn entries_by_name_split_on_whitespace() {
        let p = sample();
        let hits = p.get_entries_for_name("hsa:3098");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert!(p.get_entries_for_name("hsa:310").is_empty());
    }

    #[test]
    fn relation_endpoints_resolve() {
        let p = sample();
        let (a, b) = p.relations()[0].endpoints(&p);
        assert_eq!(a.map(|e| e.entry_type), Some(EntryType::Gene));
        assert_eq!(b.map(|e| e.entry_type), Some(EntryType::Compound));
        assert_eq!(p.relations_for_entry(2).count(), 1);
        assert_eq!(p.relations_for_entry(5).count(), 0);
    }

    #[test]
    fn graphics_default_colors() {
        assert_eq!(Graphics::new(true).bgcolor, GENE_PRODUCT_BGCOLOR);
        assert_eq!(Graphics::new(false).bgcolor, DEFAULT_BGCOLOR);
        assert_eq!(Graphics::new(false).fgcolor, DEFAULT_FGCOLOR);
    }

    #[test]
    fn alt_chain_walks_forward() {
        let c = ReactionComponent::new("A")
            .with_alt(ReactionComponent::new("B").with_alt(ReactionComponent::new("C")));
        let names: Vec<_> = c.alt_chain().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(c.chain_len(), 3);
        assert_eq!(ReactionComponent::new("X").chain_len(), 1);
    }

    #[test]
    fn display_includes_title() {
        assert_eq!(sample().to_string(), "path:map00010 (Glycolysis)");
        assert_eq!(Pathway::new("path:x", "", 0, "", "", "").to_string(), "path:x");
    }
}
