//! # KGML Vocabulary
//!
//! Closed enumerations for the structural tokens of the KGML dialect.
//!
//! | Vocabulary | Attribute | Lookup |
//! |------------|-----------|--------|
//! | [`EntryType`] | `entry/@type` | strict, case-sensitive |
//! | [`ReactionType`] | `reaction/@type` | strict, case-sensitive |
//! | [`RelationType`] | `relation/@type` | strict, case-sensitive |
//! | [`GraphicsType`] | `graphics/@type` | lenient |
//! | [`ElementKind`] | element names | case-insensitive |
//!
//! Structural vocabulary must be known: an unrecognised `entry`, `reaction`
//! or `relation` type is reported as [`KgmlError::UnknownVocabulary`].

use crate::KgmlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// ENTRY TYPE
// =============================================================================

/// Kind of node an [`Entry`](crate::Entry) stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// KEGG orthology group.
    Ortholog,
    /// Enzyme (EC number).
    Enzyme,
    /// Reaction node.
    Reaction,
    /// Gene product of an organism-specific pathway.
    Gene,
    /// Complex of other entries.
    Group,
    /// Chemical compound, glycan or drug.
    Compound,
    /// Link to another pathway map.
    Map,
    /// BRITE hierarchy node.
    Brite,
    /// Anything else.
    Other,
}

impl EntryType {
    /// All variants in declaration order.
    pub const ALL: [EntryType; 9] = [
        EntryType::Ortholog,
        EntryType::Enzyme,
        EntryType::Reaction,
        EntryType::Gene,
        EntryType::Group,
        EntryType::Compound,
        EntryType::Map,
        EntryType::Brite,
        EntryType::Other,
    ];

    /// The KGML token for this entry type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Ortholog => "ortholog",
            EntryType::Enzyme => "enzyme",
            EntryType::Reaction => "reaction",
            EntryType::Gene => "gene",
            EntryType::Group => "group",
            EntryType::Compound => "compound",
            EntryType::Map => "map",
            EntryType::Brite => "brite",
            EntryType::Other => "other",
        }
    }

    /// Whether entries of this type are drawn as gene products.
    #[must_use]
    pub fn is_gene_product(&self) -> bool {
        matches!(self, EntryType::Gene)
    }
}

impl FromStr for EntryType {
    type Err = KgmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| KgmlError::UnknownVocabulary {
                vocabulary: "entry type",
                token: s.to_string(),
            })
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// REACTION TYPE
// =============================================================================

/// Direction of a [`Reaction`](crate::Reaction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    /// Proceeds in both directions.
    Reversible,
    /// Proceeds from substrates to products only.
    Irreversible,
}

impl ReactionType {
    /// The KGML token for this reaction type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionType::Reversible => "reversible",
            ReactionType::Irreversible => "irreversible",
        }
    }
}

impl FromStr for ReactionType {
    type Err = KgmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reversible" => Ok(ReactionType::Reversible),
            "irreversible" => Ok(ReactionType::Irreversible),
            _ => Err(KgmlError::UnknownVocabulary {
                vocabulary: "reaction type",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RELATION TYPE
// =============================================================================

/// Kind of non-reaction edge between two entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RelationType {
    /// Enzyme-enzyme relation (successive reaction steps).
    #[serde(rename = "ECrel")]
    EcRel,
    /// Protein-protein interaction.
    #[serde(rename = "PPrel")]
    PpRel,
    /// Gene expression interaction.
    #[serde(rename = "GErel")]
    GeRel,
    /// Protein-compound interaction.
    #[serde(rename = "PCrel")]
    PcRel,
    /// Link to another map.
    #[serde(rename = "maplink")]
    Maplink,
    /// Anything else.
    #[serde(rename = "other")]
    Other,
}

impl RelationType {
    /// All variants in declaration order.
    pub const ALL: [RelationType; 6] = [
        RelationType::EcRel,
        RelationType::PpRel,
        RelationType::GeRel,
        RelationType::PcRel,
        RelationType::Maplink,
        RelationType::Other,
    ];

    /// The KGML token for this relation type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::EcRel => "ECrel",
            RelationType::PpRel => "PPrel",
            RelationType::GeRel => "GErel",
            RelationType::PcRel => "PCrel",
            RelationType::Maplink => "maplink",
            RelationType::Other => "other",
        }
    }
}

impl FromStr for RelationType {
    type Err = KgmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| KgmlError::UnknownVocabulary {
                vocabulary: "relation type",
                token: s.to_string(),
            })
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// GRAPHICS TYPE
// =============================================================================

/// Shape used to draw an entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum GraphicsType {
    /// Box (genes, orthologs, enzymes).
    #[default]
    Rectangle,
    /// Circle (compounds).
    Circle,
    /// Rounded box (map links).
    RoundRectangle,
    /// Polyline (global maps).
    Line,
    /// Anything else.
    Other,
}

impl GraphicsType {
    /// The KGML token for this shape.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphicsType::Rectangle => "rectangle",
            GraphicsType::Circle => "circle",
            GraphicsType::RoundRectangle => "roundrectangle",
            GraphicsType::Line => "line",
            GraphicsType::Other => "other",
        }
    }

    /// Lenient lookup: absent means the KGML default, unknown means `Other`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "" | "rectangle" => GraphicsType::Rectangle,
            "circle" => GraphicsType::Circle,
            "roundrectangle" => GraphicsType::RoundRectangle,
            "line" => GraphicsType::Line,
            _ => GraphicsType::Other,
        }
    }
}

impl fmt::Display for GraphicsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ELEMENT KIND
// =============================================================================

/// KGML element names recognised by the parser.
///
/// Element names are matched case-insensitively; anything else is ignored
/// by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<pathway>`
    Pathway,
    /// `<entry>`
    Entry,
    /// `<graphics>`
    Graphics,
    /// `<component>` inside a group entry
    Component,
    /// `<reaction>`
    Reaction,
    /// `<substrate>`
    Substrate,
    /// `<product>`
    Product,
    /// `<alt>`
    Alt,
    /// `<relation>`
    Relation,
    /// `<subtype>` inside a relation
    Subtype,
}

impl ElementKind {
    /// Classify an element name, ignoring ASCII case.
    #[must_use]
    pub fn from_tag(name: &str) -> Option<Self> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "pathway" => ElementKind::Pathway,
            "entry" => ElementKind::Entry,
            "graphics" => ElementKind::Graphics,
            "component" => ElementKind::Component,
            "reaction" => ElementKind::Reaction,
            "substrate" => ElementKind::Substrate,
            "product" => ElementKind::Product,
            "alt" => ElementKind::Alt,
            "relation" => ElementKind::Relation,
            "subtype" => ElementKind::Subtype,
            _ => return None,
        };
        Some(kind)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_type_tokens_roundtrip() {
        for t in EntryType::ALL {
            assert_eq!(t.as_str().parse::<EntryType>().expect("parse"), t);
        }
    }

    #[test]
    fn entry_type_lookup_is_case_sensitive() {
        let result = "Gene".parse::<EntryType>();
        assert!(matches!(
            result,
            Err(KgmlError::UnknownVocabulary { vocabulary: "entry type", ref token }) if token == "Gene"
        ));
    }

    #[test]
    fn relation_type_uses_kgml_casing() {
        assert_eq!("PPrel".parse::<RelationType>().expect("parse"), RelationType::PpRel);
        assert_eq!("maplink".parse::<RelationType>().expect("parse"), RelationType::Maplink);
        assert!("pprel".parse::<RelationType>().is_err());
    }

    #[test]
    fn reaction_type_rejects_unknown() {
        assert_eq!(
            "irreversible".parse::<ReactionType>().expect("parse"),
            ReactionType::Irreversible
        );
        assert!("both".parse::<ReactionType>().is_err());
        assert!("".parse::<ReactionType>().is_err());
    }

    #[test]
    fn graphics_type_is_lenient() {
        assert_eq!(GraphicsType::from_token(""), GraphicsType::Rectangle);
        assert_eq!(GraphicsType::from_token("circle"), GraphicsType::Circle);
        assert_eq!(GraphicsType::from_token("hexagon"), GraphicsType::Other);
    }

    #[test]
    fn only_gene_is_gene_product() {
        let gene_products: Vec<_> = EntryType::ALL
            .into_iter()
            .filter(EntryType::is_gene_product)
            .collect();
        assert_eq!(gene_products, vec![EntryType::Gene]);
    }

    #[test]
    fn element_kind_ignores_case() {
        assert_eq!(ElementKind::from_tag("PATHWAY"), Some(ElementKind::Pathway));
        assert_eq!(ElementKind::from_tag("Alt"), Some(ElementKind::Alt));
        assert_eq!(ElementKind::from_tag("reaction"), Some(ElementKind::Reaction));
        assert_eq!(ElementKind::from_tag("legend"), None);
    }

    #[test]
    fn display_matches_token() {
        assert_eq!(RelationType::GeRel.to_string(), "GErel");
        assert_eq!(GraphicsType::RoundRectangle.to_string(), "roundrectangle");
    }
}
