//! # KGML Primitives
//!
//! Fixed constants of the KGML dialect as consumed by this crate.
//!
//! These are compiled into the binary and are immutable at runtime.

/// Width of the zero-padded pathway number (`map00010`).
///
/// Numbers with more digits are rendered in full, never truncated.
pub const PATHWAY_NUMBER_WIDTH: usize = 5;

/// Default foreground color of a graphics element.
pub const DEFAULT_FGCOLOR: &str = "#000000";

/// Default background color of a graphics element drawn for a gene product.
pub const GENE_PRODUCT_BGCOLOR: &str = "#BFFFBF";

/// Default background color of any other graphics element.
pub const DEFAULT_BGCOLOR: &str = "#FFFFFF";

// =============================================================================
// OFFLINE PREPROCESSING MARKERS
// =============================================================================

/// A line is an external DTD declaration only if it contains all of these.
pub const DTD_LINE_MARKERS: [&str; 3] = ["SYSTEM", "http://", "pathway"];

/// The declaration is cut right after this token.
pub const DTD_ROOT_TOKEN: &str = "pathway";
