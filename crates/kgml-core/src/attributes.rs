//! # Attribute Resolver
//!
//! Tolerant extraction of typed values from an element's attribute set.
//!
//! - Absent attribute → empty string
//! - Absent or non-numeric integer attribute → `0`
//! - Never fails
//!
//! KGML files in the wild are not schema-validated; a single bad attribute
//! must not sink a whole document.

use std::collections::BTreeMap;

/// Anything that can look up a raw attribute value by key.
///
/// Implemented for XML element nodes and for plain string maps.
pub trait AttributeSource {
    /// Raw value of `key`, if present.
    fn raw(&self, key: &str) -> Option<&str>;

    /// Value of `key`, or the empty string if absent.
    fn string(&self, key: &str) -> String {
        self.raw(key).unwrap_or_default().to_string()
    }

    /// Value of `key` as an integer, or `0` if absent or unparsable.
    fn int(&self, key: &str) -> i32 {
        parse_int(self.raw(key).unwrap_or_default())
    }

    /// Value of `key`, or `None` if absent or empty.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.raw(key)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Comma-separated integers of `key`; unparsable items become `0`.
    fn int_list(&self, key: &str) -> Vec<i32> {
        match self.raw(key) {
            Some(v) if !v.trim().is_empty() => v.split(',').map(parse_int).collect(),
            _ => Vec::new(),
        }
    }
}

/// Parse a decimal integer, treating anything malformed as `0`.
#[must_use]
pub fn parse_int(s: &str) -> i32 {
    s.trim().parse().unwrap_or(0)
}

impl AttributeSource for roxmltree::Node<'_, '_> {
    fn raw(&self, key: &str) -> Option<&str> {
        self.attribute(key)
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn raw(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

// =============================================================================
// TESTS
// =============================================================================
