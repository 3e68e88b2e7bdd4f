//! # Property-Based Tests
//!
//! Invariants of the resolver, the preprocessor and the parser, checked with
//! proptest.

use kgml_core::attributes::parse_int;
use kgml_core::preprocess::{is_external_dtd_line, strip_external_dtd};
use kgml_core::{Pathway, parse_kgml};
use proptest::collection::vec;
use proptest::prelude::*;

/// Build `<substrate name="n0"><alt name="n1">...</alt></substrate>`.
fn nested_component(names: &[String]) -> String {
    let mut xml = String::new();
    for (depth, name) in names.iter().enumerate() {
        let tag = if depth == 0 { "substrate" } else { "alt" };
        xml.push_str(&format!("<{tag} name=\"{name}\">"));
    }
    for depth in (0..names.len()).rev() {
        let tag = if depth == 0 { "substrate" } else { "alt" };
        xml.push_str(&format!("</{tag}>"));
    }
    xml
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Padded numbers are at least five wide and parse back to the number.
    #[test]
    fn padded_number_roundtrips(number in 0i32..10_000_000) {
        let p = Pathway::new("", "", number, "", "", "");
        let padded = p.number_padded();

        prop_assert!(padded.len() >= 5);
        prop_assert_eq!(padded.parse::<i32>().expect("digits"), number);
        if number >= 100_000 {
            prop_assert_eq!(padded, number.to_string());
        }
    }

    /// Integers round-trip; anything alphabetic resolves to zero.
    #[test]
    fn integer_resolver(n in any::<i32>(), junk in "[a-zA-Z]{1,8}") {
        prop_assert_eq!(parse_int(&n.to_string()), n);
        prop_assert_eq!(parse_int(&junk), 0);
    }

    /// Lines without a DTD declaration pass through byte for byte.
    #[test]
    fn preprocessor_preserves_plain_lines(
        lines in vec("[ -~]{0,40}", 0..20),
        crlf in any::<bool>()
    ) {
        prop_assume!(!lines.iter().any(|l| is_external_dtd_line(l)));

        let sep = if crlf { "\r\n" } else { "\n" };
        let mut input = lines.join(sep);
        input.push_str(sep);
        input.push_str(r#"<!DOCTYPE pathway SYSTEM "http://www.kegg.jp/kegg/xml/KGML_v0.7.2_.dtd">"#);
        input.push_str(sep);

        let out = strip_external_dtd(&input);
        let expected_lines: Vec<String> = input
            .split(sep)
            .map(|l| if is_external_dtd_line(l) { "<!DOCTYPE pathway>".to_string() } else { l.to_string() })
            .collect();
        prop_assert_eq!(out.into_owned(), expected_lines.join(sep));
    }

    /// Alt chain length equals nesting depth.
    #[test]
    fn alt_chain_matches_nesting(names in vec("[A-Za-z0-9:]{1,10}", 1..12)) {
        let doc = format!(
            r#"<pathway><reaction name="r" type="reversible">{}</reaction></pathway>"#,
            nested_component(&names)
        );
        let pathways = parse_kgml(&doc).expect("parse");
        let component = &pathways[0].reactions()[0].substrates[0];

        prop_assert_eq!(component.chain_len(), names.len());
        let parsed: Vec<String> = component.alt_chain().map(|c| c.name.clone()).collect();
        prop_assert_eq!(parsed, names);
    }

    /// Every parsed entry is found again by its id.
    #[test]
    fn entries_resolve_by_id(ids in vec(-1000i32..1000, 1..30)) {
        let mut doc = String::from("<pathway>");
        for id in &ids {
            doc.push_str(&format!(r#"<entry id="{id}" name="x" type="gene"/>"#));
        }
        doc.push_str("</pathway>");

        let pathways = parse_kgml(&doc).expect("parse");
        let p = &pathways[0];
        prop_assert_eq!(p.entries().len(), ids.len());
        for e in p.entries() {
            prop_assert!(p.get_entry_for_id(e.id).is_some());
        }
    }
}
