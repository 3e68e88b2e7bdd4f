//! # Document Preprocessor
//!
//! Offline-mode rewrite of the external DTD declaration.
//!
//! KGML files start with
//!
//! ```text
//! <!DOCTYPE pathway SYSTEM "http://www.kegg.jp/kegg/xml/KGML_v0.7.1_.dtd">
//! ```
//!
//! Any line containing `SYSTEM`, `http://` and `pathway` is cut down to
//! `<!DOCTYPE pathway>`: the text up to and including the first `pathway`,
//! followed by whatever starts at the first `[` or `>` after the system
//! literal. An internal subset opened on that line is kept. Every other
//! line, and every line terminator, passes through byte for byte. Newer
//! files reference the DTD over `https://` and are left as they are.

use crate::primitives::{DTD_LINE_MARKERS, DTD_ROOT_TOKEN};
use std::borrow::Cow;

/// Whether `line` is an external DTD declaration for a pathway document.
#[must_use]
pub fn is_external_dtd_line(line: &str) -> bool {
    DTD_LINE_MARKERS.iter().all(|m| line.contains(m))
}

/// Rewrite a single line (without terminator).
///
/// Lines that are not external DTD declarations are returned unchanged.
#[must_use]
pub fn rewrite_dtd_line(line: &str) -> Cow<'_, str> {
    if !is_external_dtd_line(line) {
        return Cow::Borrowed(line);
    }
    let Some(root) = line.find(DTD_ROOT_TOKEN) else {
        return Cow::Borrowed(line);
    };
    let prefix = &line[..root + DTD_ROOT_TOKEN.len()];

    let tail = line
        .find("http://")
        .and_then(|url| {
            let rest = &line[url..];
            // Skip past the closing quote of the system literal when there is one.
            let after = line[..url]
                .chars()
                .next_back()
                .filter(|q| matches!(q, '"' | '\''))
                .and_then(|q| rest.find(q))
                .map_or(rest, |close| &rest[close + 1..]);
            after.find(['[', '>']).map(|start| &after[start..])
        })
        .unwrap_or_default();

    if tail.starts_with('[') {
        Cow::Owned(format!("{prefix} {tail}"))
    } else {
        Cow::Owned(format!("{prefix}{tail}"))
    }
}

/// Strip the external DTD reference from a whole document.
///
/// Returns the input untouched (borrowed) when no line needed rewriting.
#[must_use]
pub fn strip_external_dtd(input: &str) -> Cow<'_, str> {
    if !input.lines().any(is_external_dtd_line) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    for line in input.split_inclusive('\n') {
        let body = line.trim_end_matches(['\n', '\r']);
        let terminator = &line[body.len()..];
        out.push_str(&rewrite_dtd_line(body));
        out.push_str(terminator);
    }
    Cow::Owned(out)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctype_line_is_rewritten() {
        let line = r#"<!DOCTYPE pathway SYSTEM "http://example/x.dtd">"#;
        assert_eq!(rewrite_dtd_line(line), "<!DOCTYPE pathway>");
    }

    #[test]
    fn other_lines_are_untouched() {
        let line = r#"<pathway name="path:map00010" link="http://www.kegg.jp/">"#;
        assert!(matches!(rewrite_dtd_line(line), Cow::Borrowed(_)));

        let https = r#"<!DOCTYPE pathway SYSTEM "https://www.kegg.jp/kegg/xml/KGML_v0.7.2_.dtd">"#;
        assert_eq!(rewrite_dtd_line(https), https);
    }

    #[test]
    fn trailing_content_after_bracket_is_kept() {
        let line = r#"<!DOCTYPE pathway SYSTEM "http://x/KGML.dtd"><!-- c -->"#;
        assert_eq!(rewrite_dtd_line(line), "<!DOCTYPE pathway><!-- c -->");
    }

    #[test]
    fn internal_subset_survives() {
        let line = r#"<!DOCTYPE pathway SYSTEM "http://www.kegg.jp/kegg/xml/KGML_v0.7.1_.dtd" ["#;
        assert_eq!(rewrite_dtd_line(line), "<!DOCTYPE pathway [");

        let single = r#"<!DOCTYPE pathway SYSTEM 'http://x/KGML.dtd'[<!ENTITY a "b">]>"#;
        assert_eq!(
            rewrite_dtd_line(single),
            r#"<!DOCTYPE pathway [<!ENTITY a "b">]>"#
        );
    }

    #[test]
    fn root_token_ends_the_kept_prefix() {
        let line = r#"<!DOCTYPE pathway SYSTEM "http://x/pathway.dtd">"#;
        let out = rewrite_dtd_line(line);
        assert!(out.starts_with("<!DOCTYPE pathway"));
        assert_eq!(out.matches(DTD_ROOT_TOKEN).count(), 1);
        assert_eq!(out, "<!DOCTYPE pathway>");
    }

    #[test]
    fn document_preserves_line_boundaries() {
        let input = "<?xml version=\"1.0\"?>\r\n<!DOCTYPE pathway SYSTEM \"http://www.kegg.jp/kegg/xml/KGML_v0.7.1_.dtd\">\r\n<pathway>\n</pathway>";
        let out = strip_external_dtd(input);
        assert_eq!(
            out,
            "<?xml version=\"1.0\"?>\r\n<!DOCTYPE pathway>\r\n<pathway>\n</pathway>"
        );
    }

    #[test]
    fn document_without_dtd_is_borrowed() {
        let input = "<pathway>\n</pathway>\n";
        assert!(matches!(strip_external_dtd(input), Cow::Borrowed(_)));
    }
}
