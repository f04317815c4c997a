//! Hex color annotation
//!
//! Every `#RRGGBB` in the page's text becomes a small button that copies the
//! value. [`annotate`] does the scanning and is independent of the document;
//! [`annotate_document`] splices its output into the tree.

use std::sync::OnceLock;

use cmc_core::{Document, NodeId};
use regex::Regex;

use crate::config::HexConfig;

static HEX_PATTERN: OnceLock<Regex> = OnceLock::new();

fn hex_pattern() -> &'static Regex {
    // ASCII word boundary: a code directly followed by non-ASCII text still counts
    HEX_PATTERN.get_or_init(|| {
        Regex::new(r"#[0-9A-Fa-f]{6}(?-u:\b)").expect("Invalid regex pattern")
    })
}

/// A run of scanned text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Hex(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Literal(s) | Segment::Hex(s) => s,
        }
    }

    pub fn is_hex(&self) -> bool {
        matches!(self, Segment::Hex(_))
    }
}

/// Split `text` into literal runs and hex color codes.
///
/// Concatenating the segments gives back `text`. Empty literals are omitted.
pub fn annotate(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in hex_pattern().find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Literal(&text[last..m.start()]));
        }
        segments.push(Segment::Hex(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Literal(&text[last..]));
    }
    segments
}

pub fn contains_hex(text: &str) -> bool {
    hex_pattern().is_match(text)
}

/// Replace hex codes under the body with copy controls.
///
/// Returns the controls created, in document order. Text inside skipped tags
/// and inside existing controls is left alone, so running this twice adds
/// nothing the second time.
pub fn annotate_document(doc: &mut Document, config: &HexConfig) -> Vec<NodeId> {
    let body = doc.body();
    let mut targets = Vec::new();
    collect_text_nodes(doc, body, config, &mut targets);

    let mut controls = Vec::new();
    for node in targets {
        let Some(text) = doc.text(node).map(str::to_string) else {
            continue;
        };
        let span = doc.create_element("span");
        for segment in annotate(&text) {
            match segment {
                Segment::Literal(s) => {
                    let literal = doc.create_text(s);
                    doc.append_child(span, literal);
                }
                Segment::Hex(hex) => {
                    let control = doc
                        .build("button")
                        .class(&config.button_class)
                        .attr("data-hex", hex)
                        .attr("title", &format!("Click to copy {hex}"))
                        .text(hex)
                        .append_to(span);
                    controls.push(control);
                }
            }
        }
        if doc.replace(node, span) {
            doc.remove(node);
        } else {
            doc.remove(span);
        }
    }
    tracing::debug!(controls = controls.len(), "hex codes annotated");
    controls
}

fn collect_text_nodes(doc: &Document, node: NodeId, config: &HexConfig, out: &mut Vec<NodeId>) {
    if let Some(text) = doc.text(node) {
        if contains_hex(text) {
            out.push(node);
        }
        return;
    }
    let skip = doc
        .tag(node)
        .is_some_and(|tag| config.skip_tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        || doc.has_class(node, &config.button_class);
    if skip {
        return;
    }
    for &child in doc.children(node) {
        collect_text_nodes(doc, child, config, out);
    }
}
