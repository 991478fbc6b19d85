use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

/// Post position 1-20 at line start, 1-3 spaces, horse name, "(" immediate.
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([1-9]|1[0-9]|20)\s{1,3}([A-Za-z0-9/'’.\-\s]+?)\s*\(").unwrap()
});

/// Looser stacked layout: a line holding only the post digits, then one or
/// more line breaks, then a name-like line ended by a line break.
static STACKED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([1-9]|1[0-9]|20)\s*\n+\s*([A-Za-z0-9/'’.\- ]+)\s*\n").unwrap()
});

/// A located record-start signature. Offsets are byte positions into the
/// normalized document and strictly increase across a scan.
#[derive(Debug, Clone)]
pub struct Anchor {
    pub offset: usize,
    pub post: u8,
    pub name: String,
}

/// Contiguous raw-text region belonging to one horse record. Owns its text;
/// carries no reference back to the document it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSpan {
    pub post: Option<u8>,
    pub name: Option<String>,
    pub raw: String,
}

type AnchorScan = fn(&str) -> Vec<Anchor>;

/// Anchor strategies in preference order. Each is a stateless scan over the
/// normalized document; the first one that yields any anchors wins.
const STRATEGIES: &[(&str, AnchorScan)] = &[
    ("anchored", scan_anchored),
    ("stacked", scan_stacked),
];

/// Split a document into per-horse spans. Returns an empty vec only for
/// empty input; anything else produces at least one span (the whole document
/// when no anchor strategy matches).
pub fn segment_document(text: &str) -> Vec<RecordSpan> {
    if text.is_empty() {
        return Vec::new();
    }
    // CRLF and stray CR become LF so every downstream pattern matches one
    // line-ending convention.
    let doc = text.replace('\r', "\n");

    for (label, scan) in STRATEGIES {
        let anchors = scan(&doc);
        if !anchors.is_empty() {
            debug!("{} scan found {} record anchors", label, anchors.len());
            return spans_between(&doc, &anchors);
        }
    }

    warn!("no record anchors found, falling back to a single whole-document span");
    vec![RecordSpan {
        post: None,
        name: None,
        raw: doc.trim().to_string(),
    }]
}

fn scan_anchored(doc: &str) -> Vec<Anchor> {
    collect_anchors(&ANCHOR_RE, doc)
}

fn scan_stacked(doc: &str) -> Vec<Anchor> {
    collect_anchors(&STACKED_RE, doc)
}

fn collect_anchors(re: &Regex, doc: &str) -> Vec<Anchor> {
    re.captures_iter(doc)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let post = caps[1].parse().ok()?;
            Some(Anchor {
                offset: m.start(),
                post,
                name: caps[2].trim().to_string(),
            })
        })
        .collect()
}

/// Each span runs from one anchor's offset to the next anchor's offset, or
/// to end of document for the last. Overlapping or false-positive anchors
/// (a name containing digits that look like a post position) are kept as-is
/// rather than validated away.
fn spans_between(doc: &str, anchors: &[Anchor]) -> Vec<RecordSpan> {
    anchors
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let end = anchors.get(i + 1).map_or(doc.len(), |next| next.offset);
            RecordSpan {
                post: Some(a.post),
                name: Some(a.name.clone()),
                raw: doc[a.offset..end].trim().to_string(),
            }
        })
        .collect()
}
