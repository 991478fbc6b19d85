pub mod extract;
pub mod record;
pub mod segment;

use rayon::prelude::*;

pub use extract::{assemble_raw, assemble_record};
pub use record::{HorseRecord, Jockey, PastPerformance};
pub use segment::{segment_document, Anchor, RecordSpan};

/// Two-stage pipeline: document → record spans → assembled records.
/// Spans are independent, so assembly fans out across threads; the indexed
/// collect re-joins results in span (document) order.
pub fn parse_document(text: &str) -> Vec<HorseRecord> {
    let spans = segment::segment_document(text);
    spans.par_iter().map(extract::assemble_record).collect()
}

// ── Tests ──
