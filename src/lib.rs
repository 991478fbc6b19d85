//! Best-effort parser for OCR/text-extracted racing-form pages.
//!
//! A page holds several horse records in a whitespace-sensitive tabular
//! layout that text extraction flattens into an undifferentiated stream.
//! The pipeline re-segments that stream on post-position/name anchors, then
//! decomposes each record with independent pattern extractors that leave
//! unrecoverable fields at empty defaults rather than failing. See
//! [`parse_document`] for the one-call entry point.

pub mod parser;

pub use parser::{
    assemble_raw, assemble_record, parse_document, segment_document, Anchor, HorseRecord, Jockey,
    PastPerformance, RecordSpan,
};
