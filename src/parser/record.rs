use indexmap::IndexMap;
use serde::Serialize;

/// Riding assignment for the current race: name plus the parenthesized
/// starts/record summary, both verbatim from the sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Jockey {
    pub name: String,
    pub record: String,
}

/// One historical start, recovered from a date-anchored chunk of the
/// DATE/TRK section. Every field except `raw` is a best-effort guess;
/// `raw` keeps the full chunk so callers can re-read anything the
/// heuristics mis-assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PastPerformance {
    pub raw: String,
    pub date: String,
    pub track: String,
    pub dist: String,
    pub times: String,
    pub racetype: String,
    pub speed: String,
    pub fin: String,
    pub jockey: String,
    pub odds: String,
    pub comment: String,
}

/// Assembled output for one horse. Empty string / empty collection means
/// the field's pattern never matched in the span, which is a normal state
/// rather than an error. `by_year` and `surfaces` preserve document order
/// of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HorseRecord {
    pub post: Option<u8>,
    pub name: String,
    pub tag: String,
    pub raw: String,
    pub owner: String,
    pub silks: String,
    pub odds: String,
    pub jockey: Jockey,
    pub sex: String,
    pub age: String,
    pub sire: String,
    pub dam: String,
    pub breeder: String,
    pub trainer: String,
    pub prime_power: String,
    pub life: String,
    pub by_year: IndexMap<String, String>,
    pub surfaces: IndexMap<String, Vec<String>>,
    pub stat_lines: Vec<String>,
    pub workouts: Vec<String>,
    pub notes: Vec<String>,
    pub past_performances: Vec<PastPerformance>,
}
