use std::sync::LazyLock;

use regex::Regex;

/// Going/track-condition tokens that mark a workout line.
pub const GOING_TOKENS: &[&str] = &["ft", "fm", "my", "yl", "sf", "gd", "tr\\."];

/// Keywords that mark a stat line even without a percent sign.
pub const STAT_MARKERS: &[&str] =
    &["Sire Stats", "Dam'sSire", "SoldAt", "StudFee", "Prime Power", "JKYw"];

/// Fixed handicapping phrases that mark a note line.
pub const NOTE_PHRASES: &[&str] = &[
    "Beaten by weaker",
    "Failed as favorite",
    "Won last race",
    "Moves up in class",
    "Finished 3rd in last race",
];

/// Bullet glyphs the sheet uses to flag stat and note lines.
const STAT_GLYPHS: &[char] = &['ñ', '×', '—', '•'];
const NOTE_GLYPHS: &[char] = &['ñ', 'Ñ', '×', '•', '*', '¶', '-', '—', '+'];

static WORKOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*\d{{2}}[A-Za-z]{{3}}\b.*\b(?:{})\b.*$",
        GOING_TOKENS.join("|")
    ))
    .unwrap()
});

static STAT_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alts: Vec<String> = STAT_MARKERS.iter().map(|m| regex::escape(m)).collect();
    Regex::new(&format!("(?i){}", alts.join("|"))).unwrap()
});

static NOTE_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alts: Vec<String> = NOTE_PHRASES.iter().map(|p| regex::escape(p)).collect();
    Regex::new(&format!("(?i){}", alts.join("|"))).unwrap()
});

/// Workout lines: a ddMMM date token at line start plus a going token
/// somewhere after it. Past-performance dates carry a trailing year
/// ("09Oct25Aqu"), which the word boundary after the month rejects.
pub fn workouts(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| l.len() < 200 && WORKOUT_RE.is_match(l))
        .map(str::to_string)
        .collect()
}

/// Stat lines: anything carrying a percent figure, a known stat marker, or
/// a leading bullet glyph.
pub fn stat_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| {
            l.contains('%') || STAT_MARKER_RE.is_match(l) || l.starts_with(STAT_GLYPHS)
        })
        .map(str::to_string)
        .collect()
}

/// Handicapping notes: non-empty lines flagged by a note glyph or one of the
/// fixed phrases.
pub fn notes(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && (l.starts_with(NOTE_GLYPHS) || NOTE_PHRASE_RE.is_match(l)))
        .map(str::to_string)
        .collect()
}
