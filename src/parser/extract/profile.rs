use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Surface / track-condition codes that start a distance-record line.
pub const SURFACE_CODES: &[&str] = &["AQU", "Fst", "Off", "Dis", "Trf", "AW", "ft", "fm", "yl"];

/// "Color sex. age" on one line, e.g. "Dkbbr. c. 3".
static SEX_AGE_INLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([A-Z][a-zA-Z.]{0,6})\s+([fmcb]\.)\s+(\d{1,2})\b").unwrap()
});

/// Same fields stacked across lines by the text extractor.
static SEX_AGE_STACKED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\n\s*([A-Z][a-zA-Z.]{0,6})\s*\n\s*([fmcb]\.)\s*\n\s*(\d{1,2})").unwrap()
});

/// Bare "sex. age" with no color token.
static SEX_AGE_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([fmcb]\.)\s*(\d{1,2})").unwrap());

static PRIME_POWER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Prime Power:\s*([0-9.]+\s*(?:\([^)]*\))?)").unwrap()
});

static LIFE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bLife:\s*([^\n]+)").unwrap());

static YEAR_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\s*20\d{2})\s+(.+)$").unwrap());

static SURFACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?mi)^\s*({})\b.*$", SURFACE_CODES.join("|"))).unwrap()
});

/// Sex and age, tried in three shapes; the sex code is reported without its
/// trailing dot.
pub fn sex_age(raw: &str) -> Option<(String, String)> {
    for re in [&*SEX_AGE_INLINE_RE, &*SEX_AGE_STACKED_RE] {
        if let Some(caps) = re.captures(raw) {
            return Some((caps[2].trim_end_matches('.').to_string(), caps[3].to_string()));
        }
    }
    SEX_AGE_BARE_RE
        .captures(raw)
        .map(|caps| (caps[1].trim_end_matches('.').to_string(), caps[2].to_string()))
}

pub fn prime_power(raw: &str) -> Option<String> {
    PRIME_POWER_RE.captures(raw).map(|caps| caps[1].trim().to_string())
}

pub fn life(raw: &str) -> Option<String> {
    LIFE_RE.captures(raw).map(|caps| caps[1].trim().to_string())
}

/// Year-by-year summary lines ("2025 5 2-1-1 ..."), in document order.
/// A repeated year overwrites its value but keeps its original position.
pub fn by_year(raw: &str) -> IndexMap<String, String> {
    let mut years = IndexMap::new();
    for caps in YEAR_LINE_RE.captures_iter(raw) {
        years.insert(caps[1].trim().to_string(), caps[2].trim().to_string());
    }
    years
}

/// Lines opening with a known surface code, grouped under the code as it
/// appeared; repeated codes accumulate in order.
pub fn surfaces(raw: &str) -> IndexMap<String, Vec<String>> {
    let mut map: IndexMap<String, Vec<String>> = IndexMap::new();
    for caps in SURFACE_RE.captures_iter(raw) {
        map.entry(caps[1].to_string())
            .or_default()
            .push(caps[0].trim().to_string());
    }
    map
}
