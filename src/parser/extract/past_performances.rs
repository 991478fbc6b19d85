use std::sync::LazyLock;

use regex::Regex;

use crate::parser::record::PastPerformance;

/// Race-type vocabulary, as regex fragments. Longer forms sit before their
/// prefixes so "OC40k" wins over "OC" and "Mdn 40k" over "Mdn".
pub const RACE_TYPES: &[&str] = &[
    r"Mdn\s*\d+k",
    "Mdn",
    r"OC\d+k",
    "OC",
    r"Clm\d+k",
    r"A\d+k",
    "Alw",
    r"G\d",
    r"n\d+x",
    "Stk",
    "Regret",
    "PuckerUp",
    "QEIICup",
    "DGOaks",
    "PENOaksB",
    "SarOkInv",
    "MsGrillo",
];

/// Racing-commentary keywords; a comment runs from the keyword to the next
/// sentence-ending punctuation.
pub const COMMENT_KEYWORDS: &[&str] = &[
    "Ins", "Stmbld", "Stumble", "brush", "drift", "bumped", "bpd", "split", "rallied",
    "tracked", "fought",
];

/// Column header opening the past-performance sub-section.
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)DATE\s+TRK").unwrap());

/// Row-start date code: day, abbreviated month, two-digit year, optional
/// track suffix ("09Oct25Aqu").
static DATE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}[A-Za-z]{3}\d{2}[A-Za-z]*\b").unwrap());

static DIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+(?:[/\d]*|m|f|ˆ|‰))\b").unwrap());

static TIMES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{0,2}:\d{2}(?::\d{2})?").unwrap());

static RACE_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})", RACE_TYPES.join("|"))).unwrap()
});

static FIGURE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{2,3}\b").unwrap());

static FIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([1-9]|1[0-9]|20)\b").unwrap());

/// Uppercase name token, optionally a second one, that must be trailed by
/// another capitalized/punctuation token or the end of the chunk.
static PP_JOCKEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-z.\-]{2,30}(?:\s[A-Z][A-Za-z.\-]{2,30})?)\s*(?:[A-Z¨(\[*]|$)")
        .unwrap()
});

static ODDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\*?\d+\.\d+|\d+/\d+|\d{1,2}\.\d{2}|\*\d+)").unwrap()
});

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})[^.;]*", COMMENT_KEYWORDS.join("|"))).unwrap()
});

/// Pull every past-performance row out of a record span. Rows are anchored
/// on date codes inside the DATE/TRK section (whole span when the header is
/// missing); each field is probed independently and the raw chunk is kept.
pub fn extract(raw: &str) -> Vec<PastPerformance> {
    let section = match SECTION_RE.find(raw) {
        Some(m) => &raw[m.start()..],
        None => raw,
    };
    let lines: Vec<&str> = section
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut rows = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if !DATE_TOKEN_RE.is_match(line) {
            continue;
        }
        // Continuation lines join the current chunk, capped at 5 so a
        // vanished date pattern cannot swallow the rest of the span.
        let mut chunk = line.to_string();
        for cont in lines.iter().skip(i + 1).take(5) {
            if DATE_TOKEN_RE.is_match(cont) {
                break;
            }
            chunk.push(' ');
            chunk.push_str(cont);
        }
        rows.push(parse_row(&chunk));
    }
    rows
}

fn parse_row(chunk: &str) -> PastPerformance {
    let date = DATE_TOKEN_RE
        .find(chunk)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let jockey = PP_JOCKEY_RE
        .captures(chunk)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    // Track guess is only attempted when a jockey-like token anchored the
    // chunk shape; the date code usually swallows the track suffix, so this
    // stays a low-confidence field.
    let track = if jockey.is_empty() {
        String::new()
    } else {
        track_guess(chunk, &date)
    };

    PastPerformance {
        raw: chunk.to_string(),
        date,
        track,
        dist: first_capture(&DIST_RE, chunk),
        times: TIMES_RE
            .find_iter(chunk)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        racetype: RACE_TYPE_RE
            .find(chunk)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        speed: trailing_figure(chunk),
        fin: last_finish_position(chunk),
        jockey,
        odds: first_capture(&ODDS_RE, chunk),
        comment: COMMENT_RE
            .find(chunk)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    }
}

fn first_capture(re: &Regex, chunk: &str) -> String {
    re.captures(chunk)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

fn track_guess(chunk: &str, date: &str) -> String {
    let first = chunk.split_whitespace().next().unwrap_or("");
    let rest = first.strip_prefix(date).unwrap_or(first);
    rest.chars().take(6).collect::<String>().trim().to_string()
}

/// First 2-3 digit standalone number ending within 40 characters of the end
/// of the chunk ("final number before end of content"). Kept as documented
/// behavior even where it picks decimals over figures.
fn trailing_figure(chunk: &str) -> String {
    FIGURE_RE
        .find_iter(chunk)
        .find(|m| chunk.len() - m.end() <= 40)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Last standalone integer in 1..=20 ("last non-overlapping match"). Also
/// kept as documented behavior; the raw chunk is retained for callers that
/// need to second-guess it.
fn last_finish_position(chunk: &str) -> String {
    FIN_RE
        .find_iter(chunk)
        .last()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
