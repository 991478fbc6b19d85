use std::sync::LazyLock;

use regex::Regex;

/// Leading integer, name text, optional trailing parenthetical tag.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2})\s+([A-Za-z0-9/'’.\- ]+?)\s*(\([^)]*\))?\s*$").unwrap()
});

/// Jockey-shaped line: an uppercase run followed by a parenthetical.
static JOCKEY_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z.,\-'\s]{2,60}\(").unwrap());

static FRACTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+/\d+\b").unwrap());
static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\.\d+\b").unwrap());
static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());

/// Recover (post, name, tag) from the first lines of a span. Used when the
/// segmenter could not supply post/name (whole-document fallback), and for
/// the tag even when it could.
pub fn header_fields(raw: &str) -> (Option<u8>, Option<String>, Option<String>) {
    for line in raw.lines().take(3) {
        if let Some(caps) = HEADER_RE.captures(line) {
            let post = caps[1].parse().ok();
            let name = Some(caps[2].trim().to_string());
            let tag = caps.get(3).map(|m| m.as_str().to_string());
            return (post, name, tag);
        }
    }
    (None, None, None)
}

/// Silks description. Primary: a comma-carrying line among the first 8
/// non-empty lines that is not jockey-shaped. Positional fallback: the first
/// substantial line right after the owner's text.
pub fn silks(raw: &str, owner: Option<&str>) -> Option<String> {
    let top: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(8)
        .collect();
    for line in &top {
        if line.contains(',') && line.len() > 8 && !JOCKEY_SHAPE_RE.is_match(line) {
            return Some(line.to_string());
        }
    }

    let owner = owner?;
    let (_, after) = raw.split_once(owner)?;
    let cand = after.lines().map(str::trim).find(|l| !l.is_empty())?;
    (cand.len() > 6).then(|| cand.to_string())
}

/// Morning-line odds from the header zone (first 4 lines). Fractional form
/// wins over decimal, decimal over a bare integer, so the post position only
/// surfaces when no real odds token is present.
pub fn odds(raw: &str) -> Option<String> {
    let zone = raw.lines().take(4).collect::<Vec<_>>().join(" ");
    for re in [&*FRACTION_RE, &*DECIMAL_RE, &*INTEGER_RE] {
        if let Some(m) = re.find(&zone) {
            return Some(m.as_str().to_string());
        }
    }
    None
}
