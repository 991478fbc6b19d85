use std::sync::LazyLock;

use regex::Regex;

use crate::parser::record::Jockey;

/// "NAME TOKENS (record summary)" at line start.
static JOCKEY_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([A-Z][A-Z.\-'\s]{2,60})\s*\(([^)]+)\)").unwrap());

/// Looser per-line form tolerating digits in the name run.
static JOCKEY_LOOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z0-9.\s]{3,60})\s*\(([^)]+)\)").unwrap());

static UPPER_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z.\s]{2,40}$").unwrap());

/// Win-place-show record triple, e.g. "215 48-39-28".
static RECORD_TRIPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s+\d+-\d+-\d+").unwrap());

/// Locate `Label: value` on one line (case-insensitive), or a line holding
/// only the label followed by the value on the next non-empty line.
pub fn value_after_label(label: &str, raw: &str) -> Option<String> {
    let esc = regex::escape(label);
    let same_line = Regex::new(&format!(r"(?mi)^\s*{esc}\s*:\s*(.+)$")).unwrap();
    if let Some(caps) = same_line.captures(raw) {
        return Some(caps[1].trim().to_string());
    }

    let label_line = Regex::new(&format!(r"(?mi)^\s*{esc}\s*$")).unwrap();
    let m = label_line.find(raw)?;
    raw[m.end()..]
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

/// Jockey name and record. Prefers "UPPERCASE NAME (record)" anywhere in the
/// span; otherwise scans the first 10 lines for a looser parenthesized form,
/// then for a bare uppercase line optionally paired with a record triple on
/// the following line.
pub fn jockey(raw: &str) -> Option<Jockey> {
    if let Some(caps) = JOCKEY_PAREN_RE.captures(raw) {
        return Some(Jockey {
            name: caps[1].trim().to_string(),
            record: caps[2].trim().to_string(),
        });
    }

    let lines: Vec<&str> = raw.lines().map(str::trim).take(10).collect();
    for line in &lines {
        if let Some(caps) = JOCKEY_LOOSE_RE.captures(line) {
            return Some(Jockey {
                name: caps[1].trim().to_string(),
                record: caps[2].trim().to_string(),
            });
        }
    }
    for (i, line) in lines.iter().enumerate() {
        if UPPER_LINE_RE.is_match(line) {
            let next = lines.get(i + 1).copied().unwrap_or("");
            let record = if RECORD_TRIPLE_RE.is_match(next) {
                next.to_string()
            } else {
                String::new()
            };
            return Some(Jockey {
                name: line.to_string(),
                record,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_on_same_line() {
        let raw = "3  HORSE (A1)\nOwn: Meadow Stable\nTrnr: Lucien Laurin\n";
        assert_eq!(value_after_label("Own", raw).as_deref(), Some("Meadow Stable"));
        assert_eq!(value_after_label("Trnr", raw).as_deref(), Some("Lucien Laurin"));
    }

    #[test]
    fn label_then_value_on_next_line() {
        let raw = "Sire\n\nCurlin (Smart Strike)\n";
        assert_eq!(value_after_label("Sire", raw).as_deref(), Some("Curlin (Smart Strike)"));
    }

    #[test]
    fn label_is_case_insensitive() {
        assert_eq!(value_after_label("owner", "OWNER: Calumet Farm\n").as_deref(), Some("Calumet Farm"));
    }

    #[test]
    fn label_prefix_does_not_cross_match() {
        // "Own" must not match inside "Owner:".
        assert_eq!(value_after_label("Own", "Owner: Calumet Farm\n"), None);
    }

    #[test]
    fn missing_label_is_none() {
        assert_eq!(value_after_label("Brdr", "nothing relevant\n"), None);
    }

    #[test]
    fn jockey_parenthesized_line() {
        let raw = "1  HORSE (E 2)\nORTIZ IRAD JR (215 48-39-28 22%)\n";
        let j = jockey(raw).unwrap();
        assert_eq!(j.name, "ORTIZ IRAD JR");
        assert_eq!(j.record, "215 48-39-28 22%");
    }

    #[test]
    fn jockey_bare_uppercase_with_record_triple() {
        let raw = "some header\nCIVACI SAHIN\n12 1-2-0\n";
        let j = jockey(raw).unwrap();
        assert_eq!(j.name, "CIVACI SAHIN");
        assert_eq!(j.record, "12 1-2-0");
    }

    #[test]
    fn jockey_bare_uppercase_without_record() {
        let raw = "header line here\nVELAZQUEZ J.R\nlowercase follows\n";
        let j = jockey(raw).unwrap();
        assert_eq!(j.name, "VELAZQUEZ J.R");
        assert_eq!(j.record, "");
    }

    #[test]
    fn jockey_absent() {
        assert_eq!(jockey("no uppercase runs here\nat all\n"), None);
    }
}
