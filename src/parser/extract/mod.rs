pub mod annotations;
pub mod connections;
pub mod header;
pub mod past_performances;
pub mod profile;

use crate::parser::record::HorseRecord;
use crate::parser::segment::RecordSpan;

/// Assemble one horse record from a span. Every extractor is best-effort;
/// whatever cannot be recovered stays at its empty default, so this never
/// fails and partial records are first-class output.
pub fn assemble_record(span: &RecordSpan) -> HorseRecord {
    let raw = &span.raw;

    let (hdr_post, hdr_name, tag) = header::header_fields(raw);
    let owner = connections::value_after_label("Own", raw)
        .or_else(|| connections::value_after_label("Owner", raw));
    let silks = header::silks(raw, owner.as_deref());
    let (sex, age) = profile::sex_age(raw).unwrap_or_default();

    HorseRecord {
        post: span.post.or(hdr_post),
        name: span.name.clone().or(hdr_name).unwrap_or_default(),
        tag: tag.unwrap_or_default(),
        raw: raw.clone(),
        owner: owner.unwrap_or_default(),
        silks: silks.unwrap_or_default(),
        odds: header::odds(raw).unwrap_or_default(),
        jockey: connections::jockey(raw).unwrap_or_default(),
        sex,
        age,
        sire: connections::value_after_label("Sire", raw).unwrap_or_default(),
        dam: connections::value_after_label("Dam", raw).unwrap_or_default(),
        breeder: connections::value_after_label("Brdr", raw).unwrap_or_default(),
        trainer: connections::value_after_label("Trnr", raw).unwrap_or_default(),
        prime_power: profile::prime_power(raw).unwrap_or_default(),
        life: profile::life(raw).unwrap_or_default(),
        by_year: profile::by_year(raw),
        surfaces: profile::surfaces(raw),
        stat_lines: annotations::stat_lines(raw),
        workouts: annotations::workouts(raw),
        notes: annotations::notes(raw),
        past_performances: past_performances::extract(raw),
    }
}

/// Assemble from bare text with no pre-known post/name; header heuristics
/// get to recover what they can.
pub fn assemble_raw(raw: &str) -> HorseRecord {
    assemble_record(&RecordSpan {
        post: None,
        name: None,
        raw: raw.trim().to_string(),
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::segment::segment_document;

    fn fixture_records() -> Vec<HorseRecord> {
        let text = std::fs::read_to_string("tests/fixtures/aqueduct.txt").unwrap();
        segment_document(&text).iter().map(assemble_record).collect()
    }

    #[test]
    fn first_horse_identity_and_connections() {
        let records = fixture_records();
        assert_eq!(records.len(), 2);
        let r = &records[0];
        assert_eq!(r.post, Some(1));
        assert_eq!(r.name, "COASTAL EMPIRE");
        assert_eq!(r.tag, "(E 2)");
        assert_eq!(r.owner, "Seaside Racing Stable");
        assert_eq!(r.silks, "Royal blue, white diamond belt, white cap");
        assert_eq!(r.odds, "5/2");
        assert_eq!(r.jockey.name, "ORTIZ IRAD JR");
        assert_eq!(r.jockey.record, "215 48-39-28 22%");
        assert_eq!(r.sire, "Curlin (Smart Strike)");
        assert_eq!(r.dam, "Tidal Pool (Tapit)");
        assert_eq!(r.breeder, "Stonestreet Farm (KY)");
        assert_eq!(r.trainer, "Brown Chad (112 28-20-15 25%)");
    }

    #[test]
    fn first_horse_profile_and_stats() {
        let r = &fixture_records()[0];
        assert_eq!(r.sex, "c");
        assert_eq!(r.age, "3");
        assert_eq!(r.prime_power, "112.4 (1st)");
        assert_eq!(r.life, "8 3-2-1 $412,300 86");
        let years: Vec<&String> = r.by_year.keys().collect();
        assert_eq!(years, ["2025", "2024"]);
        let codes: Vec<&String> = r.surfaces.keys().collect();
        assert_eq!(codes, ["Fst", "Off", "Trf"]);
        assert_eq!(r.workouts, vec!["28Jun Aqu 5f ft 1:03 B"]);
        assert_eq!(r.notes.len(), 2);
        assert!(r.stat_lines.iter().any(|l| l.starts_with("JKYw")));
    }

    #[test]
    fn first_horse_past_performances() {
        let r = &fixture_records()[0];
        assert_eq!(r.past_performances.len(), 3);
        let pp = &r.past_performances[0];
        assert_eq!(pp.date, "09Oct25Aqu");
        assert_eq!(pp.racetype, "OC40k");
        assert_eq!(pp.speed, "86");
        assert_eq!(pp.fin, "4");
        assert_eq!(pp.jockey, "ORTIZ IRAD");
        assert_eq!(pp.odds, "*1.40");
        assert_eq!(r.past_performances[1].racetype, "G2");
        assert_eq!(r.past_performances[2].racetype, "Mdn 40k");
    }

    #[test]
    fn second_horse_assembles_independently() {
        let r = &fixture_records()[1];
        assert_eq!(r.post, Some(2));
        assert_eq!(r.name, "BISCUIT RUN");
        assert_eq!(r.tag, "(B 4)");
        assert_eq!(r.odds, "9/5");
        assert_eq!(r.jockey.name, "VELAZQUEZ JOHN R");
        assert_eq!((r.sex.as_str(), r.age.as_str()), ("f", "4"));
        assert_eq!(r.prime_power, "108.9 (3rd)");
        assert!(r.workouts.is_empty());
        assert_eq!(r.past_performances.len(), 2);
        assert_eq!(r.past_performances[0].racetype, "Alw");
        assert_eq!(r.past_performances[1].racetype, "Clm25k");
        assert!(r.past_performances[1].comment.contains("bumped"));
    }

    #[test]
    fn unrecoverable_fields_keep_their_defaults() {
        let r = assemble_raw("completely unrelated prose with no racing content at all");
        assert_eq!(r.post, None);
        assert_eq!(r.name, "");
        assert_eq!(r.tag, "");
        assert_eq!(r.owner, "");
        assert_eq!(r.silks, "");
        assert_eq!(r.odds, "");
        assert_eq!(r.jockey, Default::default());
        assert_eq!((r.sex.as_str(), r.age.as_str()), ("", ""));
        assert_eq!(r.prime_power, "");
        assert_eq!(r.life, "");
        assert!(r.by_year.is_empty());
        assert!(r.surfaces.is_empty());
        assert!(r.stat_lines.is_empty());
        assert!(r.workouts.is_empty());
        assert!(r.notes.is_empty());
        assert!(r.past_performances.is_empty());
    }

    #[test]
    fn assembly_is_idempotent() {
        let text = std::fs::read_to_string("tests/fixtures/aqueduct.txt").unwrap();
        let spans = segment_document(&text);
        assert_eq!(assemble_record(&spans[0]), assemble_record(&spans[0]));
    }

    #[test]
    fn prime_power_line_recovered_from_any_span() {
        let r = assemble_raw("some header\nPrime Power: 112.4 (1st)\nmore text\n");
        assert_eq!(r.prime_power, "112.4 (1st)");
    }
}
