use repaircost_log::{chunk_messages, LogParser, PairingPolicy, ParserConfig, Schema};

const MINIMAL_LOG: &str = "\
[08:15:39] [Server thread/INFO]: Player joined the game
[08:15:40] [Server thread/INFO]: [CHAT] Welcome back
[08:15:42] [Server thread/INFO]: [CHAT] SUPPLIES NEEDED
[08:15:42] [Server thread/INFO]: [CHAT] Wood : 5
[08:15:42] [Server thread/INFO]: [CHAT] Stone : 3
[08:15:42] [Server thread/INFO]: [CHAT] Seconds to complete repair: 120
[08:15:42] [Server thread/INFO]: [CHAT] Money to complete repair: 50
[08:15:43] [Server thread/INFO]: [CHAT] Repair in progress. Assigned workers: 0
[08:30:00] [Server thread/INFO]: Player left the game
[09:10:11] [Server thread/INFO]: [CHAT] SUPPLIES NEEDED
[09:10:11] [Server thread/INFO]: [CHAT] Iron Ingot : 9
[09:10:11] [Server thread/INFO]: [CHAT] Seconds to complete repair: 30
[09:10:11] [Server thread/INFO]: [CHAT] Money to complete repair: 12.5
[09:10:12] [Server thread/INFO]: Server overloaded, skipping ticks
";

const EXTENDED_LOG: &str = "\
[17:03:59] [Server thread/INFO]: [CHAT] SUPPLIES NEEDED
[17:03:59] [Server thread/INFO]: [CHAT] Total damaged blocks: 250
[17:03:59] [Server thread/INFO]: [CHAT] Percentage of damaged blocks: 12.5
[17:03:59] [Server thread/INFO]: [CHAT] Wood : 5
[17:03:59] [Server thread/INFO]: [CHAT] Stone : 3
[17:03:59] [Server thread/INFO]: [CHAT] Seconds to complete repair: 120
[17:03:59] [Server thread/INFO]: [CHAT] Money to complete repair: 50
";

#[test]
fn minimal_log_end_to_end() {
    let parser = LogParser::default();
    let records = parser.parse_str(MINIMAL_LOG);
    assert_eq!(records.len(), 2);

    let first = records[0].result.as_ref().expect("first event decodes");
    assert_eq!(
        first.materials,
        vec![("Wood".to_string(), 5), ("Stone".to_string(), 3)]
    );
    assert_eq!(first.delay, 120);
    assert!(first.started, "in-progress marker is within the lookahead");

    let second = records[1].result.as_ref().expect("second event decodes");
    assert_eq!(second.materials, vec![("Iron Ingot".to_string(), 9)]);
    assert_eq!(second.cost.as_f64(), 12.5);
    assert!(!second.started);
}

#[test]
fn extended_log_end_to_end() {
    let parser = LogParser::new(ParserConfig {
        schema: Schema::Extended,
        ..ParserConfig::default()
    });
    let records = parser.parse_str(EXTENDED_LOG);
    assert_eq!(records.len(), 1);

    let repair = records[0].result.as_ref().expect("extended event decodes");
    assert_eq!(repair.block_count, Some(250));
    assert_eq!(repair.percent_damaged.map(|p| p.as_f64()), Some(12.5));
    assert_eq!(repair.materials.len(), 2);
}

#[test]
fn pairing_policy_is_swappable_without_touching_the_pipeline() {
    // A log that restarts mid-event: one open marker, two close markers.
    let log = "\
[10:00:00] [Server thread/INFO]: [CHAT] SUPPLIES NEEDED
[10:00:00] [Server thread/INFO]: [CHAT] Wood : 1
[10:00:00] [Server thread/INFO]: [CHAT] Seconds to complete repair: 10
[10:00:00] [Server thread/INFO]: [CHAT] Money to complete repair: 5
[10:00:01] [Server thread/INFO]: [CHAT] Money to complete repair: 5
";
    let permissive = LogParser::default().parse_str(log);
    assert_eq!(permissive.len(), 2, "reuse-open pairs the second close too");

    let strict = LogParser::new(ParserConfig {
        pairing: PairingPolicy::ClearAfterClose,
        ..ParserConfig::default()
    })
    .parse_str(log);
    assert_eq!(strict.len(), 1);
}

#[test]
fn display_strings_chunk_within_the_transport_limit() {
    let parser = LogParser::default();
    let lines: Vec<String> = parser
        .parse_str(MINIMAL_LOG)
        .iter()
        .filter_map(|record| record.result.as_ref().ok().map(ToString::to_string))
        .collect();
    assert_eq!(lines.len(), 2);

    // Wide enough for both lines.
    let one = chunk_messages(&lines, 2000);
    assert_eq!(one.len(), 1);

    // Too narrow for two lines, wide enough for each.
    let per_line = chunk_messages(&lines, lines[0].len().max(lines[1].len()) + 1);
    assert_eq!(per_line.len(), 2);
}
