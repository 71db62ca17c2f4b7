use crate::config::ParserConfig;
use crate::error::Result;
use crate::record::Repair;
use crate::scanner::{self, Boundary};

/// One detected event with its decode outcome.
///
/// Failures stay in the batch: a structural failure aborts only its own
/// record, never the pass.
#[derive(Debug, Clone)]
pub struct ParsedRecord {
    /// The boundary pair the record was decoded from
    pub boundary: Boundary,

    /// The decoded repair, or the failure that aborted it
    pub result: Result<Repair>,
}

/// Main parser interface for one fully materialized log.
///
/// The pipeline is synchronous and single-threaded; independent invocations
/// over independent logs need no coordination.
pub struct LogParser {
    config: ParserConfig,
}

impl LogParser {
    /// Create a new parser with configuration
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        config
            .validate()
            .expect("Invalid parser configuration provided");
        Self { config }
    }

    /// Parse a full log given as one string
    pub fn parse_str(&self, content: &str) -> Vec<ParsedRecord> {
        let lines: Vec<&str> = content.lines().collect();
        self.parse_lines(&lines)
    }

    /// Parse an already materialized line sequence.
    ///
    /// Boundary scanning never rejects input; decode failures are collected
    /// per record and logged as they occur.
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<ParsedRecord> {
        let boundaries =
            scanner::scan_boundaries(lines, &self.config.markers, self.config.pairing);
        log::debug!("detected {} candidate repair event(s)", boundaries.len());

        boundaries
            .into_iter()
            .map(|boundary| {
                let result = Repair::decode(
                    lines,
                    boundary,
                    self.config.schema,
                    &self.config.markers,
                    self.config.started_lookahead,
                );
                if let Err(error) = &result {
                    log::warn!(
                        "could not decode event at lines {}..={}: {error}",
                        boundary.open,
                        boundary.close
                    );
                }
                ParsedRecord { boundary, result }
            })
            .collect()
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Schema;
    use crate::error::ParseError;

    const LOG: &str = "\
[08:15:40] [Server thread/INFO]: joined the game
[08:15:42] [Server thread/INFO]: [CHAT] SUPPLIES NEEDED
[08:15:42] [Server thread/INFO]: [CHAT] Wood : 5
[08:15:42] [Server thread/INFO]: [CHAT] Stone : 3
[08:15:42] [Server thread/INFO]: [CHAT] Seconds to complete repair: 120
[08:15:42] [Server thread/INFO]: [CHAT] Money to complete repair: 50
[08:20:00] [Server thread/INFO]: [CHAT] SUPPLIES NEEDED
[08:20:00] [Server thread/INFO]: [CHAT] Iron Ingot : nine
[08:20:00] [Server thread/INFO]: [CHAT] Seconds to complete repair: 30
[08:20:00] [Server thread/INFO]: [CHAT] Money to complete repair: 10
";

    #[test]
    fn test_structural_failure_aborts_only_its_record() {
        let parser = LogParser::default();
        let records = parser.parse_str(LOG);
        assert_eq!(records.len(), 2);
        assert!(records[0].result.is_ok());
        assert!(records[1].result.is_err());

        let repair = records[0].result.as_ref().unwrap();
        assert_eq!(repair.materials.len(), 2);
        assert_eq!(repair.delay, 120);
    }

    #[test]
    fn test_parse_lines_matches_parse_str() {
        let parser = LogParser::default();
        let lines: Vec<&str> = LOG.lines().collect();
        let from_lines = parser.parse_lines(&lines);
        let from_str = parser.parse_str(LOG);
        assert_eq!(from_lines.len(), from_str.len());
        for (a, b) in from_lines.iter().zip(&from_str) {
            assert_eq!(a.boundary, b.boundary);
            assert_eq!(a.result.is_ok(), b.result.is_ok());
        }
    }

    #[test]
    fn test_extended_schema_needs_room_for_damage_fields() {
        let parser = LogParser::new(ParserConfig {
            schema: Schema::Extended,
            ..ParserConfig::default()
        });
        let records = parser.parse_str(LOG);
        assert_eq!(records.len(), 2);
        // The second event spans too few lines to hold the damage fields.
        assert!(matches!(
            records[1].result,
            Err(ParseError::TruncatedRecord { .. })
        ));
    }
}
