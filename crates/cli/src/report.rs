use repaircost_log::{ParsedRecord, Repair};
use repaircost_pricing::{total_cost, PriceTable};
use serde::Serialize;

/// Build the operator-facing report: a count summary followed by one line
/// per detected event, successes and failures inline.
///
/// Pricing and decode failures are scoped to their own line; a batch with one
/// bad record still reports every other record.
pub fn report_lines(records: &[ParsedRecord], prices: &PriceTable) -> Vec<String> {
    let decoded = records.iter().filter(|r| r.result.is_ok()).count();
    let plural = if decoded == 1 { "" } else { "s" };
    let mut lines = vec![format!("{decoded} repair{plural} found")];
    lines.extend(records.iter().map(|record| render_record(record, prices)));
    lines
}

fn render_record(record: &ParsedRecord, prices: &PriceTable) -> String {
    match &record.result {
        Ok(repair) => match total_cost(repair, prices) {
            Ok(total) => format!("{repair} -> total ${total:.2}"),
            Err(error) => format!("{repair} -> {error}"),
        },
        Err(error) => format!(
            "lines {}..={}: {error}",
            record.boundary.open, record.boundary.close
        ),
    }
}

/// Machine-readable outcome for one detected event
#[derive(Serialize)]
pub struct RepairOutcome<'a> {
    pub open_line: usize,
    pub close_line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repair: Option<&'a Repair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Serialize every outcome in the batch, pricing each decoded repair
pub fn json_outcomes<'a>(
    records: &'a [ParsedRecord],
    prices: &PriceTable,
) -> Vec<RepairOutcome<'a>> {
    records
        .iter()
        .map(|record| {
            let (repair, total, error) = match &record.result {
                Ok(repair) => match total_cost(repair, prices) {
                    Ok(total) => (Some(repair), Some(total), None),
                    Err(err) => (Some(repair), None, Some(err.to_string())),
                },
                Err(err) => (None, None, Some(err.to_string())),
            };
            RepairOutcome {
                open_line: record.boundary.open,
                close_line: record.boundary.close,
                repair,
                total_cost: total,
                error,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use repaircost_log::LogParser;

    const LOG: &str = "\
[08:15:42] [Server thread/INFO]: [CHAT] SUPPLIES NEEDED
[08:15:42] [Server thread/INFO]: [CHAT] Wood : 5
[08:15:42] [Server thread/INFO]: [CHAT] Stone : 3
[08:15:42] [Server thread/INFO]: [CHAT] Seconds to complete repair: 120
[08:15:42] [Server thread/INFO]: [CHAT] Money to complete repair: 50
[09:00:00] [Server thread/INFO]: [CHAT] SUPPLIES NEEDED
[09:00:00] [Server thread/INFO]: [CHAT] Obsidian : 2
[09:00:00] [Server thread/INFO]: [CHAT] Seconds to complete repair: 30
[09:00:00] [Server thread/INFO]: [CHAT] Money to complete repair: 10
";

    fn records() -> Vec<ParsedRecord> {
        LogParser::default().parse_str(LOG)
    }

    fn prices() -> PriceTable {
        PriceTable::new([("Wood", 2.0), ("Stone", 4.0)])
    }

    #[test]
    fn test_report_heads_with_the_count() {
        let lines = report_lines(&records(), &prices());
        assert_eq!(lines[0], "2 repairs found");
    }

    #[test]
    fn test_priced_repair_reports_the_total() {
        let lines = report_lines(&records(), &prices());
        assert_eq!(lines[1], "08:15:42: 2 materials, $50 & 120s -> total $72.00");
    }

    #[test]
    fn test_pricing_failure_stays_inline() {
        let lines = report_lines(&records(), &prices());
        // The unpriceable repair fails on its own line; the batch survives.
        assert_eq!(
            lines[2],
            "09:00:00: 1 material, $10 & 30s -> Obsidian is not in the price table"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_decode_failure_stays_inline() {
        let broken = LOG.replace("Stone : 3", "Stone : three");
        let records = LogParser::default().parse_str(&broken);
        let lines = report_lines(&records, &prices());
        assert_eq!(lines[0], "1 repair found");
        assert!(lines[1].contains("'three' is not an integer quantity"));
    }

    #[test]
    fn test_json_outcomes_split_success_and_error() {
        let records = records();
        let outcomes = json_outcomes(&records, &prices());
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].total_cost, Some(72.0));
        assert!(outcomes[0].error.is_none());
        assert!(outcomes[1].total_cost.is_none());
        assert_eq!(
            outcomes[1].error.as_deref(),
            Some("Obsidian is not in the price table")
        );
    }
}
