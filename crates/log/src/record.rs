use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

use crate::config::{Markers, Schema};
use crate::error::{ParseError, Result};
use crate::scalar::{self, Number};
use crate::scanner::Boundary;
use crate::split;

/// One decoded repair event.
///
/// Immutable once decoded; lives for the duration of one parse-and-render
/// pass. Construction always goes through [`Repair::decode`] with a closed
/// boundary pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repair {
    /// Time of day the supplies header was logged
    pub start: NaiveTime,

    /// Damaged-block count (extended schema only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_count: Option<i64>,

    /// Damage percentage (extended schema only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_damaged: Option<Number>,

    /// Required materials in order of appearance in the log
    pub materials: Vec<(String, i64)>,

    /// Seconds until the repair completes
    pub delay: i64,

    /// Flat currency cost quoted by the log, material cost excluded
    pub cost: Number,

    /// Whether a zero-worker "repair in progress" marker followed the event
    pub started: bool,
}

impl Repair {
    /// Decode the record delimited by `boundary` from the full line sequence.
    ///
    /// Field offsets are fixed relative to the boundary and depend on the
    /// schema. Any required-field failure aborts the record, naming the
    /// field; the trailing started-marker lookahead never fails, it only
    /// defaults to `false`.
    pub fn decode<S: AsRef<str>>(
        lines: &[S],
        boundary: Boundary,
        schema: Schema,
        markers: &Markers,
        started_lookahead: usize,
    ) -> Result<Self> {
        let Boundary { open, close } = boundary;
        if close >= lines.len() {
            return Err(ParseError::BoundaryOutOfRange {
                close,
                line_count: lines.len(),
            });
        }
        let header_lines = schema.header_lines();
        // The delay line must sit strictly between the header and the cost line.
        if close < open + header_lines + 1 {
            return Err(ParseError::TruncatedRecord {
                open,
                close,
                schema: schema.as_str(),
            });
        }

        let line = |index: usize| lines[index].as_ref();

        let start = scalar::decode_timestamp(line(open)).map_err(|e| e.in_field("start time"))?;

        let (block_count, percent_damaged) = match schema {
            Schema::Minimal => (None, None),
            Schema::Extended => {
                let blocks = decode_integer(line(open + 1), markers, "damaged blocks")?;
                let percent = decode_field(line(open + 2), markers, "percent damaged")?;
                (Some(blocks), Some(percent))
            }
        };

        let delay_index = close - 1;
        let mut materials = Vec::new();
        for index in (open + header_lines)..delay_index {
            let payload =
                split::chat_payload(line(index), &markers.chat).map_err(|e| e.in_field("materials"))?;
            let material =
                scalar::decode_material(payload).map_err(|e| e.in_field("materials"))?;
            materials.push(material);
        }

        let delay = decode_integer(line(delay_index), markers, "delay")?;
        let cost = decode_field(line(close), markers, "cost")?;

        // Bounded lookahead past the cost line; a non-chat or non-matching
        // line simply does not count as the marker.
        let started = lines
            .iter()
            .skip(close + 1)
            .take(started_lookahead)
            .any(|candidate| {
                split::chat_payload(candidate.as_ref(), &markers.chat)
                    .map(|payload| payload.contains(&markers.started))
                    .unwrap_or(false)
            });

        Ok(Self {
            start,
            block_count,
            percent_damaged,
            materials,
            delay,
            cost,
            started,
        })
    }
}

/// Strip chat framing and decode a `label: value` numeric field.
fn decode_field(raw: &str, markers: &Markers, field: &'static str) -> Result<Number> {
    let payload = split::chat_payload(raw, &markers.chat).map_err(|e| e.in_field(field))?;
    scalar::decode_numeric(payload).map_err(|e| e.in_field(field))
}

/// Like [`decode_field`], for fields where the log must quote an integer.
fn decode_integer(raw: &str, markers: &Markers, field: &'static str) -> Result<i64> {
    let number = decode_field(raw, markers, field)?;
    number.as_int().ok_or_else(|| ParseError::ExpectedInteger {
        field,
        value: number.to_string(),
    })
}

impl fmt::Display for Repair {
    /// Canonical display string: `<time>: <summary>, $<cost> & <delay>s`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.start.format("%H:%M:%S"))?;
        if let Some(blocks) = self.block_count {
            write!(f, "{blocks} blocks")?;
            if let Some(percent) = self.percent_damaged {
                write!(f, " ({percent}% damaged)")?;
            }
            write!(f, ", ")?;
        }
        let count = self.materials.len();
        let plural = if count == 1 { "" } else { "s" };
        write!(
            f,
            "{count} material{plural}, ${} & {}s",
            self.cost, self.delay
        )
    }
}
