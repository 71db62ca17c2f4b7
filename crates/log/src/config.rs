use serde::{Deserialize, Serialize};

use crate::scanner::PairingPolicy;

/// Default number of lines scanned past the cost line for the started marker
pub const STARTED_LOOKAHEAD: usize = 5;

/// Marker strings framing a repair event in the chat log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Substring opening an event (the supplies header)
    pub open: String,

    /// Substring closing an event (the flat-cost line)
    pub close: String,

    /// Chat framing stripped from every payload line
    pub chat: String,

    /// Payload announcing a repair already underway with no workers assigned
    pub started: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: "SUPPLIES NEEDED".to_string(),
            close: "Money to complete repair: ".to_string(),
            chat: "[CHAT] ".to_string(),
            started: "Repair in progress. Assigned workers: 0".to_string(),
        }
    }
}

/// Which field layout the log was written with.
///
/// Variants share the splitter and scalar decoders; only the fixed offsets
/// inside a boundary pair differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schema {
    /// Header, materials, delay, cost
    #[default]
    Minimal,

    /// Header, damaged-block count, damage percentage, materials, delay, cost
    Extended,
}

impl Schema {
    /// Lines occupied by the event header before the first material line
    pub(crate) const fn header_lines(self) -> usize {
        match self {
            Self::Minimal => 1,
            Self::Extended => 3,
        }
    }

    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Extended => "extended",
        }
    }
}

/// Configuration for one parse pass over a log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Field layout to decode records with
    pub schema: Schema,

    /// How an open marker pairs with subsequent close markers
    pub pairing: PairingPolicy,

    /// Marker strings delimiting and framing events
    pub markers: Markers,

    /// Maximum lines scanned past the cost line for the started marker
    pub started_lookahead: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            schema: Schema::default(),
            pairing: PairingPolicy::default(),
            markers: Markers::default(),
            started_lookahead: STARTED_LOOKAHEAD,
        }
    }
}

impl ParserConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.markers.open.is_empty() {
            return Err("open marker must not be empty".to_string());
        }
        if self.markers.close.is_empty() {
            return Err("close marker must not be empty".to_string());
        }
        if self.markers.chat.is_empty() {
            return Err("chat marker must not be empty".to_string());
        }
        Ok(())
    }
}
