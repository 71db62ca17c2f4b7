//! # Repaircost Log
//!
//! Repair-event extraction from unstructured, line-oriented server chat logs.
//!
//! ## Architecture
//!
//! ```text
//! Raw lines
//!     │
//!     ├──> Boundary Scanner (open/close markers → boundary pairs)
//!     │
//!     ├──> Record Decoder (fixed offsets per schema → Repair)
//!     │    ├─> chat-line framing strip
//!     │    ├─> timestamp / numeric / material decoders
//!     │    └─> bounded lookahead for the started marker
//!     │
//!     └──> Chunked Renderer (report lines → size-bounded chunks)
//! ```
//!
//! The pipeline is synchronous over one fully materialized line sequence.
//! Decompression, charset handling and log acquisition happen upstream;
//! pricing lives in the companion `repaircost-pricing` crate.
//!
//! ## Example
//!
//! ```rust
//! use repaircost_log::{LogParser, ParserConfig};
//!
//! let log = "\
//! [08:15:42] [Server thread/INFO]: [CHAT] SUPPLIES NEEDED
//! [08:15:42] [Server thread/INFO]: [CHAT] Wood : 5
//! [08:15:42] [Server thread/INFO]: [CHAT] Seconds to complete repair: 120
//! [08:15:42] [Server thread/INFO]: [CHAT] Money to complete repair: 50
//! ";
//!
//! let parser = LogParser::new(ParserConfig::default());
//! let records = parser.parse_str(log);
//! assert_eq!(records.len(), 1);
//! let repair = records[0].result.as_ref().unwrap();
//! assert_eq!(repair.delay, 120);
//! ```

mod config;
mod error;
mod parser;
mod record;
mod render;
mod scalar;
mod scanner;
mod split;

pub use config::{Markers, ParserConfig, Schema, STARTED_LOOKAHEAD};
pub use error::{ParseError, Result};
pub use parser::{LogParser, ParsedRecord};
pub use record::Repair;
pub use render::chunk_messages;
pub use scalar::{decode_material, decode_numeric, decode_timestamp, Number};
pub use scanner::{scan_boundaries, Boundary, PairingPolicy};
pub use split::{chat_payload, split_once_exact};
