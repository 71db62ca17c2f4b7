use serde::{Deserialize, Serialize};

use crate::config::Markers;

/// Line-index range delimiting one repair event in the log.
///
/// Only closed pairs are constructible: `close` is strictly after `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Boundary {
    /// Index of the line carrying the open marker
    pub open: usize,

    /// Index of the line carrying the close marker
    pub close: usize,
}

impl Boundary {
    /// Construct a closed boundary; `None` unless `close > open`.
    #[must_use]
    pub const fn closed(open: usize, close: usize) -> Option<Self> {
        if close > open {
            Some(Self { open, close })
        } else {
            None
        }
    }

    /// Number of lines spanned, both marker lines included
    #[must_use]
    pub const fn span(self) -> usize {
        self.close - self.open + 1
    }
}

/// How a pending open marker pairs with subsequent close markers.
///
/// Production logs have been seen restarting mid-event, so the observed
/// pairing rule lets an open stay armed after matching. The rule is isolated
/// here so it can be swapped without touching the rest of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairingPolicy {
    /// A pending open stays armed after pairing and may match further closes
    #[default]
    ReuseOpen,

    /// A pending open pairs with exactly one close, then disarms
    ClearAfterClose,
}

impl PairingPolicy {
    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReuseOpen => "reuse-open",
            Self::ClearAfterClose => "clear-after-close",
        }
    }
}

/// Scan the full line sequence once and emit one boundary per detected event.
///
/// Never fails: malformed pairings surface later, when record decode cannot
/// resolve the fields inside the boundary.
pub fn scan_boundaries<S: AsRef<str>>(
    lines: &[S],
    markers: &Markers,
    policy: PairingPolicy,
) -> Vec<Boundary> {
    let mut boundaries = Vec::new();
    let mut pending: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.contains(&markers.open) {
            pending = Some(index);
        } else if line.contains(&markers.close) {
            if let Some(open) = pending {
                // The close line can never be the pending line itself, so the
                // pair is always closed.
                if let Some(boundary) = Boundary::closed(open, index) {
                    boundaries.push(boundary);
                }
                if policy == PairingPolicy::ClearAfterClose {
                    pending = None;
                }
            }
        }
    }

    boundaries
}
