use clap::ValueEnum;

use repaircost_log::{PairingPolicy, Schema};

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum SchemaFlag {
    Minimal,
    Extended,
}

impl SchemaFlag {
    pub(crate) const fn as_domain(self) -> Schema {
        match self {
            SchemaFlag::Minimal => Schema::Minimal,
            SchemaFlag::Extended => Schema::Extended,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum PairingFlag {
    /// An open marker may pair with every later close marker
    ReuseOpen,
    /// An open marker pairs with exactly one close marker
    ClearAfterClose,
}

impl PairingFlag {
    pub(crate) const fn as_domain(self) -> PairingPolicy {
        match self {
            PairingFlag::ReuseOpen => PairingPolicy::ReuseOpen,
            PairingFlag::ClearAfterClose => PairingPolicy::ClearAfterClose,
        }
    }
}
