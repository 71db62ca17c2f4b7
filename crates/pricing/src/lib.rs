//! # Repaircost Pricing
//!
//! Price-table snapshots and the repair cost rule.
//!
//! A [`PriceTable`] is an immutable mapping from material name to unit
//! price, loaded from a TOML file or built in memory. [`total_cost`]
//! combines one decoded [`repaircost_log::Repair`] with a snapshot:
//! the flat cost quoted by the log plus quantity × unit price per material.
//! A material missing from the table is a pricing failure naming that
//! material, scoped to the one repair being priced.

mod cost;
mod error;
mod table;

pub use cost::total_cost;
pub use error::{PricingError, Result};
pub use table::PriceTable;
