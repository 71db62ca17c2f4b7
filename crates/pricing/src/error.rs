use thiserror::Error;

/// Result type for pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors that can occur while loading a price table or pricing a repair
#[derive(Error, Debug)]
pub enum PricingError {
    /// A repair references a material the table does not price
    #[error("{material} is not in the price table")]
    UnknownMaterial { material: String },

    /// The price table file could not be read
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The price table file is not a valid TOML mapping
    #[error("invalid price table: {0}")]
    InvalidTable(#[from] toml::de::Error),
}
