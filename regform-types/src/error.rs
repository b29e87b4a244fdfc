/// Error type for building a field catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// Two descriptors share an id.
    #[error("Duplicate field id: {0}")]
    DuplicateId(String),
}

/// Error type for program configuration checks.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No program type selected")]
    MissingProgramType,

    #[error("Program name is blank")]
    BlankProgramName,

    #[error("Fee '{name}' must be a non-negative amount, got {value}")]
    InvalidFee { name: &'static str, value: f64 },

    #[error("Unknown layout style: {0}")]
    UnknownLayout(String),
}

impl ConfigError {
    /// Check if this error comes from an incomplete wizard step rather than bad data.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::MissingProgramType | Self::BlankProgramName)
    }
}
