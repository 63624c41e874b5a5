//! Error types for client generation.

use thiserror::Error;

/// Error type for generation runs.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The unit list could not be deserialized.
    #[error("failed to parse schema IR: {0}")]
    Parse(#[from] serde_json::Error),

    /// A declaration is missing a structurally required attribute. The whole
    /// run fails; rendering assumes structural completeness.
    #[error("schema error in '{unit}': {detail}")]
    Schema {
        /// Identifier of the offending unit.
        unit: String,
        /// What is missing.
        detail: String,
    },

    /// The referencing and defining units do not share the configured source
    /// root, so a relative import path between them is undefined.
    #[error("cannot compute an import path from '{from}' to '{to}': both units must live under '{root}'")]
    PathResolution {
        /// Identifier of the referencing unit.
        from: String,
        /// Identifier of the defining unit.
        to: String,
        /// Configured source root.
        root: String,
    },

    /// Two distinct defining units resolve the same symbol name onto the same
    /// import edge. Merging them would silently alias one type to the other.
    #[error("import collision in '{unit}': symbol '{symbol}' from '{specifier}' is declared by both '{first}' and '{second}'")]
    ImportCollision {
        /// Identifier of the referencing unit.
        unit: String,
        /// Module specifier of the shared edge.
        specifier: String,
        /// The colliding symbol name.
        symbol: String,
        /// Unit that first produced the entry.
        first: String,
        /// Unit that produced the conflicting entry.
        second: String,
    },
}

impl GenerateError {
    /// Creates a schema error for the given unit.
    pub fn schema(unit: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Schema {
            unit: unit.into(),
            detail: detail.into(),
        }
    }
}
