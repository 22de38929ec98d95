use std::collections::BTreeMap;

/// Per-field error messages keyed by request field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A whole-object rule rejected the input. The reason is shown verbatim.
    #[error("Validation rejected: {0}")]
    ValidationRejected(String),

    /// One or more request fields were missing or malformed.
    #[error("Invalid fields: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    FieldErrors(FieldErrors),

    #[error("Invalid page")]
    InvalidPage,
}

impl CoreError {
    /// Build a [`CoreError::FieldErrors`] carrying a single message.
    pub fn field(name: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(name.to_string(), vec![message.into()]);
        CoreError::FieldErrors(errors)
    }
}
