//! Errors raised while building action creators

/// Failure to build an action creator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// The bare type tag is already registered and the factory is strict
    DuplicateType { action_type: String },
}

impl std::fmt::Display for FactoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactoryError::DuplicateType { action_type } => {
                write!(f, "Duplicate action type: {}", action_type)
            }
        }
    }
}

impl std::error::Error for FactoryError {}
