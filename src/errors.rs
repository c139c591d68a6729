/// Main error type for the core substrate
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    // === Multiton Lifecycle Errors ===
    #[error("Core already exists for multiton key: {key}")]
    CoreAlreadyExists { key: String },

    #[error("Core registry was dropped while key {key} was still bound")]
    CoreRegistryGone { key: String },

    // === Notifier Errors ===
    #[error("Notifier used before multiton key binding: {context}")]
    NotifierUnbound { context: String },

    // === Registrant Errors ===
    #[error("Registrant failure: {name}: {source}")]
    Registrant {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("{failed} of {total} parallel sub-commands failed: {reasons:?}")]
    SubCommandsFailed {
        failed: usize,
        total: usize,
        reasons: Vec<String>,
    },

    // === General System Errors ===
    #[error("Internal error: {component}: {reason}")]
    Internal { component: String, reason: String },
}

impl CoreError {
    /// Wrap an arbitrary registrant failure so it can travel through the bus.
    pub fn registrant(name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Registrant {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Convenience type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
